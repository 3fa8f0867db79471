//! CLI example: play against the minimax opponent in a terminal.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use sevenrs::{Card, Game, GameOptions, GameState, Phase};

fn main() {
    println!("Seven-card draw and discard (type 'q' to quit, 'n' for a new game)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let mut game = Game::new(options, seed);

    loop {
        print_table(&game);

        match game.phase() {
            Phase::Draw => {
                let input = prompt_line("Draw from (s)tock or (d)iscard: ");
                let drawn = match input.as_str() {
                    "q" | "quit" => break,
                    "n" | "new" => {
                        game.new_round();
                        continue;
                    }
                    "s" | "stock" => game.draw_from_stock(),
                    "d" | "discard" => game.draw_from_discard(),
                    _ => {
                        println!("Unknown choice.");
                        continue;
                    }
                };

                match drawn {
                    Ok(card) => println!("You drew {card}."),
                    Err(err) => println!("Draw error: {err}"),
                }
            }
            Phase::Discard => {
                let input =
                    prompt_line("Hand position to swap (1-7), or 'x' to discard the drawn card: ");
                let result = match input.as_str() {
                    "q" | "quit" => break,
                    "x" => game.discard_drawn(),
                    _ => match input.parse::<usize>() {
                        Ok(position) if position >= 1 => game.commit_discard(position - 1),
                        _ => {
                            println!("Please enter a number from 1 to 7.");
                            continue;
                        }
                    },
                };

                match result {
                    Ok(score) => println!("Opponent moved. Score: {score}"),
                    Err(err) => println!("Discard error: {err}"),
                }
            }
        }
    }

    println!("Goodbye.");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    read_choice(&mut io::stdin().lock())
}

/// Reads one trimmed, lowercased line; end of input counts as quitting.
fn read_choice<R: BufRead>(reader: &mut R) -> String {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => "q".to_string(),
        Ok(_) => input.trim().to_lowercase(),
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, card)| format!("{}:{card}", i + 1))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_top(card: Option<Card>) -> String {
    card.map_or_else(|| "(empty)".to_string(), |card| card.to_string())
}

fn print_table(game: &Game) {
    let state: &GameState = game.state();

    println!();
    if let Some(score) = game.last_score() {
        println!("Score: {score}");
    }
    println!(
        "Stock: {} cards, top hidden | Discard: {}",
        state.stock_len(),
        format_top(state.peek_discard())
    );
    if let Some(card) = game.pending() {
        println!("Holding: {card}");
    }

    let turn = state.turn();
    if let Ok(hand) = state.hand(turn) {
        println!("Your hand (player {turn}): {}", format_cards(hand.cards()));
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::read_choice;

    #[test]
    fn end_of_input_quits() {
        assert_eq!(read_choice(&mut Cursor::new("")), "q");
    }

    #[test]
    fn choice_is_trimmed_and_lowercased() {
        let mut input = Cursor::new(" S \nx\n");
        assert_eq!(read_choice(&mut input), "s");
        assert_eq!(read_choice(&mut input), "x");
        assert_eq!(read_choice(&mut input), "q");
    }
}
