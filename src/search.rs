//! Exhaustive minimax search over duplicated game states.
//!
//! Every node expands into at most 16 successors: two draw sources (discard
//! pile, then stock pile), each offering seven swaps and one decline. No
//! pruning is applied, so the node count grows as `16^depth`.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;
use crate::state::GameState;

/// Result of a minimax search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Score backed up to the chosen successor.
    pub score: i32,
    /// The chosen successor, or the input state when searched at depth 0.
    pub state: GameState,
    /// Number of nodes visited, including the root.
    pub nodes: u64,
}

/// Where the drawn card of a successor came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Discard,
    Stock,
}

impl Source {
    fn draw(self, state: &mut GameState) -> Option<Card> {
        match self {
            Self::Discard => state.pop_discard().ok(),
            Self::Stock => state.pop_stock().ok(),
        }
    }
}

/// Appends every successor reachable by drawing from `source`.
///
/// Swaps come first in hand order, then the decline. If the source pile is
/// empty nothing is appended.
fn expand(state: &GameState, source: Source, out: &mut Vec<GameState>) {
    let mut drawn_state = state.duplicate();
    let Some(card) = source.draw(&mut drawn_state) else {
        return;
    };

    let hand_len = drawn_state
        .hand(drawn_state.turn())
        .map_or(0, Hand::len);
    for index in 0..hand_len {
        let mut next = drawn_state.duplicate();
        if next.discard_current_player_card(index).is_err()
            || next.add_current_player_card(card).is_err()
        {
            continue;
        }
        next.next_turn();
        out.push(next);
    }

    drawn_state.push_discard(card);
    drawn_state.next_turn();
    out.push(drawn_state);
}

/// Lists the successors of `state` in search order.
///
/// Discard-pile candidates precede stock-pile candidates; within each, hand
/// swaps come in increasing index order and the decline comes last. A
/// declined card always lands on the discard pile.
#[must_use]
pub fn successors(state: &GameState) -> Vec<GameState> {
    let mut out = Vec::with_capacity(16);
    expand(state, Source::Discard, &mut out);
    expand(state, Source::Stock, &mut out);
    out
}

/// Runs a full-width minimax search of `depth` plies from `state`.
///
/// At depth 0 the state is scored with [`GameState::score`] and returned
/// unchanged. Otherwise each successor is searched one ply shallower and the
/// one with the highest score, as seen by the player who receives the turn
/// (`+score` for player 0, `-score` for player 1), is kept. Candidates are
/// scanned in [`successors`] order and a later candidate replaces an equally
/// good earlier one. The returned score is the chosen candidate's own backed
/// up score, not the sign-adjusted one.
///
/// A node with no successors (both piles empty) is scored as a leaf.
#[must_use]
pub fn minimax(state: &GameState, depth: u32) -> SearchOutcome {
    if depth == 0 {
        return SearchOutcome {
            score: state.score(),
            state: state.duplicate(),
            nodes: 1,
        };
    }

    let mut candidates = successors(state);
    let mut nodes = 1;
    let mut best: Option<(i32, i32, usize)> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        let outcome = minimax(candidate, depth - 1);
        nodes += outcome.nodes;

        let multiplier = if candidate.turn() == 0 { 1 } else { -1 };
        let adjusted = outcome.score * multiplier;
        if best.is_none_or(|(best_adjusted, _, _)| adjusted >= best_adjusted) {
            best = Some((adjusted, outcome.score, index));
        }
    }

    match best {
        Some((_, score, index)) => SearchOutcome {
            score,
            state: candidates.swap_remove(index),
            nodes,
        },
        None => SearchOutcome {
            score: state.score(),
            state: state.duplicate(),
            nodes,
        },
    }
}

/// Lets the automated opponent move on `state`.
///
/// The caller is expected to replace its whole state with the returned one,
/// not to copy over just the opponent's hand.
#[must_use]
pub fn run_opponent_search(state: &GameState, depth: u32) -> SearchOutcome {
    log::debug!(
        "opponent search: depth {depth}, turn {}, stock {}, discard {}",
        state.turn(),
        state.stock_len(),
        state.discard_len()
    );

    let outcome = minimax(state, depth);

    log::debug!(
        "opponent search done: score {}, {} nodes",
        outcome.score,
        outcome.nodes
    );
    outcome
}
