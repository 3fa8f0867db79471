use crate::card::Card;
use crate::error::MoveError;
use crate::search::run_opponent_search;

use super::Game;

impl Game {
    fn ensure_draw_phase(&self) -> Result<(), MoveError> {
        if self.pending.is_some() {
            return Err(MoveError::AlreadyDrawn);
        }
        Ok(())
    }

    /// Runs the opponent search and adopts its state wholesale.
    fn finish_turn(&mut self) -> i32 {
        let outcome = run_opponent_search(&self.state, self.options.search_depth);
        self.state = outcome.state;
        self.last_score = Some(outcome.score);
        outcome.score
    }

    /// Draws the top card of the stock pile into the pending slot.
    ///
    /// # Errors
    ///
    /// Returns an error if a card has already been drawn this turn or the
    /// stock pile is empty.
    pub fn draw_from_stock(&mut self) -> Result<Card, MoveError> {
        self.ensure_draw_phase()?;

        let card = self.state.pop_stock()?;
        self.pending = Some(card);
        Ok(card)
    }

    /// Draws the top card of the discard pile into the pending slot.
    ///
    /// # Errors
    ///
    /// Returns an error if a card has already been drawn this turn or the
    /// discard pile is empty.
    pub fn draw_from_discard(&mut self) -> Result<Card, MoveError> {
        self.ensure_draw_phase()?;

        let card = self.state.pop_discard()?;
        self.pending = Some(card);
        Ok(card)
    }

    /// Swaps the pending card for the hand card at `hand_index`.
    ///
    /// The hand card goes to the discard pile, the pending card joins the
    /// hand, the turn passes and the opponent moves. Returns the opponent's
    /// search score.
    ///
    /// # Errors
    ///
    /// Returns an error if no card has been drawn or `hand_index` is outside
    /// the hand. The pending card is kept in either case.
    pub fn commit_discard(&mut self, hand_index: usize) -> Result<i32, MoveError> {
        let card = self.pending.ok_or(MoveError::NothingDrawn)?;

        let discarded = self.state.discard_current_player_card(hand_index)?;
        self.state.add_current_player_card(card)?;
        self.pending = None;
        self.state.next_turn();
        log::debug!("player swapped {discarded} for {card}");

        Ok(self.finish_turn())
    }

    /// Throws the pending card onto the discard pile without touching the
    /// hand, then passes the turn and lets the opponent move.
    ///
    /// Returns the opponent's search score.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NothingDrawn`] if no card has been drawn.
    pub fn discard_drawn(&mut self) -> Result<i32, MoveError> {
        let card = self.pending.take().ok_or(MoveError::NothingDrawn)?;

        self.state.push_discard(card);
        self.state.next_turn();
        log::debug!("player discarded drawn {card}");

        Ok(self.finish_turn())
    }
}
