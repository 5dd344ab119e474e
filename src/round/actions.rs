//! Player commands: hit and stand.

use crate::error::ActionError;
use crate::shoe::Draw;

use super::{Phase, Round, Table};

impl Table {
    /// Player command: the active seat draws one card.
    ///
    /// A draw that takes the hand over 21 marks the seat busted and advances
    /// the turn. The returned [`Draw`] carries the reshuffle notice when the
    /// shoe had to be rebuilt mid-round.
    ///
    /// # Errors
    ///
    /// Returns an error if no player turn is in progress or the active seat
    /// has already resolved; the table is left unchanged.
    pub fn hit(&mut self) -> Result<Draw, ActionError> {
        let round = self.round_mut()?;
        round.ensure_active_seat()?;

        let draw = round.shoe.draw();
        let seat = round.active_seat;
        round.seats[seat].add_card(draw.card);

        if round.seats[seat].is_busted() {
            round.advance_seat();
        }

        Ok(draw)
    }

    /// Player command: the active seat ends its turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no player turn is in progress or the active seat
    /// has already resolved; the table is left unchanged.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        let round = self.round_mut()?;
        round.ensure_active_seat()?;

        let seat = round.active_seat;
        round.seats[seat].stand();
        round.advance_seat();

        Ok(())
    }
}

impl Round {
    /// Checks that a player command targets an actionable seat.
    fn ensure_active_seat(&self) -> Result<(), ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidPhase);
        }

        // Turn sequencing never leaves a resolved seat active, but a command
        // racing a stale UI is rejected rather than trusted.
        if !self.seats[self.active_seat].is_unresolved() {
            return Err(ActionError::SeatResolved);
        }

        Ok(())
    }

    /// Hands the turn to the next seat, or to the dealer after the last one.
    ///
    /// Entering the dealer's turn reveals the hole card.
    pub(super) fn advance_seat(&mut self) {
        self.active_seat += 1;

        if self.active_seat >= self.seats.len() {
            self.phase = Phase::DealerTurn;
            self.dealer.reveal_hole();
        }
    }
}
