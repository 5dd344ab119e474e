//! Dealer auto-play and round adjudication.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::ActionError;
use crate::result::RoundSummary;
use crate::shoe::Draw;

use super::{DealerStep, Phase, Table};

impl Table {
    /// Performs exactly one dealer decision.
    ///
    /// While the dealer's value is below the difficulty's hit threshold one
    /// card is drawn and [`DealerStep::Drew`] is returned; otherwise the
    /// round is adjudicated, the summary stored, and the phase moves to
    /// [`Phase::Results`].
    ///
    /// The engine makes no pause itself: the delay between dealer draws is
    /// the caller's, which schedules the next `dealer_step` after whatever
    /// reveal animation it runs. No player command is accepted in between —
    /// hit and stand are rejected for the whole of the dealer's turn.
    ///
    /// The dealer plays out even when every seat busted, as the table rules
    /// have always shown the dealer's finished hand.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn.
    pub fn dealer_step(&mut self) -> Result<DealerStep, ActionError> {
        let round = self.round_mut()?;
        if round.phase != Phase::DealerTurn {
            return Err(ActionError::InvalidPhase);
        }

        let threshold = round.config.difficulty().hit_threshold();
        if round.dealer.value() < threshold {
            let draw = round.shoe.draw();
            round.dealer.add_card(draw.card);
            return Ok(DealerStep::Drew(draw));
        }

        round.summary = Some(RoundSummary::adjudicate(&round.seats, &round.dealer));
        round.phase = Phase::Results;
        Ok(DealerStep::Stood)
    }

    /// Drives [`Table::dealer_step`] to completion without pauses.
    ///
    /// Returns the dealer's draws in order, reshuffle notices included. The
    /// loop always terminates: every draw raises the hand's hard total by at
    /// least one, so the threshold is reached within a bounded number of
    /// cards regardless of reshuffles.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn.
    pub fn dealer_play(&mut self) -> Result<Vec<Draw>, ActionError> {
        let mut draws = Vec::new();

        loop {
            match self.dealer_step()? {
                DealerStep::Drew(draw) => draws.push(draw),
                DealerStep::Stood => return Ok(draws),
            }
        }
    }
}
