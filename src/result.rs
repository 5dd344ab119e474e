//! Round outcome types and the result adjudicator.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::hand::{DealerHand, SeatHand};

/// Final outcome for one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatOutcome {
    /// The seat went over 21; loses regardless of the dealer.
    Busted,
    /// The dealer busted, or the seat finished higher than the dealer.
    Won,
    /// The seat tied the dealer's value.
    Push,
    /// The dealer finished higher than the seat.
    Lost,
}

/// Final outcome for the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealerOutcome {
    /// The dealer went over 21.
    Busted,
    /// The dealer stood at the given value.
    Stood(u8),
}

/// Adjudicated result for one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatResult {
    /// The 0-based seat index.
    pub seat: usize,
    /// The seat's final hand value.
    pub value: u8,
    /// The outcome against the dealer.
    pub outcome: SeatOutcome,
}

/// Adjudicated result of a whole round.
///
/// Seat results are ordered by seat index ascending; that ordering is a
/// presentation contract for summary rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Per-seat results, seat index ascending.
    pub seats: Vec<SeatResult>,
    /// The dealer's line.
    pub dealer: DealerOutcome,
}

impl RoundSummary {
    /// Compares every finished seat hand to the dealer's final hand.
    ///
    /// A seat's `busted` flag is authoritative and beats any value
    /// comparison; otherwise a dealer bust is a win for the seat, and ties
    /// push.
    #[must_use]
    pub fn adjudicate(seats: &[SeatHand], dealer: &DealerHand) -> Self {
        let dealer_value = dealer.value();
        let dealer_bust = dealer.is_bust();

        let seats = seats
            .iter()
            .enumerate()
            .map(|(seat, hand)| {
                let value = hand.value();
                let outcome = if hand.is_busted() {
                    SeatOutcome::Busted
                } else if dealer_bust || value > dealer_value {
                    SeatOutcome::Won
                } else if value == dealer_value {
                    SeatOutcome::Push
                } else {
                    SeatOutcome::Lost
                };

                SeatResult {
                    seat,
                    value,
                    outcome,
                }
            })
            .collect();

        let dealer = if dealer_bust {
            DealerOutcome::Busted
        } else {
            DealerOutcome::Stood(dealer_value)
        };

        Self { seats, dealer }
    }
}

impl fmt::Display for RoundSummary {
    /// Renders the results-modal text, one line per seat plus the dealer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.seats {
            let word = match result.outcome {
                SeatOutcome::Busted => "Busted",
                SeatOutcome::Won => "Won",
                SeatOutcome::Push => "Push",
                SeatOutcome::Lost => "Lost",
            };
            writeln!(f, "Player {}: {word}!", result.seat + 1)?;
        }

        match self.dealer {
            DealerOutcome::Busted => writeln!(f, "Dealer: Busted!"),
            DealerOutcome::Stood(value) => writeln!(f, "Dealer: {value}"),
        }
    }
}
