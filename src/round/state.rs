//! Table phase and snapshot types.

extern crate alloc;

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::render::CardFace;
use crate::result::RoundSummary;

/// Phase of the table's round lifecycle.
///
/// `Setup → PlayerTurn → DealerTurn → Results`, then back to `PlayerTurn`
/// (restart, same configuration) or `Setup` (new table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Configuring the table; no round state exists.
    Setup,
    /// Seats act in order; the active seat may hit or stand.
    PlayerTurn,
    /// The dealer auto-plays; no player command is accepted.
    DealerTurn,
    /// The round is adjudicated and the summary is available.
    Results,
}

/// One dealer decision, produced by [`crate::Table::dealer_step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// The dealer was below the hit threshold and drew a card.
    Drew(crate::shoe::Draw),
    /// The dealer reached the threshold and stood; the round moved to
    /// [`Phase::Results`].
    Stood,
}

/// Read-only snapshot of one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    /// Cards in the seat's hand; seat cards are always face-up.
    pub cards: Vec<Card>,
    /// The hand's current value.
    pub value: u8,
    /// Whether the hand has busted.
    pub busted: bool,
    /// Whether the seat has stood.
    pub stood: bool,
}

/// Read-only snapshot of the whole table, for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    /// Current phase.
    pub phase: Phase,
    /// Dealer cards with per-card visibility: the first card is face-up,
    /// later cards face-down until the hole is revealed.
    pub dealer: Vec<CardFace>,
    /// The dealer's full hand value, present once the hole is revealed.
    pub dealer_value: Option<u8>,
    /// Seat snapshots, seat index ascending.
    pub seats: Vec<SeatView>,
    /// The seat currently allowed to act, if any.
    pub active_seat: Option<usize>,
    /// The adjudicated summary, present only in [`Phase::Results`].
    pub summary: Option<RoundSummary>,
}
