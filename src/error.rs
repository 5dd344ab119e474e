//! Error types for table operations.

use thiserror::Error;

/// Errors raised while validating a round configuration.
///
/// Configuration is rejected before any round state is created; a failed
/// `configure` leaves the table exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Seat count outside 1..=4.
    #[error("player count must be between 1 and 4, got {0}")]
    PlayerCount(u8),
    /// Deck count outside 1..=3.
    #[error("deck count must be between 1 and 3, got {0}")]
    DeckCount(u8),
    /// Difficulty name not one of easy, medium, hard.
    #[error("unknown dealer difficulty")]
    UnknownDifficulty,
}

/// Errors raised by table commands issued in the wrong phase or for a
/// resolved seat.
///
/// Every rejected command is a no-op: the table state is left unchanged and
/// fully resumable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The command is not valid in the current phase.
    #[error("invalid phase for this action")]
    InvalidPhase,
    /// `start_round` was called before any configuration was submitted.
    #[error("no round configuration submitted")]
    NotConfigured,
    /// The active seat has already busted or stood.
    #[error("seat has already busted or stood")]
    SeatResolved,
}
