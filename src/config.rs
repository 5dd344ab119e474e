//! Round configuration and the dealer difficulty policy.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Dealer difficulty.
///
/// Difficulty only changes the dealer's stopping rule: the dealer keeps
/// drawing while its hand value is below the hit threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    /// Dealer hits below 17.
    #[default]
    Easy,
    /// Dealer hits below 18.
    Medium,
    /// Dealer hits below 19.
    Hard,
}

impl Difficulty {
    /// Returns the value below which the dealer keeps drawing.
    #[must_use]
    pub const fn hit_threshold(self) -> u8 {
        match self {
            Self::Easy => 17,
            Self::Medium => 18,
            Self::Hard => 19,
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    /// Parses the lowercase difficulty names used by setup forms.
    ///
    /// Unknown names are a configuration error, never a silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ConfigError::UnknownDifficulty),
        }
    }
}

/// Maximum number of seats at a table.
pub const MAX_PLAYERS: u8 = 4;

/// Maximum number of decks in the shoe.
pub const MAX_DECKS: u8 = 3;

/// Validated configuration for one round.
///
/// Immutable once a round starts; the builder-style setters re-validate so an
/// invalid configuration is unrepresentable.
///
/// ```
/// use pontoon::{Difficulty, RoundConfig};
///
/// let config = RoundConfig::new(2, Difficulty::Medium, 1).unwrap();
/// assert_eq!(config.players(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Number of seats (1..=4).
    players: u8,
    /// Dealer difficulty.
    difficulty: Difficulty,
    /// Number of decks in the shoe (1..=3).
    decks: u8,
}

impl RoundConfig {
    /// Creates a configuration, rejecting out-of-range seat or deck counts.
    ///
    /// # Errors
    ///
    /// Returns an error if `players` is not in `1..=4` or `decks` is not in
    /// `1..=3`.
    pub const fn new(players: u8, difficulty: Difficulty, decks: u8) -> Result<Self, ConfigError> {
        if players == 0 || players > MAX_PLAYERS {
            return Err(ConfigError::PlayerCount(players));
        }
        if decks == 0 || decks > MAX_DECKS {
            return Err(ConfigError::DeckCount(decks));
        }

        Ok(Self {
            players,
            difficulty,
            decks,
        })
    }

    /// Returns a copy with the seat count changed.
    ///
    /// # Errors
    ///
    /// Returns an error if `players` is not in `1..=4`.
    pub const fn with_players(self, players: u8) -> Result<Self, ConfigError> {
        Self::new(players, self.difficulty, self.decks)
    }

    /// Returns a copy with the dealer difficulty changed.
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Returns a copy with the deck count changed.
    ///
    /// # Errors
    ///
    /// Returns an error if `decks` is not in `1..=3`.
    pub const fn with_decks(self, decks: u8) -> Result<Self, ConfigError> {
        Self::new(self.players, self.difficulty, decks)
    }

    /// Returns the number of seats.
    #[must_use]
    pub const fn players(self) -> u8 {
        self.players
    }

    /// Returns the dealer difficulty.
    #[must_use]
    pub const fn difficulty(self) -> Difficulty {
        self.difficulty
    }

    /// Returns the number of decks in the shoe.
    #[must_use]
    pub const fn decks(self) -> u8 {
        self.decks
    }
}

impl Default for RoundConfig {
    /// One seat, easy dealer, one deck — the setup form's initial values.
    fn default() -> Self {
        Self {
            players: 1,
            difficulty: Difficulty::Easy,
            decks: 1,
        }
    }
}
