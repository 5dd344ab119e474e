//! A multi-seat blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that manages the full round flow:
//! shoe construction and shuffling, sequential seat turns, a
//! difficulty-parameterized dealer, and result adjudication. Rendering is a
//! collaborator, not a concern: the table exposes snapshots with per-card
//! visibility and the [`render::CardAssets`] lookup contract.
//!
//! # Example
//!
//! ```no_run
//! use pontoon::{Difficulty, RoundConfig, Table};
//!
//! let mut table = Table::new(42);
//! let config = RoundConfig::new(2, Difficulty::Medium, 1).unwrap();
//! table.configure(config).unwrap();
//! table.start_round().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod config;
pub mod error;
pub mod hand;
pub mod render;
pub mod result;
pub mod round;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use config::{Difficulty, MAX_DECKS, MAX_PLAYERS, RoundConfig};
pub use error::{ActionError, ConfigError};
pub use hand::{DealerHand, SeatHand, hand_value};
pub use render::{CardAssets, CardFace};
pub use result::{DealerOutcome, RoundSummary, SeatOutcome, SeatResult};
pub use round::{DealerStep, Phase, SeatView, Table, TableView};
pub use shoe::{Draw, Shoe};
