//! Rendering collaborator contract.
//!
//! The engine never touches display assets. A presentation layer implements
//! [`CardAssets`] — a total lookup from rank and suit to whatever it uses as
//! an asset handle, plus a distinct handle for a face-down card — and
//! resolves each [`CardFace`] of a snapshot through it. Because [`Rank`] and
//! [`Suit`] are closed enums there is no unmatched-lookup failure path.

use serde::{Deserialize, Serialize};

use crate::card::{Card, Rank, Suit};

/// Lookup from a card to a display asset, supplied by the presentation layer.
pub trait CardAssets {
    /// Opaque asset handle; the engine only passes it through.
    type Asset;

    /// Returns the asset for the face of the given rank and suit.
    fn face(&self, rank: Rank, suit: Suit) -> Self::Asset;

    /// Returns the asset for a face-down card.
    fn back(&self) -> Self::Asset;
}

/// One card position as a renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    /// A face-up card.
    Up(Card),
    /// A concealed card; the renderer shows the card back.
    Down,
}

impl CardFace {
    /// Resolves this position to a display asset.
    pub fn asset<A: CardAssets>(&self, assets: &A) -> A::Asset {
        match self {
            Self::Up(card) => assets.face(card.rank, card.suit),
            Self::Down => assets.back(),
        }
    }

    /// Returns the card if it is face-up.
    #[must_use]
    pub const fn card(&self) -> Option<Card> {
        match self {
            Self::Up(card) => Some(*card),
            Self::Down => None,
        }
    }
}
