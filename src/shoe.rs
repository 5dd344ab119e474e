//! The shoe: the working set of undealt cards for the current round.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// One card drawn from the shoe.
///
/// `reshuffled` reports that the shoe was empty and was rebuilt before the
/// draw completed. This is a recovery notice for the caller to surface to the
/// player, not an error condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    /// The card removed from the top of the shoe.
    pub card: Card,
    /// Whether the shoe was rebuilt and reshuffled to satisfy this draw.
    pub reshuffled: bool,
}

/// An ordered pile of one or more shuffled 52-card decks.
///
/// The shoe owns its RNG so that a round's entire card sequence is determined
/// by the seed it was created with.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Undealt cards; draws come off the end.
    cards: Vec<Card>,
    /// Number of decks per rebuild.
    decks: u8,
    /// Random number generator for shuffles.
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Builds a freshly shuffled shoe of `decks` decks.
    #[must_use]
    pub fn new(decks: u8, mut rng: ChaCha8Rng) -> Self {
        let cards = build_shuffled(decks, &mut rng);
        Self { cards, decks, rng }
    }

    /// Removes and returns one card from the top of the shoe.
    ///
    /// An empty shoe is rebuilt to a full shuffled `decks`-deck shoe first;
    /// the returned [`Draw`] flags the rebuild so the caller can notify the
    /// player. A draw therefore always succeeds.
    #[expect(
        clippy::missing_panics_doc,
        reason = "the rebuild above guarantees at least one card"
    )]
    pub fn draw(&mut self) -> Draw {
        let reshuffled = self.cards.is_empty();
        if reshuffled {
            self.cards = build_shuffled(self.decks, &mut self.rng);
        }

        let card = self
            .cards
            .pop()
            .expect("shoe was rebuilt to a full deck above");
        Draw { card, reshuffled }
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of decks the shoe rebuilds to.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Replaces the undealt cards with `cards`, drawn from the end.
    ///
    /// Intended for scripted rounds and tests; the deck count used for
    /// rebuilds is unchanged.
    pub fn load(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }
}

/// Enumerates every rank and suit combination for each deck, then shuffles.
fn build_shuffled(decks: u8, rng: &mut ChaCha8Rng) -> Vec<Card> {
    let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

    for _ in 0..decks {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
    }

    cards.shuffle(rng);
    cards
}
