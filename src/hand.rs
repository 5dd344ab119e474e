//! Seat and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// Calculates the blackjack value of an arbitrary sequence of cards.
///
/// Face cards count 10 and aces count 11, then aces are demoted to 1 one at
/// a time while the total exceeds 21. The result is order-independent; a
/// value above 21 after adjustment is a bust. A two-card 21 carries no
/// special status here.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        }
        value = value.saturating_add(card.rank.base_value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    value
}

/// The hand belonging to one numbered seat.
///
/// The `busted` and `stood` flags are monotonic: once set they stay set until
/// a new round replaces the hand entirely.
#[derive(Debug, Clone, Default)]
pub struct SeatHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hand went over 21. Terminal.
    busted: bool,
    /// Whether the seat voluntarily ended its turn. Terminal.
    stood: bool,
}

impl SeatHand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            busted: false,
            stood: false,
        }
    }

    /// Adds a card to the hand, marking the hand busted if it goes over 21.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        if hand_value(&self.cards) > 21 {
            self.busted = true;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand has busted.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.busted
    }

    /// Returns whether the seat has stood.
    #[must_use]
    pub const fn has_stood(&self) -> bool {
        self.stood
    }

    /// Marks the seat as having stood.
    pub const fn stand(&mut self) {
        self.stood = true;
    }

    /// Returns whether the seat can still act (neither busted nor stood).
    #[must_use]
    pub const fn is_unresolved(&self) -> bool {
        !self.busted && !self.stood
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The dealer's hand.
///
/// The first card is always face-up; every later card is concealed until the
/// hole is revealed at the start of the dealer's turn.
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the always-visible up card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
