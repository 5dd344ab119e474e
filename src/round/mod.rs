//! The table state machine: round setup, dealing, turn sequencing.

extern crate alloc;

use alloc::vec::Vec;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::config::RoundConfig;
use crate::error::ActionError;
use crate::hand::{DealerHand, SeatHand};
use crate::render::CardFace;
use crate::result::RoundSummary;
use crate::shoe::Shoe;

mod actions;
mod dealer;
pub mod state;

pub use state::{DealerStep, Phase, SeatView, TableView};

/// All mutable state of one round.
///
/// Built fresh by `start_round` and discarded wholesale on restart or new
/// table; nothing is patched in place across rounds, so the monotonic seat
/// flags can never leak between rounds.
#[derive(Debug)]
struct Round {
    /// Configuration fixed when the round started.
    config: RoundConfig,
    /// The undealt cards.
    shoe: Shoe,
    /// The dealer's hand.
    dealer: DealerHand,
    /// Seat hands, seat index ascending.
    seats: Vec<SeatHand>,
    /// The seat currently allowed to act; `== seats.len()` once every seat
    /// has resolved and the dealer plays.
    active_seat: usize,
    /// Current phase; never [`Phase::Setup`] while a round exists.
    phase: Phase,
    /// Adjudicated summary, set on entering [`Phase::Results`].
    summary: Option<RoundSummary>,
}

/// A blackjack table driving one round at a time.
///
/// The table is the single owner of all round state and every command takes
/// `&mut self`: there is deliberately no interior mutability and no locking,
/// because no two logical flows ever touch a round concurrently. The only
/// scheduling seam is the dealer's turn, exposed one decision at a time
/// through [`Table::dealer_step`] so a UI can pause between draws.
///
/// # Example
///
/// ```
/// use pontoon::{Difficulty, Phase, RoundConfig, Table};
///
/// let mut table = Table::new(42);
/// table.configure(RoundConfig::new(1, Difficulty::Easy, 1).unwrap()).unwrap();
/// table.start_round().unwrap();
/// assert_eq!(table.phase(), Phase::PlayerTurn);
/// ```
#[derive(Debug)]
pub struct Table {
    /// The submitted configuration, cleared by `new_table`.
    config: Option<RoundConfig>,
    /// The round in progress, `None` in [`Phase::Setup`].
    round: Option<Round>,
    /// Master generator; each round's shoe gets an independent child.
    rng: ChaCha8Rng,
    /// Cards to install in the next round's shoe, for scripted rounds.
    scripted_shoe: Option<Vec<Card>>,
}

impl Table {
    /// Creates a table in [`Phase::Setup`] with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            config: None,
            round: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
            scripted_shoe: None,
        }
    }

    /// Submits a validated round configuration.
    ///
    /// `RoundConfig` construction already rejected invalid values, so this
    /// only checks the phase: the configuration of a running round is fixed.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn configure(&mut self, config: RoundConfig) -> Result<(), ActionError> {
        if self.round.is_some() {
            return Err(ActionError::InvalidPhase);
        }

        self.config = Some(config);
        Ok(())
    }

    /// Starts a round from the submitted configuration.
    ///
    /// Builds a fresh shuffled shoe, deals the dealer two cards (the second
    /// concealed) and each seat two cards, and hands the turn to seat 0.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or no configuration
    /// has been submitted.
    pub fn start_round(&mut self) -> Result<(), ActionError> {
        if self.round.is_some() {
            return Err(ActionError::InvalidPhase);
        }
        let config = self.config.ok_or(ActionError::NotConfigured)?;

        let child = ChaCha8Rng::seed_from_u64(self.rng.next_u64());
        let mut shoe = Shoe::new(config.decks(), child);
        if let Some(cards) = self.scripted_shoe.take() {
            shoe.load(cards);
        }

        let mut dealer = DealerHand::new();
        dealer.add_card(shoe.draw().card);
        dealer.add_card(shoe.draw().card);

        let mut seats = Vec::with_capacity(config.players() as usize);
        for _ in 0..config.players() {
            let mut hand = SeatHand::new();
            hand.add_card(shoe.draw().card);
            hand.add_card(shoe.draw().card);
            seats.push(hand);
        }

        self.round = Some(Round {
            config,
            shoe,
            dealer,
            seats,
            active_seat: 0,
            phase: Phase::PlayerTurn,
            summary: None,
        });

        Ok(())
    }

    /// Discards the finished round and starts a new one with the same
    /// configuration and a brand-new shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in [`Phase::Results`].
    pub fn restart(&mut self) -> Result<(), ActionError> {
        if self.phase() != Phase::Results {
            return Err(ActionError::InvalidPhase);
        }

        self.round = None;
        self.start_round()
    }

    /// Discards the round and the configuration, returning to
    /// [`Phase::Setup`]; a subsequent round needs a fresh `configure`.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in [`Phase::Results`].
    pub fn new_table(&mut self) -> Result<(), ActionError> {
        if self.phase() != Phase::Results {
            return Err(ActionError::InvalidPhase);
        }

        self.round = None;
        self.config = None;
        Ok(())
    }

    /// Replaces the next round's shoe contents, drawn from the end.
    ///
    /// If a round is in progress the current undealt cards are replaced
    /// instead. Intended for scripted rounds and tests.
    pub fn load_shoe(&mut self, cards: Vec<Card>) {
        if let Some(round) = &mut self.round {
            round.shoe.load(cards);
        } else {
            self.scripted_shoe = Some(cards);
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.round.as_ref().map_or(Phase::Setup, |round| round.phase)
    }

    /// Returns the submitted configuration, if any.
    #[must_use]
    pub const fn config(&self) -> Option<RoundConfig> {
        self.config
    }

    /// Returns the seat currently allowed to act.
    #[must_use]
    pub fn active_seat(&self) -> Option<usize> {
        let round = self.round.as_ref()?;
        (round.phase == Phase::PlayerTurn).then_some(round.active_seat)
    }

    /// Returns the seat hands, seat index ascending; empty in setup.
    #[must_use]
    pub fn seats(&self) -> &[SeatHand] {
        match &self.round {
            Some(round) => round.seats.as_slice(),
            None => &[],
        }
    }

    /// Returns the dealer's hand, if a round exists.
    #[must_use]
    pub fn dealer(&self) -> Option<&DealerHand> {
        self.round.as_ref().map(|round| &round.dealer)
    }

    /// Returns the adjudicated summary, present only in [`Phase::Results`].
    #[must_use]
    pub fn summary(&self) -> Option<&RoundSummary> {
        self.round.as_ref().and_then(|round| round.summary.as_ref())
    }

    /// Returns the number of undealt cards, 0 in setup.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.round
            .as_ref()
            .map_or(0, |round| round.shoe.remaining())
    }

    /// Returns the dealer's cards with per-card visibility applied.
    ///
    /// The first card is always face-up; later cards stay face-down until
    /// the hole is revealed at the start of the dealer's turn.
    #[must_use]
    pub fn dealer_faces(&self) -> Vec<CardFace> {
        self.round.as_ref().map_or_else(Vec::new, |round| {
            dealer_faces(&round.dealer)
        })
    }

    /// Builds an owned snapshot of everything a renderer needs.
    #[must_use]
    pub fn view(&self) -> TableView {
        let Some(round) = self.round.as_ref() else {
            return TableView {
                phase: Phase::Setup,
                dealer: Vec::new(),
                dealer_value: None,
                seats: Vec::new(),
                active_seat: None,
                summary: None,
            };
        };

        let seats = round
            .seats
            .iter()
            .map(|hand| SeatView {
                cards: hand.cards().to_vec(),
                value: hand.value(),
                busted: hand.is_busted(),
                stood: hand.has_stood(),
            })
            .collect();

        TableView {
            phase: round.phase,
            dealer: dealer_faces(&round.dealer),
            dealer_value: round
                .dealer
                .is_hole_revealed()
                .then(|| round.dealer.value()),
            seats,
            active_seat: self.active_seat(),
            summary: round.summary.clone(),
        }
    }

    /// Returns the round in progress or the phase error every player command
    /// starts with.
    fn round_mut(&mut self) -> Result<&mut Round, ActionError> {
        self.round.as_mut().ok_or(ActionError::InvalidPhase)
    }
}

/// Applies dealer-card visibility: position 0 up, the rest down until reveal.
fn dealer_faces(dealer: &DealerHand) -> Vec<CardFace> {
    dealer
        .cards()
        .iter()
        .enumerate()
        .map(|(position, card)| {
            if position == 0 || dealer.is_hole_revealed() {
                CardFace::Up(*card)
            } else {
                CardFace::Down
            }
        })
        .collect()
}
