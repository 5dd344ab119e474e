//! Table integration tests.

use std::str::FromStr;

use pontoon::{
    ActionError, Card, ConfigError, DECK_SIZE, DealerOutcome, DealerStep, Difficulty, Phase, Rank,
    RoundConfig, SeatOutcome, Shoe, Suit, Table, hand_value,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Scripts the next round's shoe so that cards come out in `draws` order.
fn script_shoe(table: &mut Table, draws: &[Card]) {
    let mut cards: Vec<Card> = draws.to_vec();
    cards.reverse();
    table.load_shoe(cards);
}

fn configured_table(players: u8, difficulty: Difficulty, decks: u8) -> Table {
    let mut table = Table::new(7);
    let config = RoundConfig::new(players, difficulty, decks).unwrap();
    table.configure(config).unwrap();
    table
}

#[test]
fn hand_value_is_order_invariant() {
    let cards = [
        card(Rank::Five, Suit::Hearts),
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Clubs),
    ];
    let expected = hand_value(&cards);

    let permutations = [
        [cards[0], cards[1], cards[2]],
        [cards[0], cards[2], cards[1]],
        [cards[1], cards[0], cards[2]],
        [cards[1], cards[2], cards[0]],
        [cards[2], cards[0], cards[1]],
        [cards[2], cards[1], cards[0]],
    ];
    for permutation in permutations {
        assert_eq!(hand_value(&permutation), expected);
    }
}

#[test]
fn hand_value_without_aces_is_the_plain_sum() {
    let cards = [
        card(Rank::Two, Suit::Hearts),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Queen, Suit::Spades),
    ];
    assert_eq!(hand_value(&cards), 21);

    let faces = [
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Jack, Suit::Clubs),
        card(Rank::King, Suit::Spades),
    ];
    assert_eq!(hand_value(&faces), 30);
}

#[test]
fn two_aces_and_a_king_evaluate_to_twelve() {
    let cards = [
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Clubs),
    ];
    assert_eq!(hand_value(&cards), 12);
}

#[test]
fn shoe_has_full_composition_per_deck() {
    use rand::SeedableRng;

    let decks = 3u8;
    let mut shoe = Shoe::new(decks, rand_chacha::ChaCha8Rng::seed_from_u64(1));
    assert_eq!(shoe.remaining(), DECK_SIZE * decks as usize);

    let mut drawn = Vec::new();
    for _ in 0..shoe.remaining() {
        drawn.push(shoe.draw().card);
    }

    for rank in Rank::ALL {
        let count = drawn.iter().filter(|c| c.rank == rank).count();
        assert_eq!(count, 4 * decks as usize, "rank {rank:?}");
    }
    for suit in Suit::ALL {
        let count = drawn.iter().filter(|c| c.suit == suit).count();
        assert_eq!(count, 13 * decks as usize, "suit {suit:?}");
    }
}

#[test]
fn drawing_shrinks_the_shoe_by_one() {
    use rand::SeedableRng;

    let mut shoe = Shoe::new(1, rand_chacha::ChaCha8Rng::seed_from_u64(2));
    let before = shoe.remaining();
    let draw = shoe.draw();
    assert!(!draw.reshuffled);
    assert_eq!(shoe.remaining(), before - 1);
}

#[test]
fn drawing_from_an_empty_shoe_rebuilds_and_notifies() {
    use rand::SeedableRng;

    let mut shoe = Shoe::new(2, rand_chacha::ChaCha8Rng::seed_from_u64(3));
    shoe.load(Vec::new());
    assert_eq!(shoe.remaining(), 0);

    let draw = shoe.draw();
    assert!(draw.reshuffled);
    assert_eq!(shoe.remaining(), 2 * DECK_SIZE - 1);
}

#[test]
fn difficulty_thresholds_and_parsing() {
    assert_eq!(Difficulty::Easy.hit_threshold(), 17);
    assert_eq!(Difficulty::Medium.hit_threshold(), 18);
    assert_eq!(Difficulty::Hard.hit_threshold(), 19);

    assert_eq!(Difficulty::from_str("easy").unwrap(), Difficulty::Easy);
    assert_eq!(Difficulty::from_str("medium").unwrap(), Difficulty::Medium);
    assert_eq!(Difficulty::from_str("hard").unwrap(), Difficulty::Hard);
    assert_eq!(
        Difficulty::from_str("nightmare").unwrap_err(),
        ConfigError::UnknownDifficulty
    );
}

#[test]
fn config_rejects_out_of_range_values() {
    assert_eq!(
        RoundConfig::new(0, Difficulty::Easy, 1).unwrap_err(),
        ConfigError::PlayerCount(0)
    );
    assert_eq!(
        RoundConfig::new(5, Difficulty::Easy, 1).unwrap_err(),
        ConfigError::PlayerCount(5)
    );
    assert_eq!(
        RoundConfig::new(1, Difficulty::Easy, 0).unwrap_err(),
        ConfigError::DeckCount(0)
    );
    assert_eq!(
        RoundConfig::new(1, Difficulty::Easy, 4).unwrap_err(),
        ConfigError::DeckCount(4)
    );

    let config = RoundConfig::new(2, Difficulty::Medium, 3).unwrap();
    assert_eq!(config.with_players(5).unwrap_err(), ConfigError::PlayerCount(5));
    assert_eq!(config.with_decks(0).unwrap_err(), ConfigError::DeckCount(0));
}

#[test]
fn start_round_deals_two_cards_everywhere() {
    let mut table = configured_table(3, Difficulty::Easy, 2);
    table.start_round().unwrap();

    assert_eq!(table.phase(), Phase::PlayerTurn);
    assert_eq!(table.active_seat(), Some(0));
    assert_eq!(table.dealer().unwrap().len(), 2);
    assert!(!table.dealer().unwrap().is_hole_revealed());
    assert_eq!(table.seats().len(), 3);
    for seat in table.seats() {
        assert_eq!(seat.len(), 2);
        assert!(seat.is_unresolved());
    }
    assert_eq!(table.cards_remaining(), 2 * DECK_SIZE - 8);
}

#[test]
fn start_round_requires_a_configuration() {
    let mut table = Table::new(1);
    assert_eq!(table.start_round().unwrap_err(), ActionError::NotConfigured);
    assert_eq!(table.phase(), Phase::Setup);
}

#[test]
fn scenario_push_at_seventeen() {
    let mut table = configured_table(1, Difficulty::Easy, 1);
    script_shoe(
        &mut table,
        &[
            card(Rank::Ten, Suit::Hearts),    // dealer up
            card(Rank::Seven, Suit::Clubs),   // dealer hole
            card(Rank::Ten, Suit::Spades),    // seat 0
            card(Rank::Seven, Suit::Diamonds), // seat 0
        ],
    );
    table.start_round().unwrap();

    table.stand().unwrap();
    assert_eq!(table.phase(), Phase::DealerTurn);

    let draws = table.dealer_play().unwrap();
    assert!(draws.is_empty(), "dealer already holds the threshold");

    let summary = table.summary().unwrap();
    assert_eq!(summary.seats[0].outcome, SeatOutcome::Push);
    assert_eq!(summary.seats[0].value, 17);
    assert_eq!(summary.dealer, DealerOutcome::Stood(17));
}

#[test]
fn scenario_twenty_one_beats_dealer_twenty() {
    let mut table = configured_table(1, Difficulty::Easy, 1);
    script_shoe(
        &mut table,
        &[
            card(Rank::Ten, Suit::Hearts),  // dealer up
            card(Rank::Four, Suit::Clubs),  // dealer hole
            card(Rank::Ace, Suit::Spades),  // seat 0
            card(Rank::King, Suit::Hearts), // seat 0
            card(Rank::Six, Suit::Diamonds), // dealer draw to 20
        ],
    );
    table.start_round().unwrap();

    table.stand().unwrap();
    let draws = table.dealer_play().unwrap();
    assert_eq!(draws.len(), 1);

    let summary = table.summary().unwrap();
    assert_eq!(summary.seats[0].outcome, SeatOutcome::Won);
    assert_eq!(summary.seats[0].value, 21);
    assert_eq!(summary.dealer, DealerOutcome::Stood(20));
}

#[test]
fn scenario_bust_on_hit_is_terminal() {
    let mut table = configured_table(1, Difficulty::Easy, 1);
    script_shoe(
        &mut table,
        &[
            card(Rank::Ten, Suit::Hearts),   // dealer up
            card(Rank::Nine, Suit::Clubs),   // dealer hole (19, stands)
            card(Rank::Ten, Suit::Spades),   // seat 0
            card(Rank::Nine, Suit::Diamonds), // seat 0
            card(Rank::Five, Suit::Hearts),  // seat 0 hit, 24
        ],
    );
    table.start_round().unwrap();

    let draw = table.hit().unwrap();
    assert_eq!(draw.card.rank, Rank::Five);
    assert!(table.seats()[0].is_busted());
    assert_eq!(table.phase(), Phase::DealerTurn);

    table.dealer_play().unwrap();
    let summary = table.summary().unwrap();
    assert_eq!(summary.seats[0].outcome, SeatOutcome::Busted);
}

#[test]
fn scenario_two_seats_mixed_outcomes() {
    let mut table = configured_table(2, Difficulty::Easy, 1);
    script_shoe(
        &mut table,
        &[
            card(Rank::Ten, Suit::Hearts),    // dealer up
            card(Rank::Nine, Suit::Clubs),    // dealer hole (19)
            card(Rank::Ten, Suit::Spades),    // seat 0
            card(Rank::Eight, Suit::Diamonds), // seat 0 (18)
            card(Rank::Ten, Suit::Clubs),     // seat 1
            card(Rank::Nine, Suit::Hearts),   // seat 1 (19)
            card(Rank::Four, Suit::Spades),   // seat 1 hit, 23
        ],
    );
    table.start_round().unwrap();

    table.stand().unwrap();
    assert_eq!(table.active_seat(), Some(1));

    table.hit().unwrap();
    assert!(table.seats()[1].is_busted());
    assert_eq!(table.phase(), Phase::DealerTurn);

    table.dealer_play().unwrap();
    let summary = table.summary().unwrap();
    assert_eq!(summary.seats[0].outcome, SeatOutcome::Lost);
    assert_eq!(summary.seats[1].outcome, SeatOutcome::Busted);
    assert_eq!(summary.dealer, DealerOutcome::Stood(19));
}

#[test]
fn dealer_plays_out_even_when_every_seat_busted() {
    let mut table = configured_table(1, Difficulty::Easy, 1);
    script_shoe(
        &mut table,
        &[
            card(Rank::Ten, Suit::Hearts),   // dealer up
            card(Rank::Two, Suit::Clubs),    // dealer hole (12)
            card(Rank::Ten, Suit::Spades),   // seat 0
            card(Rank::Nine, Suit::Diamonds), // seat 0
            card(Rank::Five, Suit::Hearts),  // seat 0 hit, 24
            card(Rank::Nine, Suit::Spades),  // dealer draw to 21
        ],
    );
    table.start_round().unwrap();

    table.hit().unwrap();
    assert_eq!(table.phase(), Phase::DealerTurn);

    let draws = table.dealer_play().unwrap();
    assert_eq!(draws.len(), 1);

    let summary = table.summary().unwrap();
    assert_eq!(summary.seats[0].outcome, SeatOutcome::Busted);
    assert_eq!(summary.dealer, DealerOutcome::Stood(21));
}

#[test]
fn dealer_steps_one_draw_at_a_time() {
    let mut table = configured_table(1, Difficulty::Hard, 1);
    script_shoe(
        &mut table,
        &[
            card(Rank::Five, Suit::Hearts),  // dealer up
            card(Rank::Six, Suit::Clubs),    // dealer hole (11)
            card(Rank::Ten, Suit::Spades),   // seat 0
            card(Rank::Nine, Suit::Diamonds), // seat 0
            card(Rank::Four, Suit::Hearts),  // dealer draw (15)
            card(Rank::Four, Suit::Clubs),   // dealer draw (19, stands)
        ],
    );
    table.start_round().unwrap();
    table.stand().unwrap();

    let step = table.dealer_step().unwrap();
    assert!(matches!(step, DealerStep::Drew(draw) if draw.card.rank == Rank::Four));
    assert_eq!(table.phase(), Phase::DealerTurn);

    // Player commands stay rejected between dealer steps.
    assert_eq!(table.hit().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(table.stand().unwrap_err(), ActionError::InvalidPhase);

    assert!(matches!(table.dealer_step().unwrap(), DealerStep::Drew(_)));
    assert_eq!(table.dealer_step().unwrap(), DealerStep::Stood);
    assert_eq!(table.phase(), Phase::Results);
    assert!(table.summary().is_some());

    assert_eq!(table.dealer_step().unwrap_err(), ActionError::InvalidPhase);
}

#[test]
fn medium_dealer_hits_a_seventeen() {
    let mut table = configured_table(1, Difficulty::Medium, 1);
    script_shoe(
        &mut table,
        &[
            card(Rank::Ten, Suit::Hearts),   // dealer up
            card(Rank::Seven, Suit::Clubs),  // dealer hole (17)
            card(Rank::Ten, Suit::Spades),   // seat 0
            card(Rank::Eight, Suit::Diamonds), // seat 0
            card(Rank::Five, Suit::Hearts),  // dealer draw, 22
        ],
    );
    table.start_round().unwrap();
    table.stand().unwrap();

    let draws = table.dealer_play().unwrap();
    assert_eq!(draws.len(), 1, "threshold 18 hits a 17");

    let summary = table.summary().unwrap();
    assert_eq!(summary.dealer, DealerOutcome::Busted);
    assert_eq!(summary.seats[0].outcome, SeatOutcome::Won);
}

#[test]
fn mid_round_reshuffle_is_reported_not_fatal() {
    let mut table = configured_table(1, Difficulty::Easy, 1);
    script_shoe(
        &mut table,
        &[
            card(Rank::Ten, Suit::Hearts),  // dealer up
            card(Rank::Nine, Suit::Clubs),  // dealer hole
            card(Rank::Two, Suit::Spades),  // seat 0
            card(Rank::Three, Suit::Diamonds), // seat 0
        ],
    );
    table.start_round().unwrap();
    assert_eq!(table.cards_remaining(), 0);

    let draw = table.hit().unwrap();
    assert!(draw.reshuffled);
    assert_eq!(table.cards_remaining(), DECK_SIZE - 1);
    assert_eq!(table.phase(), Phase::PlayerTurn, "a 2-3 hand cannot bust");
}

#[test]
fn invalid_transitions_leave_the_table_unchanged() {
    let mut table = Table::new(9);
    assert_eq!(table.hit().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(table.stand().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(table.dealer_step().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(table.restart().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(table.new_table().unwrap_err(), ActionError::InvalidPhase);

    let config = RoundConfig::new(1, Difficulty::Easy, 1).unwrap();
    table.configure(config).unwrap();
    table.start_round().unwrap();
    let before = table.view();

    assert_eq!(table.start_round().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(table.configure(config).unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(table.restart().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(table.dealer_step().unwrap_err(), ActionError::InvalidPhase);

    assert_eq!(table.view(), before);
}

#[test]
fn restart_builds_an_independent_round() {
    let mut table = configured_table(2, Difficulty::Easy, 1);
    table.start_round().unwrap();

    table.stand().unwrap();
    table.stand().unwrap();
    table.dealer_play().unwrap();
    assert_eq!(table.phase(), Phase::Results);

    table.restart().unwrap();
    assert_eq!(table.phase(), Phase::PlayerTurn);
    assert_eq!(table.active_seat(), Some(0));
    assert!(table.summary().is_none());
    for seat in table.seats() {
        assert_eq!(seat.len(), 2);
        assert!(seat.is_unresolved());
    }
    // A brand-new shoe: full deck minus the six freshly dealt cards.
    assert_eq!(table.cards_remaining(), DECK_SIZE - 6);
    assert!(!table.dealer().unwrap().is_hole_revealed());
}

#[test]
fn new_table_discards_round_and_configuration() {
    let mut table = configured_table(1, Difficulty::Easy, 1);
    table.start_round().unwrap();
    table.stand().unwrap();
    table.dealer_play().unwrap();

    table.new_table().unwrap();
    assert_eq!(table.phase(), Phase::Setup);
    assert_eq!(table.config(), None);
    assert_eq!(table.start_round().unwrap_err(), ActionError::NotConfigured);
}

#[test]
fn two_fresh_rounds_share_no_card_sequence() {
    let mut first_cards = Vec::new();
    let mut second_cards = Vec::new();

    let mut table = configured_table(1, Difficulty::Easy, 1);
    table.start_round().unwrap();
    first_cards.extend(table.seats()[0].cards().iter().copied());
    first_cards.extend(table.dealer().unwrap().cards().iter().copied());
    table.stand().unwrap();
    table.dealer_play().unwrap();
    table.new_table().unwrap();

    table
        .configure(RoundConfig::new(1, Difficulty::Easy, 1).unwrap())
        .unwrap();
    table.start_round().unwrap();
    second_cards.extend(table.seats()[0].cards().iter().copied());
    second_cards.extend(table.dealer().unwrap().cards().iter().copied());

    // Both rounds start from a full independent shoe.
    assert_eq!(table.cards_remaining(), DECK_SIZE - 4);
    assert_ne!(
        first_cards, second_cards,
        "independent shuffles should not repeat the deal"
    );
}

#[test]
fn summary_display_matches_the_results_modal() {
    let mut table = configured_table(2, Difficulty::Easy, 1);
    script_shoe(
        &mut table,
        &[
            card(Rank::Ten, Suit::Hearts),    // dealer up
            card(Rank::Nine, Suit::Clubs),    // dealer hole (19)
            card(Rank::Ten, Suit::Spades),    // seat 0 (20)
            card(Rank::Ten, Suit::Diamonds),  // seat 0
            card(Rank::Ten, Suit::Clubs),     // seat 1 (19)
            card(Rank::Nine, Suit::Hearts),   // seat 1
        ],
    );
    table.start_round().unwrap();
    table.stand().unwrap();
    table.stand().unwrap();
    table.dealer_play().unwrap();

    let text = table.summary().unwrap().to_string();
    assert_eq!(text, "Player 1: Won!\nPlayer 2: Push!\nDealer: 19\n");
}

#[test]
fn dealer_view_conceals_the_hole_until_reveal() {
    use pontoon::CardFace;

    let mut table = configured_table(1, Difficulty::Easy, 1);
    table.start_round().unwrap();

    let view = table.view();
    assert_eq!(view.dealer.len(), 2);
    assert!(matches!(view.dealer[0], CardFace::Up(_)));
    assert_eq!(view.dealer[1], CardFace::Down);
    assert_eq!(view.dealer_value, None);
    assert_eq!(view.active_seat, Some(0));

    table.stand().unwrap();
    table.dealer_play().unwrap();

    let view = table.view();
    assert!(view.dealer.iter().all(|face| matches!(face, CardFace::Up(_))));
    assert_eq!(view.dealer_value, Some(table.dealer().unwrap().value()));
    assert!(view.summary.is_some());
}
