//! Hot-seat CLI table demo.
//!
//! Shows the round flow end to end, including the dealer pacing contract:
//! each `dealer_step` is separated by a sleep so every dealer card is seen
//! landing, exactly where a graphical front end would run its animation.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::str::FromStr;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use pontoon::{Card, CardFace, DealerStep, Difficulty, Phase, Rank, RoundConfig, Suit, Table};

const DEALER_PAUSE: Duration = Duration::from_millis(1000);

fn main() {
    println!("Pontoon table (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut table = Table::new(seed);

    loop {
        if table.phase() == Phase::Setup {
            let Some(config) = prompt_config() else {
                println!("Goodbye.");
                return;
            };
            if let Err(err) = table.configure(config) {
                println!("Configuration error: {err}");
                continue;
            }
            if let Err(err) = table.start_round() {
                println!("Start error: {err}");
                continue;
            }
        }

        while table.phase() == Phase::PlayerTurn {
            print_table(&table);

            let Some(seat) = table.active_seat() else {
                break;
            };
            let action = prompt_line(&format!("Player {} [h]it / [s]tand: ", seat + 1));

            let result = match action.as_str() {
                "h" | "hit" => match table.hit() {
                    Ok(draw) => {
                        if draw.reshuffled {
                            println!("Shoe exhausted: reshuffled a fresh one.");
                        }
                        println!("Player {} draws {}.", seat + 1, format_card(&draw.card));
                        Ok(())
                    }
                    Err(err) => Err(err),
                },
                "s" | "stand" => table.stand(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        if table.phase() == Phase::DealerTurn {
            println!("\nDealer reveals the hole card.");
            print_table(&table);

            loop {
                thread::sleep(DEALER_PAUSE);
                match table.dealer_step() {
                    Ok(DealerStep::Drew(draw)) => {
                        if draw.reshuffled {
                            println!("Shoe exhausted: reshuffled a fresh one.");
                        }
                        println!("Dealer draws {}.", format_card(&draw.card));
                    }
                    Ok(DealerStep::Stood) => break,
                    Err(err) => {
                        println!("Dealer error: {err}");
                        break;
                    }
                }
            }
        }

        if table.phase() == Phase::Results {
            print_table(&table);
            if let Some(summary) = table.summary() {
                println!("--- Results ---\n{summary}");
            }

            let result = match prompt_line("[r]estart / [n]ew table / [q]uit: ").as_str() {
                "r" | "restart" => table.restart(),
                "n" | "new" => table.new_table(),
                "q" | "quit" => return,
                _ => Ok(()),
            };
            if let Err(err) = result {
                println!("Error: {err}");
            }
        }
    }
}

fn prompt_config() -> Option<RoundConfig> {
    loop {
        let players = prompt_number("Number of players (1-4): ")?;
        let difficulty = match Difficulty::from_str(&prompt_line("Dealer difficulty (easy/medium/hard): ")) {
            Ok(difficulty) => difficulty,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        let decks = prompt_number("Number of decks (1-3): ")?;

        match RoundConfig::new(players, difficulty, decks) {
            Ok(config) => return Some(config),
            Err(err) => println!("{err}"),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_number(prompt: &str) -> Option<u8> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u8>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(table: &Table) {
    let view = table.view();

    println!("\nShoe: {} cards remaining", table.cards_remaining());

    let dealer_line = view
        .dealer
        .iter()
        .map(format_face)
        .collect::<Vec<_>>()
        .join(" ");
    match view.dealer_value {
        Some(value) => println!("Dealer: {dealer_line} (value {value})"),
        None => println!("Dealer: {dealer_line}"),
    }

    for (index, seat) in view.seats.iter().enumerate() {
        let marker = if view.active_seat == Some(index) {
            "*"
        } else {
            " "
        };
        let status = if seat.busted {
            " BUSTED"
        } else if seat.stood {
            " stood"
        } else {
            ""
        };
        let cards = seat
            .cards
            .iter()
            .map(format_card)
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "{marker} Player {}: {cards} (value {}){status}",
            index + 1,
            seat.value
        );
    }
    println!();
}

fn format_face(face: &CardFace) -> String {
    match face {
        CardFace::Up(card) => format_card(card),
        CardFace::Down => "??".to_string(),
    }
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        Rank::Ace => "A".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        other => other.base_value().to_string(),
    };

    format!("{rank}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
