//! CLI cribbage example: discard against the computer and count the show.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cribrs::{Card, Difficulty, Game, GameOptions, GameState, Hand, HandScore, Seat, Suit};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Cribbage CLI example (type 'q' to quit)");

    let difficulty = loop {
        let input = prompt_line("Difficulty (easy/standard/hard/perfect): ");
        if input == "q" || input == "quit" {
            return;
        }
        if input.is_empty() {
            break Difficulty::default();
        }
        match input.parse::<Difficulty>() {
            Ok(difficulty) => break difficulty,
            Err(err) => println!("{err}"),
        }
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_difficulty(difficulty);
    let game = Game::new(options, seed);

    loop {
        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            break;
        }

        let dealer = game.dealer().unwrap_or(Seat::Player);
        println!(
            "\n{} | You {} - Computer {}",
            if dealer == Seat::Player {
                "Your crib"
            } else {
                "Computer's crib"
            },
            game.score(Seat::Player),
            game.score(Seat::Computer)
        );

        let Some(discards) = prompt_discards(&game.hand(Seat::Player)) else {
            println!("Goodbye.");
            return;
        };
        if let Err(err) = game.discard(Seat::Player, discards) {
            println!("Discard error: {err}");
            break;
        }

        println!("Computer is thinking...");
        if let Err(err) = game.computer_discard() {
            println!("Computer discard error: {err}");
            break;
        }

        match game.cut() {
            Ok(starter) => println!("Starter: {}", format_card(&starter)),
            Err(err) => {
                println!("Cut error: {err}");
                break;
            }
        }

        match game.show() {
            Ok(result) => {
                for score in &result.scores {
                    print_score(&game, score);
                }
                if let Some(winner) = result.winner {
                    println!("\n{} win the game!", seat_name(winner));
                }
            }
            Err(err) => {
                println!("Show error: {err}");
                break;
            }
        }

        if game.state() == GameState::GameOver {
            break;
        }
        if game.next_hand().is_err() {
            break;
        }
    }

    println!(
        "Final score: You {} - Computer {}",
        game.score(Seat::Player),
        game.score(Seat::Computer)
    );
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

/// Asks for two distinct card numbers between 1 and 6.
fn prompt_discards(hand: &Hand) -> Option<[Card; 2]> {
    println!("\nYour hand:");
    for (index, card) in hand.cards().iter().enumerate() {
        println!("  {}: {}", index + 1, format_card(card));
    }

    loop {
        let input = prompt_line("Choose two cards to discard (e.g. 2 5): ");
        if input == "q" || input == "quit" {
            return None;
        }
        let picks: Vec<usize> = input
            .split_whitespace()
            .filter_map(|part| part.parse().ok())
            .collect();
        match picks.as_slice() {
            &[a, b] if a != b && (1..=hand.len()).contains(&a) && (1..=hand.len()).contains(&b) => {
                let cards = hand.cards();
                let confirm = prompt_line(&format!(
                    "Discard {} and {}? (y/n): ",
                    format_card(&cards[a - 1]),
                    format_card(&cards[b - 1])
                ));
                if confirm == "y" || confirm == "yes" {
                    return Some([cards[a - 1], cards[b - 1]]);
                }
            }
            _ => println!("Please choose two different card numbers between 1 and 6."),
        }
    }
}

fn print_score(game: &Game, score: &HandScore) {
    let hand = if score.is_crib {
        game.get_crib()
    } else {
        game.hand(score.seat)
    };
    let label = if score.is_crib {
        format!("{} crib", seat_name(score.seat))
    } else {
        format!("{} hand", seat_name(score.seat))
    };
    let b = &score.breakdown;
    println!(
        "{label}: {} | fifteens {} pairs {} runs {} flush {} nobs {} | +{}",
        format_hand(&hand),
        b.fifteen_points(),
        b.pair_points(),
        b.run_points(),
        b.flush_points(),
        b.nobs_points(),
        score.points
    );
}

const fn seat_name(seat: Seat) -> &'static str {
    match seat {
        Seat::Player => "You",
        Seat::Computer => "Computer",
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
