//! Prints the legal cards of a dealt hand against a partial trick.
//!
//! Usage: `cargo run --example legal_moves [seed]`

#![allow(clippy::missing_docs_in_private_items)]

use std::time::{SystemTime, UNIX_EPOCH};

use belot::{Card, GameMode, Rules, TrickSummary};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut deck = Card::deck();
    deck.shuffle(&mut rng);
    let trick_len = rng.random_range(1..=3);
    let (trick, rest) = deck.split_at(trick_len);
    let hand = &rest[..8];

    println!("Seed {seed}");
    println!("Trick: {}", join(trick));

    for mode in GameMode::ALL {
        let rules = Rules::new(mode);
        let mut shown = hand.to_vec();
        if let Some(summary) = TrickSummary::scan(trick, mode) {
            rules.sort_in_trick(&mut shown, summary.requested);
        }

        println!();
        println!("{mode}");
        println!("  hand:  {}", join(&shown));
        println!("  legal: {}", join(&rules.legal_cards(trick, &shown)));
        for &card in &shown {
            if let Err(reason) = rules.check_play(trick, &shown, card) {
                println!("  {card}: {reason}");
            }
        }
        if let Some(winner) = rules.winner(trick) {
            println!(
                "  taking the trick: {} ({} points so far)",
                trick[winner],
                rules.trick_points(trick)
            );
        }
    }
}

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
