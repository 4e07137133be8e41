//! Deal command handler for single-round dealing and display.
//!
//! Deals one five-card hand per seat and prints each hand with its
//! evaluator label. Supports optional seeding for deterministic dealing.

use std::io::Write;

use drawfive_engine::cards::Card;
use drawfive_engine::deck::Deck;
use drawfive_engine::hand::evaluate_hand;
use drawfive_engine::player::{HAND_SIZE, Player, STARTING_STACK};

use crate::error::CliError;
use crate::formatters::format_hand;

/// Handle the deal command.
///
/// Shuffles a seeded deck, deals five cards to the human seat and each
/// bot seat, and prints every hand with its evaluated category.
pub fn handle_deal_command(
    seed: Option<u64>,
    opponents: Option<usize>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let opponents = opponents.unwrap_or(2).clamp(1, 5);

    let mut deck = Deck::new_with_seed(base_seed);
    deck.shuffle();

    let mut players = vec![Player::new("You", STARTING_STACK, true)];
    for i in 1..=opponents {
        players.push(Player::new(format!("Bot {}", i), STARTING_STACK, false));
    }
    deck.deal(&mut players, HAND_SIZE)?;

    writeln!(out, "deal: opponents={} seed={}", opponents, base_seed)?;
    for player in &players {
        let hand: [Card; HAND_SIZE] = player
            .hand()
            .try_into()
            .map_err(|_| CliError::Engine("short deal".into()))?;
        let strength = evaluate_hand(&hand);
        writeln!(
            out,
            "{}: {} ({})",
            player.name(),
            format_hand(player.hand()),
            strength.category.label()
        )?;
    }
    writeln!(out, "Deck remaining: {}", deck.len())?;
    Ok(())
}
