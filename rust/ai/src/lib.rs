//! # drawfive-ai: Automated Opponents for Five-Card Draw
//!
//! Bot policies for the draw-poker round engine. Every bot implements
//! the engine's [`Decisions`] capability, so hosts can seat humans and
//! bots behind the same contract.
//!
//! ## Core Components
//!
//! - [`baseline`] - Weighted-random policy informed by hand strength
//! - [`create_bot`] - Factory function for creating bot policies
//!
//! ## Quick Start
//!
//! ```rust
//! use drawfive_ai::create_bot;
//! use drawfive_engine::engine::Decisions;
//! use drawfive_engine::player::Player;
//!
//! // Big blind 50, deterministic under seed 42
//! let mut bot = create_bot("baseline", 50, 42);
//!
//! let player = Player::new("Bot 1", 1_000, false);
//! let action = bot.get_action(&player, 25);
//! // Action is determined by hand strength and the amount to call
//! ```
//!
//! ## Bot Types
//!
//! Currently supported:
//! - `"baseline"` - Weighted-random baseline policy

use drawfive_engine::engine::Decisions;

pub mod baseline;

/// Factory function to create bot policies by type string.
///
/// # Arguments
///
/// * `kind` - String identifier for the bot type (e.g., "baseline")
/// * `big_blind` - Table big blind, the minimum raise increment
/// * `seed` - RNG seed for reproducible decisions
///
/// # Panics
///
/// Panics if an unknown bot type is requested. Currently only
/// "baseline" is supported.
pub fn create_bot(kind: &str, big_blind: u32, seed: u64) -> Box<dyn Decisions> {
    match kind {
        "baseline" => Box::new(baseline::BaselineBot::new(big_blind, seed)),
        _ => panic!("Unknown bot type: {}", kind),
    }
}
