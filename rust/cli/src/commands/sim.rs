//! Simulation command handler for bot-only round generation.
//!
//! Runs N rounds with every seat on the baseline policy and records one
//! JSONL round record per round. The session stops early once fewer than
//! two seats can post the big blind; there is no rebuy.

use std::collections::BTreeMap;
use std::io::Write;

use drawfive_ai::create_bot;
use drawfive_engine::deck::Deck;
use drawfive_engine::engine::RoundEngine;
use drawfive_engine::logger::{RoundLogger, RoundRecord};
use drawfive_engine::player::Player;

use crate::config;
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;

/// Handle the sim command: run bot-only rounds.
///
/// # Arguments
///
/// * `rounds` - Total number of rounds to simulate
/// * `output` - Path for JSONL round records (omit to skip recording)
/// * `seed` - Base RNG seed for deck and bot decisions
/// * `opponents` - Bot seats beyond the first (1-5)
/// * `out` - Output stream for the run summary
/// * `err` - Output stream for warnings and errors
pub fn handle_sim_command(
    rounds: u64,
    output: Option<String>,
    seed: Option<u64>,
    opponents: Option<usize>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }

    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let opponents = opponents.unwrap_or(cfg.opponents).clamp(1, 5);
    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let seats = opponents + 1;
    let mut players = Vec::with_capacity(seats);
    for i in 1..=seats {
        players.push(Player::new(format!("Bot {}", i), cfg.starting_stack, false));
    }
    let mut engine = RoundEngine::new(
        players,
        Deck::new_with_seed(base_seed),
        cfg.small_blind,
        cfg.big_blind,
    );
    let (_, bb) = engine.blinds();
    let mut bot = create_bot("baseline", bb, base_seed);

    let mut logger = match &output {
        Some(path) => {
            ensure_parent_dir(path)?;
            Some(RoundLogger::create(path)?)
        }
        None => None,
    };

    writeln!(out, "sim: rounds={} seats={} seed={}", rounds, seats, base_seed)?;

    let mut wins: BTreeMap<String, u64> = BTreeMap::new();
    let mut played = 0u64;
    for _ in 0..rounds {
        if engine.players().iter().filter(|p| p.stack() >= bb).count() < 2 {
            ui::display_warning(
                err,
                &format!("session ended early after {} rounds (unfunded seat)", played),
            )?;
            break;
        }
        let summary = engine.play_round(bot.as_mut())?;
        *wins.entry(summary.winner.clone()).or_insert(0) += 1;

        if let Some(logger) = &mut logger {
            let record = RoundRecord {
                round_id: logger.next_id(),
                seed: Some(base_seed),
                actions: summary.actions,
                exchanges: summary.exchanges,
                winner: summary.winner,
                pot: summary.pot_awarded,
                net: summary.net,
                showdown: summary.showdown,
                ts: None,
                meta: Some(serde_json::json!({ "seats": seats })),
            };
            logger.write(&record)?;
        }

        played += 1;
        engine.rotate_button();
    }

    writeln!(out, "Rounds played: {}", played)?;
    for (name, count) in &wins {
        writeln!(out, "{}: {} wins", name, count)?;
    }
    for player in engine.players() {
        writeln!(out, "{}: {} chips", player.name(), player.stack())?;
    }
    Ok(())
}
