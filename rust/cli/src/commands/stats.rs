//! Statistics aggregation command for round-history analysis.
//!
//! Aggregates a JSONL round-record file (plain or .zst-compressed) into
//! summary metrics: rounds played, wins and winning-hand categories per
//! player, and total pot volume. Each record's per-player net deltas are
//! checked for chip conservation; a violation fails the command after
//! the full report is printed.

use std::collections::BTreeMap;
use std::io::Write;

use drawfive_engine::logger::RoundRecord;

use crate::error::CliError;
use crate::io_utils::read_text_auto;
use crate::ui;

/// Aggregate statistics from a JSONL round-record file.
///
/// # Validation
///
/// - Corrupted or incomplete records are counted and skipped
/// - Each record's net deltas must sum to zero (chip conservation)
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    run_stats(&input, out, err)
}

fn run_stats(input: &str, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let content = read_text_auto(input).map_err(CliError::InvalidInput)?;

    let mut rounds = 0u64;
    let mut pot_total = 0u64;
    let mut corrupted = 0u64;
    let mut stats_ok = true;
    let mut wins: BTreeMap<String, u64> = BTreeMap::new();
    let mut categories: BTreeMap<String, u64> = BTreeMap::new();

    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        let rec: RoundRecord = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(_) => {
                corrupted += 1;
                continue;
            }
        };

        let net_sum: i64 = rec.net.values().sum();
        if !rec.net.is_empty() && net_sum != 0 {
            stats_ok = false;
            ui::write_error(
                err,
                &format!("Chip conservation violated at round {}", rec.round_id),
            )?;
        }

        rounds += 1;
        pot_total += u64::from(rec.pot);
        *wins.entry(rec.winner.clone()).or_insert(0) += 1;
        if let Some(showdown) = &rec.showdown
            && let Some(entry) = showdown.iter().find(|e| e.player == rec.winner)
        {
            *categories.entry(entry.category.clone()).or_insert(0) += 1;
        }
    }

    writeln!(out, "Rounds: {}", rounds)?;
    writeln!(out, "Total pot awarded: {}", pot_total)?;
    for (name, count) in &wins {
        writeln!(out, "{}: {} wins", name, count)?;
    }
    if !categories.is_empty() {
        writeln!(out, "Winning hands:")?;
        for (category, count) in &categories {
            writeln!(out, "  {}: {}", category, count)?;
        }
    }
    if corrupted > 0 {
        ui::display_warning(err, &format!("{} corrupted record(s) skipped", corrupted))?;
    }
    if !stats_ok {
        return Err(CliError::InvalidInput(
            "chip conservation violated".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawfive_engine::logger::format_round_id;

    fn record_line(seq: u32, winner: &str, pot: u32, net: &[(&str, i64)]) -> String {
        let net_map: BTreeMap<String, i64> = net
            .iter()
            .map(|(name, delta)| (name.to_string(), *delta))
            .collect();
        let rec = RoundRecord {
            round_id: format_round_id("20260807", seq),
            seed: Some(1),
            actions: vec![],
            exchanges: vec![],
            winner: winner.to_string(),
            pot,
            net: net_map,
            showdown: None,
            ts: None,
            meta: None,
        };
        serde_json::to_string(&rec).unwrap()
    }

    #[test]
    fn test_stats_aggregates_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rounds.jsonl");
        let lines = [
            record_line(1, "Bot 1", 75, &[("Bot 1", 50), ("Bot 2", -50)]),
            record_line(2, "Bot 2", 150, &[("Bot 1", -75), ("Bot 2", 75)]),
            record_line(3, "Bot 1", 75, &[("Bot 1", 25), ("Bot 2", -25)]),
        ];
        std::fs::write(&path, lines.join("\n") + "\n").unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        run_stats(path.to_str().unwrap(), &mut out, &mut err).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Rounds: 3"));
        assert!(output.contains("Total pot awarded: 300"));
        assert!(output.contains("Bot 1: 2 wins"));
        assert!(output.contains("Bot 2: 1 wins"));
    }

    #[test]
    fn test_stats_skips_corrupted_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rounds.jsonl");
        let good = record_line(1, "Bot 1", 75, &[("Bot 1", 50), ("Bot 2", -50)]);
        std::fs::write(&path, format!("{}\n{{truncated\n", good)).unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        run_stats(path.to_str().unwrap(), &mut out, &mut err).unwrap();

        let output = String::from_utf8(out).unwrap();
        let errors = String::from_utf8(err).unwrap();
        assert!(output.contains("Rounds: 1"));
        assert!(errors.contains("1 corrupted record(s) skipped"));
    }

    #[test]
    fn test_stats_detects_conservation_violation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rounds.jsonl");
        let bad = record_line(1, "Bot 1", 75, &[("Bot 1", 50), ("Bot 2", -40)]);
        std::fs::write(&path, bad + "\n").unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = run_stats(path.to_str().unwrap(), &mut out, &mut err);
        assert!(result.is_err());

        let errors = String::from_utf8(err).unwrap();
        assert!(errors.contains("Chip conservation violated at round 20260807-000001"));
    }

    #[test]
    fn test_stats_missing_file() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = run_stats("no/such/rounds.jsonl", &mut out, &mut err);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
