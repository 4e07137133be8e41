//! Export command handler: convert round histories to other formats.
//!
//! Reads a JSONL round-record file (plain or .zst-compressed) and writes
//! either a CSV summary or a SQLite database with one row per round. The
//! SQLite export runs inside a single transaction and keeps the raw JSON
//! alongside the extracted columns.

use std::io::Write;

use drawfive_engine::logger::RoundRecord;

use crate::error::CliError;
use crate::io_utils::{ensure_parent_dir, read_text_auto};
use crate::ui;

/// Handle the export command.
///
/// # Arguments
///
/// * `input` - Path to a .jsonl or .jsonl.zst round-record file
/// * `format` - Target format: "csv" or "sqlite"
/// * `output` - Output file path (parent directories are created)
pub fn handle_export_command(
    input: String,
    format: String,
    output: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(&input).map_err(CliError::InvalidInput)?;
    match format.as_str() {
        "csv" => export_csv(&content, &output)?,
        "sqlite" => export_sqlite(&content, &output)?,
        other => {
            ui::write_error(err, &format!("Unsupported format: {}", other))?;
            return Err(CliError::InvalidInput(format!(
                "Unsupported format: {}",
                other
            )));
        }
    }
    writeln!(out, "Exported {} to {}", input, output)?;
    Ok(())
}

/// Parse every non-empty line; any invalid record fails the export.
fn parse_records(content: &str) -> Result<Vec<RoundRecord>, CliError> {
    let mut records = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let rec = serde_json::from_str(line).map_err(|e| {
            CliError::InvalidInput(format!("invalid record at line {}: {}", idx + 1, e))
        })?;
        records.push(rec);
    }
    Ok(records)
}

fn export_csv(content: &str, output: &str) -> Result<(), CliError> {
    let records = parse_records(content)?;
    ensure_parent_dir(output)?;

    let mut csv = String::from("round_id,seed,winner,pot,ts,actions\n");
    for rec in &records {
        let seed = rec.seed.map(|s| s.to_string()).unwrap_or_default();
        let ts = rec.ts.clone().unwrap_or_default();
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            rec.round_id,
            seed,
            csv_field(&rec.winner),
            rec.pot,
            ts,
            rec.actions.len()
        ));
    }
    std::fs::write(output, csv)?;
    Ok(())
}

/// Quote a CSV field when it contains a delimiter or quote.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn export_sqlite(content: &str, output: &str) -> Result<(), CliError> {
    fn sql_err(context: &str, e: rusqlite::Error) -> CliError {
        CliError::InvalidInput(format!("sqlite {}: {}", context, e))
    }

    let records = parse_records(content)?;
    ensure_parent_dir(output)?;

    let mut conn = rusqlite::Connection::open(output).map_err(|e| sql_err("open", e))?;
    let tx = conn.transaction().map_err(|e| sql_err("transaction", e))?;

    tx.execute("DROP TABLE IF EXISTS rounds", [])
        .map_err(|e| sql_err("reset schema", e))?;
    tx.execute(
        "CREATE TABLE rounds (
            round_id TEXT NOT NULL PRIMARY KEY,
            seed INTEGER,
            winner TEXT NOT NULL,
            pot INTEGER NOT NULL,
            ts TEXT,
            actions INTEGER NOT NULL,
            raw_json TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| sql_err("create schema", e))?;

    {
        let mut stmt = tx
            .prepare(
                "INSERT INTO rounds (round_id, seed, winner, pot, ts, actions, raw_json)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )
            .map_err(|e| sql_err("prepare insert", e))?;
        for rec in &records {
            let raw = serde_json::to_string(rec)
                .map_err(|e| CliError::InvalidInput(format!("encode record: {}", e)))?;
            stmt.execute(rusqlite::params![
                rec.round_id,
                rec.seed.map(|s| s as i64),
                rec.winner,
                rec.pot,
                rec.ts,
                rec.actions.len() as i64,
                raw,
            ])
            .map_err(|e| sql_err("insert", e))?;
        }
    }

    tx.commit().map_err(|e| sql_err("commit", e))?;
    Ok(())
}
