use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::engine::Stage;
use crate::player::PlayerAction;

/// Records a single betting action within a round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat index of the acting player
    pub seat: usize,
    /// Display name of the acting player
    pub player: String,
    /// Stage when this action occurred
    pub stage: Stage,
    /// The action taken
    pub action: PlayerAction,
    /// Chips moved into the pot by this action
    pub amount: u32,
}

/// How many cards a player sent back during the exchange phase.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRecord {
    pub seat: usize,
    pub player: String,
    pub count: usize,
}

/// One revealed hand at showdown.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownEntry {
    pub seat: usize,
    pub player: String,
    /// Hand category label ("Two pair", "Straight flush", ...)
    pub category: String,
    pub cards: Vec<Card>,
}

/// Complete record of one round: actions, exchanges, outcome, and the
/// per-player stack deltas. Serialized to JSONL for history storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// RNG seed used for deck shuffling (enables deterministic replay)
    pub seed: Option<u64>,
    /// Chronological list of all betting actions
    pub actions: Vec<ActionRecord>,
    /// Cards exchanged per player
    #[serde(default)]
    pub exchanges: Vec<ExchangeRecord>,
    /// Winner's display name
    pub winner: String,
    /// Pot awarded to the winner
    pub pot: u32,
    /// Per-player stack delta over the round; the deltas sum to zero
    #[serde(default)]
    pub net: BTreeMap<String, i64>,
    /// Showdown hands, absent when the round ended by fold-out
    #[serde(default)]
    pub showdown: Option<Vec<ShowdownEntry>>,
    /// Timestamp when the round was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
