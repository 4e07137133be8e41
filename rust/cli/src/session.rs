//! Keyed session persistence for the play command.
//!
//! A session store keeps one `session_<id>.json` state file per game plus
//! an append-only `session_<id>_log.jsonl` history. The state file holds
//! everything needed to resume between rounds: player records (stack,
//! hand, bet status), the remaining deck order, blinds, and the button
//! seat. Saving is only legal after a completed round, so a resumed game
//! always starts clean at the next round.

use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use drawfive_engine::cards::Card;
use drawfive_engine::deck::Deck;
use drawfive_engine::engine::RoundEngine;
use drawfive_engine::player::Player;

use crate::error::CliError;

/// Serializable snapshot of a game between rounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Assigned on first save; `None` for a fresh game
    pub game_id: Option<u32>,
    pub players: Vec<Player>,
    /// Remaining deck order, draw end first
    pub deck: Vec<Card>,
    pub small_blind: u32,
    pub big_blind: u32,
    pub button: usize,
    /// Saving is only legal once a round has completed
    pub completed_round: bool,
}

impl SessionState {
    pub fn from_engine(engine: &RoundEngine, game_id: Option<u32>, completed_round: bool) -> Self {
        let (small_blind, big_blind) = engine.blinds();
        Self {
            game_id,
            players: engine.players().to_vec(),
            deck: engine.deck().cards(),
            small_blind,
            big_blind,
            button: engine.button(),
            completed_round,
        }
    }

    /// Rebuild a round engine from this snapshot. The deck RNG is
    /// re-seeded with `seed`; the restored card order is preserved.
    pub fn into_engine(self, seed: u64) -> RoundEngine {
        let mut engine = RoundEngine::new(
            self.players,
            Deck::from_cards(self.deck, seed),
            self.small_blind,
            self.big_blind,
        );
        engine.set_button(self.button);
        engine
    }
}

/// Summary of one stored session, for listing.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub game_id: u32,
    pub players: Vec<(String, u32)>,
}

pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, CliError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .map_err(|e| CliError::Session(format!("create {}: {}", dir.display(), e)))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Next unused game id: one past the highest `session_N.json` present.
    pub fn next_game_id(&self) -> u32 {
        let mut max_id = 0;
        if let Ok(entries) = std::fs::read_dir(&self.dir) {
            for entry in entries.flatten() {
                if let Some(id) = parse_session_id(&entry.file_name().to_string_lossy()) {
                    max_id = max_id.max(id);
                }
            }
        }
        max_id + 1
    }

    /// Persist a session snapshot, assigning a game id on first save, and
    /// append a history line. Refuses to save mid-round.
    pub fn save(&self, state: &mut SessionState) -> Result<u32, CliError> {
        if !state.completed_round {
            return Err(CliError::Session(
                "sessions may only be saved after a completed round".into(),
            ));
        }
        let game_id = match state.game_id {
            Some(id) => id,
            None => {
                let id = self.next_game_id();
                state.game_id = Some(id);
                id
            }
        };

        let path = self.state_path(game_id);
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| CliError::Session(format!("encode session {}: {}", game_id, e)))?;
        std::fs::write(&path, json)
            .map_err(|e| CliError::Session(format!("write {}: {}", path.display(), e)))?;

        self.append_log(state, game_id)?;
        Ok(game_id)
    }

    fn append_log(&self, state: &SessionState, game_id: u32) -> Result<(), CliError> {
        let entry = serde_json::json!({
            "game_id": game_id,
            "ts": Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            "players": state
                .players
                .iter()
                .map(|p| serde_json::json!({ "name": p.name(), "stack": p.stack() }))
                .collect::<Vec<_>>(),
            "button": state.button,
        });
        let path = self.log_path(game_id);
        let mut line = entry.to_string();
        line.push('\n');
        use std::io::Write;
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| CliError::Session(format!("open {}: {}", path.display(), e)))?;
        file.write_all(line.as_bytes())
            .map_err(|e| CliError::Session(format!("append {}: {}", path.display(), e)))?;
        Ok(())
    }

    pub fn load(&self, game_id: u32) -> Result<SessionState, CliError> {
        let path = self.state_path(game_id);
        let json = std::fs::read_to_string(&path)
            .map_err(|e| CliError::Session(format!("read {}: {}", path.display(), e)))?;
        serde_json::from_str(&json)
            .map_err(|e| CliError::Session(format!("decode {}: {}", path.display(), e)))
    }

    /// All readable sessions in the store, by ascending game id.
    /// Malformed files are skipped and reported by name.
    pub fn list(&self) -> (Vec<SessionInfo>, Vec<String>) {
        let mut infos = Vec::new();
        let mut skipped = Vec::new();
        if let Ok(entries) = std::fs::read_dir(&self.dir) {
            for entry in entries.flatten() {
                let name = entry.file_name().to_string_lossy().to_string();
                let Some(id) = parse_session_id(&name) else {
                    continue;
                };
                match self.load(id) {
                    Ok(state) => infos.push(SessionInfo {
                        game_id: id,
                        players: state
                            .players
                            .iter()
                            .map(|p| (p.name().to_string(), p.stack()))
                            .collect(),
                    }),
                    Err(_) => skipped.push(name),
                }
            }
        }
        infos.sort_by_key(|info| info.game_id);
        (infos, skipped)
    }

    fn state_path(&self, game_id: u32) -> PathBuf {
        self.dir.join(format!("session_{}.json", game_id))
    }

    fn log_path(&self, game_id: u32) -> PathBuf {
        self.dir.join(format!("session_{}_log.jsonl", game_id))
    }
}

/// Extract N from `session_N.json`; log files don't count.
fn parse_session_id(file_name: &str) -> Option<u32> {
    let rest = file_name.strip_prefix("session_")?;
    let digits = rest.strip_suffix(".json")?;
    digits.parse().ok()
}
