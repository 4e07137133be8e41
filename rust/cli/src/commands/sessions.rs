//! Sessions command handler: list saved sessions in the store directory.

use std::io::Write;

use crate::config;
use crate::error::CliError;
use crate::session::SessionStore;
use crate::ui;

/// Handle the sessions command.
///
/// Lists every readable `session_<id>.json` in the store directory with
/// its seated players and stacks. Malformed files are reported as
/// warnings, not failures.
pub fn handle_sessions_command(
    dir: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let dir = dir.or(cfg.save_dir).unwrap_or_else(|| "data".to_string());
    let store = SessionStore::new(dir.as_str())?;

    let (infos, skipped) = store.list();
    if infos.is_empty() {
        writeln!(out, "No saved sessions in {}", dir)?;
    }
    for info in &infos {
        let players: Vec<String> = info
            .players
            .iter()
            .map(|(name, stack)| format!("{} {}", name, stack))
            .collect();
        writeln!(out, "game {}: {}", info.game_id, players.join(", "))?;
    }
    for name in &skipped {
        ui::display_warning(err, &format!("skipped malformed session file {}", name))?;
    }
    Ok(())
}
