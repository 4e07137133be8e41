//! Command handler modules for the Drawfive CLI.
//!
//! Each subcommand is implemented in its own module file with a
//! consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) passed as parameters
//! - Errors propagated via the `CliError` enum

mod cfg;
mod deal;
mod export;
mod play;
mod sessions;
mod sim;
mod stats;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use export::handle_export_command;
pub use play::handle_play_command;
pub use sessions::handle_sessions_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;
