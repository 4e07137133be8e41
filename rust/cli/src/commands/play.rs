//! # Play Command
//!
//! Interactive five-card-draw gameplay against bot opponents.
//!
//! One human seat ("You") plays against 1-5 bots. The human side of the
//! engine's capability contract reads actions and exchange indices from
//! stdin; the bot side is the baseline policy. Round events (blinds,
//! actions, exchanges, showdown) are displayed live as the engine emits
//! them.
//!
//! ## Features
//!
//! - Interactive input validation with clear error messages
//! - Graceful quit handling (user can exit with 'q' or 'quit')
//! - Session autosave after each completed round (`--save-dir`)
//! - Resume from a saved session (`--load <game-id>`)

use std::io::{BufRead, Write};

use drawfive_ai::create_bot;
use drawfive_engine::deck::Deck;
use drawfive_engine::engine::{Decisions, RoundEngine, RoundEvent, Stage};
use drawfive_engine::player::{Player, PlayerAction};

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_action, format_hand, format_showdown_entry};
use crate::io_utils::read_stdin_line;
use crate::session::{SessionState, SessionStore};
use crate::ui;
use crate::validation::{ParseResult, parse_exchange_indices, parse_player_action};

/// The human side of the capability contract: prompts on `out`, reads
/// from `stdin`, and remembers an inline raise amount between the action
/// and the raise-sizing callback.
struct HumanDecisions<'a> {
    out: &'a mut dyn Write,
    stdin: &'a mut dyn BufRead,
    big_blind: u32,
    pending_raise: Option<u32>,
    quit: bool,
}

impl Decisions for HumanDecisions<'_> {
    fn get_action(&mut self, player: &Player, to_call: u32) -> PlayerAction {
        let _ = writeln!(self.out, "Your cards: {}", format_hand(player.hand()));
        let _ = writeln!(self.out, "To call: {} | Stack: {}", to_call, player.stack());
        loop {
            let _ = write!(self.out, "Enter action (fold/check/call/raise [amount]/q): ");
            let _ = self.out.flush();
            let Some(input) = read_stdin_line(self.stdin) else {
                self.quit = true;
                return PlayerAction::Fold;
            };
            match parse_player_action(&input) {
                ParseResult::Action(action, raise_amount) => {
                    self.pending_raise = raise_amount;
                    return action;
                }
                ParseResult::Quit => {
                    self.quit = true;
                    return PlayerAction::Fold;
                }
                ParseResult::Invalid(msg) => {
                    let _ = writeln!(self.out, "{}", msg);
                }
            }
        }
    }

    fn get_raise_amount(&mut self, _player: &Player, _to_call: u32) -> u32 {
        if let Some(amount) = self.pending_raise.take() {
            return amount;
        }
        let _ = write!(self.out, "Raise amount (min {}): ", self.big_blind);
        let _ = self.out.flush();
        match read_stdin_line(self.stdin).and_then(|line| line.parse::<u32>().ok()) {
            Some(amount) if amount > 0 => amount,
            _ => {
                let _ = writeln!(self.out, "Using minimum raise of {}", self.big_blind);
                self.big_blind
            }
        }
    }

    fn get_exchange_indices(&mut self, player: &Player) -> Vec<usize> {
        let _ = writeln!(self.out, "Your cards: {}", format_hand(player.hand()));
        let _ = write!(
            self.out,
            "Exchange positions (0-4, up to 3, space separated; empty to stand pat): "
        );
        let _ = self.out.flush();
        let Some(input) = read_stdin_line(self.stdin) else {
            return Vec::new();
        };
        match parse_exchange_indices(&input) {
            Ok(indices) => indices,
            Err(msg) => {
                let _ = writeln!(self.out, "Invalid exchange: {}. No cards exchanged.", msg);
                Vec::new()
            }
        }
    }

    fn observe_event(&mut self, event: &RoundEvent) {
        let _ = match event {
            RoundEvent::StageChanged(Stage::Betting) => writeln!(self.out, "-- Betting --"),
            RoundEvent::StageChanged(Stage::Exchange) => writeln!(self.out, "-- Exchange --"),
            RoundEvent::StageChanged(Stage::Showdown) => writeln!(self.out, "-- Showdown --"),
            RoundEvent::StageChanged(_) => Ok(()),
            RoundEvent::BlindPosted {
                player,
                amount,
                pot,
                ..
            } => writeln!(self.out, "{} posts blind {} (pot {})", player, amount, pot),
            RoundEvent::ActionTaken {
                player,
                action,
                amount,
                pot,
                ..
            } => writeln!(
                self.out,
                "{} {} (pot {})",
                player,
                format_action(action, *amount),
                pot
            ),
            RoundEvent::AutoFolded { player, reason, .. } => {
                writeln!(self.out, "{} is folded: {}", player, reason)
            }
            RoundEvent::CardsExchanged { player, count, .. } => {
                writeln!(self.out, "{} exchanges {} card(s)", player, count)
            }
            RoundEvent::ExchangeRejected { player, reason, .. } => writeln!(
                self.out,
                "{}: invalid exchange ({}), no cards exchanged",
                player, reason
            ),
            RoundEvent::ShowdownResult {
                entries,
                winner,
                pot,
                ..
            } => {
                for entry in entries {
                    let _ = writeln!(self.out, "{}", format_showdown_entry(entry));
                }
                writeln!(self.out, "Winner: {} (+{})", winner, pot)
            }
        };
    }
}

/// Routes each decision point to the human prompt or the bot policy by
/// the seat's human flag. Events go to the human display.
struct TableDecisions<'a> {
    human: HumanDecisions<'a>,
    bot: &'a mut dyn Decisions,
}

impl Decisions for TableDecisions<'_> {
    fn get_action(&mut self, player: &Player, to_call: u32) -> PlayerAction {
        if player.is_human() {
            self.human.get_action(player, to_call)
        } else {
            self.bot.get_action(player, to_call)
        }
    }

    fn get_raise_amount(&mut self, player: &Player, to_call: u32) -> u32 {
        if player.is_human() {
            self.human.get_raise_amount(player, to_call)
        } else {
            self.bot.get_raise_amount(player, to_call)
        }
    }

    fn get_exchange_indices(&mut self, player: &Player) -> Vec<usize> {
        if player.is_human() {
            self.human.get_exchange_indices(player)
        } else {
            self.bot.get_exchange_indices(player)
        }
    }

    fn observe_event(&mut self, event: &RoundEvent) {
        self.human.observe_event(event);
    }
}

/// Handle the play command: interactive gameplay against bots.
///
/// # Arguments
///
/// * `rounds` - Number of rounds to play (default: 1)
/// * `seed` - RNG seed for reproducibility (default: random)
/// * `opponents` - Number of bot seats (1-5, default from config)
/// * `load` - Resume a saved session by game id
/// * `save_dir` - Session store directory; enables autosave
/// * `out` - Output stream for game display
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for player decisions
///
/// # Returns
///
/// * `Ok(())` on successful completion
/// * `Err(CliError)` on invalid arguments, session errors, or engine faults
#[allow(clippy::too_many_arguments)]
pub fn handle_play_command(
    rounds: Option<u32>,
    seed: Option<u64>,
    opponents: Option<usize>,
    load: Option<u32>,
    save_dir: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;

    let rounds = rounds.unwrap_or(1);
    if rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let opponents = opponents.unwrap_or(cfg.opponents).clamp(1, 5);
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    // --load without an explicit store falls back to the default directory
    let mut dir = save_dir.or(cfg.save_dir.clone());
    if load.is_some() && dir.is_none() {
        dir = Some("data".to_string());
    }
    let store = match dir {
        Some(d) => Some(SessionStore::new(d)?),
        None => None,
    };

    let mut game_id = load;
    let mut engine = if let Some(id) = load {
        let store = store
            .as_ref()
            .ok_or_else(|| CliError::Session("a session store is required to load".into()))?;
        let state = store.load(id)?;
        writeln!(out, "Resumed session {}", id)?;
        state.into_engine(seed)
    } else {
        let mut players = vec![Player::new("You", cfg.starting_stack, true)];
        for i in 1..=opponents {
            players.push(Player::new(format!("Bot {}", i), cfg.starting_stack, false));
        }
        RoundEngine::new(
            players,
            Deck::new_with_seed(seed),
            cfg.small_blind,
            cfg.big_blind,
        )
    };

    let (sb, bb) = engine.blinds();
    writeln!(out, "play: rounds={} opponents={} seed={}", rounds, opponents, seed)?;
    writeln!(out, "Blinds: {}/{}", sb, bb)?;

    let mut bot = create_bot("baseline", bb, seed);
    let mut played = 0u32;

    for round_no in 1..=rounds {
        if engine.players().iter().filter(|p| p.stack() >= bb).count() < 2 {
            writeln!(out, "Not enough funded seats to continue.")?;
            break;
        }
        writeln!(out, "=== Round {} ===", round_no)?;

        let mut table = TableDecisions {
            human: HumanDecisions {
                out: &mut *out,
                stdin: &mut *stdin,
                big_blind: bb,
                pending_raise: None,
                quit: false,
            },
            bot: bot.as_mut(),
        };
        engine.play_round(&mut table)?;
        let quit_requested = table.human.quit;

        played += 1;
        engine.rotate_button();

        if let Some(store) = &store {
            let mut state = SessionState::from_engine(&engine, game_id, true);
            let id = store.save(&mut state)?;
            game_id = Some(id);
            writeln!(out, "Session saved as game {}", id)?;
        }

        if quit_requested {
            writeln!(out, "Quit requested.")?;
            break;
        }
    }

    writeln!(out, "Rounds played: {}", played)?;
    for player in engine.players() {
        writeln!(out, "{}: {} chips", player.name(), player.stack())?;
    }
    Ok(())
}
