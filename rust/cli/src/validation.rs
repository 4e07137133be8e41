//! Input parsing and validation for interactive commands.
//!
//! Parses the two kinds of input the play command reads from a human:
//! betting actions and exchange index lists. Validation functions return
//! structured results so the prompt loop can show a clear message and
//! re-prompt on malformed syntax, while protocol legality (checking into
//! a bet, calling nothing) stays with the engine.

use drawfive_engine::player::PlayerAction;

/// Result type for parsing user input into player actions.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action parsed from input, with the raise amount when
    /// one was supplied inline ("raise 100")
    Action(PlayerAction, Option<u32>),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a [`PlayerAction`] or special commands.
///
/// Accepts the following input formats (case-insensitive):
/// - "f" or "fold" → Fold
/// - "k" or "check" → Check
/// - "c" or "call" → Call
/// - "r" or "raise", optionally with an amount ("raise 100") → Raise
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// use drawfive_cli::validation::{ParseResult, parse_player_action};
/// use drawfive_engine::player::PlayerAction;
///
/// assert_eq!(
///     parse_player_action("fold"),
///     ParseResult::Action(PlayerAction::Fold, None)
/// );
///
/// assert_eq!(
///     parse_player_action("raise 100"),
///     ParseResult::Action(PlayerAction::Raise, Some(100))
/// );
///
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("banana") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    // Check for quit commands first
    if parts[0] == "q" || parts[0] == "quit" {
        return ParseResult::Quit;
    }

    match parts[0] {
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold, None),
        "check" | "k" => ParseResult::Action(PlayerAction::Check, None),
        "call" | "c" => ParseResult::Action(PlayerAction::Call, None),
        "raise" | "r" => {
            if parts.len() < 2 {
                return ParseResult::Action(PlayerAction::Raise, None);
            }
            match parts[1].parse::<u32>() {
                Ok(amount) if amount > 0 => {
                    ParseResult::Action(PlayerAction::Raise, Some(amount))
                }
                Ok(_) => ParseResult::Invalid("Raise amount must be positive".to_string()),
                Err(_) => ParseResult::Invalid("Invalid raise amount".to_string()),
            }
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, raise [amount], q",
            parts[0]
        )),
    }
}

/// Parse a space-separated list of exchange indices.
///
/// An empty line means no exchange. Non-numeric tokens are an error; the
/// engine validates range and count, so this layer only guarantees the
/// tokens are indices at all.
///
/// # Example
///
/// ```rust
/// use drawfive_cli::validation::parse_exchange_indices;
///
/// assert_eq!(parse_exchange_indices(""), Ok(vec![]));
/// assert_eq!(parse_exchange_indices("0 2 4"), Ok(vec![0, 2, 4]));
/// assert!(parse_exchange_indices("0 two").is_err());
/// ```
pub fn parse_exchange_indices(input: &str) -> Result<Vec<usize>, String> {
    let mut indices = Vec::new();
    for token in input.split_whitespace() {
        let idx = token
            .parse::<usize>()
            .map_err(|_| format!("'{}' is not a card index", token))?;
        indices.push(idx);
    }
    Ok(indices)
}
