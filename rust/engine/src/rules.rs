use crate::errors::GameError;
use crate::player::PlayerAction;

/// A betting action that passed the protocol checks for the current
/// table state. Funds checks happen later, at `pay` time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    Raise,
}

/// Validate a player action against the outstanding amount to call.
///
/// * `Check` is legal only when nothing is outstanding.
/// * `Call` is legal only when something is outstanding.
/// * `Fold` and `Raise` are always legal at this layer; a raise the
///   player cannot fund fails later and auto-folds them.
///
/// # Errors
///
/// Returns [`GameError::InvalidAction`] for a check against an
/// outstanding bet or a call with nothing to match. The engine treats
/// both as an auto-fold, per the round contract.
pub fn validate_action(to_call: u32, action: PlayerAction) -> Result<ValidatedAction, GameError> {
    match action {
        PlayerAction::Fold => Ok(ValidatedAction::Fold),
        PlayerAction::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::InvalidAction(format!(
                    "cannot check with {} outstanding",
                    to_call
                )))
            }
        }
        PlayerAction::Call => {
            if to_call > 0 {
                Ok(ValidatedAction::Call(to_call))
            } else {
                Err(GameError::InvalidAction(
                    "cannot call when there is nothing to match".into(),
                ))
            }
        }
        PlayerAction::Raise => Ok(ValidatedAction::Raise),
    }
}

/// Maximum number of cards a player may exchange per round.
pub const MAX_EXCHANGE: usize = 3;

/// Validate an exchange selection: duplicates are dropped, every index
/// must be in range, and at most [`MAX_EXCHANGE`] cards may go back.
///
/// Returns the deduplicated indices in their original order. An invalid
/// selection means no exchange for that player, never a round fault.
pub fn validate_exchange(indices: &[usize], hand_size: usize) -> Result<Vec<usize>, GameError> {
    let mut seen = Vec::with_capacity(indices.len());
    for &idx in indices {
        if idx >= hand_size {
            return Err(GameError::InvalidExchange(format!(
                "index {} out of range for a {}-card hand",
                idx, hand_size
            )));
        }
        if !seen.contains(&idx) {
            seen.push(idx);
        }
    }
    if seen.len() > MAX_EXCHANGE {
        return Err(GameError::InvalidExchange(format!(
            "{} cards selected, at most {} may be exchanged",
            seen.len(),
            MAX_EXCHANGE
        )));
    }
    Ok(seen)
}
