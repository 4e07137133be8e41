use crate::cards::Card;
use crate::errors::GameError;
use serde::{Deserialize, Serialize};

/// Represents a player action during the betting round.
/// Raise sizing is supplied separately through the host capability, so the
/// variants carry no amounts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (no bet, only valid when nothing is outstanding)
    Check,
    /// Match the outstanding bet
    Call,
    /// Increase the outstanding bet, reopening action
    Raise,
}

/// Number of cards in a draw-poker hand.
pub const HAND_SIZE: usize = 5;

/// Default starting stack for each player in chips.
pub const STARTING_STACK: u32 = 1_000;

/// Represents a seated player with a chip stack, a five-card hand, and the
/// per-round betting status the engine tracks between phases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Display name ("You", "Bot 1", ...)
    name: String,
    /// Current chip stack
    stack: u32,
    /// Cards held this round (exactly five during active play)
    hand: Vec<Card>,
    /// Whether the player has folded this round
    folded: bool,
    /// Chips committed in the current betting round
    current_bet: u32,
    /// Most recent action taken this round, if any
    last_action: Option<PlayerAction>,
    /// Whether decisions come from a human host or an automated policy
    is_human: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, stack: u32, is_human: bool) -> Self {
        Self {
            name: name.into(),
            stack,
            hand: Vec::with_capacity(HAND_SIZE),
            folded: false,
            current_bet: 0,
            last_action: None,
            is_human,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn is_human(&self) -> bool {
        self.is_human
    }
    pub fn folded(&self) -> bool {
        self.folded
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn last_action(&self) -> Option<PlayerAction> {
        self.last_action
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn set_folded(&mut self, folded: bool) {
        self.folded = folded;
    }
    pub fn set_last_action(&mut self, action: PlayerAction) {
        self.last_action = Some(action);
    }
    pub fn add_to_current_bet(&mut self, amount: u32) {
        self.current_bet += amount;
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Debit the stack and return the amount paid. The single
    /// funds-movement primitive: blinds, calls, and raises all route
    /// through here so the engine can credit the pot from the return value.
    pub fn pay(&mut self, amount: u32) -> Result<u32, GameError> {
        if amount > self.stack {
            return Err(GameError::InsufficientFunds {
                required: amount,
                available: self.stack,
            });
        }
        self.stack -= amount;
        Ok(amount)
    }

    /// Blind-posting variant: debit as much of `amount` as the stack
    /// covers and return what was actually paid. This is the short-blind
    /// simplification, not an all-in accounting system.
    pub fn pay_up_to(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.stack);
        self.stack -= paid;
        paid
    }

    pub fn take_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Replace the hand slot at `index` and return the displaced card so
    /// the engine can discard it to the deck bottom.
    pub fn change_card(&mut self, card: Card, index: usize) -> Result<Card, GameError> {
        if index >= self.hand.len() {
            return Err(GameError::InvalidExchange(format!(
                "index {} out of range for a {}-card hand",
                index,
                self.hand.len()
            )));
        }
        let old = self.hand[index];
        self.hand[index] = card;
        Ok(old)
    }

    /// Exactly five cards, no duplicates. A violation signals an engine
    /// bug, not user error.
    pub fn validate_hand(&self) -> Result<(), GameError> {
        if self.hand.len() != HAND_SIZE {
            return Err(GameError::InvalidHand(format!(
                "hand has {} cards, expected {}",
                self.hand.len(),
                HAND_SIZE
            )));
        }
        for (i, card) in self.hand.iter().enumerate() {
            if self.hand[i + 1..].contains(card) {
                return Err(GameError::InvalidHand(format!(
                    "duplicate card {:?}{:?}",
                    card.rank, card.suit
                )));
            }
        }
        Ok(())
    }

    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }

    /// Reset the per-round state at the start of a round. The stack
    /// persists across rounds.
    pub fn reset_for_round(&mut self) {
        self.hand.clear();
        self.folded = false;
        self.current_bet = 0;
        self.last_action = None;
    }
}
