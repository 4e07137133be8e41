use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: u32, available: u32 },
    #[error("Invalid action: {0}")]
    InvalidAction(String),
    #[error("Invalid exchange selection: {0}")]
    InvalidExchange(String),
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Invalid hand: {0}")]
    InvalidHand(String),
    #[error("No active players at showdown")]
    NoActivePlayers,
    #[error("Betting round exceeded the turn limit")]
    BettingStalled,
}
