//! Card, hand, and action formatters for terminal display.
//!
//! Pure functions for formatting game elements for terminal output, with
//! Unicode card symbols and an ASCII fallback for terminals that don't
//! render them.
//!
//! ## Example
//!
//! ```rust
//! use drawfive_engine::cards::{Card, Rank, Suit};
//! use drawfive_cli::formatters::format_card;
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! ```

use drawfive_engine::cards::{Card, Rank, Suit};
use drawfive_engine::logger::ShowdownEntry;
use drawfive_engine::player::PlayerAction;

/// Check whether the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit using Unicode symbols (♥ ♦ ♣ ♠) with ASCII fallback
/// (h d c s).
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Rank as a single character (2-9, T, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
    .to_string()
}

/// Format a Card as rank followed by suit, e.g. "A♠".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Format a hand as a bracketed, space-separated card list, e.g.
/// "[A♠ T♥ 5♦ 5♣ 2♠]".
pub fn format_hand(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", inner.join(" "))
}

/// Format an action with the chips it moved, e.g. "calls 25".
pub fn format_action(action: &PlayerAction, amount: u32) -> String {
    match action {
        PlayerAction::Fold => "folds".to_string(),
        PlayerAction::Check => "checks".to_string(),
        PlayerAction::Call => format!("calls {}", amount),
        PlayerAction::Raise => format!("raises {}", amount),
    }
}

/// One showdown line: player, hand category label, and cards.
pub fn format_showdown_entry(entry: &ShowdownEntry) -> String {
    format!(
        "{}: {} {}",
        entry.player,
        entry.category,
        format_hand(&entry.cards)
    )
}
