//! Card and reading formatters for terminal display.
//!
//! Pure functions turning engine types into display strings. Suit symbols
//! use the historical playing-card correspondences (Wands as clubs, Cups
//! as hearts, Swords as spades, Pentacles as diamonds) with an ASCII
//! letter fallback for terminals without Unicode support.

use arcanum_engine::cards::{Card, Rank, Suit};
use arcanum_engine::selection::CardPosition;

/// Check if the terminal supports Unicode suit symbols.
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

/// Format a suit as its symbol, or ASCII letter fallback.
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Wands => "♣",
            Suit::Cups => "♥",
            Suit::Swords => "♠",
            Suit::Pentacles => "♦",
        }
        .to_string()
    } else {
        suit.letter().to_string()
    }
}

/// Compact card code: rank short form plus suit symbol for minors, the
/// engine glyph (roman numeral) for majors.
pub fn format_card(card: &Card) -> String {
    match (card.rank(), card.suit) {
        (Some(rank), Some(suit)) => format!("{}{}", rank.short(), format_suit(&suit)),
        _ => arcanum_engine::art::glyph(card, false),
    }
}

/// Full display line for a drawn card: name plus orientation marker.
pub fn format_card_position(cp: &CardPosition) -> String {
    if cp.is_reversed {
        format!("{} (reversed)", cp.card.name)
    } else {
        cp.card.name.clone()
    }
}

/// Rank label helper kept for symmetry with [`format_suit`].
pub fn format_rank(rank: &Rank) -> String {
    rank.short().to_string()
}
