//! Deterministic card-to-number mapping for lottery picks.
//!
//! Every card except The Fool maps to a distinct integer in 1..=77:
//! Major Arcana keep their own numbers, and each suit owns a contiguous
//! 14-wide block above them. The Fool (number 0) is excluded from the
//! numbered sequence and maps to `None`; it never maps to 0.

use crate::cards::{all_suits, Arcana, Card, Suit};

/// Smallest number the mapping produces.
pub const LOTTERY_MIN: u8 = 1;
/// Largest number the mapping produces.
pub const LOTTERY_MAX: u8 = 77;

/// First number of a suit's block; blocks sit end to end above the
/// Major Arcana range.
pub fn suit_base(suit: Suit) -> u8 {
    let index = all_suits()
        .iter()
        .position(|&s| s == suit)
        .unwrap_or_default() as u8;
    22 + index * 14
}

/// Map a card to its lottery number.
///
/// The Fool returns `None`; majors 1..=21 map to themselves; a minor of
/// rank r in a suit with base b maps to b + r - 1 (Ace at the base, King
/// at base + 13). Over the full catalog the non-`None` image is exactly
/// 1..=77 with no collisions.
pub fn map_card_to_number(card: &Card) -> Option<u8> {
    match card.arcana {
        Arcana::Major => {
            if card.number == 0 {
                None
            } else {
                Some(card.number)
            }
        }
        Arcana::Minor => {
            let suit = card.suit?;
            Some(suit_base(suit) + card.number - 1)
        }
    }
}
