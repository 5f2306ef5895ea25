//! Lottery command handler: derive numbers from drawn cards.
//!
//! Cards are drawn one at a time with the fan-pick strategy and mapped
//! through the engine's lottery mapping. The Fool carries no number; when
//! it turns up it is reported on stderr and a replacement card is drawn.

use std::io::Write;

use arcanum_engine::deck::{Deck, DrawOptions};
use arcanum_engine::lottery::map_card_to_number;
use arcanum_engine::selection::SelectionKind;

use crate::error::CliError;
use crate::ui;

/// Handle the lottery command.
///
/// Produces `picks` distinct numbers in 1..=77. Distinctness is inherited
/// from the deck: a card leaves the pool once drawn, and the mapping is
/// injective over mapped cards.
pub fn handle_lottery_command(
    picks: u8,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut deck = Deck::new_with_seed(seed.unwrap_or_else(rand::random));
    deck.shuffle();

    let options = DrawOptions {
        strategy: Some(SelectionKind::FanPick),
        allow_reversals: false,
    };
    let mut numbers = Vec::with_capacity(picks as usize);
    while numbers.len() < picks as usize {
        let drawn = deck.select_cards(1, options)?;
        let card = &drawn[0].card;
        match map_card_to_number(card) {
            Some(number) => numbers.push((number, card.name.clone())),
            None => {
                ui::display_warning(
                    err,
                    &format!("{} carries no number; drawing a replacement", card.name),
                )?;
            }
        }
    }

    let picks_line: Vec<String> = numbers.iter().map(|(n, _)| n.to_string()).collect();
    writeln!(out, "Lottery picks: {}", picks_line.join(" "))?;
    for (number, name) in &numbers {
        writeln!(out, "  {:>2}  ({})", number, name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_lottery_command_produces_distinct_numbers() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_lottery_command(6, Some(42), &mut out, &mut err).unwrap();

        let output = String::from_utf8(out).unwrap();
        let first_line = output.lines().next().unwrap();
        let numbers: Vec<u8> = first_line
            .trim_start_matches("Lottery picks: ")
            .split_whitespace()
            .map(|n| n.parse().unwrap())
            .collect();
        assert_eq!(numbers.len(), 6);

        let distinct: HashSet<u8> = numbers.iter().copied().collect();
        assert_eq!(distinct.len(), 6);
        assert!(numbers.iter().all(|&n| (1..=77).contains(&n)));
    }

    #[test]
    fn test_lottery_command_deterministic_with_seed() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        let mut err = Vec::new();
        handle_lottery_command(6, Some(7), &mut out1, &mut err).unwrap();
        handle_lottery_command(6, Some(7), &mut out2, &mut err).unwrap();
        assert_eq!(out1, out2);
    }

    #[test]
    fn test_lottery_command_survives_the_fool() {
        // 77 picks drain every mapped card, so The Fool either turns up
        // mid-draw (one warning) or is the lone card left behind.
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_lottery_command(77, Some(3), &mut out, &mut err).unwrap();

        let warnings = String::from_utf8(err).unwrap();
        let warning_count = warnings.matches("WARNING").count();
        assert!(warning_count <= 1);
        if warning_count == 1 {
            assert!(warnings.contains("The Fool"));
        }

        let output = String::from_utf8(out).unwrap();
        let mut numbers: Vec<u8> = output
            .lines()
            .next()
            .unwrap()
            .trim_start_matches("Lottery picks: ")
            .split_whitespace()
            .map(|n| n.parse().unwrap())
            .collect();
        numbers.sort_unstable();
        let expected: Vec<u8> = (1..=77).collect();
        assert_eq!(numbers, expected, "77 picks must exhaust the whole image");
    }
}
