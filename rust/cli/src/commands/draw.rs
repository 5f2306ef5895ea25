//! Draw command handler: raw card draws from a fresh shuffled deck.

use std::io::Write;

use arcanum_engine::art;
use arcanum_engine::deck::{Deck, DrawOptions};
use arcanum_engine::selection::SelectionKind;

use crate::error::CliError;
use crate::formatters::format_card_position;

/// Handle the draw command.
///
/// Shuffles a fresh deck (seeded when requested) and draws `count` cards
/// with the given strategy, listing glyph and name per card.
pub fn handle_draw_command(
    count: usize,
    seed: Option<u64>,
    strategy: Option<String>,
    reversals: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let kind = match strategy {
        Some(name) => Some(SelectionKind::from_name(&name)?),
        None => None,
    };
    let mut deck = Deck::new_with_seed(seed.unwrap_or_else(rand::random));
    deck.shuffle();
    let drawn = deck.select_cards(
        count,
        DrawOptions {
            strategy: kind,
            allow_reversals: reversals,
        },
    )?;

    writeln!(out, "Drew {} of {} cards:", drawn.len(), deck.total_count())?;
    for cp in &drawn {
        writeln!(
            out,
            "  {:<6} {}",
            art::glyph(&cp.card, cp.is_reversed),
            format_card_position(cp)
        )?;
    }
    Ok(())
}
