//! Reading command handler: perform a spread reading and print it.
//!
//! The spread comes from the registry (by flag, or the configured
//! default) or from a JSON file. Output is either a position-by-position
//! text report with a layout grid, or a single composed SVG document.

use std::fs;
use std::io::Write;

use arcanum_engine::deck::Deck;
use arcanum_engine::reader::{SpreadReader, SpreadReading};
use arcanum_engine::render;
use arcanum_engine::selection::SelectionKind;
use arcanum_engine::spread::Spread;

use crate::cli::OutputFormat;
use crate::config;
use crate::error::CliError;
use crate::formatters::format_card_position;
use crate::ui;

/// Handle the reading command.
///
/// Resolves the spread (flag, config default, or `--spread-file`), seeds
/// a fresh deck, performs the reading, and renders it in the requested
/// format. A seed given on the command line or in config makes the
/// reading reproducible.
#[allow(clippy::too_many_arguments)]
pub fn handle_reading_command(
    spread: Option<String>,
    strategy: Option<String>,
    seed: Option<u64>,
    format: OutputFormat,
    animate: bool,
    spread_file: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;

    let kind = match strategy.or(cfg.strategy) {
        Some(name) => Some(SelectionKind::from_name(&name)?),
        None => None,
    };
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();
    let mut reader = SpreadReader::with_deck(deck);

    let reading = match spread_file {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            let custom = Spread::from_json(&json)?;
            reader.perform_custom_reading(&custom, kind)?
        }
        None => {
            let name = spread.unwrap_or(cfg.default_spread);
            reader.perform_reading(&name, kind)?
        }
    };

    match format {
        OutputFormat::Svg => {
            writeln!(out, "{}", render::render_svg(&reading, animate))?;
        }
        OutputFormat::Text => {
            if animate {
                ui::display_warning(err, "--animate only affects svg output")?;
            }
            write_text_report(&reading, out)?;
        }
    }
    Ok(())
}

fn write_text_report(reading: &SpreadReading, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(
        out,
        "Reading: {} ({} cards)",
        reading.spread.name,
        reading.cards.len()
    )?;
    writeln!(
        out,
        "Drawn at {}",
        reading.timestamp.format("%Y-%m-%d %H:%M UTC")
    )?;
    writeln!(out)?;

    for cp in &reading.cards {
        let Some(pos) = reading
            .spread
            .positions
            .iter()
            .find(|p| p.position == cp.position)
        else {
            continue;
        };
        writeln!(out, "{}. {}: {}", cp.position, pos.name, format_card_position(cp))?;
        writeln!(out, "   {}", cp.card.meaning(cp.is_reversed))?;
    }

    writeln!(out)?;
    writeln!(out, "Layout:")?;
    writeln!(out, "{}", render::render_text(reading))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    fn run(args: (Option<&str>, Option<u64>, OutputFormat)) -> String {
        let (spread, seed, format) = args;
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_reading_command(
            spread.map(str::to_string),
            None,
            seed,
            format,
            false,
            None,
            &mut out,
            &mut err,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_reading_command_reports_each_position() {
        let output = run((Some("three-card"), Some(42), OutputFormat::Text));
        assert!(output.contains("Reading: three-card (3 cards)"));
        assert!(output.contains("1. Past:"));
        assert!(output.contains("2. Present:"));
        assert!(output.contains("3. Future:"));
        assert!(output.contains("Layout:"));
    }

    #[test]
    fn test_reading_command_deterministic_with_seed() {
        let a = run((Some("celtic-cross"), Some(7), OutputFormat::Text));
        let b = run((Some("celtic-cross"), Some(7), OutputFormat::Text));
        // Timestamps differ between runs; card lines must not.
        let cards = |s: &str| {
            s.lines()
                .filter(|l| !l.starts_with("Drawn at"))
                .map(str::to_string)
                .collect::<Vec<_>>()
        };
        assert_eq!(cards(&a), cards(&b));
    }

    #[test]
    fn test_reading_command_svg_output() {
        let output = run((Some("single"), Some(3), OutputFormat::Svg));
        let trimmed = output.trim_end();
        assert!(trimmed.starts_with("<svg"));
        assert!(trimmed.ends_with("</svg>"));
    }

    #[test]
    fn test_reading_command_unknown_spread_fails() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_reading_command(
            Some("no-such-spread".to_string()),
            None,
            Some(1),
            OutputFormat::Text,
            false,
            None,
            &mut out,
            &mut err,
        );
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("no-such-spread"));
    }

    #[test]
    fn test_reading_command_unknown_strategy_fails() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_reading_command(
            Some("single".to_string()),
            Some("scrying".to_string()),
            Some(1),
            OutputFormat::Text,
            false,
            None,
            &mut out,
            &mut err,
        );
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("scrying"));
    }

    #[test]
    fn test_reading_command_with_spread_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "name": "from-file",
                "description": "loaded",
                "positions": [
                    {{"position": 1, "name": "Theme", "significance": "", "deal_order": 1}}
                ],
                "layout": [{{"position": 1, "x": 0, "y": 0}}]
            }}"#
        )
        .unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_reading_command(
            None,
            None,
            Some(9),
            OutputFormat::Text,
            false,
            Some(file.path().to_string_lossy().into_owned()),
            &mut out,
            &mut err,
        )
        .unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Reading: from-file (1 cards)"));
        assert!(output.contains("1. Theme:"));
    }

    #[test]
    fn test_animate_warns_in_text_mode() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_reading_command(
            Some("single".to_string()),
            None,
            Some(2),
            OutputFormat::Text,
            true,
            None,
            &mut out,
            &mut err,
        )
        .unwrap();
        let warnings = String::from_utf8(err).unwrap();
        assert!(warnings.contains("WARNING"));
    }
}
