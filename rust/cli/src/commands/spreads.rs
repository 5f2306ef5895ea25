//! Spreads command handler: list or describe registered spreads.

use std::io::Write;

use arcanum_engine::reader::SpreadReader;
use arcanum_engine::spread::Spread;

use crate::error::CliError;

/// Handle the spreads command.
///
/// Without `--name`, lists every registered spread with its card count.
/// With `--name`, prints one spread in full; `--json` switches either
/// view to the JSON definition, which round-trips through
/// [`Spread::from_json`].
pub fn handle_spreads_command(
    name: Option<String>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let reader = SpreadReader::new();

    match name {
        Some(name) => {
            let spread = reader.spread(&name)?;
            if json {
                writeln!(out, "{}", to_pretty_json(spread)?)?;
            } else {
                write_spread_detail(spread, out)?;
            }
        }
        None => {
            let spreads: Vec<&Spread> = reader
                .available_spreads()
                .iter()
                .map(|n| reader.spread(n))
                .collect::<Result<_, _>>()?;
            if json {
                let body = serde_json::to_string_pretty(&spreads)
                    .map_err(|e| CliError::Engine(e.to_string()))?;
                writeln!(out, "{}", body)?;
            } else {
                writeln!(out, "Available spreads:")?;
                for spread in spreads {
                    writeln!(
                        out,
                        "  {:<14} {:>2} cards  {}",
                        spread.name,
                        spread.card_count(),
                        spread.description
                    )?;
                }
            }
        }
    }
    Ok(())
}

fn to_pretty_json(spread: &Spread) -> Result<String, CliError> {
    serde_json::to_string_pretty(spread).map_err(|e| CliError::Engine(e.to_string()))
}

fn write_spread_detail(spread: &Spread, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "{}: {}", spread.name, spread.description)?;
    writeln!(
        out,
        "Reversals {}",
        if spread.allow_reversals { "allowed" } else { "off" }
    )?;
    if let Some(strategy) = &spread.preferred_strategy {
        writeln!(out, "Preferred strategy: {}", strategy)?;
    }
    writeln!(out, "Positions:")?;
    for pos in &spread.positions {
        writeln!(out, "  {}. {}: {}", pos.position, pos.name, pos.significance)?;
    }
    writeln!(out, "Layout:")?;
    for slot in &spread.layout {
        match slot.rotation {
            Some(rot) => writeln!(
                out,
                "  position {} at ({}, {}) rotated {} deg",
                slot.position, slot.x, slot.y, rot
            )?,
            None => writeln!(out, "  position {} at ({}, {})", slot.position, slot.x, slot.y)?,
        }
    }
    Ok(())
}
