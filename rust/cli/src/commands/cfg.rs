//! Cfg command handler: show resolved configuration and value origins.

use std::io::Write;

use crate::config;
use crate::error::CliError;

/// Handle the cfg command.
///
/// Prints every configuration field with the source it was resolved from
/// (default, file, or env).
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    let cfg = &resolved.config;
    let sources = &resolved.sources;

    writeln!(out, "Configuration:")?;
    writeln!(
        out,
        "  default_spread = {} ({})",
        cfg.default_spread,
        sources.default_spread.label()
    )?;
    writeln!(
        out,
        "  strategy = {} ({})",
        cfg.strategy.as_deref().unwrap_or("(unset)"),
        sources.strategy.label()
    )?;
    match cfg.seed {
        Some(seed) => writeln!(out, "  seed = {} ({})", seed, sources.seed.label())?,
        None => writeln!(out, "  seed = (unset) ({})", sources.seed.label())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cfg_command_prints_every_field() {
        let mut out = Vec::new();
        handle_cfg_command(&mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Configuration:"));
        assert!(output.contains("default_spread = "));
        assert!(output.contains("strategy = "));
        assert!(output.contains("seed = "));
    }
}
