//! Command-line argument types for the `arcanum` binary.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "arcanum",
    version,
    about = "Divination deck readings, spreads, and lottery picks"
)]
pub struct ArcanumCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Perform a spread reading
    Reading {
        /// Registered spread name (config default when omitted)
        #[arg(long)]
        spread: Option<String>,
        /// Selection strategy override (deal, fan-pick)
        #[arg(long)]
        strategy: Option<String>,
        /// RNG seed for a reproducible reading
        #[arg(long)]
        seed: Option<u64>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Animated SVG (vector bodies with fade-in) instead of embedded images
        #[arg(long)]
        animate: bool,
        /// Load the spread from a JSON file instead of the registry
        #[arg(long)]
        spread_file: Option<String>,
    },
    /// List registered spreads or describe one
    Spreads {
        /// Describe a single spread instead of listing all
        #[arg(long)]
        name: Option<String>,
        /// Emit the spread definition as JSON
        #[arg(long)]
        json: bool,
    },
    /// Draw cards from a freshly shuffled deck
    Draw {
        /// Number of cards to draw
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// RNG seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
        /// Selection strategy (deal, fan-pick)
        #[arg(long)]
        strategy: Option<String>,
        /// Allow reversed cards
        #[arg(long)]
        reversals: bool,
    },
    /// Derive lottery numbers from drawn cards
    Lottery {
        /// How many numbers to produce
        #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..=77))]
        picks: u8,
        /// RNG seed for reproducible picks
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}

/// Output surface for the `reading` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Position-by-position text plus a layout grid
    Text,
    /// One composed SVG document
    Svg,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Svg => "svg",
        })
    }
}
