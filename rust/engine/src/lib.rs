//! # arcanum-engine: Divination Deck & Reading Engine
//!
//! A 78-card divination deck with pluggable shuffle and selection
//! strategies, spread-based readings, text/SVG layout rendering, and a
//! deterministic card-to-number lottery mapping.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Arcana, Card) and the
//!   fixed 78-card catalog
//! - [`art`] - Text glyphs and SVG markup for single cards
//! - [`shuffle`] - Shuffle strategies (uniform Fisher-Yates, biased riffle)
//! - [`selection`] - Draw strategies (sequential deal, fan pick) and
//!   reversal orientation
//! - [`deck`] - The stateful card pool with ChaCha20 RNG
//! - [`spread`] - Spread templates, validation, and the built-in registry
//! - [`reader`] - Reading orchestration binding deck draws to spreads
//! - [`render`] - Text-grid and SVG rendering of completed readings
//! - [`lottery`] - Card-to-number mapping for lottery picks
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use arcanum_engine::deck::Deck;
//! use arcanum_engine::reader::SpreadReader;
//!
//! // Seeded decks make readings reproducible
//! let mut reader = SpreadReader::with_deck(Deck::new_with_seed(42));
//! let reading = reader.perform_reading("three-card", None).unwrap();
//! assert_eq!(reading.cards.len(), 3);
//!
//! let grid = arcanum_engine::render::render_text(&reading);
//! assert_eq!(grid.lines().count(), 1);
//! ```
//!
//! ## Lottery Mapping
//!
//! Every card except The Fool maps to a distinct number in 1..=77:
//!
//! ```rust
//! use arcanum_engine::cards::full_catalog;
//! use arcanum_engine::lottery::map_card_to_number;
//!
//! let catalog = full_catalog();
//! assert_eq!(map_card_to_number(&catalog[0]), None);      // The Fool
//! assert_eq!(map_card_to_number(&catalog[21]), Some(21)); // The World
//! assert_eq!(map_card_to_number(&catalog[22]), Some(22)); // Ace of Wands
//! ```

pub mod art;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod lottery;
pub mod reader;
pub mod render;
pub mod selection;
pub mod shuffle;
pub mod spread;
