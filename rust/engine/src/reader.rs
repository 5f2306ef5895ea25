//! Reading orchestration: a deck, a spread registry, and the rules that
//! bind one to the other.
//!
//! The reader resolves which selection strategy applies (explicit
//! override, then the spread's preference, then the deck default), draws
//! the spread's card count, enforces the spread's reversal policy, and
//! binds the draws to spread positions in deal order.

use chrono::{DateTime, Utc};

use crate::deck::{Deck, DrawOptions};
use crate::errors::EngineError;
use crate::selection::{CardPosition, SelectionKind};
use crate::spread::{LayoutSlot, Spread, SpreadPosition, SpreadRegistry};

/// A completed reading: the spread it was drawn against, one card per
/// spread position, and when it happened.
#[derive(Debug, Clone)]
pub struct SpreadReading {
    pub spread: Spread,
    pub cards: Vec<CardPosition>,
    pub timestamp: DateTime<Utc>,
}

/// Remaining/total card counts of the reader's deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckInfo {
    pub remaining: usize,
    pub total: usize,
}

pub struct SpreadReader {
    deck: Deck,
    spreads: SpreadRegistry,
}

impl SpreadReader {
    pub fn new() -> Self {
        Self::with_deck(Deck::new())
    }

    /// Reader over a caller-supplied deck (seeded decks for tests).
    pub fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            spreads: SpreadRegistry::builtin(),
        }
    }

    /// Perform a reading against a registered spread.
    pub fn perform_reading(
        &mut self,
        spread_name: &str,
        strategy: Option<SelectionKind>,
    ) -> Result<SpreadReading, EngineError> {
        let spread = self.spreads.get(spread_name)?.clone();
        self.perform_custom_reading(&spread, strategy)
    }

    /// Perform a reading against any spread object, registered or not.
    pub fn perform_custom_reading(
        &mut self,
        spread: &Spread,
        strategy: Option<SelectionKind>,
    ) -> Result<SpreadReading, EngineError> {
        let kind = self.resolve_strategy(spread, strategy)?;
        let mut drawn = self.deck.select_cards(
            spread.card_count(),
            DrawOptions {
                strategy: Some(kind),
                allow_reversals: spread.allow_reversals,
            },
        )?;

        // The spread's policy wins over whatever the strategy decided.
        if !spread.allow_reversals {
            for cp in &mut drawn {
                cp.is_reversed = false;
            }
        }

        // Bind draws to positions by deal order: the i-th drawn card fills
        // the i-th dealt position, and takes that position's id.
        let mut order: Vec<&SpreadPosition> = spread.positions.iter().collect();
        order.sort_by_key(|p| p.deal_order);
        for (cp, pos) in drawn.iter_mut().zip(order) {
            cp.position = pos.position;
        }

        Ok(SpreadReading {
            spread: spread.clone(),
            cards: drawn,
            timestamp: Utc::now(),
        })
    }

    /// Strategy priority: explicit override, then the spread's preferred
    /// strategy by name, then the deck default.
    fn resolve_strategy(
        &self,
        spread: &Spread,
        explicit: Option<SelectionKind>,
    ) -> Result<SelectionKind, EngineError> {
        if let Some(kind) = explicit {
            return Ok(kind);
        }
        if let Some(name) = &spread.preferred_strategy {
            return SelectionKind::from_name(name);
        }
        Ok(self.deck.default_selection())
    }

    /// Build a validated ad hoc spread without registering it.
    #[allow(clippy::too_many_arguments)]
    pub fn create_custom_spread(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        positions: Vec<SpreadPosition>,
        layout: Vec<LayoutSlot>,
        allow_reversals: bool,
        preferred_strategy: Option<String>,
    ) -> Result<Spread, EngineError> {
        Spread::new(
            name,
            description,
            positions,
            layout,
            allow_reversals,
            preferred_strategy,
        )
    }

    pub fn spread(&self, name: &str) -> Result<&Spread, EngineError> {
        self.spreads.get(name)
    }

    pub fn register_spread(&mut self, spread: Spread) {
        self.spreads.register(spread);
    }

    pub fn available_spreads(&self) -> Vec<String> {
        self.spreads.names()
    }

    pub fn available_strategies(&self) -> Vec<&'static str> {
        SelectionKind::all().iter().map(|k| k.name()).collect()
    }

    pub fn deck_info(&self) -> DeckInfo {
        DeckInfo {
            remaining: self.deck.remaining_count(),
            total: self.deck.total_count(),
        }
    }

    pub fn reset_deck(&mut self) {
        self.deck.reset();
    }

    pub fn set_default_strategy(&mut self, kind: SelectionKind) {
        self.deck.set_default_selection(kind);
    }
}

impl Default for SpreadReader {
    fn default() -> Self {
        Self::new()
    }
}
