//! The stateful card pool.
//!
//! A [`Deck`] owns the fixed 78-card catalog, a mutable pool of cards not
//! yet drawn, an RNG, and the default shuffle/selection strategies. Cards
//! drawn through [`Deck::select_cards`] leave the pool until [`Deck::reset`].
//!
//! A deck is single-owner mutable state; concurrent draws against one deck
//! must be serialized by the caller.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_catalog, Card};
use crate::errors::EngineError;
use crate::selection::{CardPosition, SelectionKind};
use crate::shuffle::ShuffleKind;

/// Per-draw options for [`Deck::select_cards`].
#[derive(Debug, Clone, Copy)]
pub struct DrawOptions {
    /// Strategy override; `None` uses the deck default.
    pub strategy: Option<SelectionKind>,
    pub allow_reversals: bool,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            strategy: None,
            allow_reversals: true,
        }
    }
}

#[derive(Debug)]
pub struct Deck {
    catalog: Vec<Card>,
    remaining: Vec<Card>,
    rng: ChaCha20Rng,
    default_shuffle: ShuffleKind,
    default_selection: SelectionKind,
}

impl Deck {
    /// Deck with an entropy-derived seed.
    pub fn new() -> Self {
        Self::new_with_seed(rand::random())
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let catalog = full_catalog();
        // Keep catalog order until shuffle is called explicitly
        Self {
            remaining: catalog.clone(),
            catalog,
            rng: ChaCha20Rng::seed_from_u64(seed),
            default_shuffle: ShuffleKind::FisherYates,
            default_selection: SelectionKind::FanPick,
        }
    }

    /// Reorder the remaining pool with the default shuffle strategy.
    pub fn shuffle(&mut self) {
        self.shuffle_with(self.default_shuffle);
    }

    pub fn shuffle_with(&mut self, kind: ShuffleKind) {
        self.remaining = kind.strategy().shuffle(&self.remaining, &mut self.rng);
    }

    /// Draw `count` cards from the remaining pool and remove them.
    ///
    /// The effective strategy is `options.strategy`, else the deck
    /// default. Drawn ids stay out of the pool until [`Deck::reset`].
    /// Capacity errors from the strategy propagate unmodified.
    pub fn select_cards(
        &mut self,
        count: usize,
        options: DrawOptions,
    ) -> Result<Vec<CardPosition>, EngineError> {
        let kind = options.strategy.unwrap_or(self.default_selection);
        let drawn = kind.strategy().select(
            &self.remaining,
            count,
            options.allow_reversals,
            &mut self.rng,
        )?;
        let drawn_ids: HashSet<u8> = drawn.iter().map(|cp| cp.card.id).collect();
        self.remaining.retain(|c| !drawn_ids.contains(&c.id));
        Ok(drawn)
    }

    /// Restore the full catalog into the pool and reshuffle it.
    pub fn reset(&mut self) {
        self.remaining = self.catalog.clone();
        self.shuffle();
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    pub fn total_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn default_shuffle(&self) -> ShuffleKind {
        self.default_shuffle
    }

    pub fn set_default_shuffle(&mut self, kind: ShuffleKind) {
        self.default_shuffle = kind;
    }

    pub fn default_selection(&self) -> SelectionKind {
        self.default_selection
    }

    pub fn set_default_selection(&mut self, kind: SelectionKind) {
        self.default_selection = kind;
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
