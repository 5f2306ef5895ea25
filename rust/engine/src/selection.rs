//! Card selection strategies: how a draw picks cards out of a pool.
//!
//! A strategy turns a (possibly pre-shuffled) pool and a count into an
//! ordered list of [`CardPosition`]s with positions 1..=count. Reversal
//! orientation is decided here, one fair coin flip per drawn card, and
//! only when the caller allows reversals at all.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::EngineError;

/// A card drawn into a numbered slot, with its orientation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardPosition {
    pub card: Card,
    /// 1-based slot index; rebound to a spread position id by the reader.
    pub position: u8,
    pub is_reversed: bool,
}

/// Trait for draw strategies.
pub trait SelectionStrategy {
    /// Draw `count` cards from `pool` into positions 1..=count.
    ///
    /// Fails with [`EngineError::InsufficientCards`] when the pool is too
    /// small. The pool itself is not mutated; callers remove drawn cards.
    fn select(
        &self,
        pool: &[Card],
        count: usize,
        allow_reversals: bool,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<CardPosition>, EngineError>;
}

fn ensure_capacity(pool: &[Card], count: usize) -> Result<(), EngineError> {
    if count > pool.len() {
        return Err(EngineError::InsufficientCards {
            requested: count,
            available: pool.len(),
        });
    }
    Ok(())
}

/// The one reversal coin flip. Upright is forced whenever reversals are
/// disallowed.
fn draw_orientation(allow_reversals: bool, rng: &mut dyn RngCore) -> bool {
    allow_reversals && rng.random_bool(0.5)
}

/// Sequential draw: the first `count` cards of the pool, in pool order.
/// The tabletop equivalent of dealing off the top.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deal;

impl SelectionStrategy for Deal {
    fn select(
        &self,
        pool: &[Card],
        count: usize,
        allow_reversals: bool,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<CardPosition>, EngineError> {
        ensure_capacity(pool, count)?;
        Ok(pool
            .iter()
            .take(count)
            .enumerate()
            .map(|(i, card)| CardPosition {
                card: card.clone(),
                position: (i + 1) as u8,
                is_reversed: draw_orientation(allow_reversals, rng),
            })
            .collect())
    }
}

/// Random draw without replacement: like picking cards out of a fanned
/// deck. Keeps a working list of pool indices and removes each pick, so
/// no index can be chosen twice.
#[derive(Debug, Clone, Copy, Default)]
pub struct FanPick;

impl SelectionStrategy for FanPick {
    fn select(
        &self,
        pool: &[Card],
        count: usize,
        allow_reversals: bool,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<CardPosition>, EngineError> {
        ensure_capacity(pool, count)?;
        let mut indices: Vec<usize> = (0..pool.len()).collect();
        let mut out = Vec::with_capacity(count);
        for slot in 1..=count {
            let pick = rng.random_range(0..indices.len());
            let index = indices.swap_remove(pick);
            out.push(CardPosition {
                card: pool[index].clone(),
                position: slot as u8,
                is_reversed: draw_orientation(allow_reversals, rng),
            });
        }
        Ok(out)
    }
}

/// The canonical registry of selection strategies, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionKind {
    Deal,
    FanPick,
}

impl SelectionKind {
    pub fn all() -> [SelectionKind; 2] {
        [SelectionKind::Deal, SelectionKind::FanPick]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SelectionKind::Deal => "deal",
            SelectionKind::FanPick => "fan-pick",
        }
    }

    pub fn from_name(name: &str) -> Result<SelectionKind, EngineError> {
        Self::all()
            .into_iter()
            .find(|k| k.name() == name)
            .ok_or_else(|| EngineError::UnknownStrategy {
                name: name.to_string(),
            })
    }

    pub fn strategy(&self) -> &'static dyn SelectionStrategy {
        match self {
            SelectionKind::Deal => &Deal,
            SelectionKind::FanPick => &FanPick,
        }
    }
}
