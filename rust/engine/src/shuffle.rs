//! Shuffle strategies over the card pool.
//!
//! A strategy reorders a card sequence into a new permutation without
//! dropping or duplicating anything. Randomness is injected as
//! `&mut dyn RngCore` so callers control seeding.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::EngineError;

/// Trait for card-pool shuffling.
pub trait ShuffleStrategy {
    /// Returns a permutation of `cards`: same length, same id multiset.
    fn shuffle(&self, cards: &[Card], rng: &mut dyn RngCore) -> Vec<Card>;
}

/// Uniform Fisher-Yates shuffle. Every ordering is equally likely.
#[derive(Debug, Clone, Copy, Default)]
pub struct FisherYates;

impl ShuffleStrategy for FisherYates {
    fn shuffle(&self, cards: &[Card], rng: &mut dyn RngCore) -> Vec<Card> {
        let mut out = cards.to_vec();
        for i in (1..out.len()).rev() {
            let j = rng.random_range(0..=i);
            out.swap(i, j);
        }
        out
    }
}

/// Riffle shuffle emulating a hand-shuffled deck: cut at the midpoint,
/// interleave by fair coin flips, and repeat the pass 3..=7 times.
/// Deliberately biased; clusters survive in a way a uniform shuffle
/// would destroy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Riffle;

impl ShuffleStrategy for Riffle {
    fn shuffle(&self, cards: &[Card], rng: &mut dyn RngCore) -> Vec<Card> {
        let mut out = cards.to_vec();
        let passes = rng.random_range(3..=7);
        for _ in 0..passes {
            out = riffle_once(&out, rng);
        }
        out
    }
}

fn riffle_once(cards: &[Card], rng: &mut dyn RngCore) -> Vec<Card> {
    let mid = cards.len() / 2;
    let mut left = mid;
    let mut right = cards.len();
    let mut out = Vec::with_capacity(cards.len());
    let mut i = 0;
    let mut j = mid;
    while out.len() < cards.len() {
        let from_left = if left == 0 {
            false
        } else if right == mid {
            true
        } else {
            rng.random_bool(0.5)
        };
        if from_left {
            out.push(cards[i].clone());
            i += 1;
            left -= 1;
        } else {
            out.push(cards[j].clone());
            j += 1;
            right -= 1;
        }
    }
    out
}

/// The canonical registry of shuffle strategies, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShuffleKind {
    FisherYates,
    Riffle,
}

impl ShuffleKind {
    pub fn all() -> [ShuffleKind; 2] {
        [ShuffleKind::FisherYates, ShuffleKind::Riffle]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShuffleKind::FisherYates => "fisher-yates",
            ShuffleKind::Riffle => "riffle",
        }
    }

    pub fn from_name(name: &str) -> Result<ShuffleKind, EngineError> {
        Self::all()
            .into_iter()
            .find(|k| k.name() == name)
            .ok_or_else(|| EngineError::UnknownStrategy {
                name: name.to_string(),
            })
    }

    pub fn strategy(&self) -> &'static dyn ShuffleStrategy {
        match self {
            ShuffleKind::FisherYates => &FisherYates,
            ShuffleKind::Riffle => &Riffle,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use crate::cards::full_catalog;

    use super::*;

    #[test]
    fn riffle_pass_keeps_relative_order_within_halves() {
        let cards = full_catalog();
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let once = riffle_once(&cards, &mut rng);
        assert_eq!(once.len(), cards.len());

        // Cards from the top half must appear in their original order.
        let top_ids: Vec<u8> = cards[..39].iter().map(|c| c.id).collect();
        let surviving: Vec<u8> = once
            .iter()
            .map(|c| c.id)
            .filter(|id| top_ids.contains(id))
            .collect();
        assert_eq!(surviving, top_ids);
    }

    #[test]
    fn kind_round_trips_through_names() {
        for kind in ShuffleKind::all() {
            assert_eq!(ShuffleKind::from_name(kind.name()), Ok(kind));
        }
        assert!(matches!(
            ShuffleKind::from_name("overhand"),
            Err(EngineError::UnknownStrategy { name }) if name == "overhand"
        ));
    }

    #[test]
    fn riffle_handles_tiny_pools() {
        let cards = &full_catalog()[..1];
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let out = Riffle.shuffle(cards, &mut rng);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, cards[0].id);
    }
}
