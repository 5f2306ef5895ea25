use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use arcanum_engine::cards::{full_catalog, Card};
use arcanum_engine::shuffle::{FisherYates, Riffle, ShuffleKind, ShuffleStrategy};

fn ids(cards: &[Card]) -> Vec<u8> {
    cards.iter().map(|c| c.id).collect()
}

#[test]
fn every_strategy_produces_a_permutation() {
    let catalog = full_catalog();
    for kind in ShuffleKind::all() {
        let mut rng = ChaCha20Rng::seed_from_u64(99);
        let shuffled = kind.strategy().shuffle(&catalog, &mut rng);
        assert_eq!(shuffled.len(), catalog.len(), "{}", kind.name());

        let before: HashSet<u8> = ids(&catalog).into_iter().collect();
        let after: HashSet<u8> = ids(&shuffled).into_iter().collect();
        assert_eq!(before, after, "{} dropped or duplicated a card", kind.name());
    }
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let catalog = full_catalog();
    let mut rng_a = ChaCha20Rng::seed_from_u64(12345);
    let mut rng_b = ChaCha20Rng::seed_from_u64(12345);
    let a = FisherYates.shuffle(&catalog, &mut rng_a);
    let b = FisherYates.shuffle(&catalog, &mut rng_b);
    assert_eq!(ids(&a), ids(&b), "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let catalog = full_catalog();
    let mut rng_a = ChaCha20Rng::seed_from_u64(1);
    let mut rng_b = ChaCha20Rng::seed_from_u64(2);
    let a = FisherYates.shuffle(&catalog, &mut rng_a);
    let b = FisherYates.shuffle(&catalog, &mut rng_b);
    assert_ne!(
        ids(&a),
        ids(&b),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn riffle_reorders_but_preserves_the_multiset() {
    let catalog = full_catalog();
    let mut rng = ChaCha20Rng::seed_from_u64(777);
    let shuffled = Riffle.shuffle(&catalog, &mut rng);
    assert_ne!(ids(&shuffled), ids(&catalog), "78 cards should move");

    let mut sorted = ids(&shuffled);
    sorted.sort_unstable();
    let expected: Vec<u8> = (0..78).collect();
    assert_eq!(sorted, expected);
}

#[test]
fn strategies_accept_small_and_empty_pools() {
    let empty: Vec<Card> = Vec::new();
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    assert!(FisherYates.shuffle(&empty, &mut rng).is_empty());
    assert!(Riffle.shuffle(&empty, &mut rng).is_empty());

    let pair = &full_catalog()[..2];
    let out = Riffle.shuffle(pair, &mut rng);
    assert_eq!(out.len(), 2);
}
