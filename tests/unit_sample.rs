// tests/unit_sample.rs
//! Tests for the sampling estimator.

mod common;

use common::{chain, corpus, total};
use pagerank_core::{sample_pagerank, RankError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[test]
fn test_single_page_gets_everything() {
    let c = corpus(&[("a.html", &[])]);
    let ranks = sample_pagerank(&c, 0.85, 10_000, &mut rng(1)).unwrap();
    assert_eq!(ranks.len(), 1);
    assert_eq!(ranks["a.html"], 1.0);
}

#[test]
fn test_ranks_sum_to_one() {
    let c = corpus(&[
        ("a.html", &["b.html"]),
        ("b.html", &["c.html", "d.html"]),
        ("c.html", &[]),
        ("d.html", &["a.html", "b.html", "c.html"]),
    ]);
    for n in [1, 2, 7, 1000] {
        let ranks = sample_pagerank(&c, 0.85, n, &mut rng(n as u64)).unwrap();
        assert_eq!(ranks.len(), 4);
        assert!((total(&ranks) - 1.0).abs() < 1e-12, "n={n}");
        assert!(ranks.values().all(|r| (0.0..=1.0).contains(r)));
    }
}

#[test]
fn test_single_draw_lands_on_one_page() {
    let ranks = sample_pagerank(&chain(), 0.85, 1, &mut rng(3)).unwrap();
    let hits: Vec<_> = ranks.values().filter(|r| **r > 0.0).collect();
    assert_eq!(hits, vec![&1.0]);
}

#[test]
fn test_same_seed_same_walk() {
    let a = sample_pagerank(&chain(), 0.85, 5_000, &mut rng(42)).unwrap();
    let b = sample_pagerank(&chain(), 0.85, 5_000, &mut rng(42)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_walk_approaches_stationary_ranks() {
    // Stationary distribution of the 1 <-> 2 <-> 3 chain at d = 0.85.
    let ranks = sample_pagerank(&chain(), 0.85, 50_000, &mut rng(7)).unwrap();
    assert!((ranks["1.html"] - 0.2568).abs() < 0.02, "{ranks:?}");
    assert!((ranks["2.html"] - 0.4865).abs() < 0.02, "{ranks:?}");
    assert!((ranks["3.html"] - 0.2568).abs() < 0.02, "{ranks:?}");
}

#[test]
fn test_rejects_bad_input_before_drawing() {
    let c = chain();
    assert!(matches!(
        sample_pagerank(&c, 0.85, 0, &mut rng(0)),
        Err(RankError::InvalidSampleCount)
    ));
    assert!(matches!(
        sample_pagerank(&c, 1.0, 10, &mut rng(0)),
        Err(RankError::InvalidDamping(_))
    ));
    assert!(matches!(
        sample_pagerank(&corpus(&[]), 0.85, 10, &mut rng(0)),
        Err(RankError::EmptyCorpus)
    ));
}
