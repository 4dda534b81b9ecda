// src/rank/sample.rs
//! Monte-Carlo estimator: a single random-surfer walk counted by visits.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use tracing::debug;

use super::transition::distribution;
use super::{check_inputs, Ranks};
use crate::corpus::Corpus;
use crate::error::{RankError, Result};

/// Walk length used when none is configured.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Estimates PageRank from a walk of `n` pages.
///
/// The first page is drawn uniformly, each following page from the transition
/// model of the current one. A page's rank is the share of the walk spent on it.
/// All draws come from `rng`, so a seeded generator reproduces the walk.
///
/// # Errors
/// Returns an invalid-input error if the corpus is empty, `damping` is not in
/// (0, 1), or `n` is zero.
#[allow(clippy::cast_precision_loss)]
pub fn sample_pagerank<P, R>(corpus: &Corpus<P>, damping: f64, n: usize, rng: &mut R) -> Result<Ranks<P>>
where
    P: Ord + Clone,
    R: Rng,
{
    check_inputs(corpus, damping)?;
    if n == 0 {
        return Err(RankError::InvalidSampleCount);
    }

    let pages: Vec<&P> = corpus.pages().collect();
    let mut counts = vec![0_usize; pages.len()];
    // The transition model only depends on the current page, so each page's
    // weighted table is built once, on first visit.
    let mut tables: Vec<Option<WeightedIndex<f64>>> = (0..pages.len()).map(|_| None).collect();

    let mut current = rng.gen_range(0..pages.len());
    counts[current] += 1;

    for _ in 1..n {
        let table = match tables[current].take() {
            Some(table) => table,
            None => WeightedIndex::new(distribution(corpus, pages[current], damping).values())?,
        };
        let next = table.sample(rng);
        tables[current] = Some(table);
        current = next;
        counts[current] += 1;
    }

    debug!(samples = n, pages = pages.len(), "random walk finished");

    let total = n as f64;
    Ok(pages
        .into_iter()
        .zip(counts)
        .map(|(page, count)| (page.clone(), count as f64 / total))
        .collect())
}
