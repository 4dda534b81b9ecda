// src/rank/iterate.rs
//! Iterative estimator: repeated synchronous sweeps of the PageRank recurrence.

use tracing::{debug, info};

use super::{check_inputs, page_count, Ranks, DEFAULT_DAMPING};
use crate::corpus::Corpus;
use crate::error::{RankError, Result};

/// Largest per-page change that still counts as converged.
pub const CONVERGENCE_THRESHOLD: f64 = 0.001;

/// Sweeps attempted before giving up with [`RankError::NotConverged`].
pub const MAX_SWEEPS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationOptions {
    pub damping: f64,
    /// Every page must move by strictly less than this for the run to stop.
    pub threshold: f64,
    pub max_sweeps: usize,
}

impl Default for IterationOptions {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            threshold: CONVERGENCE_THRESHOLD,
            max_sweeps: MAX_SWEEPS,
        }
    }
}

/// Computes PageRank by iteration with the default threshold and sweep cap.
///
/// # Errors
/// See [`iterate_pagerank_with`].
pub fn iterate_pagerank<P: Ord + Clone>(corpus: &Corpus<P>, damping: f64) -> Result<Ranks<P>> {
    let options = IterationOptions {
        damping,
        ..IterationOptions::default()
    };
    iterate_pagerank_with(corpus, &options)
}

/// Computes PageRank by sweeping from the uniform distribution until no page
/// moves by `threshold` or more, returning the ranks of the last sweep.
///
/// # Errors
/// Returns an invalid-input error for an empty corpus or out-of-range options,
/// and [`RankError::NotConverged`] if `max_sweeps` sweeps were not enough.
pub fn iterate_pagerank_with<P: Ord + Clone>(
    corpus: &Corpus<P>,
    options: &IterationOptions,
) -> Result<Ranks<P>> {
    check_inputs(corpus, options.damping)?;
    if !(options.threshold > 0.0) {
        return Err(RankError::InvalidThreshold(options.threshold));
    }
    if options.max_sweeps == 0 {
        return Err(RankError::InvalidSweepCap);
    }

    let mut ranks = initialize_ranks(corpus);

    for round in 1..=options.max_sweeps {
        let next = sweep(corpus, &ranks, options.damping);
        let converged = has_converged(&ranks, &next, options.threshold);
        ranks = next;

        if converged {
            info!(sweeps = round, pages = corpus.len(), "iteration converged");
            return Ok(ranks);
        }
        debug!(sweep = round, "ranks still moving");
    }

    Err(RankError::NotConverged {
        sweeps: options.max_sweeps,
    })
}

/// Applies the recurrence once to every page, reading only from `ranks`.
///
/// Pages missing from `ranks` are taken to hold no rank.
#[must_use]
pub fn sweep<P: Ord + Clone>(corpus: &Corpus<P>, ranks: &Ranks<P>, damping: f64) -> Ranks<P> {
    let n = page_count(corpus);
    let teleport = (1.0 - damping) / n;

    corpus
        .pages()
        .map(|page| {
            let incoming = compute_incoming_rank(page, corpus, ranks, n);
            (page.clone(), damping * incoming + teleport)
        })
        .collect()
}

fn initialize_ranks<P: Ord + Clone>(corpus: &Corpus<P>) -> Ranks<P> {
    let n = page_count(corpus);
    corpus.pages().map(|p| (p.clone(), 1.0 / n)).collect()
}

#[allow(clippy::cast_precision_loss)]
fn compute_incoming_rank<P: Ord>(target: &P, corpus: &Corpus<P>, ranks: &Ranks<P>, n: f64) -> f64 {
    let mut rank = 0.0;

    for (source, links) in corpus {
        let source_rank = ranks.get(source).copied().unwrap_or(0.0);

        // A sink behaves as if it linked to every page, itself included.
        if links.is_empty() {
            rank += source_rank / n;
        } else if links.contains(target) {
            rank += source_rank / links.len() as f64;
        }
    }

    rank
}

fn has_converged<P: Ord>(old: &Ranks<P>, new: &Ranks<P>, threshold: f64) -> bool {
    new.iter().all(|(page, rank)| {
        let before = old.get(page).copied().unwrap_or(0.0);
        (rank - before).abs() < threshold
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(edges: &[(&str, &[&str])]) -> Corpus<String> {
        Corpus::from_links(edges.iter().map(|(page, links)| {
            (
                (*page).to_string(),
                links.iter().map(|l| (*l).to_string()).collect::<Vec<_>>(),
            )
        }))
    }

    #[test]
    fn sweep_reads_only_previous_ranks() {
        // With in-place updates the second page would see a's new rank.
        let c = corpus(&[("a", &["b"]), ("b", &["a"])]);
        let start: Ranks<String> = [("a".to_string(), 1.0), ("b".to_string(), 0.0)].into();
        let next = sweep(&c, &start, 0.5);
        assert!((next["a"] - 0.25).abs() < 1e-12);
        assert!((next["b"] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn zero_threshold_is_rejected() {
        let c = corpus(&[("a", &[])]);
        let options = IterationOptions {
            threshold: 0.0,
            ..IterationOptions::default()
        };
        let err = iterate_pagerank_with(&c, &options).unwrap_err();
        assert!(matches!(err, RankError::InvalidThreshold(_)));
    }

    #[test]
    fn sweep_cap_surfaces_as_not_converged() {
        let c = corpus(&[("a", &["b"]), ("b", &[]), ("c", &["a", "b"])]);
        let options = IterationOptions {
            threshold: 1e-15,
            max_sweeps: 1,
            ..IterationOptions::default()
        };
        let err = iterate_pagerank_with(&c, &options).unwrap_err();
        assert!(matches!(err, RankError::NotConverged { sweeps: 1 }));
        assert!(!err.is_invalid_input());
    }
}
