// src/rank/mod.rs
//! PageRank estimation: the transition model and the two estimators built on it.

pub mod iterate;
pub mod sample;
pub mod transition;

use std::collections::BTreeMap;

use crate::corpus::Corpus;
use crate::error::{RankError, Result};

pub use iterate::{iterate_pagerank, iterate_pagerank_with, sweep, IterationOptions};
pub use sample::{sample_pagerank, DEFAULT_SAMPLES};
pub use transition::transition_model;

/// Conventional probability of following a link instead of teleporting.
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Where the surfer goes next, keyed by page.
pub type Distribution<P> = BTreeMap<P, f64>;

/// Estimated rank per page. Values sum to 1.
pub type Ranks<P> = BTreeMap<P, f64>;

/// Shared precondition of every estimator: a non-empty corpus and a damping
/// factor in the open interval (0, 1). NaN fails the range check.
pub(crate) fn check_inputs<P: Ord>(corpus: &Corpus<P>, damping: f64) -> Result<()> {
    if corpus.is_empty() {
        return Err(RankError::EmptyCorpus);
    }
    if !(damping > 0.0 && damping < 1.0) {
        return Err(RankError::InvalidDamping(damping));
    }
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn page_count<P: Ord>(corpus: &Corpus<P>) -> f64 {
    corpus.len() as f64
}
