// src/rank/transition.rs
//! Random-surfer transition model.

use std::fmt::Display;

use super::{check_inputs, page_count, Distribution};
use crate::corpus::Corpus;
use crate::error::{RankError, Result};

/// Returns the probability distribution over which page to visit after `page`.
///
/// With probability `damping` the surfer follows one of the page's links,
/// chosen uniformly; otherwise it jumps to any page of the corpus. A sink page
/// is treated as linking to every page, which makes its distribution uniform.
///
/// # Errors
/// Returns an invalid-input error if the corpus is empty, `damping` is not in
/// (0, 1), or `page` is not in the corpus.
pub fn transition_model<P>(corpus: &Corpus<P>, page: &P, damping: f64) -> Result<Distribution<P>>
where
    P: Ord + Clone + Display,
{
    check_inputs(corpus, damping)?;
    if !corpus.contains(page) {
        return Err(RankError::UnknownPage(page.to_string()));
    }
    Ok(distribution(corpus, page, damping))
}

/// Unchecked form of [`transition_model`]; callers guarantee the preconditions.
pub(crate) fn distribution<P: Ord + Clone>(
    corpus: &Corpus<P>,
    page: &P,
    damping: f64,
) -> Distribution<P> {
    let n = page_count(corpus);
    let linked = match corpus.links(page) {
        Some(links) if !links.is_empty() => links,
        _ => return corpus.pages().map(|p| (p.clone(), 1.0 / n)).collect(),
    };

    let base = (1.0 - damping) / n;
    #[allow(clippy::cast_precision_loss)]
    let follow = damping / linked.len() as f64;

    corpus
        .pages()
        .map(|p| {
            let prob = if linked.contains(p) { base + follow } else { base };
            (p.clone(), prob)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_page_is_rejected() {
        let corpus = Corpus::from_links(vec![("a.html".to_string(), Vec::new())]);
        let err = transition_model(&corpus, &"z.html".to_string(), 0.85).unwrap_err();
        assert!(matches!(err, RankError::UnknownPage(ref p) if p == "z.html"));
    }

    #[test]
    fn nan_damping_is_rejected() {
        let corpus = Corpus::from_links(vec![("a.html".to_string(), Vec::new())]);
        let err = transition_model(&corpus, &"a.html".to_string(), f64::NAN).unwrap_err();
        assert!(matches!(err, RankError::InvalidDamping(_)));
    }
}
