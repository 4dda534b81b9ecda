// src/corpus.rs
//! The closed link graph both estimators read from.

use std::collections::{btree_map, BTreeMap, BTreeSet};
use std::fmt::Display;

use crate::error::{RankError, Result};

/// Mapping from page to the set of in-corpus pages it links to.
///
/// Every link target is itself a page of the corpus. A page with no links is a
/// sink. Keys and link sets are ordered so that every walk over the corpus is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus<P: Ord> {
    links: BTreeMap<P, BTreeSet<P>>,
}

impl<P: Ord + Clone + Display> Corpus<P> {
    /// Builds a corpus from an already-closed link map.
    ///
    /// # Errors
    /// Returns [`RankError::DanglingLink`] if any target is not a key of `links`.
    pub fn new(links: BTreeMap<P, BTreeSet<P>>) -> Result<Self> {
        for (page, targets) in &links {
            if let Some(target) = targets.iter().find(|t| !links.contains_key(*t)) {
                return Err(RankError::DanglingLink {
                    page: page.to_string(),
                    target: target.to_string(),
                });
            }
        }
        Ok(Self { links })
    }

    /// Builds a corpus from raw extracted links, dropping self-links and any
    /// target that is not one of the listed pages.
    pub fn from_links<I, L>(raw: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        L: IntoIterator<Item = P>,
    {
        let raw: BTreeMap<P, BTreeSet<P>> = raw
            .into_iter()
            .map(|(page, targets)| (page, targets.into_iter().collect()))
            .collect();

        let links = raw
            .iter()
            .map(|(page, targets)| {
                let kept = targets
                    .iter()
                    .filter(|t| *t != page && raw.contains_key(*t))
                    .cloned()
                    .collect();
                (page.clone(), kept)
            })
            .collect();

        Self { links }
    }
}

impl<P: Ord> Corpus<P> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    #[must_use]
    pub fn contains(&self, page: &P) -> bool {
        self.links.contains_key(page)
    }

    /// Total number of links across all pages.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.values().map(BTreeSet::len).sum()
    }

    /// Outbound links of `page`, or `None` if it is not in the corpus.
    #[must_use]
    pub fn links(&self, page: &P) -> Option<&BTreeSet<P>> {
        self.links.get(page)
    }

    /// Pages in ascending order.
    pub fn pages(&self) -> impl Iterator<Item = &P> {
        self.links.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, P, BTreeSet<P>> {
        self.links.iter()
    }
}

impl<'a, P: Ord> IntoIterator for &'a Corpus<P> {
    type Item = (&'a P, &'a BTreeSet<P>);
    type IntoIter = btree_map::Iter<'a, P, BTreeSet<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn new_rejects_dangling_target() {
        let mut links = BTreeMap::new();
        links.insert("a.html".to_string(), set(&["missing.html"]));
        let err = Corpus::new(links).unwrap_err();
        assert!(matches!(err, RankError::DanglingLink { .. }));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn from_links_drops_self_and_outside_links() {
        let corpus = Corpus::from_links(vec![
            ("a.html".to_string(), vec!["a.html".to_string(), "b.html".to_string()]),
            ("b.html".to_string(), vec!["http://elsewhere".to_string()]),
        ]);
        assert_eq!(corpus.links(&"a.html".to_string()), Some(&set(&["b.html"])));
        assert_eq!(corpus.links(&"b.html".to_string()), Some(&BTreeSet::new()));
    }
}
