// tests/common/mod.rs
//! Corpus builders shared by the integration tests.

#![allow(dead_code)]

use pagerank_core::Corpus;
use std::collections::{BTreeMap, BTreeSet};

/// Builds a closed corpus from `(page, links)` pairs.
pub fn corpus(edges: &[(&str, &[&str])]) -> Corpus<String> {
    let links: BTreeMap<String, BTreeSet<String>> = edges
        .iter()
        .map(|(page, targets)| {
            (
                (*page).to_string(),
                targets.iter().map(|t| (*t).to_string()).collect(),
            )
        })
        .collect();
    Corpus::new(links).unwrap()
}

/// 1 <-> 2 <-> 3
pub fn chain() -> Corpus<String> {
    corpus(&[
        ("1.html", &["2.html"]),
        ("2.html", &["1.html", "3.html"]),
        ("3.html", &["2.html"]),
    ])
}

pub fn key(page: &str) -> String {
    page.to_string()
}

pub fn total<P>(ranks: &BTreeMap<P, f64>) -> f64 {
    ranks.values().sum()
}
