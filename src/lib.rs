//! PageRank for a closed corpus of HTML pages.
//!
//! [`rank::sample_pagerank`] estimates ranks from a random-surfer walk,
//! [`rank::iterate_pagerank`] solves the recurrence by repeated sweeps. Both
//! read a [`corpus::Corpus`], usually built by [`crawl::crawl`].

pub mod cli;
pub mod config;
pub mod corpus;
pub mod crawl;
pub mod error;
pub mod exit;
pub mod rank;
pub mod reporting;

pub use corpus::Corpus;
pub use error::{RankError, Result};
pub use rank::{iterate_pagerank, sample_pagerank, transition_model, Distribution, Ranks};
