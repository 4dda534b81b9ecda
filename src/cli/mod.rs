// src/cli/mod.rs
//! Command-line front end.

pub mod args;
pub mod handlers;

pub use args::Cli;
pub use handlers::{rank_corpus, run};
