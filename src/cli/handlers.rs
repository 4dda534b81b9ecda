// src/cli/handlers.rs
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use super::args::Cli;
use crate::config::{Config, RankConfig};
use crate::corpus::Corpus;
use crate::crawl::crawl;
use crate::rank::{iterate_pagerank_with, sample_pagerank};
use crate::reporting::{self, IterationResult, RankReport, SamplingResult};

/// Loads config, crawls the corpus, ranks it and prints the report.
///
/// # Errors
/// Returns error if config or corpus cannot be read, or either estimator fails.
pub fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    let corpus = crawl(&cli.corpus)
        .with_context(|| format!("Failed to crawl {}", cli.corpus.display()))?;
    info!(pages = corpus.len(), "crawled corpus");

    let report = rank_corpus(&corpus, &config.rank)?;
    reporting::print_report(&report, &config.output)
}

/// Runs both estimators over the same corpus, side by side.
///
/// # Errors
/// Returns the first estimator error; no partial report is produced.
pub fn rank_corpus(corpus: &Corpus<String>, rank: &RankConfig) -> crate::error::Result<RankReport> {
    let mut rng = match rank.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let options = rank.iteration_options();

    let (sampled, iterated) = rayon::join(
        || sample_pagerank(corpus, rank.damping, rank.samples, &mut rng),
        || iterate_pagerank_with(corpus, &options),
    );

    Ok(RankReport {
        sampling: SamplingResult {
            samples: rank.samples,
            ranks: sampled?,
        },
        iteration: IterationResult { ranks: iterated? },
    })
}
