use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "pagerank", version, about = "Rank the pages of an HTML corpus")]
pub struct Cli {
    /// Directory holding the corpus' .html pages
    pub corpus: PathBuf,
    /// Probability of following a link instead of jumping to a random page
    #[arg(long, short)]
    pub damping: Option<f64>,
    /// Length of the random walk used by the sampling estimator
    #[arg(long, short = 'n')]
    pub samples: Option<usize>,
    /// Per-page change below which iteration stops
    #[arg(long)]
    pub threshold: Option<f64>,
    /// Give up iterating after this many sweeps
    #[arg(long)]
    pub max_sweeps: Option<usize>,
    /// Seed the random walk for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
    /// Decimal places per printed rank
    #[arg(long)]
    pub precision: Option<usize>,
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Read settings from FILE instead of ./pagerank.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Overwrites config values with any flags given on the command line.
    pub fn apply_overrides(&self, config: &mut Config) {
        let rank = &mut config.rank;
        if let Some(d) = self.damping {
            rank.damping = d;
        }
        if let Some(n) = self.samples {
            rank.samples = n;
        }
        if let Some(t) = self.threshold {
            rank.threshold = t;
        }
        if let Some(m) = self.max_sweeps {
            rank.max_sweeps = m;
        }
        if self.seed.is_some() {
            rank.seed = self.seed;
        }
        if let Some(p) = self.precision {
            config.output.precision = p;
        }
        if let Some(f) = self.format {
            config.output.format = f;
        }
    }
}
