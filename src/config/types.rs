use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::rank::{IterationOptions, DEFAULT_DAMPING, DEFAULT_SAMPLES};
use crate::rank::iterate::{CONVERGENCE_THRESHOLD, MAX_SWEEPS};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Length of the random walk.
    #[serde(default = "default_samples")]
    pub samples: usize,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_max_sweeps")]
    pub max_sweeps: usize,
    /// Fixed seed for the walk; unseeded runs draw from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            threshold: default_threshold(),
            max_sweeps: default_max_sweeps(),
            seed: None,
        }
    }
}

impl RankConfig {
    #[must_use]
    pub fn iteration_options(&self) -> IterationOptions {
        IterationOptions {
            damping: self.damping,
            threshold: self.threshold,
            max_sweeps: self.max_sweeps,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Decimal places printed per rank.
    #[serde(default = "default_precision")]
    pub precision: usize,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { precision: default_precision(), format: OutputFormat::Text }
    }
}

/// Contents of `pagerank.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub rank: RankConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

const fn default_damping() -> f64 { DEFAULT_DAMPING }
const fn default_samples() -> usize { DEFAULT_SAMPLES }
const fn default_threshold() -> f64 { CONVERGENCE_THRESHOLD }
const fn default_max_sweeps() -> usize { MAX_SWEEPS }
const fn default_precision() -> usize { 4 }
