// src/config/mod.rs
pub mod types;

pub use self::types::{Config, OutputConfig, OutputFormat, RankConfig};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::RankError;

/// Config file picked up from the working directory when none is named.
pub const CONFIG_FILE: &str = "pagerank.toml";

/// Widest precision the reporter accepts.
pub const MAX_PRECISION: usize = 12;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads settings from `path`, or from `pagerank.toml` when it exists.
    ///
    /// A file named explicitly must exist; the implicit one is optional.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(CONFIG_FILE), false),
        };

        if !required && !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::parse_toml(&content)
            .with_context(|| format!("Invalid TOML in {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses config from TOML text; missing keys take their defaults.
    ///
    /// # Errors
    /// Returns error on malformed TOML or mistyped values.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Checks every setting against the ranges the estimators accept.
    ///
    /// # Errors
    /// Returns an invalid-input [`RankError`] for the first setting out of range.
    pub fn validate(&self) -> crate::error::Result<()> {
        let rank = &self.rank;
        if !(rank.damping > 0.0 && rank.damping < 1.0) {
            return Err(RankError::InvalidDamping(rank.damping));
        }
        if rank.samples == 0 {
            return Err(RankError::InvalidSampleCount);
        }
        if !(rank.threshold > 0.0) {
            return Err(RankError::InvalidThreshold(rank.threshold));
        }
        if rank.max_sweeps == 0 {
            return Err(RankError::InvalidSweepCap);
        }
        if self.output.precision > MAX_PRECISION {
            return Err(RankError::InvalidPrecision(self.output.precision));
        }
        Ok(())
    }
}
