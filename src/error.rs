// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("corpus is empty")]
    EmptyCorpus,

    #[error("damping factor must lie strictly between 0 and 1 (got {0})")]
    InvalidDamping(f64),

    #[error("sample count must be at least 1")]
    InvalidSampleCount,

    #[error("convergence threshold must be positive (got {0})")]
    InvalidThreshold(f64),

    #[error("sweep cap must be at least 1")]
    InvalidSweepCap,

    #[error("precision must be at most 12 decimal places (got {0})")]
    InvalidPrecision(usize),

    #[error("page not in corpus: {0}")]
    UnknownPage(String),

    #[error("page {page} links to {target}, which is not in the corpus")]
    DanglingLink { page: String, target: String },

    #[error("iteration did not converge within {sweeps} sweeps")]
    NotConverged { sweeps: usize },

    #[error("weighted draw failed: {0}")]
    Sampling(#[from] rand::distributions::WeightedError),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

impl RankError {
    /// True for errors caused by the caller's input rather than by the run itself.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyCorpus
                | Self::InvalidDamping(_)
                | Self::InvalidSampleCount
                | Self::InvalidThreshold(_)
                | Self::InvalidSweepCap
                | Self::InvalidPrecision(_)
                | Self::UnknownPage(_)
                | Self::DanglingLink { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RankError>;

// Allow `?` on std::io::Error by converting to RankError::Io with unknown path.
impl From<std::io::Error> for RankError {
    fn from(source: std::io::Error) -> Self {
        RankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors, keeping the path when walkdir knows it
impl From<walkdir::Error> for RankError {
    fn from(e: walkdir::Error) -> Self {
        let path = e
            .path()
            .map_or_else(|| PathBuf::from("<unknown>"), std::path::Path::to_path_buf);
        let source = e
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
        RankError::Io { source, path }
    }
}
