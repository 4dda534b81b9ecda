// src/exit.rs
//! Standardized process exit codes for `pagerank`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::RankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum RankExit {
    /// Both estimators completed and results were printed.
    Success = 0,
    /// Generic error (I/O, unreadable config).
    Error = 1,
    /// Input validation failed (empty corpus, damping out of range, zero samples).
    InvalidInput = 2,
    /// The iterative estimator hit its sweep cap.
    NotConverged = 3,
}

impl RankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps a failed run to its exit code by looking for a [`RankError`] in the chain.
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.chain().find_map(|e| e.downcast_ref::<RankError>()) {
            Some(RankError::NotConverged { .. }) => Self::NotConverged,
            Some(e) if e.is_invalid_input() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for RankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
