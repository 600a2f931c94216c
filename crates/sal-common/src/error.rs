//! Error types for salience.
//!
//! All failures surface eagerly, before any output row is produced. There is
//! nothing to retry: every computation here is deterministic and
//! side-effect-free, so a failed call fails identically on the next attempt
//! with the same inputs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for salience operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Estimator configuration errors (prior mode, pseudo-count settings).
    Config,
    /// Count-table shape and content errors.
    Input,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Input => write!(f, "input"),
        }
    }
}

/// Unified error type for salience.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("unknown prior mode: {0:?} (expected \"empirical\" or \"uninformative\")")]
    UnknownPriorMode(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    // Input errors (20-29)
    #[error("count table is empty")]
    EmptyTable,

    #[error("negative count {count} for group {group:?}, feature {feature:?}")]
    NegativeCount {
        group: String,
        feature: String,
        count: i64,
    },

    #[error("duplicate (group, feature) pair: ({group:?}, {feature:?})")]
    DuplicatePair { group: String, feature: String },

    #[error("group {group:?} has zero total count")]
    ZeroGroupTotal { group: String },

    #[error("feature {feature:?} has zero total count")]
    ZeroFeatureTotal { feature: String },

    #[error("table needs at least two groups and two features, got {groups} x {features}")]
    DegenerateTable { groups: usize, features: usize },
}

impl Error {
    /// Stable error code, grouped by category:
    /// - 10-19: configuration errors
    /// - 20-29: input errors
    pub fn code(&self) -> u32 {
        match self {
            Error::UnknownPriorMode(_) => 10,
            Error::Config(_) => 11,
            Error::EmptyTable => 20,
            Error::NegativeCount { .. } => 21,
            Error::DuplicatePair { .. } => 22,
            Error::ZeroGroupTotal { .. } => 23,
            Error::ZeroFeatureTotal { .. } => 24,
            Error::DegenerateTable { .. } => 25,
        }
    }

    /// Category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::UnknownPriorMode(_) | Error::Config(_) => ErrorCategory::Config,
            Error::EmptyTable
            | Error::NegativeCount { .. }
            | Error::DuplicatePair { .. }
            | Error::ZeroGroupTotal { .. }
            | Error::ZeroFeatureTotal { .. }
            | Error::DegenerateTable { .. } => ErrorCategory::Input,
        }
    }
}
