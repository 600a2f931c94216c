//! Weighted log-odds estimation over pre-aggregated count tables.
//!
//! Given counts of how often each feature occurs in each group, the
//! estimator computes, per `(group, feature)` pair, an empirical-Bayes
//! regularized log-odds ratio comparing the group's usage rate of the
//! feature against the pooled rate of all other groups, plus its z-score
//! form (Monroe, Colaresi, and Quinn's "Fightin' Words" statistic).
//!
//! The whole pipeline is a pure function: table in, rows out, no shared
//! state, no caching across calls.

pub mod config;
pub mod estimator;
pub mod prior;
pub mod rank;

pub use config::{LogOddsConfig, PriorMode};
pub use estimator::{weighted_log_odds, LogOddsRow};
pub use prior::PriorWeights;
pub use rank::top_features;
