//! The weighted log-odds estimator.
//!
//! For each `(group, feature)` cell the estimator compares the group's
//! usage rate of the feature against the pooled rate of all other groups,
//! with both sides shifted by the Dirichlet pseudo-count for that feature.
//! The z-score form divides the posterior log-odds ratio by its standard
//! deviation, so magnitude reflects both effect size and the amount of
//! evidence behind it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use sal_common::{CountTable, Error, Result};

use crate::config::LogOddsConfig;
use crate::prior::PriorWeights;

/// One output row: the input cell plus its log-odds statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogOddsRow {
    pub group: String,
    pub feature: String,
    pub count: u64,
    /// Posterior log-odds ratio `δ_ij` (unweighted).
    pub log_odds: f64,
    /// `δ_ij / sqrt(σ²_ij)`, the z-score form.
    pub log_odds_weighted: f64,
}

impl LogOddsRow {
    /// The principal score under the given ranking convention.
    pub fn score(&self, unweighted: bool) -> f64 {
        if unweighted {
            self.log_odds
        } else {
            self.log_odds_weighted
        }
    }
}

/// Compute weighted log-odds for every cell of `table`.
///
/// Pure function of `(table, config)`: one output row per input cell, in
/// input order, with bit-identical results across calls. All validation
/// happens before the first row is emitted; on error nothing is returned.
pub fn weighted_log_odds(table: &CountTable, config: &LogOddsConfig) -> Result<Vec<LogOddsRow>> {
    config.validate()?;
    validate_shape(table)?;

    let prior = PriorWeights::compute(table, config)?;

    debug!(
        cells = table.len(),
        groups = table.num_groups(),
        features = table.num_features(),
        prior = %config.prior,
        "computing weighted log-odds"
    );

    let grand = table.grand_total() as f64;
    let alpha_total = prior.total();

    let mut rows = Vec::with_capacity(table.len());
    for (group, feature, count) in table.cells() {
        let n_ij = count as f64;
        let n_i = table.feature_total(feature) as f64;
        let n_j = table.group_total(group) as f64;
        let alpha_i = prior.alpha(feature);

        // Posterior 2x2 cells: feature i vs everything else, inside group j
        // and pooled over the remaining groups.
        let in_group = n_ij + alpha_i;
        let in_group_rest = (n_j + alpha_total) - in_group;
        let elsewhere = (n_i - n_ij) + alpha_i;
        let elsewhere_rest = ((grand - n_j) + alpha_total) - elsewhere;

        let delta = (in_group / in_group_rest).ln() - (elsewhere / elsewhere_rest).ln();
        let variance = 1.0 / in_group + 1.0 / elsewhere;

        rows.push(LogOddsRow {
            group: table.groups()[group].clone(),
            feature: table.features()[feature].clone(),
            count,
            log_odds: delta,
            log_odds_weighted: delta / variance.sqrt(),
        });
    }

    Ok(rows)
}

/// Eager shape checks: every log-odds ratio needs a non-trivial complement
/// inside the group and at least one other group to pool against.
fn validate_shape(table: &CountTable) -> Result<()> {
    if table.num_groups() < 2 || table.num_features() < 2 {
        return Err(Error::DegenerateTable {
            groups: table.num_groups(),
            features: table.num_features(),
        });
    }
    for j in 0..table.num_groups() {
        if table.group_total(j) == 0 {
            return Err(Error::ZeroGroupTotal {
                group: table.groups()[j].clone(),
            });
        }
    }
    for i in 0..table.num_features() {
        if table.feature_total(i) == 0 {
            return Err(Error::ZeroFeatureTotal {
                feature: table.features()[i].clone(),
            });
        }
    }
    Ok(())
}
