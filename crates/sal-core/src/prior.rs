//! Dirichlet pseudo-counts for the log-odds estimator.
//!
//! The prior is a pure function of the current table and config. It is
//! recomputed on every invocation and never cached across tables: a prior
//! derived from one table's marginals is meaningless for another.

use sal_common::{CountTable, Error, Result};

use crate::config::{LogOddsConfig, PriorMode};

/// Per-feature pseudo-counts `α_i`, indexed by the table's feature ids.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorWeights {
    alpha: Vec<f64>,
    total: f64,
}

impl PriorWeights {
    /// Compute pseudo-counts for `table` under `config`.
    ///
    /// Empirical mode distributes the budget `α_0` in proportion to each
    /// feature's marginal frequency: `α_i = α_0 · n_i· / n_··`. With the
    /// default budget `α_0 = n_··` this reduces to `α_i = n_i·`.
    /// Uninformative mode assigns `flat_alpha` to every feature.
    pub fn compute(table: &CountTable, config: &LogOddsConfig) -> Result<Self> {
        config.validate()?;

        let alpha: Vec<f64> = match config.prior {
            PriorMode::Uninformative => {
                vec![config.flat_alpha; table.num_features()]
            }
            PriorMode::Empirical => {
                // A zero marginal would give α_i = 0 and an unregularized
                // log(0) downstream.
                for i in 0..table.num_features() {
                    if table.feature_total(i) == 0 {
                        return Err(Error::ZeroFeatureTotal {
                            feature: table.features()[i].clone(),
                        });
                    }
                }
                let grand = table.grand_total() as f64;
                let budget = config.pseudo_budget.unwrap_or(grand);
                (0..table.num_features())
                    .map(|i| budget * table.feature_total(i) as f64 / grand)
                    .collect()
            }
        };
        let total = alpha.iter().sum();

        Ok(Self { alpha, total })
    }

    /// Pseudo-count `α_i` for feature id `i`.
    pub fn alpha(&self, i: usize) -> f64 {
        self.alpha[i]
    }

    /// Total pseudo-count mass `α_· = Σ_i α_i`.
    pub fn total(&self) -> f64 {
        self.total
    }
}
