//! Estimator configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use sal_common::{Error, Result};

/// Which Dirichlet prior regularizes the log-odds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorMode {
    /// Per-feature pseudo-counts proportional to the feature's marginal
    /// frequency in the table (the default, data-driven prior).
    #[default]
    Empirical,
    /// Flat pseudo-count for every feature, independent of the data.
    Uninformative,
}

impl std::fmt::Display for PriorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriorMode::Empirical => write!(f, "empirical"),
            PriorMode::Uninformative => write!(f, "uninformative"),
        }
    }
}

impl FromStr for PriorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "empirical" => Ok(PriorMode::Empirical),
            "uninformative" => Ok(PriorMode::Uninformative),
            other => Err(Error::UnknownPriorMode(other.to_string())),
        }
    }
}

/// Settings for [`crate::weighted_log_odds`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogOddsConfig {
    /// Prior selection.
    pub prior: PriorMode,

    /// Total pseudo-count budget `α_0` for the empirical prior. `None`
    /// uses the table's grand total, which makes each feature's
    /// pseudo-count equal its marginal total. One defensible convention
    /// among several, so it stays configurable.
    pub pseudo_budget: Option<f64>,

    /// Per-feature pseudo-count for the uninformative prior.
    pub flat_alpha: f64,

    /// Rank by the raw log-odds ratio instead of its z-score.
    pub unweighted: bool,
}

impl Default for LogOddsConfig {
    fn default() -> Self {
        Self {
            prior: PriorMode::Empirical,
            pseudo_budget: None,
            flat_alpha: 1.0,
            unweighted: false,
        }
    }
}

impl LogOddsConfig {
    /// Validate numeric settings. Pseudo-counts must be positive and
    /// finite or the posterior cells they feed lose their guarantees.
    pub fn validate(&self) -> Result<()> {
        if let Some(budget) = self.pseudo_budget {
            if !budget.is_finite() || budget <= 0.0 {
                return Err(Error::Config(format!(
                    "pseudo_budget must be positive and finite, got {budget}"
                )));
            }
        }
        if !self.flat_alpha.is_finite() || self.flat_alpha <= 0.0 {
            return Err(Error::Config(format!(
                "flat_alpha must be positive and finite, got {}",
                self.flat_alpha
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = LogOddsConfig::default();
        assert_eq!(config.prior, PriorMode::Empirical);
        assert!(!config.unweighted);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn prior_mode_from_str() {
        assert_eq!(
            "empirical".parse::<PriorMode>().unwrap(),
            PriorMode::Empirical
        );
        assert_eq!(
            "uninformative".parse::<PriorMode>().unwrap(),
            PriorMode::Uninformative
        );
        let err = "jeffreys".parse::<PriorMode>().unwrap_err();
        assert!(matches!(err, Error::UnknownPriorMode(s) if s == "jeffreys"));
    }

    #[test]
    fn prior_mode_display_round_trips() {
        for mode in [PriorMode::Empirical, PriorMode::Uninformative] {
            assert_eq!(mode.to_string().parse::<PriorMode>().unwrap(), mode);
        }
    }

    #[test]
    fn invalid_numeric_settings_rejected() {
        let mut config = LogOddsConfig {
            pseudo_budget: Some(0.0),
            ..LogOddsConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.pseudo_budget = Some(f64::NAN);
        assert!(config.validate().is_err());

        config.pseudo_budget = None;
        config.flat_alpha = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: LogOddsConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LogOddsConfig::default());

        let config: LogOddsConfig =
            serde_json::from_str(r#"{"prior": "uninformative", "flat_alpha": 0.5}"#).unwrap();
        assert_eq!(config.prior, PriorMode::Uninformative);
        assert!((config.flat_alpha - 0.5).abs() < 1e-12);
    }

    #[test]
    fn unknown_prior_mode_in_json_rejected() {
        let result: std::result::Result<LogOddsConfig, _> =
            serde_json::from_str(r#"{"prior": "jeffreys"}"#);
        assert!(result.is_err());
    }
}
