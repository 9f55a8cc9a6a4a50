//! Training hyperparameters as a serializable value.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LinRegError, Result};

/// Hyperparameters for full-batch gradient descent.
///
/// Missing fields take their defaults when deserialized:
///
/// ```
/// use linreg_rs::config::TrainingConfig;
///
/// let cfg = TrainingConfig::from_json_str(r#"{ "iterations": 250 }"#).unwrap();
/// assert_eq!(cfg.iterations, 250);
/// assert_eq!(cfg.learning_rate, 0.1);
/// assert!(!cfg.verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Step size. Must be finite and `> 0`.
    pub learning_rate: f64,
    /// Exact number of updates. Must be `>= 1`.
    pub iterations: usize,
    /// Log the cost of every iteration at `info` level.
    pub verbose: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            iterations: 1000,
            verbose: false,
        }
    }
}

impl TrainingConfig {
    pub fn new(learning_rate: f64, iterations: usize) -> Self {
        Self {
            learning_rate,
            iterations,
            ..Self::default()
        }
    }

    /// Rejects a non-positive or non-finite learning rate and zero iterations.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(LinRegError::InvalidHyperparameter(format!(
                "learning_rate must be finite and > 0, got {}",
                self.learning_rate
            )));
        }
        if self.iterations == 0 {
            return Err(LinRegError::InvalidHyperparameter(
                "iterations must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads, parses and validates a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = TrainingConfig::default();
        assert_eq!(cfg.learning_rate, 0.1);
        assert_eq!(cfg.iterations, 1000);
        assert!(!cfg.verbose);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        for lr in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(TrainingConfig::new(lr, 10).validate().is_err());
        }
        assert!(matches!(
            TrainingConfig::new(0.1, 0).validate(),
            Err(LinRegError::InvalidHyperparameter(_))
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let cfg = TrainingConfig {
            learning_rate: 0.05,
            iterations: 42,
            verbose: true,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(TrainingConfig::from_json_str(&json).unwrap(), cfg);
    }

    #[test]
    fn test_json_invalid_values_are_rejected() {
        let err = TrainingConfig::from_json_str(r#"{ "learning_rate": -0.5 }"#).unwrap_err();
        assert!(matches!(err, LinRegError::InvalidHyperparameter(_)));
    }

    #[test]
    fn test_json_syntax_error() {
        let err = TrainingConfig::from_json_str("{ learning_rate: }").unwrap_err();
        assert!(matches!(err, LinRegError::Config(_)));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "learning_rate": 0.01, "iterations": 5 }}"#).unwrap();
        let cfg = TrainingConfig::from_json_file(file.path()).unwrap();
        assert_eq!(cfg, TrainingConfig::new(0.01, 5));
    }
}
