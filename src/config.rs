//! Configuration structures for the capture and matching pipeline
//!
//! All tunable parameters in one serde-backed struct, loadable from JSON or
//! constructed programmatically:
//!
//! ```no_run
//! use paintmatch::MatchConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = MatchConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = MatchConfig::default();
//! # Ok::<(), paintmatch::MatchError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{history, sampling};
use crate::error::{MatchError, Result};
use crate::frame::FrameSampler;
use crate::history::MatchHistory;
use crate::matching::{ColorMatchEngine, MatchMethod, QualityThresholds};

/// Complete pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Frame sampling configuration
    pub sampling: SamplingConfig,

    /// Match scoring and classification configuration
    pub matching: MatchingConfig,

    /// Match history configuration
    pub history: HistoryConfig,
}

/// Frame sampling parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Sampling window radius in pixels (clamped to the supported range)
    pub radius: u32,
}

/// Match scoring parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Scoring method
    pub method: MatchMethod,

    /// Quality tier cut points
    pub thresholds: QualityThresholds,
}

/// Match history parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum retained match records
    pub capacity: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            sampling: SamplingConfig {
                radius: sampling::DEFAULT_RADIUS,
            },
            matching: MatchingConfig {
                method: MatchMethod::default(),
                thresholds: QualityThresholds::default(),
            },
            history: HistoryConfig {
                capacity: history::MAX_ENTRIES,
            },
        }
    }
}

impl MatchConfig {
    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| MatchError::config(format!("reading {}", path.display()), e))?;
        serde_json::from_str(&content)
            .map_err(|e| MatchError::config(format!("parsing {}", path.display()), e))
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| MatchError::config("serializing config", e))?;
        std::fs::write(path, json)
            .map_err(|e| MatchError::config(format!("writing {}", path.display()), e))
    }

    /// Build a sampler from this configuration
    pub fn sampler(&self) -> FrameSampler {
        FrameSampler::new(self.sampling.radius)
    }

    /// Build a match engine from this configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when the configured thresholds are not
    /// properly ordered.
    pub fn match_engine(&self) -> Result<ColorMatchEngine> {
        let mut engine = ColorMatchEngine::with_method(self.matching.method);
        engine.set_thresholds(self.matching.thresholds)?;
        Ok(engine)
    }

    /// Build a history store from this configuration
    pub fn history_store(&self) -> MatchHistory {
        MatchHistory::with_capacity(self.history.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_components() {
        let config = MatchConfig::default();
        assert_eq!(config.sampler().radius(), 2);
        assert!(config.match_engine().is_ok());
        assert_eq!(config.history_store().capacity(), 100);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = MatchConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_bad_thresholds_rejected_at_build() {
        let mut config = MatchConfig::default();
        config.matching.thresholds = QualityThresholds {
            excellent: 0.2,
            good: 0.5,
            fair: 0.9,
        };
        assert!(config.match_engine().is_err());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = MatchConfig::from_json_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, MatchError::ConfigError { .. }));
    }
}
