use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Tuning for the distance-weighted territory heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfluenceConfig {
    /// Distance over which a stone's influence falls off by a factor of e.
    pub decay: f64,
    /// A point belongs to a side once its summed score passes this magnitude.
    pub threshold: f64,
}

impl Default for InfluenceConfig {
    fn default() -> Self {
        InfluenceConfig {
            decay: 2.0,
            threshold: 0.5,
        }
    }
}

/// Settings for a full position analysis. Missing JSON fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub influence: InfluenceConfig,
    /// Groups with this many liberties or fewer are reported as in danger.
    pub danger_liberties: usize,
    pub detect_shapes: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            influence: InfluenceConfig::default(),
            danger_liberties: 2,
            detect_shapes: true,
        }
    }
}

impl AnalysisConfig {
    pub fn from_json(json: &str) -> Result<Self, AnalysisError> {
        let config: AnalysisConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        let decay = self.influence.decay;
        if !decay.is_finite() || decay <= 0.0 {
            return Err(AnalysisError::Config(format!(
                "influence decay must be positive, got {decay}"
            )));
        }
        let threshold = self.influence.threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(AnalysisError::Config(format!(
                "influence threshold must be non-negative, got {threshold}"
            )));
        }
        Ok(())
    }
}
