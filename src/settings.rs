//! Policy tuning parameters
//!
//! Loaded from an optional JSON file; any field left out keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunable thresholds used by the decision policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Enemy distance at or below which the tank engages (shoots and circles)
    pub engagement_tolerance: f64,
    /// Half-width of the square window scanned for nearby objects
    pub proximity_window: f64,
    /// Distance from a map edge below which the tank retreats to the centre
    pub boundary_margin: f64,
    /// Powerups within this distance of an edge are ignored
    pub powerup_inset: f64,
    /// Powerup detour limit, as a multiple of the enemy distance
    pub powerup_range_factor: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            engagement_tolerance: ENGAGEMENT_TOLERANCE,
            proximity_window: PROXIMITY_WINDOW,
            boundary_margin: BOUNDARY_MARGIN,
            powerup_inset: POWERUP_INSET,
            powerup_range_factor: POWERUP_RANGE_FACTOR,
        }
    }
}

impl PolicyConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded policy config from {}", path.display());
        Ok(config)
    }

    /// Pretty JSON rendering (for `--print-config`)
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the policy cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("engagement_tolerance", self.engagement_tolerance),
            ("proximity_window", self.proximity_window),
            ("boundary_margin", self.boundary_margin),
            ("powerup_range_factor", self.powerup_range_factor),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    value,
                    reason: "must be a positive number",
                });
            }
        }

        if !self.powerup_inset.is_finite() || self.powerup_inset < 0.0 {
            return Err(ConfigError::Invalid {
                field: "powerup_inset",
                value: self.powerup_inset,
                reason: "must be zero or positive",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PolicyConfig::default();
        assert_eq!(config.engagement_tolerance, 200.0);
        assert_eq!(config.proximity_window, 40.0);
        assert_eq!(config.boundary_margin, 100.0);
        assert_eq!(config.powerup_inset, 20.0);
        assert_eq!(config.powerup_range_factor, 3.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PolicyConfig::from_json(r#"{"engagement_tolerance": 150}"#).unwrap();
        assert_eq!(config.engagement_tolerance, 150.0);
        assert_eq!(config.boundary_margin, BOUNDARY_MARGIN);
    }

    #[test]
    fn test_rejects_non_positive() {
        let err = PolicyConfig::from_json(r#"{"proximity_window": 0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "proximity_window",
                ..
            }
        ));

        let err = PolicyConfig::from_json(r#"{"powerup_inset": -1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "powerup_inset", .. }));
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            PolicyConfig::from_json("{not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_to_json_parses_back() {
        let config = PolicyConfig {
            boundary_margin: 64.0,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(PolicyConfig::from_json(&json).unwrap(), config);
    }
}
