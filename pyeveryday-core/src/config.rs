//! Configuration options for the landing page

use crate::error::{LandingError, Result};
use serde::{Deserialize, Serialize};

/// Timing and cosmetic knobs for the landing page controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// How often the active category and demo command rotate (ms)
    pub rotate_interval_ms: u64,

    /// Delay before the typing animation starts on a new command (ms)
    pub typing_delay_ms: u64,

    /// Time between two revealed characters (ms)
    pub typing_step_ms: u64,

    /// How often particles drift (ms)
    pub particle_interval_ms: u64,

    /// Prompt cursor blink period (ms)
    pub cursor_blink_ms: u64,

    /// Number of floating particles
    pub particle_count: usize,

    /// Scroll depth, in viewport heights, that reveals the stats counters
    pub stats_threshold: f64,

    /// Seed for the cosmetic random generator; `None` lets the caller pick
    pub seed: Option<u64>,

    /// Path the service worker script is served from
    pub service_worker_path: String,

    /// Outbound source repository link
    pub repository_url: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            rotate_interval_ms: 4000,
            typing_delay_ms: 1000,
            typing_step_ms: 50,
            particle_interval_ms: 2000,
            cursor_blink_ms: 500,
            particle_count: 20,
            stats_threshold: 2.0,
            seed: None,
            service_worker_path: "/sw.js".to_string(),
            repository_url: "https://github.com/Vaibhav2154/PyEveryday".to_string(),
        }
    }
}

impl LandingConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the rotation interval
    pub fn with_rotate_interval(mut self, ms: u64) -> Self {
        self.rotate_interval_ms = ms;
        self
    }

    /// Set the typing delay and per-character step
    pub fn with_typing(mut self, delay_ms: u64, step_ms: u64) -> Self {
        self.typing_delay_ms = delay_ms;
        self.typing_step_ms = step_ms;
        self
    }

    /// Set the number of particles
    pub fn with_particles(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the stats reveal threshold, in viewport heights
    pub fn with_stats_threshold(mut self, viewports: f64) -> Self {
        self.stats_threshold = viewports;
        self
    }

    /// Reject settings the scheduler cannot run with
    pub fn validate(&self) -> Result<()> {
        let intervals = [
            ("rotate_interval_ms", self.rotate_interval_ms),
            ("typing_step_ms", self.typing_step_ms),
            ("particle_interval_ms", self.particle_interval_ms),
            ("cursor_blink_ms", self.cursor_blink_ms),
        ];
        if let Some((name, _)) = intervals.iter().find(|(_, ms)| *ms == 0) {
            return Err(LandingError::Configuration(format!(
                "{name} must be greater than zero"
            )));
        }
        if self.particle_count == 0 {
            return Err(LandingError::Configuration(
                "particle_count must be greater than zero".to_string(),
            ));
        }
        if !self.stats_threshold.is_finite() || self.stats_threshold < 0.0 {
            return Err(LandingError::Configuration(format!(
                "stats_threshold must be a non-negative number, got {}",
                self.stats_threshold
            )));
        }
        if !self.service_worker_path.starts_with('/') {
            return Err(LandingError::Configuration(format!(
                "service_worker_path must be absolute, got {:?}",
                self.service_worker_path
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_are_valid() {
        let config = LandingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rotate_interval_ms, 4000);
        assert_eq!(config.typing_step_ms, 50);
        assert_eq!(config.particle_count, 20);
        assert_eq!(config.service_worker_path, "/sw.js");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = LandingConfig::from_json(r#"{ "particle_count": 5, "seed": 7 }"#).unwrap();
        assert_eq!(config.particle_count, 5);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.rotate_interval_ms, 4000);
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let err = LandingConfig::new().with_rotate_interval(0).validate().unwrap_err();
        assert_eq!(
            err,
            LandingError::Configuration("rotate_interval_ms must be greater than zero".to_string())
        );
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            LandingConfig::from_json("{ not json"),
            Err(LandingError::Json(_))
        ));
    }
}
