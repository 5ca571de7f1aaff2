//! # Scene configuration
//!
//! [`OrreryConfig`] gathers the few knobs of the crate, all with defaults matching
//! the behavior of [`crate::time::SimulationClock::new`] and [`crate::position::position_at`]:
//!
//! ```json
//! {
//!   "clock": { "mode": "sim", "rate_per_second": 365.0, "start_days": 0.0 },
//!   "scene": { "units_per_au": 100.0, "axes": "y_up" },
//!   "kepler_iterations": 8
//! }
//! ```
//!
//! Every field may be omitted. Loaded documents are validated before use.
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{Days, DEFAULT_RATE_DAYS_PER_SECOND, KEPLER_ITERATIONS, SCENE_UNITS_PER_AU},
    kepler::EccentricAnomalySolver,
    orrery_errors::OrreryError,
    position::{PositionEngine, SceneProjection},
    ref_system::SceneAxes,
    time::TimeMode,
};

/// Initial state of the simulation clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub mode: TimeMode,
    /// Simulated days per real second.
    pub rate_per_second: f64,
    /// Initial value of the simulated-days accumulator.
    pub start_days: Days,
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig {
            mode: TimeMode::Sim,
            rate_per_second: DEFAULT_RATE_DAYS_PER_SECOND,
            start_days: 0.0,
        }
    }
}

/// Scale and axis convention of the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub units_per_au: f64,
    pub axes: SceneAxes,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            units_per_au: SCENE_UNITS_PER_AU,
            axes: SceneAxes::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    pub clock: ClockConfig,
    pub scene: SceneConfig,
    pub kepler_iterations: usize,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        OrreryConfig {
            clock: ClockConfig::default(),
            scene: SceneConfig::default(),
            kepler_iterations: KEPLER_ITERATIONS,
        }
    }
}

impl OrreryConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, OrreryError> {
        let config: OrreryConfig = serde_json::from_str(json)?;
        config
            .validate()
            .inspect_err(|err| warn!("configuration rejected: {err}"))?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, OrreryError> {
        let json = std::fs::read_to_string(path)?;
        OrreryConfig::from_json_str(&json)
    }

    /// Check the values make sense for a running scene.
    ///
    /// The clock rate may be negative or zero, but must be finite. The scene scale
    /// must be finite and strictly positive, and the solver must iterate at least once.
    pub fn validate(&self) -> Result<(), OrreryError> {
        if !self.clock.rate_per_second.is_finite() {
            return Err(OrreryError::InvalidConfig(format!(
                "clock.rate_per_second must be finite, got {}",
                self.clock.rate_per_second
            )));
        }
        if !self.clock.start_days.is_finite() {
            return Err(OrreryError::InvalidConfig(format!(
                "clock.start_days must be finite, got {}",
                self.clock.start_days
            )));
        }
        if !(self.scene.units_per_au.is_finite() && self.scene.units_per_au > 0.0) {
            return Err(OrreryError::InvalidConfig(format!(
                "scene.units_per_au must be finite and positive, got {}",
                self.scene.units_per_au
            )));
        }
        if self.kepler_iterations == 0 {
            return Err(OrreryError::InvalidConfig(
                "kepler_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Position engine described by this configuration.
    pub fn position_engine(&self) -> PositionEngine {
        PositionEngine::new(
            EccentricAnomalySolver::new(self.kepler_iterations),
            SceneProjection::from_config(&self.scene),
        )
    }
}

impl SceneProjection {
    pub fn from_config(config: &SceneConfig) -> Self {
        SceneProjection::new(config.units_per_au, config.axes)
    }
}

#[cfg(test)]
mod config_test {
    use super::*;
    use crate::time::{days_to_epoch, FixedWallClock, SimulationClock};

    #[test]
    fn test_default_matches_free_functions() {
        let config = OrreryConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.position_engine(), PositionEngine::default());
    }

    #[test]
    fn test_empty_document_gives_defaults() {
        assert_eq!(OrreryConfig::from_json_str("{}").unwrap(), OrreryConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = OrreryConfig::from_json_str(
            r#"{ "clock": { "mode": "real" }, "scene": { "axes": "z_up" }, "kepler_iterations": 12 }"#,
        )
        .unwrap();
        assert_eq!(config.clock.mode, TimeMode::Real);
        assert_eq!(config.clock.rate_per_second, 365.0);
        assert_eq!(config.scene.axes, SceneAxes::ZUp);
        assert_eq!(config.scene.units_per_au, 100.0);
        assert_eq!(config.position_engine().solver().iterations, 12);
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            OrreryConfig::from_json_str(r#"{ "scene": { "units_per_au": 0.0 } }"#),
            Err(OrreryError::InvalidConfig(_))
        ));
        assert!(matches!(
            OrreryConfig::from_json_str(r#"{ "kepler_iterations": 0 }"#),
            Err(OrreryError::InvalidConfig(_))
        ));
        assert!(matches!(
            OrreryConfig::from_json_str(r#"{ "clock": { "mode": "paused" } }"#),
            Err(OrreryError::ConfigParse(_))
        ));
        assert!(matches!(
            OrreryConfig::from_json_file("/nonexistent/orrery.json"),
            Err(OrreryError::IoError(_))
        ));
    }

    #[test]
    fn test_negative_rate_is_valid() {
        let config =
            OrreryConfig::from_json_str(r#"{ "clock": { "rate_per_second": -30.0 } }"#).unwrap();
        assert_eq!(config.clock.rate_per_second, -30.0);
    }

    #[test]
    fn test_clock_from_config() {
        let config = ClockConfig {
            mode: TimeMode::Sim,
            rate_per_second: 10.0,
            start_days: 8766.0,
        };
        let mut clock =
            SimulationClock::from_config_with_wall_clock(&config, FixedWallClock::new(days_to_epoch(0.0)));
        assert_eq!(clock.days(), 8766.0);
        clock.tick(0.5);
        assert_eq!(clock.days(), 8771.0);

        let system = SimulationClock::from_config(&config);
        assert_eq!(system.rate(), 10.0);
    }
}
