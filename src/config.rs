//! Engine configuration.
//!
//! Every setting has a default matching the orrery's stock behavior, so an
//! empty JSON object is a valid configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings of the simulation clock.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ClockConfig {
    /// The forward rate the clock starts at and returns to on
    /// [`jump_to_now`][crate::SimulationClock::jump_to_now], in simulated
    /// days per real second.
    pub default_time_scale: f64,

    /// Whether the clock starts paused.
    pub start_paused: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            default_time_scale: 1.0,
            start_paused: false,
        }
    }
}

/// Presentation parameters handed to the path sampler and visibility checks.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct DisplayConfig {
    /// The farthest distance from the Sun that is drawn, in AU.
    ///
    /// Orbit path points beyond it are dropped, and comets beyond it are
    /// reported as out of display range.
    pub distance_cap: f64,

    /// The number of true anomaly steps used for planet orbit paths.
    pub orbit_segments: usize,

    /// The number of true anomaly steps used for comet orbit paths.
    ///
    /// Comets get more segments since their paths bend sharply near
    /// perihelion.
    pub comet_orbit_segments: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            distance_cap: 50.0,
            orbit_segments: 360,
            comet_orbit_segments: 500,
        }
    }
}

/// The full engine configuration.
///
/// # Example
/// ```
/// use keplerian_orrery::EngineConfig;
///
/// let config = EngineConfig::from_json_str(r#"{ "display": { "distance_cap": 45.0 } }"#)
///     .unwrap();
///
/// assert_eq!(config.display.distance_cap, 45.0);
/// assert_eq!(config.display.orbit_segments, 360);
/// assert_eq!(config.clock.default_time_scale, 1.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct EngineConfig {
    /// Clock settings.
    pub clock: ClockConfig,
    /// Display settings.
    pub display: DisplayConfig,
}

/// An error describing why a configuration was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration could not be read from or written to JSON.
    #[error("invalid JSON configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The default time scale is not a positive finite number.
    #[error("default time scale must be positive and finite, got {0}")]
    InvalidTimeScale(f64),

    /// A segment count is zero.
    #[error("`{0}` must be at least 1")]
    ZeroSegments(&'static str),

    /// The distance cap is not a positive number.
    #[error("distance cap must be positive, got {0} AU")]
    InvalidDistanceCap(f64),
}

impl EngineConfig {
    /// Checks the configuration for values the engine can't work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let time_scale = self.clock.default_time_scale;

        if !time_scale.is_finite() || time_scale <= 0.0 {
            return Err(ConfigError::InvalidTimeScale(time_scale));
        }

        if self.display.orbit_segments == 0 {
            return Err(ConfigError::ZeroSegments("orbit_segments"));
        }

        if self.display.comet_orbit_segments == 0 {
            return Err(ConfigError::ZeroSegments("comet_orbit_segments"));
        }

        // written this way round so NaN is rejected too
        if !(self.display.distance_cap > 0.0) {
            return Err(ConfigError::InvalidDistanceCap(self.display.distance_cap));
        }

        Ok(())
    }

    /// Parses and validates a JSON configuration.
    ///
    /// Missing fields take their default values.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<EngineConfig, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    /// Serializes the configuration as pretty-printed JSON.
    #[cfg(feature = "serde")]
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
