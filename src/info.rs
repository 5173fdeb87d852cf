//! Human-readable orbital summaries for display panels.

use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::OrbitTrait;

/// Kilometres in one astronomical unit.
pub const KM_PER_AU: f64 = 149_597_870.7;

/// The speed of light, in km/s.
pub const SPEED_OF_LIGHT_KM_PER_S: f64 = 299_792.458;

/// Converts a speed in AU/day to km/s.
pub const AU_PER_DAY_TO_KM_PER_S: f64 = 1731.457;

/// A snapshot of where a body is on its orbit and how fast it is moving.
///
/// Angles are in degrees, distances in AU.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitalInfo {
    /// The mean anomaly, in `[0, 360)` degrees.
    pub mean_anomaly: f64,
    /// The eccentric anomaly, in degrees.
    pub eccentric_anomaly: f64,
    /// The true anomaly, in `[0, 360)` degrees.
    pub true_anomaly: f64,
    /// The distance from the Sun, in AU.
    pub heliocentric_distance: f64,
    /// The orbital speed from the vis-viva relation, in km/s.
    pub orbital_speed: f64,
    /// The closest approach to the Sun, in AU.
    pub perihelion: f64,
    /// The farthest distance from the Sun, in AU.
    pub aphelion: f64,
    /// The time light takes to travel from the Sun to the body, in minutes.
    pub light_travel_time: f64,
}

impl OrbitalInfo {
    /// Computes the summary for an orbit at a given instant.
    ///
    /// This reuses the anomalies of a single position evaluation; it does
    /// not run the Kepler solver more than once.
    ///
    /// # Example
    /// ```
    /// use keplerian_orrery::{body_presets, time, OrbitalInfo};
    ///
    /// let earth = body_presets::earth();
    /// let info = OrbitalInfo::at_instant(earth.orbit(), time::j2000());
    ///
    /// assert!(info.heliocentric_distance > info.perihelion - 1e-9);
    /// assert!(info.heliocentric_distance < info.aphelion + 1e-9);
    /// assert!((info.orbital_speed - 30.0).abs() < 1.0);
    /// ```
    pub fn at_instant(orbit: &impl OrbitTrait, instant: DateTime<Utc>) -> OrbitalInfo {
        let anomalies = orbit.get_anomalies_at_instant(instant);
        let distance = orbit.get_distance_at_true_anomaly(anomalies.true_anomaly);

        OrbitalInfo {
            mean_anomaly: normalize_degrees(anomalies.mean.to_degrees()),
            eccentric_anomaly: anomalies.eccentric.to_degrees(),
            true_anomaly: normalize_degrees(anomalies.true_anomaly.to_degrees()),
            heliocentric_distance: distance,
            orbital_speed: orbit.get_speed_at_distance(distance) * AU_PER_DAY_TO_KM_PER_S,
            perihelion: orbit.get_perihelion(),
            aphelion: orbit.get_aphelion(),
            light_travel_time: light_travel_time_minutes(distance),
        }
    }
}

fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);

    // rem_euclid rounds tiny negative angles up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Gets the time light takes to cross a distance, in minutes.
///
/// # Example
/// ```
/// use keplerian_orrery::info::light_travel_time_minutes;
///
/// // About 8 minutes 19 seconds from the Sun to the Earth
/// let minutes = light_travel_time_minutes(1.0);
/// assert!((minutes - 8.317).abs() < 0.001);
/// ```
pub fn light_travel_time_minutes(distance_au: f64) -> f64 {
    distance_au * KM_PER_AU / SPEED_OF_LIGHT_KM_PER_S / 60.0
}

/// Formats a distance for display.
///
/// Below 0.01 AU the distance is shown in whole kilometres. Otherwise it is
/// shown in AU with four decimals, followed by millions of kilometres (two
/// decimals below 1 AU, one decimal above).
///
/// # Example
/// ```
/// use keplerian_orrery::info::format_distance;
///
/// assert_eq!(format_distance(0.0026), "388954 km");
/// assert_eq!(format_distance(0.7233), "0.7233 AU (108.20 million km)");
/// assert_eq!(format_distance(5.2029), "5.2029 AU (778.3 million km)");
/// ```
pub fn format_distance(distance_au: f64) -> String {
    let km = distance_au * KM_PER_AU;

    if distance_au < 0.01 {
        format!("{km:.0} km")
    } else if distance_au < 1.0 {
        format!("{distance_au:.4} AU ({:.2} million km)", km / 1e6)
    } else {
        format!("{distance_au:.4} AU ({:.1} million km)", km / 1e6)
    }
}
