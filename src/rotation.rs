//! Axial self-rotation of bodies.

use core::f64::consts::TAU;

use chrono::{DateTime, Utc};

/// Milliseconds in an hour.
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Gets the axial rotation angle of a body at an instant, in radians.
///
/// `rotation_period` is the sidereal rotation period in hours. A negative
/// period marks a retrograde rotator (Venus, Uranus, Pluto), whose angle
/// runs the other way.
///
/// The angle is the fractional number of rotations completed since the Unix
/// epoch, scaled to radians and wrapped into `[0, tau)`. Prograde angles
/// increase with time; retrograde angles decrease (modulo tau). The result
/// does not depend on the body's orbital position.
///
/// A zero period has no meaningful rotation and returns 0.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use keplerian_orrery::rotation_angle;
///
/// let six_hours = Utc.with_ymd_and_hms(1970, 1, 1, 6, 0, 0).unwrap();
///
/// // A quarter of a 24 hour day
/// let angle = rotation_angle(24.0, six_hours);
/// assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
///
/// // The same amount, the other way around
/// let angle = rotation_angle(-24.0, six_hours);
/// assert!((angle - 3.0 * std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn rotation_angle(rotation_period: f64, instant: DateTime<Utc>) -> f64 {
    if rotation_period == 0.0 || !rotation_period.is_finite() {
        return 0.0;
    }

    let hours = instant.timestamp_millis() as f64 / MILLIS_PER_HOUR;
    let rotations = (hours / rotation_period.abs()).rem_euclid(1.0);
    let angle = rotations * TAU;

    let signed = if rotation_period < 0.0 { -angle } else { angle };
    let wrapped = signed.rem_euclid(TAU);

    // rem_euclid can round up to exactly tau for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
