//! Conversions between absolute instants and the day counts used by the
//! orbital elements.
//!
//! Instants are [`chrono::DateTime<Utc>`]. The engine measures time in days,
//! and elements are referenced to the J2000.0 epoch unless told otherwise.

use chrono::{DateTime, TimeDelta, Utc};

/// The J2000.0 epoch as seconds after the Unix epoch
/// (2000-01-01T12:00:00Z).
pub const J2000_UNIX_SECONDS: i64 = 946_728_000;

/// The Julian day of the Unix epoch.
pub const UNIX_EPOCH_JULIAN_DAY: f64 = 2_440_587.5;

/// Milliseconds in a day.
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Microseconds in a day.
pub const MICROS_PER_DAY: f64 = 86_400_000_000.0;

/// Returns the J2000.0 epoch, 2000-01-01T12:00:00Z.
///
/// # Example
/// ```
/// use keplerian_orrery::time;
///
/// assert_eq!(time::j2000().to_rfc3339(), "2000-01-01T12:00:00+00:00");
/// ```
pub fn j2000() -> DateTime<Utc> {
    DateTime::<Utc>::default() + TimeDelta::seconds(J2000_UNIX_SECONDS)
}

/// Gets the signed number of days from `from` to `to`.
///
/// Precision is one microsecond, falling back to milliseconds for spans
/// too long to count in microseconds.
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let delta = to - from;

    match delta.num_microseconds() {
        Some(micros) => micros as f64 / MICROS_PER_DAY,
        None => delta.num_milliseconds() as f64 / MILLIS_PER_DAY,
    }
}

/// Gets the number of days elapsed since J2000.0.
///
/// Negative for instants before the epoch.
pub fn days_since_j2000(instant: DateTime<Utc>) -> f64 {
    days_between(j2000(), instant)
}

/// Gets the Julian day number of an instant.
///
/// # Example
/// ```
/// use keplerian_orrery::time;
///
/// assert_eq!(time::julian_day(time::j2000()), 2_451_545.0);
/// ```
pub fn julian_day(instant: DateTime<Utc>) -> f64 {
    UNIX_EPOCH_JULIAN_DAY + instant.timestamp_millis() as f64 / MILLIS_PER_DAY
}

/// Shifts an instant by a signed, fractional number of days.
///
/// Returns `None` if `days` is not finite or the result is outside the
/// range chrono can represent.
pub fn add_days(instant: DateTime<Utc>, days: f64) -> Option<DateTime<Utc>> {
    let micros = days * MICROS_PER_DAY;

    if !micros.is_finite() || micros.abs() >= i64::MAX as f64 {
        return None;
    }

    instant.checked_add_signed(TimeDelta::microseconds(micros.round() as i64))
}

/// Gets the instant a number of days after J2000.0.
pub fn instant_from_days_since_j2000(days: f64) -> Option<DateTime<Utc>> {
    add_days(j2000(), days)
}
