use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{time, Matrix3x2, OrbitTrait};

/// The classical Keplerian elements of a heliocentric orbit.
///
/// Angles are in degrees, distances in astronomical units, and the period in
/// days, which is how published element tables list them.
///
/// This struct has no cache; every position evaluation rebuilds the rotation
/// matrix from the angles. For repeated evaluation, convert it into an
/// [`Orbit`][crate::Orbit].
///
/// # Unchecked Operation
/// The elements are not validated when constructed or evaluated. Call
/// [`validate`][Self::validate] once when loading data; the engine assumes
/// `0 <= e < 1`, `a > 0` and `P > 0` afterwards.
///
/// # Example
/// ```
/// use keplerian_orrery::{OrbitTrait, OrbitalElements};
///
/// let mars = OrbitalElements::new(
///     // Semi-major axis (AU)
///     1.52371034,
///
///     // Eccentricity
///     0.09339410,
///
///     // Inclination (degrees)
///     1.84969142,
///
///     // Longitude of ascending node (degrees)
///     49.55953891,
///
///     // Argument of perihelion (degrees)
///     286.5016,
///
///     // Mean anomaly at epoch (degrees)
///     19.373,
///
///     // Orbital period (days)
///     686.980,
/// );
///
/// assert!(mars.validate().is_ok());
/// assert!(mars.get_perihelion() < mars.get_aphelion());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitalElements {
    /// The semi-major axis, in AU.
    pub semi_major_axis: f64,

    /// The eccentricity, in `[0, 1)`.
    ///
    /// See more: <https://en.wikipedia.org/wiki/Orbital_eccentricity>
    pub eccentricity: f64,

    /// The inclination to the ecliptic, in degrees.
    pub inclination: f64,

    /// The longitude of the ascending node, in degrees.
    pub long_asc_node: f64,

    /// The argument of perihelion, in degrees.
    pub arg_perihelion: f64,

    /// The mean anomaly at [`epoch`][Self::epoch], in degrees.
    pub mean_anomaly_at_epoch: f64,

    /// The orbital period, in days.
    pub orbital_period: f64,

    /// The reference instant of the mean anomaly at epoch.
    #[cfg_attr(feature = "serde", serde(default = "time::j2000"))]
    pub epoch: DateTime<Utc>,
}

/// An error describing why a set of orbital elements is outside the domain
/// the engine supports.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ElementsError {
    /// The eccentricity is negative, or the orbit is not an ellipse.
    #[error("eccentricity {0} is outside [0, 1); only elliptic orbits are supported")]
    EccentricityOutOfRange(f64),

    /// The orbital period is zero or negative.
    #[error("orbital period must be positive, got {0} days")]
    NonPositivePeriod(f64),

    /// The semi-major axis is zero or negative.
    #[error("semi-major axis must be positive, got {0} AU")]
    NonPositiveSemiMajorAxis(f64),

    /// One of the elements is NaN or infinite.
    #[error("element `{0}` is not finite")]
    NonFinite(&'static str),
}

impl OrbitalElements {
    /// Creates a new set of elements referenced to the J2000.0 epoch.
    ///
    /// # Parameters
    /// - `semi_major_axis`: The semi-major axis, in AU.
    /// - `eccentricity`: The eccentricity.
    /// - `inclination`: The inclination, in degrees.
    /// - `long_asc_node`: The longitude of ascending node, in degrees.
    /// - `arg_perihelion`: The argument of perihelion, in degrees.
    /// - `mean_anomaly_at_epoch`: The mean anomaly at J2000.0, in degrees.
    /// - `orbital_period`: The orbital period, in days.
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        long_asc_node: f64,
        arg_perihelion: f64,
        mean_anomaly_at_epoch: f64,
        orbital_period: f64,
    ) -> OrbitalElements {
        OrbitalElements {
            semi_major_axis,
            eccentricity,
            inclination,
            long_asc_node,
            arg_perihelion,
            mean_anomaly_at_epoch,
            orbital_period,
            epoch: time::j2000(),
        }
    }

    /// Creates a circular orbit in the ecliptic plane, starting at the
    /// reference direction at J2000.0.
    ///
    /// # Example
    /// ```
    /// use keplerian_orrery::{OrbitTrait, OrbitalElements};
    ///
    /// let orbit = OrbitalElements::circular(4.2, 3000.0);
    ///
    /// assert_eq!(orbit.get_eccentricity(), 0.0);
    /// assert_eq!(orbit.get_perihelion(), 4.2);
    /// assert_eq!(orbit.get_aphelion(), 4.2);
    /// ```
    pub fn circular(radius: f64, orbital_period: f64) -> OrbitalElements {
        Self::new(radius, 0.0, 0.0, 0.0, 0.0, 0.0, orbital_period)
    }

    /// Returns the same elements referenced to a different epoch.
    pub fn with_epoch(self, epoch: DateTime<Utc>) -> OrbitalElements {
        OrbitalElements { epoch, ..self }
    }

    /// Checks that the elements are inside the domain the engine supports.
    ///
    /// This is meant to be called once, when the data is loaded. The
    /// evaluation methods never call it.
    ///
    /// # Example
    /// ```
    /// use keplerian_orrery::{ElementsError, OrbitalElements};
    ///
    /// let parabolic = OrbitalElements::new(1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 365.0);
    ///
    /// assert_eq!(
    ///     parabolic.validate(),
    ///     Err(ElementsError::EccentricityOutOfRange(1.0)),
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ElementsError> {
        let fields = [
            ("semi_major_axis", self.semi_major_axis),
            ("eccentricity", self.eccentricity),
            ("inclination", self.inclination),
            ("long_asc_node", self.long_asc_node),
            ("arg_perihelion", self.arg_perihelion),
            ("mean_anomaly_at_epoch", self.mean_anomaly_at_epoch),
            ("orbital_period", self.orbital_period),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ElementsError::NonFinite(name));
            }
        }

        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(ElementsError::EccentricityOutOfRange(self.eccentricity));
        }

        if self.orbital_period <= 0.0 {
            return Err(ElementsError::NonPositivePeriod(self.orbital_period));
        }

        if self.semi_major_axis <= 0.0 {
            return Err(ElementsError::NonPositiveSemiMajorAxis(
                self.semi_major_axis,
            ));
        }

        Ok(())
    }
}

impl Default for OrbitalElements {
    /// Creates a default set of elements.
    ///
    /// Currently, this is a circular 1 AU orbit with a one-year period.
    /// However, do not rely on this behavior, as it may change in the future.
    fn default() -> Self {
        Self::circular(1.0, 365.25)
    }
}

impl OrbitTrait for OrbitalElements {
    fn get_elements(&self) -> &OrbitalElements {
        self
    }

    fn get_transformation_matrix(&self) -> Matrix3x2 {
        Matrix3x2::from_angles(
            self.inclination.to_radians(),
            self.arg_perihelion.to_radians(),
            self.long_asc_node.to_radians(),
        )
    }
}
