//! # Keplerian Orrery Engine
//! This library crate contains the orbital mechanics behind a solar-system
//! orrery: planets, dwarf planets and comets moving on fixed Keplerian
//! ellipses around the Sun, driven by a scrubbable simulation clock.
//!
//! Every body follows a two-body Keplerian orbit. Positions are never
//! integrated step by step; they are evaluated in closed form (plus one
//! Kepler solve) for any requested instant. This means you can jump the clock
//! a thousand years into the past and get the same answer you would have
//! gotten by running the simulation backwards frame by frame.
//!
//! The engine knows nothing about rendering. It produces positions in
//! astronomical units in the ecliptic frame, closed orbit polylines, rotation
//! angles and human-readable summaries. Remapping the axes to a "vertical-up"
//! display convention is left to the renderer.
//!
//! ## Getting started
//! This crate provides these main items:
//! - [`OrbitalElements`]: The classical elements of an orbit, in degrees,
//!   astronomical units and days. It implements [`OrbitTrait`] directly and
//!   recomputes its rotation matrix on demand.
//! - [`Orbit`]: The same elements with the ecliptic rotation matrix cached.
//!   Prefer this for anything evaluated every frame.
//! - [`CelestialBody`]: A planet or a comet with its orbit and descriptors.
//! - [`SolarSystem`]: The registry of bodies, with bulk position evaluation.
//! - [`SimulationClock`]: The running/paused simulation clock.
//! - [`SimulationContext`]: The explicit state object tying the clock, the
//!   display configuration, the path cache and the current selection together.
//!
//! We also provide a [`body_presets`] module with the planets, Pluto and a
//! handful of famous comets.
//!
//! ## Example
//!
//! ```rust
//! use keplerian_orrery::{time, OrbitTrait, OrbitalElements};
//!
//! # fn main() {
//! // A perfectly circular orbit with a radius of 1 AU and a one year period
//! let orbit = OrbitalElements::circular(1.0, 365.25);
//! let position = orbit.get_position_at_instant(time::j2000());
//! assert!((position.length() - 1.0).abs() < 1e-12);
//! # }
//! ```

#![warn(missing_docs)]

mod body;
pub mod body_presets;
mod cached_orbit;
pub mod clock;
pub mod config;
mod elements;
pub mod info;
pub mod path;
pub mod rotation;
mod solvers;
mod system;
pub mod time;

use core::f64::consts::TAU;

use chrono::{DateTime, Utc};
use glam::{DVec2, DVec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use body::{CelestialBody, Comet, Discovery, PhysicalStats, Planet, PlanetKind};
pub use cached_orbit::Orbit;
pub use clock::{ClockState, SimulationClock};
pub use config::{ClockConfig, ConfigError, DisplayConfig, EngineConfig};
pub use elements::{ElementsError, OrbitalElements};
pub use info::OrbitalInfo;
pub use path::{sample_path, PathCache};
pub use rotation::rotation_angle;
pub use solvers::{solve_kepler, solve_kepler_detailed, KeplerSolution};
pub use system::{SimulationContext, SolarSystem, SystemError, SUN_ID};

/// The absolute tolerance on the eccentric anomaly step used by the
/// Kepler solver, in radians.
pub const KEPLER_TOLERANCE: f64 = 1e-10;

/// The maximum number of Newton–Raphson iterations of the Kepler solver.
///
/// This is used to prevent infinite loops in case the method fails to converge.
/// When it is reached, the solver returns its best estimate.
pub const KEPLER_MAX_ITERS: u32 = 100;

/// Eccentricities above this value are outside the precision the solver
/// guarantees.
///
/// The engine does not reject them; callers needing strict guarantees should
/// treat such orbits as unsupported or use a different iteration strategy.
pub const SAFE_ECCENTRICITY_LIMIT: f64 = 0.98;

/// The default half-window of the central-difference velocity estimate, in days.
pub const DEFAULT_VELOCITY_DELTA_DAYS: f64 = 0.001;

/// The heliocentric gravitational parameter in the AU/day unit system,
/// in AU^3 day^-2.
///
/// This is the square of the Gaussian gravitational constant
/// k = 0.01720209895.
pub const GM_SUN: f64 = 0.01720209895 * 0.01720209895;

/// A struct representing a 3x2 matrix.
///
/// This struct is used to store the rotation from the orbital plane into the
/// ecliptic frame. Only the first two columns of the full 3-1-3 rotation are
/// ever needed, since orbital-plane vectors have no out-of-plane component.
///
/// Namely, it is used in the
/// [`transform_orbital_plane_vector`][OrbitTrait::transform_orbital_plane_vector]
/// method to tilt a 2D position into 3D, using the orbital angles.
///
/// Each element is named `eXY`, where `X` is the row and `Y` is the column.
///
/// # Example
/// ```
/// use glam::{DVec2, DVec3};
///
/// use keplerian_orrery::Matrix3x2;
///
/// let matrix = Matrix3x2 {
///    e11: 1.0, e12: 0.0,
///    e21: 0.0, e22: 1.0,
///    e31: 0.0, e32: 0.0,
/// };
///
/// let vec = DVec2::new(1.0, 2.0);
///
/// let result = matrix.dot_vec(vec);
///
/// assert_eq!(result, DVec3::new(1.0, 2.0, 0.0));
/// ```
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matrix3x2 {
    // Element XY
    pub e11: f64,
    pub e12: f64,
    pub e21: f64,
    pub e22: f64,
    pub e31: f64,
    pub e32: f64,
}

impl Matrix3x2 {
    /// Builds the orbital-plane to ecliptic rotation from the three
    /// orientation angles, all in radians.
    ///
    /// The rotation is the standard 3-1-3 sequence: argument of perihelion
    /// about the orbit normal, inclination about the line of nodes, then
    /// longitude of the ascending node about the ecliptic pole.
    ///
    /// # Performance
    /// This uses three `sin_cos` calls. Cache the result if you evaluate the
    /// same orbit repeatedly; [`Orbit`] does this for you.
    ///
    /// # Example
    /// ```
    /// use keplerian_orrery::Matrix3x2;
    ///
    /// let identity = Matrix3x2::from_angles(0.0, 0.0, 0.0);
    ///
    /// assert_eq!(identity.e11, 1.0);
    /// assert_eq!(identity.e22, 1.0);
    /// assert_eq!(identity.e31, 0.0);
    /// ```
    pub fn from_angles(inclination: f64, arg_pe: f64, long_asc_node: f64) -> Matrix3x2 {
        let mut matrix = Matrix3x2::default();

        let (sin_inc, cos_inc) = inclination.sin_cos();
        let (sin_arg_pe, cos_arg_pe) = arg_pe.sin_cos();
        let (sin_lan, cos_lan) = long_asc_node.sin_cos();

        // https://downloads.rene-schwarz.com/download/M001-Keplerian_Orbit_Elements_to_Cartesian_State_Vectors.pdf
        matrix.e11 = cos_arg_pe * cos_lan - sin_arg_pe * cos_inc * sin_lan;
        matrix.e12 = -(sin_arg_pe * cos_lan + cos_arg_pe * cos_inc * sin_lan);

        matrix.e21 = cos_arg_pe * sin_lan + sin_arg_pe * cos_inc * cos_lan;
        matrix.e22 = cos_arg_pe * cos_inc * cos_lan - sin_arg_pe * sin_lan;

        matrix.e31 = sin_arg_pe * sin_inc;
        matrix.e32 = cos_arg_pe * sin_inc;

        matrix
    }

    /// Computes a dot product between this matrix and a 2D vector.
    ///
    /// # Example
    /// ```
    /// use glam::{DVec2, DVec3};
    ///
    /// use keplerian_orrery::Matrix3x2;
    ///
    /// let matrix = Matrix3x2 {
    ///     e11: 1.0, e12: 0.0,
    ///     e21: 0.0, e22: 1.0,
    ///     e31: 1.0, e32: 1.0,
    /// };
    ///
    /// let vec = DVec2::new(1.0, 2.0);
    ///
    /// let result = matrix.dot_vec(vec);
    ///
    /// assert_eq!(result, DVec3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn dot_vec(&self, vec: DVec2) -> DVec3 {
        DVec3::new(
            vec.x * self.e11 + vec.y * self.e12,
            vec.x * self.e21 + vec.y * self.e22,
            vec.x * self.e31 + vec.y * self.e32,
        )
    }
}

/// A struct representing a position and velocity at a point in the orbit.
///
/// The position vector is in astronomical units, while the velocity vector
/// is in astronomical units per day.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateVectors {
    /// The 3D position at a point in the orbit, in AU.
    pub position: DVec3,
    /// The 3D velocity at a point in the orbit, in AU/day.
    pub velocity: DVec3,
}

/// The three anomalies describing where a body is along its orbit.
///
/// All angles are in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Anomalies {
    /// The mean anomaly, normalized to `[0, tau)`.
    pub mean: f64,
    /// The eccentric anomaly, as returned by the Kepler solver.
    pub eccentric: f64,
    /// The true anomaly, in `(-pi, pi]`.
    pub true_anomaly: f64,
}

/// A trait that defines the methods that a Keplerian orbit must implement.
///
/// This trait is implemented by both [`Orbit`] and [`OrbitalElements`].
/// Planets and comets share these default methods; there is only one
/// implementation of the orbital math.
///
/// # Examples
/// ```
/// use keplerian_orrery::{Orbit, OrbitTrait, OrbitalElements};
///
/// fn accepts_orbit(orbit: &impl OrbitTrait) {
///     println!("That's an orbit with period {}", orbit.get_orbital_period());
/// }
///
/// fn main() {
///     let elements = OrbitalElements::circular(1.0, 365.25);
///     accepts_orbit(&elements);
///
///     let cached = Orbit::new(elements);
///     accepts_orbit(&cached);
/// }
/// ```
pub trait OrbitTrait {
    /// Gets the orbital elements this orbit is built from.
    fn get_elements(&self) -> &OrbitalElements;

    /// Gets the 3x2 matrix rotating orbital-plane vectors into the
    /// ecliptic frame.
    ///
    /// # Performance
    /// This is a field read in [`Orbit`], but [`OrbitalElements`] computes
    /// it from scratch each time.
    fn get_transformation_matrix(&self) -> Matrix3x2;

    /// Gets the semi-major axis of the orbit, in AU.
    fn get_semi_major_axis(&self) -> f64 {
        self.get_elements().semi_major_axis
    }

    /// Gets the eccentricity of the orbit.
    fn get_eccentricity(&self) -> f64 {
        self.get_elements().eccentricity
    }

    /// Gets the time it takes to complete one revolution, in days.
    fn get_orbital_period(&self) -> f64 {
        self.get_elements().orbital_period
    }

    /// Gets the epoch at which the mean anomaly at epoch is defined.
    fn get_epoch(&self) -> DateTime<Utc> {
        self.get_elements().epoch
    }

    /// Gets the perihelion distance, `a(1 - e)`, in AU.
    ///
    /// # Example
    /// ```
    /// use keplerian_orrery::{OrbitTrait, OrbitalElements};
    ///
    /// let orbit = OrbitalElements::new(2.0, 0.5, 0.0, 0.0, 0.0, 0.0, 1000.0);
    /// assert_eq!(orbit.get_perihelion(), 1.0);
    /// assert_eq!(orbit.get_aphelion(), 3.0);
    /// ```
    fn get_perihelion(&self) -> f64 {
        self.get_semi_major_axis() * (1.0 - self.get_eccentricity())
    }

    /// Gets the aphelion distance, `a(1 + e)`, in AU.
    fn get_aphelion(&self) -> f64 {
        self.get_semi_major_axis() * (1.0 + self.get_eccentricity())
    }

    /// Gets the semi-latus rectum, `a(1 - e^2)`, in AU.
    fn get_semi_latus_rectum(&self) -> f64 {
        let eccentricity = self.get_eccentricity();
        self.get_semi_major_axis() * (1.0 - eccentricity * eccentricity)
    }

    /// Gets the mean motion, in degrees per day.
    fn get_mean_motion(&self) -> f64 {
        360.0 / self.get_orbital_period()
    }

    /// Gets the number of days between the orbit's epoch and `instant`.
    ///
    /// Negative for instants before the epoch.
    fn get_days_since_epoch(&self, instant: DateTime<Utc>) -> f64 {
        time::days_between(self.get_epoch(), instant)
    }

    /// Gets the mean anomaly a number of days after the epoch.
    ///
    /// The value is computed in degrees, wrapped into `[0, 360)` and
    /// returned in radians.
    fn get_mean_anomaly_at_days(&self, days_since_epoch: f64) -> f64 {
        let elements = self.get_elements();
        let degrees = (elements.mean_anomaly_at_epoch + self.get_mean_motion() * days_since_epoch)
            .rem_euclid(360.0);

        degrees.to_radians()
    }

    /// Gets the mean anomaly at a given instant, in radians.
    fn get_mean_anomaly_at_instant(&self, instant: DateTime<Utc>) -> f64 {
        self.get_mean_anomaly_at_days(self.get_days_since_epoch(instant))
    }

    /// Gets the eccentric anomaly at a given mean anomaly, in radians.
    ///
    /// # Performance
    /// This uses the iterative Kepler solver and is the most expensive step
    /// of a position evaluation.
    fn get_eccentric_anomaly_at_mean_anomaly(&self, mean_anomaly: f64) -> f64 {
        solve_kepler(mean_anomaly, self.get_eccentricity())
    }

    /// Gets the true anomaly at a given eccentric anomaly, in radians.
    ///
    /// The result is in `(-pi, pi]`.
    fn get_true_anomaly_at_eccentric_anomaly(&self, eccentric_anomaly: f64) -> f64 {
        let eccentricity = self.get_eccentricity();
        let (sin_e, cos_e) = eccentric_anomaly.sin_cos();

        ((1.0 - eccentricity * eccentricity).sqrt() * sin_e).atan2(cos_e - eccentricity)
    }

    /// Gets the heliocentric distance at a given true anomaly, in AU.
    ///
    /// # Example
    /// ```
    /// use keplerian_orrery::{OrbitTrait, OrbitalElements};
    ///
    /// let orbit = OrbitalElements::new(1.0, 0.5, 0.0, 0.0, 0.0, 0.0, 365.25);
    /// assert!((orbit.get_distance_at_true_anomaly(0.0) - 0.5).abs() < 1e-12);
    /// ```
    fn get_distance_at_true_anomaly(&self, true_anomaly: f64) -> f64 {
        self.get_semi_latus_rectum() / (1.0 + self.get_eccentricity() * true_anomaly.cos())
    }

    /// Gets all three anomalies a number of days after the epoch.
    fn get_anomalies_at_days(&self, days_since_epoch: f64) -> Anomalies {
        let mean = self.get_mean_anomaly_at_days(days_since_epoch);
        let eccentric = self.get_eccentric_anomaly_at_mean_anomaly(mean);
        let true_anomaly = self.get_true_anomaly_at_eccentric_anomaly(eccentric);

        Anomalies {
            mean,
            eccentric,
            true_anomaly,
        }
    }

    /// Gets all three anomalies at a given instant.
    fn get_anomalies_at_instant(&self, instant: DateTime<Utc>) -> Anomalies {
        self.get_anomalies_at_days(self.get_days_since_epoch(instant))
    }

    /// Gets the 2D position in the orbital plane at a given true anomaly.
    ///
    /// The X axis points towards perihelion.
    fn get_orbital_plane_position_at_true_anomaly(&self, true_anomaly: f64) -> DVec2 {
        let distance = self.get_distance_at_true_anomaly(true_anomaly);
        let (sin, cos) = true_anomaly.sin_cos();

        DVec2::new(distance * cos, distance * sin)
    }

    /// Transforms an orbital-plane vector into the ecliptic frame.
    ///
    /// # Performance
    /// This is much faster on [`Orbit`], which doesn't need to rebuild the
    /// transformation matrix.
    fn transform_orbital_plane_vector(&self, vector: DVec2) -> DVec3 {
        self.get_transformation_matrix().dot_vec(vector)
    }

    /// Gets the 3D position at a given true anomaly, in AU.
    fn get_position_at_true_anomaly(&self, true_anomaly: f64) -> DVec3 {
        self.transform_orbital_plane_vector(
            self.get_orbital_plane_position_at_true_anomaly(true_anomaly),
        )
    }

    /// Gets the 3D position a number of days after the epoch, in AU.
    fn get_position_at_days(&self, days_since_epoch: f64) -> DVec3 {
        let anomalies = self.get_anomalies_at_days(days_since_epoch);
        self.get_position_at_true_anomaly(anomalies.true_anomaly)
    }

    /// Gets the 3D position at a given instant, in AU, in the ecliptic frame.
    ///
    /// This is a pure function of the orbit and the instant: identical
    /// inputs always give bit-identical outputs.
    ///
    /// # Example
    /// ```
    /// use keplerian_orrery::{time, OrbitTrait, OrbitalElements};
    ///
    /// let orbit = OrbitalElements::new(1.0, 0.0167, 0.0, -11.26, 102.95, 357.529, 365.256);
    /// let instant = time::j2000();
    ///
    /// assert_eq!(
    ///     orbit.get_position_at_instant(instant),
    ///     orbit.get_position_at_instant(instant),
    /// );
    /// ```
    fn get_position_at_instant(&self, instant: DateTime<Utc>) -> DVec3 {
        self.get_position_at_days(self.get_days_since_epoch(instant))
    }

    /// Gets the heliocentric distance at a given instant, in AU.
    fn get_distance_at_instant(&self, instant: DateTime<Utc>) -> f64 {
        let anomalies = self.get_anomalies_at_instant(instant);
        self.get_distance_at_true_anomaly(anomalies.true_anomaly)
    }

    /// Estimates the velocity a number of days after the epoch, in AU/day.
    ///
    /// Uses the central difference
    /// `(p(t + delta) - p(t - delta)) / (2 delta)`, which is second-order
    /// accurate in `delta`.
    ///
    /// # Panics
    /// Panics if `delta_days` is zero or not finite. Asking for a derivative
    /// over an empty window is a programming error.
    fn get_velocity_at_days(&self, days_since_epoch: f64, delta_days: f64) -> DVec3 {
        assert!(
            delta_days != 0.0 && delta_days.is_finite(),
            "velocity sampling window must be non-zero and finite, got {delta_days}"
        );

        let before = self.get_position_at_days(days_since_epoch - delta_days);
        let after = self.get_position_at_days(days_since_epoch + delta_days);

        (after - before) / (2.0 * delta_days)
    }

    /// Estimates the velocity at a given instant, in AU/day, using
    /// [`DEFAULT_VELOCITY_DELTA_DAYS`].
    fn get_velocity_at_instant(&self, instant: DateTime<Utc>) -> DVec3 {
        self.get_velocity_at_days(
            self.get_days_since_epoch(instant),
            DEFAULT_VELOCITY_DELTA_DAYS,
        )
    }

    /// Gets the position and the estimated velocity at a given instant.
    fn get_state_vectors_at_instant(&self, instant: DateTime<Utc>) -> StateVectors {
        let days = self.get_days_since_epoch(instant);

        StateVectors {
            position: self.get_position_at_days(days),
            velocity: self.get_velocity_at_days(days, DEFAULT_VELOCITY_DELTA_DAYS),
        }
    }

    /// Gets the orbital speed at a given heliocentric distance, in AU/day.
    ///
    /// Uses the vis-viva relation `v = sqrt(mu (2/r - 1/a))` with
    /// [`GM_SUN`] as `mu`.
    ///
    /// Learn more: <https://en.wikipedia.org/wiki/Vis-viva_equation>
    fn get_speed_at_distance(&self, distance: f64) -> f64 {
        (GM_SUN * (2.0 / distance - 1.0 / self.get_semi_major_axis()))
            .max(0.0)
            .sqrt()
    }

    /// Gets the mean orbital speed `2 pi a / P`, in AU/day.
    fn get_mean_orbital_speed(&self) -> f64 {
        TAU * self.get_semi_major_axis() / self.get_orbital_period()
    }
}

#[cfg(test)]
mod tests;

#[inline]
fn keplers_equation(mean_anomaly: f64, eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    eccentric_anomaly - (eccentricity * eccentric_anomaly.sin()) - mean_anomaly
}
#[inline]
fn keplers_equation_derivative(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    1.0 - (eccentricity * eccentric_anomaly.cos())
}
