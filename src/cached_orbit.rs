#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Matrix3x2, OrbitTrait, OrbitalElements};

/// A struct representing a Keplerian orbit with some cached values.
///
/// This struct holds a copy of the [`OrbitalElements`] along with the
/// rotation matrix into the ecliptic frame, so evaluating positions over and
/// over (every frame, or every point of an orbit path) doesn't redo the
/// trigonometry of the three orientation angles.
///
/// The elements are immutable once wrapped. To change them, convert back
/// into [`OrbitalElements`], edit, and build a new `Orbit`.
///
/// # Example
/// ```
/// use keplerian_orrery::{time, Orbit, OrbitTrait, OrbitalElements};
///
/// let elements = OrbitalElements::new(
///     5.20288700, 0.04838624, 1.30439695, 100.47390909, 273.867, 20.020, 4332.59,
/// );
/// let orbit = Orbit::new(elements.clone());
///
/// let instant = time::j2000();
/// let cached = orbit.get_position_at_instant(instant);
/// let uncached = elements.get_position_at_instant(instant);
///
/// assert!((cached - uncached).length() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "OrbitalElements", into = "OrbitalElements")
)]
pub struct Orbit {
    elements: OrbitalElements,
    cache: OrbitCachedCalculations,
}

// -------- MEMO --------
// When updating this struct, please review the following methods:
// `Orbit::get_cached_calculations()`
#[derive(Clone, Debug, PartialEq)]
struct OrbitCachedCalculations {
    /// The transformation matrix to tilt the 2D planar orbit into 3D space.
    transformation_matrix: Matrix3x2,
}

impl Orbit {
    /// Creates a new cached orbit from a set of elements.
    ///
    /// # Performance
    /// This computes the ecliptic rotation matrix once. Every later
    /// evaluation reuses it.
    pub fn new(elements: OrbitalElements) -> Orbit {
        let cache = Self::get_cached_calculations(&elements);
        Orbit { elements, cache }
    }

    /// Creates a new circular orbit in the ecliptic plane.
    ///
    /// See [`OrbitalElements::circular`].
    pub fn new_circular(radius: f64, orbital_period: f64) -> Orbit {
        Self::new(OrbitalElements::circular(radius, orbital_period))
    }

    fn get_cached_calculations(elements: &OrbitalElements) -> OrbitCachedCalculations {
        OrbitCachedCalculations {
            transformation_matrix: elements.get_transformation_matrix(),
        }
    }

    /// Unwraps the orbit back into its elements, dropping the cache.
    pub fn into_elements(self) -> OrbitalElements {
        self.elements
    }
}

impl Default for Orbit {
    /// Creates a default orbit.
    ///
    /// Currently, this is a circular 1 AU orbit with a one-year period.
    /// However, do not rely on this behavior, as it may change in the future.
    fn default() -> Self {
        Self::new(OrbitalElements::default())
    }
}

impl From<OrbitalElements> for Orbit {
    fn from(elements: OrbitalElements) -> Self {
        Self::new(elements)
    }
}

impl From<Orbit> for OrbitalElements {
    fn from(orbit: Orbit) -> Self {
        orbit.elements
    }
}

impl OrbitTrait for Orbit {
    fn get_elements(&self) -> &OrbitalElements {
        &self.elements
    }

    fn get_transformation_matrix(&self) -> Matrix3x2 {
        self.cache.transformation_matrix
    }
}
