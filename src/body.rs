use chrono::{DateTime, Utc};
use glam::DVec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{rotation_angle, Orbit, OrbitTrait, OrbitalElements};

/// Physical properties of a planet, relative to the Earth where noted.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhysicalStats {
    /// The mean radius, in Earth radii.
    pub radius: f64,
    /// The mass, in Earth masses.
    pub mass: f64,
    /// The mean density, in g/cm^3.
    pub density: f64,
    /// The surface gravity, in Earth gravities.
    pub gravity: f64,
    /// The number of known moons.
    pub moons: u32,
}

/// Who found a body, and when.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Discovery {
    /// The year of discovery. Negative years are BCE.
    pub year: i32,
    /// The discoverer or discoverers.
    pub discoverer: String,
}

/// The classification of a planet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlanetKind {
    /// One of the eight planets.
    Major,
    /// A dwarf planet such as Pluto.
    Dwarf,
}

/// A planet or dwarf planet.
///
/// Colors are CSS-style hex strings, passed through untouched to the
/// renderer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Planet {
    /// The unique identifier, e.g. `"earth"`.
    pub id: String,
    /// The display name.
    pub name: String,
    /// A short description.
    pub description: String,
    /// The heliocentric orbit.
    pub orbit: Orbit,
    /// The sidereal rotation period, in hours. Negative for retrograde
    /// rotators.
    pub rotation_period: f64,
    /// The axial tilt, in degrees.
    pub axial_tilt: f64,
    /// Physical properties.
    pub stats: PhysicalStats,
    /// The surface color.
    pub color: String,
    /// The atmosphere glow color.
    pub glow_color: String,
    /// The ring color, for planets with rings.
    pub ring_color: Option<String>,
    /// The main atmospheric constituents, with their share.
    pub atmosphere: Vec<String>,
    /// A few notable facts.
    pub facts: Vec<String>,
    /// The discovery, for bodies not visible to the naked eye.
    pub discovery: Option<Discovery>,
    /// Whether this is a major or a dwarf planet.
    pub kind: PlanetKind,
}

impl Planet {
    /// Checks whether the planet has rings.
    pub fn has_rings(&self) -> bool {
        self.ring_color.is_some()
    }
}

/// A comet.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Comet {
    /// The unique identifier, e.g. `"halley"`.
    pub id: String,
    /// The display name.
    pub name: String,
    /// A short description.
    pub description: String,
    /// The heliocentric orbit.
    pub orbit: Orbit,
    /// The nucleus color.
    pub color: String,
    /// The tail color.
    pub tail_color: String,
    /// The drawn nucleus size, in scene units.
    pub core_size: f64,
    /// The discovery record.
    pub discovery: Option<Discovery>,
    /// The date of the last perihelion passage, as published.
    pub last_perihelion: Option<String>,
    /// The date of the next perihelion passage, as published.
    ///
    /// Sometimes only a year is known.
    pub next_perihelion: Option<String>,
}

/// A body orbiting the Sun.
///
/// Planets and comets are evaluated by the same orbital engine; the variants
/// only differ in their descriptive data.
///
/// # Example
/// ```
/// use keplerian_orrery::{body_presets, time};
///
/// let halley = body_presets::halley();
///
/// // Halley is about 19 AU from the Sun at J2000
/// assert!(!halley.is_within_display_range(time::j2000(), 10.0));
/// assert!(halley.is_within_display_range(time::j2000(), 50.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CelestialBody {
    /// A planet or dwarf planet.
    Planet(Planet),
    /// A comet.
    Comet(Comet),
}

impl CelestialBody {
    /// Gets the unique identifier.
    pub fn id(&self) -> &str {
        match self {
            CelestialBody::Planet(planet) => &planet.id,
            CelestialBody::Comet(comet) => &comet.id,
        }
    }

    /// Gets the display name.
    pub fn name(&self) -> &str {
        match self {
            CelestialBody::Planet(planet) => &planet.name,
            CelestialBody::Comet(comet) => &comet.name,
        }
    }

    /// Gets the orbit.
    pub fn orbit(&self) -> &Orbit {
        match self {
            CelestialBody::Planet(planet) => &planet.orbit,
            CelestialBody::Comet(comet) => &comet.orbit,
        }
    }

    /// Gets the orbital elements.
    pub fn elements(&self) -> &OrbitalElements {
        self.orbit().get_elements()
    }

    /// Gets the planet data, if this is a planet.
    pub fn as_planet(&self) -> Option<&Planet> {
        match self {
            CelestialBody::Planet(planet) => Some(planet),
            CelestialBody::Comet(_) => None,
        }
    }

    /// Gets the comet data, if this is a comet.
    pub fn as_comet(&self) -> Option<&Comet> {
        match self {
            CelestialBody::Planet(_) => None,
            CelestialBody::Comet(comet) => Some(comet),
        }
    }

    /// Checks whether this is one of the eight major planets.
    pub fn is_major_planet(&self) -> bool {
        matches!(
            self,
            CelestialBody::Planet(Planet {
                kind: PlanetKind::Major,
                ..
            })
        )
    }

    /// Gets the rotation period in hours. Comets have none.
    pub fn rotation_period(&self) -> Option<f64> {
        self.as_planet().map(|planet| planet.rotation_period)
    }

    /// Gets the axial rotation angle at an instant, in radians.
    ///
    /// Comets don't spin in this model and always return 0.
    pub fn rotation_angle_at(&self, instant: DateTime<Utc>) -> f64 {
        self.rotation_period()
            .map_or(0.0, |period| rotation_angle(period, instant))
    }

    /// Gets the heliocentric position at an instant, in AU.
    pub fn position_at(&self, instant: DateTime<Utc>) -> DVec3 {
        self.orbit().get_position_at_instant(instant)
    }

    /// Checks whether the body is within `distance_cap` AU of the Sun at an
    /// instant.
    ///
    /// Bodies outside the cap are not drawn.
    pub fn is_within_display_range(&self, instant: DateTime<Utc>, distance_cap: f64) -> bool {
        self.orbit().get_distance_at_instant(instant) <= distance_cap
    }
}

impl From<Planet> for CelestialBody {
    fn from(planet: Planet) -> Self {
        CelestialBody::Planet(planet)
    }
}

impl From<Comet> for CelestialBody {
    fn from(comet: Comet) -> Self {
        CelestialBody::Comet(comet)
    }
}
