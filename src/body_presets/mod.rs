//! This module contains presets for the bodies of the solar system.
//!
//! Orbital elements are referenced to J2000.0 and taken from the JPL
//! approximate planetary element tables, with comet elements from published
//! orbit solutions. Physical quantities are relative to the Earth.
//!
//! # Example
//! ```
//! use keplerian_orrery::body_presets;
//!
//! assert_eq!(body_presets::planets().len(), 8);
//! assert_eq!(body_presets::all_bodies().len(), 14);
//! ```

mod comets;
mod planets;

pub use comets::*;
pub use planets::*;

use crate::CelestialBody;

/// Returns the eight planets, ordered by distance from the Sun.
pub fn planets() -> Vec<CelestialBody> {
    vec![
        mercury(),
        venus(),
        earth(),
        mars(),
        jupiter(),
        saturn(),
        uranus(),
        neptune(),
    ]
}

/// Returns the dwarf planets.
pub fn dwarf_planets() -> Vec<CelestialBody> {
    vec![pluto()]
}

/// Returns the famous comets.
pub fn comets() -> Vec<CelestialBody> {
    vec![halley(), hale_bopp(), encke(), swift_tuttle(), tempel_1()]
}

/// Returns every preset body: the planets, then the dwarf planets, then the
/// comets.
pub fn all_bodies() -> Vec<CelestialBody> {
    let mut bodies = planets();
    bodies.extend(dwarf_planets());
    bodies.extend(comets());
    bodies
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
