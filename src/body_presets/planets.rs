//! This module contains presets for the planets and dwarf planets.
//!
//! "A planet is a large, rounded astronomical body that is generally
//! required to be in orbit around a star, stellar remnant, or brown dwarf,
//! and is not one itself."
//!
//! \- [Wikipedia](https://en.wikipedia.org/wiki/Planet)

use super::strings;
use crate::{CelestialBody, Discovery, Orbit, OrbitalElements, PhysicalStats, Planet, PlanetKind};

/// Returns Mercury, the smallest planet and the closest to the Sun.
pub fn mercury() -> CelestialBody {
    Planet {
        id: "mercury".to_string(),
        name: "Mercury".to_string(),
        description: "The smallest planet and the closest to the Sun, with the most \
            eccentric orbit of the eight planets."
            .to_string(),
        orbit: Orbit::new(OrbitalElements::new(
            0.38709927, 0.20563593, 7.00497902, 48.33076593, 29.12703035, 174.796, 87.969,
        )),
        rotation_period: 1407.6,
        axial_tilt: 0.034,
        stats: PhysicalStats {
            radius: 0.383,
            mass: 0.055,
            density: 5.427,
            gravity: 0.378,
            moons: 0,
        },
        color: "#B7B8B9".to_string(),
        glow_color: "#8C8C8C".to_string(),
        ring_color: None,
        atmosphere: Vec::new(),
        facts: strings(&[
            "A solar day lasts 176 Earth days",
            "Surface temperatures swing by 600 °C",
            "It has no atmosphere to shield it",
            "Its surface is covered in craters",
        ]),
        discovery: None,
        kind: PlanetKind::Major,
    }
    .into()
}

/// Returns Venus, the hottest planet.
///
/// Venus rotates retrograde, so its rotation period is negative.
pub fn venus() -> CelestialBody {
    Planet {
        id: "venus".to_string(),
        name: "Venus".to_string(),
        description: "The hottest planet, wrapped in a dense atmosphere with an \
            extreme greenhouse effect."
            .to_string(),
        orbit: Orbit::new(OrbitalElements::new(
            0.72333566, 0.00677672, 3.39467605, 76.67984255, 54.85229058, 50.115, 224.701,
        )),
        rotation_period: -5832.5,
        axial_tilt: 177.36,
        stats: PhysicalStats {
            radius: 0.949,
            mass: 0.815,
            density: 5.243,
            gravity: 0.907,
            moons: 0,
        },
        color: "#E6C87A".to_string(),
        glow_color: "#FFA500".to_string(),
        ring_color: None,
        atmosphere: strings(&["CO₂ (96.5%)", "N₂ (3.5%)"]),
        facts: strings(&[
            "It rotates backwards",
            "Its surface sits at about 465 °C",
            "Surface pressure is 92 times the Earth's",
            "It is called the Earth's sister planet",
        ]),
        discovery: None,
        kind: PlanetKind::Major,
    }
    .into()
}

/// Returns the Earth.
pub fn earth() -> CelestialBody {
    Planet {
        id: "earth".to_string(),
        name: "Earth".to_string(),
        description: "The only planet known to harbor life, with liquid water and a \
            breathable atmosphere."
            .to_string(),
        orbit: Orbit::new(OrbitalElements::new(
            1.00000261, 0.01671123, 0.00005, -11.26064, 102.94719, 357.529, 365.256,
        )),
        rotation_period: 23.934,
        axial_tilt: 23.44,
        stats: PhysicalStats {
            radius: 1.0,
            mass: 1.0,
            density: 5.514,
            gravity: 1.0,
            moons: 1,
        },
        color: "#6B93D6".to_string(),
        glow_color: "#4169E1".to_string(),
        ring_color: None,
        atmosphere: strings(&["N₂ (78%)", "O₂ (21%)", "Ar (0.9%)"]),
        facts: strings(&[
            "The densest planet in the solar system",
            "Water covers 71% of its surface",
            "A magnetic field protects its surface",
            "The only world known to host life",
        ]),
        discovery: None,
        kind: PlanetKind::Major,
    }
    .into()
}

/// Returns Mars, the red planet.
pub fn mars() -> CelestialBody {
    Planet {
        id: "mars".to_string(),
        name: "Mars".to_string(),
        description: "The red planet, the most explored planet beyond the Earth, which \
            may once have had liquid water."
            .to_string(),
        orbit: Orbit::new(OrbitalElements::new(
            1.52371034, 0.09339410, 1.84969142, 49.55953891, 286.5016, 19.373, 686.980,
        )),
        rotation_period: 24.623,
        axial_tilt: 25.19,
        stats: PhysicalStats {
            radius: 0.532,
            mass: 0.107,
            density: 3.934,
            gravity: 0.377,
            moons: 2,
        },
        color: "#E27B58".to_string(),
        glow_color: "#CD5C5C".to_string(),
        ring_color: None,
        atmosphere: strings(&["CO₂ (95.3%)", "N₂ (2.7%)", "Ar (1.6%)"]),
        facts: strings(&[
            "Home to Olympus Mons, the tallest mountain in the solar system",
            "A day lasts about 24 hours 37 minutes",
            "It has two small moons, Phobos and Deimos",
            "Its surface is cut by a vast canyon system",
        ]),
        discovery: None,
        kind: PlanetKind::Major,
    }
    .into()
}

/// Returns Jupiter, the largest planet.
pub fn jupiter() -> CelestialBody {
    Planet {
        id: "jupiter".to_string(),
        name: "Jupiter".to_string(),
        description: "The largest planet, two and a half times as massive as all the \
            others combined. Its Great Red Spot is a storm centuries old."
            .to_string(),
        orbit: Orbit::new(OrbitalElements::new(
            5.20288700, 0.04838624, 1.30439695, 100.47390909, 273.867, 20.020, 4332.59,
        )),
        rotation_period: 9.925,
        axial_tilt: 3.13,
        stats: PhysicalStats {
            radius: 11.209,
            mass: 317.8,
            density: 1.326,
            gravity: 2.528,
            moons: 95,
        },
        color: "#D8CA9D".to_string(),
        glow_color: "#DAA520".to_string(),
        ring_color: None,
        atmosphere: strings(&["H₂ (89.8%)", "He (10.2%)"]),
        facts: strings(&[
            "A day lasts less than 10 hours",
            "The Great Red Spot could hold two or three Earths",
            "It has the strongest magnetic field of any planet",
            "It has 95 known moons",
        ]),
        discovery: None,
        kind: PlanetKind::Major,
    }
    .into()
}

/// Returns Saturn, the ringed planet.
pub fn saturn() -> CelestialBody {
    Planet {
        id: "saturn".to_string(),
        name: "Saturn".to_string(),
        description: "The second largest planet, famous for its rings. It is less \
            dense than water."
            .to_string(),
        orbit: Orbit::new(OrbitalElements::new(
            9.53667594, 0.05386179, 2.48599187, 113.66242448, 339.392, 317.020, 10759.22,
        )),
        rotation_period: 10.656,
        axial_tilt: 26.73,
        stats: PhysicalStats {
            radius: 9.449,
            mass: 95.16,
            density: 0.687,
            gravity: 1.065,
            moons: 146,
        },
        color: "#F4D59E".to_string(),
        glow_color: "#F0E68C".to_string(),
        ring_color: Some("#C9B896".to_string()),
        atmosphere: strings(&["H₂ (96.3%)", "He (3.25%)"]),
        facts: strings(&[
            "Its rings are mostly chunks of ice",
            "It is less dense than water",
            "Winds reach 1800 km/h",
            "Titan, its largest moon, has a thick atmosphere",
        ]),
        discovery: None,
        kind: PlanetKind::Major,
    }
    .into()
}

/// Returns Uranus, the ice giant rolling on its side.
pub fn uranus() -> CelestialBody {
    Planet {
        id: "uranus".to_string(),
        name: "Uranus".to_string(),
        description: "An ice giant whose spin axis lies almost in its orbital plane, \
            so it rolls around the Sun on its side."
            .to_string(),
        orbit: Orbit::new(OrbitalElements::new(
            19.18916464, 0.04725744, 0.77263783, 74.01692503, 96.998857, 142.238, 30688.5,
        )),
        rotation_period: -17.24,
        axial_tilt: 97.77,
        stats: PhysicalStats {
            radius: 4.007,
            mass: 14.54,
            density: 1.270,
            gravity: 0.886,
            moons: 28,
        },
        color: "#B5E3E3".to_string(),
        glow_color: "#40E0D0".to_string(),
        ring_color: Some("#87CEEB".to_string()),
        atmosphere: strings(&["H₂ (82.5%)", "He (15.2%)", "CH₄ (2.3%)"]),
        facts: strings(&[
            "Its axial tilt is close to 98 degrees",
            "It is the coldest planet",
            "One orbit takes 84 years",
            "William Herschel found it in 1781",
        ]),
        discovery: Some(Discovery {
            year: 1781,
            discoverer: "William Herschel".to_string(),
        }),
        kind: PlanetKind::Major,
    }
    .into()
}

/// Returns Neptune, the outermost planet.
pub fn neptune() -> CelestialBody {
    Planet {
        id: "neptune".to_string(),
        name: "Neptune".to_string(),
        description: "The outermost planet, with the strongest storms and fastest \
            winds in the solar system."
            .to_string(),
        orbit: Orbit::new(OrbitalElements::new(
            30.06992276, 0.00859048, 1.77004347, 131.78422574, 276.336, 256.228, 60182.0,
        )),
        rotation_period: 16.11,
        axial_tilt: 28.32,
        stats: PhysicalStats {
            radius: 3.883,
            mass: 17.15,
            density: 1.638,
            gravity: 1.137,
            moons: 16,
        },
        color: "#5B5DDF".to_string(),
        glow_color: "#4169E1".to_string(),
        ring_color: Some("#6495ED".to_string()),
        atmosphere: strings(&["H₂ (80%)", "He (19%)", "CH₄ (1%)"]),
        facts: strings(&[
            "Winds reach 2100 km/h",
            "One orbit takes 165 years",
            "The first planet found by mathematical prediction",
            "Triton is one of the largest moons in the solar system",
        ]),
        discovery: Some(Discovery {
            year: 1846,
            discoverer: "Johann Galle".to_string(),
        }),
        kind: PlanetKind::Major,
    }
    .into()
}

/// Returns Pluto, the best known dwarf planet.
pub fn pluto() -> CelestialBody {
    Planet {
        id: "pluto".to_string(),
        name: "Pluto".to_string(),
        description: "Once counted as the ninth planet, reclassified as a dwarf planet \
            in 2006."
            .to_string(),
        orbit: Orbit::new(OrbitalElements::new(
            39.48211675, 0.24882730, 17.14001206, 110.30393684, 113.834, 14.53, 90560.0,
        )),
        rotation_period: -153.3,
        axial_tilt: 122.53,
        stats: PhysicalStats {
            radius: 0.186,
            mass: 0.0022,
            density: 1.854,
            gravity: 0.063,
            moons: 5,
        },
        color: "#D2B48C".to_string(),
        glow_color: "#C4A574".to_string(),
        ring_color: None,
        atmosphere: strings(&["N₂", "CH₄", "CO"]),
        facts: Vec::new(),
        discovery: Some(Discovery {
            year: 1930,
            discoverer: "Clyde Tombaugh".to_string(),
        }),
        kind: PlanetKind::Dwarf,
    }
    .into()
}
