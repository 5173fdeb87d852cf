//! This module contains presets for comets.
//!
//! "A comet is an icy, small Solar System body that warms and begins to
//! release gases when passing close to the Sun, a process called
//! outgassing."
//!
//! \- [Wikipedia](https://en.wikipedia.org/wiki/Comet)
//!
//! Hale-Bopp's eccentricity is above
//! [`SAFE_ECCENTRICITY_LIMIT`][crate::SAFE_ECCENTRICITY_LIMIT]; its position
//! near perihelion is a best estimate.

use crate::{CelestialBody, Comet, Discovery, Orbit, OrbitalElements};

/// Returns Halley's Comet, returning roughly every 76 years.
pub fn halley() -> CelestialBody {
    Comet {
        id: "halley".to_string(),
        name: "Halley's Comet".to_string(),
        description: "The most famous short-period comet, returning roughly every 76 \
            years and recorded since antiquity."
            .to_string(),
        orbit: Orbit::new(OrbitalElements::new(
            17.834, 0.96714, 162.26, 58.42, 111.33, 38.38, 27510.0,
        )),
        color: "#E8E8E8".to_string(),
        tail_color: "#87CEEB".to_string(),
        core_size: 0.08,
        discovery: Some(Discovery {
            year: -240,
            discoverer: "Ancient astronomers".to_string(),
        }),
        last_perihelion: Some("1986-02-09".to_string()),
        next_perihelion: Some("2061-07-28".to_string()),
    }
    .into()
}

/// Returns Comet Hale-Bopp, the great comet of 1997.
pub fn hale_bopp() -> CelestialBody {
    Comet {
        id: "hale-bopp".to_string(),
        name: "Hale-Bopp".to_string(),
        description: "One of the brightest comets of the 20th century, visible to the \
            naked eye for 18 months in 1996 and 1997."
            .to_string(),
        orbit: Orbit::new(OrbitalElements::new(
            186.0, 0.995, 89.4, 282.47, 130.59, 180.0, 926000.0,
        )),
        color: "#FFFACD".to_string(),
        tail_color: "#FFD700".to_string(),
        core_size: 0.1,
        discovery: Some(Discovery {
            year: 1995,
            discoverer: "Alan Hale, Thomas Bopp".to_string(),
        }),
        last_perihelion: Some("1997-04-01".to_string()),
        next_perihelion: Some("4530".to_string()),
    }
    .into()
}

/// Returns Encke's Comet, the shortest known period.
pub fn encke() -> CelestialBody {
    Comet {
        id: "encke".to_string(),
        name: "Encke's Comet".to_string(),
        description: "The comet with the shortest known period, returning about every \
            3.3 years."
            .to_string(),
        orbit: Orbit::new(OrbitalElements::new(
            2.215, 0.847, 11.76, 334.57, 186.54, 190.0, 1204.0,
        )),
        color: "#D3D3D3".to_string(),
        tail_color: "#98FB98".to_string(),
        core_size: 0.05,
        discovery: Some(Discovery {
            year: 1786,
            discoverer: "Pierre Méchain".to_string(),
        }),
        last_perihelion: Some("2023-10-22".to_string()),
        next_perihelion: Some("2027-02-21".to_string()),
    }
    .into()
}

/// Returns Comet Swift-Tuttle, the parent of the Perseids.
pub fn swift_tuttle() -> CelestialBody {
    Comet {
        id: "swift-tuttle".to_string(),
        name: "Swift-Tuttle".to_string(),
        description: "The parent body of the Perseid meteor shower, with a period of \
            about 133 years."
            .to_string(),
        orbit: Orbit::new(OrbitalElements::new(
            26.092, 0.9632, 113.45, 139.38, 152.98, 100.0, 48650.0,
        )),
        color: "#F5F5DC".to_string(),
        tail_color: "#FF6347".to_string(),
        core_size: 0.07,
        discovery: Some(Discovery {
            year: 1862,
            discoverer: "Lewis Swift, Horace Tuttle".to_string(),
        }),
        last_perihelion: Some("1992-12-12".to_string()),
        next_perihelion: Some("2126-07-12".to_string()),
    }
    .into()
}

/// Returns Comet Tempel 1, the Deep Impact target.
pub fn tempel_1() -> CelestialBody {
    Comet {
        id: "tempel-1".to_string(),
        name: "Tempel 1".to_string(),
        description: "The target of NASA's Deep Impact mission, with a period of about \
            5.5 years."
            .to_string(),
        orbit: Orbit::new(OrbitalElements::new(
            3.138, 0.5175, 10.53, 68.93, 178.93, 150.0, 2030.0,
        )),
        color: "#C0C0C0".to_string(),
        tail_color: "#ADD8E6".to_string(),
        core_size: 0.04,
        discovery: Some(Discovery {
            year: 1867,
            discoverer: "Wilhelm Tempel".to_string(),
        }),
        last_perihelion: Some("2022-03-04".to_string()),
        next_perihelion: Some("2027-09-01".to_string()),
    }
    .into()
}
