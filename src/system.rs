use chrono::{DateTime, Utc};
use glam::DVec3;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    CelestialBody, DisplayConfig, ElementsError, EngineConfig, OrbitTrait as _, OrbitalInfo,
    PathCache, SimulationClock,
};

/// The id that stands for the Sun in selections.
pub const SUN_ID: &str = "sun";

/// An error describing why a body was not added to a [`SolarSystem`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SystemError {
    /// The body's orbital elements are outside the supported domain.
    #[error("body `{id}` has invalid orbital elements: {source}")]
    InvalidElements {
        /// The id of the rejected body.
        id: String,
        /// What is wrong with the elements.
        source: ElementsError,
    },

    /// A body with the same id is already registered.
    #[error("a body with id `{0}` already exists")]
    DuplicateId(String),

    /// The id is reserved for the Sun.
    #[error("the id `sun` is reserved for the Sun")]
    ReservedId,
}

/// The ordered registry of bodies orbiting the Sun.
///
/// Bodies are validated once when added; evaluation never re-checks them.
///
/// # Example
/// ```
/// use keplerian_orrery::{time, SolarSystem};
///
/// let system = SolarSystem::solar();
/// let positions = system.positions_at(time::j2000());
///
/// assert_eq!(positions.len(), system.len());
/// assert_eq!(positions[2].0, "earth");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolarSystem {
    bodies: Vec<CelestialBody>,
}

impl SolarSystem {
    /// Creates an empty system.
    pub fn new() -> SolarSystem {
        SolarSystem::default()
    }

    /// Creates a system holding every body in
    /// [`body_presets`][crate::body_presets].
    pub fn solar() -> SolarSystem {
        let mut system = SolarSystem::new();

        for body in crate::body_presets::all_bodies() {
            if let Err(error) = system.add_body(body) {
                debug_assert!(false, "preset body rejected: {error}");
            }
        }

        system
    }

    /// Adds a body to the system.
    ///
    /// Returns the index of the newly-added body.
    pub fn add_body(&mut self, body: CelestialBody) -> Result<usize, SystemError> {
        let result = self.check_body(&body);

        if let Err(error) = result {
            warn!(id = body.id(), %error, "rejected body");
            return Err(error);
        }

        debug!(id = body.id(), "added body");
        self.bodies.push(body);

        Ok(self.bodies.len() - 1)
    }

    fn check_body(&self, body: &CelestialBody) -> Result<(), SystemError> {
        let id = body.id();

        if id == SUN_ID {
            return Err(SystemError::ReservedId);
        }

        if self.get_body_index(id).is_some() {
            return Err(SystemError::DuplicateId(id.to_string()));
        }

        body.elements()
            .validate()
            .map_err(|source| SystemError::InvalidElements {
                id: id.to_string(),
                source,
            })
    }

    /// Removes a body from the system.
    ///
    /// Returns the removed body, or `None` if no body has this id.
    pub fn remove_body(&mut self, id: &str) -> Option<CelestialBody> {
        let index = self.get_body_index(id)?;
        Some(self.bodies.remove(index))
    }

    /// Gets all bodies, in insertion order.
    pub fn get_bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    /// Gets a body by id.
    pub fn get_body(&self, id: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|body| body.id() == id)
    }

    /// Gets the index of a body with a given id.
    pub fn get_body_index(&self, id: &str) -> Option<usize> {
        self.bodies.iter().position(|body| body.id() == id)
    }

    /// Gets the number of bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Checks whether the system has no bodies.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterates over the planets and dwarf planets.
    pub fn planets(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter().filter(|body| body.as_planet().is_some())
    }

    /// Iterates over the comets.
    pub fn comets(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter().filter(|body| body.as_comet().is_some())
    }

    /// Gets the heliocentric position of every body at an instant, in AU.
    ///
    /// The result is in insertion order. With the `parallel` feature the
    /// bodies are evaluated on the rayon thread pool.
    pub fn positions_at(&self, instant: DateTime<Utc>) -> Vec<(&str, DVec3)> {
        #[cfg(feature = "parallel")]
        let iter = self.bodies.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = self.bodies.iter();

        iter.map(|body| (body.id(), body.orbit().get_position_at_instant(instant)))
            .collect()
    }

    /// Gets the bodies within `distance_cap` AU of the Sun at an instant.
    pub fn bodies_within(&self, instant: DateTime<Utc>, distance_cap: f64) -> Vec<&CelestialBody> {
        self.bodies
            .iter()
            .filter(|body| body.is_within_display_range(instant, distance_cap))
            .collect()
    }

    fn major_planet_ids(&self) -> Vec<&str> {
        self.bodies
            .iter()
            .filter(|body| body.is_major_planet())
            .map(CelestialBody::id)
            .collect()
    }

    /// Gets the id of the major planet after `current`, wrapping around.
    ///
    /// With no current selection, or one that isn't a major planet, this is
    /// the innermost planet.
    pub fn next_planet_id(&self, current: Option<&str>) -> Option<&str> {
        let ids = self.major_planet_ids();
        let position = current.and_then(|current| ids.iter().position(|&id| id == current));

        match position {
            Some(index) => ids.get((index + 1) % ids.len()).copied(),
            None => ids.first().copied(),
        }
    }

    /// Gets the id of the major planet before `current`, wrapping around.
    ///
    /// With no current selection, or one that isn't a major planet, this is
    /// the outermost planet.
    pub fn prev_planet_id(&self, current: Option<&str>) -> Option<&str> {
        let ids = self.major_planet_ids();
        let position = current.and_then(|current| ids.iter().position(|&id| id == current));

        match position {
            Some(index) => ids.get((index + ids.len() - 1) % ids.len()).copied(),
            None => ids.last().copied(),
        }
    }
}

/// The mutable state of a running orrery.
///
/// This bundles the clock, the display settings, the orbit path cache and
/// the current selection. It is passed around by reference; nothing in the
/// engine holds global state.
///
/// # Example
/// ```
/// use keplerian_orrery::{time, EngineConfig, SimulationContext, SolarSystem};
///
/// let system = SolarSystem::solar();
/// let mut context = SimulationContext::starting_at(time::j2000(), &EngineConfig::default());
///
/// context.select_next(&system);
/// assert_eq!(context.selected(), Some("mercury"));
///
/// let info = context.selected_info(&system).unwrap();
/// assert!(info.heliocentric_distance < 0.47);
/// ```
#[derive(Clone, Debug)]
pub struct SimulationContext {
    /// The simulation clock.
    pub clock: SimulationClock,
    /// The display settings.
    pub display: DisplayConfig,
    /// Orbit paths sampled so far.
    pub paths: PathCache,
    selected: Option<String>,
}

impl SimulationContext {
    /// Creates a context whose clock starts at the current wall-clock time.
    pub fn new(config: &EngineConfig) -> SimulationContext {
        Self::from_clock(SimulationClock::new(&config.clock), config)
    }

    /// Creates a context whose clock starts at a given instant.
    pub fn starting_at(instant: DateTime<Utc>, config: &EngineConfig) -> SimulationContext {
        Self::from_clock(SimulationClock::starting_at(instant, &config.clock), config)
    }

    fn from_clock(clock: SimulationClock, config: &EngineConfig) -> SimulationContext {
        SimulationContext {
            clock,
            display: config.display.clone(),
            paths: PathCache::new(),
            selected: None,
        }
    }

    /// Advances the clock. See [`SimulationClock::tick`].
    pub fn tick(&mut self, elapsed_real_seconds: f64) -> DateTime<Utc> {
        self.clock.tick(elapsed_real_seconds)
    }

    /// Gets the id of the selected body.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Selects a body by id.
    ///
    /// Selecting [`SUN_ID`] clears the selection. Returns `false` and
    /// leaves the selection unchanged if the system has no such body.
    pub fn select(&mut self, system: &SolarSystem, id: &str) -> bool {
        if id == SUN_ID {
            self.clear_selection();
            return true;
        }

        if system.get_body(id).is_none() {
            debug!(id, "ignoring selection of unknown body");
            return false;
        }

        self.selected = Some(id.to_string());
        true
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Selects the next major planet.
    pub fn select_next(&mut self, system: &SolarSystem) {
        self.selected = system
            .next_planet_id(self.selected())
            .map(str::to_string);
    }

    /// Selects the previous major planet.
    pub fn select_prev(&mut self, system: &SolarSystem) {
        self.selected = system
            .prev_planet_id(self.selected())
            .map(str::to_string);
    }

    /// Gets the orbital summary of the selected body at the clock's current
    /// instant.
    pub fn selected_info(&self, system: &SolarSystem) -> Option<OrbitalInfo> {
        let body = system.get_body(self.selected()?)?;
        Some(OrbitalInfo::at_instant(body.orbit(), self.clock.current()))
    }

    /// Gets the orbit path of a body at the configured resolution, sampling
    /// it on first use.
    ///
    /// Comets use [`comet_orbit_segments`][DisplayConfig::comet_orbit_segments]
    /// and everything else [`orbit_segments`][DisplayConfig::orbit_segments].
    /// Points beyond the distance cap are dropped.
    pub fn orbit_path(&mut self, body: &CelestialBody) -> &[DVec3] {
        let segments = match body {
            CelestialBody::Planet(_) => self.display.orbit_segments,
            CelestialBody::Comet(_) => self.display.comet_orbit_segments,
        };

        self.paths.get_or_sample(
            body.id(),
            body.orbit(),
            segments,
            Some(self.display.distance_cap),
        )
    }

    /// Checks whether a body is close enough to the Sun to be drawn at the
    /// clock's current instant.
    pub fn is_visible(&self, body: &CelestialBody) -> bool {
        body.is_within_display_range(self.clock.current(), self.display.distance_cap)
    }
}
