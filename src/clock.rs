//! The simulation clock.
//!
//! The clock owns the current simulated instant and the rate at which it
//! moves relative to real time. It is driven explicitly: the caller measures
//! real elapsed time between frames and passes it to [`SimulationClock::tick`].

use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{time, ClockConfig};

/// The time scales the clock steps through with
/// [`faster`][SimulationClock::faster] and
/// [`slower`][SimulationClock::slower], in simulated days per real second.
///
/// `0.0007` is roughly one simulated minute per real second.
pub const TIME_SCALE_PRESETS: [f64; 9] = [-365.0, -30.0, -7.0, -1.0, 0.0007, 1.0, 7.0, 30.0, 365.0];

/// How close a time scale must be to a preset to count as that preset.
const PRESET_MATCH_TOLERANCE: f64 = 0.001;

/// Whether the clock is advancing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClockState {
    /// [`tick`][SimulationClock::tick] advances the clock.
    Running,
    /// [`tick`][SimulationClock::tick] leaves the clock where it is.
    Paused,
}

/// A running/paused clock producing the instant at which bodies are
/// evaluated.
///
/// The time scale may be negative to run the simulation backwards, and any
/// finite value is accepted.
///
/// # Example
/// ```
/// use keplerian_orrery::{time, ClockConfig, SimulationClock};
///
/// let mut clock = SimulationClock::starting_at(time::j2000(), &ClockConfig::default());
/// clock.set_time_scale(30.0);
///
/// // Two real seconds at 30 days per second
/// let now = clock.tick(2.0);
/// assert_eq!(time::days_since_j2000(now), 60.0);
///
/// clock.pause();
/// assert_eq!(clock.tick(10.0), now);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationClock {
    current: DateTime<Utc>,
    time_scale: f64,
    state: ClockState,
    default_time_scale: f64,
}

impl SimulationClock {
    /// Creates a clock starting at the current wall-clock time.
    pub fn new(config: &ClockConfig) -> SimulationClock {
        Self::starting_at(Utc::now(), config)
    }

    /// Creates a clock starting at a given instant.
    pub fn starting_at(instant: DateTime<Utc>, config: &ClockConfig) -> SimulationClock {
        let state = if config.start_paused {
            ClockState::Paused
        } else {
            ClockState::Running
        };

        SimulationClock {
            current: instant,
            time_scale: config.default_time_scale,
            state,
            default_time_scale: config.default_time_scale,
        }
    }

    /// Gets the current simulated instant.
    pub fn current(&self) -> DateTime<Utc> {
        self.current
    }

    /// Gets the time scale, in simulated days per real second.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Gets whether the clock is running or paused.
    pub fn state(&self) -> ClockState {
        self.state
    }

    /// Checks whether the clock is paused.
    pub fn is_paused(&self) -> bool {
        self.state == ClockState::Paused
    }

    /// Flips between running and paused.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            ClockState::Running => ClockState::Paused,
            ClockState::Paused => ClockState::Running,
        };
        debug!(state = ?self.state, "clock toggled");
    }

    /// Stops the clock.
    pub fn pause(&mut self) {
        self.state = ClockState::Paused;
    }

    /// Starts the clock.
    pub fn resume(&mut self) {
        self.state = ClockState::Running;
    }

    /// Sets the time scale, in simulated days per real second.
    ///
    /// Negative values run the clock backwards. Non-finite values are
    /// ignored.
    pub fn set_time_scale(&mut self, time_scale: f64) {
        if !time_scale.is_finite() {
            warn!(time_scale, "ignoring non-finite time scale");
            return;
        }

        debug!(from = self.time_scale, to = time_scale, "time scale changed");
        self.time_scale = time_scale;
    }

    /// Moves the clock to an arbitrary instant.
    ///
    /// This works whether or not the clock is paused.
    pub fn set_current(&mut self, instant: DateTime<Utc>) {
        debug!(%instant, "clock scrubbed");
        self.current = instant;
    }

    /// Advances the clock by `elapsed_real_seconds` of real time and returns
    /// the new instant.
    ///
    /// While paused, the instant doesn't change. If the advance would leave
    /// the range of representable instants, the clock stays where it is.
    pub fn tick(&mut self, elapsed_real_seconds: f64) -> DateTime<Utc> {
        if self.is_paused() {
            return self.current;
        }

        let days = elapsed_real_seconds * self.time_scale;

        match time::add_days(self.current, days) {
            Some(next) => self.current = next,
            None => warn!(
                current = %self.current,
                days,
                "clock advance out of range, holding current instant"
            ),
        }

        self.current
    }

    /// Resets the clock to the wall-clock time and the default forward
    /// time scale.
    pub fn jump_to_now(&mut self) {
        self.jump_to(Utc::now());
    }

    /// Resets the clock to `instant` and the default forward time scale.
    ///
    /// This is [`jump_to_now`][Self::jump_to_now] with an explicit instant.
    pub fn jump_to(&mut self, instant: DateTime<Utc>) {
        self.current = instant;
        self.time_scale = self.default_time_scale;
        debug!(%instant, time_scale = self.time_scale, "clock jumped");
    }

    /// Steps the time scale up to the next entry of [`TIME_SCALE_PRESETS`].
    ///
    /// From a value between presets, this moves to the nearest preset above
    /// it. At the fastest preset, nothing changes.
    ///
    /// # Example
    /// ```
    /// use keplerian_orrery::{time, ClockConfig, SimulationClock};
    ///
    /// let mut clock = SimulationClock::starting_at(time::j2000(), &ClockConfig::default());
    ///
    /// clock.faster();
    /// assert_eq!(clock.time_scale(), 7.0);
    ///
    /// clock.set_time_scale(-3.0);
    /// clock.faster();
    /// assert_eq!(clock.time_scale(), -1.0);
    /// ```
    pub fn faster(&mut self) {
        let current = self.time_scale;

        let next = match preset_index(current) {
            Some(index) => TIME_SCALE_PRESETS.get(index + 1).copied(),
            None => TIME_SCALE_PRESETS.iter().copied().find(|&preset| preset > current),
        };

        if let Some(next) = next {
            self.set_time_scale(next);
        }
    }

    /// Steps the time scale down to the previous entry of
    /// [`TIME_SCALE_PRESETS`].
    ///
    /// From a value between presets, this moves to the nearest preset below
    /// it. At the slowest (most negative) preset, nothing changes.
    pub fn slower(&mut self) {
        let current = self.time_scale;

        let previous = match preset_index(current) {
            Some(index) => index.checked_sub(1).map(|i| TIME_SCALE_PRESETS[i]),
            None => TIME_SCALE_PRESETS
                .iter()
                .rev()
                .copied()
                .find(|&preset| preset < current),
        };

        if let Some(previous) = previous {
            self.set_time_scale(previous);
        }
    }
}

fn preset_index(time_scale: f64) -> Option<usize> {
    TIME_SCALE_PRESETS
        .iter()
        .position(|preset| (preset - time_scale).abs() < PRESET_MATCH_TOLERANCE)
}
