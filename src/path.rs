//! Orbit path sampling for line rendering.
//!
//! Paths are walked in true anomaly, not in time, so the points are evenly
//! spaced in angle around the Sun. Every point is computed exactly from its
//! true anomaly; nothing is interpolated.

use std::collections::HashMap;

use core::f64::consts::TAU;
use glam::DVec3;
use tracing::{debug, trace};

use crate::OrbitTrait;

/// Samples the full orbit as a polyline.
///
/// Walks the true anomaly from 0 to tau in `segments` equal steps and
/// returns the ecliptic position at each step. Without a cap (or when no
/// point exceeds it) the path has `segments + 1` points and the last point
/// closes the loop onto the first.
///
/// `distance_cap` is a presentation parameter, in AU: points farther from
/// the Sun than the cap are left out, so the path of a long-period comet
/// becomes one or more arcs near the Sun. The cap is not a property of the
/// orbit and must be passed explicitly.
///
/// Zero segments yield an empty path.
///
/// # Example
/// ```
/// use keplerian_orrery::{sample_path, OrbitalElements};
///
/// let orbit = OrbitalElements::circular(1.0, 365.25);
/// let path = sample_path(&orbit, 360, None);
///
/// assert_eq!(path.len(), 361);
/// assert!((path[0] - path[360]).length() < 1e-12);
/// ```
pub fn sample_path(orbit: &impl OrbitTrait, segments: usize, distance_cap: Option<f64>) -> Vec<DVec3> {
    if segments == 0 {
        return Vec::new();
    }

    let matrix = orbit.get_transformation_matrix();
    let step = TAU / segments as f64;

    let path: Vec<DVec3> = (0..=segments)
        .filter_map(|i| {
            let true_anomaly = i as f64 * step;
            let planar = orbit.get_orbital_plane_position_at_true_anomaly(true_anomaly);

            match distance_cap {
                Some(cap) if planar.length() > cap => None,
                _ => Some(matrix.dot_vec(planar)),
            }
        })
        .collect();

    trace!(
        segments,
        kept = path.len(),
        "sampled orbit path"
    );

    path
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct PathKey {
    body_id: String,
    segments: usize,
    // f64 isn't hashable; the bit pattern identifies the cap exactly
    distance_cap: Option<u64>,
}

/// A memo of sampled orbit paths, keyed by body id, segment count and
/// distance cap.
///
/// Elements never change after a body is built, so an entry stays valid
/// forever and is never invalidated.
///
/// # Example
/// ```
/// use keplerian_orrery::{Orbit, PathCache};
///
/// let orbit = Orbit::new_circular(1.0, 365.25);
/// let mut cache = PathCache::new();
///
/// let first = cache.get_or_sample("earth", &orbit, 90, Some(50.0)).len();
/// let second = cache.get_or_sample("earth", &orbit, 90, Some(50.0)).len();
///
/// assert_eq!(first, second);
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PathCache {
    entries: HashMap<PathKey, Vec<DVec3>>,
}

impl PathCache {
    /// Creates an empty cache.
    pub fn new() -> PathCache {
        PathCache::default()
    }

    /// Gets the cached path for this body and resolution, sampling it first
    /// if it isn't cached yet.
    ///
    /// The caller is responsible for passing the same orbit every time it
    /// uses a given `body_id`.
    pub fn get_or_sample(
        &mut self,
        body_id: &str,
        orbit: &impl OrbitTrait,
        segments: usize,
        distance_cap: Option<f64>,
    ) -> &[DVec3] {
        let key = PathKey {
            body_id: body_id.to_string(),
            segments,
            distance_cap: distance_cap.map(f64::to_bits),
        };

        self.entries.entry(key).or_insert_with(|| {
            debug!(body_id, segments, ?distance_cap, "orbit path cache miss");
            sample_path(orbit, segments, distance_cap)
        })
    }

    /// Gets a cached path without sampling.
    pub fn get(&self, body_id: &str, segments: usize, distance_cap: Option<f64>) -> Option<&[DVec3]> {
        let key = PathKey {
            body_id: body_id.to_string(),
            segments,
            distance_cap: distance_cap.map(f64::to_bits),
        };

        self.entries.get(&key).map(Vec::as_slice)
    }

    /// Gets the number of cached paths.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the cache holds no paths.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached path of one body, at any resolution.
    ///
    /// Call this when a body id is reused for a different orbit.
    pub fn forget(&mut self, body_id: &str) {
        self.entries.retain(|key, _| key.body_id != body_id);
    }

    /// Drops every cached path.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
