#![cfg(test)]

use core::f64::consts::{FRAC_PI_2, TAU};

use chrono::{DateTime, Utc};
use glam::{DVec2, DVec3};

use crate::{
    body_presets, clock::TIME_SCALE_PRESETS, info, rotation_angle, sample_path, solve_kepler,
    solve_kepler_detailed, solvers::solve_kepler_capped, time, CelestialBody, ClockConfig,
    ClockState, ConfigError, ElementsError, EngineConfig, Orbit, OrbitTrait, OrbitalElements,
    OrbitalInfo, PathCache, SimulationClock, SimulationContext, SolarSystem, SystemError, GM_SUN,
};

const ORBIT_POLL_STEPS: usize = 1024;
const RANDOM_CASES: usize = 256;


use assertions::*;
use polling::*;
use seeders::*;

fn dvec3_to_bits(v: DVec3) -> (u64, u64, u64) {
    (v.x.to_bits(), v.y.to_bits(), v.z.to_bits())
}

fn unit_orbit() -> Orbit {
    Orbit::new_circular(1.0, 365.25)
}

/// An orbit whose period follows from its semi-major axis, so that the
/// vis-viva speed matches the actual motion.
fn keplerian_orbit(semi_major_axis: f64, eccentricity: f64) -> Orbit {
    let period = TAU * (semi_major_axis.powi(3) / GM_SUN).sqrt();

    Orbit::new(OrbitalElements::new(
        semi_major_axis,
        eccentricity,
        rand::random_range(0.0..180.0),
        rand::random_range(0.0..360.0),
        rand::random_range(0.0..360.0),
        rand::random_range(0.0..360.0),
        period,
    ))
}

// ---------------- Kepler solver ----------------

#[test]
fn kepler_solver_residual() {
    for _ in 0..RANDOM_CASES * 16 {
        let (mean_anomaly, eccentricity) = random_kepler_input();
        let solution = solve_kepler_detailed(mean_anomaly, eccentricity);

        assert!(
            solution.converged,
            "solver did not converge for M = {mean_anomaly}, e = {eccentricity}"
        );
        assert_kepler_residual(mean_anomaly, eccentricity, solution.eccentric_anomaly);
    }
}

#[test]
fn kepler_solver_edges() {
    let cases = [
        (0.0, 0.0),
        (0.0, 0.99),
        (TAU - 1e-12, 0.99),
        (1e-9, 0.99),
        (core::f64::consts::PI, 0.99),
        (FRAC_PI_2, 0.5),
    ];

    for (mean_anomaly, eccentricity) in cases {
        let eccentric_anomaly = solve_kepler(mean_anomaly, eccentricity);
        assert_kepler_residual(mean_anomaly, eccentricity, eccentric_anomaly);
    }
}

#[test]
fn kepler_solver_circular_is_identity() {
    for _ in 0..RANDOM_CASES {
        let mean_anomaly = rand::random_range(0.0..TAU);
        assert_eq!(solve_kepler(mean_anomaly, 0.0), mean_anomaly);
    }
}

#[test]
fn kepler_solver_low_eccentricity_converges_quickly() {
    for _ in 0..RANDOM_CASES {
        let mean_anomaly = rand::random_range(0.0..TAU);
        let solution = solve_kepler_detailed(mean_anomaly, rand::random_range(0.0..0.3));

        assert!(
            solution.iterations <= 8,
            "took {} iterations",
            solution.iterations
        );
    }
}

#[test]
fn kepler_solver_stops_once_newton_converges() {
    let (mean_anomaly, eccentricity) = (1.7443379049791965, 0.29);
    let solution = solve_kepler_detailed(mean_anomaly, eccentricity);

    assert!(solution.converged);
    assert!(
        solution.iterations <= 6,
        "took {} iterations",
        solution.iterations
    );
    assert_kepler_residual(mean_anomaly, eccentricity, solution.eccentric_anomaly);
}

#[test]
fn kepler_solver_returns_estimate_when_capped() {
    let solution = solve_kepler_capped(1.0, 0.9, 1);

    assert!(!solution.converged);
    assert_eq!(solution.iterations, 1);
    assert!(solution.eccentric_anomaly.is_finite());
    assert!((0.1..=1.9).contains(&solution.eccentric_anomaly));
}

#[test]
fn kepler_solver_near_parabolic_is_finite() {
    for mean_anomaly in [1e-12, 1e-9, TAU - 1e-12] {
        let eccentric_anomaly = solve_kepler(mean_anomaly, 0.999999);
        assert!(
            eccentric_anomaly.is_finite(),
            "non-finite estimate for M = {mean_anomaly}"
        );
    }
}

// ---------------- Positions ----------------

#[test]
fn unit_orbit_positions() {
    let orbit = unit_orbit();
    let quarter = orbit.get_orbital_period() / 4.0;

    let expected = [
        (0.0, DVec3::new(1.0, 0.0, 0.0)),
        (quarter, DVec3::new(0.0, 1.0, 0.0)),
        (2.0 * quarter, DVec3::new(-1.0, 0.0, 0.0)),
        (3.0 * quarter, DVec3::new(0.0, -1.0, 0.0)),
    ];

    for (days, position) in expected {
        assert_almost_eq_vec3(
            orbit.get_position_at_days(days),
            position,
            &format!("unit orbit at {days} days"),
        );
    }
}

#[test]
fn position_is_deterministic() {
    for _ in 0..RANDOM_CASES {
        let orbit = random_any();
        let days = random_days();

        assert_eq!(
            dvec3_to_bits(orbit.get_position_at_days(days)),
            dvec3_to_bits(orbit.get_position_at_days(days)),
        );
    }
}

#[test]
fn cached_and_uncached_orbits_agree() {
    for _ in 0..RANDOM_CASES {
        let orbit = random_any();
        let elements = orbit.get_elements().clone();
        let days = random_days();

        let cached = orbit.get_position_at_days(days);
        let uncached = elements.get_position_at_days(days);

        assert!(
            (cached - uncached).length() < 1e-12 * orbit.get_aphelion(),
            "{cached} vs {uncached}"
        );
    }
}

#[test]
fn position_is_periodic() {
    for _ in 0..RANDOM_CASES {
        let orbit = random_any();
        let days = random_days();

        let now = orbit.get_position_at_days(days);
        let one_period_later = orbit.get_position_at_days(days + orbit.get_orbital_period());

        let tolerance = 1e-6 * orbit.get_aphelion();
        assert!(
            (now - one_period_later).length() < tolerance,
            "{now} vs {one_period_later} for {:?}",
            orbit.get_elements()
        );
    }
}

#[test]
fn distance_stays_within_apsides() {
    for _ in 0..RANDOM_CASES / 4 {
        let orbit = random_any();

        for distance in poll_distances(&orbit, random_days()) {
            assert_within_apsides(&orbit, distance, "polled position");
        }
    }
}

#[test]
fn circular_orbits_keep_constant_distance() {
    for _ in 0..RANDOM_CASES / 4 {
        let orbit = random_circular();
        let radius = orbit.get_semi_major_axis();

        for position in poll_orbit(&orbit) {
            assert_almost_eq_within(
                position.length(),
                radius,
                1e-9 * radius,
                "circular orbit radius",
            );
        }
    }
}

#[test]
fn perihelion_at_epoch_when_mean_anomaly_is_zero() {
    let elements = OrbitalElements::new(2.0, 0.6, 0.0, 0.0, 0.0, 0.0, 1000.0);

    assert_almost_eq(
        elements.get_distance_at_instant(time::j2000()),
        elements.get_perihelion(),
        "distance at perihelion passage",
    );
}

#[test]
fn earth_distance_at_epoch() {
    let earth = body_presets::earth();
    let distance = earth.orbit().get_distance_at_instant(time::j2000());

    // Perihelion is in early January
    assert!(
        (0.9833 - 0.01..=1.017 + 0.01).contains(&distance),
        "Earth distance at J2000 was {distance} AU"
    );
    assert!(distance < 1.0);
}

#[test]
fn positions_before_the_epoch() {
    let orbit = body_presets::mars();
    let orbit = orbit.orbit();
    let period = orbit.get_orbital_period();

    // A full period back lands on the epoch position
    let at_epoch = orbit.get_position_at_days(0.0);
    let period_before = orbit.get_position_at_days(-period);

    assert!((at_epoch - period_before).length() < 1e-9);

    let mean = orbit.get_mean_anomaly_at_days(-0.25 * period);
    assert!((0.0..TAU).contains(&mean), "mean anomaly {mean} not normalized");
}

// ---------------- Frame transformation ----------------

#[test]
fn zero_angles_are_identity() {
    let orbit = OrbitalElements::new(1.0, 0.3, 0.0, 0.0, 0.0, 0.0, 365.0);

    for _ in 0..RANDOM_CASES {
        let vector = DVec2::new(
            rand::random_range(-10.0..10.0),
            rand::random_range(-10.0..10.0),
        );
        let transformed = orbit.transform_orbital_plane_vector(vector);

        assert_almost_eq_vec3(transformed, vector.extend(0.0), "identity transform");
    }
}

#[test]
fn transformation_preserves_length() {
    for _ in 0..RANDOM_CASES {
        let orbit = random_any();
        let vector = DVec2::new(
            rand::random_range(-10.0..10.0),
            rand::random_range(-10.0..10.0),
        );

        assert_almost_eq(
            orbit.transform_orbital_plane_vector(vector).length(),
            vector.length(),
            "transformed length",
        );
    }
}

#[test]
fn polar_orbit_reaches_the_ecliptic_pole() {
    let orbit = OrbitalElements::new(1.0, 0.0, 90.0, 0.0, 0.0, 0.0, 365.0);
    let position = orbit.get_position_at_true_anomaly(FRAC_PI_2);

    assert_almost_eq_vec3(position, DVec3::Z, "polar orbit at 90 degrees");
}

#[test]
fn ascending_node_lies_on_the_ecliptic() {
    for _ in 0..RANDOM_CASES {
        let orbit = random_elliptic();
        let arg_pe = orbit.get_elements().arg_perihelion.to_radians();

        // The ascending node is where the true anomaly cancels the argument
        // of perihelion
        let node = orbit.get_position_at_true_anomaly(-arg_pe);
        assert_almost_eq_within(node.z, 0.0, 1e-9 * orbit.get_aphelion(), "node height");
    }
}

// ---------------- Path sampling ----------------

#[test]
fn path_has_requested_resolution() {
    for _ in 0..RANDOM_CASES / 4 {
        let orbit = random_any();
        let path = sample_path(&orbit, 360, None);

        assert_eq!(path.len(), 361);

        for point in &path {
            assert_within_apsides(&orbit, point.length(), "path point");
        }

        assert!((path[0] - path[360]).length() < 1e-9 * orbit.get_aphelion());
    }
}

#[test]
fn path_starts_at_perihelion() {
    let orbit = random_elliptic();
    let path = sample_path(&orbit, 90, None);

    assert_almost_eq_within(
        path[0].length(),
        orbit.get_perihelion(),
        1e-9 * orbit.get_aphelion(),
        "first path point",
    );
}

#[test]
fn path_cap_drops_far_points() {
    let hale_bopp = body_presets::hale_bopp();
    let full = sample_path(hale_bopp.orbit(), 500, None);
    let capped = sample_path(hale_bopp.orbit(), 500, Some(50.0));

    assert_eq!(full.len(), 501);
    assert!(!capped.is_empty());
    assert!(capped.len() < full.len());

    for point in capped {
        assert!(point.length() <= 50.0);
    }
}

#[test]
fn path_cap_beyond_aphelion_changes_nothing() {
    let earth = body_presets::earth();

    assert_eq!(
        sample_path(earth.orbit(), 360, None),
        sample_path(earth.orbit(), 360, Some(50.0)),
    );
}

#[test]
fn path_with_zero_segments_is_empty() {
    assert!(sample_path(&unit_orbit(), 0, None).is_empty());
}

#[test]
fn path_cache_reuses_samples() {
    let mars = body_presets::mars();
    let mut cache = PathCache::new();

    let first = cache.get_or_sample(mars.id(), mars.orbit(), 360, Some(50.0)).to_vec();
    let second = cache.get_or_sample(mars.id(), mars.orbit(), 360, Some(50.0)).to_vec();

    assert_eq!(first, second);
    assert_eq!(cache.len(), 1);

    cache.get_or_sample(mars.id(), mars.orbit(), 90, Some(50.0));
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get(mars.id(), 90, Some(50.0)).map(<[DVec3]>::len), Some(91));
    assert!(cache.get(mars.id(), 90, None).is_none());

    cache.forget(mars.id());
    assert!(cache.is_empty());
}

// ---------------- Velocity ----------------

#[test]
fn near_circular_speed_matches_mean_speed() {
    for _ in 0..RANDOM_CASES {
        let orbit = keplerian_orbit(
            rand::random_range(0.3..50.0),
            rand::random_range(0.0..0.02),
        );
        let speed = orbit.get_velocity_at_days(random_days(), 0.001).length();
        let mean_speed = orbit.get_mean_orbital_speed();

        assert!(
            (speed - mean_speed).abs() < 0.05 * mean_speed,
            "speed {speed} vs mean speed {mean_speed}"
        );
    }
}

#[test]
fn velocity_matches_vis_viva() {
    for _ in 0..RANDOM_CASES {
        let orbit = keplerian_orbit(
            rand::random_range(0.3..50.0),
            rand::random_range(0.0..0.9),
        );
        let days = random_days();

        let speed = orbit.get_velocity_at_days(days, 0.001).length();
        let distance = orbit.get_position_at_days(days).length();
        let vis_viva = orbit.get_speed_at_distance(distance);

        assert!(
            (speed - vis_viva).abs() < 1e-3 * vis_viva,
            "central difference {speed} vs vis-viva {vis_viva}"
        );
    }
}

#[test]
fn state_vectors_match_separate_calls() {
    let jupiter = body_presets::jupiter();
    let orbit = jupiter.orbit();
    let instant = time::j2000();

    let state = orbit.get_state_vectors_at_instant(instant);

    assert_eq!(state.position, orbit.get_position_at_instant(instant));
    assert_eq!(state.velocity, orbit.get_velocity_at_instant(instant));
}

#[test]
#[should_panic(expected = "non-zero")]
fn zero_velocity_window_panics() {
    unit_orbit().get_velocity_at_days(0.0, 0.0);
}

// ---------------- Orbital info ----------------

#[test]
fn earth_orbital_info() {
    let earth = body_presets::earth();
    let info = OrbitalInfo::at_instant(earth.orbit(), time::j2000());

    assert_almost_eq_within(info.orbital_speed, 30.0, 0.5, "Earth speed");
    assert_almost_eq_within(info.light_travel_time, 8.2, 0.2, "Earth light time");
    assert!(info.perihelion < info.heliocentric_distance);
    assert!(info.heliocentric_distance < info.aphelion);
    assert_almost_eq(info.mean_anomaly, 357.529, "Earth mean anomaly");
}

#[test]
fn orbital_info_angles_are_normalized() {
    for _ in 0..RANDOM_CASES {
        let orbit = random_any();
        let instant = time::instant_from_days_since_j2000(random_days())
            .expect("instant in range");
        let info = OrbitalInfo::at_instant(&orbit, instant);

        assert!((0.0..360.0).contains(&info.mean_anomaly));
        assert!((0.0..360.0).contains(&info.true_anomaly));
        assert_within_apsides(&orbit, info.heliocentric_distance, "info distance");
    }
}

#[test]
fn distance_formatting() {
    assert_eq!(info::format_distance(0.005), "747989 km");
    assert_eq!(info::format_distance(0.3871), "0.3871 AU (57.91 million km)");
    assert_eq!(info::format_distance(30.07), "30.0700 AU (4498.4 million km)");
}

// ---------------- Rotation ----------------

#[test]
fn prograde_rotation_increases() {
    let instants = poll_instants(200, 1.0);

    for pair in instants.windows(2) {
        let before = rotation_angle(23.934, pair[0]);
        let after = rotation_angle(23.934, pair[1]);

        assert!(wrapped_angle_delta(before, after) > 0.0);
    }
}

#[test]
fn retrograde_rotation_decreases() {
    let instants = poll_instants(200, 1.0);

    for period in [-5832.5, -17.24, -153.3] {
        for pair in instants.windows(2) {
            let before = rotation_angle(period, pair[0]);
            let after = rotation_angle(period, pair[1]);

            assert!(
                wrapped_angle_delta(before, after) < 0.0,
                "period {period}: {before} -> {after}"
            );
        }
    }
}

#[test]
fn rotation_angle_is_wrapped() {
    for instant in poll_instants(500, 7.3) {
        for period in [23.934, -17.24, 0.5, -0.5, 1407.6] {
            let angle = rotation_angle(period, instant);
            assert!((0.0..TAU).contains(&angle), "angle {angle} out of range");
        }
    }
}

#[test]
fn zero_rotation_period_does_not_spin() {
    assert_eq!(rotation_angle(0.0, time::j2000()), 0.0);
    assert_eq!(rotation_angle(f64::NAN, time::j2000()), 0.0);
}

#[test]
fn comets_do_not_spin() {
    let halley = body_presets::halley();

    assert_eq!(halley.rotation_period(), None);
    assert_eq!(halley.rotation_angle_at(time::j2000()), 0.0);
}

// ---------------- Time ----------------

#[test]
fn julian_days() {
    assert_eq!(time::julian_day(DateTime::<Utc>::default()), 2_440_587.5);
    assert_eq!(time::julian_day(time::j2000()), 2_451_545.0);
}

#[test]
fn day_offsets() {
    let later = time::instant_from_days_since_j2000(1.5).expect("in range");

    assert_eq!(time::days_since_j2000(later), 1.5);
    assert_eq!(time::days_between(later, time::j2000()), -1.5);
    assert!(time::add_days(later, f64::NAN).is_none());
    assert!(time::add_days(later, 1e300).is_none());
}

// ---------------- Clock ----------------

fn j2000_clock() -> SimulationClock {
    SimulationClock::starting_at(time::j2000(), &ClockConfig::default())
}

#[test]
fn clock_ticks_forward() {
    let mut clock = j2000_clock();

    assert_eq!(clock.state(), ClockState::Running);
    assert_eq!(clock.time_scale(), 1.0);

    clock.tick(1.0);
    clock.tick(0.5);

    assert_eq!(time::days_since_j2000(clock.current()), 1.5);
}

#[test]
fn clock_rewinds_with_negative_scale() {
    let mut clock = j2000_clock();
    clock.set_time_scale(-7.0);

    let now = clock.tick(2.0);
    assert_eq!(time::days_since_j2000(now), -14.0);
}

#[test]
fn paused_clock_holds_still() {
    let mut clock = j2000_clock();

    clock.toggle();
    assert!(clock.is_paused());
    assert_eq!(clock.tick(100.0), time::j2000());

    // Scrubbing still works while paused
    let target = time::instant_from_days_since_j2000(-400.0).expect("in range");
    clock.set_current(target);
    assert_eq!(clock.tick(1.0), target);

    clock.toggle();
    assert_eq!(clock.state(), ClockState::Running);
    assert!(clock.tick(1.0) > target);
}

#[test]
fn clock_can_start_paused() {
    let config = ClockConfig {
        start_paused: true,
        ..ClockConfig::default()
    };
    let mut clock = SimulationClock::starting_at(time::j2000(), &config);

    assert!(clock.is_paused());
    clock.resume();
    assert!(!clock.is_paused());
    clock.pause();
    assert!(clock.is_paused());
}

#[test]
fn clock_jump_resets_scale() {
    let mut clock = j2000_clock();
    clock.set_time_scale(-365.0);
    clock.tick(3.0);

    let target = time::instant_from_days_since_j2000(42.0).expect("in range");
    clock.jump_to(target);

    assert_eq!(clock.current(), target);
    assert_eq!(clock.time_scale(), 1.0);
}

#[test]
fn clock_jump_to_now_uses_wall_clock() {
    let mut clock = j2000_clock();
    clock.set_time_scale(30.0);

    let before = Utc::now();
    clock.jump_to_now();

    assert!(clock.current() >= before);
    assert_eq!(clock.time_scale(), 1.0);
}

#[test]
fn clock_ignores_non_finite_scale() {
    let mut clock = j2000_clock();
    clock.set_time_scale(0.0007);
    clock.set_time_scale(f64::INFINITY);
    clock.set_time_scale(f64::NAN);

    assert_eq!(clock.time_scale(), 0.0007);
}

#[test]
fn clock_holds_at_the_end_of_time() {
    let mut clock = j2000_clock();
    clock.set_current(DateTime::<Utc>::MAX_UTC);

    assert_eq!(clock.tick(1.0), DateTime::<Utc>::MAX_UTC);
}

#[test]
fn clock_presets_step_through_in_order() {
    let mut clock = j2000_clock();
    clock.set_time_scale(TIME_SCALE_PRESETS[0]);

    for &preset in &TIME_SCALE_PRESETS[1..] {
        clock.faster();
        assert_eq!(clock.time_scale(), preset);
    }

    // Stays at the fastest preset
    clock.faster();
    assert_eq!(clock.time_scale(), 365.0);

    for &preset in TIME_SCALE_PRESETS.iter().rev().skip(1) {
        clock.slower();
        assert_eq!(clock.time_scale(), preset);
    }

    clock.slower();
    assert_eq!(clock.time_scale(), -365.0);
}

#[test]
fn clock_presets_from_off_preset_values() {
    let mut clock = j2000_clock();

    clock.set_time_scale(2.0);
    clock.slower();
    assert_eq!(clock.time_scale(), 1.0);

    clock.set_time_scale(2.0);
    clock.faster();
    assert_eq!(clock.time_scale(), 7.0);

    clock.set_time_scale(1000.0);
    clock.faster();
    assert_eq!(clock.time_scale(), 1000.0);
    clock.slower();
    assert_eq!(clock.time_scale(), 365.0);
}

// ---------------- Validation & config ----------------

#[test]
fn element_validation() {
    let valid = OrbitalElements::new(1.0, 0.5, 10.0, 20.0, 30.0, 40.0, 365.0);
    assert_eq!(valid.validate(), Ok(()));

    let cases = [
        (
            OrbitalElements { eccentricity: 1.0, ..valid.clone() },
            ElementsError::EccentricityOutOfRange(1.0),
        ),
        (
            OrbitalElements { eccentricity: -0.1, ..valid.clone() },
            ElementsError::EccentricityOutOfRange(-0.1),
        ),
        (
            OrbitalElements { orbital_period: 0.0, ..valid.clone() },
            ElementsError::NonPositivePeriod(0.0),
        ),
        (
            OrbitalElements { semi_major_axis: -2.0, ..valid.clone() },
            ElementsError::NonPositiveSemiMajorAxis(-2.0),
        ),
        (
            OrbitalElements { inclination: f64::NAN, ..valid.clone() },
            ElementsError::NonFinite("inclination"),
        ),
    ];

    for (elements, error) in cases {
        assert_eq!(elements.validate(), Err(error));
    }
}

#[test]
fn presets_are_valid() {
    for body in body_presets::all_bodies() {
        assert_eq!(body.elements().validate(), Ok(()), "{}", body.id());
    }
}

#[test]
fn default_config_is_valid() {
    let config = EngineConfig::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.display.distance_cap, 50.0);
    assert_eq!(config.display.orbit_segments, 360);
    assert_eq!(config.clock.default_time_scale, 1.0);
}

#[test]
fn config_rejects_non_positive_time_scale() {
    for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let config = EngineConfig {
            clock: ClockConfig {
                default_time_scale: scale,
                ..ClockConfig::default()
            },
            ..EngineConfig::default()
        };

        assert!(
            matches!(config.validate(), Err(ConfigError::InvalidTimeScale(_))),
            "accepted default time scale {scale}"
        );
    }
}

#[cfg(feature = "serde")]
#[test]
fn config_from_json() {
    assert_eq!(
        EngineConfig::from_json_str("{}").expect("empty config"),
        EngineConfig::default()
    );

    let config = EngineConfig::from_json_str(
        r#"{ "clock": { "default_time_scale": 7.0 }, "display": { "comet_orbit_segments": 720 } }"#,
    )
    .expect("valid config");
    assert_eq!(config.clock.default_time_scale, 7.0);
    assert_eq!(config.display.comet_orbit_segments, 720);

    let round_trip =
        EngineConfig::from_json_str(&config.to_json_string().expect("serializable"))
            .expect("round trip");
    assert_eq!(round_trip, config);

    assert!(matches!(
        EngineConfig::from_json_str(r#"{ "display": { "orbit_segments": 0 } }"#),
        Err(ConfigError::ZeroSegments("orbit_segments"))
    ));
    assert!(matches!(
        EngineConfig::from_json_str(r#"{ "display": { "distance_cap": -1.0 } }"#),
        Err(ConfigError::InvalidDistanceCap(_))
    ));
    assert!(matches!(
        EngineConfig::from_json_str(r#"{ "clock": { "default_time_scale": 0.0 } }"#),
        Err(ConfigError::InvalidTimeScale(_))
    ));
    assert!(matches!(
        EngineConfig::from_json_str(r#"{ "clock": { "default_time_scale": -1.0 } }"#),
        Err(ConfigError::InvalidTimeScale(_))
    ));

    let error = EngineConfig::from_json_str("not json").expect_err("not JSON");
    assert!(matches!(error, ConfigError::Parse(_)));
    assert!(std::error::Error::source(&error).is_some());
}

#[cfg(feature = "serde")]
#[test]
fn elements_deserialize_with_default_epoch() {
    let elements: OrbitalElements = serde_json::from_str(
        r#"{
            "semi_major_axis": 1.0,
            "eccentricity": 0.1,
            "inclination": 0.0,
            "long_asc_node": 0.0,
            "arg_perihelion": 0.0,
            "mean_anomaly_at_epoch": 0.0,
            "orbital_period": 365.25
        }"#,
    )
    .expect("valid elements");

    assert_eq!(elements.epoch, time::j2000());

    let orbit: Orbit = serde_json::from_str(&serde_json::to_string(&elements).expect("serialize"))
        .expect("deserialize as orbit");
    assert_eq!(orbit.get_elements(), &elements);
}

// ---------------- Solar system ----------------

#[test]
fn solar_system_contents() {
    let system = SolarSystem::solar();

    assert_eq!(system.len(), 14);
    assert_eq!(system.planets().count(), 9);
    assert_eq!(system.comets().count(), 5);
    assert_eq!(system.get_body_index("earth"), Some(2));
    assert_eq!(system.get_body("saturn").map(CelestialBody::name), Some("Saturn"));
    assert!(system
        .get_body("saturn")
        .and_then(CelestialBody::as_planet)
        .is_some_and(|saturn| saturn.has_rings()));
}

#[test]
fn solar_system_keeps_every_preset() {
    let presets = body_presets::all_bodies();
    let system = SolarSystem::solar();

    assert_eq!(system.len(), presets.len());

    for (body, preset) in system.get_bodies().iter().zip(&presets) {
        assert_eq!(body.id(), preset.id());
    }
}

#[test]
fn solar_system_rejects_bad_bodies() {
    let mut system = SolarSystem::new();
    assert_eq!(system.add_body(body_presets::earth()), Ok(0));

    assert_eq!(
        system.add_body(body_presets::earth()),
        Err(SystemError::DuplicateId("earth".to_string()))
    );

    let CelestialBody::Comet(mut broken) = body_presets::encke() else {
        unreachable!("Encke is a comet");
    };
    broken.orbit = Orbit::new(OrbitalElements {
        eccentricity: 1.2,
        ..broken.orbit.into_elements()
    });

    assert_eq!(
        system.add_body(broken.into()),
        Err(SystemError::InvalidElements {
            id: "encke".to_string(),
            source: ElementsError::EccentricityOutOfRange(1.2),
        })
    );

    let CelestialBody::Planet(mut sun) = body_presets::mercury() else {
        unreachable!("Mercury is a planet");
    };
    sun.id = "sun".to_string();
    assert_eq!(system.add_body(sun.into()), Err(SystemError::ReservedId));

    assert_eq!(system.len(), 1);
    assert!(system.remove_body("earth").is_some());
    assert!(system.is_empty());
}

#[test]
fn bulk_positions_match_single_evaluation() {
    let system = SolarSystem::solar();
    let instant = time::instant_from_days_since_j2000(9000.0).expect("in range");

    for ((id, position), body) in system.positions_at(instant).into_iter().zip(system.get_bodies()) {
        assert_eq!(id, body.id());
        assert_eq!(position, body.position_at(instant));
    }
}

#[test]
fn comet_visibility() {
    let system = SolarSystem::solar();
    let visible = system.bodies_within(time::j2000(), 50.0);

    assert!(visible.iter().any(|body| body.id() == "halley"));
    assert!(visible.iter().all(|body| body.id() != "hale-bopp"));
    assert_eq!(visible.iter().filter(|body| body.as_planet().is_some()).count(), 9);
}

#[test]
fn planet_selection_cycles() {
    let system = SolarSystem::solar();
    let mut context = SimulationContext::starting_at(time::j2000(), &EngineConfig::default());

    context.select_prev(&system);
    assert_eq!(context.selected(), Some("neptune"));

    context.select_next(&system);
    assert_eq!(context.selected(), Some("mercury"));

    let mut visited = vec![];
    for _ in 0..8 {
        visited.push(context.selected().map(str::to_string));
        context.select_next(&system);
    }
    assert_eq!(context.selected(), Some("mercury"));
    assert_eq!(visited.len(), 8);
    assert!(visited.iter().all(|id| id.as_deref() != Some("pluto")));

    // Dwarf planets and comets are selectable, but cycling leaves them
    assert!(context.select(&system, "pluto"));
    context.select_next(&system);
    assert_eq!(context.selected(), Some("mercury"));

    assert!(context.select(&system, "sun"));
    assert_eq!(context.selected(), None);

    assert!(!context.select(&system, "vulcan"));
    assert_eq!(context.selected(), None);
}

#[test]
fn context_paths_use_display_config() {
    let system = SolarSystem::solar();
    let mut context = SimulationContext::starting_at(time::j2000(), &EngineConfig::default());

    let earth = system.get_body("earth").expect("earth preset");
    let halley = system.get_body("halley").expect("halley preset");

    assert_eq!(context.orbit_path(earth).len(), 361);
    assert_eq!(context.orbit_path(halley).len(), 501);
    assert_eq!(context.paths.len(), 2);

    let first = context.orbit_path(earth).to_vec();
    assert_eq!(context.orbit_path(earth), first.as_slice());
    assert_eq!(context.paths.len(), 2);
}

#[test]
fn context_follows_the_clock() {
    let system = SolarSystem::solar();
    let mut context = SimulationContext::starting_at(time::j2000(), &EngineConfig::default());

    assert!(context.selected_info(&system).is_none());
    context.select(&system, "earth");

    let before = context.selected_info(&system).expect("earth selected");
    context.clock.set_time_scale(91.0);
    context.tick(1.0);
    let after = context.selected_info(&system).expect("earth selected");

    assert!(after.mean_anomaly != before.mean_anomaly);
    assert!(context.is_visible(system.get_body("earth").expect("earth preset")));
}
