//! Runs the orrery for a few simulated frames and prints what a renderer
//! would draw.
//!
//! Set `RUST_LOG=keplerian_orrery=debug` to see the engine's log output.

use keplerian_orrery::{
    info::format_distance, time, EngineConfig, OrbitTrait, SimulationContext, SolarSystem,
};
use tracing_subscriber::EnvFilter;

const FRAME_SECONDS: f64 = 1.0 / 60.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = EngineConfig::default();
    let system = SolarSystem::solar();
    let mut context = SimulationContext::starting_at(time::j2000(), &config);

    println!("Bodies at {}:", context.clock.current().format("%Y-%m-%d %H:%M UTC"));

    for body in system.get_bodies() {
        let distance = body.orbit().get_distance_at_instant(context.clock.current());
        let path = context.orbit_path(body).len();

        println!(
            "  {:<16} {:<36} path: {path:>3} points{}",
            body.name(),
            format_distance(distance),
            if context.is_visible(body) { "" } else { " (out of range)" },
        );
    }

    // One real minute at a month per second
    context.clock.set_time_scale(30.0);
    context.select(&system, "earth");

    for frame in 0..3600 {
        context.tick(FRAME_SECONDS);

        if frame % 600 == 0 {
            if let Some(info) = context.selected_info(&system) {
                println!(
                    "{}  Earth: true anomaly {:6.2} deg, {}, {:.2} km/s",
                    context.clock.current().format("%Y-%m-%d"),
                    info.true_anomaly,
                    format_distance(info.heliocentric_distance),
                    info.orbital_speed,
                );
            }
        }
    }

    context.clock.slower();
    context.clock.slower();
    println!("Time scale is now {} days per second", context.clock.time_scale());

    for _ in 0..3 {
        context.select_next(&system);
    }
    if let Some(id) = context.selected() {
        println!("Selected {id}");
    }
}
