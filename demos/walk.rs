//! Simulated walk to the target
//!
//! Feeds a short GPS track and a slowly turning heading into a guidance
//! session and prints what a renderer would draw. Set `RUST_LOG=debug` (or
//! `trace`) to watch the engine's own logging.
//!
//! Run with: `cargo run --example walk`

use ar_compass::{
    CompassSettings, DistanceUnit, GeoPoint, GuidanceSession, HeadingSample, Transition,
    render::arrow_y_rotation,
};
use nalgebra::Vector3;
use std::error::Error;
use tracing_subscriber::EnvFilter;

const STEPS: usize = 20;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = CompassSettings {
        display_unit: DistanceUnit::Feet,
        ..Default::default()
    };
    let mut session = GuidanceSession::with_settings(settings)?;

    let start = GeoPoint::new(28.3368, -81.4637);
    let target = settings.target;

    for step in 0..=STEPS {
        let progress = step as f64 / STEPS as f64 * 1.2;
        let position = GeoPoint::new(
            start.latitude_deg() + (target.latitude_deg() - start.latitude_deg()) * progress,
            start.longitude_deg() + (target.longitude_deg() - start.longitude_deg()) * progress,
        );

        // Orientation events usually arrive more often than GPS fixes
        let alpha = 20.0 + step as f64 * 3.0;
        session.update_heading(HeadingSample::from_orientation_alpha(alpha));
        let update = session.update_position(position);

        let pointed = arrow_y_rotation(update.state.arrow_rotation_deg) * -Vector3::z();
        println!(
            "{:>2}: {:>6} bearing {:6.1}° arrow {:7.1}° (3D x={:+.2} z={:+.2}){}",
            step,
            update.display.to_string(),
            update.state.bearing_deg,
            update.rotation_for(session.settings()),
            pointed.x,
            pointed.z,
            if update.state.arrived { "  [you are here]" } else { "" }
        );

        match update.transition {
            Transition::Arrived => println!("    *buzz* arrived"),
            Transition::Departed => println!("    resuming guidance"),
            Transition::None => {}
        }
    }

    Ok(())
}
