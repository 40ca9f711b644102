#![no_std]

//! AR Compass - direction engine for "point me at the target" apps
//!
//! Given the device's GPS position and, when available, its compass heading,
//! this library computes the great-circle distance and initial bearing to a
//! fixed target, fuses the bearing with the heading into one arrow rotation,
//! and tracks whether the user has arrived.
//!
//! It performs no I/O. Position and heading sources push samples in; a
//! renderer consumes the rotation, the arrival edge and a display-ready
//! distance.
//!
//! # Features
//!
//! - Haversine distance and forward-azimuth bearing on a spherical Earth
//! - Heading fusion with graceful fallback to absolute bearings
//! - Arrival detection with hysteresis and explicit transition edges
//! - Tilt-compensated heading from raw accelerometer/magnetometer vectors
//! - One documented rotation sign convention, mapped per renderer
//! - `#![no_std]` compatible
//!
//! # Quick Start
//!
//! ```rust
//! use ar_compass::{CompassSettings, GeoPoint, GuidanceSession, HeadingSample, HeadingSource, Transition};
//!
//! let settings = CompassSettings {
//!     target: GeoPoint::new(28.3375, -81.4631),
//!     threshold_meters: 20.0,
//!     ..Default::default()
//! };
//! let mut session = GuidanceSession::with_settings(settings).unwrap();
//!
//! // Position callback
//! let update = session.update_position(GeoPoint::new(28.3372, -81.4633));
//! assert!((update.state.distance_meters - 38.68).abs() < 0.01);
//!
//! // Orientation callback
//! let update = session
//!     .update_heading(HeadingSample::new(30.0, HeadingSource::Orientation))
//!     .unwrap();
//! assert!(update.state.arrow_rotation_deg.abs() < 1.0); // facing the target
//!
//! if update.transition == Transition::Arrived {
//!     // fire the one-shot vibration here
//! }
//! ```

pub mod arrival;
pub mod display;
mod error;
pub mod geodesy;
pub mod heading;
mod math;
pub mod render;
mod session;
mod types;

// Re-export all public types and functions
pub use arrival::{ArrivalState, Transition, evaluate_arrival};
pub use display::{DisplayDistance, DistanceUnit, meters_to_feet};
pub use error::SettingsError;
pub use geodesy::{compute_bearing, compute_distance};
pub use heading::{HeadingSample, HeadingSource, fuse_rotation};
pub use math::{
    DEG_TO_RAD, EARTH_RADIUS_METERS, FEET_PER_METER, RAD_TO_DEG, normalize_degrees, wrap_degrees,
};
pub use session::{GuidanceSession, GuidanceUpdate};
pub use types::*;
