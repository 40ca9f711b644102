//! Renderer-facing forms of the arrow rotation
//!
//! The engine reports rotations clockwise-positive. These helpers turn that
//! value into what a 2D canvas or a Y-up 3D scene needs, so the sign flip
//! between the two lives in one place.

use nalgebra::{ComplexField, UnitQuaternion, Vector2, Vector3};

use crate::math::DEG_TO_RAD;

/// Orientation of a 3D arrow mesh for a clockwise-positive rotation
///
/// Assumes a right-handed, Y-up scene whose camera looks down -Z (Three.js,
/// A-Frame). Positive rotations about +Y are counter-clockwise seen from
/// above, so the angle is negated before building the quaternion.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use ar_compass::render::arrow_y_rotation;
///
/// // Target 90° to the right: forward (-Z) swings to +X
/// let pointed = arrow_y_rotation(90.0) * -Vector3::z();
/// assert!((pointed - Vector3::x()).norm() < 1e-12);
/// ```
pub fn arrow_y_rotation(clockwise_deg: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -clockwise_deg * DEG_TO_RAD)
}

/// Unit vector the arrow points along on screen
///
/// Screen axes: X to the right, Y up. Zero degrees points straight up and
/// positive angles turn clockwise.
pub fn arrow_screen_direction(clockwise_deg: f64) -> Vector2<f64> {
    let radians = clockwise_deg * DEG_TO_RAD;
    Vector2::new(radians.sin(), radians.cos())
}
