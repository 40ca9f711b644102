//! Angle helpers and physical constants for the direction engine

use nalgebra::RealField;

/// Mathematical constants
pub const DEG_TO_RAD: f64 = core::f64::consts::PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / core::f64::consts::PI;

/// Mean Earth radius in meters for the spherical model
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// International feet per meter
pub const FEET_PER_METER: f64 = 3.28084;

/// Normalize an angle in degrees to `[0, 360)`
///
/// Applies `(θ + 360) mod 360` after reducing θ, so inputs of any magnitude
/// land in range.
pub fn normalize_degrees(degrees: f64) -> f64 {
    (degrees % 360.0 + 360.0) % 360.0
}

/// Wrap an angle in degrees to `(-180, 180]`
pub fn wrap_degrees(degrees: f64) -> f64 {
    let normalized = normalize_degrees(degrees);
    if normalized > 180.0 {
        normalized - 360.0
    } else {
        normalized
    }
}

/// Four-quadrant arctangent returning degrees in `(-180, 180]`
pub fn atan2_degrees(y: f64, x: f64) -> f64 {
    y.atan2(x) * RAD_TO_DEG
}
