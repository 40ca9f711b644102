//! Great-circle distance and bearing on a spherical Earth

use nalgebra::{ComplexField, RealField};

use crate::math::{DEG_TO_RAD, EARTH_RADIUS_METERS, RAD_TO_DEG, normalize_degrees};
use crate::types::GeoPoint;

/// Great-circle distance between two points using the haversine formula
///
/// Models the Earth as a sphere of radius 6 371 000 m. Never fails and
/// returns exactly `0.0` for identical points.
///
/// # Arguments
/// * `current` - Position of the device
/// * `target` - Destination
///
/// # Returns
/// Distance in meters, always `>= 0`
///
/// # Example
/// ```
/// use ar_compass::{GeoPoint, geodesy::compute_distance};
///
/// let here = GeoPoint::new(28.3372, -81.4633);
/// let there = GeoPoint::new(28.3375, -81.4631);
/// let meters = compute_distance(here, there);
/// assert!((meters - 38.68).abs() < 0.01);
/// ```
pub fn compute_distance(current: GeoPoint, target: GeoPoint) -> f64 {
    let phi1 = current.latitude_deg() * DEG_TO_RAD;
    let phi2 = target.latitude_deg() * DEG_TO_RAD;
    let delta_phi = (target.latitude_deg() - current.latitude_deg()) * DEG_TO_RAD;
    let delta_lambda = (target.longitude_deg() - current.longitude_deg()) * DEG_TO_RAD;

    let sin_half_phi = (delta_phi * 0.5).sin();
    let sin_half_lambda = (delta_lambda * 0.5).sin();
    let a = sin_half_phi * sin_half_phi + phi1.cos() * phi2.cos() * sin_half_lambda * sin_half_lambda;

    // Rounding can push `a` a hair above 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Initial bearing (forward azimuth) from `current` towards `target`
///
/// Evaluates `atan2(sin Δλ · cos φ2, cos φ1 · sin φ2 − sin φ1 · cos φ2 · cos Δλ)`
/// and normalizes with `(θ + 360) mod 360`.
///
/// The direction between coincident points is undefined; the formula then
/// reduces to `atan2(0, 0)`, so such calls return `0.0` (north).
///
/// # Returns
/// Bearing in degrees clockwise from geographic north, in `[0, 360)`
///
/// # Example
/// ```
/// use ar_compass::{GeoPoint, geodesy::compute_bearing};
///
/// let origin = GeoPoint::new(0.0, 0.0);
/// let east = GeoPoint::new(0.0, 1.0);
/// assert!((compute_bearing(origin, east) - 90.0).abs() < 1e-9);
/// ```
pub fn compute_bearing(current: GeoPoint, target: GeoPoint) -> f64 {
    let phi1 = current.latitude_deg() * DEG_TO_RAD;
    let phi2 = target.latitude_deg() * DEG_TO_RAD;
    let delta_lambda = (target.longitude_deg() - current.longitude_deg()) * DEG_TO_RAD;

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    normalize_degrees(y.atan2(x) * RAD_TO_DEG)
}
