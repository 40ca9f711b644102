//! Device heading samples and bearing/heading fusion

use nalgebra::{ComplexField, Vector3};
use serde::{Deserialize, Serialize};

use crate::math::{atan2_degrees, normalize_degrees};

/// Sensor a heading sample came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingSource {
    /// Magnetometer-derived compass heading
    Compass,
    /// Orientation event (browser `deviceorientation` alpha or similar)
    Orientation,
    /// Placeholder from a source that has no heading; fusion ignores it
    #[default]
    None,
}

/// Direction the device is facing, in degrees clockwise from north
///
/// A missing sample (`Option::None`) means "unknown", never zero.
///
/// # Example
/// ```
/// use ar_compass::{HeadingSample, HeadingSource};
///
/// let heading = HeadingSample::new(90.0, HeadingSource::Compass);
/// assert!(heading.is_usable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadingSample {
    pub degrees_from_north: f64,
    pub source: HeadingSource,
}

impl HeadingSample {
    pub fn new(degrees_from_north: f64, source: HeadingSource) -> Self {
        Self {
            degrees_from_north,
            source,
        }
    }

    /// Wrap an orientation-event `alpha` angle
    ///
    /// Treats `alpha = 0` as facing north and normalizes to `[0, 360)`.
    /// Browsers only guarantee this when the event is absolute.
    pub fn from_orientation_alpha(alpha: f64) -> Self {
        Self::new(normalize_degrees(alpha), HeadingSource::Orientation)
    }

    /// Tilt-compensated compass heading of the device's forward axis
    ///
    /// Device frame: X to the right of the screen, Y towards the top of the
    /// screen, Z out of the screen. The heading is that of +Y projected on the
    /// horizontal plane, so it holds while the phone is held upright or flat.
    ///
    /// Horizontal references are built with cross products: the reaction to
    /// gravity gives "up", `magnetometer × up` gives east and `up × east`
    /// gives north.
    ///
    /// # Arguments
    /// * `accelerometer` - Accelerometer reading, pointing up when at rest
    /// * `magnetometer` - Calibrated magnetometer reading, any unit
    ///
    /// # Returns
    /// Heading relative to magnetic north in `[0, 360)`, or `None` when either
    /// vector is zero or the two are parallel (no horizontal field).
    ///
    /// # Example
    /// ```
    /// use nalgebra::Vector3;
    /// use ar_compass::HeadingSample;
    ///
    /// let up = Vector3::new(0.0, 0.0, 1.0);        // lying flat
    /// let field = Vector3::new(0.0, 0.5, -0.8);    // north is the top edge
    /// let heading = HeadingSample::from_field_vectors(up, field).unwrap();
    /// assert!(heading.degrees_from_north.abs() < 1e-9);
    /// ```
    pub fn from_field_vectors(
        accelerometer: Vector3<f64>,
        magnetometer: Vector3<f64>,
    ) -> Option<Self> {
        let up = safe_normalize(accelerometer)?;
        let east = safe_normalize(magnetometer.cross(&up))?;
        let north = up.cross(&east);

        let heading = atan2_degrees(east.y, north.y);
        Some(Self::new(normalize_degrees(heading), HeadingSource::Compass))
    }

    /// Whether the sample carries a heading fusion should use
    pub fn is_usable(&self) -> bool {
        self.source != HeadingSource::None && self.degrees_from_north.is_finite()
    }
}

/// Fuse the bearing to the target with the device heading
///
/// With a usable heading the arrow rotation is `bearing − heading`, i.e. the
/// target direction relative to where the device faces. Without one the arrow
/// points at the absolute bearing from north. The result is clockwise-positive
/// and not normalized.
///
/// # Example
/// ```
/// use ar_compass::{HeadingSample, HeadingSource, fuse_rotation};
///
/// let facing_east = HeadingSample::new(90.0, HeadingSource::Compass);
/// assert_eq!(fuse_rotation(30.0, Some(facing_east)), -60.0);
/// assert_eq!(fuse_rotation(30.0, None), 30.0);
/// ```
pub fn fuse_rotation(bearing_deg: f64, heading: Option<HeadingSample>) -> f64 {
    match heading {
        Some(sample) if sample.is_usable() => bearing_deg - sample.degrees_from_north,
        _ => bearing_deg,
    }
}

/// Normalize a vector, rejecting ones too small to carry a direction
fn safe_normalize(vector: Vector3<f64>) -> Option<Vector3<f64>> {
    let magnitude_squared = vector.magnitude_squared();

    if magnitude_squared <= f64::EPSILON * f64::EPSILON {
        return None;
    }

    Some(vector / magnitude_squared.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::wrap_degrees;

    const TOLERANCE: f64 = 1e-9;

    fn heading_of(accelerometer: Vector3<f64>, magnetometer: Vector3<f64>) -> f64 {
        HeadingSample::from_field_vectors(accelerometer, magnetometer)
            .map(|sample| sample.degrees_from_north)
            .unwrap_or(f64::NAN)
    }

    #[test]
    fn test_fuse_rotation_with_heading() {
        let heading = HeadingSample::new(45.0, HeadingSource::Orientation);
        assert_eq!(fuse_rotation(90.0, Some(heading)), 45.0);

        // Not normalized: the consumer applies modulo as needed
        let heading = HeadingSample::new(350.0, HeadingSource::Compass);
        assert_eq!(fuse_rotation(10.0, Some(heading)), -340.0);
    }

    #[test]
    fn test_fuse_rotation_without_heading() {
        assert_eq!(fuse_rotation(123.4, None), 123.4);

        let placeholder = HeadingSample::new(80.0, HeadingSource::None);
        assert_eq!(fuse_rotation(123.4, Some(placeholder)), 123.4);

        let broken = HeadingSample::new(f64::NAN, HeadingSource::Compass);
        assert_eq!(fuse_rotation(123.4, Some(broken)), 123.4);
    }

    #[test]
    fn test_orientation_alpha() {
        let sample = HeadingSample::from_orientation_alpha(-30.0);
        assert_eq!(sample.source, HeadingSource::Orientation);
        assert!((sample.degrees_from_north - 330.0).abs() < TOLERANCE);

        let sample = HeadingSample::from_orientation_alpha(360.0);
        assert_eq!(sample.degrees_from_north, 0.0);
    }

    #[test]
    fn test_field_vectors_flat_cardinal_directions() {
        let up = Vector3::new(0.0, 0.0, 1.0);

        // Top edge north: field points along +Y and downwards
        let north = heading_of(up, Vector3::new(0.0, 1.0, -0.5));
        assert!(north.abs() < TOLERANCE, "north heading {}", north);

        // Top edge east: north lies to the left (-X)
        let east = heading_of(up, Vector3::new(-1.0, 0.0, -0.5));
        assert!((east - 90.0).abs() < TOLERANCE, "east heading {}", east);

        // Top edge south: north lies behind (-Y)
        let south = heading_of(up, Vector3::new(0.0, -1.0, -0.5));
        assert!((south - 180.0).abs() < TOLERANCE, "south heading {}", south);

        // Top edge west: north lies to the right (+X)
        let west = heading_of(up, Vector3::new(1.0, 0.0, -0.5));
        assert!((west - 270.0).abs() < TOLERANCE, "west heading {}", west);
    }

    #[test]
    fn test_field_vectors_tilt_compensation() {
        // Flat, facing north
        let flat = heading_of(Vector3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 0.6, -0.8));

        // Pitched 30° top-up about X: both vectors rotate together
        let (s, c) = (30.0f64.to_radians().sin(), 30.0f64.to_radians().cos());
        let rotate = |v: Vector3<f64>| Vector3::new(v.x, c * v.y + s * v.z, -s * v.y + c * v.z);
        let tilted = heading_of(
            rotate(Vector3::new(0.0, 0.0, 1.0)),
            rotate(Vector3::new(0.0, 0.6, -0.8)),
        );

        assert!(wrap_degrees(flat).abs() < TOLERANCE);
        assert!(wrap_degrees(tilted).abs() < 1e-6, "tilted heading {}", tilted);
    }

    #[test]
    fn test_field_vectors_degenerate() {
        let up = Vector3::new(0.0, 0.0, 1.0);
        assert!(HeadingSample::from_field_vectors(Vector3::zeros(), up).is_none());
        assert!(HeadingSample::from_field_vectors(up, Vector3::zeros()).is_none());
        // Field parallel to gravity has no horizontal component
        assert!(HeadingSample::from_field_vectors(up, Vector3::new(0.0, 0.0, -2.0)).is_none());
    }

    #[test]
    fn test_field_vectors_range() {
        let up = Vector3::new(0.0, 0.0, 1.0);
        for step in 0..24 {
            let angle = (step as f64 * 15.0).to_radians();
            let field = Vector3::new(angle.sin(), angle.cos(), -0.7);
            let heading = heading_of(up, field);
            assert!(
                (0.0..360.0).contains(&heading),
                "heading {} out of range at step {}",
                heading,
                step
            );
        }
    }
}
