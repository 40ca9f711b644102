//! Core types and configuration for the direction engine

use serde::{Deserialize, Serialize};

use crate::display::DistanceUnit;
use crate::error::SettingsError;

/// A geographic position in decimal degrees (WGS84 latitude/longitude)
///
/// Positions are immutable once constructed. A new GPS fix replaces the
/// previous position wholesale.
///
/// # Example
/// ```
/// use ar_compass::GeoPoint;
///
/// const TARGET: GeoPoint = GeoPoint::new(28.3375, -81.4631);
/// let fix = GeoPoint::try_new(28.3372, -81.4633).unwrap();
/// assert!(fix.latitude_deg() < TARGET.latitude_deg());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl GeoPoint {
    /// Create a point without validation
    ///
    /// Intended for compile-time constants and for fixes already checked by
    /// the position source.
    pub const fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Create a point, rejecting non-finite or out-of-range coordinates
    pub fn try_new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, SettingsError> {
        let point = Self::new(latitude_deg, longitude_deg);
        point.validate()?;
        Ok(point)
    }

    /// Check that both coordinates are finite and inside their ranges
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(SettingsError::InvalidLatitude(self.latitude_deg));
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(SettingsError::InvalidLongitude(self.longitude_deg));
        }
        Ok(())
    }

    /// Latitude in degrees, positive north
    pub const fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Longitude in degrees, positive east
    pub const fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }
}

/// Sign convention of the renderer that draws the arrow
///
/// The engine always reports `arrow_rotation_deg` clockwise-positive, the way
/// a 2D screen (CSS `rotate()`) turns an element. Renderers that rotate a
/// mesh about a right-handed Y-up axis (Three.js, A-Frame) turn
/// counter-clockwise for positive angles when viewed from above and must
/// receive the negated angle. Mixing the two silently mirrors the arrow.
///
/// # Example
/// ```
/// use ar_compass::RotationConvention;
///
/// assert_eq!(RotationConvention::Clockwise.apply(30.0), 30.0);
/// assert_eq!(RotationConvention::CounterClockwise.apply(30.0), -30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationConvention {
    /// Positive angles turn the arrow clockwise on screen (2D elements)
    #[default]
    Clockwise,
    /// Positive angles turn the arrow counter-clockwise seen from above
    /// (3D meshes rotated about +Y)
    CounterClockwise,
}

impl RotationConvention {
    /// Map a clockwise-positive rotation in degrees into this convention
    pub fn apply(self, clockwise_deg: f64) -> f64 {
        match self {
            RotationConvention::Clockwise => clockwise_deg,
            RotationConvention::CounterClockwise => -clockwise_deg,
        }
    }
}

/// Direction engine settings
///
/// Read once when a [`GuidanceSession`](crate::GuidanceSession) is built and
/// immutable for the life of that session. The threshold is always meters;
/// `display_unit` only affects [`DisplayDistance`](crate::DisplayDistance).
///
/// # Example
/// ```
/// use ar_compass::{CompassSettings, DistanceUnit, GeoPoint, RotationConvention};
///
/// let settings = CompassSettings {
///     target: GeoPoint::new(28.3372, -81.4633),
///     threshold_meters: 3.048,              // 10 ft
///     display_unit: DistanceUnit::Feet,
///     convention: RotationConvention::CounterClockwise,
/// };
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompassSettings {
    /// Fixed destination the arrow points at
    pub target: GeoPoint,
    /// Distance in meters under which the user has arrived
    ///
    /// Entry uses strict `<`, exit uses `>=`.
    pub threshold_meters: f64,
    /// Unit used when formatting the distance for display
    pub display_unit: DistanceUnit,
    /// Rotation sign convention of the consuming renderer
    pub convention: RotationConvention,
}

impl CompassSettings {
    /// Check the target coordinates and arrival threshold
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.target.validate()?;
        if !self.threshold_meters.is_finite() || self.threshold_meters <= 0.0 {
            return Err(SettingsError::InvalidThreshold(self.threshold_meters));
        }
        Ok(())
    }
}

impl Default for CompassSettings {
    fn default() -> Self {
        Self {
            target: GeoPoint::new(28.3375, -81.4631),
            threshold_meters: 20.0,
            display_unit: DistanceUnit::Meters,
            convention: RotationConvention::Clockwise,
        }
    }
}

/// Direction to the target derived from the latest samples
///
/// Recomputed from scratch on every update; only `arrived` carries memory
/// across recomputations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionState {
    /// Great-circle distance to the target in meters, always `>= 0`
    pub distance_meters: f64,
    /// Initial bearing to the target in degrees, `[0, 360)` clockwise from north
    pub bearing_deg: f64,
    /// Arrow rotation in degrees, clockwise-positive, not normalized
    pub arrow_rotation_deg: f64,
    /// Whether the user is within the arrival threshold (with hysteresis)
    pub arrived: bool,
}
