//! Distance formatting at the display boundary
//!
//! All comparisons against the arrival threshold happen in meters. Feet only
//! appear here, when a distance is turned into something a person reads.

use core::fmt;

use nalgebra::ComplexField;
use serde::{Deserialize, Serialize};

use crate::math::FEET_PER_METER;

/// Convert meters to feet for display
///
/// # Example
/// ```
/// use ar_compass::display::meters_to_feet;
///
/// assert!((meters_to_feet(10.0) - 32.8084).abs() < 1e-9);
/// ```
pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}

/// Unit a distance is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    #[default]
    Meters,
    Feet,
}

impl DistanceUnit {
    /// Short suffix used when printing
    pub fn suffix(self) -> &'static str {
        match self {
            DistanceUnit::Meters => "m",
            DistanceUnit::Feet => "ft",
        }
    }
}

/// A distance paired with the unit it should be shown in
///
/// Formats as a whole number followed by the unit suffix, rounding half away
/// from zero.
///
/// # Example
/// ```
/// use ar_compass::{DisplayDistance, DistanceUnit};
///
/// let distance = DisplayDistance::new(38.68, DistanceUnit::Meters);
/// assert_eq!(format!("{}", distance), "39 m");
///
/// let distance = DisplayDistance::new(38.68, DistanceUnit::Feet);
/// assert_eq!(format!("{}", distance), "127 ft");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayDistance {
    meters: f64,
    unit: DistanceUnit,
}

impl DisplayDistance {
    pub fn new(meters: f64, unit: DistanceUnit) -> Self {
        Self { meters, unit }
    }

    /// Underlying distance in meters
    pub fn meters(&self) -> f64 {
        self.meters
    }

    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// Distance converted into the display unit
    pub fn value(&self) -> f64 {
        match self.unit {
            DistanceUnit::Meters => self.meters,
            DistanceUnit::Feet => meters_to_feet(self.meters),
        }
    }

    /// Distance converted into the display unit and rounded to a whole number
    pub fn rounded(&self) -> f64 {
        self.value().round()
    }
}

impl fmt::Display for DisplayDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} {}", self.rounded(), self.unit.suffix())
    }
}
