//! Configuration errors for the direction engine

use thiserror::Error;

/// Reasons a [`CompassSettings`](crate::CompassSettings) or
/// [`GeoPoint`](crate::GeoPoint) is rejected
///
/// The engine operations themselves never fail; validation happens once,
/// when a session is built from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SettingsError {
    /// Latitude outside `[-90, 90]` or not finite
    #[error("latitude {0} is outside [-90, 90] degrees")]
    InvalidLatitude(f64),
    /// Longitude outside `[-180, 180]` or not finite
    #[error("longitude {0} is outside [-180, 180] degrees")]
    InvalidLongitude(f64),
    /// Arrival threshold not strictly positive or not finite
    #[error("arrival threshold {0} m must be a positive finite distance")]
    InvalidThreshold(f64),
}
