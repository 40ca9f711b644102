//! Guidance session: the caller-owned state the direction engine runs on

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::arrival::{ArrivalState, Transition};
use crate::display::DisplayDistance;
use crate::error::SettingsError;
use crate::geodesy::{compute_bearing, compute_distance};
use crate::heading::{HeadingSample, fuse_rotation};
use crate::types::{CompassSettings, DirectionState, GeoPoint};

/// Everything a renderer needs after one recomputation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuidanceUpdate {
    /// Distance, bearing, arrow rotation and arrival level
    pub state: DirectionState,
    /// FAR/ARRIVED edge taken by this recomputation
    pub transition: Transition,
    /// Distance in the configured display unit
    pub display: DisplayDistance,
}

impl GuidanceUpdate {
    /// Arrow rotation mapped into the configured renderer convention
    pub fn rotation_for(&self, settings: &CompassSettings) -> f64 {
        settings.convention.apply(self.state.arrow_rotation_deg)
    }
}

/// Guidance session
///
/// Holds the latest position fix, the latest heading sample and the arrival
/// level between sensor callbacks. Position and heading sources push samples
/// into it; each accepted sample recomputes the direction and returns a
/// [`GuidanceUpdate`] for the renderer.
///
/// All mutation goes through `&mut self`. Hosts that deliver position and
/// orientation callbacks on different threads must wrap the session in a
/// single mutex so the snapshot and the arrival level change together.
///
/// # Example
/// ```
/// use ar_compass::{GeoPoint, GuidanceSession, HeadingSample, HeadingSource, Transition};
///
/// let mut session = GuidanceSession::new();
///
/// // No fix yet: heading alone produces nothing to draw
/// assert!(session.update_heading(HeadingSample::new(10.0, HeadingSource::Orientation)).is_none());
///
/// let update = session.update_position(GeoPoint::new(28.3372, -81.4633));
/// assert_eq!(update.transition, Transition::None);
/// assert!(!update.state.arrived);
/// println!("{} away, rotate arrow {:.0}°", update.display, update.state.arrow_rotation_deg);
/// ```
#[derive(Debug, Clone)]
pub struct GuidanceSession {
    settings: CompassSettings,
    position: Option<GeoPoint>,
    heading: Option<HeadingSample>,
    arrival: ArrivalState,
    last_state: Option<DirectionState>,
}

impl GuidanceSession {
    /// Create a session with default settings
    pub fn new() -> Self {
        Self::from_validated(CompassSettings::default())
    }

    /// Create a session with the given settings
    ///
    /// # Errors
    /// Returns [`SettingsError`] if the target or threshold is invalid.
    pub fn with_settings(settings: CompassSettings) -> Result<Self, SettingsError> {
        if let Err(error) = settings.validate() {
            warn!(%error, "rejecting compass settings");
            return Err(error);
        }
        Ok(Self::from_validated(settings))
    }

    fn from_validated(settings: CompassSettings) -> Self {
        debug!(
            target_lat = settings.target.latitude_deg(),
            target_lon = settings.target.longitude_deg(),
            threshold_m = settings.threshold_meters,
            "guidance session created"
        );
        Self {
            settings,
            position: None,
            heading: None,
            arrival: ArrivalState::Far,
            last_state: None,
        }
    }

    /// Replace the current position and recompute
    pub fn update_position(&mut self, position: GeoPoint) -> GuidanceUpdate {
        self.position = Some(position);
        self.compute(position)
    }

    /// Replace the current heading and recompute if a position is known
    ///
    /// Returns `None` until the first position fix arrives.
    pub fn update_heading(&mut self, heading: HeadingSample) -> Option<GuidanceUpdate> {
        let previous_source = self.heading.map(|sample| sample.source);
        if previous_source != Some(heading.source) {
            debug!(source = ?heading.source, "heading source changed");
        }

        self.heading = Some(heading);
        self.recompute()
    }

    /// Drop the heading and fall back to absolute bearings
    pub fn clear_heading(&mut self) -> Option<GuidanceUpdate> {
        if self.heading.take().is_some() {
            debug!("heading cleared, pointing at absolute bearing");
        }
        self.recompute()
    }

    /// Recompute from the stored samples, if a position is known
    pub fn recompute(&mut self) -> Option<GuidanceUpdate> {
        let position = self.position?;
        Some(self.compute(position))
    }

    /// Forget samples and return to FAR, keeping the settings
    pub fn reset(&mut self) {
        self.position = None;
        self.heading = None;
        self.arrival = ArrivalState::Far;
        self.last_state = None;
    }

    /// Most recent direction, if any has been computed
    pub fn state(&self) -> Option<DirectionState> {
        self.last_state
    }

    pub fn is_arrived(&self) -> bool {
        self.arrival.is_arrived()
    }

    pub fn position(&self) -> Option<GeoPoint> {
        self.position
    }

    pub fn heading(&self) -> Option<HeadingSample> {
        self.heading
    }

    pub fn settings(&self) -> &CompassSettings {
        &self.settings
    }

    fn compute(&mut self, position: GeoPoint) -> GuidanceUpdate {
        let target = self.settings.target;
        let distance_meters = compute_distance(position, target);
        let bearing_deg = compute_bearing(position, target);
        let arrow_rotation_deg = fuse_rotation(bearing_deg, self.heading);

        let transition = self.arrival.step(distance_meters, self.settings.threshold_meters);
        match transition {
            Transition::Arrived => info!(distance_m = distance_meters, "arrived at target"),
            Transition::Departed => info!(distance_m = distance_meters, "left target, resuming guidance"),
            Transition::None => {}
        }

        let state = DirectionState {
            distance_meters,
            bearing_deg,
            arrow_rotation_deg,
            arrived: self.arrival.is_arrived(),
        };
        trace!(
            distance_m = state.distance_meters,
            bearing = state.bearing_deg,
            rotation = state.arrow_rotation_deg,
            arrived = state.arrived,
            "direction updated"
        );
        self.last_state = Some(state);

        GuidanceUpdate {
            state,
            transition,
            display: DisplayDistance::new(distance_meters, self.settings.display_unit),
        }
    }
}

impl Default for GuidanceSession {
    fn default() -> Self {
        Self::new()
    }
}
