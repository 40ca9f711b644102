//! Arrival detection with hysteresis
//!
//! Two states, FAR and ARRIVED, starting FAR. Entry requires the distance to
//! drop strictly below the threshold; exit requires it to rise strictly above.
//! A fix exactly on the threshold keeps whichever state is current. There is
//! no terminal state.

use serde::{Deserialize, Serialize};

/// Evaluate the arrival level for one distance sample
///
/// * FAR → ARRIVED when `distance_meters < threshold_meters`
/// * ARRIVED → FAR when `distance_meters > threshold_meters`
/// * otherwise the previous level holds
///
/// # Example
/// ```
/// use ar_compass::evaluate_arrival;
///
/// let mut arrived = false;
/// let mut levels = [false; 4];
/// for (level, distance) in levels.iter_mut().zip([25.0, 19.0, 20.0, 21.0]) {
///     arrived = evaluate_arrival(distance, arrived, 20.0);
///     *level = arrived;
/// }
/// assert_eq!(levels, [false, true, true, false]);
/// ```
pub fn evaluate_arrival(distance_meters: f64, previous_arrived: bool, threshold_meters: f64) -> bool {
    if previous_arrived {
        distance_meters <= threshold_meters
    } else {
        distance_meters < threshold_meters
    }
}

/// Edge produced by one arrival evaluation
///
/// Callers gate one-shot effects on this: a haptic/audio cue on
/// [`Transition::Arrived`], a "resume guidance" change on
/// [`Transition::Departed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// Level unchanged
    #[default]
    None,
    /// FAR → ARRIVED
    Arrived,
    /// ARRIVED → FAR
    Departed,
}

impl Transition {
    pub fn is_edge(self) -> bool {
        self != Transition::None
    }
}

/// Arrival level carried between recomputations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrivalState {
    #[default]
    Far,
    Arrived,
}

impl ArrivalState {
    pub fn from_arrived(arrived: bool) -> Self {
        if arrived {
            ArrivalState::Arrived
        } else {
            ArrivalState::Far
        }
    }

    pub fn is_arrived(self) -> bool {
        self == ArrivalState::Arrived
    }

    /// Advance the state machine and report the edge taken, if any
    ///
    /// # Example
    /// ```
    /// use ar_compass::{ArrivalState, Transition};
    ///
    /// let mut state = ArrivalState::Far;
    /// assert_eq!(state.step(19.0, 20.0), Transition::Arrived);
    /// assert_eq!(state.step(20.0, 20.0), Transition::None);
    /// assert_eq!(state.step(20.5, 20.0), Transition::Departed);
    /// ```
    pub fn step(&mut self, distance_meters: f64, threshold_meters: f64) -> Transition {
        let was_arrived = self.is_arrived();
        let arrived = evaluate_arrival(distance_meters, was_arrived, threshold_meters);
        *self = Self::from_arrived(arrived);

        match (was_arrived, arrived) {
            (false, true) => Transition::Arrived,
            (true, false) => Transition::Departed,
            _ => Transition::None,
        }
    }
}
