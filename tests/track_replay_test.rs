use ar_compass::{
    CompassSettings, DistanceUnit, GeoPoint, GuidanceSession, GuidanceUpdate, HeadingSample,
    HeadingSource, Transition, compute_bearing, compute_distance,
};
use serde::Deserialize;
use std::error::Error;

#[derive(Debug, Deserialize)]
struct TrackRow {
    #[allow(dead_code)]
    time_s: f64,
    latitude_deg: f64,
    longitude_deg: f64,
    heading_deg: Option<f64>,
    heading_source: Option<HeadingSource>,
}

const THRESHOLD_METERS: f64 = 20.0;

fn load_track() -> Result<Vec<TrackRow>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_path("testdata/walk_to_target.csv")?;
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: TrackRow = result?;
        rows.push(row);
    }
    Ok(rows)
}

/// Replays a walk into the default target and back out, feeding heading
/// and position callbacks in the order a browser would deliver them
fn replay(
    session: &mut GuidanceSession,
    rows: &[TrackRow],
) -> Vec<(usize, GuidanceUpdate)> {
    let mut updates = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        if let (Some(degrees), Some(source)) = (row.heading_deg, row.heading_source) {
            if let Some(update) = session.update_heading(HeadingSample::new(degrees, source)) {
                updates.push((index, update));
            }
        }

        let position = GeoPoint::try_new(row.latitude_deg, row.longitude_deg)
            .expect("track coordinates are valid");
        updates.push((index, session.update_position(position)));
    }

    updates
}

#[test]
fn test_track_arrival_edges() -> Result<(), Box<dyn Error>> {
    let rows = load_track()?;
    assert_eq!(rows.len(), 24);

    let mut session = GuidanceSession::new();
    let updates = replay(&mut session, &rows);

    let edges: Vec<(usize, Transition)> = updates
        .iter()
        .filter(|(_, update)| update.transition.is_edge())
        .map(|(index, update)| (*index, update.transition))
        .collect();

    // One cue on the way in, one "resume guidance" on the way out
    assert_eq!(edges, vec![(10, Transition::Arrived), (15, Transition::Departed)]);
    assert!(!session.is_arrived());

    Ok(())
}

#[test]
fn test_track_state_consistency() -> Result<(), Box<dyn Error>> {
    let rows = load_track()?;
    let settings = CompassSettings::default();
    let mut session = GuidanceSession::with_settings(settings)?;

    let mut previous_arrived = false;
    for (index, update) in replay(&mut session, &rows) {
        let state = update.state;
        assert!(state.distance_meters >= 0.0);
        assert!((0.0..360.0).contains(&state.bearing_deg));

        // Arrival level follows the hysteresis operators
        if previous_arrived {
            assert_eq!(state.arrived, state.distance_meters <= THRESHOLD_METERS, "row {}", index);
        } else {
            assert_eq!(state.arrived, state.distance_meters < THRESHOLD_METERS, "row {}", index);
        }
        previous_arrived = state.arrived;

        // Rotation is bearing minus the latest heading, if one was seen
        let latest_heading = rows[..=index]
            .iter()
            .rev()
            .find_map(|row| row.heading_deg);
        let expected = match latest_heading {
            Some(heading) => state.bearing_deg - heading,
            None => state.bearing_deg,
        };
        assert_eq!(state.arrow_rotation_deg, expected, "row {}", index);

        assert_eq!(update.display.unit(), DistanceUnit::Meters);
        assert_eq!(update.display.meters(), state.distance_meters);
    }

    Ok(())
}

#[test]
fn test_track_matches_direct_computation() -> Result<(), Box<dyn Error>> {
    let rows = load_track()?;
    let target = CompassSettings::default().target;
    let mut session = GuidanceSession::new();

    for row in &rows {
        let position = GeoPoint::new(row.latitude_deg, row.longitude_deg);
        let update = session.update_position(position);
        assert_eq!(update.state.distance_meters, compute_distance(position, target));
        assert_eq!(update.state.bearing_deg, compute_bearing(position, target));
    }

    // The walk passes straight over the target
    let closest = rows
        .iter()
        .map(|row| compute_distance(GeoPoint::new(row.latitude_deg, row.longitude_deg), target))
        .fold(f64::INFINITY, f64::min);
    assert!(closest < 1e-6, "closest approach {}", closest);

    Ok(())
}
