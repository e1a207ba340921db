use processors::Error;
use puget_core::{test_location, PredictionSlot};
use wsf_rs::VesselLocation;

use crate::helper::{app, pacific};

fn at_sea(vessel: &str, minute_offset: i64) -> VesselLocation {
    let scheduled = pacific(8, 0);
    let mut location = test_location(
        vessel,
        Some("MUK"),
        Some("CLI"),
        scheduled + chrono::Duration::minutes(minute_offset),
    );
    location.scheduled_departure = Some(scheduled);
    location.at_dock = false;
    location.left_dock = Some(scheduled + chrono::Duration::minutes(1));
    location
}

#[tokio::test]
async fn dock_arrival_fires_at_dock_predictions_once() {
    let app = app();

    // Tick 1: first appearance, underway.
    app.feed.push_snapshot(vec![at_sea("WAL", 2)]);
    let outcome = app.processor.run_single().await.unwrap();
    assert!(outcome.locations_success && outcome.trips_success);
    assert_eq!(app.predictor.call_count(), PredictionSlot::AT_SEA.len());

    // Tick 2: the vessel docks.
    let mut docked = at_sea("WAL", 14);
    docked.at_dock = true;
    app.feed.push_snapshot(vec![docked.clone()]);
    app.processor.run_single().await.unwrap();

    let expected = PredictionSlot::AT_SEA.len() + PredictionSlot::AT_DOCK.len();
    assert_eq!(app.predictor.call_count(), expected);
    let at_dock_calls: Vec<_> = app
        .predictor
        .calls()
        .into_iter()
        .skip(PredictionSlot::AT_SEA.len())
        .collect();
    for (slot, vessel) in at_dock_calls {
        assert!(PredictionSlot::AT_DOCK.contains(&slot));
        assert_eq!(vessel, "WAL");
    }

    let trip = &app.store.vessel_trips()[0];
    assert!(trip.at_dock);
    assert_eq!(trip.trip_end, Some(docked.timestamp));
    assert!(trip.at_dock_arrive_next.is_some());

    // Tick 3: same situation, newer ping. No event: the position still
    // updates but no prediction is recomputed.
    let mut still_docked = docked.clone();
    still_docked.timestamp = still_docked.timestamp + chrono::Duration::minutes(1);
    app.feed.push_snapshot(vec![still_docked.clone()]);
    app.processor.run_single().await.unwrap();

    assert_eq!(app.predictor.call_count(), expected);
    assert_eq!(app.store.refreshes().len(), 1);
    assert_eq!(app.store.vessel_trips()[0].timestamp, still_docked.timestamp);
}

#[tokio::test]
async fn trip_boundary_rolls_previous_trip_fields_and_clears_predictions() {
    let app = app();

    let first = at_sea("WAL", 2);
    app.feed.push_snapshot(vec![first.clone()]);
    app.processor.run_single().await.unwrap();

    // New trip: departing terminal flips to CLI with a later scheduled
    // departure.
    let mut next_trip = test_location(
        "WAL",
        Some("CLI"),
        Some("MUK"),
        pacific(8, 20),
    );
    next_trip.scheduled_departure = Some(pacific(8, 30));
    next_trip.at_dock = true;
    next_trip.left_dock = None;
    app.feed.push_snapshot(vec![next_trip]);
    app.processor.run_single().await.unwrap();

    let trip = &app.store.vessel_trips()[0];
    assert_eq!(trip.departing_terminal_abbrev.as_deref(), Some("CLI"));
    assert_eq!(trip.prev_scheduled_departure, first.scheduled_departure);
    assert_eq!(trip.prev_left_dock, first.left_dock);

    // A new trip identity never inherits the old trip's estimates; only the
    // at-dock set was recomputed.
    assert!(trip.at_sea_arrive_next.is_none());
    assert!(trip.at_sea_depart_next.is_none());
    assert!(trip.at_dock_depart_curr.is_some());
}

#[tokio::test]
async fn duplicate_reports_collapse_to_the_newest() {
    let app = app();

    let older = at_sea("WAL", 2);
    let mut newer = at_sea("WAL", 5);
    newer.latitude += 0.01;
    app.feed
        .push_snapshot(vec![newer.clone(), older.clone()]);
    app.processor.run_single().await.unwrap();

    let locations = app.store.locations();
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0], newer);
}

#[tokio::test]
async fn trip_failure_does_not_block_location_persistence() {
    let app = app();
    app.store.fail_trip_writes(true);

    app.feed.push_snapshot(vec![at_sea("WAL", 2)]);
    let outcome = app.processor.run_single().await.unwrap();

    assert!(outcome.locations_success);
    assert!(!outcome.trips_success);
    assert_eq!(outcome.errors.len(), 1);
    assert!(matches!(outcome.errors[0], Error::Trips { .. }));

    assert_eq!(app.store.locations().len(), 1);
    assert!(app.store.vessel_trips().is_empty());
}

#[tokio::test]
async fn location_failure_does_not_block_trip_orchestration() {
    let app = app();
    app.store.fail_location_writes(true);

    app.feed.push_snapshot(vec![at_sea("WAL", 2)]);
    let outcome = app.processor.run_single().await.unwrap();

    assert!(!outcome.locations_success);
    assert!(outcome.trips_success);
    assert_eq!(app.store.vessel_trips().len(), 1);
    assert!(app.store.locations().is_empty());
}

#[tokio::test]
async fn feed_failure_fails_the_whole_tick() {
    let app = app();
    app.feed.fail_next(true);

    let err = app.processor.run_single().await.unwrap_err();
    assert!(matches!(err, Error::Feed { .. }));
}

#[tokio::test]
async fn predictor_failure_leaves_slots_empty_but_advances_the_trip() {
    let app = app();
    app.predictor.fail(true);

    app.feed.push_snapshot(vec![at_sea("WAL", 2)]);
    let outcome = app.processor.run_single().await.unwrap();

    assert!(outcome.trips_success);
    let trip = &app.store.vessel_trips()[0];
    assert!(trip.at_sea_arrive_next.is_none());
    assert!(trip.at_sea_depart_next.is_none());
}

#[tokio::test]
async fn early_departures_are_flagged_not_fatal() {
    let app = app();

    let mut early = at_sea("WAL", 2);
    early.scheduled_departure = Some(pacific(8, 30));
    early.left_dock = Some(pacific(8, 5));
    app.feed.push_snapshot(vec![early]);

    let outcome = app.processor.run_single().await.unwrap();

    assert_eq!(outcome.anomalies.len(), 1);
    assert_eq!(outcome.anomalies[0].vessel_abbrev, "WAL");
    assert!(outcome.trips_success);
}
