use puget_core::{ScheduledTrip, TripType};
use schedule_assembler::classify_day;

use crate::helper::pacific;

#[test]
fn lone_sailings_are_direct() {
    let trips = vec![
        ScheduledTrip::test_default("WAL", "MUK", "CLI", pacific(8, 0)),
        ScheduledTrip::test_default("WAL", "CLI", "MUK", pacific(8, 30)),
    ];

    let classified = classify_day(trips);

    assert!(classified.warnings.is_empty());
    assert!(
        classified
            .trips
            .iter()
            .all(|t| t.trip_type == TripType::Direct)
    );
}

#[test]
fn simultaneous_pair_splits_on_expected_next_terminal() {
    // Two options depart MUK at 08:00: one straight to CLI, one indirect via
    // KIN. The vessel's next sailing leaves from CLI, so the CLI leg is the
    // true direct one.
    let trips = vec![
        ScheduledTrip::test_default("WAL", "MUK", "CLI", pacific(8, 0)),
        ScheduledTrip::test_default("WAL", "MUK", "KIN", pacific(8, 0)),
        ScheduledTrip::test_default("WAL", "CLI", "MUK", pacific(8, 30)),
    ];

    let classified = classify_day(trips);
    assert!(classified.warnings.is_empty());

    let trip_type = |arriving: &str| {
        classified
            .trips
            .iter()
            .find(|t| t.departing_terminal_abbrev == "MUK" && t.arriving_terminal_abbrev == arriving)
            .unwrap()
            .trip_type
    };
    assert_eq!(trip_type("CLI"), TripType::Direct);
    assert_eq!(trip_type("KIN"), TripType::Indirect);
}

#[test]
fn group_without_later_trip_defaults_to_direct_with_warning() {
    let trips = vec![
        ScheduledTrip::test_default("WAL", "MUK", "CLI", pacific(8, 0)),
        ScheduledTrip::test_default("WAL", "MUK", "KIN", pacific(8, 0)),
    ];

    let classified = classify_day(trips);

    assert!(
        classified
            .trips
            .iter()
            .all(|t| t.trip_type == TripType::Direct)
    );
    assert_eq!(classified.warnings.len(), 1);

    let warning = &classified.warnings[0];
    assert_eq!(warning.vessel_abbrev, "WAL");
    assert_eq!(warning.departing_terminal_abbrev, "MUK");
    assert_eq!(warning.group_size, 2);
    assert_eq!(warning.expected_next_terminal, None);
}

#[test]
fn group_without_matching_member_defaults_to_direct_with_warning() {
    // The next sailing departs KIN but neither option arrives there.
    let trips = vec![
        ScheduledTrip::test_default("WAL", "MUK", "CLI", pacific(8, 0)),
        ScheduledTrip::test_default("WAL", "MUK", "MUK", pacific(8, 0)),
        ScheduledTrip::test_default("WAL", "KIN", "MUK", pacific(9, 0)),
    ];

    let classified = classify_day(trips);

    // Malformed groups must never silently classify members as indirect
    // against the wrong target.
    assert_eq!(
        classified
            .trips
            .iter()
            .filter(|t| t.trip_type == TripType::Indirect)
            .count(),
        0
    );
    assert_eq!(classified.warnings.len(), 1);
    assert_eq!(
        classified.warnings[0].expected_next_terminal.as_deref(),
        Some("KIN")
    );
}

#[test]
fn vessels_are_classified_independently() {
    let trips = vec![
        ScheduledTrip::test_default("WAL", "MUK", "CLI", pacific(8, 0)),
        ScheduledTrip::test_default("WAL", "MUK", "KIN", pacific(8, 0)),
        ScheduledTrip::test_default("WAL", "CLI", "MUK", pacific(8, 30)),
        // Another vessel with the same times must not join WAL's group.
        ScheduledTrip::test_default("TOK", "MUK", "KIN", pacific(8, 0)),
    ];

    let classified = classify_day(trips);
    assert!(classified.warnings.is_empty());

    let tok = classified
        .trips
        .iter()
        .find(|t| t.vessel_abbrev == "TOK")
        .unwrap();
    assert_eq!(tok.trip_type, TripType::Direct);
}
