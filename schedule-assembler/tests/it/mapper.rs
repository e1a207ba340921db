use puget_core::TripType;
use schedule_assembler::map_sailing;
use wsf_rs::{SailingTime, TerminalCombo};

use crate::helper::{lookup, pacific, route, trip_date};

fn combo(times: Vec<SailingTime>) -> TerminalCombo {
    TerminalCombo {
        departing_terminal_name: "Mukilteo".to_owned(),
        arriving_terminal_name: "Clinton".to_owned(),
        sailing_notes: "Crossing time 15 minutes".to_owned(),
        annotations: vec!["Sunday only".to_owned(), "No vehicles".to_owned()],
        times,
    }
}

fn sailing(vessel_name: &str) -> SailingTime {
    SailingTime {
        vessel_name: vessel_name.to_owned(),
        departing_time: pacific(8, 0),
        arriving_time: None,
        annotation_indexes: vec![1],
    }
}

#[test]
fn resolves_names_and_annotations() {
    let combo = combo(vec![]);
    let trip = map_sailing(&sailing("Walla Walla"), &combo, &route(), trip_date(), &lookup())
        .unwrap();

    assert_eq!(trip.vessel_abbrev, "WAL");
    assert_eq!(trip.departing_terminal_abbrev, "MUK");
    assert_eq!(trip.arriving_terminal_abbrev, "CLI");
    assert_eq!(trip.key.as_str(), "WAL--2023-08-28--08:00--MUK-CLI");
    assert_eq!(trip.sailing_day.as_str(), "2023-08-28");
    assert_eq!(trip.sailing_notes, "Crossing time 15 minutes");
    assert_eq!(trip.annotations, vec!["No vehicles".to_owned()]);
    assert_eq!(trip.trip_type, TripType::Direct);
    assert_eq!(trip.est_arrive_next, None);
}

#[test]
fn unresolvable_vessel_drops_the_sailing() {
    let combo = combo(vec![]);
    assert!(
        map_sailing(&sailing("Nonexistent"), &combo, &route(), trip_date(), &lookup()).is_none()
    );
}

#[test]
fn unresolvable_terminal_drops_the_sailing() {
    let mut combo = combo(vec![]);
    combo.arriving_terminal_name = "Atlantis".to_owned();
    assert!(
        map_sailing(&sailing("Walla Walla"), &combo, &route(), trip_date(), &lookup()).is_none()
    );
}

#[test]
fn out_of_range_annotation_indexes_are_skipped() {
    let combo = combo(vec![]);
    let mut raw = sailing("Walla Walla");
    raw.annotation_indexes = vec![0, 7];

    let trip = map_sailing(&raw, &combo, &route(), trip_date(), &lookup()).unwrap();
    assert_eq!(trip.annotations, vec!["Sunday only".to_owned()]);
}
