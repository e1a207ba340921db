use puget_core::TripType;
use schedule_assembler::assemble_day;
use wsf_rs::{RouteId, RouteSchedule, SailingTime, TerminalCombo};

use crate::helper::{crossings, lookup, pacific, route, trip_date};

fn schedule() -> RouteSchedule {
    let sailing = |vessel: &str, hour, minute| SailingTime {
        vessel_name: vessel.to_owned(),
        departing_time: pacific(hour, minute),
        arriving_time: None,
        annotation_indexes: vec![],
    };

    RouteSchedule {
        schedule_id: 192,
        schedule_route_id: None,
        route_id: RouteId::new(21),
        schedule_name: "Mukilteo / Clinton".to_owned(),
        terminal_combos: vec![
            TerminalCombo {
                departing_terminal_name: "Mukilteo".to_owned(),
                arriving_terminal_name: "Clinton".to_owned(),
                sailing_notes: String::new(),
                annotations: vec![],
                times: vec![sailing("Walla Walla", 8, 0)],
            },
            TerminalCombo {
                departing_terminal_name: "Mukilteo".to_owned(),
                arriving_terminal_name: "Kingston".to_owned(),
                sailing_notes: String::new(),
                annotations: vec![],
                times: vec![sailing("Walla Walla", 8, 0)],
            },
            TerminalCombo {
                departing_terminal_name: "Clinton".to_owned(),
                arriving_terminal_name: "Mukilteo".to_owned(),
                sailing_notes: String::new(),
                annotations: vec![],
                // An unknown vessel that must be dropped, plus the return leg.
                times: vec![sailing("Walla Walla", 8, 30), sailing("Ghost Ship", 9, 0)],
            },
        ],
    }
}

#[test]
fn assembles_a_full_day_end_to_end() {
    // Two sailings depart MUK at 08:00 on the same vessel, one direct to CLI
    // (15 minute crossing) and one indirect via KIN.
    let assembled = assemble_day(&schedule(), &route(), trip_date(), &lookup(), &crossings());

    assert_eq!(assembled.dropped_sailings, 1);
    assert!(assembled.warnings.is_empty());
    assert_eq!(assembled.trips.len(), 3);

    let direct = assembled
        .trips
        .iter()
        .find(|t| t.arriving_terminal_abbrev == "CLI" && t.departing_time == pacific(8, 0))
        .unwrap();
    assert_eq!(direct.trip_type, TripType::Direct);
    assert_eq!(direct.est_arrive_next, Some(pacific(8, 15)));

    let indirect = assembled
        .trips
        .iter()
        .find(|t| t.arriving_terminal_abbrev == "KIN")
        .unwrap();
    assert_eq!(indirect.trip_type, TripType::Indirect);

    // Key uniqueness within the sailing day.
    let mut keys: Vec<_> = assembled.trips.iter().map(|t| t.key.clone()).collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), assembled.trips.len());
}
