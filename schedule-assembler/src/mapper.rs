use chrono::NaiveDate;
use puget_core::{AbbrevLookup, SailingDay, ScheduledTrip, TripKey, TripType};
use wsf_rs::{Route, SailingTime, TerminalCombo};

/// Maps one raw sailing into a normalized record. `None` means the vessel or
/// a terminal could not be resolved to an abbreviation; the caller drops the
/// sailing and logs. Annotation indexes outside the combo's annotation list
/// are skipped silently.
pub fn map_sailing(
    sailing: &SailingTime,
    combo: &TerminalCombo,
    route: &Route,
    trip_date: NaiveDate,
    lookup: &dyn AbbrevLookup,
) -> Option<ScheduledTrip> {
    let vessel = lookup.vessel_abbrev(&sailing.vessel_name)?;
    let departing = lookup.terminal_abbrev(&combo.departing_terminal_name)?;
    let arriving = lookup.terminal_abbrev(&combo.arriving_terminal_name)?;

    let key = TripKey::generate(
        Some(vessel),
        Some(departing),
        Some(arriving),
        Some(sailing.departing_time),
    )?;

    let annotations = sailing
        .annotation_indexes
        .iter()
        .filter_map(|&i| combo.annotations.get(i).cloned())
        .collect();

    Some(ScheduledTrip {
        key,
        vessel_abbrev: vessel.into(),
        departing_terminal_abbrev: departing.into(),
        arriving_terminal_abbrev: arriving.into(),
        departing_time: sailing.departing_time,
        arriving_time: sailing.arriving_time,
        sailing_notes: combo.sailing_notes.clone(),
        annotations,
        route_id: route.route_id,
        route_abbrev: route.route_abbrev.clone(),
        sailing_day: SailingDay::new(trip_date),
        // Provisional; the classifier owns the authoritative value.
        trip_type: TripType::Direct,
        prev_key: None,
        next_key: None,
        next_departing_time: None,
        est_arrive_next: None,
        est_arrive_curr: None,
    })
}
