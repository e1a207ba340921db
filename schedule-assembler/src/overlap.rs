use std::collections::BTreeMap;

use puget_core::ScheduledTrip;

/// End index (exclusive) of the overlap group starting at `start`: the
/// maximal run of sailings sharing departure time and departing terminal.
/// Requires the slice to be sorted by departure time.
pub(crate) fn overlap_group_end(trips: &[ScheduledTrip], start: usize) -> usize {
    let head = &trips[start];
    let mut end = start + 1;
    while end < trips.len()
        && trips[end].departing_time == head.departing_time
        && trips[end].departing_terminal_abbrev == head.departing_terminal_abbrev
    {
        end += 1;
    }
    end
}

/// Splits a day's trips per vessel, each vessel's list sorted ascending by
/// departure time. Both scan passes depend on this ordering.
pub(crate) fn by_vessel_sorted(trips: Vec<ScheduledTrip>) -> BTreeMap<String, Vec<ScheduledTrip>> {
    let mut by_vessel: BTreeMap<String, Vec<ScheduledTrip>> = BTreeMap::new();
    for trip in trips {
        by_vessel
            .entry(trip.vessel_abbrev.clone())
            .or_default()
            .push(trip);
    }
    for vessel_trips in by_vessel.values_mut() {
        vessel_trips.sort_by_key(|t| t.departing_time);
    }
    by_vessel
}
