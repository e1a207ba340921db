use std::collections::HashMap;

use chrono::{DateTime, Utc};
use puget_core::{ceil_to_minute, CrossingTimes, ScheduledTrip, TripKey, TripType};

use crate::overlap::{by_vessel_sorted, overlap_group_end};

/// Derives arrival estimates and previous/next-leg linkage for one sailing
/// day's classified trips.
pub fn estimate_day(trips: Vec<ScheduledTrip>, crossings: &dyn CrossingTimes) -> Vec<ScheduledTrip> {
    let mut out = Vec::with_capacity(trips.len());

    for (_, mut vessel_trips) in by_vessel_sorted(trips) {
        estimate_vessel(&mut vessel_trips, crossings);
        out.append(&mut vessel_trips);
    }

    out
}

fn estimate_vessel(trips: &mut [ScheduledTrip], crossings: &dyn CrossingTimes) {
    // Pass 1: arrival estimate for each leg. A sane feed arrival wins;
    // otherwise the official crossing time; otherwise nothing. Never
    // fabricate a value.
    for trip in trips.iter_mut() {
        trip.est_arrive_next = match trip.arriving_time {
            Some(arriving) if arriving > trip.departing_time => Some(ceil_to_minute(arriving)),
            _ => crossings
                .crossing_minutes(
                    &trip.route_abbrev,
                    &trip.departing_terminal_abbrev,
                    &trip.arriving_terminal_abbrev,
                )
                .map(|minutes| {
                    ceil_to_minute(trip.departing_time + chrono::Duration::minutes(minutes as i64))
                }),
        };
    }

    // Pass 2: linkage. Groups are scanned the same way the classifier scans
    // them so simultaneous siblings never become each other's predecessor.
    let mut last_arrival: HashMap<String, (TripKey, DateTime<Utc>)> = HashMap::new();

    let mut start = 0;
    while start < trips.len() {
        let end = overlap_group_end(trips, start);
        let group_time = trips[start].departing_time;

        let next_direct = trips[end..]
            .iter()
            .find(|t| t.trip_type == TripType::Direct && t.departing_time > group_time)
            .map(|t| (t.key.clone(), t.departing_time));

        for trip in &mut trips[start..end] {
            if let Some((next_key, next_time)) = &next_direct {
                trip.next_key = Some(next_key.clone());
                trip.next_departing_time = Some(*next_time);
            }

            if let Some((prev_key, arrive)) = last_arrival.get(&trip.departing_terminal_abbrev) {
                trip.prev_key = Some(prev_key.clone());
                // An arrival after this trip's own departure is stale or
                // inconsistent feed data: discarded, not clamped.
                trip.est_arrive_curr = (*arrive <= trip.departing_time).then_some(*arrive);
            }
        }

        // Bookkeeping is updated only after the whole group has been
        // processed; only direct legs ever become a predecessor.
        for trip in &trips[start..end] {
            if trip.trip_type == TripType::Direct {
                if let Some(est) = trip.est_arrive_next {
                    last_arrival.insert(
                        trip.arriving_terminal_abbrev.clone(),
                        (trip.key.clone(), est),
                    );
                }
            }
        }

        start = end;
    }
}
