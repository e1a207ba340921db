use chrono::{DateTime, Utc};
use puget_core::{ScheduledTrip, TripType};
use tracing::warn;

use crate::overlap::{by_vessel_sorted, overlap_group_end};

/// An overlap group the classifier could not resolve: no member arrives at
/// the vessel's expected next terminal, or the group has no later trip at
/// all. Every member was defaulted to direct.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationWarning {
    pub vessel_abbrev: String,
    pub departing_terminal_abbrev: String,
    pub departing_time: DateTime<Utc>,
    pub group_size: usize,
    pub expected_next_terminal: Option<String>,
}

#[derive(Debug)]
pub struct Classified {
    pub trips: Vec<ScheduledTrip>,
    pub warnings: Vec<ClassificationWarning>,
}

/// Partitions one sailing day's trips (mixed vessels) into direct and
/// indirect legs. Two-pointer scan over each vessel's chronologically sorted
/// sailings; no pairwise comparison.
pub fn classify_day(trips: Vec<ScheduledTrip>) -> Classified {
    let mut out = Vec::with_capacity(trips.len());
    let mut warnings = Vec::new();

    for (_, mut vessel_trips) in by_vessel_sorted(trips) {
        classify_vessel(&mut vessel_trips, &mut warnings);
        out.append(&mut vessel_trips);
    }

    Classified {
        trips: out,
        warnings,
    }
}

fn classify_vessel(trips: &mut [ScheduledTrip], warnings: &mut Vec<ClassificationWarning>) {
    let mut start = 0;
    while start < trips.len() {
        let end = overlap_group_end(trips, start);

        if end - start == 1 {
            trips[start].trip_type = TripType::Direct;
            start = end;
            continue;
        }

        // The feed offers a direct and an indirect option departing
        // simultaneously. The next later trip's departing terminal tells us
        // where the vessel actually goes next.
        let group_time = trips[start].departing_time;
        let mut next = end;
        while next < trips.len() && trips[next].departing_time == group_time {
            next += 1;
        }
        let expected_next_terminal =
            (next < trips.len()).then(|| trips[next].departing_terminal_abbrev.clone());

        match &expected_next_terminal {
            Some(terminal)
                if trips[start..end]
                    .iter()
                    .any(|t| t.arriving_terminal_abbrev == *terminal) =>
            {
                for trip in &mut trips[start..end] {
                    trip.trip_type = if trip.arriving_terminal_abbrev == *terminal {
                        TripType::Direct
                    } else {
                        TripType::Indirect
                    };
                }
            }
            _ => {
                // Ambiguous feed data. Defaulting to direct keeps the chain
                // intact; the warning is the caller's to surface.
                for trip in &mut trips[start..end] {
                    trip.trip_type = TripType::Direct;
                }
                warn!(
                    "ambiguous overlap group: vessel '{}', terminal '{}' at {}, {} members, expected next terminal {:?}",
                    trips[start].vessel_abbrev,
                    trips[start].departing_terminal_abbrev,
                    group_time,
                    end - start,
                    expected_next_terminal,
                );
                warnings.push(ClassificationWarning {
                    vessel_abbrev: trips[start].vessel_abbrev.clone(),
                    departing_terminal_abbrev: trips[start].departing_terminal_abbrev.clone(),
                    departing_time: group_time,
                    group_size: end - start,
                    expected_next_terminal: expected_next_terminal.clone(),
                });
            }
        }

        start = end;
    }
}
