#![deny(warnings)]
#![deny(rust_2018_idioms)]

use chrono::NaiveDate;
use puget_core::{AbbrevLookup, CrossingTimes, ScheduledTrip};
use tracing::warn;
use wsf_rs::{Route, RouteSchedule};

mod classifier;
mod estimator;
mod mapper;
mod overlap;

pub use classifier::*;
pub use estimator::*;
pub use mapper::*;

/// The fully synthesized schedule for one route and sailing day, plus the
/// diagnostics the pipeline produced along the way.
#[derive(Debug)]
pub struct AssembledDay {
    pub trips: Vec<ScheduledTrip>,
    pub warnings: Vec<ClassificationWarning>,
    pub dropped_sailings: u32,
}

/// Runs the whole synthesis pipeline over one raw route schedule: map every
/// sailing, classify direct/indirect legs, then derive estimates and
/// linkage.
pub fn assemble_day(
    schedule: &RouteSchedule,
    route: &Route,
    trip_date: NaiveDate,
    lookup: &dyn AbbrevLookup,
    crossings: &dyn CrossingTimes,
) -> AssembledDay {
    let mut mapped = Vec::new();
    let mut dropped_sailings = 0;

    for combo in &schedule.terminal_combos {
        for sailing in &combo.times {
            match map_sailing(sailing, combo, route, trip_date, lookup) {
                Some(trip) => mapped.push(trip),
                None => {
                    dropped_sailings += 1;
                    warn!(
                        "dropping sailing with unresolvable identity: vessel '{}', '{}' to '{}' at {}",
                        sailing.vessel_name,
                        combo.departing_terminal_name,
                        combo.arriving_terminal_name,
                        sailing.departing_time,
                    );
                }
            }
        }
    }

    let Classified { trips, warnings } = classify_day(mapped);
    let trips = estimate_day(trips, crossings);

    AssembledDay {
        trips,
        warnings,
        dropped_sailings,
    }
}
