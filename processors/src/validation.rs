use chrono::{DateTime, Utc};
use tracing::warn;
use wsf_rs::VesselLocation;

static EARLY_DEPARTURE_SLACK: chrono::Duration = chrono::Duration::minutes(10);

/// A vessel that left the dock well before its scheduled departure; usually
/// means the feed matched the ping to the wrong trip.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartureAnomaly {
    pub vessel_abbrev: String,
    pub left_dock: DateTime<Utc>,
    pub scheduled_departure: DateTime<Utc>,
}

/// Log-only companion check; never fails a tick.
pub fn validate_departures<'a>(
    locations: impl IntoIterator<Item = &'a VesselLocation>,
) -> Vec<DepartureAnomaly> {
    let mut anomalies = Vec::new();

    for location in locations {
        let (Some(left_dock), Some(scheduled_departure)) =
            (location.left_dock, location.scheduled_departure)
        else {
            continue;
        };

        if left_dock + EARLY_DEPARTURE_SLACK < scheduled_departure {
            warn!(
                "vessel '{}' left dock at {left_dock}, more than {} minutes before its scheduled departure {scheduled_departure}",
                location.vessel_abbrev,
                EARLY_DEPARTURE_SLACK.num_minutes(),
            );
            anomalies.push(DepartureAnomaly {
                vessel_abbrev: location.vessel_abbrev.clone(),
                left_dock,
                scheduled_departure,
            });
        }
    }

    anomalies
}
