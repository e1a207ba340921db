use std::collections::HashMap;

use wsf_rs::VesselLocation;

/// Collapses a batch of raw reports to the most recent one per vessel.
/// Ascending sort first, so folding into the map makes the newest win.
pub fn dedupe_locations(mut locations: Vec<VesselLocation>) -> HashMap<String, VesselLocation> {
    locations.sort_by_key(|l| l.timestamp);

    let mut latest = HashMap::with_capacity(locations.len());
    for location in locations {
        latest.insert(location.vessel_abbrev.clone(), location);
    }
    latest
}
