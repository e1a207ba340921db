use puget_core::{TripEvent, TripKey, VesselTrip};
use wsf_rs::VesselLocation;

/// Decides whether this report moves the vessel's state machine, comparing
/// against the previously stored live trip. `None` means a cheap refresh is
/// all the tick owes this vessel.
pub fn detect_event(prior: Option<&VesselTrip>, location: &VesselLocation) -> Option<TripEvent> {
    let Some(prior) = prior else {
        return Some(TripEvent::FirstAppearance);
    };

    if prior.departing_terminal_abbrev.as_deref() != location.departing_terminal_abbrev.as_deref()
    {
        return Some(TripEvent::TripBoundary);
    }

    if !prior.at_dock && location.at_dock {
        return Some(TripEvent::DockArrival);
    }

    if prior.left_dock.is_none() && location.left_dock.is_some() {
        return Some(TripEvent::DockDeparture);
    }

    if prior.key != TripKey::for_location(location) {
        return Some(TripEvent::KeyChange);
    }

    None
}
