use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display as StrumDisplay;
use wsf_rs::VesselLocation;

use super::{Prediction, PredictionSlot, TripKey};

/// A change in a vessel's situation worth the expensive work of re-resolving
/// its scheduled trip and recomputing predictions. Ticks without an event
/// only refresh cheap fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum TripEvent {
    /// No prior live record exists for the vessel.
    FirstAppearance,
    /// The departing terminal changed.
    TripBoundary,
    /// `at_dock` flipped false to true.
    DockArrival,
    /// `left_dock` became defined where it was not.
    DockDeparture,
    /// The resolved schedule key changed.
    KeyChange,
}

/// The current or just-completed physical trip of one vessel. One mutable
/// record per vessel, owned exclusively by the orchestrator and overwritten
/// in place on each tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselTrip {
    pub vessel_abbrev: String,
    pub key: Option<TripKey>,
    pub departing_terminal_abbrev: Option<String>,
    pub arriving_terminal_abbrev: Option<String>,
    pub scheduled_departure: Option<DateTime<Utc>>,
    pub at_dock: bool,
    pub left_dock: Option<DateTime<Utc>>,
    pub eta: Option<DateTime<Utc>>,
    pub trip_start: Option<DateTime<Utc>>,
    pub trip_end: Option<DateTime<Utc>>,
    pub in_service: bool,
    pub timestamp: DateTime<Utc>,
    pub prev_scheduled_departure: Option<DateTime<Utc>>,
    pub prev_left_dock: Option<DateTime<Utc>>,
    pub at_dock_depart_curr: Option<Prediction>,
    pub at_dock_arrive_next: Option<Prediction>,
    pub at_dock_depart_next: Option<Prediction>,
    pub at_sea_arrive_next: Option<Prediction>,
    pub at_sea_depart_next: Option<Prediction>,
}

impl VesselTrip {
    pub fn prediction(&self, slot: PredictionSlot) -> Option<&Prediction> {
        match slot {
            PredictionSlot::AtDockDepartCurr => self.at_dock_depart_curr.as_ref(),
            PredictionSlot::AtDockArriveNext => self.at_dock_arrive_next.as_ref(),
            PredictionSlot::AtDockDepartNext => self.at_dock_depart_next.as_ref(),
            PredictionSlot::AtSeaArriveNext => self.at_sea_arrive_next.as_ref(),
            PredictionSlot::AtSeaDepartNext => self.at_sea_depart_next.as_ref(),
        }
    }

    pub fn set_prediction(&mut self, slot: PredictionSlot, prediction: Prediction) {
        let target = match slot {
            PredictionSlot::AtDockDepartCurr => &mut self.at_dock_depart_curr,
            PredictionSlot::AtDockArriveNext => &mut self.at_dock_arrive_next,
            PredictionSlot::AtDockDepartNext => &mut self.at_dock_depart_next,
            PredictionSlot::AtSeaArriveNext => &mut self.at_sea_arrive_next,
            PredictionSlot::AtSeaDepartNext => &mut self.at_sea_depart_next,
        };
        *target = Some(prediction);
    }
}

/// The cheap per-tick update applied when no trip event fired. Keeping this
/// an explicit field set makes the no-event transition auditable and stops
/// stale denormalized fields from being revived by whole-record rewrites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRefresh {
    pub vessel_abbrev: String,
    pub at_dock: bool,
    pub eta: Option<DateTime<Utc>>,
    pub timestamp: DateTime<Utc>,
}

impl TripRefresh {
    pub fn from_location(location: &VesselLocation) -> Self {
        Self {
            vessel_abbrev: location.vessel_abbrev.clone(),
            at_dock: location.at_dock,
            eta: location.eta,
            timestamp: location.timestamp,
        }
    }

    /// Applies the refresh onto an existing record, touching nothing else.
    pub fn apply(&self, trip: &mut VesselTrip) {
        trip.at_dock = self.at_dock;
        trip.eta = self.eta;
        trip.timestamp = self.timestamp;
    }
}
