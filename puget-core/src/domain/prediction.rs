use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use snafu::ensure;
use strum::{Display as StrumDisplay, EnumString};

use crate::error::{CoreResult, PredictionRangeError, PredictionRangeSnafu};
use crate::{ScheduledTrip, TripEvent, VesselTrip};

/// The five prediction slots on a live trip, named by the vessel phase at
/// prediction time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    StrumDisplay,
    EnumString,
)]
pub enum PredictionSlot {
    AtDockDepartCurr,
    AtDockArriveNext,
    AtDockDepartNext,
    AtSeaArriveNext,
    AtSeaDepartNext,
}

impl PredictionSlot {
    pub const AT_DOCK: [PredictionSlot; 3] = [
        PredictionSlot::AtDockDepartCurr,
        PredictionSlot::AtDockArriveNext,
        PredictionSlot::AtDockDepartNext,
    ];
    pub const AT_SEA: [PredictionSlot; 2] = [
        PredictionSlot::AtSeaArriveNext,
        PredictionSlot::AtSeaDepartNext,
    ];

    /// Which slots a trip event recomputes. Dock arrival fires the at-dock
    /// set, dock departure the at-sea set; identity events fire whichever
    /// set matches the vessel's current phase.
    pub fn for_event(event: TripEvent, at_dock: bool) -> &'static [PredictionSlot] {
        match event {
            TripEvent::DockArrival => &Self::AT_DOCK,
            TripEvent::DockDeparture => &Self::AT_SEA,
            TripEvent::FirstAppearance | TripEvent::TripBoundary | TripEvent::KeyChange => {
                if at_dock {
                    &Self::AT_DOCK
                } else {
                    &Self::AT_SEA
                }
            }
        }
    }
}

/// One ML-produced time estimate with its uncertainty band. `mae` and
/// `std_dev` are minutes; every other field is an instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub pred_time: DateTime<Utc>,
    pub min_time: DateTime<Utc>,
    pub max_time: DateTime<Utc>,
    pub mae: f64,
    pub std_dev: f64,
    pub actual: Option<DateTime<Utc>>,
    pub delta_total: Option<f64>,
    pub delta_range: Option<f64>,
}

impl Prediction {
    pub fn new(
        pred_time: DateTime<Utc>,
        min_time: DateTime<Utc>,
        max_time: DateTime<Utc>,
        mae: f64,
        std_dev: f64,
    ) -> Result<Self, PredictionRangeError> {
        ensure!(
            min_time <= pred_time && pred_time <= max_time,
            PredictionRangeSnafu {
                pred_time,
                min_time,
                max_time,
            }
        );

        Ok(Self {
            pred_time,
            min_time,
            max_time,
            mae,
            std_dev,
            actual: None,
            delta_total: None,
            delta_range: None,
        })
    }

    /// Records the observed time and derives both error metrics.
    /// `delta_range` is 0 when the observation falls inside the band,
    /// otherwise the signed minutes to the nearest bound.
    pub fn with_actual(mut self, actual: DateTime<Utc>) -> Self {
        self.delta_total = Some(minutes_between(self.pred_time, actual));
        self.delta_range = Some(if actual < self.min_time {
            minutes_between(self.min_time, actual)
        } else if actual > self.max_time {
            minutes_between(self.max_time, actual)
        } else {
            0.0
        });
        self.actual = Some(actual);
        self
    }
}

fn minutes_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_seconds() as f64 / 60.0
}

/// Everything the regression model gets to see when asked for one slot's
/// estimate.
#[derive(Debug, Clone)]
pub struct PredictionContext {
    pub event: TripEvent,
    pub location: wsf_rs::VesselLocation,
    pub scheduled: Option<ScheduledTrip>,
    pub prior: Option<VesselTrip>,
}

/// The opaque time-prediction model. May call a remote model; failures leave
/// the slot empty, they never fail a tick.
#[async_trait]
pub trait Predictor: Send + Sync {
    async fn predict(
        &self,
        slot: PredictionSlot,
        context: &PredictionContext,
    ) -> CoreResult<Prediction>;
}
