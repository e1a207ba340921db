use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use puget_core::{
    LiveStoreInbound, LiveStoreOutbound, LocationFeed, PredictionContext, PredictionSlot,
    Predictor, ScheduleStoreOutbound, StoredScheduledTrip, TripEvent, TripKey, TripRefresh,
    VesselTrip,
};
use snafu::ResultExt;
use tracing::{error, instrument};
use wsf_rs::VesselLocation;

use crate::error::error::{FeedSnafu, LocationsSnafu, TripsSnafu};
use crate::{
    dedupe_locations, detect_event, validate_departures, DepartureAnomaly, Error, Result,
    Settings,
};

pub trait LiveProcessing:
    LiveStoreInbound + LiveStoreOutbound + ScheduleStoreOutbound
{
}
impl<T> LiveProcessing for T where
    T: LiveStoreInbound + LiveStoreOutbound + ScheduleStoreOutbound
{
}

/// What one tick accomplished. Subroutine failures are reported here, never
/// thrown past the orchestrator: the scheduler sees a completed tick with
/// partial success detail.
#[derive(Debug, Default)]
pub struct TickOutcome {
    pub locations_success: bool,
    pub trips_success: bool,
    pub errors: Vec<Error>,
    pub anomalies: Vec<DepartureAnomaly>,
}

/// Advances every vessel's "current trip" record from the live position
/// feed, one run-to-completion task per tick.
#[derive(Clone)]
pub struct VesselTripProcessor {
    adapter: Arc<dyn LiveProcessing>,
    feed: Arc<dyn LocationFeed>,
    predictor: Arc<dyn Predictor>,
    tick_interval: Duration,
}

impl VesselTripProcessor {
    pub fn new(
        adapter: Arc<dyn LiveProcessing>,
        feed: Arc<dyn LocationFeed>,
        predictor: Arc<dyn Predictor>,
        settings: &Settings,
    ) -> Self {
        Self {
            adapter,
            feed,
            predictor,
            tick_interval: settings.tick_interval,
        }
    }

    pub async fn run_continuous(self) -> ! {
        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.tick_interval).await;
        }
    }

    #[instrument(skip_all)]
    async fn run_cycle(&self) {
        match self.run_single().await {
            Err(e) => error!("vessel trip tick failed: {e:?}"),
            Ok(outcome) => {
                for e in &outcome.errors {
                    error!("tick subroutine failed: {e:?}");
                }
            }
        }
    }

    pub async fn run_single(&self) -> Result<TickOutcome> {
        let locations = self.feed.vessel_locations().await.context(FeedSnafu)?;
        let latest = dedupe_locations(locations);

        let anomalies = validate_departures(latest.values());

        // The two subroutines run over the same deduplicated input with no
        // ordering requirement between them; each failure is caught on its
        // own and the other still completes.
        let (locations_result, trips_result) = tokio::join!(
            self.persist_locations(&latest),
            self.advance_trips(&latest),
        );

        let mut outcome = TickOutcome {
            locations_success: true,
            trips_success: true,
            errors: Vec::new(),
            anomalies,
        };
        if let Err(e) = locations_result {
            outcome.locations_success = false;
            outcome.errors.push(e);
        }
        if let Err(e) = trips_result {
            outcome.trips_success = false;
            outcome.errors.push(e);
        }
        Ok(outcome)
    }

    async fn persist_locations(&self, latest: &HashMap<String, VesselLocation>) -> Result<()> {
        for location in latest.values() {
            self.adapter
                .put_location(location)
                .await
                .context(LocationsSnafu)?;
        }
        Ok(())
    }

    async fn advance_trips(&self, latest: &HashMap<String, VesselLocation>) -> Result<()> {
        for location in latest.values() {
            let prior = self
                .adapter
                .vessel_trip(&location.vessel_abbrev)
                .await
                .context(TripsSnafu)?;

            match detect_event(prior.as_ref(), location) {
                // No event: only cheap fields move, no schedule lookup, no
                // predictor call.
                None => {
                    self.adapter
                        .refresh_vessel_trip(&TripRefresh::from_location(location))
                        .await
                        .context(TripsSnafu)?;
                }
                Some(event) => {
                    let trip = self.advance_one(prior, location, event).await?;
                    self.adapter
                        .put_vessel_trip(&trip)
                        .await
                        .context(TripsSnafu)?;
                }
            }
        }
        Ok(())
    }

    async fn advance_one(
        &self,
        prior: Option<VesselTrip>,
        location: &VesselLocation,
        event: TripEvent,
    ) -> Result<VesselTrip> {
        let key = TripKey::for_location(location);

        let scheduled = match &key {
            Some(key) => self
                .adapter
                .trip_by_key(key)
                .await
                .context(TripsSnafu)?
                .map(StoredScheduledTrip::into_domain),
            None => None,
        };

        let mut trip = build_vessel_trip(prior.as_ref(), location, key, event);

        let context = PredictionContext {
            event,
            location: location.clone(),
            scheduled,
            prior,
        };
        for slot in PredictionSlot::for_event(event, location.at_dock) {
            match self.predictor.predict(*slot, &context).await {
                Ok(prediction) => trip.set_prediction(*slot, prediction),
                // An absent prediction beats a failed tick; the slot stays
                // empty until the next qualifying event.
                Err(e) => error!(
                    "prediction '{slot}' for vessel '{}' failed: {e:?}",
                    location.vessel_abbrev
                ),
            }
        }

        Ok(trip)
    }
}

/// Rebuilds the live record for an event tick. Every field written here is
/// deliberate; nothing is spread forward wholesale from the prior record.
fn build_vessel_trip(
    prior: Option<&VesselTrip>,
    location: &VesselLocation,
    key: Option<TripKey>,
    event: TripEvent,
) -> VesselTrip {
    // On an identity change the trip that just ended becomes "previous";
    // within the same trip the denormalized fields carry over.
    let (prev_scheduled_departure, prev_left_dock) = match event {
        TripEvent::TripBoundary | TripEvent::KeyChange => (
            prior.and_then(|p| p.scheduled_departure),
            prior.and_then(|p| p.left_dock),
        ),
        TripEvent::FirstAppearance | TripEvent::DockArrival | TripEvent::DockDeparture => (
            prior.and_then(|p| p.prev_scheduled_departure),
            prior.and_then(|p| p.prev_left_dock),
        ),
    };

    let (trip_start, trip_end) = match event {
        TripEvent::FirstAppearance | TripEvent::TripBoundary | TripEvent::KeyChange => {
            (location.left_dock, None)
        }
        TripEvent::DockDeparture => (location.left_dock, prior.and_then(|p| p.trip_end)),
        TripEvent::DockArrival => (
            prior.and_then(|p| p.trip_start),
            Some(location.timestamp),
        ),
    };

    let mut trip = VesselTrip {
        vessel_abbrev: location.vessel_abbrev.clone(),
        key,
        departing_terminal_abbrev: location.departing_terminal_abbrev.clone(),
        arriving_terminal_abbrev: location.arriving_terminal_abbrev.clone(),
        scheduled_departure: location.scheduled_departure,
        at_dock: location.at_dock,
        left_dock: location.left_dock,
        eta: location.eta,
        trip_start,
        trip_end,
        in_service: location.in_service,
        timestamp: location.timestamp,
        prev_scheduled_departure,
        prev_left_dock,
        at_dock_depart_curr: None,
        at_dock_arrive_next: None,
        at_dock_depart_next: None,
        at_sea_arrive_next: None,
        at_sea_depart_next: None,
    };

    // Dock events happen within one trip: predictions for slots this event
    // does not recompute stay valid. Identity changes start from empty
    // slots so a new trip never inherits a stale estimate.
    if matches!(event, TripEvent::DockArrival | TripEvent::DockDeparture) {
        if let Some(prior) = prior {
            trip.at_dock_depart_curr = prior.at_dock_depart_curr.clone();
            trip.at_dock_arrive_next = prior.at_dock_arrive_next.clone();
            trip.at_dock_depart_next = prior.at_dock_depart_next.clone();
            trip.at_sea_arrive_next = prior.at_sea_arrive_next.clone();
            trip.at_sea_depart_next = prior.at_sea_depart_next.clone();
        }
    }

    trip
}
