//! In-memory port adapters and record constructors for tests further up the
//! workspace. Only compiled with the `test` feature.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use snafu::Location;
use wsf_rs::{Route, RouteId, RouteSchedule, StatusCode, VesselId, VesselLocation};

use crate::error::error::{PredictorSnafu, StorageSnafu};
use crate::{
    CoreResult, LiveStoreInbound, LiveStoreOutbound, LocationFeed, Prediction,
    PredictionContext, PredictionSlot, Predictor, SailingDay, ScheduleFeed,
    ScheduleStoreInbound, ScheduleStoreOutbound, ScheduledTrip, StoredScheduledTrip, TripKey,
    TripRefresh, TripType, VesselTrip,
};

impl ScheduledTrip {
    pub fn test_default(
        vessel: &str,
        departing: &str,
        arriving: &str,
        departing_time: DateTime<Utc>,
    ) -> Self {
        Self {
            key: TripKey::generate(
                Some(vessel),
                Some(departing),
                Some(arriving),
                Some(departing_time),
            )
            .unwrap(),
            vessel_abbrev: vessel.into(),
            departing_terminal_abbrev: departing.into(),
            arriving_terminal_abbrev: arriving.into(),
            departing_time,
            arriving_time: None,
            sailing_notes: String::new(),
            annotations: Vec::new(),
            route_id: RouteId::new(21),
            route_abbrev: "muk-cl".into(),
            sailing_day: SailingDay::from_instant(departing_time),
            trip_type: TripType::Direct,
            prev_key: None,
            next_key: None,
            next_departing_time: None,
            est_arrive_next: None,
            est_arrive_curr: None,
        }
    }
}

impl Prediction {
    pub fn test_default(base: DateTime<Utc>) -> Self {
        Prediction::new(
            base,
            base - chrono::Duration::minutes(5),
            base + chrono::Duration::minutes(5),
            2.0,
            1.0,
        )
        .unwrap()
    }
}

pub fn test_location(
    vessel: &str,
    departing: Option<&str>,
    arriving: Option<&str>,
    timestamp: DateTime<Utc>,
) -> VesselLocation {
    VesselLocation {
        vessel_id: VesselId::new(1),
        vessel_name: vessel.into(),
        vessel_abbrev: vessel.into(),
        departing_terminal_abbrev: departing.map(Into::into),
        arriving_terminal_abbrev: arriving.map(Into::into),
        latitude: 47.951,
        longitude: -122.305,
        speed: Some(0.0),
        heading: Some(180.0),
        in_service: true,
        at_dock: true,
        left_dock: None,
        eta: None,
        scheduled_departure: None,
        timestamp,
    }
}

fn test_feed_error(message: &str) -> crate::Error {
    crate::Error::from(wsf_rs::Error::FailedRequest {
        location: Location::new("test", 0, 0),
        url: "mem://test".into(),
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: message.into(),
    })
}

#[derive(Default)]
struct MemStoreInner {
    trips: HashMap<TripKey, StoredScheduledTrip>,
    vessel_trips: HashMap<String, VesselTrip>,
    locations: Vec<VesselLocation>,
    refreshes: Vec<TripRefresh>,
}

/// A transactional document store in a mutex. Failure toggles let tests poke
/// one subroutine at a time.
#[derive(Default)]
pub struct MemStore {
    inner: Mutex<MemStoreInner>,
    next_id: AtomicU64,
    fail_schedule_writes: AtomicBool,
    fail_trip_writes: AtomicBool,
    fail_location_writes: AtomicBool,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_schedule_writes(&self, fail: bool) {
        self.fail_schedule_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_trip_writes(&self, fail: bool) {
        self.fail_trip_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_location_writes(&self, fail: bool) {
        self.fail_location_writes.store(fail, Ordering::SeqCst);
    }

    pub fn scheduled_trips(&self) -> Vec<StoredScheduledTrip> {
        let inner = self.inner.lock().unwrap();
        let mut trips: Vec<_> = inner.trips.values().cloned().collect();
        trips.sort_by(|a, b| a.trip.key.cmp(&b.trip.key));
        trips
    }

    pub fn vessel_trips(&self) -> Vec<VesselTrip> {
        let inner = self.inner.lock().unwrap();
        let mut trips: Vec<_> = inner.vessel_trips.values().cloned().collect();
        trips.sort_by(|a, b| a.vessel_abbrev.cmp(&b.vessel_abbrev));
        trips
    }

    pub fn locations(&self) -> Vec<VesselLocation> {
        self.inner.lock().unwrap().locations.clone()
    }

    pub fn refreshes(&self) -> Vec<TripRefresh> {
        self.inner.lock().unwrap().refreshes.clone()
    }

    pub fn insert_stored_trip(&self, trip: ScheduledTrip) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.inner.lock().unwrap().trips.insert(
            trip.key.clone(),
            StoredScheduledTrip::new(format!("doc-{id}"), Utc::now(), trip),
        );
    }

    pub fn insert_vessel_trip(&self, trip: VesselTrip) {
        self.inner
            .lock()
            .unwrap()
            .vessel_trips
            .insert(trip.vessel_abbrev.clone(), trip);
    }

    fn check(&self, flag: &AtomicBool, what: &str) -> CoreResult<()> {
        if flag.load(Ordering::SeqCst) {
            StorageSnafu {
                message: format!("{what} failure injected"),
            }
            .fail()
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ScheduleStoreOutbound for MemStore {
    async fn trips_by_route(&self, route_id: RouteId) -> CoreResult<Vec<StoredScheduledTrip>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .trips
            .values()
            .filter(|t| t.trip.route_id == route_id)
            .cloned()
            .collect())
    }

    async fn trip_by_key(&self, key: &TripKey) -> CoreResult<Option<StoredScheduledTrip>> {
        Ok(self.inner.lock().unwrap().trips.get(key).cloned())
    }

    async fn trips_by_day(&self, day: &SailingDay) -> CoreResult<Vec<StoredScheduledTrip>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .trips
            .values()
            .filter(|t| t.trip.sailing_day == *day)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ScheduleStoreInbound for MemStore {
    async fn apply_route_batch(
        &self,
        _route_id: RouteId,
        deletes: &[TripKey],
        upserts: &[ScheduledTrip],
    ) -> CoreResult<()> {
        self.check(&self.fail_schedule_writes, "schedule write")?;

        let mut inner = self.inner.lock().unwrap();
        for key in deletes {
            inner.trips.remove(key);
        }
        for trip in upserts {
            match inner.trips.get_mut(&trip.key) {
                Some(existing) => existing.trip = trip.clone(),
                None => {
                    let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                    inner.trips.insert(
                        trip.key.clone(),
                        StoredScheduledTrip::new(format!("doc-{id}"), Utc::now(), trip.clone()),
                    );
                }
            }
        }
        Ok(())
    }

    async fn insert_trips(&self, trips: &[ScheduledTrip]) -> CoreResult<()> {
        self.check(&self.fail_schedule_writes, "schedule write")?;

        let mut inner = self.inner.lock().unwrap();
        for trip in trips {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            inner.trips.insert(
                trip.key.clone(),
                StoredScheduledTrip::new(format!("doc-{id}"), Utc::now(), trip.clone()),
            );
        }
        Ok(())
    }

    async fn delete_day_batch(&self, day: &SailingDay, limit: u32) -> CoreResult<u32> {
        self.check(&self.fail_schedule_writes, "schedule write")?;

        let mut inner = self.inner.lock().unwrap();
        let keys: Vec<_> = inner
            .trips
            .values()
            .filter(|t| t.trip.sailing_day == *day)
            .map(|t| t.trip.key.clone())
            .take(limit as usize)
            .collect();
        for key in &keys {
            inner.trips.remove(key);
        }
        Ok(keys.len() as u32)
    }

    async fn delete_departed_before(
        &self,
        cutoff: DateTime<Utc>,
        limit: u32,
    ) -> CoreResult<u32> {
        self.check(&self.fail_schedule_writes, "schedule write")?;

        let mut inner = self.inner.lock().unwrap();
        let keys: Vec<_> = inner
            .trips
            .values()
            .filter(|t| t.trip.departing_time < cutoff)
            .map(|t| t.trip.key.clone())
            .take(limit as usize)
            .collect();
        for key in &keys {
            inner.trips.remove(key);
        }
        Ok(keys.len() as u32)
    }
}

#[async_trait]
impl LiveStoreOutbound for MemStore {
    async fn vessel_trip(&self, vessel_abbrev: &str) -> CoreResult<Option<VesselTrip>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .vessel_trips
            .get(vessel_abbrev)
            .cloned())
    }
}

#[async_trait]
impl LiveStoreInbound for MemStore {
    async fn put_vessel_trip(&self, trip: &VesselTrip) -> CoreResult<()> {
        self.check(&self.fail_trip_writes, "trip write")?;
        self.inner
            .lock()
            .unwrap()
            .vessel_trips
            .insert(trip.vessel_abbrev.clone(), trip.clone());
        Ok(())
    }

    async fn refresh_vessel_trip(&self, refresh: &TripRefresh) -> CoreResult<()> {
        self.check(&self.fail_trip_writes, "trip write")?;
        let mut inner = self.inner.lock().unwrap();
        if let Some(trip) = inner.vessel_trips.get_mut(&refresh.vessel_abbrev) {
            refresh.apply(trip);
        }
        inner.refreshes.push(refresh.clone());
        Ok(())
    }

    async fn put_location(&self, location: &VesselLocation) -> CoreResult<()> {
        self.check(&self.fail_location_writes, "location write")?;
        self.inner.lock().unwrap().locations.push(location.clone());
        Ok(())
    }
}

/// Serves canned schedules; routes without one fail the way a dead feed
/// endpoint would.
#[derive(Default)]
pub struct StaticScheduleFeed {
    routes: Vec<Route>,
    schedules: HashMap<RouteId, RouteSchedule>,
}

impl StaticScheduleFeed {
    pub fn new(routes: Vec<Route>) -> Self {
        Self {
            routes,
            schedules: HashMap::new(),
        }
    }

    pub fn set_schedule(&mut self, route_id: RouteId, schedule: RouteSchedule) {
        self.schedules.insert(route_id, schedule);
    }
}

#[async_trait]
impl ScheduleFeed for StaticScheduleFeed {
    async fn routes_by_date(&self, _date: NaiveDate) -> CoreResult<Vec<Route>> {
        Ok(self.routes.clone())
    }

    async fn schedule_by_date_and_route(
        &self,
        _date: NaiveDate,
        route_id: RouteId,
    ) -> CoreResult<RouteSchedule> {
        self.schedules
            .get(&route_id)
            .cloned()
            .ok_or_else(|| test_feed_error(&format!("no schedule for route {route_id}")))
    }
}

/// Hands out one queued snapshot per call, then empty snapshots.
#[derive(Default)]
pub struct QueuedLocationFeed {
    snapshots: Mutex<VecDeque<Vec<VesselLocation>>>,
    fail: AtomicBool,
}

impl QueuedLocationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_snapshot(&self, snapshot: Vec<VesselLocation>) {
        self.snapshots.lock().unwrap().push_back(snapshot);
    }

    pub fn fail_next(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl LocationFeed for QueuedLocationFeed {
    async fn vessel_locations(&self) -> CoreResult<Vec<VesselLocation>> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(test_feed_error("location feed failure injected"));
        }
        Ok(self
            .snapshots
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default())
    }
}

/// Answers every request with a fixed-shape prediction and records the call.
#[derive(Default)]
pub struct ScriptedPredictor {
    calls: Mutex<Vec<(PredictionSlot, String)>>,
    fail: AtomicBool,
}

impl ScriptedPredictor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<(PredictionSlot, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Predictor for ScriptedPredictor {
    async fn predict(
        &self,
        slot: PredictionSlot,
        context: &PredictionContext,
    ) -> CoreResult<Prediction> {
        if self.fail.load(Ordering::SeqCst) {
            return PredictorSnafu {
                message: "predictor failure injected",
            }
            .fail();
        }

        self.calls
            .lock()
            .unwrap()
            .push((slot, context.location.vessel_abbrev.clone()));

        Ok(Prediction::test_default(
            context.location.timestamp + chrono::Duration::minutes(10),
        ))
    }
}
