use async_trait::async_trait;
use chrono::NaiveDate;
use wsf_rs::{Route, RouteId, RouteSchedule, VesselLocation};

use crate::{CoreResult, SailingDay, StoredScheduledTrip, TripKey, VesselTrip};

/// The ferry authority's published schedule feed.
#[async_trait]
pub trait ScheduleFeed: Send + Sync {
    async fn routes_by_date(&self, date: NaiveDate) -> CoreResult<Vec<Route>>;
    async fn schedule_by_date_and_route(
        &self,
        date: NaiveDate,
        route_id: RouteId,
    ) -> CoreResult<RouteSchedule>;
}

/// The ferry authority's live position feed. One snapshot per call, all
/// vessels.
#[async_trait]
pub trait LocationFeed: Send + Sync {
    async fn vessel_locations(&self) -> CoreResult<Vec<VesselLocation>>;
}

#[async_trait]
pub trait ScheduleStoreOutbound: Send + Sync {
    async fn trips_by_route(&self, route_id: RouteId) -> CoreResult<Vec<StoredScheduledTrip>>;
    async fn trip_by_key(&self, key: &TripKey) -> CoreResult<Option<StoredScheduledTrip>>;
    async fn trips_by_day(&self, day: &SailingDay) -> CoreResult<Vec<StoredScheduledTrip>>;
}

#[async_trait]
pub trait LiveStoreOutbound: Send + Sync {
    async fn vessel_trip(&self, vessel_abbrev: &str) -> CoreResult<Option<VesselTrip>>;
}
