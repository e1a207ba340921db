use async_trait::async_trait;
use chrono::{DateTime, Utc};
use wsf_rs::{RouteId, VesselLocation};

use crate::{CoreResult, SailingDay, ScheduledTrip, TripKey, TripRefresh, VesselTrip};

#[async_trait]
pub trait ScheduleStoreInbound: Send + Sync {
    /// Applies the deletes and upserts of one route sync as a single atomic
    /// batch.
    async fn apply_route_batch(
        &self,
        route_id: RouteId,
        deletes: &[TripKey],
        upserts: &[ScheduledTrip],
    ) -> CoreResult<()>;

    async fn insert_trips(&self, trips: &[ScheduledTrip]) -> CoreResult<()>;

    /// Deletes up to `limit` trips of the given sailing day, returning how
    /// many were removed. Bounds single-transaction size for day replacement.
    async fn delete_day_batch(&self, day: &SailingDay, limit: u32) -> CoreResult<u32>;

    /// Deletes up to `limit` trips whose departure is before the cutoff,
    /// returning how many were removed.
    async fn delete_departed_before(
        &self,
        cutoff: DateTime<Utc>,
        limit: u32,
    ) -> CoreResult<u32>;
}

#[async_trait]
pub trait LiveStoreInbound: Send + Sync {
    async fn put_vessel_trip(&self, trip: &VesselTrip) -> CoreResult<()>;
    async fn refresh_vessel_trip(&self, refresh: &TripRefresh) -> CoreResult<()>;
    async fn put_location(&self, location: &VesselLocation) -> CoreResult<()>;
}
