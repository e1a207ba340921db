use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use puget_core::{
    CoreResult, SailingDay, ScheduleStoreInbound, ScheduleStoreOutbound, ScheduledTrip, TripKey,
};
use snafu::ResultExt;
use tracing::instrument;

use crate::error::error::{RouteSyncSnafu, StorageSnafu};
use crate::{Config, Result};
use wsf_rs::RouteId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncCounts {
    pub deleted: u32,
    pub inserted: u32,
    pub updated: u32,
}

pub trait ScheduleStore: ScheduleStoreInbound + ScheduleStoreOutbound {}
impl<T> ScheduleStore for T where T: ScheduleStoreInbound + ScheduleStoreOutbound {}

/// Diffs freshly synthesized trip sets against persisted state and applies
/// the smallest batch of operations that reconciles them.
#[derive(Clone)]
pub struct ScheduleReconciler {
    store: Arc<dyn ScheduleStore>,
    day_delete_batch_size: u32,
    purge_batch_size: u32,
}

impl ScheduleReconciler {
    pub fn new(store: Arc<dyn ScheduleStore>, config: &Config) -> Self {
        Self {
            store,
            day_delete_batch_size: config.day_delete_batch_size,
            purge_batch_size: config.purge_batch_size,
        }
    }

    /// Reconciles one route's freshly computed trips against what is
    /// persisted: stale keys are deleted, new or changed trips upserted, all
    /// in one atomic batch. Duplicate keys in the input resolve last-wins.
    #[instrument(skip_all, fields(app.route_id = %route_id))]
    pub async fn sync_route(
        &self,
        route_id: RouteId,
        trips: Vec<ScheduledTrip>,
    ) -> Result<SyncCounts> {
        let input_len = trips.len();

        let mut deduped: HashMap<TripKey, ScheduledTrip> = HashMap::with_capacity(input_len);
        for trip in trips {
            deduped.insert(trip.key.clone(), trip);
        }
        let deduped_len = deduped.len();

        self.apply_route_diff(route_id, deduped)
            .await
            .context(RouteSyncSnafu {
                route_id,
                input_len,
                deduped_len,
            })
    }

    async fn apply_route_diff(
        &self,
        route_id: RouteId,
        new_trips: HashMap<TripKey, ScheduledTrip>,
    ) -> CoreResult<SyncCounts> {
        let mut existing: HashMap<TripKey, ScheduledTrip> = self
            .store
            .trips_by_route(route_id)
            .await?
            .into_iter()
            .map(|stored| (stored.trip.key.clone(), stored.into_domain()))
            .collect();

        let mut counts = SyncCounts::default();
        let mut upserts = Vec::new();

        for (key, trip) in new_trips {
            match existing.remove(&key) {
                None => {
                    counts.inserted += 1;
                    upserts.push(trip);
                }
                // Field-by-field comparison on the domain value; storage
                // identity never participates.
                Some(old) if old != trip => {
                    counts.updated += 1;
                    upserts.push(trip);
                }
                Some(_) => {}
            }
        }

        let deletes: Vec<TripKey> = existing.into_keys().collect();
        counts.deleted = deletes.len() as u32;

        if !deletes.is_empty() || !upserts.is_empty() {
            self.store
                .apply_route_batch(route_id, &deletes, &upserts)
                .await?;
        }

        Ok(counts)
    }

    /// Replaces every trip of one sailing day: capped delete batches until
    /// the day is empty, then a bulk insert. The caller guarantees key
    /// uniqueness of the new set.
    #[instrument(skip_all, fields(app.sailing_day = %day))]
    pub async fn replace_day(&self, day: &SailingDay, trips: Vec<ScheduledTrip>) -> Result<()> {
        loop {
            let deleted = self
                .store
                .delete_day_batch(day, self.day_delete_batch_size)
                .await
                .context(StorageSnafu)?;
            if deleted < self.day_delete_batch_size {
                break;
            }
        }

        for chunk in trips.chunks(self.day_delete_batch_size as usize) {
            self.store.insert_trips(chunk).await.context(StorageSnafu)?;
        }

        Ok(())
    }

    /// Deletes one bounded batch of trips departed before the cutoff.
    /// Returns whether more work remains; the caller loops.
    pub async fn purge_departed_before(&self, cutoff: DateTime<Utc>) -> Result<bool> {
        let deleted = self
            .store
            .delete_departed_before(cutoff, self.purge_batch_size)
            .await
            .context(StorageSnafu)?;
        Ok(deleted == self.purge_batch_size)
    }
}
