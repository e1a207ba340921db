use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use futures::future::join_all;
use puget_core::{AbbrevLookup, CrossingTimes, ScheduleFeed};
use schedule_assembler::{assemble_day, ClassificationWarning};
use snafu::ResultExt;
use tracing::{error, instrument};
use wsf_rs::{Route, RouteId};

use crate::error::error::FeedSnafu;
use crate::{Config, Result, ScheduleReconciler, SyncCounts};

/// What happened to one route during a schedule refresh. Routes fail in
/// isolation; one bad route never aborts its siblings.
#[derive(Debug)]
pub struct RouteOutcome {
    pub route_id: RouteId,
    pub result: Result<SyncCounts>,
    pub warnings: Vec<ClassificationWarning>,
    pub dropped_sailings: u32,
}

/// Downloads the published schedule for every route on a trip date, runs the
/// synthesis pipeline, and reconciles each route against the store.
pub struct ScheduleScraper {
    feed: Arc<dyn ScheduleFeed>,
    lookup: Arc<dyn AbbrevLookup>,
    crossings: Arc<dyn CrossingTimes>,
    reconciler: ScheduleReconciler,
    retention: Duration,
}

impl ScheduleScraper {
    pub fn new(
        feed: Arc<dyn ScheduleFeed>,
        lookup: Arc<dyn AbbrevLookup>,
        crossings: Arc<dyn CrossingTimes>,
        reconciler: ScheduleReconciler,
        config: &Config,
    ) -> Self {
        Self {
            feed,
            lookup,
            crossings,
            reconciler,
            retention: config.retention,
        }
    }

    #[instrument(skip_all, fields(app.trip_date = %date))]
    pub async fn run_single(&self, date: NaiveDate) -> Result<Vec<RouteOutcome>> {
        let routes = self.feed.routes_by_date(date).await.context(FeedSnafu)?;

        let outcomes = join_all(routes.iter().map(|route| self.sync_one(date, route))).await;

        for outcome in &outcomes {
            if let Err(e) = &outcome.result {
                error!("failed to sync route {}: {e:?}", outcome.route_id);
            }
        }

        Ok(outcomes)
    }

    async fn sync_one(&self, date: NaiveDate, route: &Route) -> RouteOutcome {
        let schedule = match self
            .feed
            .schedule_by_date_and_route(date, route.route_id)
            .await
            .context(FeedSnafu)
        {
            Ok(schedule) => schedule,
            Err(e) => {
                return RouteOutcome {
                    route_id: route.route_id,
                    result: Err(e),
                    warnings: Vec::new(),
                    dropped_sailings: 0,
                };
            }
        };

        let assembled = assemble_day(
            &schedule,
            route,
            date,
            self.lookup.as_ref(),
            self.crossings.as_ref(),
        );

        let result = self
            .reconciler
            .sync_route(route.route_id, assembled.trips)
            .await;

        RouteOutcome {
            route_id: route.route_id,
            result,
            warnings: assembled.warnings,
            dropped_sailings: assembled.dropped_sailings,
        }
    }

    /// One retention purge batch, deleting trips that departed longer ago
    /// than the configured retention. Returns whether more remain.
    pub async fn run_purge(&self) -> Result<bool> {
        self.reconciler
            .purge_departed_before(Utc::now() - self.retention)
            .await
    }
}
