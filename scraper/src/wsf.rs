use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use puget_core::{retry_once, CoreResult, ScheduleFeed};
use wsf_rs::{Route, RouteId, RouteSchedule, WsfClient};

/// The production schedule feed: the WSF REST client with the configured
/// single-retry policy on every call.
pub struct WsfSource {
    client: WsfClient,
    retry_delay: Duration,
}

impl WsfSource {
    pub fn new(client: WsfClient, retry_delay: Duration) -> Self {
        Self {
            client,
            retry_delay,
        }
    }
}

#[async_trait]
impl ScheduleFeed for WsfSource {
    async fn routes_by_date(&self, date: NaiveDate) -> CoreResult<Vec<Route>> {
        Ok(retry_once(self.retry_delay, || self.client.routes_by_trip_date(date)).await?)
    }

    async fn schedule_by_date_and_route(
        &self,
        date: NaiveDate,
        route_id: RouteId,
    ) -> CoreResult<RouteSchedule> {
        Ok(retry_once(self.retry_delay, || {
            self.client.schedule_by_trip_date_and_route(date, route_id)
        })
        .await?)
    }
}
