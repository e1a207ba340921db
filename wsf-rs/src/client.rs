use std::time::Duration;

use chrono::NaiveDate;
use reqwest::{ClientBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::error::FailedRequestSnafu;
use crate::{Result, Route, RouteId, RouteSchedule, VesselLocation};

pub const DEFAULT_BASE_URL: &str = "https://www.wsdot.wa.gov/ferries/api";

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub access_code: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

#[derive(Debug, Clone)]
pub struct WsfClient {
    http_client: reqwest::Client,
    config: ApiConfig,
}

impl WsfClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http_client = ClientBuilder::new().timeout(Duration::new(60, 0)).build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// All routes with service on the given trip date.
    pub async fn routes_by_trip_date(&self, date: NaiveDate) -> Result<Vec<Route>> {
        self.get(&format!("schedule/rest/routes/{}", date.format("%Y-%m-%d")))
            .await
    }

    /// The full sailing schedule for one route on the given trip date.
    pub async fn schedule_by_trip_date_and_route(
        &self,
        date: NaiveDate,
        route_id: RouteId,
    ) -> Result<RouteSchedule> {
        self.get(&format!(
            "schedule/rest/schedule/{}/{route_id}",
            date.format("%Y-%m-%d")
        ))
        .await
    }

    /// A snapshot of every vessel's most recent position report.
    pub async fn vessel_locations(&self) -> Result<Vec<VesselLocation>> {
        self.get("vessels/rest/vessellocations").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{path}", self.config.base_url.trim_end_matches('/'));

        let response = self
            .http_client
            .get(&url)
            .query(&[("apiaccesscode", self.config.access_code.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await?;
            return FailedRequestSnafu { url, status, body }.fail();
        }

        Ok(response.json().await?)
    }
}
