use async_trait::async_trait;
use puget_core::{CoreResult, LocationFeed};
use wsf_rs::{VesselLocation, WsfClient};

/// The production position feed. No retry here: the next tick is never more
/// than a few seconds away.
pub struct WsfLocationSource {
    client: WsfClient,
}

impl WsfLocationSource {
    pub fn new(client: WsfClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LocationFeed for WsfLocationSource {
    async fn vessel_locations(&self) -> CoreResult<Vec<VesselLocation>> {
        Ok(self.client.vessel_locations().await?)
    }
}
