use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    /// How often the orchestrator polls the position feed.
    #[serde(with = "humantime_serde", default = "default_tick_interval")]
    pub tick_interval: Duration,
    pub wsf: wsf_rs::ApiConfig,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/processors").required(false))
            .add_source(Environment::with_prefix("PUGET_PROCESSORS").separator("__"))
            .build()?
            .try_deserialize()
    }
}

fn default_tick_interval() -> Duration {
    Duration::from_secs(5)
}
