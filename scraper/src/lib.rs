#![deny(warnings)]
#![deny(rust_2018_idioms)]

use std::time::Duration;

use serde::Deserialize;

pub mod error;
mod reconciler;
mod schedule;
mod wsf;

pub use error::*;
pub use reconciler::*;
pub use schedule::*;
pub use wsf::*;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Fixed delay before the single retry of a schedule feed call.
    #[serde(with = "humantime_serde", default = "default_retry_delay")]
    pub retry_delay: Duration,
    /// Upper bound on one day-replacement delete transaction.
    #[serde(default = "default_day_delete_batch_size")]
    pub day_delete_batch_size: u32,
    /// Upper bound on one retention purge transaction.
    #[serde(default = "default_purge_batch_size")]
    pub purge_batch_size: u32,
    /// How long departed trips are kept before the purge job removes them.
    #[serde(with = "humantime_serde", default = "default_retention")]
    pub retention: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            retry_delay: default_retry_delay(),
            day_delete_batch_size: default_day_delete_batch_size(),
            purge_batch_size: default_purge_batch_size(),
            retention: default_retention(),
        }
    }
}

fn default_retry_delay() -> Duration {
    Duration::from_secs(5)
}

fn default_day_delete_batch_size() -> u32 {
    200
}

fn default_purge_batch_size() -> u32 {
    500
}

fn default_retention() -> Duration {
    // Three days covers every UI view that looks backwards.
    Duration::from_secs(3 * 24 * 60 * 60)
}
