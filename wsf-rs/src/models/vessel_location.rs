use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::deserialize_utils::{opt_wcf_date, wcf_date};

use super::VesselId;

/// One raw position report from the vessel location feed. Immutable once
/// recorded; consumers keep only the most recent report per vessel.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VesselLocation {
    #[serde(rename = "VesselID")]
    pub vessel_id: VesselId,
    pub vessel_name: String,
    pub vessel_abbrev: String,
    #[serde(default)]
    pub departing_terminal_abbrev: Option<String>,
    #[serde(default)]
    pub arriving_terminal_abbrev: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub heading: Option<f64>,
    pub in_service: bool,
    pub at_dock: bool,
    #[serde(default, with = "opt_wcf_date")]
    pub left_dock: Option<DateTime<Utc>>,
    #[serde(default, with = "opt_wcf_date")]
    pub eta: Option<DateTime<Utc>>,
    #[serde(default, with = "opt_wcf_date")]
    pub scheduled_departure: Option<DateTime<Utc>>,
    #[serde(rename = "TimeStamp", with = "wcf_date")]
    pub timestamp: DateTime<Utc>,
}
