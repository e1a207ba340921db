use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::deserialize_utils::{opt_wcf_date, wcf_date};

use super::RouteId;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteSchedule {
    #[serde(rename = "ScheduleID")]
    pub schedule_id: i32,
    #[serde(rename = "ScheduleRouteID")]
    pub schedule_route_id: Option<i32>,
    #[serde(rename = "RouteID")]
    pub route_id: RouteId,
    #[serde(default)]
    pub schedule_name: String,
    pub terminal_combos: Vec<TerminalCombo>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TerminalCombo {
    pub departing_terminal_name: String,
    pub arriving_terminal_name: String,
    #[serde(default)]
    pub sailing_notes: String,
    #[serde(default)]
    pub annotations: Vec<String>,
    pub times: Vec<SailingTime>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SailingTime {
    pub vessel_name: String,
    #[serde(with = "wcf_date")]
    pub departing_time: DateTime<Utc>,
    #[serde(default, with = "opt_wcf_date")]
    pub arriving_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub annotation_indexes: Vec<usize>,
}
