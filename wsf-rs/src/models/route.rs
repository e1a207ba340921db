use serde::{Deserialize, Serialize};

use super::RouteId;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Route {
    #[serde(rename = "RouteID")]
    pub route_id: RouteId,
    pub route_abbrev: String,
    pub description: String,
    #[serde(rename = "RegionID", default)]
    pub region_id: Option<i32>,
}
