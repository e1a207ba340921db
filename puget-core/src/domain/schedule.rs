use std::fmt::{self, Display};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumString};
use wsf_rs::RouteId;

use crate::pacific::{pacific, pacific_date};

/// Stable composite identity of one scheduled sailing, also the join key
/// between schedule and live data:
/// `vessel--YYYY-MM-DD--HH:MM--departing-arriving`, date and time rendered
/// in the US Pacific calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripKey(String);

impl TripKey {
    /// Returns `None` when the vessel, departing terminal, or departure time
    /// is missing. Callers must treat that as "cannot identify trip" and
    /// drop or error.
    pub fn generate(
        vessel_abbrev: Option<&str>,
        departing_terminal_abbrev: Option<&str>,
        arriving_terminal_abbrev: Option<&str>,
        departing_time: Option<DateTime<Utc>>,
    ) -> Option<TripKey> {
        let vessel = non_empty(vessel_abbrev)?;
        let departing = non_empty(departing_terminal_abbrev)?;
        let arriving = non_empty(arriving_terminal_abbrev).unwrap_or("");
        let local = pacific(departing_time?);

        Some(TripKey(format!(
            "{vessel}--{}--{}--{departing}-{arriving}",
            local.format("%Y-%m-%d"),
            local.format("%H:%M"),
        )))
    }

    /// The key a raw position report resolves to, from the trip fields the
    /// feed attaches to every ping.
    pub fn for_location(location: &wsf_rs::VesselLocation) -> Option<TripKey> {
        TripKey::generate(
            Some(&location.vessel_abbrev),
            location.departing_terminal_abbrev.as_deref(),
            location.arriving_terminal_abbrev.as_deref(),
            location.scheduled_departure,
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl Display for TripKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The operator's local-Pacific operational day, `YYYY-MM-DD`. May not align
/// with midnight-to-midnight UTC.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SailingDay(String);

impl SailingDay {
    pub fn new(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    pub fn from_instant(time: DateTime<Utc>) -> Self {
        Self::new(pacific_date(time))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SailingDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    StrumDisplay,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TripType {
    /// Straight between two terminals with no intermediate stop.
    #[default]
    Direct,
    /// An alternate same-departure option involving an intermediate leg,
    /// superseded by the direct trip to the expected next terminal.
    Indirect,
}

/// One scheduled sailing leg. Created by the sync pipeline from the external
/// feed, replaced wholesale on each re-sync of its route and day, purged once
/// its departure is sufficiently in the past.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTrip {
    pub key: TripKey,
    pub vessel_abbrev: String,
    pub departing_terminal_abbrev: String,
    pub arriving_terminal_abbrev: String,
    pub departing_time: DateTime<Utc>,
    pub arriving_time: Option<DateTime<Utc>>,
    pub sailing_notes: String,
    pub annotations: Vec<String>,
    pub route_id: RouteId,
    pub route_abbrev: String,
    pub sailing_day: SailingDay,
    pub trip_type: TripType,
    pub prev_key: Option<TripKey>,
    pub next_key: Option<TripKey>,
    pub next_departing_time: Option<DateTime<Utc>>,
    pub est_arrive_next: Option<DateTime<Utc>>,
    pub est_arrive_curr: Option<DateTime<Utc>>,
}

/// Storage representation of a [`ScheduledTrip`]. The document store stamps
/// `_id` and `_creationTime` on read; both are excluded from any equality
/// comparison by converting back to the domain value first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredScheduledTrip {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_creationTime")]
    pub creation_time: DateTime<Utc>,
    #[serde(flatten)]
    pub trip: ScheduledTrip,
}

impl StoredScheduledTrip {
    pub fn new(id: String, creation_time: DateTime<Utc>, trip: ScheduledTrip) -> Self {
        Self {
            id,
            creation_time,
            trip,
        }
    }

    pub fn into_domain(self) -> ScheduledTrip {
        self.trip
    }
}
