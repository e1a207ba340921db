use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use puget_core::{MemStore, StaticAbbrevLookup, StaticCrossingTimes};
use scraper::{Config, ScheduleReconciler};
use wsf_rs::{Route, RouteId};

pub fn config() -> Config {
    Config {
        retry_delay: std::time::Duration::from_millis(10),
        day_delete_batch_size: 2,
        purge_batch_size: 2,
        retention: std::time::Duration::from_secs(3 * 24 * 60 * 60),
    }
}

pub fn reconciler(store: Arc<MemStore>) -> ScheduleReconciler {
    ScheduleReconciler::new(store, &config())
}

pub fn lookup() -> StaticAbbrevLookup {
    StaticAbbrevLookup::new(
        [("Walla Walla".to_owned(), "WAL".to_owned())],
        [
            ("Mukilteo".to_owned(), "MUK".to_owned()),
            ("Clinton".to_owned(), "CLI".to_owned()),
            ("Kingston".to_owned(), "KIN".to_owned()),
        ],
    )
}

pub fn crossings() -> StaticCrossingTimes {
    StaticCrossingTimes::new([
        (("muk-cl".to_owned(), "MUK".to_owned(), "CLI".to_owned()), 15),
        (("muk-cl".to_owned(), "CLI".to_owned(), "MUK".to_owned()), 15),
    ])
}

pub fn route(id: i32, abbrev: &str) -> Route {
    Route {
        route_id: RouteId::new(id),
        route_abbrev: abbrev.to_owned(),
        description: abbrev.to_owned(),
        region_id: None,
    }
}

pub fn trip_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 8, 28).unwrap()
}

/// Pacific wall-clock time on the test sailing day (PDT, UTC-7).
pub fn pacific(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 8, 28, hour + 7, minute, 0).unwrap()
}
