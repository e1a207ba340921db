use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::America::Los_Angeles;
use chrono_tz::Tz;

/// The ferry operator's "sailing day" is a US Pacific calendar concept, so
/// every calendar rendering goes through this zone rather than UTC.
pub fn pacific(time: DateTime<Utc>) -> DateTime<Tz> {
    time.with_timezone(&Los_Angeles)
}

pub fn pacific_date(time: DateTime<Utc>) -> NaiveDate {
    pacific(time).date_naive()
}

/// Rounds up to the next whole minute. A time already on a minute boundary
/// is left unchanged.
pub fn ceil_to_minute(time: DateTime<Utc>) -> DateTime<Utc> {
    let secs = time.timestamp();
    let rem = secs.rem_euclid(60);
    if rem == 0 && time.timestamp_subsec_nanos() == 0 {
        time
    } else {
        DateTime::from_timestamp(secs - rem + 60, 0).unwrap_or(time)
    }
}
