use chrono::{DateTime, Utc};

/// The feeds render instants in the WCF style, `/Date(1693227600000-0700)/`.
/// The millisecond value is the UTC epoch offset; the zone suffix is
/// redundant for an instant and is ignored.
pub(crate) fn parse_wcf_date(value: &str) -> Option<DateTime<Utc>> {
    let inner = value.strip_prefix("/Date(")?.strip_suffix(")/")?;
    if inner.is_empty() {
        return None;
    }
    // A sign at position zero belongs to a pre-epoch millisecond value, not
    // to the zone suffix.
    let millis = match inner[1..].find(['+', '-']) {
        Some(i) => &inner[..i + 1],
        None => inner,
    };
    DateTime::from_timestamp_millis(millis.parse().ok()?)
}

pub(crate) fn format_wcf_date(value: &DateTime<Utc>) -> String {
    format!("/Date({}+0000)/", value.timestamp_millis())
}

pub(crate) mod wcf_date {
    use chrono::{DateTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_wcf_date, parse_wcf_date};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = String::deserialize(deserializer)?;
        parse_wcf_date(&v)
            .ok_or_else(|| D::Error::custom(format!("invalid WCF timestamp: '{v}'")))
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_wcf_date(value))
    }
}

pub(crate) mod opt_wcf_date {
    use chrono::{DateTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_wcf_date, parse_wcf_date};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(v) => parse_wcf_date(&v)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid WCF timestamp: '{v}'"))),
        }
    }

    pub fn serialize<S>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_some(&format_wcf_date(v)),
            None => serializer.serialize_none(),
        }
    }
}
