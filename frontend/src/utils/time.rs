use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de::Error as _, Deserialize, Deserializer};

/// Raw temporal value as the backend may send it: text or epoch milliseconds.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTime {
    Text(String),
    Millis(i64),
}

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses RFC 3339, naive ISO datetimes and bare dates, keeping the wall clock as written.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_local());
    }
    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .or_else(|| parse_timestamp(raw).map(|ts| ts.date()))
}

fn millis_to_timestamp(millis: i64) -> Option<NaiveDateTime> {
    DateTime::<chrono::Utc>::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
}

pub fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    match RawTime::deserialize(deserializer)? {
        RawTime::Text(raw) => {
            parse_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: {}", raw)))
        }
        RawTime::Millis(millis) => millis_to_timestamp(millis)
            .map(|ts| ts.date())
            .ok_or_else(|| D::Error::custom(format!("invalid epoch millis: {}", millis))),
    }
}

/// Missing, null or unparsable timestamps become `None`.
pub fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTime>::deserialize(deserializer).unwrap_or(None);
    Ok(match raw {
        Some(RawTime::Text(text)) => parse_timestamp(&text),
        Some(RawTime::Millis(millis)) => millis_to_timestamp(millis),
        None => None,
    })
}

/// `July 27, 2025`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn format_long_timestamp(timestamp: Option<NaiveDateTime>) -> String {
    timestamp
        .map(|ts| format_long_date(ts.date()))
        .unwrap_or_default()
}
