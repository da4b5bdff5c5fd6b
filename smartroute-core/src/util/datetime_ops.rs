use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDateTime, TimeZone, Timelike,
};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

pub const APP_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const ISO_NAIVE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// hour of the day on the wall clock of the provided time, in [0, 23]
pub fn hour_of_day<T: Timelike>(time: &T) -> u32 {
    time.hour()
}

/// day of the week on the wall clock of the provided time, with Monday = 0 and Sunday = 6
pub fn weekday_index<T: Datelike>(time: &T) -> u32 {
    time.weekday().num_days_from_monday()
}

/// true for Monday through Friday
pub fn is_weekday(weekday: u32) -> bool {
    weekday <= 4
}

/// parses a wall-clock timestamp. RFC 3339 strings are accepted and reduced to their
/// local wall-clock time; otherwise either `YYYY-MM-DD HH:MM:SS` or
/// `YYYY-MM-DDTHH:MM:SS` (optionally with fractional seconds) is expected.
pub fn parse_naive_datetime(value: &str) -> Result<NaiveDateTime, String> {
    let trimmed = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(trimmed, APP_DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, ISO_NAIVE_DATETIME_FORMAT))
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f"))
        .map_err(|e| format!("invalid datetime '{value}': {e}"))
}

/// parses a departure time. RFC 3339 strings keep their offset, naive strings are
/// interpreted in the local time zone of this process.
pub fn parse_departure_time(value: &str) -> Result<DateTime<FixedOffset>, String> {
    let trimmed = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt);
    }
    let naive = parse_naive_datetime(trimmed)?;
    local_from_naive(&naive)
}

/// attaches the local time zone to a naive wall-clock time. during DST transitions the
/// earliest valid instant is used; times that do not exist locally are rejected.
pub fn local_from_naive(naive: &NaiveDateTime) -> Result<DateTime<FixedOffset>, String> {
    Local
        .from_local_datetime(naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
        .ok_or_else(|| format!("datetime '{naive}' does not exist in the local time zone"))
}

/// the current time with the local offset
pub fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

pub fn deserialize_naive_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let date_str: String = String::deserialize(deserializer)?;
    parse_naive_datetime(&date_str).map_err(D::Error::custom)
}

pub fn deserialize_optional_departure_time<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let date_str: Option<String> = Option::deserialize(deserializer)?;
    match date_str {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_departure_time(&s).map(Some).map_err(D::Error::custom),
    }
}
