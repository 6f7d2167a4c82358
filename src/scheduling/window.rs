use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeDelta, Utc};

use super::ValidationError;

pub const DEFAULT_DURATION_MINUTES: i64 = 30;
pub const MIN_DURATION_MINUTES: i64 = 1;
pub const MAX_DURATION_MINUTES: i64 = 24 * 60;

/// A parsed appointment slot, normalized to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_minutes: i64,
}

impl TimeWindow {
    pub fn new(start: &str, duration_minutes: i64) -> Result<Self, ValidationError> {
        if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&duration_minutes) {
            return Err(ValidationError::InvalidDuration(duration_minutes));
        }

        let parsed = parse_timestamp(start)?;
        let end = parsed
            .checked_add_signed(TimeDelta::minutes(duration_minutes))
            .ok_or_else(|| ValidationError::MalformedTimestamp(start.to_string()))?;
        let start = parsed;

        Ok(TimeWindow {
            start,
            end,
            duration_minutes,
        })
    }

    pub fn start_rfc3339(&self) -> String {
        render_timestamp(self.start)
    }

    pub fn end_rfc3339(&self) -> String {
        render_timestamp(self.end)
    }
}

/// End of an appointment starting at `start` and lasting `duration_minutes`,
/// rendered as an ISO 8601 UTC string with a trailing `Z`.
pub fn compute_end(start: &str, duration_minutes: i64) -> Result<String, ValidationError> {
    TimeWindow::new(start, duration_minutes).map(|window| window.end_rfc3339())
}

/// Accepts RFC 3339 (`Z` or a numeric offset), minute-precision date-times
/// with or without an offset, and bare dates. Values without an offset are
/// taken as UTC; bare dates mean midnight.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, ValidationError> {
    // chrono skips leading whitespace before numeric fields
    if input.trim() != input {
        return Err(ValidationError::MalformedTimestamp(input.to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    let with_offset = input.replacen('Z', "+00:00", 1);
    if let Ok(dt) = DateTime::parse_from_str(&with_offset, "%Y-%m-%dT%H:%M%:z") {
        return Ok(dt.with_timezone(&Utc));
    }

    input
        .parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M"))
        .or_else(|_| {
            input
                .parse::<NaiveDate>()
                .map(|date| date.and_time(NaiveTime::default()))
        })
        .map(|naive| naive.and_utc())
        .map_err(|_| ValidationError::MalformedTimestamp(input.to_string()))
}

pub fn render_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
