//! Date parsing for slot payloads.
//!
//! Slot dates arrive as strings from two kinds of callers: the timetable
//! import, which sends `DD/MM/YYYY`, and everything else, which sends
//! ISO-8601. All values are normalised to UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::errors::{AbsenceError, AbsenceResult};

/// Parses a slot date, dispatching on the presence of a `/`.
///
/// * `DD/MM/YYYY` resolves to midnight UTC of that day. The three parts must
///   be numeric and form a real calendar date; `31/02/2024` is rejected.
/// * Anything else is handed to [`parse_timestamp`].
///
/// Empty input is rejected before any other check.
pub fn parse_slot_date(input: &str) -> AbsenceResult<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return Err(AbsenceError::InvalidDate(
            "date is missing or empty".to_string(),
        ));
    }

    if input.contains('/') {
        parse_day_month_year(input)
    } else {
        parse_timestamp(input)
    }
}

/// Parses an ISO-8601 date or timestamp.
///
/// Accepted shapes, in order:
///
/// 1. RFC 3339 with an offset (`2024-03-15T08:00:00+01:00`, `...Z`)
/// 2. a naive date-time (`2024-03-15T08:00:00`, optional fraction), read as UTC
/// 3. a bare date (`2024-03-15`), read as midnight UTC
pub fn parse_timestamp(input: &str) -> AbsenceResult<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }

    if let Ok(day) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(start_of_day(day));
    }

    Err(AbsenceError::InvalidDate(format!(
        "'{input}' is not an ISO-8601 date"
    )))
}

/// Returns the inclusive `[00:00:00.000, 23:59:59.999]` UTC bounds of the
/// calendar day named by `input`.
///
/// `input` is normally `YYYY-MM-DD`; a full timestamp selects its UTC day.
pub fn day_bounds(input: &str) -> AbsenceResult<(DateTime<Utc>, DateTime<Utc>)> {
    let day = parse_timestamp(input)?.date_naive();
    let end = day
        .and_hms_milli_opt(23, 59, 59, 999)
        .ok_or_else(|| AbsenceError::InvalidDate(format!("'{input}' has no end of day")))?
        .and_utc();
    Ok((start_of_day(day), end))
}

fn parse_day_month_year(input: &str) -> AbsenceResult<DateTime<Utc>> {
    let parts: Vec<&str> = input.split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(AbsenceError::InvalidDate(format!(
            "'{input}' does not match DD/MM/YYYY"
        )));
    };

    let invalid = || AbsenceError::InvalidDate(format!("'{input}' is not a calendar date"));

    let day: u32 = day.trim().parse().map_err(|_| invalid())?;
    let month: u32 = month.trim().parse().map_err(|_| invalid())?;
    let year: i32 = year.trim().parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day)
        .map(start_of_day)
        .ok_or_else(invalid)
}

fn start_of_day(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}
