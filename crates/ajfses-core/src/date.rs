//! Conversions between form dates and stored instants.
//!
//! Forms carry calendar dates as `YYYY-MM-DD` in the viewer's timezone; the
//! backend stores instants as ISO-8601 UTC strings with millisecond precision.
//! Empty input maps to empty output in both directions.
//!
//! A local midnight converted to UTC and rendered again by a viewer with a
//! different offset can land on a neighbouring calendar day. The conversion
//! is defined per call, not as a round trip across viewers.

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};

const LOCAL_DATE_FORMAT: &str = "%Y-%m-%d";
const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Converts a local `YYYY-MM-DD` into a canonical UTC instant, using the
/// machine's timezone.
///
/// # Errors
/// Returns an error if `local` is not a valid calendar date.
pub fn to_canonical(local: &str) -> Result<String> {
    to_canonical_in(local, &Local)
}

/// Converts a local `YYYY-MM-DD` into a canonical UTC instant, interpreting
/// the date as midnight in `tz`.
///
/// # Errors
/// Returns an error if `local` is not a valid calendar date.
pub fn to_canonical_in<Tz: TimeZone>(local: &str, tz: &Tz) -> Result<String> {
    let local = local.trim();
    if local.is_empty() {
        return Ok(String::new());
    }

    let date = NaiveDate::parse_from_str(local, LOCAL_DATE_FORMAT)
        .with_context(|| format!("Invalid date '{local}', expected YYYY-MM-DD"))?;
    let midnight = date.and_time(NaiveTime::MIN);

    // Ambiguous midnights take the earlier instant; midnights skipped by a
    // DST jump resolve to the first instant an hour later.
    let instant = tz
        .from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            tz.from_local_datetime(&(midnight + TimeDelta::hours(1)))
                .earliest()
        })
        .ok_or_else(|| anyhow!("Local midnight of {local} does not exist in this timezone"))?;

    Ok(instant
        .with_timezone(&Utc)
        .format(CANONICAL_FORMAT)
        .to_string())
}

/// Renders a canonical instant as `YYYY-MM-DD` in the machine's timezone.
///
/// # Errors
/// Returns an error if `instant` is not an ISO-8601 timestamp or date.
pub fn to_local_date_string(instant: &str) -> Result<String> {
    to_local_date_string_in(instant, &Local)
}

/// Renders a canonical instant as `YYYY-MM-DD` in `tz`.
///
/// A bare `YYYY-MM-DD` is read as UTC midnight.
///
/// # Errors
/// Returns an error if `instant` is not an ISO-8601 timestamp or date.
pub fn to_local_date_string_in<Tz: TimeZone>(instant: &str, tz: &Tz) -> Result<String> {
    let instant = instant.trim();
    if instant.is_empty() {
        return Ok(String::new());
    }

    let utc = parse_instant(instant)?;
    Ok(utc
        .with_timezone(tz)
        .date_naive()
        .format(LOCAL_DATE_FORMAT)
        .to_string())
}

fn parse_instant(instant: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(instant) {
        return Ok(parsed.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(instant, LOCAL_DATE_FORMAT)
        .with_context(|| format!("Invalid instant '{instant}', expected ISO-8601"))?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}
