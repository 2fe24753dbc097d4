//! Date conversion commands.

use ajfses_core::date;
use anyhow::{Context, Result};
use chrono::FixedOffset;

pub fn to_utc(local: &str, offset: Option<&str>) -> Result<()> {
    let canonical = match parse_offset(offset)? {
        Some(tz) => date::to_canonical_in(local, &tz)?,
        None => date::to_canonical(local)?,
    };
    println!("{canonical}");
    Ok(())
}

pub fn to_local(instant: &str, offset: Option<&str>) -> Result<()> {
    let local = match parse_offset(offset)? {
        Some(tz) => date::to_local_date_string_in(instant, &tz)?,
        None => date::to_local_date_string(instant)?,
    };
    println!("{local}");
    Ok(())
}

/// Parses `±HH:MM`; `Z` means UTC.
fn parse_offset(offset: Option<&str>) -> Result<Option<FixedOffset>> {
    let Some(offset) = offset.map(str::trim) else {
        return Ok(None);
    };
    if offset.eq_ignore_ascii_case("z") {
        return Ok(FixedOffset::east_opt(0));
    }
    let tz = offset
        .parse::<FixedOffset>()
        .with_context(|| format!("Invalid offset '{offset}', expected ±HH:MM"))?;
    Ok(Some(tz))
}
