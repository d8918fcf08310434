// CWMP dateTime codec
//
// CWMP uses ISO 8601 and expects UTC, written with a trailing 'Z'.

use crate::error::{CoreError, CoreResult};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

/// The CWMP "Unknown Time" value
pub const UNKNOWN_TIME: &str = "0001-01-01T00:00:00Z";

/// Format a timestamp the way CWMP expects.
///
/// `None` gives the Unknown Time. Fractional seconds are written with six
/// digits, and only when non-zero. UTC is written as `Z`, any other offset
/// as `+HH:MM`.
pub fn format(dt: Option<&DateTime<FixedOffset>>) -> String {
    let Some(dt) = dt else {
        return UNKNOWN_TIME.to_string();
    };

    let utc = dt.offset().local_minus_utc() == 0;
    let fractional = dt.timestamp_subsec_micros() != 0;
    let pattern = match (utc, fractional) {
        (true, true) => "%Y-%m-%dT%H:%M:%S%.6fZ",
        (true, false) => "%Y-%m-%dT%H:%M:%SZ",
        (false, true) => "%Y-%m-%dT%H:%M:%S%.6f%:z",
        (false, false) => "%Y-%m-%dT%H:%M:%S%:z",
    };
    dt.format(pattern).to_string()
}

pub fn format_utc(dt: &DateTime<Utc>) -> String {
    format(Some(&dt.fixed_offset()))
}

/// Format seconds since the Unix epoch, keeping microsecond precision.
///
/// Zero means "never set" to the agent and renders as the Unknown Time.
pub fn format_timestamp(secs: f64) -> String {
    if secs == 0.0 {
        return UNKNOWN_TIME.to_string();
    }

    let mut whole = secs.floor();
    let mut micros = ((secs - whole) * 1_000_000.0).round() as u32;
    if micros >= 1_000_000 {
        whole += 1.0;
        micros = 0;
    }

    match DateTime::from_timestamp(whole as i64, micros * 1_000) {
        Some(dt) => format_utc(&dt),
        None => UNKNOWN_TIME.to_string(),
    }
}

/// Parse `YYYY-MM-DDTHH:MM:SSZ`, with an optional fraction of 1 to 6 digits
pub fn parse(text: &str) -> CoreResult<DateTime<Utc>> {
    if !fraction_fits_micros(text) {
        return Err(CoreError::InvalidDate(text.to_string()));
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.fZ")
        .map(|naive| naive.and_utc())
        .map_err(|_| CoreError::InvalidDate(text.to_string()))
}

fn fraction_fits_micros(text: &str) -> bool {
    match text.strip_suffix('Z').and_then(|t| t.rsplit_once('.')) {
        Some((_, digits)) => (1..=6).contains(&digits.len()),
        None => true,
    }
}

pub fn is_valid(text: &str) -> bool {
    parse(text).is_ok()
}
