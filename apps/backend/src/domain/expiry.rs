//! Sort key for `expiredDateTime`.
//!
//! Clients submit the expiry however their form produced it: a unix
//! timestamp (seconds or milliseconds), an RFC 3339 string, an HTML
//! `datetime-local` value or a bare date. The raw value is stored as-is;
//! this module derives a comparable unix-millisecond key from it.

use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Numbers below this magnitude are unix seconds, anything larger is
/// unix milliseconds. 10^11 seconds is roughly the year 5138.
pub const SECONDS_CUTOFF: f64 = 1e11;

/// Derive the unix-millisecond sort key for a raw expiry value.
///
/// Returns `None` for null, booleans, objects, arrays and unparseable
/// strings; such records sort after every record with a key.
pub fn sort_key(raw: &Value) -> Option<i64> {
    match raw {
        Value::Number(n) => n.as_f64().and_then(millis_from_number),
        Value::String(s) => parse_str(s.trim()),
        _ => None,
    }
}

fn millis_from_number(n: f64) -> Option<i64> {
    if !n.is_finite() {
        return None;
    }
    let ms = if n.abs() < SECONDS_CUTOFF { n * 1000.0 } else { n };
    if ms.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(ms.round() as i64)
}

fn parse_str(s: &str) -> Option<i64> {
    if s.is_empty() {
        return None;
    }

    if let Ok(n) = s.parse::<f64>() {
        return millis_from_number(n);
    }

    if let Ok(dt) = OffsetDateTime::parse(s, &Rfc3339) {
        return Some(to_millis(dt));
    }

    let minutes = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    let seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    for fmt in [seconds, minutes] {
        if let Ok(dt) = PrimitiveDateTime::parse(s, fmt) {
            return Some(to_millis(dt.assume_utc()));
        }
    }

    Date::parse(s, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|d| to_millis(d.midnight().assume_utc()))
}

fn to_millis(dt: OffsetDateTime) -> i64 {
    (dt.unix_timestamp_nanos() / 1_000_000) as i64
}
