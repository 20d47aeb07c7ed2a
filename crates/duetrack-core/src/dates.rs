//! Due-date normalization for imported rows.
//!
//! Spreadsheet exports carry due dates in two shapes: `M/D/YYYY` text
//! and numeric day-serials counted from the 1900 epoch (including the
//! fictitious 1900-02-29 the format inherited from Lotus 1-2-3). Both
//! normalize to a [`NaiveDate`]; anything else is rejected with
//! [`DateError::Malformed`] rather than passed through.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// Serial 60 is the phantom 1900-02-29; serials above it are shifted
/// by one day relative to the real calendar.
const LEAP_BUG_SERIAL: i64 = 60;

/// A due date as it appears in source data, before normalization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawDate {
    /// Numeric spreadsheet day-serial, e.g. `46088`.
    Serial(f64),
    /// Textual `M/D/YYYY`, e.g. `"3/7/2026"`.
    Text(String),
}

/// Normalize a raw due date to a calendar date.
///
/// `"3/7/2026"` becomes 2026-03-07. Serials decode with the 1900
/// leap-bug offset; serial 60 itself has no real calendar date and is
/// rejected. Calendrically invalid text (e.g. `"2/30/2026"`) is
/// rejected as well.
///
/// # Errors
/// Returns [`DateError::Malformed`] for any input outside the two
/// accepted shapes.
pub fn normalize(raw: &RawDate) -> Result<NaiveDate, DateError> {
    match raw {
        RawDate::Text(s) => parse_mdy(s),
        RawDate::Serial(n) => decode_serial(*n),
    }
}

fn malformed(input: impl ToString) -> DateError {
    DateError::Malformed {
        input: input.to_string(),
    }
}

/// Parse `M/D/YYYY` (month and day may be unpadded).
fn parse_mdy(s: &str) -> Result<NaiveDate, DateError> {
    let mut parts = s.trim().splitn(3, '/');
    let (month, day, year) = match (parts.next(), parts.next(), parts.next()) {
        (Some(m), Some(d), Some(y)) => (m, d, y),
        _ => return Err(malformed(s)),
    };
    let month: u32 = month.parse().map_err(|_| malformed(s))?;
    let day: u32 = day.parse().map_err(|_| malformed(s))?;
    let year: i32 = year.parse().map_err(|_| malformed(s))?;
    // YYYY is four digits; anything outside breaks the store's TEXT
    // date ordering.
    if !(0..=9999).contains(&year) {
        return Err(malformed(s));
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| malformed(s))
}

/// Decode a 1900-epoch day-serial.
///
/// Serial 1 is 1900-01-01. Serials below 60 count from 1899-12-31;
/// serials above 60 count from 1899-12-30, absorbing the phantom leap
/// day.
fn decode_serial(n: f64) -> Result<NaiveDate, DateError> {
    if !n.is_finite() || n.fract() != 0.0 || n < 1.0 || n > 2_958_465.0 {
        return Err(malformed(n));
    }
    let serial = n as i64;
    if serial == LEAP_BUG_SERIAL {
        return Err(malformed(n));
    }
    let base = if serial < LEAP_BUG_SERIAL {
        NaiveDate::from_ymd_opt(1899, 12, 31)
    } else {
        NaiveDate::from_ymd_opt(1899, 12, 30)
    };
    base.and_then(|b| b.checked_add_days(chrono::Days::new(serial as u64)))
        .ok_or_else(|| malformed(n))
}
