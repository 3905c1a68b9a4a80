//! ISO 8601 week numbers.
//!
//! Week numbering is independent of [`crate::boundary::WeekStartDay`]: it
//! always uses the fixed ISO rule — weeks start on Monday, and week 1 is the
//! first week with at least four days in the year. Early January days can
//! therefore belong to week 52 or 53 of the previous year, and late December
//! days to week 1 of the next.

use chrono::{DateTime, Datelike, Utc};

use crate::convert::parse_timezone;
use crate::error::Result;

/// ISO 8601 week number of the UTC calendar day of `t`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use weekbound::utc_week_number;
///
/// // January 1, 2024 is a Monday and opens ISO week 1.
/// let jan1 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(utc_week_number(jan1), 1);
/// ```
pub fn utc_week_number(t: DateTime<Utc>) -> u32 {
    t.iso_week().week()
}

/// ISO 8601 week number of the *local* calendar day of `utc` in `timezone`.
///
/// Despite taking a UTC instant, the computation is timezone-local: the
/// instant is converted to the zone's wall clock first and the week number
/// is taken from that local day. Near midnight the result can differ from
/// [`utc_week_number`] of the same instant.
///
/// # Errors
///
/// Returns [`crate::WeekError::InvalidTimezone`] if `timezone` is not a
/// valid IANA name.
pub fn tz_week_number(utc: DateTime<Utc>, timezone: &str) -> Result<u32> {
    let tz = parse_timezone(timezone)?;
    Ok(utc.with_timezone(&tz).iso_week().week())
}

// ── Tests ───────────────────────────────────────────────────────────────────
