//! String-level week reports.
//!
//! Takes RFC 3339 datetime strings and IANA timezone names and returns a
//! serializable summary of the surrounding week, for callers that work at
//! the wire level rather than with chrono values directly.

use chrono::Datelike;
use serde::Serialize;

use crate::boundary::{end_of_tz_week, start_of_tz_week, WeekStartDay};
use crate::convert::{format_utc_offset, is_dst_active, parse_rfc3339, parse_timezone};
use crate::error::Result;
use crate::number::tz_week_number;

/// The week surrounding an instant, aligned to a timezone.
#[derive(Debug, Clone, Serialize)]
pub struct WeekSummary {
    /// Start of the week in UTC (RFC 3339).
    pub start_utc: String,
    /// End of the week in UTC (RFC 3339), one nanosecond before the next week.
    pub end_utc: String,
    /// Start of the week in the target timezone (RFC 3339 with offset).
    pub start_local: String,
    /// End of the week in the target timezone (RFC 3339 with offset).
    pub end_local: String,
    /// The IANA timezone name the week is aligned to.
    pub timezone: String,
    /// The UTC offset at the start of the week (e.g., "-05:00").
    pub utc_offset: String,
    /// Whether Daylight Saving Time is active at the start of the week.
    pub dst_active: bool,
    /// ISO 8601 week number of the local day of the input instant.
    pub week_number: u32,
    /// ISO 8601 week-year the week number belongs to.
    pub week_year: i32,
}

/// Summarize the week containing `datetime`, aligned to `timezone`.
///
/// # Arguments
///
/// * `datetime` — An RFC 3339 datetime string (e.g., `"2024-03-14T15:30:00Z"`)
/// * `timezone` — An IANA timezone name (e.g., `"America/New_York"`)
/// * `week_start` — Which day begins the week
///
/// # Errors
///
/// Returns [`crate::WeekError::InvalidDatetime`] if the datetime string
/// cannot be parsed or the local week boundary is ambiguous at a DST
/// transition, [`crate::WeekError::InvalidTimezone`] for an unresolvable
/// timezone, or [`crate::WeekError::OutOfRange`] on arithmetic overflow.
///
/// # Examples
///
/// ```
/// use weekbound::{summarize_week, WeekStartDay};
///
/// let week = summarize_week("2024-03-14T15:30:00Z", "UTC", WeekStartDay::Monday).unwrap();
/// assert_eq!(week.start_utc, "2024-03-11T00:00:00+00:00");
/// assert_eq!(week.week_number, 11);
/// ```
pub fn summarize_week(
    datetime: &str,
    timezone: &str,
    week_start: WeekStartDay,
) -> Result<WeekSummary> {
    let utc = parse_rfc3339(datetime)?;
    let tz = parse_timezone(timezone)?;

    let start_utc = start_of_tz_week(utc, timezone, week_start)?;
    let end_utc = end_of_tz_week(utc, timezone, week_start)?;
    let start_local = start_utc.with_timezone(&tz);
    let end_local = end_utc.with_timezone(&tz);
    let local = utc.with_timezone(&tz);

    Ok(WeekSummary {
        start_utc: start_utc.to_rfc3339(),
        end_utc: end_utc.to_rfc3339(),
        start_local: start_local.to_rfc3339(),
        end_local: end_local.to_rfc3339(),
        timezone: timezone.to_string(),
        utc_offset: format_utc_offset(&start_local),
        dst_active: is_dst_active(&start_local, &tz),
        week_number: tz_week_number(utc, timezone)?,
        week_year: local.iso_week().year(),
    })
}

// ── Tests ───────────────────────────────────────────────────────────────────
