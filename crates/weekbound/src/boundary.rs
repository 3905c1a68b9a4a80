//! Week-boundary computation.
//!
//! Provides pure functions for the start and end of the week containing an
//! instant, and of the weeks immediately before and after it — in UTC or
//! aligned to any IANA timezone. All functions take explicit inputs (no
//! system clock access, no hidden locale state): the day that begins a week
//! is a [`WeekStartDay`] parameter rather than an ambient setting.
//!
//! # Boundary Definition
//!
//! `start_of_week(t)` is midnight of the most recent week-start day, so
//! `start_of_week(t) <= t < start_of_week(t) + 7 days` always holds.
//! `end_of_week(t)` is exactly one nanosecond before the next week's start —
//! never a literal 23:59:59, which would silently exclude the final second
//! of the week.
//!
//! The timezone-aware functions compute the boundary on the local wall clock
//! of the target zone and return the result re-expressed in UTC. Their
//! next/previous variants shift by exactly 168 hours of UTC duration, so a
//! week spanning a DST transition is still exactly 7×24 hours long even
//! though its local wall-clock span is not.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use serde::Serialize;

use crate::convert::parse_timezone;
use crate::error::{Result, WeekError};

// ── Configurable week start ─────────────────────────────────────────────────

/// Which day begins a week.
///
/// Does **not** affect week numbering ([`crate::number`]), which always uses
/// the fixed ISO 8601 Monday-start rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum WeekStartDay {
    /// ISO 8601 standard (Monday = day 0 of the week).
    #[default]
    Monday,
    /// US/Canada convention (Sunday = day 0 of the week).
    Sunday,
}

/// How many days `weekday` is from the week-start day.
fn days_from_week_start(weekday: Weekday, week_start: WeekStartDay) -> i64 {
    match week_start {
        WeekStartDay::Monday => weekday.num_days_from_monday() as i64,
        WeekStartDay::Sunday => weekday.num_days_from_sunday() as i64,
    }
}

/// The week-start date for the week containing `date`.
fn week_start_date(date: NaiveDate, week_start: WeekStartDay) -> Result<NaiveDate> {
    let back = days_from_week_start(date.weekday(), week_start);
    date.checked_sub_signed(chrono::Duration::days(back))
        .ok_or_else(|| out_of_range("week start"))
}

fn out_of_range(what: &str) -> WeekError {
    WeekError::OutOfRange(format!("{what} exceeds the representable datetime range"))
}

/// Shift an instant by whole weeks of UTC duration (exactly 168 hours each).
fn shift_weeks(t: DateTime<Utc>, weeks: i64) -> Result<DateTime<Utc>> {
    t.checked_add_signed(chrono::Duration::weeks(weeks))
        .ok_or_else(|| out_of_range("week shift"))
}

/// Map a local wall-clock value onto an instant in `tz`.
///
/// Fails when the wall-clock value is ambiguous (DST fold) or nonexistent
/// (DST gap); the disambiguation surface is chrono's
/// [`TimeZone::from_local_datetime`], not a policy of this crate.
fn resolve_local(naive: NaiveDateTime, tz: &Tz) -> Result<DateTime<Tz>> {
    tz.from_local_datetime(&naive).single().ok_or_else(|| {
        WeekError::InvalidDatetime(format!(
            "ambiguous or nonexistent local time {naive} in {tz}"
        ))
    })
}

// ── UTC-frame operations ────────────────────────────────────────────────────

/// Midnight of the week-start day for the week containing `t`.
///
/// Truncates `t` to midnight of its own UTC calendar day, then steps back to
/// the configured week-start weekday. No timezone conversion is performed.
///
/// # Errors
///
/// Returns [`WeekError::OutOfRange`] if the date arithmetic leaves chrono's
/// representable range.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use weekbound::{start_of_week, WeekStartDay};
///
/// // Thursday afternoon belongs to the week starting the preceding Monday.
/// let t = Utc.with_ymd_and_hms(2024, 3, 14, 15, 30, 0).unwrap();
/// let start = start_of_week(t, WeekStartDay::Monday).unwrap();
/// assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap());
/// ```
pub fn start_of_week(t: DateTime<Utc>, week_start: WeekStartDay) -> Result<DateTime<Utc>> {
    let start = week_start_date(t.date_naive(), week_start)?;
    Ok(Utc.from_utc_datetime(&start.and_time(NaiveTime::MIN)))
}

/// The last representable instant of the week containing `t`.
///
/// Defined as `start_of_week(t) + 7 days − 1 ns` and derived from
/// [`start_of_week`], so the two always agree bit-for-bit.
pub fn end_of_week(t: DateTime<Utc>, week_start: WeekStartDay) -> Result<DateTime<Utc>> {
    let next = shift_weeks(start_of_week(t, week_start)?, 1)?;
    next.checked_sub_signed(chrono::Duration::nanoseconds(1))
        .ok_or_else(|| out_of_range("week end"))
}

/// `start_of_week(t) + 7 days`.
pub fn start_of_next_week(t: DateTime<Utc>, week_start: WeekStartDay) -> Result<DateTime<Utc>> {
    shift_weeks(start_of_week(t, week_start)?, 1)
}

/// `start_of_week(t) − 7 days`.
pub fn start_of_previous_week(
    t: DateTime<Utc>,
    week_start: WeekStartDay,
) -> Result<DateTime<Utc>> {
    shift_weeks(start_of_week(t, week_start)?, -1)
}

/// `end_of_week(t) + 7 days`.
pub fn end_of_next_week(t: DateTime<Utc>, week_start: WeekStartDay) -> Result<DateTime<Utc>> {
    shift_weeks(end_of_week(t, week_start)?, 1)
}

/// `end_of_week(t) − 7 days`.
pub fn end_of_previous_week(t: DateTime<Utc>, week_start: WeekStartDay) -> Result<DateTime<Utc>> {
    shift_weeks(end_of_week(t, week_start)?, -1)
}

// ── Timezone-aware operations ───────────────────────────────────────────────

/// Start of the week containing `utc`, aligned to the wall clock of
/// `timezone`, returned in UTC.
///
/// Converts `utc` to local time in the named zone, computes the local week
/// start ([`start_of_week`] semantics on the local calendar day), and maps
/// that local midnight back to an instant. An instant shortly after UTC
/// midnight on the week-start day can therefore land in the *previous* local
/// week when the zone sits behind UTC.
///
/// # Errors
///
/// Returns [`WeekError::InvalidTimezone`] if `timezone` is not a valid IANA
/// name, [`WeekError::InvalidDatetime`] if the local week-start midnight is
/// ambiguous or nonexistent at a DST transition, or
/// [`WeekError::OutOfRange`] on arithmetic overflow.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use weekbound::{start_of_tz_week, WeekStartDay};
///
/// // 00:30 UTC on Monday is still Sunday evening in New York, so the week
/// // aligned to America/New_York starts a week before the UTC one.
/// let t = Utc.with_ymd_and_hms(2024, 3, 11, 0, 30, 0).unwrap();
/// let start = start_of_tz_week(t, "America/New_York", WeekStartDay::Monday).unwrap();
/// assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 4, 5, 0, 0).unwrap());
/// ```
pub fn start_of_tz_week(
    utc: DateTime<Utc>,
    timezone: &str,
    week_start: WeekStartDay,
) -> Result<DateTime<Utc>> {
    let tz = parse_timezone(timezone)?;
    let local = utc.with_timezone(&tz);
    let start = week_start_date(local.date_naive(), week_start)?;
    let local_start = resolve_local(start.and_time(NaiveTime::MIN), &tz)?;
    Ok(local_start.with_timezone(&Utc))
}

/// End of the week containing `utc` on the wall clock of `timezone`,
/// returned in UTC.
///
/// The local end-of-week is one nanosecond before the next local week-start
/// midnight. When a DST transition falls inside the week, the UTC distance
/// between [`start_of_tz_week`] and this instant differs from 7 days by the
/// transition's offset change.
///
/// # Errors
///
/// Same conditions as [`start_of_tz_week`].
pub fn end_of_tz_week(
    utc: DateTime<Utc>,
    timezone: &str,
    week_start: WeekStartDay,
) -> Result<DateTime<Utc>> {
    let tz = parse_timezone(timezone)?;
    let local = utc.with_timezone(&tz);
    let start = week_start_date(local.date_naive(), week_start)?;
    let next = start
        .checked_add_signed(chrono::Duration::days(7))
        .ok_or_else(|| out_of_range("week end"))?;
    let end_naive = next
        .and_time(NaiveTime::MIN)
        .checked_sub_signed(chrono::Duration::nanoseconds(1))
        .ok_or_else(|| out_of_range("week end"))?;
    let local_end = resolve_local(end_naive, &tz)?;
    Ok(local_end.with_timezone(&Utc))
}

/// `start_of_tz_week(utc, tz) + 7 days` of UTC duration.
///
/// The shift is exactly 168 hours; across a DST transition the result is
/// not the following week's local midnight.
pub fn start_of_next_tz_week(
    utc: DateTime<Utc>,
    timezone: &str,
    week_start: WeekStartDay,
) -> Result<DateTime<Utc>> {
    shift_weeks(start_of_tz_week(utc, timezone, week_start)?, 1)
}

/// `start_of_tz_week(utc, tz) − 7 days` of UTC duration.
pub fn start_of_previous_tz_week(
    utc: DateTime<Utc>,
    timezone: &str,
    week_start: WeekStartDay,
) -> Result<DateTime<Utc>> {
    shift_weeks(start_of_tz_week(utc, timezone, week_start)?, -1)
}

/// `end_of_tz_week(utc, tz) + 7 days` of UTC duration.
pub fn end_of_next_tz_week(
    utc: DateTime<Utc>,
    timezone: &str,
    week_start: WeekStartDay,
) -> Result<DateTime<Utc>> {
    shift_weeks(end_of_tz_week(utc, timezone, week_start)?, 1)
}

/// `end_of_tz_week(utc, tz) − 7 days` of UTC duration.
pub fn end_of_previous_tz_week(
    utc: DateTime<Utc>,
    timezone: &str,
    week_start: WeekStartDay,
) -> Result<DateTime<Utc>> {
    shift_weeks(end_of_tz_week(utc, timezone, week_start)?, -1)
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    // ── UTC-frame tests ─────────────────────────────────────────────────

    #[test]
    fn test_start_of_week_mid_week() {
        // Thursday March 14 → preceding Monday March 11
        let start = start_of_week(utc(2024, 3, 14, 15, 30, 0), WeekStartDay::Monday).unwrap();
        assert_eq!(start, utc(2024, 3, 11, 0, 0, 0));
    }

    #[test]
    fn test_start_of_week_sunday_rule() {
        let start = start_of_week(utc(2024, 3, 14, 15, 30, 0), WeekStartDay::Sunday).unwrap();
        assert_eq!(start, utc(2024, 3, 10, 0, 0, 0));
    }

    #[test]
    fn test_start_of_week_on_the_boundary() {
        // Monday midnight is its own week start
        let t = utc(2024, 3, 11, 0, 0, 0);
        assert_eq!(start_of_week(t, WeekStartDay::Monday).unwrap(), t);
    }

    #[test]
    fn test_start_of_week_late_sunday() {
        // Sunday 23:00 still belongs to the week begun the previous Monday
        let start = start_of_week(utc(2024, 3, 17, 23, 0, 0), WeekStartDay::Monday).unwrap();
        assert_eq!(start, utc(2024, 3, 11, 0, 0, 0));
    }

    #[test]
    fn test_end_of_week_is_one_tick_before_next_start() {
        let t = utc(2024, 3, 14, 15, 30, 0);
        let end = end_of_week(t, WeekStartDay::Monday).unwrap();
        let expected = utc(2024, 3, 17, 23, 59, 59).with_nanosecond(999_999_999).unwrap();
        assert_eq!(end, expected);
        assert_eq!(
            end + chrono::Duration::nanoseconds(1),
            start_of_next_week(t, WeekStartDay::Monday).unwrap()
        );
    }

    #[test]
    fn test_start_of_next_week() {
        let next = start_of_next_week(utc(2024, 3, 14, 15, 30, 0), WeekStartDay::Monday).unwrap();
        assert_eq!(next, utc(2024, 3, 18, 0, 0, 0));
    }

    #[test]
    fn test_start_of_previous_week() {
        let prev =
            start_of_previous_week(utc(2024, 3, 14, 15, 30, 0), WeekStartDay::Monday).unwrap();
        assert_eq!(prev, utc(2024, 3, 4, 0, 0, 0));
    }

    #[test]
    fn test_end_of_next_week() {
        let end = end_of_next_week(utc(2024, 3, 14, 15, 30, 0), WeekStartDay::Monday).unwrap();
        let expected = utc(2024, 3, 24, 23, 59, 59).with_nanosecond(999_999_999).unwrap();
        assert_eq!(end, expected);
    }

    #[test]
    fn test_end_of_previous_week() {
        let end = end_of_previous_week(utc(2024, 3, 14, 15, 30, 0), WeekStartDay::Monday).unwrap();
        let expected = utc(2024, 3, 10, 23, 59, 59).with_nanosecond(999_999_999).unwrap();
        assert_eq!(end, expected);
    }

    #[test]
    fn test_week_spans_year_boundary() {
        // Monday Dec 30, 2024 starts the week that ends in January 2025
        let end = end_of_week(utc(2024, 12, 31, 12, 0, 0), WeekStartDay::Monday).unwrap();
        let expected = utc(2025, 1, 5, 23, 59, 59).with_nanosecond(999_999_999).unwrap();
        assert_eq!(expected, end);
        let start = start_of_week(utc(2025, 1, 2, 8, 0, 0), WeekStartDay::Monday).unwrap();
        assert_eq!(start, utc(2024, 12, 30, 0, 0, 0));
    }

    #[test]
    fn test_out_of_range_far_future() {
        let result = end_of_week(DateTime::<Utc>::MAX_UTC, WeekStartDay::Monday);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Out of range"), "got: {err}");
    }

    #[test]
    fn test_out_of_range_far_past() {
        assert!(start_of_previous_week(DateTime::<Utc>::MIN_UTC, WeekStartDay::Monday).is_err());
    }

    // ── Timezone-aware tests ────────────────────────────────────────────

    #[test]
    fn test_start_of_tz_week_matches_utc_for_utc_zone() {
        let t = utc(2024, 3, 14, 15, 30, 0);
        assert_eq!(
            start_of_tz_week(t, "UTC", WeekStartDay::Monday).unwrap(),
            start_of_week(t, WeekStartDay::Monday).unwrap()
        );
    }

    #[test]
    fn test_start_of_tz_week_positive_offset_enters_new_week() {
        // Sunday 16:00 UTC is already Monday 01:00 in Tokyo (UTC+9), so the
        // Tokyo-aligned week starts at Monday 00:00 JST = Sunday 15:00 UTC.
        let t = utc(2024, 3, 10, 16, 0, 0);
        let start = start_of_tz_week(t, "Asia/Tokyo", WeekStartDay::Monday).unwrap();
        assert_eq!(start, utc(2024, 3, 10, 15, 0, 0));
    }

    #[test]
    fn test_start_of_tz_week_negative_offset_stays_in_old_week() {
        // Monday 00:30 UTC is Sunday 20:30 in New York, so the aligned week
        // is the one that started Monday March 4 00:00 EST (05:00 UTC).
        let t = utc(2024, 3, 11, 0, 30, 0);
        let start = start_of_tz_week(t, "America/New_York", WeekStartDay::Monday).unwrap();
        assert_eq!(start, utc(2024, 3, 4, 5, 0, 0));
    }

    #[test]
    fn test_end_of_tz_week_across_spring_forward() {
        // US DST began March 10, 2024. The week starts in EST (-05:00) and
        // ends in EDT (-04:00): Sunday 23:59:59.999999999 EDT.
        let t = utc(2024, 3, 5, 12, 0, 0);
        let start = start_of_tz_week(t, "America/New_York", WeekStartDay::Monday).unwrap();
        let end = end_of_tz_week(t, "America/New_York", WeekStartDay::Monday).unwrap();
        assert_eq!(start, utc(2024, 3, 4, 5, 0, 0));
        assert_eq!(
            end,
            utc(2024, 3, 11, 3, 59, 59).with_nanosecond(999_999_999).unwrap()
        );
        // The local week lost one wall-clock hour to the transition.
        assert_eq!(
            end - start,
            chrono::Duration::days(7) - chrono::Duration::hours(1)
                - chrono::Duration::nanoseconds(1)
        );
    }

    #[test]
    fn test_start_of_next_tz_week_is_exactly_168_hours() {
        // Even across the spring-forward week the shift is pure UTC duration,
        // landing at 01:00 EDT rather than the next local midnight.
        let t = utc(2024, 3, 5, 12, 0, 0);
        let start = start_of_tz_week(t, "America/New_York", WeekStartDay::Monday).unwrap();
        let next = start_of_next_tz_week(t, "America/New_York", WeekStartDay::Monday).unwrap();
        assert_eq!(next - start, chrono::Duration::weeks(1));
        assert_eq!(next, utc(2024, 3, 11, 5, 0, 0));
    }

    #[test]
    fn test_start_of_previous_tz_week() {
        let t = utc(2024, 3, 14, 15, 30, 0);
        let start = start_of_tz_week(t, "Asia/Tokyo", WeekStartDay::Monday).unwrap();
        let prev = start_of_previous_tz_week(t, "Asia/Tokyo", WeekStartDay::Monday).unwrap();
        assert_eq!(prev, start - chrono::Duration::weeks(1));
    }

    #[test]
    fn test_end_of_next_and_previous_tz_week() {
        let t = utc(2024, 7, 3, 9, 0, 0);
        let end = end_of_tz_week(t, "Europe/Paris", WeekStartDay::Monday).unwrap();
        assert_eq!(
            end_of_next_tz_week(t, "Europe/Paris", WeekStartDay::Monday).unwrap(),
            end + chrono::Duration::weeks(1)
        );
        assert_eq!(
            end_of_previous_tz_week(t, "Europe/Paris", WeekStartDay::Monday).unwrap(),
            end - chrono::Duration::weeks(1)
        );
    }

    #[test]
    fn test_tz_week_sunday_rule() {
        // Thursday March 14 in New York, Sunday-start week → Sunday March 10.
        // US DST began 02:00 that day, so local midnight is still EST.
        let t = utc(2024, 3, 14, 15, 30, 0);
        let start = start_of_tz_week(t, "America/New_York", WeekStartDay::Sunday).unwrap();
        assert_eq!(start, utc(2024, 3, 10, 5, 0, 0));
    }

    #[test]
    fn test_nonexistent_local_midnight_is_an_error() {
        // Brazil's 2018 DST skipped midnight on Sunday November 4; the
        // Sunday-start week of that Monday has no local week-start instant.
        let t = utc(2018, 11, 5, 12, 0, 0);
        let result = start_of_tz_week(t, "America/Sao_Paulo", WeekStartDay::Sunday);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Invalid datetime"), "got: {err}");
    }

    #[test]
    fn test_invalid_timezone_returns_error() {
        let result = start_of_tz_week(utc(2024, 3, 14, 15, 30, 0), "Invalid/Zone", WeekStartDay::Monday);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Invalid timezone"), "got: {err}");
    }
}
