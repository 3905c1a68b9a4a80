//! Timezone resolution and RFC 3339 helpers shared across the crate.

use chrono::{DateTime, Datelike, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Result, WeekError};

/// Parse an RFC 3339 datetime string into `DateTime<Utc>`.
pub(crate) fn parse_rfc3339(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| WeekError::InvalidDatetime(format!("'{}': {}", s, e)))
}

/// Parse an IANA timezone string into `Tz`.
pub(crate) fn parse_timezone(s: &str) -> Result<Tz> {
    s.parse::<Tz>()
        .map_err(|_| WeekError::InvalidTimezone(format!("'{}'", s)))
}

/// Format the UTC offset as a string (e.g., "-05:00", "+09:00").
pub(crate) fn format_utc_offset<T: TimeZone>(dt: &DateTime<T>) -> String {
    let offset_secs = dt.offset().fix().local_minus_utc();
    let sign = if offset_secs >= 0 { "+" } else { "-" };
    let abs_secs = offset_secs.unsigned_abs();
    let hours = abs_secs / 3600;
    let minutes = (abs_secs % 3600) / 60;
    format!("{sign}{hours:02}:{minutes:02}")
}

/// Determine if DST is active for a datetime in a timezone.
pub(crate) fn is_dst_active<T: TimeZone>(dt: &DateTime<T>, tz: &Tz) -> bool {
    // Compare January 1 offset (winter / standard) with the current offset.
    // If they differ, DST is active.
    let utc = dt.with_timezone(&Utc);
    let year = utc.year();

    let jan1 = Utc
        .with_ymd_and_hms(year, 1, 1, 12, 0, 0)
        .single()
        .unwrap_or(utc);
    let jan1_local = jan1.with_timezone(tz);

    let current_offset = dt.offset().fix().local_minus_utc();
    let jan_offset = jan1_local.offset().fix().local_minus_utc();

    current_offset != jan_offset
}
