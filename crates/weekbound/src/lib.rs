//! # weekbound
//!
//! Deterministic week-boundary computation.
//!
//! Computes the start and end of the week containing an instant — and of the
//! weeks immediately before and after it — in UTC or aligned to any IANA
//! timezone, plus ISO 8601 week numbers. Every function is pure: no system
//! clock access, no hidden locale state, the caller provides every input,
//! keeping the crate testable and safe to call from any thread.
//!
//! ## Modules
//!
//! - [`boundary`] — start/end of the current, next, and previous week, in UTC or a timezone
//! - [`number`] — ISO 8601 week numbers (Monday-start, first-four-day-week rule)
//! - [`summary`] — RFC 3339 string surface producing a serializable week report
//! - [`error`] — Error types

pub mod boundary;
mod convert;
pub mod error;
pub mod number;
pub mod summary;

pub use boundary::{
    end_of_next_tz_week, end_of_next_week, end_of_previous_tz_week, end_of_previous_week,
    end_of_tz_week, end_of_week, start_of_next_tz_week, start_of_next_week,
    start_of_previous_tz_week, start_of_previous_week, start_of_tz_week, start_of_week,
    WeekStartDay,
};
pub use error::WeekError;
pub use number::{tz_week_number, utc_week_number};
pub use summary::{summarize_week, WeekSummary};
