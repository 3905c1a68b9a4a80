//! Error types for weekbound operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeekError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, WeekError>;
