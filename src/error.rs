//! Errors raised at the parsing boundary
//!
//! The projection and recurrence math is total and never fails. These errors
//! only come from turning caller-supplied tags and date strings into typed values.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced when parsing inputs for the projection and recurrence components
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinanceError {
    #[error("unknown recurrence frequency: {0}")]
    UnknownFrequency(String),

    #[error("unknown contribution interval: {0}")]
    UnknownInterval(String),

    #[error("invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, FinanceError>;

/// Parse an ISO `YYYY-MM-DD` calendar date
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| FinanceError::InvalidDate(s.to_string()))
}
