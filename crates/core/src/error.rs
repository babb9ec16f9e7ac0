//! Error types for trip parameter validation

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias using [`ValidationError`]
pub type Result<T> = std::result::Result<T, ValidationError>;

/// A violated trip parameter rule. One variant per rule, each with its own
/// human-readable message naming what was wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} airport must be a three-letter uppercase code, got '{value}'")]
    InvalidAirportCode { field: &'static str, value: String },

    #[error("origin and destination airports must differ, both are '{code}'")]
    SameAirports { code: String },

    #[error("{field} date must be a calendar date in YYYY-MM-DD format, got '{value}'")]
    InvalidDate { field: &'static str, value: String },

    #[error("return date {return_date} is before departure {departure}")]
    ReturnBeforeDeparture {
        departure: NaiveDate,
        return_date: NaiveDate,
    },

    #[error("departure {departure} is in the past (today is {today})")]
    DepartureInPast { departure: NaiveDate, today: NaiveDate },

    #[error("return date {return_date} is too far out; the trip must end before {horizon}")]
    ReturnBeyondHorizon {
        return_date: NaiveDate,
        horizon: NaiveDate,
    },

    #[error("maximum price must be a non-negative integer, got {value}")]
    InvalidPrice { value: i64 },
}
