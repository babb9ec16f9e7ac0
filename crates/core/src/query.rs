//! Trip parameter validation
//!
//! Turns raw scenario-table input into a [`TripQuery`] or rejects it with a
//! [`ValidationError`] naming the violated rule. Deterministic given `today`,
//! which is injected by the caller rather than read from the clock here.

use chrono::{Days, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

static AIRPORT_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}$").expect("airport code pattern"));

static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date shape pattern"));

/// How far out the trip may end, counted from today.
const TRIP_HORIZON_DAYS: u64 = 365;

/// Raw trip parameters as they arrive from the scenario table, before any
/// rule has been checked. The price is boundary-typed as `i64` so that a
/// negative value can be rejected rather than silently wrapped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTripParams {
    pub origin: String,
    pub destination: String,
    pub departure: String,
    pub return_date: String,
    pub max_price: i64,
}

/// A validated roundtrip search query. Constructed once per scenario and
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripQuery {
    pub origin: String,
    pub destination: String,
    pub departure: NaiveDate,
    pub return_date: NaiveDate,
    pub max_price: u32,
}

impl TripQuery {
    /// Validate raw parameters against all rules, fail-fast on the first
    /// violation. Checks, in order:
    ///
    /// 1. both airport codes are exactly three uppercase letters
    /// 2. origin and destination differ
    /// 3. both dates are real calendar dates in YYYY-MM-DD form
    /// 4. the return is not before the departure (same-day trips are fine)
    /// 5. the departure is not in the past (today is fine)
    /// 6. the return stays within 365 days of today
    /// 7. the price is non-negative
    pub fn validate(raw: &RawTripParams, today: NaiveDate) -> Result<TripQuery> {
        let origin = check_airport_code("origin", &raw.origin)?;
        let destination = check_airport_code("destination", &raw.destination)?;
        if origin == destination {
            return Err(ValidationError::SameAirports { code: origin });
        }

        let departure = check_date("departure", &raw.departure)?;
        let return_date = check_date("return", &raw.return_date)?;
        if return_date < departure {
            return Err(ValidationError::ReturnBeforeDeparture {
                departure,
                return_date,
            });
        }
        if departure < today {
            return Err(ValidationError::DepartureInPast { departure, today });
        }
        let horizon = today
            .checked_add_days(Days::new(TRIP_HORIZON_DAYS))
            .unwrap_or(NaiveDate::MAX);
        if return_date >= horizon {
            return Err(ValidationError::ReturnBeyondHorizon {
                return_date,
                horizon,
            });
        }

        let max_price = u32::try_from(raw.max_price)
            .map_err(|_| ValidationError::InvalidPrice {
                value: raw.max_price,
            })?;

        Ok(TripQuery {
            origin,
            destination,
            departure,
            return_date,
            max_price,
        })
    }
}

fn check_airport_code(field: &'static str, value: &str) -> Result<String> {
    if AIRPORT_CODE.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(ValidationError::InvalidAirportCode {
            field,
            value: value.to_string(),
        })
    }
}

fn check_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    // Shape first, then a real calendar parse so that e.g. 2022-13-40 is
    // rejected as well.
    if !DATE_SHAPE.is_match(value) {
        return Err(ValidationError::InvalidDate {
            field,
            value: value.to_string(),
        });
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(origin: &str, destination: &str, dep: &str, ret: &str, price: i64) -> RawTripParams {
        RawTripParams {
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure: dep.to_string(),
            return_date: ret.to_string(),
            max_price: price,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn accepts_same_day_roundtrip_starting_today_with_zero_price() {
        let params = raw("ZRH", "LHR", "2024-06-01", "2024-06-01", 0);
        let query = TripQuery::validate(&params, today()).unwrap();
        assert_eq!(query.origin, "ZRH");
        assert_eq!(query.destination, "LHR");
        assert_eq!(query.departure, query.return_date);
        assert_eq!(query.max_price, 0);
    }

    #[test]
    fn rejects_lowercase_airport_code() {
        let params = raw("zrh", "LHR", "2024-06-10", "2024-06-17", 500);
        let err = TripQuery::validate(&params, today()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidAirportCode { field: "origin", .. }
        ));
    }

    #[test]
    fn rejects_wrong_length_airport_code() {
        let params = raw("ZRH", "LHRX", "2024-06-10", "2024-06-17", 500);
        let err = TripQuery::validate(&params, today()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidAirportCode {
                field: "destination",
                ..
            }
        ));
    }

    #[test]
    fn rejects_identical_airports() {
        let params = raw("ZRH", "ZRH", "2024-06-10", "2024-06-17", 500);
        let err = TripQuery::validate(&params, today()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::SameAirports {
                code: "ZRH".to_string()
            }
        );
    }

    #[test]
    fn rejects_malformed_date_shape() {
        let params = raw("ZRH", "LHR", "2024/06/10", "2024-06-17", 500);
        let err = TripQuery::validate(&params, today()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidDate { field: "departure", .. }
        ));
    }

    #[test]
    fn rejects_nonexistent_calendar_date() {
        let params = raw("ZRH", "LHR", "2024-06-10", "2024-13-40", 500);
        let err = TripQuery::validate(&params, today()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidDate { field: "return", .. }
        ));
    }

    #[test]
    fn rejects_return_before_departure() {
        let params = raw("ZRH", "LHR", "2024-06-17", "2024-06-10", 500);
        let err = TripQuery::validate(&params, today()).unwrap_err();
        assert!(matches!(err, ValidationError::ReturnBeforeDeparture { .. }));
    }

    #[test]
    fn rejects_departure_in_the_past() {
        let params = raw("ZRH", "LHR", "2024-05-31", "2024-06-10", 500);
        let err = TripQuery::validate(&params, today()).unwrap_err();
        assert!(matches!(err, ValidationError::DepartureInPast { .. }));
    }

    #[test]
    fn rejects_return_at_the_365_day_horizon() {
        // today + 365 days is the first rejected return date
        let params = raw("ZRH", "LHR", "2024-06-10", "2025-06-01", 500);
        let err = TripQuery::validate(&params, today()).unwrap_err();
        assert!(matches!(err, ValidationError::ReturnBeyondHorizon { .. }));
    }

    #[test]
    fn accepts_return_just_inside_the_horizon() {
        let params = raw("ZRH", "LHR", "2024-06-10", "2025-05-31", 500);
        assert!(TripQuery::validate(&params, today()).is_ok());
    }

    #[test]
    fn rejects_negative_price() {
        let params = raw("ZRH", "LHR", "2024-06-10", "2024-06-17", -1);
        let err = TripQuery::validate(&params, today()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidPrice { value: -1 });
    }

    #[test]
    fn error_messages_name_the_violated_rule() {
        let err = TripQuery::validate(&raw("zz", "LHR", "2024-06-10", "2024-06-17", 1), today())
            .unwrap_err();
        assert!(err.to_string().contains("three-letter uppercase code"));

        let err = TripQuery::validate(&raw("ZRH", "LHR", "bad", "2024-06-17", 1), today())
            .unwrap_err();
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }
}
