//! Farecheck Core Library
//!
//! Pure domain logic for the roundtrip price-ceiling check: trip parameter
//! validation, deterministic search URL construction, and the model of a
//! search's observable end state. No browser, no I/O, no async.

pub mod error;
pub mod outcome;
pub mod query;
pub mod url;

// Re-export commonly used types
pub use error::ValidationError;
pub use outcome::{parse_displayed_price, ResultOutcome};
pub use query::{RawTripParams, TripQuery};
pub use url::SearchUrl;

/// Farecheck version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
