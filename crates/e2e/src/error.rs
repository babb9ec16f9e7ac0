//! Error types for the E2E harness
//!
//! Every variant is scenario-fatal: nothing here is caught or retried
//! internally, and the teardown path still runs after any of them.

use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum E2eError {
    #[error(transparent)]
    Validation(#[from] farecheck_core::ValidationError),

    #[error("unsupported platform '{actual}'; supported: {supported}")]
    UnsupportedPlatform { actual: String, supported: String },

    #[error("timed out after {timeout:?} waiting for {what}")]
    WaitTimeout { what: String, timeout: Duration },

    #[error("zero results with no recognized empty-state indicator within {timeout:?}")]
    UnexpectedEmptyResult { timeout: Duration },

    #[error("found price should be below the requested maximum: {found} < {limit} does not hold")]
    PriceInvariant { found: u32, limit: u32 },

    #[error("displayed price text '{text}' contains no readable digits")]
    UnreadablePrice { text: String },

    #[error("webdriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type E2eResult<T> = Result<T, E2eError>;
