//! Farecheck E2E Harness
//!
//! Browser orchestration for the roundtrip price-ceiling check:
//!
//! - [`session`] owns the browser lifecycle around one scenario (platform
//!   gate, headless startup, screenshot-and-quit teardown)
//! - [`wait`] is the bounded-polling primitive every UI wait goes through
//! - [`page`] drives the results page and classifies its end state
//! - [`config`] holds the knobs, with `FARECHECK_*` environment overrides
//!
//! The BDD scenario surface lives in `tests/roundtrip.rs` as a
//! `harness = false` Cucumber binary; the library itself stays free of any
//! test-framework coupling.

pub mod config;
pub mod error;
pub mod page;
pub mod session;
pub mod wait;

pub use config::SessionConfig;
pub use error::{E2eError, E2eResult};
pub use page::{verify_price_ceiling, ResultsPage};
pub use session::BrowserSession;
pub use wait::{wait_until, WaitBudget};
