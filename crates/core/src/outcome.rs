//! Observable end states of a search

use std::fmt;

use serde::{Deserialize, Serialize};

/// The observable end state of one search scenario.
///
/// Zero displayed results is legitimate only when the provider confirms it
/// with one of its two recognized empty-state signals; those map to
/// [`ResultOutcome::NoMatchingConnection`] and
/// [`ResultOutcome::NoResultsBelowPrice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultOutcome {
    /// At least one result was displayed; `price` is the first item's price.
    PricedResult { price: u32 },
    /// The provider reported no connection between the two cities.
    NoMatchingConnection,
    /// The provider reported no flights under the requested ceiling.
    NoResultsBelowPrice,
}

impl fmt::Display for ResultOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultOutcome::PricedResult { price } => write!(f, "priced result at {}", price),
            ResultOutcome::NoMatchingConnection => write!(f, "no connection between cities"),
            ResultOutcome::NoResultsBelowPrice => write!(f, "no flights below the ceiling"),
        }
    }
}

/// Extract the integer price from a displayed price string by stripping every
/// non-digit character, e.g. `"CHF 450"` becomes `450`. Returns `None` when
/// no digit survives or the digits overflow a `u32`.
pub fn parse_displayed_price(text: &str) -> Option<u32> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_currency_prefixed_price() {
        assert_eq!(parse_displayed_price("CHF 450"), Some(450));
    }

    #[test]
    fn strips_grouping_separators() {
        assert_eq!(parse_displayed_price("CHF 1'250"), Some(1250));
    }

    #[test]
    fn rejects_text_without_digits() {
        assert_eq!(parse_displayed_price("ab CHF"), None);
        assert_eq!(parse_displayed_price(""), None);
    }

    #[test]
    fn rejects_overflowing_digit_runs() {
        assert_eq!(parse_displayed_price("99999999999999999999"), None);
    }
}
