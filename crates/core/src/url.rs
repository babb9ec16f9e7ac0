//! Search URL construction
//!
//! The host, sort criterion and price-filter syntax below form an external
//! contract with the search provider's query grammar. They are version-pinned
//! constants: bump them deliberately when the provider changes its grammar,
//! never recompute them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::query::TripQuery;

/// Search provider host.
pub const SEARCH_HOST: &str = "www.kayak.ch";

/// Sort criterion: cheapest results first.
pub const SORT_CRITERION: &str = "price_b";

/// Filter selecting results at or below a price; the ceiling is appended.
pub const PRICE_FILTER_PREFIX: &str = "fs=price=-";

/// A fully built search-results URL. A pure function of a valid
/// [`TripQuery`] with no identity of its own; rebuilt per scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchUrl(String);

impl SearchUrl {
    /// Build the results URL for a validated query. Assumes the query has
    /// already passed validation; no checks are repeated here.
    pub fn build(query: &TripQuery) -> Self {
        SearchUrl(format!(
            "https://{host}/flights/{origin}-{destination}/{departure}/{ret}?sort={sort}&{filter}{max}",
            host = SEARCH_HOST,
            origin = query.origin,
            destination = query.destination,
            departure = query.departure.format("%Y-%m-%d"),
            ret = query.return_date.format("%Y-%m-%d"),
            sort = SORT_CRITERION,
            filter = PRICE_FILTER_PREFIX,
            max = query.max_price,
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
