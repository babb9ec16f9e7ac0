//! Results page driving and outcome classification
//!
//! The class names below are the DOM contract with the search provider's
//! results page. Like the URL grammar they are version-pinned constants;
//! when the provider ships a redesign these are the first things to break.

use thirtyfour::prelude::*;
use tracing::info;

use farecheck_core::{parse_displayed_price, ResultOutcome, SearchUrl};

use crate::error::{E2eError, E2eResult};
use crate::session::BrowserSession;
use crate::wait::wait_until;

const CONSENT_DECLINE: &str = "iInN-decline";
const PROGRESS_BAR: &str = "Common-Results-ProgressBar";
const RESULT_ITEM: &str = "Flights-Results-FlightResultItem";
const PRICE_TEXT: &str = "price-text";
const NO_CONNECTION: &str = "col-illustration";
const NO_RESULTS: &str = "Flights-Results-NoFlightResults";

/// The search-results page of one scenario's browser session.
pub struct ResultsPage<'a> {
    session: &'a BrowserSession,
}

impl<'a> ResultsPage<'a> {
    pub fn attach(session: &'a BrowserSession) -> Self {
        Self { session }
    }

    /// Load the search URL, decline the consent prompt once it shows up and
    /// wait for the results to finish loading. Both waits draw on the
    /// session's shared budget; a timeout in either is scenario-fatal.
    pub async fn open(&self, url: &SearchUrl) -> E2eResult<()> {
        let driver = self.session.driver();
        let budget = self.session.wait_budget();

        info!("Navigating to {}", url);
        driver.goto(url.as_str()).await?;

        let decline = {
            let driver = driver.clone();
            wait_until(budget, "consent decline control", move || {
                let driver = driver.clone();
                async move {
                    match driver.find(By::ClassName(CONSENT_DECLINE)).await {
                        Ok(el) => Ok(el.is_displayed().await.unwrap_or(false).then_some(el)),
                        Err(_) => Ok(None),
                    }
                }
            })
            .await?
        };
        info!("Declining the consent prompt");
        decline.click().await?;

        info!("Waiting for results to settle");
        let driver = driver.clone();
        wait_until(budget, "progress indicator to clear", move || {
            let driver = driver.clone();
            async move {
                match driver.find(By::ClassName(PROGRESS_BAR)).await {
                    Ok(el) => {
                        let visible = el.is_displayed().await.unwrap_or(false);
                        Ok((!visible).then_some(()))
                    }
                    // Indicator gone from the DOM counts as settled.
                    Err(_) => Ok(Some(())),
                }
            }
        })
        .await?;

        Ok(())
    }

    /// Classify the rendered page state.
    ///
    /// With at least one result item present, the first item's displayed
    /// price is extracted and parsed. With none, the page must confirm the
    /// empty state through one of the two recognized indicators within the
    /// wait budget; an empty result list with no explanatory signal is
    /// always a failure.
    pub async fn classify(&self) -> E2eResult<ResultOutcome> {
        let driver = self.session.driver();

        let items = driver.find_all(By::ClassName(RESULT_ITEM)).await?;
        if let Some(first) = items.first() {
            let text = first.find(By::ClassName(PRICE_TEXT)).await?.text().await?;
            let price = parse_displayed_price(&text)
                .ok_or(E2eError::UnreadablePrice { text })?;
            info!("Search engine's first displayed price is {}", price);
            return Ok(ResultOutcome::PricedResult { price });
        }

        let budget = self.session.wait_budget();
        let driver = driver.clone();
        let waited = wait_until(budget, "empty-state indicator", move || {
            let driver = driver.clone();
            async move {
                if is_displayed(&driver, NO_CONNECTION).await {
                    return Ok(Some(ResultOutcome::NoMatchingConnection));
                }
                if is_displayed(&driver, NO_RESULTS).await {
                    return Ok(Some(ResultOutcome::NoResultsBelowPrice));
                }
                Ok(None)
            }
        })
        .await;

        match waited {
            Ok(outcome) => {
                info!("No matching flights found: {}", outcome);
                Ok(outcome)
            }
            Err(E2eError::WaitTimeout { timeout, .. }) => {
                Err(E2eError::UnexpectedEmptyResult { timeout })
            }
            Err(e) => Err(e),
        }
    }
}

/// Enforce the price ceiling on a classified outcome.
///
/// The bound is strictly less-than: a result priced exactly at the ceiling
/// fails. The provider has been observed returning results at the requested
/// ceiling even when asked to stay below it, which may be a display quirk on
/// its side; keep the strict bound until that is settled rather than
/// relaxing it to `<=`.
pub fn verify_price_ceiling(outcome: ResultOutcome, limit: u32) -> E2eResult<()> {
    match outcome {
        ResultOutcome::PricedResult { price } if price < limit => {
            info!("User requested price to be less than {}", limit);
            info!("Found price {} is below the ceiling", price);
            Ok(())
        }
        ResultOutcome::PricedResult { price } => Err(E2eError::PriceInvariant {
            found: price,
            limit,
        }),
        ResultOutcome::NoMatchingConnection | ResultOutcome::NoResultsBelowPrice => Ok(()),
    }
}

async fn is_displayed(driver: &WebDriver, class_name: &str) -> bool {
    match driver.find(By::ClassName(class_name)).await {
        Ok(el) => el.is_displayed().await.unwrap_or(false),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_below_the_ceiling_passes() {
        let outcome = ResultOutcome::PricedResult { price: 450 };
        assert!(verify_price_ceiling(outcome, 500).is_ok());
    }

    #[test]
    fn price_at_the_ceiling_fails_the_strict_bound() {
        let outcome = ResultOutcome::PricedResult { price: 500 };
        let err = verify_price_ceiling(outcome, 500).unwrap_err();
        match err {
            E2eError::PriceInvariant { found, limit } => {
                assert_eq!(found, 500);
                assert_eq!(limit, 500);
            }
            other => panic!("expected PriceInvariant, got {other}"),
        }
    }

    #[test]
    fn recognized_empty_states_need_no_price_assertion() {
        assert!(verify_price_ceiling(ResultOutcome::NoMatchingConnection, 500).is_ok());
        assert!(verify_price_ceiling(ResultOutcome::NoResultsBelowPrice, 0).is_ok());
    }

    #[test]
    fn zero_ceiling_rejects_any_priced_result() {
        let outcome = ResultOutcome::PricedResult { price: 0 };
        assert!(verify_price_ceiling(outcome, 0).is_err());
    }
}
