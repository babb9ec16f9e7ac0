//! Browser session lifecycle
//!
//! One [`BrowserSession`] is exclusively owned by the scenario that started
//! it. Setup gates on the execution platform before any browser process is
//! touched; teardown captures a timestamped screenshot and quits the session
//! on every exit path, including assertion failure.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thirtyfour::prelude::*;
use tracing::{info, warn};

use crate::config::SessionConfig;
use crate::error::{E2eError, E2eResult};
use crate::wait::WaitBudget;

/// Check the runtime platform against the configured set of supported
/// identifiers. Runs before any browser startup; a mismatch is scenario-fatal.
pub fn check_platform(supported: &[String], actual: &str) -> E2eResult<()> {
    if supported.iter().any(|p| p == actual) {
        Ok(())
    } else {
        Err(E2eError::UnsupportedPlatform {
            actual: actual.to_string(),
            supported: supported.join(", "),
        })
    }
}

/// A live headless browser session plus its artifact settings.
pub struct BrowserSession {
    driver: WebDriver,
    artifacts_dir: PathBuf,
    wait: WaitBudget,
    closed: bool,
}

impl BrowserSession {
    /// Gate on the platform, start a headless session against the configured
    /// WebDriver endpoint and maximize the window.
    pub async fn start(config: SessionConfig) -> E2eResult<Self> {
        check_platform(&config.supported_platforms, std::env::consts::OS)?;
        std::fs::create_dir_all(&config.artifacts_dir)?;

        let mut caps = DesiredCapabilities::firefox();
        if config.headless {
            info!("Configuring Firefox for headless mode");
            caps.set_headless()?;
        }

        info!("Starting browser session at {}", config.webdriver_url);
        let driver = WebDriver::new(&config.webdriver_url, caps).await?;
        driver.maximize_window().await?;

        Ok(Self {
            driver,
            artifacts_dir: config.artifacts_dir,
            wait: config.wait,
            closed: false,
        })
    }

    /// The underlying WebDriver handle.
    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    /// The shared wait budget for polling operations in this session.
    pub fn wait_budget(&self) -> WaitBudget {
        self.wait
    }

    /// Capture a screenshot of the current page to a timestamped file in the
    /// artifacts directory and return its path.
    pub async fn capture_screenshot(&self) -> E2eResult<PathBuf> {
        let path = screenshot_path(&self.artifacts_dir, Utc::now());
        self.driver.screenshot(&path).await?;
        info!("Screenshot saved to {}", path.display());
        Ok(path)
    }

    /// Quit the browser session. Consumes the session so it cannot be used
    /// afterwards.
    pub async fn close(mut self) -> E2eResult<()> {
        self.closed = true;
        info!("Quitting browser session");
        self.driver.clone().quit().await?;
        Ok(())
    }
}

impl fmt::Debug for BrowserSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserSession")
            .field("artifacts_dir", &self.artifacts_dir)
            .field("wait", &self.wait)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        // quit() is async and cannot run here; the after-hook is the
        // guaranteed release path.
        if !self.closed {
            warn!("browser session dropped without close(); the WebDriver session may leak");
        }
    }
}

fn screenshot_path(dir: &Path, at: DateTime<Utc>) -> PathBuf {
    dir.join(format!("{}.png", at.format("%Y%m%dT%H%M%S%.3fZ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn platforms(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn accepts_a_configured_platform() {
        assert!(check_platform(&platforms(&["macos", "linux"]), "linux").is_ok());
    }

    #[test]
    fn rejects_an_unconfigured_platform() {
        let err = check_platform(&platforms(&["macos"]), "windows").unwrap_err();
        match err {
            E2eError::UnsupportedPlatform { actual, supported } => {
                assert_eq!(actual, "windows");
                assert_eq!(supported, "macos");
            }
            other => panic!("expected UnsupportedPlatform, got {other}"),
        }
    }

    #[test]
    fn screenshot_paths_are_timestamped_png_files() {
        let dir = Path::new("artifacts");
        let at = chrono::Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 45).unwrap();
        let path = screenshot_path(dir, at);

        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));
        assert_eq!(path.parent(), Some(dir));
        assert!(path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap()
            .starts_with("20240601T123045"));
    }

    #[test]
    fn distinct_capture_times_give_distinct_paths() {
        let dir = tempfile::tempdir().unwrap();
        let first = chrono::Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 45).unwrap();
        let second = first + chrono::Duration::milliseconds(17);

        assert_ne!(
            screenshot_path(dir.path(), first),
            screenshot_path(dir.path(), second)
        );
    }
}
