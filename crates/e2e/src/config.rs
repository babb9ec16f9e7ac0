//! Harness configuration
//!
//! Defaults mirror the original suite (headless Firefox against a local
//! geckodriver, macOS as the single supported platform, one 60-second wait
//! budget); every knob can be overridden through a `FARECHECK_*` environment
//! variable. Malformed overrides are logged and ignored rather than failing
//! startup.

use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::wait::WaitBudget;

/// WebDriver endpoint, e.g. `http://localhost:4444`. Also gates the BDD
/// suite: scenarios are skipped entirely when this is unset.
pub const ENV_WEBDRIVER_URL: &str = "FARECHECK_WEBDRIVER_URL";
/// Directory receiving per-scenario screenshots.
pub const ENV_ARTIFACTS_DIR: &str = "FARECHECK_ARTIFACTS_DIR";
/// Headless toggle (`true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`).
pub const ENV_HEADLESS: &str = "FARECHECK_HEADLESS";
/// Comma-separated platform identifiers allowed to run the suite.
pub const ENV_PLATFORMS: &str = "FARECHECK_SUPPORTED_PLATFORMS";
/// Wait budget in whole seconds.
pub const ENV_WAIT_TIMEOUT_SECS: &str = "FARECHECK_WAIT_TIMEOUT_SECS";

/// Configuration for one browser session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// WebDriver endpoint the browser session is started against.
    pub webdriver_url: String,

    /// Platform identifiers (`std::env::consts::OS` values) allowed to run.
    pub supported_platforms: Vec<String>,

    /// Run the browser headless.
    pub headless: bool,

    /// Directory for screenshot artifacts.
    pub artifacts_dir: PathBuf,

    /// Shared budget for all polling waits in a scenario.
    pub wait: WaitBudget,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            webdriver_url: "http://localhost:4444".to_string(),
            supported_platforms: vec!["macos".to_string()],
            headless: true,
            artifacts_dir: PathBuf::from("test-results/screenshots"),
            wait: WaitBudget::default(),
        }
    }
}

impl SessionConfig {
    /// Defaults with `FARECHECK_*` environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_WEBDRIVER_URL) {
            config.webdriver_url = url;
        }
        if let Ok(dir) = std::env::var(ENV_ARTIFACTS_DIR) {
            config.artifacts_dir = PathBuf::from(dir);
        }
        if let Ok(raw) = std::env::var(ENV_HEADLESS) {
            match parse_bool(&raw) {
                Some(value) => config.headless = value,
                None => warn!("ignoring {}: '{}' is not a boolean", ENV_HEADLESS, raw),
            }
        }
        if let Ok(raw) = std::env::var(ENV_PLATFORMS) {
            let platforms = parse_platform_list(&raw);
            if platforms.is_empty() {
                warn!("ignoring {}: '{}' lists no platforms", ENV_PLATFORMS, raw);
            } else {
                config.supported_platforms = platforms;
            }
        }
        if let Ok(raw) = std::env::var(ENV_WAIT_TIMEOUT_SECS) {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.wait.timeout = Duration::from_secs(secs),
                _ => warn!(
                    "ignoring {}: '{}' is not a positive number of seconds",
                    ENV_WAIT_TIMEOUT_SECS, raw
                ),
            }
        }

        config
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_platform_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|p| p.trim().to_ascii_lowercase())
        .filter(|p| !p.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_suite() {
        let config = SessionConfig::default();
        assert_eq!(config.supported_platforms, vec!["macos"]);
        assert!(config.headless);
        assert_eq!(config.wait.timeout, Duration::from_secs(60));
    }

    #[test]
    fn parses_boolean_spellings() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool(" YES "), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn parses_platform_lists() {
        assert_eq!(
            parse_platform_list("macos, Linux"),
            vec!["macos".to_string(), "linux".to_string()]
        );
        assert_eq!(parse_platform_list(" , ,"), Vec::<String>::new());
    }
}
