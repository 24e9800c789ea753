use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// Registry constants
// =============================================================================

/// Release-metadata endpoint queried when no other is configured
pub const DEFAULT_SERVICE_URL: &str =
    "https://projects.csail.mit.edu/probcomp/bayesdb/bayeslite.version";

/// Package reported to the registry when no other is configured
pub const DEFAULT_PACKAGE_NAME: &str = "bayeslite";

/// Timeout for the registry query in milliseconds (1 second)
pub const FETCH_TIMEOUT_MS: u64 = 1_000;

/// Environment variable holding the `tracing` filter directives
pub const LOG_FILTER_ENV: &str = "FRESHNESS_CHECK_LOG";

/// Checker configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerConfig {
    pub registry: RegistryConfig,
}

/// Where and how to query for the latest release
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistryConfig {
    /// When false the check never touches the network
    pub enabled: bool,
    pub service_url: String,
    pub package_name: String,
    /// Registry query timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            service_url: DEFAULT_SERVICE_URL.to_string(),
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
            timeout_ms: FETCH_TIMEOUT_MS,
        }
    }
}

impl RegistryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Returns the path to the data directory for freshness-check.
/// Uses $XDG_DATA_HOME/freshness-check if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/freshness-check,
/// or ./freshness-check if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the default path of the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("freshness-check.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("freshness-check")
}
