//! Values passed between the registry and the checker

use serde::Deserialize;

/// Parameters of a single freshness query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub package_name: String,
    pub current_version: String,
    /// Sent as the `User-Agent` header, e.g. "bayeslite 0.5"
    pub user_agent: String,
}

impl Request {
    pub fn new(package_name: &str, current_version: &str) -> Self {
        Self {
            package_name: package_name.to_string(),
            current_version: current_version.to_string(),
            user_agent: format!("{} {}", package_name, current_version),
        }
    }
}

/// Release metadata published by the registry
///
/// Unknown fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteAdvisory {
    /// Latest published version, not yet validated
    pub version: String,
    /// Where to read about the release
    pub url: String,
}
