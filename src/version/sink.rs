//! Destinations for advisory messages

use std::fmt;

#[cfg(test)]
use mockall::automock;
use tracing::warn;

/// Notice that a newer release than the running one is published
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub package_name: String,
    pub current_version: String,
    pub latest_version: String,
    pub url: String,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is not up to date.\nYou are running {}; the latest version is {}.\nSee {}.",
            self.package_name, self.current_version, self.latest_version, self.url
        )
    }
}

/// Receives advisories produced by a freshness check
///
/// Implementations must tolerate being called from a background task.
#[cfg_attr(test, automock)]
pub trait AdvisorySink: Send + Sync {
    fn emit(&self, advisory: &Advisory);
}

/// Reports advisories as `tracing` warnings
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AdvisorySink for TracingSink {
    fn emit(&self, advisory: &Advisory) {
        warn!(
            package = %advisory.package_name,
            current = %advisory.current_version,
            latest = %advisory.latest_version,
            url = %advisory.url,
            "{}",
            advisory
        );
    }
}

/// Writes advisories to standard error
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl AdvisorySink for StderrSink {
    fn emit(&self, advisory: &Advisory) {
        eprintln!("warning: {}", advisory);
    }
}

impl<F> AdvisorySink for F
where
    F: Fn(&Advisory) + Send + Sync,
{
    fn emit(&self, advisory: &Advisory) {
        self(advisory)
    }
}
