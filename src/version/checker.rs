//! Freshness check: ask the registry, compare versions, advise
//!
//! Per invocation the check moves through
//! `Idle -> Fetching -> {NoAdvisory | Comparing} -> Idle` and never retries.
//! Every failure along the way ends the check without an advisory.

use std::cmp::Ordering;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::RegistryConfig;
use crate::version::registries::RegistryClient;
use crate::version::registry::Registry;
use crate::version::sink::{Advisory, AdvisorySink};
use crate::version::types::Request;
use crate::version::version_string::{VersionString, compare};

/// Runs freshness checks against one registry
///
/// Holds no state between checks; two calls are two independent queries.
pub struct FreshnessChecker<R> {
    registry: R,
    package_name: String,
    timeout: Duration,
}

impl FreshnessChecker<RegistryClient> {
    /// Builds a checker backed by the HTTP registry
    ///
    /// Returns `None` when the check is disabled.
    pub fn from_config(config: &RegistryConfig) -> Option<Self> {
        if !config.enabled {
            debug!("Freshness check disabled for {}", config.package_name);
            return None;
        }

        Some(Self::new(
            RegistryClient::new(&config.service_url, config.timeout()),
            &config.package_name,
            config.timeout(),
        ))
    }
}

impl<R: Registry> FreshnessChecker<R> {
    pub fn new(registry: R, package_name: &str, timeout: Duration) -> Self {
        Self {
            registry,
            package_name: package_name.to_string(),
            timeout,
        }
    }

    /// Runs one check, emitting at most one advisory to `sink`
    pub async fn check(&self, current_version: &str, sink: &dyn AdvisorySink) {
        if let Some(advisory) = self.evaluate(current_version).await {
            info!(
                "{} {} is outdated, {} is available",
                advisory.package_name, advisory.current_version, advisory.latest_version
            );
            sink.emit(&advisory);
        }
    }

    /// Returns the advisory a check would emit, if any
    pub async fn evaluate(&self, current_version: &str) -> Option<Advisory> {
        let current = parse_version(current_version)?;

        let request = Request::new(&self.package_name, current_version);
        let remote = match tokio::time::timeout(self.timeout, self.registry.fetch(&request)).await
        {
            Ok(remote) => remote?,
            Err(_) => {
                debug!("Registry query exceeded {:?}", self.timeout);
                return None;
            }
        };

        let latest = parse_version(&remote.version)?;

        match compare(&current, &latest) {
            Ordering::Less => Some(Advisory {
                package_name: self.package_name.clone(),
                current_version: current.to_string(),
                latest_version: latest.to_string(),
                url: remote.url,
            }),
            Ordering::Equal | Ordering::Greater => {
                debug!(
                    "{} {} is up to date (registry reports {})",
                    self.package_name, current, latest
                );
                None
            }
        }
    }
}

impl<R: Registry + 'static> FreshnessChecker<R> {
    /// Runs the check as a background task
    ///
    /// The task finishes within the configured timeout even when the network
    /// is unreachable. Abort the handle to cancel it earlier.
    pub fn spawn<S>(self, current_version: String, sink: S) -> JoinHandle<()>
    where
        S: AdvisorySink + 'static,
    {
        tokio::spawn(async move { self.check(&current_version, &sink).await })
    }
}

/// Runs one check against the registry described by `config`
///
/// Never fails: an unreachable registry and an up-to-date release look the
/// same to the caller.
pub async fn check(current_version: &str, config: &RegistryConfig, sink: &dyn AdvisorySink) {
    if let Some(checker) = FreshnessChecker::from_config(config) {
        checker.check(current_version, sink).await;
    }
}

fn parse_version(version: &str) -> Option<VersionString> {
    VersionString::parse(version)
        .inspect_err(|e| debug!("Ignoring unparseable version: {}", e))
        .ok()
}
