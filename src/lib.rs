//! Best-effort check that reports when a newer release of a package is
//! published.
//!
//! ```no_run
//! use freshness_check::config::RegistryConfig;
//! use freshness_check::version::checker::FreshnessChecker;
//! use freshness_check::version::sink::TracingSink;
//!
//! # async fn startup() {
//! if let Some(checker) = FreshnessChecker::from_config(&RegistryConfig::default()) {
//!     checker.spawn(env!("CARGO_PKG_VERSION").to_string(), TracingSink);
//! }
//! # }
//! ```

pub mod config;
pub mod logging;
pub mod version;

pub use version::checker::{FreshnessChecker, check};
pub use version::sink::{Advisory, AdvisorySink, StderrSink, TracingSink};
pub use version::version_string::VersionString;
