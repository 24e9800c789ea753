//! Registry trait for querying the latest published release

#[cfg(test)]
use mockall::automock;

use crate::version::types::{RemoteAdvisory, Request};

/// Trait for asking a remote registry about the latest release
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Performs one query for the package named in `request`
    ///
    /// # Returns
    /// * `Some(RemoteAdvisory)` - The registry answered with a well-formed payload
    /// * `None` - Anything else: unreachable, timed out, bad status or bad body
    async fn fetch(&self, request: &Request) -> Option<RemoteAdvisory>;
}
