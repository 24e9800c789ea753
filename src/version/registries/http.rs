//! HTTP client for the release-metadata endpoint
//!
//! The endpoint is queried with `GET <service_url>?package=<name>&version=<current>`
//! and answers with a JSON object such as
//! `{"version": "0.5", "url": "http://probcomp.org/bayesdb/release"}`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::config::{DEFAULT_SERVICE_URL, FETCH_TIMEOUT_MS};
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::{RemoteAdvisory, Request};

/// Single-shot registry client
///
/// Each call makes exactly one attempt bounded by `timeout`; every failure
/// is reported as "no advisory".
pub struct RegistryClient {
    client: Client,
    service_url: String,
    timeout: Duration,
}

impl Default for RegistryClient {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_URL, Duration::from_millis(FETCH_TIMEOUT_MS))
    }
}

impl RegistryClient {
    pub fn new(service_url: &str, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            service_url: service_url.to_string(),
            timeout,
        }
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn try_fetch(&self, request: &Request) -> Result<RemoteAdvisory, RegistryError> {
        debug!(
            "Querying {} for {} {}",
            self.service_url, request.package_name, request.current_version
        );

        let response = self
            .client
            .get(&self.service_url)
            .query(&[
                ("package", request.package_name.as_str()),
                ("version", request.current_version.as_str()),
            ])
            .header(USER_AGENT, request.user_agent.as_str())
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(RegistryError::Status(status));
        }

        let body = response.bytes().await?;

        serde_json::from_slice::<RemoteAdvisory>(&body)
            .map_err(|e| RegistryError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl Registry for RegistryClient {
    async fn fetch(&self, request: &Request) -> Option<RemoteAdvisory> {
        self.try_fetch(request)
            .await
            .inspect_err(|e| debug!("No advisory from {}: {}", self.service_url, e))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server, ServerGuard};
    use std::time::Instant;
    use tokio::net::TcpListener;

    const PATH: &str = "/bayeslite.version";

    fn request() -> Request {
        Request::new("bayeslite", "0.5")
    }

    fn client_for(server: &ServerGuard) -> RegistryClient {
        RegistryClient::new(
            &format!("{}{}", server.url(), PATH),
            Duration::from_millis(FETCH_TIMEOUT_MS),
        )
    }

    #[tokio::test]
    async fn fetch_sends_query_parameters_and_user_agent() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("package".into(), "bayeslite".into()),
                Matcher::UrlEncoded("version".into(), "0.5".into()),
            ]))
            .match_header("user-agent", "bayeslite 0.5")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"version": "0.6", "url": "http://probcomp.org/bayesdb/release"}"#)
            .create_async()
            .await;

        let result = client_for(&server).fetch(&request()).await;

        mock.assert_async().await;
        assert_eq!(
            result,
            Some(RemoteAdvisory {
                version: "0.6".to_string(),
                url: "http://probcomp.org/bayesdb/release".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn fetch_returns_none_for_server_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", PATH)
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body(r#"{"version": "0.6", "url": "http://x"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client.try_fetch(&request()).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::Status(s)) if s == StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(client.fetch(&request()).await, None);
    }

    #[tokio::test]
    async fn fetch_returns_none_for_non_ok_success_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", PATH)
            .match_query(Matcher::Any)
            .with_status(203)
            .with_body(r#"{"version": "0.6", "url": "http://x"}"#)
            .create_async()
            .await;

        let result = client_for(&server).try_fetch(&request()).await;

        assert!(matches!(result, Err(RegistryError::Status(_))));
    }

    #[tokio::test]
    async fn fetch_returns_none_for_missing_version_field() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"url": "http://x"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client.try_fetch(&request()).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::InvalidResponse(_))));
        assert_eq!(client.fetch(&request()).await, None);
    }

    #[tokio::test]
    async fn fetch_returns_none_for_malformed_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>Service Unavailable</html>")
            .create_async()
            .await;

        let result = client_for(&server).try_fetch(&request()).await;

        assert!(matches!(result, Err(RegistryError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_handles_network_error() {
        // Use an invalid URL to trigger a network error
        let client = RegistryClient::new(
            "http://invalid.localhost.test:99999",
            Duration::from_millis(FETCH_TIMEOUT_MS),
        );

        let result = client.try_fetch(&request()).await;

        assert!(matches!(result, Err(RegistryError::Network(_))));
        assert_eq!(client.fetch(&request()).await, None);
    }

    #[tokio::test]
    async fn fetch_returns_none_within_timeout_when_server_never_responds() {
        // Accepts connections and never writes a byte
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let timeout = Duration::from_millis(200);
        let client = RegistryClient::new(&format!("http://{addr}{PATH}"), timeout);

        let started = Instant::now();
        let result = client.try_fetch(&request()).await;
        let elapsed = started.elapsed();

        assert!(matches!(result, Err(RegistryError::Network(ref e)) if e.is_timeout()));
        assert!(elapsed < timeout + Duration::from_secs(1), "took {elapsed:?}");

        server.abort();
    }
}
