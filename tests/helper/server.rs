//! Registry endpoint test utilities

use std::time::Duration;

use freshness_check::config::RegistryConfig;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Registry configuration pointing at `service_url`
pub fn registry_config(service_url: &str, timeout: Duration) -> RegistryConfig {
    RegistryConfig {
        enabled: true,
        service_url: service_url.to_string(),
        package_name: "bayeslite".to_string(),
        timeout_ms: timeout.as_millis() as u64,
    }
}

/// URL of a local port with nothing listening on it
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/bayeslite.version")
}

/// Starts a server that accepts connections and never answers
pub async fn silent_server_url() -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    (format!("http://{addr}/bayeslite.version"), handle)
}
