//! HTTP transport
//!
//! The adapter only needs `GET url -> (status, body)`. [`HttpTransport`]
//! provides it with reqwest; tests can substitute their own [`Transport`].

use async_trait::async_trait;
use reqwest::Client;

use bridgehub_connector::config::{ConnectionSettings, TlsConfig};
use bridgehub_connector::error::{BridgeError, BridgeResult};

/// Status and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Minimal HTTP capability used by the adapter.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET request and read the whole body.
    async fn get(&self, url: &str, headers: &[(String, String)]) -> BridgeResult<HttpResponse>;
}

/// reqwest-backed transport.
///
/// A client is built for each request and dropped when the request
/// finishes, whether it succeeded or not.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    tls: TlsConfig,
    connection: ConnectionSettings,
}

impl HttpTransport {
    pub fn new(tls: TlsConfig, connection: ConnectionSettings) -> Self {
        Self { tls, connection }
    }

    /// Build the reqwest client with configuration.
    fn build_client(&self) -> BridgeResult<Client> {
        let mut builder = Client::builder()
            .timeout(self.connection.read_timeout())
            .connect_timeout(self.connection.connection_timeout());

        // Accepting any certificate also skips the host name check.
        if self.tls.is_relaxed() {
            builder = builder.danger_accept_invalid_certs(true);
        }

        builder.build().map_err(|e| {
            BridgeError::connection_failed_with_source("Failed to build HTTP client", e)
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, headers: &[(String, String)]) -> BridgeResult<HttpResponse> {
        let client = self.build_client()?;

        let mut request = client.get(url);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        // reqwest errors carry the full URL, filter values included.
        let response = request.send().await.map_err(|e| {
            BridgeError::connection_failed_with_source(
                format!("Request failed: {}", strip_query(url)),
                e.without_url(),
            )
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            BridgeError::connection_failed_with_source(
                "Failed to read response body",
                e.without_url(),
            )
        })?;

        Ok(HttpResponse { status, body })
    }
}

/// The URL without its query string, for error messages.
fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}
