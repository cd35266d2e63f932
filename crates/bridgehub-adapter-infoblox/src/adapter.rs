//! Infoblox adapter implementation
//!
//! Implements the BridgeAdapter trait on top of the Infoblox WAPI.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument, trace};

use bridgehub_connector::config::ConnectorConfig;
use bridgehub_connector::error::{BridgeError, BridgeResult};
use bridgehub_connector::properties::ConfigurablePropertyMap;
use bridgehub_connector::request::{BridgeRequest, Count, Record, RecordList};
use bridgehub_connector::traits::BridgeAdapter;

use crate::config::InfobloxConfig;
use crate::projection::{project, return_fields};
use crate::qualification::{translate, QueryFilter};
use crate::transport::{HttpResponse, HttpTransport, Transport};

/// Adapter display name.
pub const NAME: &str = "Infoblox Bridge";

/// Bridge adapter for Infoblox IPAM/DNS objects.
pub struct InfobloxAdapter {
    /// Configuration.
    config: InfobloxConfig,

    /// HTTP transport.
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for InfobloxAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfobloxAdapter")
            .field("config", &self.config.redacted())
            .finish()
    }
}

impl InfobloxAdapter {
    /// Create an adapter that talks to the configured host over HTTP(S).
    pub fn new(config: InfobloxConfig) -> BridgeResult<Self> {
        let transport = HttpTransport::new(config.tls.clone(), config.connection.clone());
        Self::with_transport(config, transport)
    }

    /// Create an adapter with a custom transport.
    pub fn with_transport(
        config: InfobloxConfig,
        transport: impl Transport + 'static,
    ) -> BridgeResult<Self> {
        config.validate()?;
        config.tls.validate_security();

        Ok(Self {
            config,
            transport: Arc::new(transport),
        })
    }

    /// Create an adapter from the hosting platform's property values.
    pub fn from_properties(properties: &ConfigurablePropertyMap) -> BridgeResult<Self> {
        Self::new(InfobloxConfig::from_properties(properties)?)
    }

    /// The adapter configuration.
    pub fn config(&self) -> &InfobloxConfig {
        &self.config
    }

    /// URL for a count: no return fields, only the filter.
    fn count_url(&self, structure: &str, filter: &QueryFilter) -> String {
        let mut url = self.config.structure_url(structure);
        if !filter.is_match_all() {
            url.push('?');
            url.push_str(&filter.encoded());
        }
        url
    }

    /// URL for a record query: return fields followed by the filter.
    fn records_url(&self, structure: &str, fields: &[String], filter: &QueryFilter) -> String {
        let mut url = self.config.structure_url(structure);
        url.push_str("?_return_fields=");
        url.push_str(&return_fields(fields).join(","));
        if !filter.is_match_all() {
            url.push('&');
            url.push_str(&filter.encoded());
        }
        url
    }

    /// Headers sent with every request.
    fn request_headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if let Some(value) = self.config.auth.authorization_header() {
            headers.push(("Authorization".to_string(), value));
        }
        headers
    }

    /// Issue a GET and parse the body as a JSON array of objects.
    async fn fetch(&self, structure: &str, url: &str) -> BridgeResult<Vec<Value>> {
        let verbosity = self.config.log_verbosity;

        if verbosity.is_enabled() {
            debug!(url = %url, "Sending WAPI request");
        }

        let response = self.transport.get(url, &self.request_headers()).await?;

        if verbosity.is_enabled() {
            debug!(status = response.status, "Received WAPI response");
        }
        if verbosity.log_bodies() {
            trace!(body = %response.body, "WAPI response body");
        }

        match response.status {
            401 => Err(BridgeError::AuthenticationFailed),
            403 => Err(BridgeError::AuthorizationFailed {
                operation: format!("GET {structure}"),
            }),
            _ => parse_results(&response),
        }
    }
}

/// Parse a WAPI response body into its result objects.
///
/// The body itself never goes into the error; it is only logged at trace
/// level.
fn parse_results(response: &HttpResponse) -> BridgeResult<Vec<Value>> {
    let parsed: Value = serde_json::from_str(&response.body).map_err(|e| {
        BridgeError::response_format(format!(
            "HTTP {} response is not valid JSON ({e}); enable trace logging to see the full body",
            response.status
        ))
    })?;

    match parsed {
        Value::Array(items) => Ok(items),
        Value::Object(ref obj) if obj.get("text").is_some_and(Value::is_string) => {
            let text = obj.get("text").and_then(Value::as_str).unwrap_or_default();
            Err(BridgeError::response_format(format!(
                "HTTP {} response is not a JSON array; WAPI error: {text}",
                response.status
            )))
        }
        _ => Err(BridgeError::response_format(format!(
            "HTTP {} response is not a JSON array",
            response.status
        ))),
    }
}

#[async_trait]
impl BridgeAdapter for InfobloxAdapter {
    fn name(&self) -> &str {
        NAME
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    #[instrument(skip(self, request), fields(structure = %request.structure))]
    async fn count(&self, request: &BridgeRequest) -> BridgeResult<Count> {
        let filter = translate(&request.query, &request.parameters)?;
        let url = self.count_url(&request.structure, &filter);

        let results = self.fetch(&request.structure, &url).await?;

        info!(count = results.len(), "WAPI count complete");
        Ok(Count::new(results.len() as u64))
    }

    #[instrument(skip(self, request), fields(structure = %request.structure))]
    async fn retrieve(&self, request: &BridgeRequest) -> BridgeResult<Record> {
        let filter = translate(&request.query, &request.parameters)?;
        let url = self.records_url(&request.structure, &request.fields, &filter);

        let results = self.fetch(&request.structure, &url).await?;

        match results.as_slice() {
            [] => {
                info!("No record matched the retrieve query");
                Ok(Record::not_found())
            }
            [object] => Ok(Record::new(project(&request.fields, object))),
            _ => Err(BridgeError::MultipleMatches {
                structure: request.structure.clone(),
                count: results.len(),
            }),
        }
    }

    #[instrument(skip(self, request), fields(structure = %request.structure))]
    async fn search(&self, request: &BridgeRequest) -> BridgeResult<RecordList> {
        let filter = translate(&request.query, &request.parameters)?;
        let url = self.records_url(&request.structure, &request.fields, &filter);

        let results = self.fetch(&request.structure, &url).await?;

        let records: Vec<Record> = results
            .iter()
            .map(|object| Record::new(project(&request.fields, object)))
            .collect();

        info!(record_count = records.len(), "WAPI search complete");

        Ok(RecordList::single_page(
            request.fields.clone(),
            records,
            &request.metadata,
        ))
    }
}
