//! Infoblox adapter configuration
//!
//! Connection details for a WAPI endpoint, built either directly or from
//! the adapter's declared properties.

use bridgehub_connector::config::{AuthConfig, ConnectionSettings, ConnectorConfig, TlsConfig};
use bridgehub_connector::error::{BridgeError, BridgeResult};
use bridgehub_connector::properties::{ConfigurableProperty, ConfigurablePropertyMap};
use serde::{Deserialize, Serialize};

/// Property holding the appliance URL (e.g. `https://gridmaster.example.com`).
pub const PROPERTY_HOST: &str = "Host";
/// Property holding the WAPI user name.
pub const PROPERTY_USERNAME: &str = "Username";
/// Property holding the WAPI password.
pub const PROPERTY_PASSWORD: &str = "Password";

/// Request/response logging verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogVerbosity {
    /// No request/response logging.
    Quiet,
    /// Log request URL and status code only (default).
    #[default]
    Normal,
    /// Also log raw response bodies at trace level.
    Debug,
}

impl LogVerbosity {
    /// Check if bodies should be logged.
    #[must_use]
    pub fn log_bodies(&self) -> bool {
        matches!(self, LogVerbosity::Debug)
    }

    /// Check if any logging should occur.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !matches!(self, LogVerbosity::Quiet)
    }
}

/// Configuration for the Infoblox adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfobloxConfig {
    /// Appliance base URL, without a trailing slash.
    pub host: String,

    /// Authentication configuration.
    pub auth: AuthConfig,

    /// TLS trust configuration.
    #[serde(default = "TlsConfig::self_signed")]
    pub tls: TlsConfig,

    /// Timeouts.
    #[serde(default)]
    pub connection: ConnectionSettings,

    /// WAPI version segment of the URL.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Logging verbosity for request/response logging.
    #[serde(default)]
    pub log_verbosity: LogVerbosity,
}

fn default_api_version() -> String {
    "v1.0".to_string()
}

impl InfobloxConfig {
    /// Create a config with basic credentials and self-signed TLS trust.
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into().trim_end_matches('/').to_string(),
            auth: AuthConfig::basic(username, password),
            tls: TlsConfig::self_signed(),
            connection: ConnectionSettings::default(),
            api_version: default_api_version(),
            log_verbosity: LogVerbosity::default(),
        }
    }

    /// Properties the hosting platform must supply.
    pub fn properties() -> ConfigurablePropertyMap {
        ConfigurablePropertyMap::new([
            ConfigurableProperty::new(PROPERTY_USERNAME).required(),
            ConfigurableProperty::new(PROPERTY_PASSWORD).required().sensitive(),
            ConfigurableProperty::new(PROPERTY_HOST).required(),
        ])
    }

    /// Build a config from supplied property values.
    pub fn from_properties(properties: &ConfigurablePropertyMap) -> BridgeResult<Self> {
        properties.validate()?;

        Ok(Self::new(
            properties.required_value(PROPERTY_HOST)?.trim(),
            properties.required_value(PROPERTY_USERNAME)?,
            properties.required_value(PROPERTY_PASSWORD)?,
        ))
    }

    /// Set TLS trust configuration.
    pub fn with_tls(mut self, tls: TlsConfig) -> Self {
        self.tls = tls;
        self
    }

    /// Set timeouts.
    pub fn with_connection(mut self, connection: ConnectionSettings) -> Self {
        self.connection = connection;
        self
    }

    /// Set the WAPI version.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set logging verbosity.
    pub fn with_log_verbosity(mut self, verbosity: LogVerbosity) -> Self {
        self.log_verbosity = verbosity;
        self
    }

    /// URL of a WAPI object type, e.g. `<host>/wapi/v1.0/network`.
    pub fn structure_url(&self, structure: &str) -> String {
        format!(
            "{}/wapi/{}/{}",
            self.host.trim_end_matches('/'),
            self.api_version,
            structure
        )
    }
}

impl ConnectorConfig for InfobloxConfig {
    fn validate(&self) -> BridgeResult<()> {
        let url = url::Url::parse(&self.host).map_err(|e| {
            BridgeError::invalid_configuration(format!("invalid host '{}': {e}", self.host))
        })?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(BridgeError::invalid_configuration(format!(
                    "URL scheme '{scheme}' not allowed; only HTTP(S) permitted"
                )));
            }
        }

        if url.host_str().is_none() {
            return Err(BridgeError::invalid_configuration("host URL must have a host"));
        }

        match &self.auth {
            AuthConfig::Basic { username, .. } if username.trim().is_empty() => Err(
                BridgeError::invalid_configuration("username must not be empty"),
            ),
            _ => Ok(()),
        }?;

        if self.api_version.trim().is_empty() {
            return Err(BridgeError::invalid_configuration(
                "api_version must not be empty",
            ));
        }

        // rustls cannot skip the host name check while keeping chain checks.
        if self.tls.verify_certificate && !self.tls.verify_hostname {
            return Err(BridgeError::invalid_configuration(
                "verify_hostname cannot be disabled while verify_certificate is enabled",
            ));
        }

        Ok(())
    }

    fn redacted(&self) -> Self {
        Self {
            auth: self.auth.redacted(),
            ..self.clone()
        }
    }
}
