//! Bridge error types
//!
//! Error definitions for bridge adapters, with transient/permanent
//! classification so callers can decide whether to try again.

use thiserror::Error;

/// Error that can occur while serving a bridge request.
#[derive(Debug, Error)]
pub enum BridgeError {
    // Query errors (permanent)
    /// The query template references a parameter that was not supplied.
    #[error("missing parameter: query references '{name}' but no value was bound")]
    MissingParameter { name: String },

    /// The query template is malformed.
    #[error("invalid query: {message}")]
    InvalidQuery { message: String },

    // Transport errors (transient)
    /// Failed to reach the target system or read its response.
    #[error("connection failed: {message}")]
    ConnectionFailed {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // Authentication errors
    /// The target system rejected the credentials.
    #[error("authentication failed: invalid credentials")]
    AuthenticationFailed,

    /// The credentials are valid but lack permission.
    #[error("authorization failed: insufficient permissions for {operation}")]
    AuthorizationFailed { operation: String },

    // Response errors
    /// The response body does not have the expected shape.
    #[error("unexpected response format: {message}")]
    ResponseFormat { message: String },

    /// A single-record query matched more than one record.
    #[error("expected a single match but the '{structure}' query matched {count} records")]
    MultipleMatches { structure: String, count: usize },

    // Configuration errors
    /// Adapter configuration is invalid.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl BridgeError {
    /// Check if this error is transient and the request may succeed later.
    ///
    /// Adapters never retry on their own; this is advice for the caller.
    pub fn is_transient(&self) -> bool {
        matches!(self, BridgeError::ConnectionFailed { .. })
    }

    /// Check if this error is permanent and retry won't help.
    pub fn is_permanent(&self) -> bool {
        !self.is_transient()
    }

    /// Get an error code for classification.
    pub fn error_code(&self) -> &'static str {
        match self {
            BridgeError::MissingParameter { .. } => "MISSING_PARAMETER",
            BridgeError::InvalidQuery { .. } => "INVALID_QUERY",
            BridgeError::ConnectionFailed { .. } => "CONNECTION_FAILED",
            BridgeError::AuthenticationFailed => "AUTH_FAILED",
            BridgeError::AuthorizationFailed { .. } => "AUTHORIZATION_FAILED",
            BridgeError::ResponseFormat { .. } => "RESPONSE_FORMAT",
            BridgeError::MultipleMatches { .. } => "MULTIPLE_MATCHES",
            BridgeError::InvalidConfiguration { .. } => "INVALID_CONFIG",
        }
    }

    // Convenience constructors

    /// Create a missing parameter error.
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        BridgeError::MissingParameter { name: name.into() }
    }

    /// Create a connection failed error.
    pub fn connection_failed(message: impl Into<String>) -> Self {
        BridgeError::ConnectionFailed {
            message: message.into(),
            source: None,
        }
    }

    /// Create a connection failed error with source.
    pub fn connection_failed_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        BridgeError::ConnectionFailed {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a response format error.
    pub fn response_format(message: impl Into<String>) -> Self {
        BridgeError::ResponseFormat {
            message: message.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        BridgeError::InvalidConfiguration {
            message: message.into(),
        }
    }
}

/// Result type for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;
