//! # Bridge Connector Framework
//!
//! Core abstractions for bridge adapters: components that answer
//! count, retrieve and search requests against an external system and hand
//! back generic tabular records.
//!
//! ## Architecture
//!
//! - [`BridgeAdapter`](traits::BridgeAdapter) - the capability trait adapters implement
//! - [`BridgeRequest`](request::BridgeRequest) - structure, query template,
//!   parameter bindings, requested fields and pagination metadata
//! - [`Count`](request::Count), [`Record`](request::Record),
//!   [`RecordList`](request::RecordList) - the response shapes
//!
//! ## Example
//!
//! ```ignore
//! use bridgehub_connector::prelude::*;
//!
//! let request = BridgeRequest::new("network")
//!     .with_query("network~=<%=parameter[\"Network\"]%>")
//!     .with_parameter("Network", "10.0.0.0/24")
//!     .with_fields(["network", "comment"]);
//!
//! let records = adapter.search(&request).await?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`error`] - Error types with transient/permanent classification
//! - [`request`] - Request/response types and pagination metadata
//! - [`traits`] - The adapter trait
//! - [`config`] - Shared configuration types (auth, TLS, timeouts)
//! - [`properties`] - Declared adapter properties and their values

pub mod config;
pub mod error;
pub mod properties;
pub mod request;
pub mod traits;

/// Prelude module for convenient imports.
///
/// ```
/// use bridgehub_connector::prelude::*;
/// ```
pub mod prelude {
    // Error handling
    pub use crate::error::{BridgeError, BridgeResult};

    // Traits
    pub use crate::traits::BridgeAdapter;

    // Requests and responses
    pub use crate::request::{
        normalize_pagination_metadata, BridgeRequest, Count, Record, RecordList,
    };

    // Configuration
    pub use crate::config::{AuthConfig, ConnectionSettings, ConnectorConfig, TlsConfig};
    pub use crate::properties::{ConfigurableProperty, ConfigurablePropertyMap};
}

// Re-export async_trait for adapter implementors
pub use async_trait::async_trait;
