//! # Infoblox Bridge Adapter
//!
//! Bridge adapter answering count, retrieve and search requests against the
//! Infoblox WAPI REST interface.
//!
//! Requests carry a qualification template (`name~=<%=parameter["Name"]%>`)
//! and a list of field expressions. The template is rendered into a WAPI
//! filter, the needed top-level fields are sent as `_return_fields`, and each
//! returned object is projected onto the requested fields.
//!
//! ## Field expressions
//!
//! - `network` - a top-level field
//! - `ipv4addrs["ipv4addr"]` - a nested field; arrays along the way are
//!   flattened into one value per element
//! - `extensible_attributes.VLAN` - a user-defined extensible attribute
//! - `_ref` - the object reference, always returned by the server
//!
//! ## Example
//!
//! ```ignore
//! use bridgehub_adapter_infoblox::{InfobloxAdapter, InfobloxConfig};
//! use bridgehub_connector::prelude::*;
//!
//! let config = InfobloxConfig::new("https://gridmaster.example.com", "admin", "secret");
//! let adapter = InfobloxAdapter::new(config)?;
//!
//! let request = BridgeRequest::new("record:host")
//!     .with_query("name~=<%=parameter[\"Name\"]%>")
//!     .with_parameter("Name", "web01")
//!     .with_fields(["name", "ipv4addrs[\"ipv4addr\"]", "_ref"]);
//!
//! let hosts = adapter.search(&request).await?;
//! ```

pub mod adapter;
pub mod config;
pub mod field_path;
pub mod projection;
pub mod qualification;
pub mod transport;

// Re-exports
pub use adapter::InfobloxAdapter;
pub use config::{InfobloxConfig, LogVerbosity};
pub use field_path::FieldPath;
pub use projection::{project, return_fields};
pub use qualification::{translate, QueryFilter};
pub use transport::{HttpResponse, HttpTransport, Transport};
