//! Bridge adapter trait
//!
//! The capability every adapter exposes to the hosting platform.

use async_trait::async_trait;

use crate::error::BridgeResult;
use crate::request::{BridgeRequest, Count, Record, RecordList};

/// An adapter answering count/retrieve/search requests for one target system.
///
/// Each call is an independent request/response cycle; implementations keep
/// no per-request state between calls.
#[async_trait]
pub trait BridgeAdapter: Send + Sync {
    /// Display name of the adapter.
    fn name(&self) -> &str;

    /// Adapter version.
    fn version(&self) -> &str;

    /// Count the records matching the request.
    async fn count(&self, request: &BridgeRequest) -> BridgeResult<Count>;

    /// Retrieve the single record matching the request.
    ///
    /// Returns [`Record::not_found`] when nothing matches, and an error when
    /// more than one record matches.
    async fn retrieve(&self, request: &BridgeRequest) -> BridgeResult<Record>;

    /// Retrieve every record matching the request.
    async fn search(&self, request: &BridgeRequest) -> BridgeResult<RecordList>;
}
