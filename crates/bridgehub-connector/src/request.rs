//! Bridge request and response types
//!
//! The request a caller hands to an adapter, and the three response shapes
//! an adapter can produce: a count, a single record, or a list of records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// Metadata key for the requested page size.
pub const PAGE_SIZE: &str = "pageSize";
/// Metadata key for the requested page number (1-based).
pub const PAGE_NUMBER: &str = "pageNumber";
/// Metadata key for the number of records to skip.
pub const OFFSET: &str = "offset";
/// Metadata key for the number of records in the returned page.
pub const SIZE: &str = "size";
/// Metadata key for the total number of matching records.
pub const COUNT: &str = "count";

/// A query against one structure of the target system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeRequest {
    /// Target structure (object type) name.
    pub structure: String,

    /// Qualification template, possibly containing parameter placeholders.
    #[serde(default)]
    pub query: String,

    /// Values for the placeholders in `query`.
    #[serde(default)]
    pub parameters: HashMap<String, String>,

    /// Requested field expressions, in output order.
    #[serde(default)]
    pub fields: Vec<String>,

    /// Pagination metadata supplied by the caller.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl BridgeRequest {
    /// Create a request for a structure with no query and no fields.
    pub fn new(structure: impl Into<String>) -> Self {
        Self {
            structure: structure.into(),
            ..Default::default()
        }
    }

    /// Set the qualification template.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Bind a parameter value.
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Set the requested fields.
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Add a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Number of records matching a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Count {
    pub value: u64,
}

impl Count {
    pub fn new(value: u64) -> Self {
        Self { value }
    }
}

/// A single record, or the absence of one.
///
/// Field order follows the order in which fields were requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub fields: Option<Map<String, Value>>,
}

impl Record {
    /// Wrap a field mapping.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self {
            fields: Some(fields),
        }
    }

    /// The record returned when nothing matched.
    pub fn not_found() -> Self {
        Self { fields: None }
    }

    /// Whether a record was found.
    pub fn is_found(&self) -> bool {
        self.fields.is_some()
    }

    /// Value of a field. `None` when the record is absent or lacks the field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.as_ref().and_then(|f| f.get(name))
    }
}

/// A list of records plus pagination metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordList {
    pub fields: Vec<String>,
    pub records: Vec<Record>,
    pub metadata: BTreeMap<String, String>,
}

impl RecordList {
    pub fn new(
        fields: Vec<String>,
        records: Vec<Record>,
        metadata: BTreeMap<String, String>,
    ) -> Self {
        Self {
            fields,
            records,
            metadata,
        }
    }

    /// Build a list for a backend that returns every match in one response.
    ///
    /// The metadata always describes a single unbounded page (`pageSize` 0,
    /// `pageNumber` 1, `offset` 0) holding all records. Other caller
    /// metadata is carried through.
    pub fn single_page(
        fields: Vec<String>,
        records: Vec<Record>,
        request_metadata: &HashMap<String, String>,
    ) -> Self {
        let mut metadata = normalize_pagination_metadata(request_metadata);
        let size = records.len().to_string();
        metadata.insert(PAGE_SIZE.to_string(), "0".to_string());
        metadata.insert(PAGE_NUMBER.to_string(), "1".to_string());
        metadata.insert(OFFSET.to_string(), "0".to_string());
        metadata.insert(SIZE.to_string(), size.clone());
        metadata.insert(COUNT.to_string(), size);
        Self::new(fields, records, metadata)
    }

    /// Number of records in the list.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Fill in default pagination metadata.
///
/// `pageSize`, `pageNumber` and `offset` default to `0`, `1` and `0` when
/// absent or not a non-negative integer. Other keys pass through untouched.
pub fn normalize_pagination_metadata(
    metadata: &HashMap<String, String>,
) -> BTreeMap<String, String> {
    let mut normalized: BTreeMap<String, String> = metadata
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    for (key, default) in [(PAGE_SIZE, "0"), (PAGE_NUMBER, "1"), (OFFSET, "0")] {
        let valid = normalized
            .get(key)
            .is_some_and(|v| v.trim().parse::<u64>().is_ok());
        if !valid {
            normalized.insert(key.to_string(), default.to_string());
        }
    }

    normalized
}
