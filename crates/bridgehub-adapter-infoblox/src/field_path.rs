//! Field path parsing and resolution
//!
//! Field expressions address values inside a JSON record. A plain name
//! (`network`) selects a top-level key; bracketed quoted names
//! (`ipv4addrs["ipv4addr"]`) descend into nested objects. When a path
//! crosses an array, the rest of the path is resolved against every element
//! and the results are collected in array order.

use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::sync::LazyLock;

// Word characters are ASCII only; non-ASCII names stay opaque.
static INDEXED_EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?-u:\w)+(?:\["(?-u:\w)*"\])*$"#)
        .expect("INDEXED_EXPRESSION is a valid regex pattern")
});

static CHILD_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\["((?-u:\w)*)"\]"#).expect("CHILD_SEGMENT is a valid regex pattern")
});

/// Ordered list of keys to follow from the root of a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a field expression.
    ///
    /// `outer["inner1"]["inner2"]` becomes `[outer, inner1, inner2]`.
    /// Anything outside that grammar (dots, spaces, colons, ...) is kept
    /// whole as a single segment, so the result is never empty.
    pub fn parse(expression: &str) -> Self {
        if !INDEXED_EXPRESSION.is_match(expression) {
            return Self {
                segments: vec![expression.to_string()],
            };
        }

        let base = expression.split('[').next().unwrap_or(expression);
        let segments = std::iter::once(base.to_string())
            .chain(
                CHILD_SEGMENT
                    .captures_iter(expression)
                    .map(|cap| cap[1].to_string()),
            )
            .collect();

        Self { segments }
    }

    /// All segments, root first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The top-level key this path starts from.
    pub fn base(&self) -> &str {
        &self.segments[0]
    }

    /// Resolve this path against a JSON value.
    ///
    /// Missing keys, scalars in the middle of the path and `null` all
    /// resolve to `null`.
    pub fn resolve(&self, value: &Value) -> Value {
        resolve_segments(value, &self.segments)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((base, rest)) = self.segments.split_first() else {
            return Ok(());
        };
        write!(f, "{base}")?;
        for segment in rest {
            write!(f, "[\"{segment}\"]")?;
        }
        Ok(())
    }
}

fn resolve_segments(value: &Value, segments: &[String]) -> Value {
    let Some((head, rest)) = segments.split_first() else {
        return value.clone();
    };

    match value {
        Value::Object(map) => map
            .get(head)
            .map_or(Value::Null, |child| resolve_segments(child, rest)),
        // Broadcast the remaining path over every element.
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| resolve_segments(item, segments))
                .collect(),
        ),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Value::Null,
    }
}
