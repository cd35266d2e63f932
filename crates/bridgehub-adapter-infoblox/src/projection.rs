//! Record projection
//!
//! Builds bridge records from WAPI objects and works out which top-level
//! fields the server has to return for a given field list.

use serde_json::{Map, Value};

use crate::field_path::FieldPath;

/// Top-level container holding user-defined extensible attributes.
pub const EXTENSIBLE_ATTRIBUTES: &str = "extensible_attributes";

/// Object reference WAPI always returns, whatever `_return_fields` says.
pub const SELF_REFERENCE: &str = "_ref";

/// Name of the extensible attribute addressed by `field`, if any.
///
/// `extensible_attributes.VLAN` addresses the `VLAN` attribute.
pub fn extensible_attribute(field: &str) -> Option<&str> {
    field
        .strip_prefix(EXTENSIBLE_ATTRIBUTES)
        .and_then(|rest| rest.strip_prefix('.'))
}

/// Top-level fields to request through `_return_fields`.
///
/// Each requested field contributes its base segment once; extensible
/// attributes contribute the container once. `_ref` is never listed.
pub fn return_fields<S: AsRef<str>>(fields: &[S]) -> Vec<String> {
    let mut returnable: Vec<String> = Vec::new();

    for field in fields.iter().map(AsRef::as_ref) {
        let base = if extensible_attribute(field).is_some() {
            EXTENSIBLE_ATTRIBUTES.to_string()
        } else if field == SELF_REFERENCE {
            continue;
        } else {
            FieldPath::parse(field).base().to_string()
        };

        if !returnable.contains(&base) {
            returnable.push(base);
        }
    }

    returnable
}

/// Project one WAPI object onto the requested fields.
///
/// Keys come out in request order, named exactly as requested.
/// Extensible attributes keep their raw JSON value. Other fields keep
/// strings as they are and render anything else as compact JSON text;
/// unresolvable fields are `null`.
pub fn project<S: AsRef<str>>(fields: &[S], record: &Value) -> Map<String, Value> {
    let mut projected = Map::new();

    for field in fields.iter().map(AsRef::as_ref) {
        let value = match extensible_attribute(field) {
            Some(attribute) => record
                .get(EXTENSIBLE_ATTRIBUTES)
                .and_then(|attrs| attrs.get(attribute))
                .cloned()
                .unwrap_or(Value::Null),
            None => to_field_value(FieldPath::parse(field).resolve(record)),
        };
        projected.insert(field.to_string(), value);
    }

    projected
}

fn to_field_value(value: Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::String(_) => value,
        other => Value::String(other.to_string()),
    }
}
