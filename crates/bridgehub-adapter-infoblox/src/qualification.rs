//! Qualification translation
//!
//! Turns a qualification template such as
//! `name~=<%=parameter["Name"]%>` plus the caller's parameter bindings into
//! a WAPI filter query string.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use bridgehub_connector::error::{BridgeError, BridgeResult};

/// Filter that WAPI treats as "every network"; sent as no filter at all.
pub const MATCH_ALL: &str = "network=*";

const PLACEHOLDER_OPEN: &str = "<%=";

static PARAMETER_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<%=\s*parameter\["(.*?)"\]\s*%>"#)
        .expect("PARAMETER_PLACEHOLDER is a valid regex pattern")
});

/// A qualification with every placeholder substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFilter {
    raw: String,
}

impl QueryFilter {
    /// Wrap an already-substituted filter string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The filter before URL encoding.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether this filter selects everything and can be left off the URL.
    pub fn is_match_all(&self) -> bool {
        self.raw.is_empty() || self.raw == MATCH_ALL
    }

    /// The filter encoded for a URL query string.
    ///
    /// Everything is percent-encoded except `=` and `&`, which carry the
    /// filter's own `key=value&key~=value` structure.
    pub fn encoded(&self) -> String {
        urlencoding::encode(&self.raw)
            .replace("%3D", "=")
            .replace("%26", "&")
    }
}

/// Substitute parameter bindings into a qualification template.
///
/// Values are inserted literally; encoding happens in
/// [`QueryFilter::encoded`]. A placeholder naming an unbound parameter is an
/// error, as is an opening `<%=` that never forms a complete placeholder.
pub fn translate(template: &str, bindings: &HashMap<String, String>) -> BridgeResult<QueryFilter> {
    let mut rendered = String::with_capacity(template.len());
    let mut last = 0;

    for cap in PARAMETER_PLACEHOLDER.captures_iter(template) {
        let placeholder = cap.get(0).map_or(0..0, |m| m.range());
        let name = &cap[1];

        let literal = &template[last..placeholder.start];
        check_literal(literal)?;
        rendered.push_str(literal);

        let value = bindings
            .get(name)
            .ok_or_else(|| BridgeError::missing_parameter(name))?;
        rendered.push_str(value);

        last = placeholder.end;
    }

    let tail = &template[last..];
    check_literal(tail)?;
    rendered.push_str(tail);

    Ok(QueryFilter::new(rendered))
}

fn check_literal(literal: &str) -> BridgeResult<()> {
    if literal.contains(PLACEHOLDER_OPEN) {
        return Err(BridgeError::InvalidQuery {
            message: format!("unrecognized placeholder in '{literal}'"),
        });
    }
    Ok(())
}
