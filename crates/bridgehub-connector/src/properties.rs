//! Configurable adapter properties
//!
//! Adapters declare the named properties they need (host, credentials, ...)
//! and the hosting platform fills in values before the adapter is built.

use std::collections::HashMap;
use std::fmt;

use crate::error::{BridgeError, BridgeResult};

/// Declaration of a single named adapter property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurableProperty {
    /// Property name as shown to the administrator.
    pub name: String,
    /// Whether a non-empty value must be supplied.
    pub required: bool,
    /// Whether the value must be masked when displayed.
    pub sensitive: bool,
}

impl ConfigurableProperty {
    /// Declare an optional, non-sensitive property.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            sensitive: false,
        }
    }

    /// Mark the property as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the property as sensitive.
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }
}

/// Declared properties plus the values supplied for them.
#[derive(Clone, Default)]
pub struct ConfigurablePropertyMap {
    properties: Vec<ConfigurableProperty>,
    values: HashMap<String, String>,
}

impl ConfigurablePropertyMap {
    /// Create a map from a list of declarations.
    pub fn new(properties: impl IntoIterator<Item = ConfigurableProperty>) -> Self {
        Self {
            properties: properties.into_iter().collect(),
            values: HashMap::new(),
        }
    }

    /// Declared properties, in declaration order.
    pub fn properties(&self) -> &[ConfigurableProperty] {
        &self.properties
    }

    /// Store values for declared properties. Undeclared names are ignored.
    pub fn set_values(&mut self, values: &HashMap<String, String>) {
        for property in &self.properties {
            if let Some(value) = values.get(&property.name) {
                self.values.insert(property.name.clone(), value.clone());
            }
        }
    }

    /// Builder variant of [`set_values`](Self::set_values).
    pub fn with_values(mut self, values: &HashMap<String, String>) -> Self {
        self.set_values(values);
        self
    }

    /// Value of a property, if one was supplied.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Value of a property, or an error naming it when absent or empty.
    pub fn required_value(&self, name: &str) -> BridgeResult<&str> {
        match self.value(name) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(BridgeError::invalid_configuration(format!(
                "property '{name}' is required"
            ))),
        }
    }

    /// Check that every required property has a non-empty value.
    pub fn validate(&self) -> BridgeResult<()> {
        let missing: Vec<&str> = self
            .properties
            .iter()
            .filter(|p| p.required)
            .filter(|p| self.value(&p.name).map_or(true, |v| v.trim().is_empty()))
            .map(|p| p.name.as_str())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(BridgeError::invalid_configuration(format!(
                "missing required properties: {}",
                missing.join(", ")
            )))
        }
    }
}

impl fmt::Debug for ConfigurablePropertyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for property in &self.properties {
            match self.value(&property.name) {
                Some(_) if property.sensitive => map.entry(&property.name, &"***REDACTED***"),
                Some(value) => map.entry(&property.name, &value),
                None => map.entry(&property.name, &Option::<&str>::None),
            };
        }
        map.finish()
    }
}
