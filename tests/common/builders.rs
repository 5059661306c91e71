//! Test builders — ergonomic constructors for fact documents.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning
//! `Result`.

use serde_json::{json, Map, Value};

/// Fluent builder for raw fact documents.
///
/// # Example
///
/// ```rust
/// let doc = FactDocBuilder::new()
///     .ip("10.0.0.5")
///     .fact("ansible_hostname", "web01")
///     .fact("ansible_memtotal_mb", 1500)
///     .build();
/// ```
pub struct FactDocBuilder {
    facts: Map<String, Value>,
    wrapper_id: Option<String>,
    usuarios: Option<Value>,
}

impl Default for FactDocBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FactDocBuilder {
    pub fn new() -> Self {
        Self { facts: Map::new(), wrapper_id: None, usuarios: None }
    }

    /// Set any raw fact key.
    pub fn fact(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.facts.insert(key.to_string(), value.into());
        self
    }

    /// Shortcut for the default-ipv4 mapping.
    pub fn ip(self, address: &str) -> Self {
        self.fact("ansible_default_ipv4", json!({ "address": address }))
    }

    /// Wrap the facts under a `facts` sub-mapping with this inventory
    /// identifier (the collector-format variant).
    pub fn wrapped(mut self, inventory_hostname: &str) -> Self {
        self.wrapper_id = Some(inventory_hostname.to_string());
        self
    }

    /// Attach a usuarios text block as a list of lines.
    pub fn usuarios(mut self, lines: &[&str]) -> Self {
        self.usuarios = Some(json!(lines));
        self
    }

    pub fn build(self) -> Map<String, Value> {
        match self.wrapper_id {
            None => self.facts,
            Some(id) => {
                let mut doc = Map::new();
                doc.insert("inventory_hostname".to_string(), json!(id));
                doc.insert("facts".to_string(), Value::Object(self.facts));
                if let Some(usuarios) = self.usuarios {
                    doc.insert("usuarios".to_string(), usuarios);
                }
                doc
            }
        }
    }
}

/// Parse a raw JSON fixture into the mapping shape the normalizer takes.
pub fn parse_doc(raw: &str) -> Map<String, Value> {
    serde_json::from_str::<Value>(raw)
        .expect("fixture must be valid JSON")
        .as_object()
        .expect("fixture must be a JSON object")
        .clone()
}
