//! Data schemas for slide masters and components.
//!
//! Every dynamically creatable type describes the RawData it accepts with a
//! JSON-Schema-like [`Schema`]. Component schemas are composed from the
//! type's own fragment plus one fragment per [`Capability`] it uses,
//! combined by [`build_schema`]. The same schema drives documentation,
//! the sample-deck generator and optional payload validation
//! ([`validate`]).

pub mod capability;
pub mod field;
pub mod validate;

use serde::Serialize;

pub use capability::{Capability, Fragment};
pub use field::{FieldSchema, FieldType, HEX_COLOR_PATTERN, Kind, Properties, hex_color};
pub use validate::{validate, validation_problems};

/// Top-level object schema.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    schema_type: Kind,
    pub properties: Properties,
    pub required: Vec<String>,
}

impl Schema {
    /// Object schema from its properties and required names.
    pub fn object(properties: Properties, required: &[&str]) -> Self {
        Self {
            schema_type: Kind::Object,
            properties,
            required: required.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Required names without a matching property.
    pub fn dangling_required(&self) -> Vec<&str> {
        self.required
            .iter()
            .map(String::as_str)
            .filter(|name| !self.properties.contains(name))
            .collect()
    }

    /// Serialize to a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    fn merge_fragment(&mut self, fragment: Fragment) {
        self.properties.extend(fragment.properties);
        self.required.extend(fragment.required);
    }

    fn dedupe_required(&mut self) {
        let mut seen = Vec::with_capacity(self.required.len());
        self.required.retain(|name| {
            if seen.contains(name) {
                false
            } else {
                seen.push(name.clone());
                true
            }
        });
    }
}

/// Merge a type's own schema with the fragments of its capabilities.
///
/// Capabilities are applied in the given order; a later fragment overwrites
/// a same-named property from the own schema or an earlier fragment.
/// `required` is the concatenation of all required lists, deduplicated with
/// first occurrence kept. Capabilities without a fragment are skipped.
pub fn build_schema(own: Schema, capabilities: &[Capability]) -> Schema {
    let mut schema = own;
    for capability in capabilities {
        if let Some(fragment) = capability.fragment() {
            schema.merge_fragment(fragment);
        }
    }
    schema.dedupe_required();
    debug_assert!(
        schema.dangling_required().is_empty(),
        "required names without properties: {:?}",
        schema.dangling_required()
    );
    schema
}
