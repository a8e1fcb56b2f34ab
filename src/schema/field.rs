//! Field descriptors of a data schema.
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// JSON type names a field may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    #[default]
    Object,
    Null,
}

impl Kind {
    /// Whether `value` is an instance of this kind.
    ///
    /// Integers are numbers; floats with no fractional part count as integers.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Kind::String => value.is_string(),
            Kind::Integer => match value {
                Value::Number(n) => n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0),
                _ => false,
            },
            Kind::Number => value.is_number(),
            Kind::Boolean => value.is_boolean(),
            Kind::Array => value.is_array(),
            Kind::Object => value.is_object(),
            Kind::Null => value.is_null(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Integer => "integer",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Null => "null",
        }
    }
}

/// Declared type of a field: a single kind or a union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldType {
    One(Kind),
    Many(Vec<Kind>),
}

impl FieldType {
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            FieldType::One(kind) => kind.accepts(value),
            FieldType::Many(kinds) => kinds.iter().any(|k| k.accepts(value)),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            FieldType::One(kind) => kind.as_str().to_string(),
            FieldType::Many(kinds) => kinds.iter().map(Kind::as_str).collect::<Vec<_>>().join(" or "),
        }
    }
}

/// Ordered field-name to descriptor mapping.
///
/// Insertion order is kept so generated documentation is reproducible;
/// inserting an existing name replaces the descriptor in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Properties(Vec<(String, FieldSchema)>);

impl Properties {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert or overwrite a field.
    pub fn insert(&mut self, name: impl Into<String>, field: FieldSchema) {
        let name = name.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = field,
            None => self.0.push((name, field)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, f)| f)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSchema)> {
        self.0.iter().map(|(n, f)| (n.as_str(), f))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge `other` into `self`, later fields overwriting same-named ones.
    pub fn extend(&mut self, other: Properties) {
        for (name, field) in other.0 {
            self.insert(name, field);
        }
    }
}

impl<S: Into<String>> FromIterator<(S, FieldSchema)> for Properties {
    fn from_iter<I: IntoIterator<Item = (S, FieldSchema)>>(iter: I) -> Self {
        let mut props = Properties::new();
        for (name, field) in iter {
            props.insert(name, field);
        }
        props
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, field) in &self.0 {
            map.serialize_entry(name, field)?;
        }
        map.end()
    }
}

/// Descriptor for one field: its type plus optional constraints.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<FieldSchema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
}

impl FieldSchema {
    pub fn of(kind: Kind) -> Self {
        Self {
            field_type: Some(FieldType::One(kind)),
            ..Default::default()
        }
    }

    pub fn any_of(kinds: &[Kind]) -> Self {
        Self {
            field_type: Some(FieldType::Many(kinds.to_vec())),
            ..Default::default()
        }
    }

    pub fn string() -> Self {
        Self::of(Kind::String)
    }

    pub fn integer() -> Self {
        Self::of(Kind::Integer)
    }

    pub fn number() -> Self {
        Self::of(Kind::Number)
    }

    pub fn boolean() -> Self {
        Self::of(Kind::Boolean)
    }

    pub fn array(items: FieldSchema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of(Kind::Array)
        }
    }

    pub fn object() -> Self {
        Self::of(Kind::Object)
    }

    /// Object with its own nested properties and required names.
    pub fn object_with(properties: Properties, required: &[&str]) -> Self {
        Self {
            properties: Some(properties),
            required: required.iter().map(|s| s.to_string()).collect(),
            ..Self::of(Kind::Object)
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn maximum(mut self, maximum: f64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    pub fn one_of_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.allowed = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn min_items(mut self, n: usize) -> Self {
        self.min_items = Some(n);
        self
    }

    pub fn max_items(mut self, n: usize) -> Self {
        self.max_items = Some(n);
        self
    }
}

/// Pattern shared by every hex color field.
pub const HEX_COLOR_PATTERN: &str = "^[0-9A-Fa-f]{6}$";

/// A six digit hex color field.
pub fn hex_color(description: &str) -> FieldSchema {
    FieldSchema::string().describe(description).pattern(HEX_COLOR_PATTERN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_accepts() {
        assert!(Kind::Integer.accepts(&json!(3)));
        assert!(Kind::Integer.accepts(&json!(3.0)));
        assert!(!Kind::Integer.accepts(&json!(3.5)));
        assert!(Kind::Number.accepts(&json!(3)));
        assert!(!Kind::String.accepts(&json!(3)));
    }

    #[test]
    fn test_properties_overwrite_keeps_position() {
        let mut props = Properties::new();
        props.insert("a", FieldSchema::string());
        props.insert("b", FieldSchema::string());
        props.insert("a", FieldSchema::integer());
        assert_eq!(props.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(props.get("a"), Some(&FieldSchema::integer()));
    }

    #[test]
    fn test_field_serialization() {
        let field = FieldSchema::integer().describe("Rotation").minimum(0.0).maximum(360.0);
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(
            value,
            json!({"type": "integer", "description": "Rotation", "minimum": 0.0, "maximum": 360.0})
        );

        let union = FieldSchema::any_of(&[Kind::String, Kind::Number]);
        assert_eq!(serde_json::to_value(&union).unwrap(), json!({"type": ["string", "number"]}));
    }
}
