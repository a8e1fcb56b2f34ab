//! Whole-deck definitions loadable from YAML or JSON.
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{Error, Result};
use crate::document::WriterFormat;

/// A presentation described as data.
///
/// Each slide definition is `{master, data}`; `master` is a registry key,
/// label or type path.
///
/// ```rust
/// use longan::presentation::DeckDefinition;
///
/// let deck = DeckDefinition::from_yaml_str(r#"
/// title: Quarterly Review
/// slides:
///   - master: title
///     data: { title: Welcome }
/// "#).unwrap();
/// assert_eq!(deck.slides.len(), 1);
/// assert_eq!(deck.branding, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckDefinition {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branding: Option<String>,
    #[serde(default)]
    pub slides: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writer: Option<WriterFormat>,
}

impl DeckDefinition {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            branding: None,
            slides: Vec::new(),
            width: None,
            height: None,
            writer: None,
        }
    }

    /// Builder method: append a `{master, data}` slide definition.
    pub fn slide(mut self, master: &str, data: Value) -> Self {
        self.slides.push(serde_json::json!({"master": master, "data": data}));
        self
    }

    pub fn from_yaml_str(source: &str) -> Result<Self> {
        serde_saphyr::from_str(source).map_err(Error::config)
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load a deck file; `.json` is parsed as JSON, anything else as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&source),
            _ => Self::from_yaml_str(&source),
        }
    }
}
