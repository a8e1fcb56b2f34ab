//! Presentation defaults and output settings.
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::common::{Error, Result};
use crate::document::WriterFormat;

pub const DEFAULT_WIDTH: f64 = 1280.0;
pub const DEFAULT_HEIGHT: f64 = 720.0;
pub const DEFAULT_BRANDING: &str = "default";
pub const DEFAULT_DISK: &str = "local";

/// Where built presentations are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Disk used when the caller names none
    pub disk: String,
    /// Directory on the disk, unless saving in its root folder
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            disk: DEFAULT_DISK.to_string(),
            directory: "ppt".to_string(),
        }
    }
}

/// Settings applied to every presentation a factory creates.
///
/// Every field is optional in a config file:
///
/// ```rust
/// use longan::presentation::PresentationConfig;
///
/// let config = PresentationConfig::from_yaml_str("width: 1920\nheight: 1080\n").unwrap();
/// assert_eq!(config.width, 1920.0);
/// assert_eq!(config.branding, "default");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    pub width: f64,
    pub height: f64,
    pub horizontal_padding: f64,
    pub vertical_padding: f64,
    /// Branding key or type path used when a deck names none
    pub branding: String,
    pub writer_format: WriterFormat,
    pub output: OutputConfig,
    /// Named storage roots
    pub disks: BTreeMap<String, PathBuf>,
    /// Validate slide payloads against master schemas before construction
    pub validate_input: bool,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            horizontal_padding: 0.0,
            vertical_padding: 0.0,
            branding: DEFAULT_BRANDING.to_string(),
            writer_format: WriterFormat::default(),
            output: OutputConfig::default(),
            disks: BTreeMap::from([(DEFAULT_DISK.to_string(), PathBuf::from("storage"))]),
            validate_input: false,
        }
    }
}

impl PresentationConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        serde_saphyr::from_str(source).map_err(Error::config)
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load a config file; `.json` is parsed as JSON, anything else as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&source),
            _ => Self::from_yaml_str(&source),
        }
    }

    /// Builder method: add or replace a storage disk.
    pub fn with_disk(mut self, name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        self.disks.insert(name.into(), root.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PresentationConfig::default();
        assert_eq!((config.width, config.height), (1280.0, 720.0));
        assert_eq!(config.writer_format, WriterFormat::PowerPoint2007);
        assert_eq!(config.output.directory, "ppt");
        assert_eq!(config.disks.get("local"), Some(&PathBuf::from("storage")));
        assert!(!config.validate_input);
    }

    #[test]
    fn test_yaml_overrides_keep_other_defaults() {
        let config = PresentationConfig::from_yaml_str(
            "branding: acme\nwriter_format: PDF\noutput:\n  directory: decks\nvalidate_input: true\n",
        )
        .unwrap();
        assert_eq!(config.branding, "acme");
        assert_eq!(config.writer_format, WriterFormat::Pdf);
        assert_eq!(config.output.directory, "decks");
        assert_eq!(config.output.disk, "local");
        assert!(config.validate_input);
        assert_eq!(config.width, 1280.0);
    }

    #[test]
    fn test_json_and_bad_yaml() {
        let config = PresentationConfig::from_json_str(r#"{"vertical_padding": 20}"#).unwrap();
        assert_eq!(config.vertical_padding, 20.0);
        let err = PresentationConfig::from_yaml_str("width: [").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_path_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        std::fs::write(&path, r#"{"height": 1080}"#).unwrap();
        assert_eq!(PresentationConfig::from_path(&path).unwrap().height, 1080.0);
    }
}
