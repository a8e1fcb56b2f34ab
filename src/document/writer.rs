//! Output formats and the writers that serialize a [`Document`].
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::doc::Document;
use crate::common::{Error, Result};

/// Target serialization format of a finished presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WriterFormat {
    #[default]
    PowerPoint2007,
    ODPresentation,
    #[serde(rename = "PDF")]
    Pdf,
    #[serde(rename = "HTML")]
    Html,
    Serialized,
}

impl WriterFormat {
    pub const ALL: [WriterFormat; 5] = [
        WriterFormat::PowerPoint2007,
        WriterFormat::ODPresentation,
        WriterFormat::Pdf,
        WriterFormat::Html,
        WriterFormat::Serialized,
    ];

    /// File extension written for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            WriterFormat::PowerPoint2007 => "pptx",
            WriterFormat::ODPresentation => "odp",
            WriterFormat::Pdf => "pdf",
            WriterFormat::Html => "html",
            WriterFormat::Serialized => "phppt",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WriterFormat::PowerPoint2007 => "PowerPoint2007",
            WriterFormat::ODPresentation => "ODPresentation",
            WriterFormat::Pdf => "PDF",
            WriterFormat::Html => "HTML",
            WriterFormat::Serialized => "Serialized",
        }
    }

    /// Parse a format name or extension, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| {
            f.name().eq_ignore_ascii_case(value) || f.extension().eq_ignore_ascii_case(value)
        })
    }
}

impl fmt::Display for WriterFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Turns a finished document into file bytes for one format.
pub trait DocumentWriter: Send + Sync {
    fn format(&self) -> WriterFormat;

    fn write(&self, document: &Document) -> Result<Vec<u8>>;
}

/// Built-in writer for [`WriterFormat::Serialized`]: the document as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerializedWriter;

impl DocumentWriter for SerializedWriter {
    fn format(&self) -> WriterFormat {
        WriterFormat::Serialized
    }

    fn write(&self, document: &Document) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(document)?)
    }
}

/// Writers available to a factory, one per format.
#[derive(Clone)]
pub struct WriterSet {
    writers: HashMap<WriterFormat, Arc<dyn DocumentWriter>>,
}

impl fmt::Debug for WriterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSet")
            .field("formats", &self.formats())
            .finish()
    }
}

impl Default for WriterSet {
    fn default() -> Self {
        let mut set = Self::empty();
        set.install(SerializedWriter);
        set
    }
}

impl WriterSet {
    pub fn empty() -> Self {
        Self {
            writers: HashMap::new(),
        }
    }

    /// Install a writer, replacing any previous one for its format.
    pub fn install(&mut self, writer: impl DocumentWriter + 'static) -> &mut Self {
        self.writers.insert(writer.format(), Arc::new(writer));
        self
    }

    pub fn supports(&self, format: WriterFormat) -> bool {
        self.writers.contains_key(&format)
    }

    pub fn formats(&self) -> Vec<WriterFormat> {
        WriterFormat::ALL
            .into_iter()
            .filter(|f| self.writers.contains_key(f))
            .collect()
    }

    pub fn write(&self, format: WriterFormat, document: &Document) -> Result<Vec<u8>> {
        let writer = self
            .writers
            .get(&format)
            .ok_or(Error::WriterUnavailable(format))?;
        writer.write(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extensions_are_fixed() {
        let extensions: Vec<_> = WriterFormat::ALL.iter().map(|f| f.extension()).collect();
        assert_eq!(extensions, vec!["pptx", "odp", "pdf", "html", "phppt"]);
    }

    #[test]
    fn test_parse_by_name_or_extension() {
        assert_eq!(WriterFormat::parse("pdf"), Some(WriterFormat::Pdf));
        assert_eq!(WriterFormat::parse("PowerPoint2007"), Some(WriterFormat::PowerPoint2007));
        assert_eq!(WriterFormat::parse("phppt"), Some(WriterFormat::Serialized));
        assert_eq!(WriterFormat::parse("docx"), None);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&WriterFormat::Pdf).unwrap(), "\"PDF\"");
        let parsed: WriterFormat = serde_json::from_str("\"ODPresentation\"").unwrap();
        assert_eq!(parsed, WriterFormat::ODPresentation);
    }

    #[test]
    fn test_default_set_writes_serialized_only() {
        let set = WriterSet::default();
        let doc = Document::new();
        let bytes = set.write(WriterFormat::Serialized, &doc).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(value.get("slides").is_some());

        let err = set.write(WriterFormat::PowerPoint2007, &doc).unwrap_err();
        assert!(matches!(err, Error::WriterUnavailable(WriterFormat::PowerPoint2007)));
    }
}
