//! Unified error types for Longan.
//!
//! Every failure in the construction pipeline is a local, synchronous
//! configuration/input error. Messages name the offending key, parameter or
//! index and list the valid alternatives whenever such a list exists.
use std::fmt;

use thiserror::Error;

use crate::document::WriterFormat;

/// The registry an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryKind {
    /// Slide master types
    SlideMaster,
    /// Dynamically creatable component types
    Component,
    /// Branding types
    Branding,
}

impl RegistryKind {
    /// Human readable name used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryKind::SlideMaster => "slide master",
            RegistryKind::Component => "component",
            RegistryKind::Branding => "branding",
        }
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for Longan operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Key is neither registered nor a known type path
    #[error("Unknown {kind} '{key}'{context}. Available {kind} keys: {}", .available.join(", "))]
    UnknownRegistryKey {
        kind: RegistryKind,
        key: String,
        context: String,
        available: Vec<String>,
    },

    /// Type resolved but lacks the capability the caller needs
    #[error("Type '{type_path}'{context} does not support {capability}")]
    InvalidCapability {
        type_path: String,
        capability: &'static str,
        context: String,
    },

    /// A required key is absent from a slide or component definition
    #[error("{context} is missing required '{key}' key")]
    MissingKey { key: &'static str, context: String },

    /// A slide parameter without default is absent from the payload
    #[error("Missing required parameter '{parameter}' for slide '{slide}'")]
    MissingParameter { parameter: String, slide: String },

    /// A chart parameter found neither naming convention for its data
    #[error(
        "Missing chart data for parameter '{parameter}'. Expected '{type_key}' and '{data_key}' or 'chartType' and 'chartData'"
    )]
    MissingChartData {
        parameter: String,
        type_key: String,
        data_key: String,
    },

    /// Chart tag outside the supported set
    #[error("Chart type '{tag}' is not supported. Available types: {}", .supported.join(", "))]
    UnsupportedChartType {
        tag: String,
        supported: &'static [&'static str],
    },

    /// A field holds a value of the wrong shape
    #[error("Field '{field}' of '{owner}' must be {expected}, got {actual}")]
    InvalidFieldType {
        field: String,
        owner: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Payload failed schema validation
    #[error("Invalid data for '{owner}': {}", .problems.join("; "))]
    Validation { owner: String, problems: Vec<String> },

    /// Slides cannot be added after the presentation was finalized
    #[error("Presentation '{0}' is already finalized")]
    PresentationFinalized(String),

    /// No writer is installed for the requested format
    #[error("No document writer registered for format {0}")]
    WriterUnavailable(WriterFormat),

    /// Storage disk is not configured
    #[error("Unknown storage disk '{disk}'. Available disks: {}", .available.join(", "))]
    UnknownDisk { disk: String, available: Vec<String> },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for an [`Error::InvalidFieldType`] built from a JSON value.
    pub fn invalid_field(
        field: impl Into<String>,
        owner: impl Into<String>,
        expected: &'static str,
        actual: &serde_json::Value,
    ) -> Self {
        Error::InvalidFieldType {
            field: field.into(),
            owner: owner.into(),
            expected,
            actual: json_type_name(actual),
        }
    }
}

/// Name of a JSON value's type as used in error messages.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Result type for Longan operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_key_lists_alternatives() {
        let err = Error::UnknownRegistryKey {
            kind: RegistryKind::SlideMaster,
            key: "nope".to_string(),
            context: " at index 2".to_string(),
            available: vec!["title".to_string(), "text".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Unknown slide master 'nope' at index 2. Available slide master keys: title, text"
        );
    }

    #[test]
    fn test_json_type_name() {
        assert_eq!(json_type_name(&json!(1)), "integer");
        assert_eq!(json_type_name(&json!(1.5)), "number");
        assert_eq!(json_type_name(&json!({})), "object");
        assert_eq!(json_type_name(&json!(null)), "null");
    }
}
