//! Small value types shared by the presentation pipeline.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The person a presentation is built for.
///
/// Set names override the branding's company name in the document
/// properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub creator_name: Option<String>,
    pub company_name: Option<String>,
}

impl Author {
    pub fn new(creator_name: impl Into<String>) -> Self {
        Self {
            creator_name: Some(creator_name.into()),
            company_name: None,
        }
    }

    pub fn with_company(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = Some(company_name.into());
        self
    }
}

/// Where a saved presentation ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    /// File name including extension
    pub filename: String,
    /// Path relative to the disk root
    pub relative_path: String,
    pub absolute_path: PathBuf,
    pub disk: String,
}
