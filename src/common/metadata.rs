//! Document properties stamped onto a finished presentation.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard document properties written alongside the slides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentProperties {
    /// Document title
    pub title: Option<String>,
    /// Document author/creator
    pub creator: Option<String>,
    /// Company/organization
    pub company: Option<String>,
    /// Last person to modify the document
    pub last_modified_by: Option<String>,
    /// Creation date
    pub created: Option<DateTime<Utc>>,
    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}
