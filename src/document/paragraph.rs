//! Rich text: frames, paragraphs and runs.
use serde::Serialize;
use smallvec::SmallVec;

use super::types::{Hyperlink, Insets};
use crate::common::{HorizontalAlignment, RGBColor, VerticalAlignment};

/// Font of a single text run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunFont {
    pub name: String,
    pub size: f64,
    pub bold: bool,
    pub underline: bool,
    pub character_spacing: f64,
    pub color: RGBColor,
}

impl Default for RunFont {
    fn default() -> Self {
        Self {
            name: String::new(),
            size: 12.0,
            bold: false,
            underline: false,
            character_spacing: 0.0,
            color: RGBColor::BLACK,
        }
    }
}

/// Contiguous text sharing one font.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub font: RunFont,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<Hyperlink>,
}

impl TextRun {
    pub fn new(text: impl Into<String>, font: RunFont) -> Self {
        Self {
            text: text.into(),
            font,
            hyperlink: None,
        }
    }
}

/// Paragraph bullet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Bullet {
    Character { character: String, color: RGBColor },
    Numeric { color: RGBColor },
}

/// A paragraph of runs with its layout settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    pub runs: SmallVec<[TextRun; 1]>,
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
    /// Line spacing in percent
    pub line_spacing: u32,
    pub spacing_after: f64,
    pub indent: f64,
    pub margin_left: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet: Option<Bullet>,
}

impl Default for Paragraph {
    fn default() -> Self {
        Self {
            runs: SmallVec::new(),
            horizontal: HorizontalAlignment::Left,
            vertical: VerticalAlignment::Top,
            line_spacing: 100,
            spacing_after: 0.0,
            indent: 0.0,
            margin_left: 0.0,
            bullet: None,
        }
    }
}

impl Paragraph {
    /// Append a run and return it for further styling.
    pub fn add_run(&mut self, run: TextRun) -> &mut TextRun {
        self.runs.push(run);
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Empty paragraph inheriting alignment, spacing and bullet.
    fn continuation(&self) -> Self {
        Self {
            runs: SmallVec::new(),
            ..self.clone()
        }
    }
}

/// Text body of a rich text shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFrame {
    pub paragraphs: Vec<Paragraph>,
    pub insets: Insets,
}

impl Default for TextFrame {
    fn default() -> Self {
        Self {
            paragraphs: vec![Paragraph::default()],
            insets: Insets::default(),
        }
    }
}

impl TextFrame {
    /// The paragraph new runs go to.
    pub fn active_paragraph_mut(&mut self) -> &mut Paragraph {
        if self.paragraphs.is_empty() {
            self.paragraphs.push(Paragraph::default());
        }
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    /// Start a new paragraph that inherits the active one's settings.
    pub fn create_paragraph(&mut self) -> &mut Paragraph {
        let next = self.active_paragraph_mut().continuation();
        self.paragraphs.push(next);
        self.active_paragraph_mut()
    }

    /// Plain text, one line per paragraph.
    pub fn text(&self) -> String {
        self.paragraphs.iter().map(Paragraph::text).collect::<Vec<_>>().join("\n")
    }
}
