//! Named paragraph styles supplied by a branding.
use serde::{Deserialize, Serialize};

use crate::common::{HorizontalAlignment, RGBColor};

/// Attribute of a [`ParagraphStyle`] that can be queried on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleAttribute {
    Size,
    Bold,
    Font,
    LetterSpacing,
    Color,
    Uppercase,
    LineHeight,
}

/// Value of a single style attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Number(f64),
    Flag(bool),
    Text(String),
    Color(RGBColor),
}

impl StyleValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StyleValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<RGBColor> {
        match self {
            StyleValue::Color(c) => Some(*c),
            _ => None,
        }
    }
}

/// Text settings a component can adopt by name.
///
/// Every attribute is optional; applying a style to a component only fills
/// attributes the component has not set itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParagraphStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<RGBColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uppercase: Option<bool>,
    /// Line height in percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<HorizontalAlignment>,
}

impl ParagraphStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set font size in points.
    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Builder method: set bold.
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Builder method: set font family.
    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn letter_spacing(mut self, spacing: f64) -> Self {
        self.letter_spacing = Some(spacing);
        self
    }

    pub fn color(mut self, color: RGBColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = Some(uppercase);
        self
    }

    /// Look up one attribute.
    pub fn value(&self, attribute: StyleAttribute) -> Option<StyleValue> {
        match attribute {
            StyleAttribute::Size => self.size.map(StyleValue::Number),
            StyleAttribute::Bold => self.bold.map(StyleValue::Flag),
            StyleAttribute::Font => self.font.clone().map(StyleValue::Text),
            StyleAttribute::LetterSpacing => self.letter_spacing.map(StyleValue::Number),
            StyleAttribute::Color => self.color.map(StyleValue::Color),
            StyleAttribute::Uppercase => self.uppercase.map(StyleValue::Flag),
            StyleAttribute::LineHeight => self.line_height.map(|h| StyleValue::Number(h as f64)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_lookup() {
        let style = ParagraphStyle::new().size(24.0).bold(true);
        assert_eq!(style.value(StyleAttribute::Size).and_then(|v| v.as_f64()), Some(24.0));
        assert_eq!(style.value(StyleAttribute::Bold).and_then(|v| v.as_bool()), Some(true));
        assert_eq!(style.value(StyleAttribute::Font), None);
    }

    #[test]
    fn test_deserialize_partial_style() {
        let style: ParagraphStyle =
            serde_json::from_str(r#"{"size": 18, "letterSpacing": 1.5, "color": "FF0000"}"#).unwrap();
        assert_eq!(style.size, Some(18.0));
        assert_eq!(style.letter_spacing, Some(1.5));
        assert_eq!(style.color, Some(RGBColor::new(255, 0, 0)));
        assert_eq!(style.bold, None);
    }
}
