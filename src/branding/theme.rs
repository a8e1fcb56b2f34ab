//! Data-driven brandings loaded from YAML or JSON theme files.
use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::style::ParagraphStyle;
use super::{Branding, NamedBranding, SlideTheme};
use crate::common::{Error, RGBColor, Result};

/// A complete branding definition.
///
/// # Example
///
/// ```rust
/// use longan::branding::{Branding, Theme};
///
/// let theme = Theme::from_yaml_str(r#"
/// name: Acme
/// baseFont: Inter
/// creatorCompanyName: Acme Corp
/// chartColors: ["FF0000", "00FF00"]
/// paragraphStyles:
///   slideTitle: { size: 30, bold: true }
/// "#).unwrap();
///
/// assert_eq!(theme.base_font(), "Inter");
/// assert_eq!(theme.chart_color(3).to_hex(), "00FF00");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    pub base_font: String,
    #[serde(default)]
    pub creator_company_name: String,
    /// Series colors, reused cyclically
    #[serde(default)]
    pub chart_colors: Vec<RGBColor>,
    #[serde(default)]
    pub paragraph_styles: HashMap<String, ParagraphStyle>,
    #[serde(default)]
    pub default_slide_theme: SlideTheme,
    /// Per-master overrides keyed by slide master key
    #[serde(default)]
    pub slide_themes: HashMap<String, SlideTheme>,
}

impl Theme {
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        serde_saphyr::from_str(source).map_err(Error::config)
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load a theme file; `.json` is parsed as JSON, anything else as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&source),
            _ => Self::from_yaml_str(&source),
        }
    }

    /// Builder method: add or replace a named paragraph style.
    pub fn with_style(mut self, name: impl Into<String>, style: ParagraphStyle) -> Self {
        self.paragraph_styles.insert(name.into(), style);
        self
    }

    /// The theme used when no other branding is selected.
    pub fn builtin() -> Self {
        let dark = RGBColor::new(0x1F, 0x29, 0x37);
        let slide_themes = ["title", "title-subtitle"]
            .into_iter()
            .map(|key| {
                (
                    key.to_string(),
                    SlideTheme {
                        text_color: RGBColor::WHITE,
                        background_color: Some(dark),
                        chart_background_color: None,
                    },
                )
            })
            .collect();

        Theme {
            name: "Default".to_string(),
            base_font: "Calibri".to_string(),
            creator_company_name: "Longan".to_string(),
            chart_colors: vec![
                RGBColor::new(0x25, 0x63, 0xEB),
                RGBColor::new(0xF5, 0x9E, 0x0B),
                RGBColor::new(0x10, 0xB9, 0x81),
                RGBColor::new(0xEF, 0x44, 0x44),
                RGBColor::new(0x8B, 0x5C, 0xF6),
                RGBColor::new(0x64, 0x74, 0x8B),
            ],
            paragraph_styles: HashMap::new(),
            default_slide_theme: SlideTheme {
                text_color: dark,
                background_color: None,
                chart_background_color: Some(RGBColor::WHITE),
            },
            slide_themes,
        }
        .with_style("sectionTitle", ParagraphStyle::new().size(48.0).bold(true))
        .with_style("sectionSubtitle", ParagraphStyle::new().size(24.0))
        .with_style("slideTitle", ParagraphStyle::new().size(32.0).bold(true))
        .with_style("slideSubtitle", ParagraphStyle::new().size(20.0))
        .with_style("body", ParagraphStyle::new().size(20.0))
        .with_style("bodyText", ParagraphStyle::new().size(16.0))
        .with_style("bulletPoint", ParagraphStyle::new().size(20.0).bold(false))
        .with_style("nUpGridTitle", ParagraphStyle::new().size(22.0).bold(true))
        .with_style("nUpGridBody", ParagraphStyle::new().size(16.0))
    }
}

impl Branding for Theme {
    fn base_font(&self) -> &str {
        &self.base_font
    }

    fn chart_color(&self, index: usize) -> RGBColor {
        if self.chart_colors.is_empty() {
            return self.default_slide_theme.text_color;
        }
        self.chart_colors[index % self.chart_colors.len()]
    }

    fn paragraph_style(&self, name: &str) -> Option<&ParagraphStyle> {
        self.paragraph_styles.get(name)
    }

    fn creator_company_name(&self) -> &str {
        &self.creator_company_name
    }

    fn slide_theme(&self, master: &str) -> SlideTheme {
        self.slide_themes
            .get(master)
            .copied()
            .unwrap_or(self.default_slide_theme)
    }
}

static DEFAULT_THEME: Lazy<Theme> = Lazy::new(Theme::builtin);

/// The built-in branding, registered under `default`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBranding;

impl NamedBranding for DefaultBranding {
    const KEY: &'static str = "default";
    const LABEL: &'static str = "Default";

    fn description() -> &'static str {
        "Neutral built-in branding with a dark title palette"
    }
}

impl Branding for DefaultBranding {
    fn base_font(&self) -> &str {
        DEFAULT_THEME.base_font()
    }

    fn chart_color(&self, index: usize) -> RGBColor {
        DEFAULT_THEME.chart_color(index)
    }

    fn paragraph_style(&self, name: &str) -> Option<&ParagraphStyle> {
        DEFAULT_THEME.paragraph_style(name)
    }

    fn creator_company_name(&self) -> &str {
        DEFAULT_THEME.creator_company_name()
    }

    fn slide_theme(&self, master: &str) -> SlideTheme {
        DEFAULT_THEME.slide_theme(master)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branding::StyleAttribute;

    #[test]
    fn test_chart_colors_cycle() {
        let theme = Theme::builtin();
        assert_eq!(theme.chart_color(0), theme.chart_color(6));
        assert_ne!(theme.chart_color(0), theme.chart_color(1));
    }

    #[test]
    fn test_slide_theme_override() {
        let branding = DefaultBranding;
        assert_eq!(branding.slide_theme("title").text_color, RGBColor::WHITE);
        assert_ne!(branding.slide_theme("text").text_color, RGBColor::WHITE);
    }

    #[test]
    fn test_style_value_through_branding() {
        let branding = DefaultBranding;
        let size = branding
            .paragraph_style_value("slideTitle", StyleAttribute::Size)
            .and_then(|v| v.as_f64());
        assert_eq!(size, Some(32.0));
        assert!(branding.paragraph_style_value("missing", StyleAttribute::Size).is_none());
    }

    #[test]
    fn test_json_theme_defaults() {
        let theme = Theme::from_json_str(r#"{"name": "Plain", "baseFont": "Arial"}"#).unwrap();
        assert!(theme.paragraph_styles.is_empty());
        assert_eq!(theme.chart_color(2), RGBColor::BLACK);
        assert_eq!(theme.slide_theme("any"), SlideTheme::default());
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let err = Theme::from_yaml_str("name: [unterminated").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
