//! Brandings: fonts, colors and named paragraph styles.
//!
//! The construction pipeline never reads theme data directly; it queries the
//! [`Branding`] capability of the presentation it renders into. Brandings are
//! registered as [`BrandingType`]s, either from a Rust type implementing
//! [`NamedBranding`] or from a [`Theme`] loaded at runtime.

pub mod style;
pub mod theme;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::common::{Error, RGBColor, RegistryKind, Result};
use crate::registry::RegistryItem;

pub use style::{ParagraphStyle, StyleAttribute, StyleValue};
pub use theme::{DefaultBranding, Theme};

/// Colors a branding assigns to one slide master.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlideTheme {
    pub text_color: RGBColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<RGBColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_background_color: Option<RGBColor>,
}

/// Queries the construction pipeline makes against a theme.
pub trait Branding {
    /// Font used when neither the component nor its style names one.
    fn base_font(&self) -> &str;

    /// Color of the chart series at `index`.
    fn chart_color(&self, index: usize) -> RGBColor;

    fn paragraph_style(&self, name: &str) -> Option<&ParagraphStyle>;

    /// One attribute of a named paragraph style.
    fn paragraph_style_value(&self, name: &str, attribute: StyleAttribute) -> Option<StyleValue> {
        self.paragraph_style(name)?.value(attribute)
    }

    /// Stamped as creator, company and last modifier of the document.
    fn creator_company_name(&self) -> &str;

    /// Colors for slides rendered by the master with key `master`.
    fn slide_theme(&self, master: &str) -> SlideTheme;
}

/// A branding implemented as a Rust type.
pub trait NamedBranding: Branding + Default + 'static {
    const KEY: &'static str;
    const LABEL: &'static str;

    fn description() -> &'static str;
}

type MakeBranding = dyn Fn() -> Box<dyn Branding> + Send + Sync;

/// Registry entry describing how to create a branding.
#[derive(Clone)]
pub struct BrandingType {
    key: String,
    label: String,
    description: String,
    type_path: String,
    make: Arc<MakeBranding>,
}

impl fmt::Debug for BrandingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrandingType")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("type_path", &self.type_path)
            .finish()
    }
}

impl BrandingType {
    /// Entry for a branding type.
    pub fn of<T: NamedBranding>() -> Self {
        Self {
            key: T::KEY.to_string(),
            label: T::LABEL.to_string(),
            description: T::description().to_string(),
            type_path: std::any::type_name::<T>().to_string(),
            make: Arc::new(|| Box::new(T::default()) as Box<dyn Branding>),
        }
    }

    /// Entry for a data-driven theme; the key is the theme name in kebab case.
    ///
    /// Fails when the name has no alphanumeric characters to build a key from.
    pub fn from_theme(theme: Theme) -> Result<Self> {
        let key = kebab_case(&theme.name);
        if key.is_empty() {
            return Err(Error::Config(format!(
                "Theme '{}' has no characters usable as a branding key",
                theme.name
            )));
        }
        let type_path = format!("{}::{}", std::any::type_name::<Theme>(), key);
        let description = format!("Theme '{}'", theme.name);
        let label = theme.name.clone();
        let theme = Arc::new(theme);
        Ok(Self {
            key,
            label,
            description,
            type_path,
            make: Arc::new(move || Box::new(theme.as_ref().clone()) as Box<dyn Branding>),
        })
    }

    /// Create a fresh branding instance.
    pub fn instantiate(&self) -> Box<dyn Branding> {
        (self.make)()
    }
}

impl RegistryItem for BrandingType {
    const KIND: RegistryKind = RegistryKind::Branding;

    fn key(&self) -> &str {
        &self.key
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn type_path(&self) -> &str {
        &self.type_path
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

/// Built-in branding types.
pub fn builtin_types() -> Vec<BrandingType> {
    vec![BrandingType::of::<DefaultBranding>()]
}

fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 && !out.ends_with('-') {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else if ch.is_alphanumeric() {
            out.push(ch);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("Acme"), "acme");
        assert_eq!(kebab_case("Acme Dark"), "acme-dark");
        assert_eq!(kebab_case("NightSky"), "night-sky");
        assert_eq!(kebab_case("Q4 report!"), "q4-report");
    }

    #[test]
    fn test_from_theme_entry() {
        let mut theme = Theme::builtin();
        theme.name = "Acme Dark".to_string();
        theme.base_font = "Inter".to_string();
        let entry = BrandingType::from_theme(theme).unwrap();
        assert_eq!(entry.key(), "acme-dark");
        assert_eq!(entry.label(), "Acme Dark");
        assert!(entry.type_path().contains("::"));
        assert_eq!(entry.instantiate().base_font(), "Inter");
    }

    #[test]
    fn test_from_theme_rejects_unkeyable_names() {
        for name in ["", "!!!", "  - "] {
            let mut theme = Theme::builtin();
            theme.name = name.to_string();
            match BrandingType::from_theme(theme) {
                Err(Error::Config(msg)) => assert!(msg.contains(&format!("'{name}'"))),
                Err(other) => panic!("unexpected error: {other}"),
                Ok(entry) => panic!("accepted theme with key '{}'", entry.key()),
            }
        }
    }

    #[test]
    fn test_default_branding_entry() {
        let entry = BrandingType::of::<DefaultBranding>();
        assert_eq!(entry.key(), "default");
        assert!(entry.type_path().ends_with("DefaultBranding"));
        assert_eq!(entry.instantiate().base_font(), "Calibri");
    }
}
