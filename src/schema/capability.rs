//! Reusable style capabilities and the schema fragment each contributes.
use super::field::{FieldSchema, Properties, hex_color};
use crate::common::{HorizontalAlignment, VerticalAlignment};

/// A style capability a component type can compose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Position,
    Size,
    Alignment,
    Margins,
    FontSettings,
    BackgroundColor,
    Border,
    Rotation,
    ParagraphStyle,
    Url,
}

/// Partial schema contributed by one capability.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fragment {
    pub properties: Properties,
    pub required: Vec<String>,
}

impl Fragment {
    fn optional(properties: Properties) -> Option<Self> {
        Some(Self {
            properties,
            required: Vec::new(),
        })
    }
}

impl Capability {
    pub const ALL: &'static [Capability] = &[
        Capability::Position,
        Capability::Size,
        Capability::Alignment,
        Capability::Margins,
        Capability::FontSettings,
        Capability::BackgroundColor,
        Capability::Border,
        Capability::Rotation,
        Capability::ParagraphStyle,
        Capability::Url,
    ];

    /// Schema fragment for this capability, if it declares one.
    pub fn fragment(&self) -> Option<Fragment> {
        match self {
            Capability::Position => Fragment::optional(Properties::from_iter([
                (
                    "x",
                    FieldSchema::number()
                        .describe("X position in pixels from the left edge of the slide")
                        .minimum(0.0),
                ),
                (
                    "y",
                    FieldSchema::number()
                        .describe("Y position in pixels from the top edge of the slide")
                        .minimum(0.0),
                ),
            ])),
            Capability::Size => Fragment::optional(Properties::from_iter([
                ("width", FieldSchema::integer().describe("Width in pixels").minimum(1.0)),
                ("height", FieldSchema::integer().describe("Height in pixels").minimum(1.0)),
            ])),
            Capability::Alignment => Fragment::optional(Properties::from_iter([
                (
                    "horizontalAlignment",
                    FieldSchema::string()
                        .describe("Horizontal text alignment")
                        .one_of_values(HorizontalAlignment::NAMES.iter().copied()),
                ),
                (
                    "verticalAlignment",
                    FieldSchema::string()
                        .describe("Vertical text alignment")
                        .one_of_values(VerticalAlignment::NAMES.iter().copied()),
                ),
            ])),
            Capability::Margins => Fragment::optional(Properties::from_iter(
                ["marginTop", "marginRight", "marginBottom", "marginLeft"].map(|name| {
                    (
                        name,
                        FieldSchema::number().describe("Inner margin in pixels").minimum(0.0),
                    )
                }),
            )),
            Capability::FontSettings => Fragment::optional(Properties::from_iter([
                ("fontSize", FieldSchema::integer().describe("Font size in points").minimum(1.0)),
                ("color", hex_color("Text color as hex code (e.g., \"FF0000\" for red)")),
                ("font", FieldSchema::string().describe("Font family name")),
                ("bold", FieldSchema::boolean().describe("Whether the text should be bold")),
                (
                    "underlined",
                    FieldSchema::boolean().describe("Whether the text should be underlined"),
                ),
                (
                    "uppercase",
                    FieldSchema::boolean().describe("Whether the text should be converted to uppercase"),
                ),
                ("letterSpacing", FieldSchema::number().describe("Letter spacing in points")),
                (
                    "lineHeight",
                    FieldSchema::integer()
                        .describe("Line height as percentage (e.g., 100 for normal)")
                        .minimum(0.0),
                ),
            ])),
            Capability::BackgroundColor => Fragment::optional(Properties::from_iter([(
                "backgroundColor",
                hex_color("Background color as hex code (e.g., \"3498db\" for blue)"),
            )])),
            Capability::Border => Fragment::optional(Properties::from_iter([
                ("borderColor", hex_color("Border color as hex code")),
                ("borderWidth", FieldSchema::integer().describe("Border width in pixels").minimum(0.0)),
            ])),
            Capability::Rotation => Fragment::optional(Properties::from_iter([(
                "rotation",
                FieldSchema::integer()
                    .describe("Rotation angle in degrees (0-360)")
                    .minimum(0.0)
                    .maximum(360.0),
            )])),
            Capability::ParagraphStyle => Fragment::optional(Properties::from_iter([(
                "paragraphStyle",
                FieldSchema::string().describe("Named paragraph style from the presentation branding"),
            )])),
            Capability::Url => Fragment::optional(Properties::from_iter([
                ("url", FieldSchema::string().describe("Hyperlink target URL")),
                (
                    "slideNumberAnchor",
                    FieldSchema::integer()
                        .describe("Link to a slide by its 1-based number")
                        .minimum(1.0),
                ),
            ])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_capability_has_fragment() {
        for capability in Capability::ALL {
            let fragment = capability.fragment().unwrap();
            assert!(!fragment.properties.is_empty(), "{:?}", capability);
            assert!(fragment.required.is_empty());
        }
    }

    #[test]
    fn test_position_fragment() {
        let fragment = Capability::Position.fragment().unwrap();
        assert_eq!(fragment.properties.names().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(fragment.properties.get("x").unwrap().minimum, Some(0.0));
    }
}
