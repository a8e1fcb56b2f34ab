//! Text alignment inside a shape's text frame.
use serde::{Deserialize, Serialize};

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
    Distributed,
}

impl HorizontalAlignment {
    pub const NAMES: &'static [&'static str] = &["left", "center", "right", "justify", "distributed"];

    /// Parse the lowercase data form.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "left" => Some(Self::Left),
            "center" | "ctr" => Some(Self::Center),
            "right" | "r" => Some(Self::Right),
            "justify" | "just" => Some(Self::Justify),
            "distributed" | "dist" => Some(Self::Distributed),
            _ => None,
        }
    }
}

/// Vertical anchoring of text inside its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    #[default]
    Top,
    Middle,
    Bottom,
    Base,
}

impl VerticalAlignment {
    pub const NAMES: &'static [&'static str] = &["top", "middle", "center", "bottom", "base"];

    /// Parse the lowercase data form; `center` is accepted as `middle`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "top" | "t" => Some(Self::Top),
            "middle" | "center" | "ctr" => Some(Self::Middle),
            "bottom" | "b" => Some(Self::Bottom),
            "base" => Some(Self::Base),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(HorizontalAlignment::parse("ctr"), Some(HorizontalAlignment::Center));
        assert_eq!(VerticalAlignment::parse("center"), Some(VerticalAlignment::Middle));
        assert_eq!(VerticalAlignment::parse("sideways"), None);
    }

    #[test]
    fn test_names_cover_parse() {
        for name in HorizontalAlignment::NAMES {
            assert!(HorizontalAlignment::parse(name).is_some());
        }
        for name in VerticalAlignment::NAMES {
            assert!(VerticalAlignment::parse(name).is_some());
        }
    }
}
