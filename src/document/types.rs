//! Shared geometry and decoration types of the document model.
use serde::Serialize;

use crate::common::RGBColor;

/// Identifier of a shape, unique within its slide.
pub type ShapeId = u32;

/// Position, size and rotation of a shape, in pixels and degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: i32,
}

impl Frame {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: 0,
        }
    }

    pub fn with_rotation(mut self, rotation: i32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Solid outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Outline {
    pub color: RGBColor,
    pub width: f64,
}

/// Inner margins of a text frame or table cell.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Hyperlink target of a shape or text run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Hyperlink {
    Url { url: String },
    Slide { number: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_edges() {
        let frame = Frame::new(10.0, 20.0, 100.0, 50.0).with_rotation(90);
        assert_eq!(frame.right(), 110.0);
        assert_eq!(frame.bottom(), 70.0);
        assert_eq!(frame.rotation, 90);
    }

    #[test]
    fn test_hyperlink_serialization() {
        let link = Hyperlink::Slide { number: 3 };
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            serde_json::json!({"kind": "slide", "number": 3})
        );
    }
}
