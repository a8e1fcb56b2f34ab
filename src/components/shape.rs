//! Geometric auto shapes.
use serde_json::{Value, json};
use tracing::trace;

use super::mixins::{self, Border, Link, Position, Size};
use super::{Component, DynamicComponent, fields};
use crate::common::{Error, RGBColor, Result};
use crate::document::{AutoShapeType, Frame, ShapeKind};
use crate::schema::{Capability, FieldSchema, Properties, Schema};
use crate::slides::{SlideCanvas, SlideContext};

/// A rectangle, circle or rounded rectangle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shape {
    pub(crate) geometry: AutoShapeType,
    pub(crate) position: Position,
    pub(crate) size: Size,
    pub(crate) background: Option<RGBColor>,
    pub(crate) border: Border,
    pub(crate) rotation: i32,
    pub(crate) link: Link,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the shape a circle.
    pub fn round(mut self) -> Self {
        self.geometry = AutoShapeType::Oval;
        self
    }

    /// Make the shape a rounded rectangle.
    pub fn rounded(mut self) -> Self {
        self.geometry = AutoShapeType::RoundedRectangle;
        self
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.position = Position { x, y };
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.size = Size {
            width: Some(width),
            height: Some(height),
        };
        self
    }

    pub fn background(mut self, color: RGBColor) -> Self {
        self.background = Some(color);
        self
    }

    pub fn border(mut self, color: RGBColor, width: f64) -> Self {
        self.border = Border {
            color: Some(color),
            width,
        };
        self
    }

    pub fn rotate(mut self, degrees: i32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.link.url = Some(url.into());
        self
    }
}

impl Component for Shape {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        let frame = Frame::new(
            self.position.x,
            self.position.y,
            self.size.width.unwrap_or(0.0),
            self.size.height.unwrap_or(0.0),
        )
        .with_rotation(self.rotation);
        let shape = canvas.add_shape(
            frame,
            ShapeKind::AutoShape {
                geometry: self.geometry,
            },
        );
        shape
            .fill(self.background)
            .outline(self.border.outline())
            .hyperlink(self.link.hyperlink());
        trace!(id = shape.id, geometry = ?self.geometry, "drew shape");
        Ok(())
    }
}

impl DynamicComponent for Shape {
    const KEY: &'static str = "shape";
    const LABEL: &'static str = "Shape";
    const CAPABILITIES: &'static [Capability] = &[
        Capability::Position,
        Capability::Size,
        Capability::BackgroundColor,
        Capability::Border,
        Capability::Rotation,
        Capability::Url,
    ];

    fn description() -> &'static str {
        "A geometric shape component (rectangle, circle, rounded rectangle, etc.)"
    }

    fn own_schema() -> Schema {
        Schema::object(
            Properties::from_iter([(
                "shape",
                FieldSchema::string()
                    .describe("Shape type: rectangle, round (circle), rounded (rounded rectangle)")
                    .one_of_values(["rectangle", "round", "rounded"]),
            )]),
            &[],
        )
    }

    fn example() -> Value {
        json!({
            "shape": "round",
            "backgroundColor": "3498db",
            "x": 100,
            "y": 100,
            "width": 200,
            "height": 200
        })
    }

    fn from_data(_ctx: &SlideContext<'_>, data: &Value) -> Result<Self> {
        let owner = Self::KEY;
        let mut shape = match fields::string(data, "shape", owner)?.as_deref() {
            None | Some("rectangle") => Shape::new(),
            Some("round") => Shape::new().round(),
            Some("rounded") => Shape::new().rounded(),
            Some(other) => {
                return Err(Error::invalid_field(
                    "shape",
                    owner,
                    "one of rectangle, round, rounded",
                    &Value::String(other.to_string()),
                ));
            }
        };
        shape.position.read(data, owner)?;
        shape.size.read(data, owner)?;
        shape.background = mixins::read_background(data, owner)?;
        shape.border.read(data, owner)?;
        if let Some(rotation) = mixins::read_rotation(data, owner)? {
            shape.rotation = rotation;
        }
        shape.link.read(data, owner)?;
        Ok(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::with_canvas;

    #[test]
    fn test_round_shape_from_data() {
        with_canvas("blank", |canvas| {
            let ctx = canvas.ctx();
            let data = Shape::example();
            Shape::from_data(&ctx, &data).unwrap().render(canvas).unwrap();
            let shape = &canvas.slide().shapes()[0];
            assert_eq!(
                shape.kind,
                ShapeKind::AutoShape {
                    geometry: AutoShapeType::Oval
                }
            );
            assert_eq!(shape.fill, RGBColor::from_hex("3498db"));
            assert_eq!(shape.frame, Frame::new(100.0, 100.0, 200.0, 200.0));
        });
    }

    #[test]
    fn test_unknown_shape_type_rejected() {
        with_canvas("blank", |canvas| {
            let ctx = canvas.ctx();
            let err = Shape::from_data(&ctx, &json!({"shape": "hexagon"})).unwrap_err();
            assert!(err.to_string().contains("'shape'"));
        });
    }

    #[test]
    fn test_border_and_link() {
        with_canvas("blank", |canvas| {
            Shape::new()
                .rounded()
                .border(RGBColor::BLACK, 3.0)
                .url("https://example.com")
                .render(canvas)
                .unwrap();
            let shape = &canvas.slide().shapes()[0];
            assert_eq!(shape.outline.map(|o| o.width), Some(3.0));
            assert!(shape.hyperlink.is_some());
        });
    }
}
