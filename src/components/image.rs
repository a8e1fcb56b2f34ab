//! Pictures placed from a file path.
use serde_json::{Value, json};
use tracing::trace;
use uuid::Uuid;

use super::mixins::{Position, Size};
use super::{Component, DynamicComponent, fields};
use crate::common::{Error, Result};
use crate::document::{Frame, ShapeKind};
use crate::schema::{Capability, FieldSchema, Properties, Schema};
use crate::slides::{SlideCanvas, SlideContext};

/// An image drawn from a path; the file is read by the document writer.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub(crate) path: String,
    pub(crate) name: String,
    pub(crate) position: Position,
    pub(crate) size: Size,
}

impl Image {
    /// Create an image with a random shape name.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: Uuid::new_v4().simple().to_string(),
            position: Position::default(),
            size: Size::default(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.position = Position { x, y };
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.size.width = Some(width);
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.size.height = Some(height);
        self
    }
}

impl Component for Image {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        let frame = Frame::new(
            self.position.x,
            self.position.y,
            self.size.width.unwrap_or(0.0),
            self.size.height.unwrap_or(0.0),
        );
        let shape = canvas.add_shape(
            frame,
            ShapeKind::Picture {
                path: self.path.clone(),
                name: self.name.clone(),
            },
        );
        trace!(id = shape.id, path = %self.path, "placed image");
        Ok(())
    }
}

impl DynamicComponent for Image {
    const KEY: &'static str = "image";
    const LABEL: &'static str = "Image";
    const CAPABILITIES: &'static [Capability] = &[Capability::Position, Capability::Size];

    fn description() -> &'static str {
        "An image component for displaying pictures and graphics"
    }

    fn own_schema() -> Schema {
        Schema::object(
            Properties::from_iter([(
                "path",
                FieldSchema::string().describe("Path to the image file (absolute or relative)"),
            )]),
            &["path"],
        )
    }

    fn example() -> Value {
        json!({
            "path": "/images/logo.png",
            "x": 100,
            "y": 100,
            "width": 300,
            "height": 200
        })
    }

    fn from_data(_ctx: &SlideContext<'_>, data: &Value) -> Result<Self> {
        let owner = Self::KEY;
        let path = fields::string(data, "path", owner)?.ok_or_else(|| Error::MissingKey {
            key: "path",
            context: format!("Component '{}'", owner),
        })?;
        let mut image = Image::new(path);
        image.position.read(data, owner)?;
        image.size.read(data, owner)?;
        Ok(image)
    }
}
