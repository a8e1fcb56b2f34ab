//! Slides of the document model.
use serde::Serialize;

use super::paragraph::TextFrame;
use super::shape::{DocShape, ShapeKind};
use super::types::{Frame, ShapeId};
use crate::common::RGBColor;

/// A slide in the document, holding the shapes its master emitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocSlide {
    /// Slide ID (unique identifier)
    pub(crate) slide_id: u32,
    /// Key of the slide master that rendered this slide
    pub(crate) master: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) background: Option<RGBColor>,
    pub(crate) shapes: Vec<DocShape>,
}

impl DocSlide {
    pub(crate) fn new(slide_id: u32, master: impl Into<String>) -> Self {
        Self {
            slide_id,
            master: master.into(),
            background: None,
            shapes: Vec::new(),
        }
    }

    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    pub fn master(&self) -> &str {
        &self.master
    }

    pub fn background(&self) -> Option<RGBColor> {
        self.background
    }

    pub fn set_background(&mut self, color: RGBColor) {
        self.background = Some(color);
    }

    pub fn shapes(&self) -> &[DocShape] {
        &self.shapes
    }

    /// Add a shape; IDs start at 2 since 1 is the slide's group shape.
    pub fn add_shape(&mut self, frame: Frame, kind: ShapeKind) -> &mut DocShape {
        let id = self.shapes.len() as ShapeId + 2;
        self.shapes.push(DocShape::new(id, frame, kind));
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    pub fn shape(&self, id: ShapeId) -> Option<&DocShape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut DocShape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    /// Text body of a rich text shape.
    pub fn text_frame_mut(&mut self, id: ShapeId) -> Option<&mut TextFrame> {
        self.shape_mut(id)?.text_frame_mut()
    }

    /// Text of every rich text shape, in drawing order.
    pub fn texts(&self) -> Vec<String> {
        self.shapes
            .iter()
            .filter_map(|s| s.text_frame().map(TextFrame::text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::AutoShapeType;

    #[test]
    fn test_shape_ids_are_sequential() {
        let mut slide = DocSlide::new(256, "blank");
        let a = slide
            .add_shape(Frame::default(), ShapeKind::RichText(TextFrame::default()))
            .id;
        let b = slide
            .add_shape(
                Frame::default(),
                ShapeKind::AutoShape {
                    geometry: AutoShapeType::Oval,
                },
            )
            .id;
        assert_eq!((a, b), (2, 3));
        assert!(slide.text_frame_mut(a).is_some());
        assert!(slide.text_frame_mut(b).is_none());
        assert!(slide.text_frame_mut(99).is_none());
    }
}
