//! Rendering context handed to slide masters and components.
use crate::branding::{Branding, SlideTheme};
use crate::document::{DocShape, DocSlide, Frame, ShapeId, ShapeKind, TextFrame};
use crate::registry::Catalog;

/// Read-only view of the presentation a slide is rendered into.
#[derive(Clone, Copy)]
pub struct SlideContext<'a> {
    pub width: f64,
    pub height: f64,
    pub horizontal_padding: f64,
    pub vertical_padding: f64,
    pub branding: &'a dyn Branding,
    /// Colors of the master being rendered
    pub theme: SlideTheme,
    /// Key of the master being rendered
    pub master: &'a str,
    pub catalog: &'a Catalog,
}

impl std::fmt::Debug for SlideContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideContext")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("horizontal_padding", &self.horizontal_padding)
            .field("vertical_padding", &self.vertical_padding)
            .field("theme", &self.theme)
            .field("master", &self.master)
            .finish()
    }
}

impl SlideContext<'_> {
    /// Width left between the horizontal paddings.
    pub fn content_width(&self) -> f64 {
        self.width - 2.0 * self.horizontal_padding
    }

    /// Height left between the vertical paddings.
    pub fn content_height(&self) -> f64 {
        self.height - 2.0 * self.vertical_padding
    }
}

/// A slide being drawn on, together with its context.
pub struct SlideCanvas<'a> {
    ctx: SlideContext<'a>,
    slide: &'a mut DocSlide,
}

impl<'a> SlideCanvas<'a> {
    pub fn new(ctx: SlideContext<'a>, slide: &'a mut DocSlide) -> Self {
        Self { ctx, slide }
    }

    pub fn ctx(&self) -> SlideContext<'a> {
        self.ctx
    }

    pub fn slide(&self) -> &DocSlide {
        self.slide
    }

    pub fn slide_mut(&mut self) -> &mut DocSlide {
        self.slide
    }

    pub fn add_shape(&mut self, frame: Frame, kind: ShapeKind) -> &mut DocShape {
        self.slide.add_shape(frame, kind)
    }

    pub fn text_frame_mut(&mut self, id: ShapeId) -> Option<&mut TextFrame> {
        self.slide.text_frame_mut(id)
    }
}
