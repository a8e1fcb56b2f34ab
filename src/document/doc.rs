//! The in-memory presentation document the construction pipeline emits to.
use serde::Serialize;

use super::slide::DocSlide;
use crate::common::DocumentProperties;
use crate::common::unit::px_to_emu;

/// Slide size, kept in both pixels and EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub width_px: f64,
    pub height_px: f64,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    pub cx: i64,
    /// Slide height in EMUs
    pub cy: i64,
}

impl Layout {
    pub fn from_pixels(width: f64, height: f64) -> Self {
        Self {
            width_px: width,
            height_px: height,
            cx: px_to_emu(width),
            cy: px_to_emu(height),
        }
    }
}

impl Default for Layout {
    /// 10" x 7.5" (standard 4:3 aspect ratio).
    fn default() -> Self {
        Self::from_pixels(960.0, 720.0)
    }
}

/// A presentation document: slides, layout and properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    /// Slides in the presentation
    pub(crate) slides: Vec<DocSlide>,
    pub(crate) layout: Layout,
    pub(crate) properties: DocumentProperties,
}

impl Document {
    /// Create a new empty document with default dimensions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new slide to the document.
    pub fn add_slide(&mut self, master: &str) -> &mut DocSlide {
        let slide_id = (self.slides.len() + 256) as u32;
        self.slides.push(DocSlide::new(slide_id, master));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    /// Drop the most recently added slide.
    pub(crate) fn discard_last_slide(&mut self) {
        self.slides.pop();
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[DocSlide] {
        &self.slides
    }

    pub fn slide(&self, index: usize) -> Option<&DocSlide> {
        self.slides.get(index)
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Set the slide size in pixels.
    pub fn set_layout_pixels(&mut self, width: f64, height: f64) {
        self.layout = Layout::from_pixels(width, height);
    }

    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut DocumentProperties {
        &mut self.properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_discard_slides() {
        let mut doc = Document::new();
        assert_eq!(doc.add_slide("title").slide_id(), 256);
        assert_eq!(doc.add_slide("text").slide_id(), 257);
        doc.discard_last_slide();
        assert_eq!(doc.slide_count(), 1);
        assert_eq!(doc.slide(0).map(|s| s.master()), Some("title"));
    }

    #[test]
    fn test_layout_in_emus() {
        let mut doc = Document::new();
        doc.set_layout_pixels(1280.0, 720.0);
        assert_eq!(doc.layout().cx, 12_192_000);
        assert_eq!(doc.layout().cy, 6_858_000);
    }
}
