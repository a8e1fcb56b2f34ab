//! Canvas fixtures for rendering tests.
use crate::branding::{Branding, DefaultBranding};
use crate::document::Document;
use crate::registry::Catalog;
use crate::slides::{SlideCanvas, SlideContext};

/// Slide geometry: width, height, horizontal and vertical padding.
pub(crate) type Geometry = (f64, f64, f64, f64);

pub(crate) const DEFAULT_GEOMETRY: Geometry = (1280.0, 720.0, 0.0, 0.0);

/// Run `f` against a fresh 1280x720 slide of the given master.
pub(crate) fn with_canvas<R>(master: &str, f: impl FnOnce(&mut SlideCanvas<'_>) -> R) -> R {
    with_geometry(master, DEFAULT_GEOMETRY, f)
}

pub(crate) fn with_geometry<R>(
    master: &str,
    geometry: Geometry,
    f: impl FnOnce(&mut SlideCanvas<'_>) -> R,
) -> R {
    let catalog = Catalog::with_builtins();
    let branding = DefaultBranding;
    let mut document = Document::new();
    let (width, height, horizontal_padding, vertical_padding) = geometry;
    let ctx = SlideContext {
        width,
        height,
        horizontal_padding,
        vertical_padding,
        branding: &branding,
        theme: branding.slide_theme(master),
        master,
        catalog: &catalog,
    };
    let mut canvas = SlideCanvas::new(ctx, document.add_slide(master));
    f(&mut canvas)
}
