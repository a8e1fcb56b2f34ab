//! The presentation being built: branding, slides and output settings.
use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use super::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use super::types::Author;
use crate::branding::Branding;
use crate::common::{Error, Result};
use crate::document::{Document, WriterFormat, WriterSet};
use crate::registry::Catalog;
use crate::slides::{SlideCanvas, SlideContext, SlideMaster};

/// A presentation under construction.
///
/// Owns its branding and its document. Slides are rendered into the
/// document as they are added, in order. Once [`finalize`](Self::finalize)d
/// no further slides are accepted.
pub struct Presentation {
    title: String,
    catalog: Arc<Catalog>,
    branding: Box<dyn Branding>,
    document: Document,
    width: f64,
    height: f64,
    horizontal_padding: f64,
    vertical_padding: f64,
    writer_format: WriterFormat,
    author: Option<Author>,
    finalized: bool,
}

impl fmt::Debug for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Presentation")
            .field("title", &self.title)
            .field("slides", &self.document.slide_count())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("writer_format", &self.writer_format)
            .field("finalized", &self.finalized)
            .finish()
    }
}

impl Presentation {
    pub fn new(title: impl Into<String>, catalog: Arc<Catalog>, branding: Box<dyn Branding>) -> Self {
        Self {
            title: title.into(),
            catalog,
            branding,
            document: Document::new(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            horizontal_padding: 0.0,
            vertical_padding: 0.0,
            writer_format: WriterFormat::default(),
            author: None,
            finalized: false,
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_padding(mut self, horizontal: f64, vertical: f64) -> Self {
        self.horizontal_padding = horizontal;
        self.vertical_padding = vertical;
        self
    }

    pub fn with_writer_format(mut self, format: WriterFormat) -> Self {
        self.writer_format = format;
        self
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn writer_format(&self) -> WriterFormat {
        self.writer_format
    }

    pub fn set_writer_format(&mut self, format: WriterFormat) {
        self.writer_format = format;
    }

    pub fn branding(&self) -> &dyn Branding {
        self.branding.as_ref()
    }

    pub fn author(&self) -> Option<&Author> {
        self.author.as_ref()
    }

    pub fn slide_count(&self) -> usize {
        self.document.slide_count()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Render `master` onto a new slide at the end of the deck.
    ///
    /// A slide whose rendering fails is removed again, so the deck never
    /// holds a half-drawn slide.
    pub fn add_slide(&mut self, master: &dyn SlideMaster) -> Result<()> {
        if self.finalized {
            return Err(Error::PresentationFinalized(self.title.clone()));
        }
        let key = master.key();
        let ctx = SlideContext {
            width: self.width,
            height: self.height,
            horizontal_padding: self.horizontal_padding,
            vertical_padding: self.vertical_padding,
            branding: self.branding.as_ref(),
            theme: self.branding.slide_theme(key),
            master: key,
            catalog: &self.catalog,
        };
        let slide = self.document.add_slide(key);
        if let Some(color) = ctx.theme.background_color {
            slide.set_background(color);
        }
        let mut canvas = SlideCanvas::new(ctx, slide);
        if let Err(err) = master.render(&mut canvas) {
            self.document.discard_last_slide();
            return Err(err);
        }
        debug!(
            presentation = %self.title,
            master = key,
            index = self.document.slide_count() - 1,
            "added slide"
        );
        Ok(())
    }

    /// Stamp the layout size and document properties. Idempotent.
    pub fn finalize(&mut self) {
        if self.finalized {
            return;
        }
        self.document.set_layout_pixels(self.width, self.height);

        let company = self.branding.creator_company_name().to_string();
        let creator = self
            .author
            .as_ref()
            .and_then(|a| a.creator_name.clone())
            .unwrap_or_else(|| company.clone());
        let company_name = self
            .author
            .as_ref()
            .and_then(|a| a.company_name.clone())
            .unwrap_or_else(|| company.clone());
        let now = Utc::now();

        let properties = self.document.properties_mut();
        properties.title = Some(self.title.clone());
        properties.creator = Some(creator);
        properties.company = Some(company_name);
        properties.last_modified_by = Some(company);
        properties.created = Some(now);
        properties.modified = Some(now);

        self.finalized = true;
        debug!(presentation = %self.title, slides = self.document.slide_count(), "finalized");
    }

    /// Finalize and serialize with the writer for this presentation's format.
    pub fn write(&mut self, writers: &WriterSet) -> Result<Vec<u8>> {
        self.finalize();
        writers.write(self.writer_format, &self.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branding::DefaultBranding;
    use crate::slides::{Text, Title};

    fn presentation() -> Presentation {
        Presentation::new(
            "Deck",
            Arc::new(Catalog::with_builtins()),
            Box::new(DefaultBranding),
        )
    }

    struct Failing;

    impl SlideMaster for Failing {
        fn key(&self) -> &'static str {
            "failing"
        }

        fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
            Title::new("drawn before failing").render(canvas)?;
            Err(Error::Other("boom".to_string()))
        }
    }

    #[test]
    fn test_slides_keep_order_and_theme() {
        let mut prs = presentation();
        prs.add_slide(&Title::new("Hello")).unwrap();
        prs.add_slide(&Text::new("Body")).unwrap();
        let slides = prs.document().slides();
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].master(), "title");
        assert_eq!(slides[0].texts(), vec!["Hello".to_string()]);
        assert!(slides[0].background().is_some());
        assert_eq!(slides[1].master(), "text");
    }

    #[test]
    fn test_failed_render_leaves_no_slide() {
        let mut prs = presentation();
        let err = prs.add_slide(&Failing).unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(prs.slide_count(), 0);
    }

    #[test]
    fn test_finalize_stamps_properties() {
        let mut prs = presentation()
            .with_size(1920.0, 1080.0)
            .with_author(Author::new("Ada").with_company("Analytical"));
        prs.add_slide(&Title::new("Hello")).unwrap();
        prs.finalize();
        prs.finalize();

        let props = prs.document().properties();
        assert_eq!(props.title.as_deref(), Some("Deck"));
        assert_eq!(props.creator.as_deref(), Some("Ada"));
        assert_eq!(props.company.as_deref(), Some("Analytical"));
        assert_eq!(
            props.last_modified_by.as_deref(),
            Some(prs.branding().creator_company_name())
        );
        assert!(props.created.is_some());
        assert_eq!(prs.document().layout().cx, 18_288_000);

        let err = prs.add_slide(&Title::new("Late")).unwrap_err();
        assert!(matches!(err, Error::PresentationFinalized(_)));
    }

    #[test]
    fn test_write_needs_installed_writer() {
        let mut prs = presentation();
        let err = prs.write(&WriterSet::default()).unwrap_err();
        assert!(matches!(err, Error::WriterUnavailable(WriterFormat::PowerPoint2007)));

        prs.set_writer_format(WriterFormat::Serialized);
        let bytes = prs.write(&WriterSet::default()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json.is_object());
    }
}
