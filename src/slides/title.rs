//! Section title slides.
use serde_json::{Value, json};

use super::params::{ParamKind, ParamSpec};
use super::{DynamicSlide, SlideArgs, SlideCanvas, SlideMaster};
use crate::branding::StyleAttribute;
use crate::common::{Result, VerticalAlignment};
use crate::components::TextBox;
use crate::components::mixins::DEFAULT_FONT_SIZE;
use crate::schema::{FieldSchema, Properties, Schema};

/// Gap between the title and subtitle, measured from the slide's middle.
const SUBTITLE_GAP: f64 = 10.0;

/// A single title centered on the slide.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Title {
    title: String,
}

impl Title {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

impl SlideMaster for Title {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        let ctx = canvas.ctx();
        TextBox::new(self.title.as_str())
            .paragraph_style("sectionTitle")
            .width(ctx.content_width())
            .lines(1)
            .position(ctx.horizontal_padding, ctx.vertical_padding)
            .centered()
            .draw(canvas)?;
        Ok(())
    }
}

impl DynamicSlide for Title {
    const KEY: &'static str = "title";
    const LABEL: &'static str = "Title";
    const PARAMS: &'static [ParamSpec] = &[ParamSpec::optional("title", ParamKind::Text)];

    fn description() -> &'static str {
        "A simple slide with a centered title"
    }

    fn data_schema() -> Schema {
        Schema::object(
            Properties::from_iter([("title", FieldSchema::string().describe("The main title text"))]),
            &["title"],
        )
    }

    fn example() -> Value {
        json!({"title": "Welcome to Our Presentation"})
    }

    fn from_args(args: SlideArgs) -> Result<Self> {
        Ok(Self::new(args.text("title")?))
    }
}

/// A title just above the middle of the slide with a subtitle just below.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TitleSubtitle {
    title: String,
    subtitle: String,
}

impl TitleSubtitle {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

impl SlideMaster for TitleSubtitle {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        let ctx = canvas.ctx();
        let middle = ctx.height / 2.0;
        let title_size = ctx
            .branding
            .paragraph_style_value("sectionTitle", StyleAttribute::Size)
            .and_then(|v| v.as_f64())
            .unwrap_or(DEFAULT_FONT_SIZE);

        TextBox::new(self.title.as_str())
            .paragraph_style("sectionTitle")
            .width(ctx.content_width())
            .lines(1)
            .y(middle - (title_size + SUBTITLE_GAP))
            .vertical(VerticalAlignment::Bottom)
            .center_horizontally()
            .draw(canvas)?;

        TextBox::new(self.subtitle.as_str())
            .paragraph_style("sectionSubtitle")
            .width(ctx.content_width())
            .lines(2)
            .y(middle + SUBTITLE_GAP)
            .vertical(VerticalAlignment::Top)
            .center_horizontally()
            .draw(canvas)?;
        Ok(())
    }
}

impl DynamicSlide for TitleSubtitle {
    const KEY: &'static str = "title-subtitle";
    const LABEL: &'static str = "Title with Subtitle";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::required("title", ParamKind::Text),
        ParamSpec::required("subtitle", ParamKind::Text),
    ];

    fn description() -> &'static str {
        "A title slide with a subtitle underneath"
    }

    fn data_schema() -> Schema {
        Schema::object(
            Properties::from_iter([
                ("title", FieldSchema::string().describe("The main title text")),
                ("subtitle", FieldSchema::string().describe("The subtitle text")),
            ]),
            &["title", "subtitle"],
        )
    }

    fn example() -> Value {
        json!({
            "title": "Annual Report 2024",
            "subtitle": "Financial Performance and Strategic Outlook"
        })
    }

    fn from_args(args: SlideArgs) -> Result<Self> {
        Ok(Self::new(args.text("title")?, args.text("subtitle")?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::HorizontalAlignment;
    use crate::components::testing::{with_canvas, with_geometry};
    use crate::document::Frame;

    #[test]
    fn test_title_is_centered() {
        with_geometry("title", (1280.0, 720.0, 40.0, 20.0), |canvas| {
            Title::new("Welcome").render(canvas).unwrap();
            let shape = &canvas.slide().shapes()[0];
            assert_eq!(shape.frame, Frame::new(40.0, 336.0, 1200.0, 48.0));
            let paragraph = &shape.text_frame().unwrap().paragraphs[0];
            assert_eq!(paragraph.horizontal, HorizontalAlignment::Center);
            assert_eq!(paragraph.runs[0].font.size, 48.0);
            assert!(paragraph.runs[0].font.bold);
        });
    }

    #[test]
    fn test_empty_title_draws_nothing() {
        with_canvas("title", |canvas| {
            Title::default().render(canvas).unwrap();
            assert!(canvas.slide().shapes().is_empty());
        });
    }

    #[test]
    fn test_title_and_subtitle_straddle_middle() {
        with_canvas("title-subtitle", |canvas| {
            TitleSubtitle::new("Report", "Outlook").render(canvas).unwrap();
            let shapes = canvas.slide().shapes();
            assert_eq!(shapes.len(), 2);
            assert_eq!(shapes[0].frame.y, 360.0 - 58.0);
            assert_eq!(shapes[0].frame.bottom(), 350.0);
            assert_eq!(shapes[1].frame.y, 370.0);
            assert_eq!(shapes[1].frame.height, 48.0);
            let subtitle = &shapes[1].text_frame().unwrap().paragraphs[0];
            assert_eq!(subtitle.vertical, VerticalAlignment::Top);
            assert_eq!(subtitle.runs[0].font.size, 24.0);
        });
    }
}
