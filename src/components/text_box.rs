//! Rich text box.
use serde_json::{Value, json};
use tracing::trace;

use super::mixins::{self, Alignment, FontSettings, Link, Margins, Position, Size};
use super::{Component, DynamicComponent, Placed, fields};
use crate::common::{HorizontalAlignment, RGBColor, Result, VerticalAlignment};
use crate::document::{Frame, RunFont, ShapeKind, TextFrame, TextRun};
use crate::schema::{Capability, FieldSchema, Properties, Schema};
use crate::slides::{SlideCanvas, SlideContext};

/// A text box holding one styled run.
///
/// Unset height defaults to `font size x lines`; unset width spans the
/// slide minus `x` on both sides.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    pub(crate) text: String,
    pub(crate) lines: u32,
    pub(crate) position: Position,
    pub(crate) size: Size,
    pub(crate) alignment: Alignment,
    pub(crate) margins: Margins,
    pub(crate) font: FontSettings,
    pub(crate) background: Option<RGBColor>,
    pub(crate) rotation: i32,
    pub(crate) paragraph_style: Option<String>,
    pub(crate) link: Link,
}

impl TextBox {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lines: 2,
            position: Position::default(),
            size: Size::default(),
            alignment: Alignment::default(),
            margins: Margins::default(),
            font: FontSettings::default(),
            background: None,
            rotation: 0,
            paragraph_style: None,
            link: Link::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.position = Position { x, y };
        self
    }

    pub fn x(mut self, x: f64) -> Self {
        self.position.x = x;
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.position.y = y;
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

    /// Number of lines used for the default height.
    pub fn lines(mut self, lines: u32) -> Self {
        self.lines = lines;
        self
    }

    pub fn paragraph_style(mut self, name: impl Into<String>) -> Self {
        self.paragraph_style = Some(name.into());
        self
    }

    pub fn horizontal(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment.horizontal = Some(alignment);
        self
    }

    pub fn vertical(mut self, alignment: VerticalAlignment) -> Self {
        self.alignment.vertical = Some(alignment);
        self
    }

    /// Center the box horizontally on the slide, text centered.
    pub fn center_horizontally(mut self) -> Self {
        self.alignment.center_horizontally = true;
        self.alignment.horizontal = Some(HorizontalAlignment::Center);
        self
    }

    /// Center the box vertically on the slide, text anchored in the middle.
    pub fn center_vertically(mut self) -> Self {
        self.alignment.center_vertically = true;
        self.alignment.vertical = Some(VerticalAlignment::Middle);
        self
    }

    /// Center on both axes.
    pub fn centered(self) -> Self {
        self.center_horizontally().center_vertically()
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font.size = Some(size);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.font.bold = Some(bold);
        self
    }

    pub fn color(mut self, color: RGBColor) -> Self {
        self.font.color = Some(color);
        self
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font.font = Some(font.into());
        self
    }

    pub fn uppercase(mut self, uppercase: bool) -> Self {
        self.font.uppercase = Some(uppercase);
        self
    }

    pub fn underlined(mut self, underlined: bool) -> Self {
        self.font.underlined = underlined;
        self
    }

    pub fn letter_spacing(mut self, spacing: f64) -> Self {
        self.font.letter_spacing = Some(spacing);
        self
    }

    pub fn background(mut self, color: RGBColor) -> Self {
        self.background = Some(color);
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

    pub fn link_to_slide(mut self, number: u32) -> Self {
        self.link.slide_number = Some(number);
        self
    }

    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Draw the box and report where it landed.
    ///
    /// Returns `None` without drawing anything when the text is empty.
    pub fn draw(&self, canvas: &mut SlideCanvas<'_>) -> Result<Option<Placed>> {
        if self.text.is_empty() {
            return Ok(None);
        }
        let ctx = canvas.ctx();

        let mut font = self.font.clone();
        let mut horizontal = self.alignment.horizontal;
        if let Some(name) = &self.paragraph_style
            && let Some(style) = ctx.branding.paragraph_style(name)
        {
            font.fill_from(style);
            horizontal = horizontal.or(style.horizontal_alignment);
        }

        let size = font.size_or_default();
        let height = self.size.height.unwrap_or(size * self.lines as f64);
        let width = self
            .size
            .width
            .unwrap_or(ctx.width - self.position.x * 2.0);
        let (x, y) = self.alignment.place(
            self.position.x,
            self.position.y,
            width,
            height,
            (ctx.width, ctx.height),
        );

        let text = if font.uppercase == Some(true) {
            self.text.to_uppercase()
        } else {
            self.text.clone()
        };
        let run_font = RunFont {
            name: font.font.unwrap_or_else(|| ctx.branding.base_font().to_string()),
            size,
            bold: font.bold.unwrap_or(false),
            underline: font.underlined,
            character_spacing: font.letter_spacing.unwrap_or(0.0),
            color: font.color.unwrap_or(ctx.theme.text_color),
        };
        let mut run = TextRun::new(text, run_font);
        run.hyperlink = self.link.hyperlink();

        let mut frame = TextFrame {
            insets: self.margins.insets(),
            ..TextFrame::default()
        };
        let paragraph = frame.active_paragraph_mut();
        paragraph.line_spacing = font.line_height.unwrap_or(100);
        paragraph.horizontal = horizontal.unwrap_or_default();
        paragraph.vertical = self.alignment.vertical.unwrap_or_default();
        paragraph.add_run(run);

        let shape = canvas.add_shape(
            Frame::new(x, y, width, height).with_rotation(self.rotation),
            ShapeKind::RichText(frame),
        );
        shape.fill(self.background);
        trace!(id = shape.id, x, y, width, height, "drew text box");

        Ok(Some(Placed {
            id: shape.id,
            frame: shape.frame,
        }))
    }
}

impl Component for TextBox {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        self.draw(canvas).map(|_| ())
    }
}

impl DynamicComponent for TextBox {
    const KEY: &'static str = "text-box";
    const LABEL: &'static str = "Text Box";
    const CAPABILITIES: &'static [Capability] = &[
        Capability::Position,
        Capability::Size,
        Capability::Alignment,
        Capability::Margins,
        Capability::FontSettings,
        Capability::BackgroundColor,
        Capability::Rotation,
        Capability::ParagraphStyle,
        Capability::Url,
    ];

    fn description() -> &'static str {
        "A text box for displaying formatted text content"
    }

    fn own_schema() -> Schema {
        Schema::object(
            Properties::from_iter([
                ("text", FieldSchema::string().describe("The text content to display")),
                (
                    "lines",
                    FieldSchema::integer()
                        .describe("Number of lines (used for height calculation if height not specified)")
                        .minimum(1.0),
                ),
            ]),
            &["text"],
        )
    }

    fn example() -> Value {
        json!({
            "text": "Hello World",
            "x": 100,
            "y": 100,
            "width": 400,
            "height": 100,
            "fontSize": 24,
            "bold": true,
            "color": "2c3e50",
            "horizontalAlignment": "center",
            "verticalAlignment": "center"
        })
    }

    fn from_data(_ctx: &SlideContext<'_>, data: &Value) -> Result<Self> {
        let owner = Self::KEY;
        let mut text_box = TextBox::new(fields::string(data, "text", owner)?.unwrap_or_default());
        text_box.position.read(data, owner)?;
        text_box.size.read(data, owner)?;
        text_box.font.read(data, owner)?;
        text_box.alignment.read(data, owner)?;
        text_box.margins.read(data, owner)?;
        if let Some(color) = mixins::read_background(data, owner)? {
            text_box.background = Some(color);
        }
        if let Some(rotation) = mixins::read_rotation(data, owner)? {
            text_box.rotation = rotation;
        }
        text_box.paragraph_style = mixins::read_paragraph_style(data, owner)?;
        text_box.link.read(data, owner)?;
        if let Some(lines) = fields::integer(data, "lines", owner)? {
            text_box.lines = lines.max(1) as u32;
        }
        Ok(text_box)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::with_canvas;
    use crate::document::Hyperlink;

    #[test]
    fn test_empty_text_draws_nothing() {
        with_canvas("blank", |canvas| {
            assert_eq!(TextBox::new("").draw(canvas).unwrap(), None);
            assert!(canvas.slide().shapes().is_empty());
        });
    }

    #[test]
    fn test_default_geometry() {
        with_canvas("blank", |canvas| {
            let placed = TextBox::new("Hi").x(40.0).font_size(20.0).draw(canvas).unwrap().unwrap();
            assert_eq!(placed.frame, Frame::new(40.0, 0.0, 1200.0, 40.0));
        });
    }

    #[test]
    fn test_paragraph_style_and_theme_defaults() {
        with_canvas("text", |canvas| {
            let ctx = canvas.ctx();
            TextBox::new("Title")
                .paragraph_style("slideTitle")
                .uppercase(true)
                .render(canvas)
                .unwrap();
            let frame = canvas.slide().shapes()[0].text_frame().unwrap();
            let run = &frame.paragraphs[0].runs[0];
            assert_eq!(run.text, "TITLE");
            assert_eq!(run.font.size, 32.0);
            assert!(run.font.bold);
            assert_eq!(run.font.name, ctx.branding.base_font());
            assert_eq!(run.font.color, ctx.theme.text_color);
        });
    }

    #[test]
    fn test_centered_box() {
        with_canvas("blank", |canvas| {
            let placed = TextBox::new("Hi")
                .width(400.0)
                .height(100.0)
                .centered()
                .draw(canvas)
                .unwrap()
                .unwrap();
            assert_eq!((placed.frame.x, placed.frame.y), (440.0, 310.0));
            let paragraph = &canvas.slide().shapes()[0].text_frame().unwrap().paragraphs[0];
            assert_eq!(paragraph.horizontal, HorizontalAlignment::Center);
            assert_eq!(paragraph.vertical, VerticalAlignment::Middle);
        });
    }

    #[test]
    fn test_from_data_applies_present_fields() {
        with_canvas("blank", |canvas| {
            let ctx = canvas.ctx();
            let data = json!({"text": "Go", "y": 50, "url": "https://example.com", "lines": 3, "rotation": 90});
            let text_box = TextBox::from_data(&ctx, &data).unwrap();
            assert_eq!(text_box.position, Position { x: 0.0, y: 50.0 });
            assert_eq!(text_box.lines, 3);
            assert_eq!(text_box.rotation, 90);
            text_box.render(canvas).unwrap();
            let shape = &canvas.slide().shapes()[0];
            assert_eq!(shape.frame.height, 36.0);
            assert_eq!(
                shape.text_frame().unwrap().paragraphs[0].runs[0].hyperlink,
                Some(Hyperlink::Url { url: "https://example.com".into() })
            );
        });
    }
}
