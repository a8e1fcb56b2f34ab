//! Text-only slides.
use serde_json::{Value, json};

use super::params::{ParamKind, ParamSpec};
use super::{DynamicSlide, SlideArgs, SlideCanvas, SlideMaster};
use crate::common::{HorizontalAlignment, Result, VerticalAlignment};
use crate::components::TextBox;
use crate::schema::{FieldSchema, Properties, Schema};

/// Share of the slide width used by the centered text.
const TEXT_WIDTH_RATIO: f64 = 0.66;

/// A block of body text centered on the slide.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Text {
    text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl SlideMaster for Text {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        let ctx = canvas.ctx();
        TextBox::new(self.text.as_str())
            .paragraph_style("body")
            .width(ctx.width * TEXT_WIDTH_RATIO)
            .centered()
            .draw(canvas)?;
        Ok(())
    }
}

impl DynamicSlide for Text {
    const KEY: &'static str = "text";
    const LABEL: &'static str = "Text";
    const PARAMS: &'static [ParamSpec] = &[ParamSpec::required("text", ParamKind::Text)];

    fn description() -> &'static str {
        "A slide with centered body text"
    }

    fn data_schema() -> Schema {
        Schema::object(
            Properties::from_iter([("text", FieldSchema::string().describe("The body text to display"))]),
            &["text"],
        )
    }

    fn example() -> Value {
        json!({"text": "Our mission is to make complex data simple and actionable for everyone."})
    }

    fn from_args(args: SlideArgs) -> Result<Self> {
        Ok(Self::new(args.text("text")?))
    }
}

const QUOTE_FONT_SIZE: f64 = 32.0;
const ATTRIBUTION_FONT_SIZE: f64 = 20.0;
/// Inset of the quote from each horizontal padding.
const QUOTE_INSET: f64 = 100.0;

/// A large quotation with an optional attribution line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Quote {
    quote: String,
    attribution: String,
}

impl Quote {
    pub fn new(quote: impl Into<String>, attribution: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            attribution: attribution.into(),
        }
    }
}

impl SlideMaster for Quote {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        if self.quote.is_empty() {
            return Ok(());
        }
        let ctx = canvas.ctx();
        let width = ctx.content_width() - 2.0 * QUOTE_INSET;
        let x = ctx.horizontal_padding + QUOTE_INSET;
        let middle = ctx.height / 2.0;

        TextBox::new(format!("\u{201c}{}\u{201d}", self.quote))
            .font_size(QUOTE_FONT_SIZE)
            .bold(true)
            .width(width)
            .lines(6)
            .position(x, middle - 100.0)
            .horizontal(HorizontalAlignment::Center)
            .vertical(VerticalAlignment::Middle)
            .draw(canvas)?;

        if !self.attribution.is_empty() {
            TextBox::new(format!("\u{2014} {}", self.attribution))
                .font_size(ATTRIBUTION_FONT_SIZE)
                .width(width)
                .position(x, middle + 50.0)
                .horizontal(HorizontalAlignment::Right)
                .vertical(VerticalAlignment::Top)
                .draw(canvas)?;
        }
        Ok(())
    }
}

impl DynamicSlide for Quote {
    const KEY: &'static str = "quote";
    const LABEL: &'static str = "Quote";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::optional("quote", ParamKind::Text),
        ParamSpec::optional("attribution", ParamKind::Text),
    ];

    fn description() -> &'static str {
        "A slide featuring a quote with attribution"
    }

    fn data_schema() -> Schema {
        Schema::object(
            Properties::from_iter([
                ("quote", FieldSchema::string().describe("The quote text")),
                ("attribution", FieldSchema::string().describe("Who said the quote")),
            ]),
            &["quote"],
        )
    }

    fn example() -> Value {
        json!({
            "quote": "The best way to predict the future is to create it.",
            "attribution": "Peter Drucker"
        })
    }

    fn from_args(args: SlideArgs) -> Result<Self> {
        Ok(Self::new(args.text("quote")?, args.text("attribution")?))
    }
}
