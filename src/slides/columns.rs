//! Multi-column text slides.
use serde_json::{Value, json};

use super::params::{ParamKind, ParamSpec};
use super::{DynamicSlide, SlideArgs, SlideCanvas, SlideMaster, TITLE_GAP, content_top, render_title};
use crate::common::{HorizontalAlignment, Result, VerticalAlignment};
use crate::components::TextBox;
use crate::schema::{FieldSchema, Properties, Schema};

/// Draw `columns` side by side below the title, separated by `gap`.
///
/// Empty columns keep their slot but draw nothing.
fn render_columns(canvas: &mut SlideCanvas<'_>, title: &str, columns: &[&str], gap: f64) -> Result<()> {
    let title_height = render_title(canvas, title)?;
    let ctx = canvas.ctx();
    let y = content_top(title_height, TITLE_GAP);
    let count = columns.len() as f64;
    let width = ((ctx.content_width() - gap * (count - 1.0)) / count).floor();
    let height = ctx.height - y - TITLE_GAP;

    for (index, text) in columns.iter().enumerate() {
        TextBox::new(*text)
            .paragraph_style("bodyText")
            .position(ctx.horizontal_padding + index as f64 * (width + gap), y)
            .width(width)
            .height(height)
            .horizontal(HorizontalAlignment::Left)
            .vertical(VerticalAlignment::Top)
            .draw(canvas)?;
    }
    Ok(())
}

const TWO_COLUMN_GAP: f64 = 40.0;
const THREE_COLUMN_GAP: f64 = 30.0;

/// Two columns of body text under an optional title.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TwoColumn {
    title: String,
    left_column: String,
    right_column: String,
}

impl TwoColumn {
    pub fn new(title: impl Into<String>, left_column: impl Into<String>, right_column: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            left_column: left_column.into(),
            right_column: right_column.into(),
        }
    }
}

impl SlideMaster for TwoColumn {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        render_columns(
            canvas,
            &self.title,
            &[&self.left_column, &self.right_column],
            TWO_COLUMN_GAP,
        )
    }
}

impl DynamicSlide for TwoColumn {
    const KEY: &'static str = "two-column";
    const LABEL: &'static str = "Two Column";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::optional("title", ParamKind::Text),
        ParamSpec::optional("leftColumn", ParamKind::Text),
        ParamSpec::optional("rightColumn", ParamKind::Text),
    ];

    fn description() -> &'static str {
        "A slide with a title and two columns of text"
    }

    fn data_schema() -> Schema {
        Schema::object(
            Properties::from_iter([
                ("title", FieldSchema::string().describe("The slide title")),
                ("leftColumn", FieldSchema::string().describe("Text content for the left column")),
                ("rightColumn", FieldSchema::string().describe("Text content for the right column")),
            ]),
            &["title", "leftColumn", "rightColumn"],
        )
    }

    fn example() -> Value {
        json!({
            "title": "Before and After",
            "leftColumn": "Manual reports assembled by hand every week.",
            "rightColumn": "Automated decks generated from live data in seconds."
        })
    }

    fn from_args(args: SlideArgs) -> Result<Self> {
        Ok(Self::new(
            args.text("title")?,
            args.text("leftColumn")?,
            args.text("rightColumn")?,
        ))
    }
}

/// Three columns of body text under an optional title.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThreeColumn {
    title: String,
    left_column: String,
    middle_column: String,
    right_column: String,
}

impl ThreeColumn {
    pub fn new(
        title: impl Into<String>,
        left_column: impl Into<String>,
        middle_column: impl Into<String>,
        right_column: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            left_column: left_column.into(),
            middle_column: middle_column.into(),
            right_column: right_column.into(),
        }
    }
}

impl SlideMaster for ThreeColumn {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        render_columns(
            canvas,
            &self.title,
            &[&self.left_column, &self.middle_column, &self.right_column],
            THREE_COLUMN_GAP,
        )
    }
}

impl DynamicSlide for ThreeColumn {
    const KEY: &'static str = "three-column";
    const LABEL: &'static str = "Three Column";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::optional("title", ParamKind::Text),
        ParamSpec::optional("leftColumn", ParamKind::Text),
        ParamSpec::optional("middleColumn", ParamKind::Text),
        ParamSpec::optional("rightColumn", ParamKind::Text),
    ];

    fn description() -> &'static str {
        "A slide with a title and three columns of text"
    }

    fn data_schema() -> Schema {
        Schema::object(
            Properties::from_iter([
                ("title", FieldSchema::string().describe("The slide title")),
                ("leftColumn", FieldSchema::string().describe("Text content for the left column")),
                ("middleColumn", FieldSchema::string().describe("Text content for the middle column")),
                ("rightColumn", FieldSchema::string().describe("Text content for the right column")),
            ]),
            &["title", "leftColumn", "middleColumn", "rightColumn"],
        )
    }

    fn example() -> Value {
        json!({
            "title": "Our Process",
            "leftColumn": "Discover: interview users and map their needs.",
            "middleColumn": "Design: prototype and test the riskiest ideas first.",
            "rightColumn": "Deliver: ship in small increments and measure."
        })
    }

    fn from_args(args: SlideArgs) -> Result<Self> {
        Ok(Self::new(
            args.text("title")?,
            args.text("leftColumn")?,
            args.text("middleColumn")?,
            args.text("rightColumn")?,
        ))
    }
}
