//! Chart slides.
//!
//! Every chart master takes its chart through a chart parameter, bound from
//! `chartType`/`chartData` (or the parameter-prefixed pair) by the
//! [`SlideFactory`](super::SlideFactory).
use serde_json::{Value, json};

use super::params::{ParamKind, ParamSpec};
use super::{DynamicSlide, SlideArgs, SlideCanvas, SlideMaster, content_top, render_title};
use crate::charts::{ChartComponent, chart_data_schema, chart_type_schema};
use crate::common::{HorizontalAlignment, Result, VerticalAlignment};
use crate::components::{ChartShape, Component, TextBox};
use crate::schema::{FieldSchema, Properties, Schema};

/// Chart shape on the theme's chart background.
fn chart_shape(canvas: &SlideCanvas<'_>, chart: &ChartComponent) -> ChartShape {
    ChartShape::new(chart.clone()).background(canvas.ctx().theme.chart_background_color)
}

/// Chart type and data fields after the given text fields, all required.
fn chart_schema(text_fields: &[(&str, &str)]) -> Schema {
    let mut properties = Properties::from_iter(
        text_fields
            .iter()
            .map(|(name, description)| (*name, FieldSchema::string().describe(*description))),
    );
    properties.insert("chartType", chart_type_schema("Type of chart to display"));
    properties.insert("chartData", chart_data_schema("Chart data with series"));
    let mut required: Vec<&str> = text_fields.iter().map(|(name, _)| *name).collect();
    required.extend(["chartType", "chartData"]);
    Schema::object(properties, &required)
}

fn quarterly_revenue(chart_type: &str) -> Value {
    json!({
        "chartType": chart_type,
        "chartData": {
            "series": [
                {"label": "2024", "data": {"Q1": 100, "Q2": 120, "Q3": 135, "Q4": 150}}
            ]
        }
    })
}

/// Merge `fields` into an example chart payload.
fn with_fields(mut example: Value, fields: Value) -> Value {
    if let (Some(example), Value::Object(fields)) = (example.as_object_mut(), fields) {
        example.extend(fields);
    }
    example
}

/// A chart filling the whole slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    chart: ChartComponent,
}

impl Chart {
    pub fn new(chart: ChartComponent) -> Self {
        Self { chart }
    }
}

impl SlideMaster for Chart {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        chart_shape(canvas, &self.chart).centered().render(canvas)
    }
}

impl DynamicSlide for Chart {
    const KEY: &'static str = "chart";
    const LABEL: &'static str = "Chart";
    const PARAMS: &'static [ParamSpec] = &[ParamSpec::chart("chart")];

    fn description() -> &'static str {
        "A slide with a full-size chart"
    }

    fn data_schema() -> Schema {
        chart_schema(&[])
    }

    fn example() -> Value {
        quarterly_revenue("Bar")
    }

    fn from_args(mut args: SlideArgs) -> Result<Self> {
        Ok(Self::new(args.take_chart("chart")?))
    }
}

const SQUARE_CHART_WIDTH: f64 = 640.0;
const SQUARE_CHART_HEIGHT: f64 = 600.0;

/// A near-square chart centered on the slide.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSquare {
    chart: ChartComponent,
}

impl ChartSquare {
    pub fn new(chart: ChartComponent) -> Self {
        Self { chart }
    }
}

impl SlideMaster for ChartSquare {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        chart_shape(canvas, &self.chart)
            .width(SQUARE_CHART_WIDTH)
            .height(SQUARE_CHART_HEIGHT)
            .centered()
            .render(canvas)
    }
}

impl DynamicSlide for ChartSquare {
    const KEY: &'static str = "chart-square";
    const LABEL: &'static str = "Chart Square";
    const PARAMS: &'static [ParamSpec] = &[ParamSpec::chart("chart")];

    fn description() -> &'static str {
        "A slide with a square chart centered on the slide"
    }

    fn data_schema() -> Schema {
        chart_schema(&[])
    }

    fn example() -> Value {
        json!({
            "chartType": "Column",
            "chartData": {
                "series": [
                    {"label": "Market Share", "data": {"North": 40, "South": 25, "East": 20, "West": 15}}
                ]
            }
        })
    }

    fn from_args(mut args: SlideArgs) -> Result<Self> {
        Ok(Self::new(args.take_chart("chart")?))
    }
}

const SIDE_CHART_X: f64 = 620.0;
const SIDE_CHART_WIDTH: f64 = 660.0;
const SIDE_TEXT_WIDTH: f64 = 520.0;
const SIDE_TEXT_HEIGHT: f64 = 560.0;

/// Body text on the left, a chart bleeding off the right edge.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartText {
    text: String,
    chart: ChartComponent,
}

impl ChartText {
    pub fn new(text: impl Into<String>, chart: ChartComponent) -> Self {
        Self {
            text: text.into(),
            chart,
        }
    }
}

impl SlideMaster for ChartText {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        let ctx = canvas.ctx();
        chart_shape(canvas, &self.chart)
            .position(SIDE_CHART_X, 0.0)
            .width(SIDE_CHART_WIDTH)
            .height(ctx.height + 1.0)
            .render(canvas)?;
        TextBox::new(self.text.as_str())
            .paragraph_style("body")
            .position(ctx.horizontal_padding, ctx.vertical_padding)
            .width(SIDE_TEXT_WIDTH)
            .height(SIDE_TEXT_HEIGHT)
            .horizontal(HorizontalAlignment::Left)
            .vertical(VerticalAlignment::Middle)
            .draw(canvas)?;
        Ok(())
    }
}

impl DynamicSlide for ChartText {
    const KEY: &'static str = "chart-text";
    const LABEL: &'static str = "Chart with Text";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::required("text", ParamKind::Text),
        ParamSpec::chart("chart"),
    ];

    fn description() -> &'static str {
        "A slide with text on the left and a chart on the right"
    }

    fn data_schema() -> Schema {
        chart_schema(&[("text", "Text content displayed next to the chart")])
    }

    fn example() -> Value {
        with_fields(
            json!({
                "chartType": "Line",
                "chartData": {
                    "series": [
                        {"label": "Revenue", "data": {"Jan": 50, "Feb": 65, "Mar": 80, "Apr": 95}}
                    ]
                }
            }),
            json!({"text": "Our quarterly performance shows consistent growth across all metrics."}),
        )
    }

    fn from_args(mut args: SlideArgs) -> Result<Self> {
        let text = args.text("text")?;
        Ok(Self::new(text, args.take_chart("chart")?))
    }
}

const TEXT_SHARE: f64 = 0.4;
const TEXT_CHART_GAP: f64 = 40.0;

/// A slide title above text on the left and a chart on the right.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTextTitle {
    title: String,
    text: String,
    chart: ChartComponent,
}

impl ChartTextTitle {
    pub fn new(title: impl Into<String>, text: impl Into<String>, chart: ChartComponent) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            chart,
        }
    }
}

impl SlideMaster for ChartTextTitle {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        let title_height = render_title(canvas, &self.title)?;
        let ctx = canvas.ctx();
        let y = content_top(title_height, ctx.vertical_padding);
        let available_width = ctx.content_width();
        let available_height = ctx.height - y - ctx.vertical_padding;
        let text_width = (available_width * TEXT_SHARE).floor();
        let chart_width = available_width - text_width - TEXT_CHART_GAP;

        chart_shape(canvas, &self.chart)
            .position(ctx.horizontal_padding + text_width + TEXT_CHART_GAP, y)
            .width(chart_width)
            .height(available_height)
            .render(canvas)?;
        TextBox::new(self.text.as_str())
            .paragraph_style("body")
            .position(ctx.horizontal_padding, y)
            .width(text_width)
            .height(available_height)
            .horizontal(HorizontalAlignment::Left)
            .vertical(VerticalAlignment::Middle)
            .draw(canvas)?;
        Ok(())
    }
}

impl DynamicSlide for ChartTextTitle {
    const KEY: &'static str = "chart-text-title";
    const LABEL: &'static str = "Chart with Text and Title";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::optional("title", ParamKind::Text),
        ParamSpec::optional("text", ParamKind::Text),
        ParamSpec::chart("chart"),
    ];

    fn description() -> &'static str {
        "A slide with a title, text on the left and a chart on the right"
    }

    fn data_schema() -> Schema {
        chart_schema(&[
            ("title", "The slide title"),
            ("text", "Text content displayed next to the chart"),
        ])
    }

    fn example() -> Value {
        with_fields(
            quarterly_revenue("Line"),
            json!({
                "title": "Growth Story",
                "text": "Revenue grew every quarter, driven by new enterprise customers."
            }),
        )
    }

    fn from_args(mut args: SlideArgs) -> Result<Self> {
        let title = args.text("title")?;
        let text = args.text("text")?;
        Ok(Self::new(title, text, args.take_chart("chart")?))
    }
}

/// Space between the title and a chart below it.
const TITLED_CHART_GAP: f64 = 20.0;

/// Draw `title`, then `chart` spanning the rest of the slide.
fn render_titled_chart(canvas: &mut SlideCanvas<'_>, title: &str, chart: &ChartComponent) -> Result<()> {
    let title_height = render_title(canvas, title)?;
    let ctx = canvas.ctx();
    chart_shape(canvas, chart)
        .position(
            ctx.horizontal_padding,
            title_height + ctx.vertical_padding + TITLED_CHART_GAP,
        )
        .width(ctx.content_width())
        .height(ctx.height - title_height - 2.0 * ctx.vertical_padding - TITLED_CHART_GAP)
        .center_horizontally()
        .render(canvas)
}

/// A slide title above a full-width chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTitle {
    title: String,
    chart: ChartComponent,
}

impl ChartTitle {
    pub fn new(title: impl Into<String>, chart: ChartComponent) -> Self {
        Self {
            title: title.into(),
            chart,
        }
    }
}

impl SlideMaster for ChartTitle {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        render_titled_chart(canvas, &self.title, &self.chart)
    }
}

impl DynamicSlide for ChartTitle {
    const KEY: &'static str = "chart-title";
    const LABEL: &'static str = "Chart with Title";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::required("title", ParamKind::Text),
        ParamSpec::chart("chart"),
    ];

    fn description() -> &'static str {
        "A slide with a title and a chart below it"
    }

    fn data_schema() -> Schema {
        chart_schema(&[("title", "The slide title")])
    }

    fn example() -> Value {
        with_fields(quarterly_revenue("Column"), json!({"title": "Revenue by Quarter"}))
    }

    fn from_args(mut args: SlideArgs) -> Result<Self> {
        let title = args.text("title")?;
        Ok(Self::new(title, args.take_chart("chart")?))
    }
}

/// A slide title above a full-width chart with its own title.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTitles {
    slide_title: String,
    chart: ChartComponent,
}

impl ChartTitles {
    /// The chart is drawn with `chart_title` as its own title.
    pub fn new(slide_title: impl Into<String>, chart_title: impl Into<String>, chart: ChartComponent) -> Self {
        Self {
            slide_title: slide_title.into(),
            chart: chart.title(chart_title),
        }
    }
}

impl SlideMaster for ChartTitles {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        render_titled_chart(canvas, &self.slide_title, &self.chart)
    }
}

impl DynamicSlide for ChartTitles {
    const KEY: &'static str = "chart-titles";
    const LABEL: &'static str = "Chart with Titles";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::required("slideTitle", ParamKind::Text),
        ParamSpec::required("chartTitle", ParamKind::Text),
        ParamSpec::chart("chart"),
    ];

    fn description() -> &'static str {
        "A slide with a slide title and a titled chart below it"
    }

    fn data_schema() -> Schema {
        chart_schema(&[
            ("slideTitle", "The slide title"),
            ("chartTitle", "The title shown on the chart"),
        ])
    }

    fn example() -> Value {
        json!({
            "slideTitle": "Q4 Performance Overview",
            "chartTitle": "Revenue vs Costs",
            "chartType": "Column",
            "chartData": {
                "series": [
                    {"label": "Revenue", "data": {"Oct": 120, "Nov": 135, "Dec": 160}},
                    {"label": "Costs", "data": {"Oct": 90, "Nov": 95, "Dec": 110}}
                ]
            }
        })
    }

    fn from_args(mut args: SlideArgs) -> Result<Self> {
        let slide_title = args.text("slideTitle")?;
        let chart_title = args.text("chartTitle")?;
        Ok(Self::new(slide_title, chart_title, args.take_chart("chart")?))
    }
}

const TWO_UP_CHART_GAP: f64 = 40.0;

/// Two charts side by side under an optional title.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTwoUp {
    title: String,
    left_chart: ChartComponent,
    right_chart: ChartComponent,
}

impl ChartTwoUp {
    pub fn new(title: impl Into<String>, left_chart: ChartComponent, right_chart: ChartComponent) -> Self {
        Self {
            title: title.into(),
            left_chart,
            right_chart,
        }
    }
}

impl SlideMaster for ChartTwoUp {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        let title_height = render_title(canvas, &self.title)?;
        let ctx = canvas.ctx();
        let y = content_top(title_height, ctx.vertical_padding);
        let width = ((ctx.content_width() - TWO_UP_CHART_GAP) / 2.0).floor();
        let height = ctx.height - y - ctx.vertical_padding;

        for (index, chart) in [&self.left_chart, &self.right_chart].into_iter().enumerate() {
            chart_shape(canvas, chart)
                .position(
                    ctx.horizontal_padding + index as f64 * (width + TWO_UP_CHART_GAP),
                    y,
                )
                .width(width)
                .height(height)
                .render(canvas)?;
        }
        Ok(())
    }
}

impl DynamicSlide for ChartTwoUp {
    const KEY: &'static str = "chart-two-up";
    const LABEL: &'static str = "Two Charts";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::optional("title", ParamKind::Text),
        ParamSpec::chart("leftChart"),
        ParamSpec::chart("rightChart"),
    ];

    fn description() -> &'static str {
        "A slide with an optional title and two charts side by side"
    }

    fn data_schema() -> Schema {
        let mut properties = Properties::new();
        properties.insert("title", FieldSchema::string().describe("The slide title"));
        for side in ["left", "right"] {
            properties.insert(
                format!("{}ChartType", side),
                chart_type_schema(&format!("Type of the {} chart", side)),
            );
            properties.insert(
                format!("{}ChartData", side),
                chart_data_schema(&format!("Data of the {} chart", side)),
            );
        }
        Schema::object(
            properties,
            &["leftChartType", "leftChartData", "rightChartType", "rightChartData"],
        )
    }

    fn example() -> Value {
        json!({
            "title": "This Year vs Last Year",
            "leftChartType": "Bar",
            "leftChartData": {
                "series": [{"label": "2023", "data": {"Q1": 80, "Q2": 95, "Q3": 110, "Q4": 120}}]
            },
            "rightChartType": "Line",
            "rightChartData": {
                "series": [{"label": "2024", "data": {"Q1": 100, "Q2": 120, "Q3": 135, "Q4": 150}}]
            }
        })
    }

    fn from_args(mut args: SlideArgs) -> Result<Self> {
        let title = args.text("title")?;
        let left = args.take_chart("leftChart")?;
        Ok(Self::new(title, left, args.take_chart("rightChart")?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::SeriesDef;
    use crate::common::RGBColor;
    use crate::components::testing::{with_canvas, with_geometry};
    use crate::document::{ChartFamily, Frame};

    fn revenue() -> ChartComponent {
        ChartComponent::line(vec![SeriesDef::new("Revenue", [("Q1", 1.0), ("Q2", 2.0)])])
    }

    #[test]
    fn test_full_slide_chart() {
        with_canvas("chart", |canvas| {
            Chart::new(revenue()).render(canvas).unwrap();
            let shape = &canvas.slide().shapes()[0];
            assert_eq!(shape.frame, Frame::new(0.0, 0.0, 1280.0, 720.0));
            assert_eq!(shape.fill, Some(RGBColor::WHITE));
        });
    }

    #[test]
    fn test_square_chart_centered() {
        with_canvas("chart-square", |canvas| {
            ChartSquare::new(revenue()).render(canvas).unwrap();
            assert_eq!(canvas.slide().shapes()[0].frame, Frame::new(320.0, 60.0, 640.0, 600.0));
        });
    }

    #[test]
    fn test_chart_text_layout() {
        with_geometry("chart-text", (1280.0, 720.0, 40.0, 80.0), |canvas| {
            ChartText::new("Growth", revenue()).render(canvas).unwrap();
            let shapes = canvas.slide().shapes();
            assert_eq!(shapes[0].frame, Frame::new(620.0, 0.0, 660.0, 721.0));
            assert_eq!(shapes[1].frame, Frame::new(40.0, 80.0, 520.0, 560.0));
        });
    }

    #[test]
    fn test_chart_text_title_split() {
        with_geometry("chart-text-title", (1280.0, 720.0, 40.0, 20.0), |canvas| {
            ChartTextTitle::new("Story", "Words", revenue()).render(canvas).unwrap();
            let shapes = canvas.slide().shapes();
            assert_eq!(shapes.len(), 3);
            let y = 32.0 + 75.0;
            assert_eq!(shapes[1].frame, Frame::new(40.0 + 480.0 + 40.0, y, 680.0, 720.0 - y - 20.0));
            assert_eq!(shapes[2].frame, Frame::new(40.0, y, 480.0, 720.0 - y - 20.0));
        });
    }

    #[test]
    fn test_chart_titles_sets_chart_title() {
        with_geometry("chart-titles", (1280.0, 720.0, 40.0, 20.0), |canvas| {
            ChartTitles::new("Overview", "Revenue", revenue()).render(canvas).unwrap();
            let shapes = canvas.slide().shapes();
            assert_eq!(canvas.slide().texts(), vec!["Overview"]);
            let chart = &shapes[1];
            assert_eq!(chart.chart().unwrap().title.as_deref(), Some("Revenue"));
            assert_eq!(chart.frame, Frame::new(40.0, 32.0 + 20.0 + 20.0, 1200.0, 720.0 - 32.0 - 40.0 - 20.0));
        });
    }

    #[test]
    fn test_two_charts_side_by_side() {
        with_geometry("chart-two-up", (1280.0, 720.0, 40.0, 20.0), |canvas| {
            let bars = ChartComponent::bar(vec![SeriesDef::new("A", [("x", 1.0)])]);
            ChartTwoUp::new("", bars, revenue()).render(canvas).unwrap();
            let shapes = canvas.slide().shapes();
            assert_eq!(shapes.len(), 2);
            assert_eq!(shapes[0].frame, Frame::new(40.0, 20.0, 580.0, 680.0));
            assert_eq!(shapes[1].frame, Frame::new(660.0, 20.0, 580.0, 680.0));
            assert_eq!(shapes[1].chart().unwrap().family, ChartFamily::Line);
        });
    }
}
