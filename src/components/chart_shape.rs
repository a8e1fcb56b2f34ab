//! Placement of a chart on a slide.
use serde_json::{Value, json};
use tracing::trace;

use super::mixins::{self, Alignment, Position, Size};
use super::{Component, DynamicComponent, fields};
use crate::charts::{ChartComponent, ChartFactory, chart_data_schema, chart_type_schema};
use crate::common::{Error, RGBColor, Result};
use crate::document::{Frame, ShapeKind};
use crate::schema::{Capability, FieldSchema, Properties, Schema};
use crate::slides::{SlideCanvas, SlideContext};

/// A chart positioned on a slide.
///
/// Without an explicit size the chart fills the slide.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartShape {
    pub(crate) chart: ChartComponent,
    pub(crate) position: Position,
    pub(crate) size: Size,
    pub(crate) alignment: Alignment,
    pub(crate) background: Option<RGBColor>,
}

impl ChartShape {
    pub fn new(chart: ChartComponent) -> Self {
        Self {
            chart,
            position: Position::default(),
            size: Size::default(),
            alignment: Alignment::default(),
            background: None,
        }
    }

    pub fn chart(&self) -> &ChartComponent {
        &self.chart
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.position = Position { x, y };
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

    pub fn background(mut self, color: Option<RGBColor>) -> Self {
        self.background = color;
        self
    }

    pub fn center_horizontally(mut self) -> Self {
        self.alignment.center_horizontally = true;
        self
    }

    pub fn centered(mut self) -> Self {
        self.alignment.center_horizontally = true;
        self.alignment.center_vertically = true;
        self
    }
}

impl Component for ChartShape {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        let ctx = canvas.ctx();
        let width = self.size.width.unwrap_or(ctx.width);
        let height = self.size.height.unwrap_or(ctx.height);
        let (x, y) = self.alignment.place(
            self.position.x,
            self.position.y,
            width,
            height,
            (ctx.width, ctx.height),
        );
        let data = self.chart.chart_data(&ctx);
        let shape = canvas.add_shape(Frame::new(x, y, width, height), ShapeKind::Chart(data));
        shape.fill(self.background);
        trace!(id = shape.id, family = ?self.chart.family(), x, y, width, height, "drew chart");
        Ok(())
    }
}

impl DynamicComponent for ChartShape {
    const KEY: &'static str = "chart";
    const LABEL: &'static str = "Chart";
    const CAPABILITIES: &'static [Capability] = &[
        Capability::Position,
        Capability::Size,
        Capability::BackgroundColor,
    ];

    fn description() -> &'static str {
        "A chart built from a chart type and series data"
    }

    fn own_schema() -> Schema {
        Schema::object(
            Properties::from_iter([
                ("chartType", chart_type_schema("Type of chart to render")),
                ("chartData", chart_data_schema("Chart data with series")),
                ("title", FieldSchema::string().describe("Chart title")),
                (
                    "showLegend",
                    FieldSchema::boolean().describe("Whether the legend is shown"),
                ),
            ]),
            &["chartType", "chartData"],
        )
    }

    fn example() -> Value {
        json!({
            "chartType": "Column",
            "chartData": {
                "series": [
                    {"label": "2024", "data": {"Q1": 100, "Q2": 120, "Q3": 135}}
                ]
            },
            "x": 100,
            "y": 150,
            "width": 600,
            "height": 400
        })
    }

    /// The background defaults to the slide theme's chart background.
    fn from_data(ctx: &SlideContext<'_>, data: &Value) -> Result<Self> {
        let owner = Self::KEY;
        let tag = fields::string(data, "chartType", owner)?.ok_or_else(|| Error::MissingKey {
            key: "chartType",
            context: format!("Component '{}'", owner),
        })?;
        let mut chart = ChartFactory::create(&tag, data.get("chartData").unwrap_or(&Value::Null))?;
        if let Some(title) = fields::string(data, "title", owner)? {
            chart = chart.title(title);
        }
        if let Some(show) = fields::boolean(data, "showLegend", owner)? {
            chart = chart.show_legend(show);
        }

        let mut shape = ChartShape::new(chart);
        shape.position.read(data, owner)?;
        shape.size.read(data, owner)?;
        shape.background = mixins::read_background(data, owner)?.or(ctx.theme.chart_background_color);
        Ok(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::SeriesDef;
    use crate::components::testing::with_canvas;
    use crate::document::ChartFamily;

    #[test]
    fn test_fills_slide_without_size() {
        with_canvas("chart", |canvas| {
            ChartShape::new(ChartComponent::bar(vec![SeriesDef::new("a", [("Q1", 1.0)])]))
                .render(canvas)
                .unwrap();
            let shape = &canvas.slide().shapes()[0];
            assert_eq!(shape.frame, Frame::new(0.0, 0.0, 1280.0, 720.0));
            assert_eq!(shape.chart().unwrap().family, ChartFamily::Bar);
        });
    }

    #[test]
    fn test_centered() {
        with_canvas("chart", |canvas| {
            ChartShape::new(ChartComponent::line(vec![]))
                .width(600.0)
                .height(400.0)
                .centered()
                .render(canvas)
                .unwrap();
            let frame = canvas.slide().shapes()[0].frame;
            assert_eq!((frame.x, frame.y), (340.0, 160.0));
        });
    }

    #[test]
    fn test_from_data_uses_theme_background() {
        with_canvas("chart", |canvas| {
            let ctx = canvas.ctx();
            let shape = ChartShape::from_data(&ctx, &ChartShape::example()).unwrap();
            assert_eq!(shape.chart.family(), ChartFamily::Column);
            assert_eq!(shape.background, ctx.theme.chart_background_color);
            assert_eq!(shape.position, Position { x: 100.0, y: 150.0 });
        });
    }

    #[test]
    fn test_missing_chart_type() {
        with_canvas("blank", |canvas| {
            let ctx = canvas.ctx();
            let err = ChartShape::from_data(&ctx, &json!({"chartData": {}})).unwrap_err();
            assert_eq!(err.to_string(), "Component 'chart' is missing required 'chartType' key");
        });
    }
}
