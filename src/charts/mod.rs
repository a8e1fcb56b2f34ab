//! Chart definitions.
//!
//! A [`ChartComponent`] is the data half of a chart: its family, grouping and
//! series. It knows nothing about placement; the [`ChartShape`] component
//! positions it on a slide, and the branding of that slide picks series colors
//! and the chart font.
//!
//! [`ChartShape`]: crate::components::ChartShape

pub mod factory;

use serde_json::Value;

use crate::common::{Error, RGBColor, Result};
use crate::components::fields;
use crate::document::{ChartData, ChartFamily, ChartGrouping, ChartSeries, Marker, MarkerSymbol};
use crate::schema::{FieldSchema, Properties};
use crate::slides::SlideContext;

pub use factory::{ChartFactory, SUPPORTED_CHART_TYPES};

/// Size of the markers drawn on scatter charts.
pub const SCATTER_MARKER_SIZE: u32 = 10;

/// One series of a chart definition.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesDef {
    pub label: String,
    /// (category, value) in category order
    pub data: Vec<(String, f64)>,
}

impl SeriesDef {
    pub fn new<I, C>(label: impl Into<String>, data: I) -> Self
    where
        I: IntoIterator<Item = (C, f64)>,
        C: Into<String>,
    {
        Self {
            label: label.into(),
            data: data.into_iter().map(|(c, v)| (c.into(), v)).collect(),
        }
    }

    /// Read `{label, data: {category: value, ...}}`.
    ///
    /// Categories keep the order of the `data` object.
    pub fn from_value(value: &Value, owner: &str) -> Result<Self> {
        let label = fields::string(value, "label", owner)?.unwrap_or_default();
        let data = match value.get("data") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Object(points)) => points
                .iter()
                .map(|(category, v)| {
                    v.as_f64().map(|n| (category.clone(), n)).ok_or_else(|| {
                        Error::invalid_field(format!("data.{}", category), owner, "a number", v)
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            Some(other) => return Err(Error::invalid_field("data", owner, "an object", other)),
        };
        Ok(Self { label, data })
    }
}

/// A chart of one family and grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartComponent {
    family: ChartFamily,
    grouping: ChartGrouping,
    series: Vec<SeriesDef>,
    title: Option<String>,
    show_legend: bool,
}

impl ChartComponent {
    pub fn new(family: ChartFamily, series: Vec<SeriesDef>) -> Self {
        Self {
            family,
            grouping: ChartGrouping::Standard,
            series,
            title: None,
            show_legend: true,
        }
    }

    pub fn bar(series: Vec<SeriesDef>) -> Self {
        Self::new(ChartFamily::Bar, series)
    }

    pub fn column(series: Vec<SeriesDef>) -> Self {
        Self::new(ChartFamily::Column, series)
    }

    pub fn line(series: Vec<SeriesDef>) -> Self {
        Self::new(ChartFamily::Line, series)
    }

    pub fn radar(series: Vec<SeriesDef>) -> Self {
        Self::new(ChartFamily::Radar, series)
    }

    pub fn scatter(series: Vec<SeriesDef>) -> Self {
        Self::new(ChartFamily::Scatter, series)
    }

    /// Stack the series. Only bar and column charts stack; others are unchanged.
    pub fn stacked(self) -> Self {
        self.grouped(ChartGrouping::Stacked)
    }

    /// Stack the series as percentages of each category total.
    pub fn percentage_stacked(self) -> Self {
        self.grouped(ChartGrouping::PercentageStacked)
    }

    fn grouped(mut self, grouping: ChartGrouping) -> Self {
        if matches!(self.family, ChartFamily::Bar | ChartFamily::Column) {
            self.grouping = grouping;
        }
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn show_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    pub fn family(&self) -> ChartFamily {
        self.family
    }

    pub fn grouping(&self) -> ChartGrouping {
        self.grouping
    }

    pub fn is_stacked(&self) -> bool {
        self.grouping != ChartGrouping::Standard
    }

    pub fn series(&self) -> &[SeriesDef] {
        &self.series
    }

    /// Chart contents styled by the branding of the slide in `ctx`.
    pub fn chart_data(&self, ctx: &SlideContext<'_>) -> ChartData {
        let series = self
            .series
            .iter()
            .enumerate()
            .map(|(index, def)| {
                let color = ctx.branding.chart_color(index);
                ChartSeries {
                    label: def.label.clone(),
                    points: def.data.clone(),
                    color,
                    marker: self.marker(color),
                }
            })
            .collect();
        ChartData {
            family: self.family,
            grouping: self.grouping,
            title: self.title.clone(),
            show_legend: self.show_legend,
            font: ctx.branding.base_font().to_string(),
            series,
        }
    }

    fn marker(&self, color: RGBColor) -> Option<Marker> {
        (self.family == ChartFamily::Scatter).then_some(Marker {
            symbol: MarkerSymbol::Circle,
            size: SCATTER_MARKER_SIZE,
            fill: color,
            border: RGBColor::WHITE,
        })
    }
}

/// Schema of a chart type tag.
pub fn chart_type_schema(description: &str) -> FieldSchema {
    FieldSchema::string()
        .describe(description)
        .one_of_values(SUPPORTED_CHART_TYPES.iter().copied())
}

/// Schema of a `{series: [{label, data}]}` chart payload.
pub fn chart_data_schema(description: &str) -> FieldSchema {
    let series = FieldSchema::object_with(
        Properties::from_iter([
            ("label", FieldSchema::string()),
            ("data", FieldSchema::object()),
        ]),
        &["label", "data"],
    );
    FieldSchema::object_with(
        Properties::from_iter([("series", FieldSchema::array(series))]),
        &["series"],
    )
    .describe(description)
}
