//! Chart shape contents.
use serde::Serialize;

use crate::common::RGBColor;

/// Base chart family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChartFamily {
    Bar,
    Column,
    Line,
    Radar,
    Scatter,
}

/// Series grouping of bar and column charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartGrouping {
    #[default]
    Standard,
    Stacked,
    PercentageStacked,
}

/// Marker drawn at each data point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub symbol: MarkerSymbol,
    pub size: u32,
    pub fill: RGBColor,
    pub border: RGBColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerSymbol {
    Circle,
    Square,
    Diamond,
}

/// One plotted series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: String,
    /// (category, value) in category order
    pub points: Vec<(String, f64)>,
    pub color: RGBColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

/// A chart as handed to the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub family: ChartFamily,
    pub grouping: ChartGrouping,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub show_legend: bool,
    pub font: String,
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    /// Union of all series categories, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for series in &self.series {
            for (category, _) in &series.points {
                if !categories.contains(&category.as_str()) {
                    categories.push(category);
                }
            }
        }
        categories
    }
}
