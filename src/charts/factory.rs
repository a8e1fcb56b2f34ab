//! Chart construction from a type tag and a series payload.
use phf::phf_map;
use serde_json::Value;
use tracing::debug;

use super::{ChartComponent, SeriesDef};
use crate::common::{Error, Result};
use crate::document::{ChartFamily, ChartGrouping};

/// Every chart type tag, in documentation order.
pub const SUPPORTED_CHART_TYPES: &[&str] = &[
    "Bar",
    "StackedBar",
    "PercentageStackedBar",
    "Column",
    "StackedColumn",
    "PercentageStackedColumn",
    "Line",
    "Radar",
    "Scatter",
];

static CHART_TYPES: phf::Map<&'static str, (ChartFamily, ChartGrouping)> = phf_map! {
    "Bar" => (ChartFamily::Bar, ChartGrouping::Standard),
    "StackedBar" => (ChartFamily::Bar, ChartGrouping::Stacked),
    "PercentageStackedBar" => (ChartFamily::Bar, ChartGrouping::PercentageStacked),
    "Column" => (ChartFamily::Column, ChartGrouping::Standard),
    "StackedColumn" => (ChartFamily::Column, ChartGrouping::Stacked),
    "PercentageStackedColumn" => (ChartFamily::Column, ChartGrouping::PercentageStacked),
    "Line" => (ChartFamily::Line, ChartGrouping::Standard),
    "Radar" => (ChartFamily::Radar, ChartGrouping::Standard),
    "Scatter" => (ChartFamily::Scatter, ChartGrouping::Standard),
};

/// Maps chart type tags to chart definitions.
pub struct ChartFactory;

impl ChartFactory {
    /// Build a chart of type `tag` from `{series: [{label, data}]}`.
    ///
    /// A payload without `series` builds an empty chart.
    pub fn create(tag: &str, chart_data: &Value) -> Result<ChartComponent> {
        let (family, grouping) = CHART_TYPES
            .get(tag)
            .copied()
            .ok_or_else(|| Error::UnsupportedChartType {
                tag: tag.to_string(),
                supported: SUPPORTED_CHART_TYPES,
            })?;

        let owner = format!("{} chart", tag);
        let series = match chart_data.get("series") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| SeriesDef::from_value(item, &owner))
                .collect::<Result<Vec<_>>>()?,
            Some(other) => return Err(Error::invalid_field("series", owner, "an array", other)),
        };
        debug!(tag, series = series.len(), "created chart");

        let chart = ChartComponent::new(family, series);
        Ok(match grouping {
            ChartGrouping::Standard => chart,
            ChartGrouping::Stacked => chart.stacked(),
            ChartGrouping::PercentageStacked => chart.percentage_stacked(),
        })
    }

    pub fn supported_types() -> &'static [&'static str] {
        SUPPORTED_CHART_TYPES
    }

    pub fn is_supported(tag: &str) -> bool {
        CHART_TYPES.contains_key(tag)
    }
}
