//! Construction of slide masters from RawData.
use serde_json::Value;
use tracing::debug;

use super::params::ParamSpec;
use super::{SlideArgs, SlideMaster, SlideMasterType};
use crate::charts::{ChartComponent, ChartFactory};
use crate::common::{Error, Result};
use crate::registry::{RegistryItem, TypeRef};

/// Binds RawData fields to a master's constructor parameters.
///
/// A present field is used as is, even when `null`. An absent optional
/// parameter takes the empty value of its kind; an absent required one is
/// an error. Chart parameters read `{name}Type`/`{name}Data` first and
/// fall back to `chartType`/`chartData`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlideFactory;

impl SlideFactory {
    pub fn create(slide_type: &SlideMasterType, data: &Value) -> Result<Box<dyn SlideMaster>> {
        let key = slide_type.key();
        let mut args = SlideArgs::new(key);
        for param in slide_type.params() {
            if param.is_chart() {
                let chart = Self::bind_chart(param, key, data)?;
                args.insert_chart(param.name, chart);
            } else if let Some(value) = data.get(param.name) {
                args.insert(param.name, value.clone());
            } else if !param.required {
                args.insert(param.name, param.kind.default_value());
            } else {
                return Err(Error::MissingParameter {
                    parameter: param.name.to_string(),
                    slide: key.to_string(),
                });
            }
        }
        debug!(master = key, "creating slide master");
        slide_type.build(args)
    }

    /// Create from a resolved registry entry, which must be a slide master.
    pub fn create_from(type_ref: &TypeRef, data: &Value) -> Result<Box<dyn SlideMaster>> {
        let slide_type = type_ref.as_slide_master().ok_or_else(|| Error::InvalidCapability {
            type_path: type_ref.type_path().to_string(),
            capability: "dynamic slide creation",
            context: String::new(),
        })?;
        Self::create(slide_type, data)
    }

    fn bind_chart(param: &ParamSpec, slide: &str, data: &Value) -> Result<ChartComponent> {
        let type_key = param.chart_type_key();
        let data_key = param.chart_data_key();
        let (tag, chart_data) = chart_pair(data, &type_key, &data_key)
            .or_else(|| chart_pair(data, "chartType", "chartData"))
            .ok_or_else(|| Error::MissingChartData {
                parameter: param.name.to_string(),
                type_key: type_key.clone(),
                data_key: data_key.clone(),
            })?;
        let tag = tag
            .as_str()
            .ok_or_else(|| Error::invalid_field(type_key.as_str(), slide, "a chart type name", tag))?;
        ChartFactory::create(tag, chart_data)
    }
}

/// The type tag and data under the given keys, when both are non-null.
fn chart_pair<'v>(data: &'v Value, type_key: &str, data_key: &str) -> Option<(&'v Value, &'v Value)> {
    match (data.get(type_key), data.get(data_key)) {
        (Some(tag), Some(chart_data)) if !tag.is_null() && !chart_data.is_null() => Some((tag, chart_data)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::with_canvas;
    use crate::document::ChartFamily;
    use crate::registry::Catalog;
    use crate::slides::{Agenda, BulletPoints, ChartTwoUp, Title, TitleSubtitle};
    use serde_json::json;

    #[test]
    fn test_optional_parameters_default() {
        let master = SlideFactory::create(&SlideMasterType::of::<BulletPoints>(), &json!({"title": "Only"})).unwrap();
        with_canvas("bullet-points", |canvas| {
            master.render(canvas).unwrap();
            assert_eq!(canvas.slide().texts(), vec!["Only"]);
        });
        let agenda = SlideFactory::create(&SlideMasterType::of::<Agenda>(), &json!({"title": "Agenda"})).unwrap();
        with_canvas("agenda", |canvas| {
            agenda.render(canvas).unwrap();
            let shapes = canvas.slide().shapes();
            assert_eq!(shapes.len(), 1);
            assert_eq!(shapes[0].frame.rotation, 270);
            assert_eq!(canvas.slide().texts(), vec!["AGENDA"]);
        });
        assert!(SlideFactory::create(&SlideMasterType::of::<Agenda>(), &json!({})).is_ok());
    }

    #[test]
    fn test_missing_required_parameter() {
        let err = SlideFactory::create(&SlideMasterType::of::<TitleSubtitle>(), &json!({"subtitle": "x"}))
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "Missing required parameter 'title' for slide 'title-subtitle'"
        );
    }

    #[test]
    fn test_null_counts_as_present() {
        let master = SlideFactory::create(
            &SlideMasterType::of::<TitleSubtitle>(),
            &json!({"title": null, "subtitle": null}),
        )
        .unwrap();
        with_canvas("title-subtitle", |canvas| {
            master.render(canvas).unwrap();
            assert!(canvas.slide().shapes().is_empty());
        });
    }

    #[test]
    fn test_prefixed_chart_keys() {
        let data = json!({
            "title": "Compare",
            "leftChartType": "Line",
            "leftChartData": {"series": [{"label": "A", "data": {"x": 1}}]},
            "rightChartType": "Column",
            "rightChartData": {"series": [{"label": "B", "data": {"x": 2}}]}
        });
        let master = SlideFactory::create(&SlideMasterType::of::<ChartTwoUp>(), &data).unwrap();
        with_canvas("chart-two-up", |canvas| {
            master.render(canvas).unwrap();
            let families: Vec<_> = canvas
                .slide()
                .shapes()
                .iter()
                .filter_map(|s| s.chart())
                .map(|c| c.family)
                .collect();
            assert_eq!(families, vec![ChartFamily::Line, ChartFamily::Column]);
        });
    }

    #[test]
    fn test_chart_falls_back_to_generic_keys() {
        let data = json!({
            "leftChartType": "Radar",
            "leftChartData": {"series": []},
            "chartType": "Scatter",
            "chartData": {"series": []}
        });
        let master = SlideFactory::create(&SlideMasterType::of::<ChartTwoUp>(), &data).unwrap();
        with_canvas("chart-two-up", |canvas| {
            master.render(canvas).unwrap();
            let families: Vec<_> = canvas
                .slide()
                .shapes()
                .iter()
                .filter_map(|s| s.chart())
                .map(|c| c.family)
                .collect();
            assert_eq!(families, vec![ChartFamily::Radar, ChartFamily::Scatter]);
        });
    }

    #[test]
    fn test_missing_chart_data() {
        let err = SlideFactory::create(
            &SlideMasterType::of::<ChartTwoUp>(),
            &json!({"leftChartType": "Bar", "rightChartType": "Bar", "rightChartData": {}}),
        )
        .err()
        .unwrap();
        assert_eq!(
            err.to_string(),
            "Missing chart data for parameter 'leftChart'. Expected 'leftChartType' and 'leftChartData' or 'chartType' and 'chartData'"
        );
    }

    #[test]
    fn test_create_from_rejects_components() {
        let catalog = Catalog::with_builtins();
        let text_box = catalog.find_type_path(std::any::type_name::<crate::components::TextBox>()).unwrap();
        let err = SlideFactory::create_from(&text_box, &json!({})).err().unwrap();
        assert!(err.to_string().contains("dynamic slide creation"));

        let title = catalog.find_type_path(std::any::type_name::<Title>()).unwrap();
        assert_eq!(SlideFactory::create_from(&title, &json!({})).unwrap().key(), "title");
    }
}
