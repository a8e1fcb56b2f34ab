//! Bound constructor arguments of a slide master.
use std::collections::HashMap;

use serde_json::{Map, Value};

use super::grid::GridBox;
use crate::charts::ChartComponent;
use crate::common::{Error, Result};
use crate::components::fields;
use crate::components::table::read_rows;

/// Arguments bound by the [`SlideFactory`](super::SlideFactory), by parameter name.
///
/// A value bound to `null` reads as the empty value of the accessor.
#[derive(Debug, Clone, Default)]
pub struct SlideArgs {
    slide: String,
    values: Value,
    charts: HashMap<String, ChartComponent>,
}

impl SlideArgs {
    /// Empty arguments for the slide master `slide`.
    pub fn new(slide: impl Into<String>) -> Self {
        Self {
            slide: slide.into(),
            values: Value::Object(Map::new()),
            charts: HashMap::new(),
        }
    }

    /// Key of the slide master the arguments are for.
    pub fn slide(&self) -> &str {
        &self.slide
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        if let Value::Object(values) = &mut self.values {
            values.insert(name.into(), value);
        }
    }

    pub fn insert_chart(&mut self, name: impl Into<String>, chart: ChartComponent) {
        self.charts.insert(name.into(), chart);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.get(name).is_some() || self.charts.contains_key(name)
    }

    pub fn text(&self, name: &str) -> Result<String> {
        Ok(fields::string(&self.values, name, &self.slide)?.unwrap_or_default())
    }

    pub fn text_list(&self, name: &str) -> Result<Vec<String>> {
        Ok(fields::string_list(&self.values, name, &self.slide)?.unwrap_or_default())
    }

    pub fn rows(&self, name: &str) -> Result<Vec<Vec<String>>> {
        read_rows(&self.values, name, &self.slide)
    }

    /// Grid boxes, each `{title, description}`.
    pub fn boxes(&self, name: &str) -> Result<Vec<GridBox>> {
        let items = match self.values.get(name) {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(items)) => items,
            Some(other) => return Err(Error::invalid_field(name, &self.slide, "an array of boxes", other)),
        };
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                if !item.is_object() {
                    return Err(Error::invalid_field(
                        format!("{}[{}]", name, index),
                        &self.slide,
                        "an object",
                        item,
                    ));
                }
                let owner = format!("{}[{}] of {}", name, index, self.slide);
                let field = |key: &'static str| -> Result<String> {
                    fields::string(item, key, &owner)?.ok_or_else(|| Error::MissingKey {
                        key,
                        context: format!("Box at index {} of slide '{}'", index, self.slide),
                    })
                };
                Ok(GridBox {
                    title: field("title")?,
                    description: field("description")?,
                })
            })
            .collect()
    }

    /// Component definitions, each `{type, data}`.
    pub fn components(&self, name: &str) -> Result<Vec<Value>> {
        match self.values.get(name) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items.clone()),
            Some(other) => Err(Error::invalid_field(
                name,
                &self.slide,
                "an array of component definitions",
                other,
            )),
        }
    }

    /// Remove and return the chart bound to `name`.
    pub fn take_chart(&mut self, name: &str) -> Result<ChartComponent> {
        self.charts.remove(name).ok_or_else(|| Error::MissingParameter {
            parameter: name.to_string(),
            slide: self.slide.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_reads_as_empty() {
        let mut args = SlideArgs::new("text");
        args.insert("text", Value::Null);
        assert_eq!(args.text("text").unwrap(), "");
        assert!(args.contains("text"));
    }

    #[test]
    fn test_boxes_require_title_and_description() {
        let mut args = SlideArgs::new("two-up");
        args.insert("boxes", json!([{"title": "A", "description": "a"}, {"title": "B"}]));
        let err = args.boxes("boxes").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Box at index 1 of slide 'two-up' is missing required 'description' key"
        );
    }

    #[test]
    fn test_missing_chart() {
        let mut args = SlideArgs::new("chart");
        let err = args.take_chart("chart").unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter 'chart' for slide 'chart'");
    }

    #[test]
    fn test_wrong_type_names_slide() {
        let mut args = SlideArgs::new("bullet-points");
        args.insert("bulletPoints", json!("one"));
        let err = args.text_list("bulletPoints").unwrap_err();
        assert!(err.to_string().contains("'bullet-points'"));
    }
}
