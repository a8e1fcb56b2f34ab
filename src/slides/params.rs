//! Constructor parameter descriptors of slide masters.
//!
//! Each master lists its parameters in declaration order. The
//! [`SlideFactory`](super::SlideFactory) binds RawData fields to them by
//! name, fills defaults for absent optional parameters, and routes chart
//! parameters through the [`ChartFactory`](crate::charts::ChartFactory).
use serde_json::Value;

/// Shape of the value a parameter takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Text,
    TextList,
    /// `[{title, description}]` grid boxes
    Boxes,
    /// `[{type, data}]` component definitions
    Components,
    /// Table rows, each an array of cells
    Rows,
    /// A chart built from `{name}Type`/`{name}Data` or `chartType`/`chartData`
    Chart,
}

impl ParamKind {
    /// Value used when an optional parameter is absent.
    pub fn default_value(&self) -> Value {
        match self {
            ParamKind::Text => Value::String(String::new()),
            ParamKind::Chart => Value::Null,
            _ => Value::Array(Vec::new()),
        }
    }
}

/// One constructor parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
}

impl ParamSpec {
    /// A parameter without default.
    pub const fn required(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    /// A parameter that defaults to the empty value of its kind.
    pub const fn optional(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    /// A chart parameter.
    pub const fn chart(name: &'static str) -> Self {
        Self::required(name, ParamKind::Chart)
    }

    pub fn is_chart(&self) -> bool {
        self.kind == ParamKind::Chart
    }

    /// Payload key holding this chart's type tag.
    pub fn chart_type_key(&self) -> String {
        format!("{}Type", self.name)
    }

    /// Payload key holding this chart's series data.
    pub fn chart_data_key(&self) -> String {
        format!("{}Data", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_keys_follow_parameter_name() {
        let param = ParamSpec::chart("leftChart");
        assert!(param.is_chart());
        assert_eq!(param.chart_type_key(), "leftChartType");
        assert_eq!(param.chart_data_key(), "leftChartData");
    }

    #[test]
    fn test_defaults_by_kind() {
        assert_eq!(ParamKind::Text.default_value(), Value::String(String::new()));
        assert_eq!(ParamKind::Boxes.default_value(), Value::Array(vec![]));
    }
}
