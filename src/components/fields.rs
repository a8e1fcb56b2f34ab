//! Typed reads of optional fields from RawData payloads.
//!
//! A field that is absent or `null` reads as `None`. A present field of the
//! wrong shape is an [`Error::InvalidFieldType`] naming the field and owner.
use serde_json::Value;

use crate::common::{Error, HorizontalAlignment, RGBColor, Result, VerticalAlignment};

fn present<'a>(data: &'a Value, field: &str) -> Option<&'a Value> {
    data.get(field).filter(|v| !v.is_null())
}

pub fn number(data: &Value, field: &str, owner: &str) -> Result<Option<f64>> {
    match present(data, field) {
        None => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| Error::invalid_field(field, owner, "a number", value)),
    }
}

pub fn integer(data: &Value, field: &str, owner: &str) -> Result<Option<i64>> {
    match present(data, field) {
        None => Ok(None),
        Some(value) => value
            .as_i64()
            .or_else(|| value.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .map(Some)
            .ok_or_else(|| Error::invalid_field(field, owner, "an integer", value)),
    }
}

pub fn boolean(data: &Value, field: &str, owner: &str) -> Result<Option<bool>> {
    match present(data, field) {
        None => Ok(None),
        Some(value) => value
            .as_bool()
            .map(Some)
            .ok_or_else(|| Error::invalid_field(field, owner, "a boolean", value)),
    }
}

/// Strings accept scalar numbers and booleans, converted to text.
pub fn string(data: &Value, field: &str, owner: &str) -> Result<Option<String>> {
    match present(data, field) {
        None => Ok(None),
        Some(value) => scalar_text(value)
            .map(Some)
            .ok_or_else(|| Error::invalid_field(field, owner, "a string", value)),
    }
}

pub fn string_list(data: &Value, field: &str, owner: &str) -> Result<Option<Vec<String>>> {
    match present(data, field) {
        None => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                scalar_text(item).ok_or_else(|| {
                    Error::invalid_field(format!("{}[{}]", field, i), owner, "a string", item)
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Some),
        Some(value) => Err(Error::invalid_field(field, owner, "an array of strings", value)),
    }
}

pub fn color(data: &Value, field: &str, owner: &str) -> Result<Option<RGBColor>> {
    match present(data, field) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .and_then(RGBColor::from_hex)
            .map(Some)
            .ok_or_else(|| Error::invalid_field(field, owner, "a hex color", value)),
    }
}

pub fn horizontal(data: &Value, field: &str, owner: &str) -> Result<Option<HorizontalAlignment>> {
    match present(data, field) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .and_then(HorizontalAlignment::parse)
            .map(Some)
            .ok_or_else(|| Error::invalid_field(field, owner, "a horizontal alignment", value)),
    }
}

pub fn vertical(data: &Value, field: &str, owner: &str) -> Result<Option<VerticalAlignment>> {
    match present(data, field) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .and_then(VerticalAlignment::parse)
            .map(Some)
            .ok_or_else(|| Error::invalid_field(field, owner, "a vertical alignment", value)),
    }
}

/// Text form of a scalar JSON value.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_reads_as_absent() {
        let data = json!({"x": null});
        assert_eq!(number(&data, "x", "t").unwrap(), None);
        assert_eq!(number(&data, "y", "t").unwrap(), None);
    }

    #[test]
    fn test_wrong_type_names_field() {
        let data = json!({"width": "wide"});
        let err = number(&data, "width", "text-box").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Field 'width' of 'text-box' must be a number, got string"
        );
    }

    #[test]
    fn test_string_list_converts_scalars() {
        let data = json!({"row": ["Q1", 12, 1.5, true]});
        assert_eq!(
            string_list(&data, "row", "t").unwrap(),
            Some(vec!["Q1".into(), "12".into(), "1.5".into(), "true".into()])
        );
        let bad = json!({"row": ["a", {"b": 1}]});
        let err = string_list(&bad, "row", "t").unwrap_err();
        assert!(err.to_string().contains("row[1]"));
    }

    #[test]
    fn test_integer_accepts_whole_floats() {
        let data = json!({"n": 4.0, "m": 4.5});
        assert_eq!(integer(&data, "n", "t").unwrap(), Some(4));
        assert!(integer(&data, "m", "t").is_err());
    }

    #[test]
    fn test_color_and_alignment() {
        let data = json!({"c": "2c3e50", "h": "center", "v": "center", "bad": "zz"});
        assert_eq!(color(&data, "c", "t").unwrap(), RGBColor::from_hex("2C3E50"));
        assert_eq!(horizontal(&data, "h", "t").unwrap(), Some(HorizontalAlignment::Center));
        assert_eq!(vertical(&data, "v", "t").unwrap(), Some(VerticalAlignment::Middle));
        assert!(color(&data, "bad", "t").is_err());
    }
}
