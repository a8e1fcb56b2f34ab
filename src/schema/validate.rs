//! Structural validation of RawData against a [`Schema`].
//!
//! Only what the schema states is checked: required names, declared types,
//! `pattern`, `enum`, numeric bounds and array lengths, recursing into
//! `items` and nested object properties. Null values of optional fields are
//! treated as absent.
use regex::Regex;
use serde_json::{Map, Value};

use super::field::{FieldSchema, Properties};
use super::Schema;
use crate::common::{Error, Result};
use crate::common::error::json_type_name;

/// Validate `data` against `schema`, failing with every problem found.
pub fn validate(schema: &Schema, data: &Value, owner: &str) -> Result<()> {
    let problems = validation_problems(schema, data);
    if problems.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation {
            owner: owner.to_string(),
            problems,
        })
    }
}

/// Collect validation problems without failing.
pub fn validation_problems(schema: &Schema, data: &Value) -> Vec<String> {
    let mut problems = Vec::new();
    match data.as_object() {
        Some(object) => check_object(&schema.properties, &schema.required, object, "", &mut problems),
        None => problems.push(format!("expected an object, got {}", json_type_name(data))),
    }
    problems
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

fn check_object(
    properties: &Properties,
    required: &[String],
    object: &Map<String, Value>,
    path: &str,
    problems: &mut Vec<String>,
) {
    for name in required {
        if object.get(name).is_none_or(Value::is_null) {
            problems.push(format!("missing required field '{}'", join_path(path, name)));
        }
    }

    for (name, field) in properties.iter() {
        match object.get(name) {
            None | Some(Value::Null) => {}
            Some(value) => check_field(field, value, &join_path(path, name), problems),
        }
    }
}

fn check_field(field: &FieldSchema, value: &Value, path: &str, problems: &mut Vec<String>) {
    if let Some(field_type) = &field.field_type
        && !field_type.accepts(value)
    {
        problems.push(format!(
            "field '{}' must be {}, got {}",
            path,
            field_type.describe(),
            json_type_name(value)
        ));
        return;
    }

    if let Some(allowed) = &field.allowed
        && !allowed.contains(value)
    {
        let names: Vec<String> = allowed.iter().map(Value::to_string).collect();
        problems.push(format!("field '{}' must be one of {}", path, names.join(", ")));
    }

    if let (Some(pattern), Some(text)) = (&field.pattern, value.as_str()) {
        match Regex::new(pattern) {
            Ok(re) if !re.is_match(text) => {
                problems.push(format!("field '{}' does not match pattern {}", path, pattern));
            },
            Ok(_) => {}
            Err(err) => problems.push(format!("field '{}' has an invalid pattern: {}", path, err)),
        }
    }

    if let Some(number) = value.as_f64() {
        if let Some(min) = field.minimum
            && number < min
        {
            problems.push(format!("field '{}' must be at least {}", path, min));
        }
        if let Some(max) = field.maximum
            && number > max
        {
            problems.push(format!("field '{}' must be at most {}", path, max));
        }
    }

    if let Some(items) = value.as_array() {
        if let Some(min) = field.min_items
            && items.len() < min
        {
            problems.push(format!("field '{}' needs at least {} items", path, min));
        }
        if let Some(max) = field.max_items
            && items.len() > max
        {
            problems.push(format!("field '{}' allows at most {} items", path, max));
        }
        if let Some(item_schema) = &field.items {
            for (index, item) in items.iter().enumerate() {
                check_field(item_schema, item, &format!("{}[{}]", path, index), problems);
            }
        }
    }

    if let Some(object) = value.as_object()
        && (field.properties.is_some() || !field.required.is_empty())
    {
        let empty = Properties::new();
        let properties = field.properties.as_ref().unwrap_or(&empty);
        check_object(properties, &field.required, object, path, problems);
    }
}
