pub mod csv_out;
pub mod minimal;
pub mod serialized;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => serialized::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
        OutputFormat::Yaml => serialized::print_yaml(value),
    }
}

/// The `result` object of an envelope, or the value itself.
pub(crate) fn result_of(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
}

/// Split an object into dotted scalar fields and named row sets (arrays of
/// objects such as the timeline or a chart series).
pub(crate) fn split_fields(map: &Map<String, Value>) -> (Vec<(String, Value)>, Vec<(String, Vec<Value>)>) {
    let mut scalars = Vec::new();
    let mut row_sets = Vec::new();
    collect(map, "", &mut scalars, &mut row_sets);
    (scalars, row_sets)
}

fn collect(
    map: &Map<String, Value>,
    prefix: &str,
    scalars: &mut Vec<(String, Value)>,
    row_sets: &mut Vec<(String, Vec<Value>)>,
) {
    for (key, val) in map {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match val {
            Value::Object(inner) => collect(inner, &name, scalars, row_sets),
            Value::Array(items) if items.first().is_some_and(Value::is_object) => {
                row_sets.push((name, items.clone()));
            }
            other => scalars.push((name, other.clone())),
        }
    }
}

pub(crate) fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_split_fields_flattens_and_extracts_rows() {
        let value = json!({
            "summary": {"maturity_amount": "199534"},
            "chart": {"view": "growth", "series": [{"month": 1, "balance": "6157"}]},
        });
        let (scalars, rows) = split_fields(value.as_object().unwrap());
        let names: Vec<&str> = scalars.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["chart.view", "summary.maturity_amount"]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, "chart.series");
    }

    #[test]
    fn test_result_of_unwraps_envelope() {
        let value = json!({"result": {"a": 1}, "warnings": []});
        assert_eq!(result_of(&value), &json!({"a": 1}));
    }
}
