use serde_json::Value;

use super::{format_value, result_of, split_fields};

/// Fields worth printing on their own, most important first.
const PRIORITY_KEYS: [&str; 4] = [
    "maturity_amount",
    "summary.maturity_amount",
    "path",
    "recipient",
];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_line(value));
}

fn minimal_line(value: &Value) -> String {
    let Value::Object(map) = result_of(value) else {
        return format_value(result_of(value));
    };

    let (scalars, _) = split_fields(map);
    for key in PRIORITY_KEYS {
        if let Some((_, val)) = scalars.iter().find(|(k, v)| k == key && !v.is_null()) {
            return format_value(val);
        }
    }

    match scalars.first() {
        Some((key, val)) => format!("{}: {}", key, format_value(val)),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_projection_prints_maturity() {
        let value = json!({"result": {"interest_earned": 20.0, "maturity_amount": 3020.0}});
        assert_eq!(minimal_line(&value), "3020.0");
    }

    #[test]
    fn test_chart_prints_summary_maturity() {
        let value = json!({"result": {"summary": {"maturity_amount": "199534"}}});
        assert_eq!(minimal_line(&value), "199534");
    }

    #[test]
    fn test_falls_back_to_first_field() {
        let value = json!({"result": {"bytes": 10}});
        assert_eq!(minimal_line(&value), "bytes: 10");
    }
}
