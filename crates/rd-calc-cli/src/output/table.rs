use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{format_value, result_of, split_fields};

/// Format output as tables: one for scalar fields, one per row set
/// (timeline, chart series).
pub fn print_table(value: &Value) {
    match result_of(value) {
        Value::Object(map) => {
            let (scalars, row_sets) = split_fields(map);
            if !scalars.is_empty() {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                for (key, val) in &scalars {
                    builder.push_record([key.as_str(), &format_value(val)]);
                }
                println!("{}", Table::from(builder));
            }
            for (name, rows) in &row_sets {
                println!("\n{name}:");
                print_rows(rows);
            }
        }
        Value::Array(arr) => print_rows(arr),
        other => println!("{}", format_value(other)),
    }

    print_envelope_notes(value);
}

fn print_rows(rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        println!("(empty)");
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);
    for row in rows {
        if let Value::Object(map) = row {
            let cells: Vec<String> = headers
                .iter()
                .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                .collect();
            builder.push_record(cells);
        }
    }
    println!("{}", Table::from(builder));
}

fn print_envelope_notes(value: &Value) {
    let Some(envelope) = value.as_object() else {
        return;
    };

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}
