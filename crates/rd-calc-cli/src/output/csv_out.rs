use serde_json::Value;
use std::io::{self, Write};

use super::{format_value, result_of, split_fields};

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_csv(stdout.lock(), value) {
        eprintln!("CSV output error: {}", e);
    }
}

/// The first row set (timeline or chart series) becomes the CSV body; results
/// without one are written as `field,value` pairs.
pub fn write_csv<W: Write>(out: W, value: &Value) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    match result_of(value) {
        Value::Object(map) => {
            let (scalars, row_sets) = split_fields(map);
            if let Some((_, rows)) = row_sets.first() {
                write_rows(&mut wtr, rows)?;
            } else {
                wtr.write_record(["field", "value"])?;
                for (key, val) in &scalars {
                    wtr.write_record([key.as_str(), &format_value(val)])?;
                }
            }
        }
        Value::Array(arr) => write_rows(&mut wtr, arr)?,
        other => wtr.write_record([&format_value(other)])?,
    }

    wtr.flush()?;
    Ok(())
}

fn write_rows<W: Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) -> csv::Result<()> {
    let Some(Value::Object(first)) = rows.first() else {
        return Ok(());
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    wtr.write_record(&headers)?;
    for row in rows {
        if let Value::Object(map) = row {
            let cells: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(format_value).unwrap_or_default())
                .collect();
            wtr.write_record(&cells)?;
        }
    }
    Ok(())
}
