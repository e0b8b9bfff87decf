use serde_json::Value;

/// Pretty-print the full envelope as JSON.
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

/// Print the full envelope as YAML.
pub fn print_yaml(value: &Value) {
    match serde_yaml::to_string(value) {
        Ok(s) => print!("{s}"),
        Err(e) => eprintln!("YAML serialization error: {e}"),
    }
}
