use serde_json::Value;

/// Indented JSON on stdout, the default format. Falls back to the compact
/// form if pretty-printing fails.
pub fn print_pretty(payload: &Value) {
    match serde_json::to_string_pretty(payload) {
        Ok(rendered) => println!("{rendered}"),
        Err(_) => println!("{payload}"),
    }
}
