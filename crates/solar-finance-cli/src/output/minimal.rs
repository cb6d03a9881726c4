use serde_json::Value;

/// Print just the headline value from the output.
///
/// Heuristic: for a full analysis, look inside the KPI set for the most
/// decision-relevant figure; otherwise fall back to the first field.
pub fn print_minimal(value: &Value) {
    let kpi_obj = value
        .as_object()
        .and_then(|m| m.get("kpis"))
        .unwrap_or(value);

    let priority_keys = [
        "npv",
        "irr",
        "lcoe",
        "roi",
        "simple_payback_year",
        "discounted_payback_year",
        "ok",
    ];

    if let Value::Object(map) = kpi_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(kpi_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
