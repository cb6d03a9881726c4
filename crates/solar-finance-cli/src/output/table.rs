use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            // A full analysis result carries a "kpis" section plus series.
            if let Some(kpis) = map.get("kpis") {
                print_analysis_tables(kpis, map);
            } else {
                print_flat_object(value);
            }
        }
        Value::Array(arr) => {
            print_array_table(arr);
        }
        _ => {
            println!("{}", value);
        }
    }
}

fn print_analysis_tables(kpis: &Value, envelope: &serde_json::Map<String, Value>) {
    if let Value::Object(kpi_map) = kpis {
        let mut builder = Builder::default();
        builder.push_record(["KPI", "Value"]);
        for (key, val) in kpi_map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));
    }

    if let Some(Value::Array(cashflow)) = envelope.get("cashflow") {
        println!("\nCashflow:");
        print_array_table(cashflow);
    }

    if let Some(Value::Array(issues)) = envelope.get("issues") {
        if !issues.is_empty() {
            println!("\nIssues:");
            for issue in issues {
                let field = issue.get("field").and_then(Value::as_str).unwrap_or("?");
                let severity = issue
                    .get("severity")
                    .and_then(Value::as_str)
                    .unwrap_or("info");
                let message = issue.get("message").and_then(Value::as_str).unwrap_or("");
                println!("  [{}] {}: {}", severity, field, message);
            }
        }
    }

    if let Some(Value::Array(audit)) = envelope.get("audit") {
        if !audit.is_empty() {
            println!("\nAudit trail:");
            for note in audit {
                if let Value::String(s) = note {
                    println!("  - {}", s);
                }
            }
        }
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| {
                        map.get(h.as_str())
                            .map(format_value)
                            .unwrap_or_default()
                    })
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
