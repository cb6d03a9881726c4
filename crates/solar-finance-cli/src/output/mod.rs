//! Rendering of command payloads in the formats `--output` offers.

pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use serde_json::Value;

use crate::OutputFormat;

/// Render a finished command's payload in the requested format.
pub fn render(format: &OutputFormat, payload: &Value) {
    match format {
        OutputFormat::Json => json::print_pretty(payload),
        OutputFormat::Table => table::print_table(payload),
        OutputFormat::Csv => csv_out::print_csv(payload),
        OutputFormat::Minimal => minimal::print_minimal(payload),
    }
}
