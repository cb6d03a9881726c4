use clap::Args;
use serde_json::Value;

use solar_finance_core::bill::{map_bill_to_params, ExtractedBill};

use crate::input;

/// Arguments for bill-to-parameters mapping
#[derive(Args)]
pub struct MapBillArgs {
    /// Path to extracted bill JSON
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_map_bill(args: MapBillArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let bill: ExtractedBill = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(bill) = input::read_piped()? {
        bill
    } else {
        return Err("--input <bill.json> or stdin required for map-bill".into());
    };
    let params = map_bill_to_params(&bill);
    Ok(serde_json::to_value(params)?)
}
