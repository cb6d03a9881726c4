use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use solar_finance_core::kpi;

/// Arguments for NPV calculation
#[derive(Args)]
pub struct NpvArgs {
    /// Discount rate as a fraction (0.10 = 10%)
    #[arg(long)]
    pub rate: Decimal,

    /// Cash flows from year 0, comma-separated (e.g. "-100000,24000,24000")
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub cash_flows: Vec<Decimal>,
}

pub fn run_npv(args: NpvArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let npv = kpi::npv(args.rate, &args.cash_flows);
    Ok(json!({ "rate": args.rate, "npv": npv }))
}

/// Arguments for IRR calculation
#[derive(Args)]
pub struct IrrArgs {
    /// Cash flows from year 0, comma-separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub cash_flows: Vec<Decimal>,
}

pub fn run_irr(args: IrrArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let irr = kpi::irr(&args.cash_flows);
    Ok(json!({ "irr": irr }))
}

/// Arguments for payback detection
#[derive(Args)]
pub struct PaybackArgs {
    /// Cash flows from year 0, comma-separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub cash_flows: Vec<Decimal>,

    /// Discount rate; when given, the discounted payback is reported too
    #[arg(long)]
    pub rate: Option<Decimal>,
}

pub fn run_payback(args: PaybackArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let simple = kpi::simple_payback(&args.cash_flows);
    let discounted = args
        .rate
        .and_then(|rate| kpi::discounted_payback(rate, &args.cash_flows));
    Ok(json!({
        "simple_payback_year": simple,
        "discounted_payback_year": discounted,
    }))
}
