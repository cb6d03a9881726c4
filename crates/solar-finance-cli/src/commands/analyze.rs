use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use solar_finance_core::engine::calculate_financials;
use solar_finance_core::request::EngineRequest;
use solar_finance_core::validation::validate_params;

use crate::input;

/// Arguments for a full simulation run
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Installed capacity in kWp
    #[arg(long)]
    pub capacity_kwp: Option<Decimal>,

    /// Upfront investment (CAPEX mode)
    #[arg(long)]
    pub capex: Option<Decimal>,

    /// Annual operating expenditure
    #[arg(long)]
    pub opex: Option<Decimal>,

    /// What the customer pays the utility today, per year
    #[arg(long)]
    pub baseline_annual_cost: Option<Decimal>,

    /// Discount rate as a fraction (0.10 = 10%)
    #[arg(long)]
    pub discount_rate: Option<Decimal>,

    /// Project lifetime in years
    #[arg(long)]
    pub lifetime_years: Option<u32>,

    /// Finance via a power purchase agreement instead of CAPEX
    #[arg(long)]
    pub ppa: bool,

    /// Initial per-kWh PPA price (PPA mode)
    #[arg(long)]
    pub ppa_price: Option<Decimal>,
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request = resolve_request(args)?;
    let result = calculate_financials(&request.into_params());
    Ok(serde_json::to_value(result)?)
}

/// Arguments for validation only
#[derive(Args)]
pub struct ValidateArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_validate(args: ValidateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: EngineRequest = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(request) = input::read_piped()? {
        request
    } else {
        return Err("--input <file.json> or stdin required for validate".into());
    };
    let report = validate_params(&request.into_params());
    Ok(serde_json::to_value(report)?)
}

fn resolve_request(args: AnalyzeArgs) -> Result<EngineRequest, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::read_json(path);
    }
    if let Some(request) = input::read_piped()? {
        return Ok(request);
    }

    let capacity = args
        .capacity_kwp
        .ok_or("--capacity-kwp is required (or provide --input)")?;

    // Assemble a payload so the wire contract's defaults apply to anything
    // not given as a flag.
    let mut payload = serde_json::Map::new();
    payload.insert("capacity_kwp".into(), serde_json::to_value(capacity)?);
    if let Some(capex) = args.capex {
        payload.insert("capex".into(), serde_json::to_value(capex)?);
    }
    if let Some(opex) = args.opex {
        payload.insert("annual_opex".into(), serde_json::to_value(opex)?);
    }
    if let Some(baseline) = args.baseline_annual_cost {
        payload.insert(
            "baseline_annual_cost".into(),
            serde_json::to_value(baseline)?,
        );
    }
    if let Some(rate) = args.discount_rate {
        payload.insert("discount_rate".into(), serde_json::to_value(rate)?);
    }
    if let Some(years) = args.lifetime_years {
        payload.insert("lifetime_years".into(), serde_json::to_value(years)?);
    }
    if args.ppa {
        payload.insert("mode".into(), Value::String("PPA".into()));
    }
    if let Some(price) = args.ppa_price {
        payload.insert("initial_ppa_price".into(), serde_json::to_value(price)?);
    }

    Ok(serde_json::from_value(Value::Object(payload))?)
}
