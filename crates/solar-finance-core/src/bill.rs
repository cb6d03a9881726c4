use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::params::{FinancingMode, ProjectParams};
use crate::types::Currency;

/// One key/value line from a bill's billing summary, as extracted upstream
/// (keys and values arrive as free text, e.g. "TOTAL A PAGAR" / "$201,354.00").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillSummaryItem {
    pub key: String,
    pub value: String,
}

/// One row of a bill's historical consumption table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumption_kwh: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demand_kw: Option<Decimal>,
}

/// Structured data extracted from an electricity bill. Only the fields the
/// parameter mapping consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedBill {
    pub billing_summary: Vec<BillSummaryItem>,
    #[serde(default)]
    pub historical_consumption: Vec<ConsumptionRow>,
}

/// Lenient money parser for extracted bill text: strips currency symbols
/// and thousands separators, keeps sign and decimal point.
fn parse_money(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    Decimal::from_str(&cleaned).ok()
}

/// Derive a parameter set from extracted bill data, filling design
/// assumptions with fixed defaults pending user editing.
///
/// Baseline annual cost = the "TOTAL" billing-summary amount x 12; annual
/// consumption = sum of history rows; peak demand = their maximum.
pub fn map_bill_to_params(bill: &ExtractedBill) -> ProjectParams {
    let monthly_total = bill
        .billing_summary
        .iter()
        .find(|item| item.key.to_uppercase().contains("TOTAL"))
        .and_then(|item| parse_money(&item.value));
    let baseline_annual_cost = monthly_total.map(|m| m * dec!(12));

    let annual_consumption_kwh = {
        let sum: Decimal = bill
            .historical_consumption
            .iter()
            .filter_map(|row| row.consumption_kwh)
            .sum();
        (!sum.is_zero()).then_some(sum)
    };

    let peak_demand_kw = bill
        .historical_consumption
        .iter()
        .filter_map(|row| row.demand_kw)
        .max();

    ProjectParams {
        tariff: "OM".into(),
        annual_consumption_kwh,
        peak_demand_kw,
        baseline_annual_cost,
        billed_days: None,

        capacity_kwp: Some(dec!(500)),
        performance_ratio: dec!(0.82),
        annual_degradation: dec!(0.007),
        capex: Some(dec!(8000000)),
        annual_opex: Some(dec!(80000)),

        discount_rate: dec!(0.10),
        om_inflation: dec!(0.03),
        tariff_escalation: dec!(0.07),

        lifetime_years: 25,
        mode: FinancingMode::Capex,
        initial_ppa_price: None,
        ppa_escalator: dec!(0.02),

        currency: Currency::MXN,
        monthly_irradiation: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_bill() -> ExtractedBill {
        ExtractedBill {
            billing_summary: vec![
                BillSummaryItem {
                    key: "Energía".into(),
                    value: "$150,000.00".into(),
                },
                BillSummaryItem {
                    key: "Total a pagar".into(),
                    value: "$201,354.50".into(),
                },
            ],
            historical_consumption: vec![
                ConsumptionRow {
                    period: Some("ENE24".into()),
                    consumption_kwh: Some(dec!(98000)),
                    demand_kw: Some(dec!(410)),
                },
                ConsumptionRow {
                    period: Some("FEB24".into()),
                    consumption_kwh: Some(dec!(102000)),
                    demand_kw: Some(dec!(450)),
                },
                ConsumptionRow {
                    period: Some("MAR24".into()),
                    consumption_kwh: None,
                    demand_kw: Some(dec!(430)),
                },
            ],
        }
    }

    #[test]
    fn test_parse_money_strips_symbols_and_separators() {
        assert_eq!(parse_money("$201,354.50"), Some(dec!(201354.50)));
        assert_eq!(parse_money("US$ 1,000"), Some(dec!(1000)));
        assert_eq!(parse_money("-12.5"), Some(dec!(-12.5)));
        assert_eq!(parse_money("n/a"), None);
    }

    #[test]
    fn test_baseline_is_twelve_times_monthly_total() {
        let params = map_bill_to_params(&sample_bill());
        assert_eq!(params.baseline_annual_cost, Some(dec!(2416254.00)));
    }

    #[test]
    fn test_consumption_and_demand_aggregates() {
        let params = map_bill_to_params(&sample_bill());
        assert_eq!(params.annual_consumption_kwh, Some(dec!(200000)));
        assert_eq!(params.peak_demand_kw, Some(dec!(450)));
    }

    #[test]
    fn test_defaults_fill_design_assumptions() {
        let params = map_bill_to_params(&sample_bill());
        assert_eq!(params.capacity_kwp, Some(dec!(500)));
        assert_eq!(params.performance_ratio, dec!(0.82));
        assert_eq!(params.annual_degradation, dec!(0.007));
        assert_eq!(params.lifetime_years, 25);
        assert_eq!(params.mode, FinancingMode::Capex);
        assert_eq!(params.currency, Currency::MXN);
    }

    #[test]
    fn test_missing_total_leaves_baseline_absent() {
        let mut bill = sample_bill();
        bill.billing_summary.retain(|i| !i.key.to_uppercase().contains("TOTAL"));
        let params = map_bill_to_params(&bill);
        assert_eq!(params.baseline_annual_cost, None);
    }
}
