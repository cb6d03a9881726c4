use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::production::MonthlyIrradiation;
use crate::types::{Currency, Money, Rate};

/// How the system is financed: upfront capital or a per-kWh purchase
/// agreement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FinancingMode {
    #[default]
    Capex,
    Ppa,
}

/// Full input set for one simulation run.
///
/// Optional fields are populated by the bill-mapping step or left absent;
/// the validator reports on anything missing or out of range, and the
/// orchestrator still computes best-effort numbers either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectParams {
    /// Utility tariff class (e.g. "OM"). Pass-through metadata.
    pub tariff: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_consumption_kwh: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_demand_kw: Option<Decimal>,
    /// What the customer pays the utility today, per year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_annual_cost: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billed_days: Option<u32>,

    /// Installed capacity in kWp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_kwp: Option<Decimal>,
    /// Fraction of theoretical yield actually realised (expected 0.5–0.9).
    pub performance_ratio: Rate,
    /// Annual fractional decline in panel output (expected 0–0.02).
    pub annual_degradation: Rate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capex: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_opex: Option<Money>,

    pub discount_rate: Rate,
    pub om_inflation: Rate,
    pub tariff_escalation: Rate,

    pub lifetime_years: u32,
    pub mode: FinancingMode,
    /// Per-kWh price in year 1, required when mode is PPA.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_ppa_price: Option<Money>,
    pub ppa_escalator: Rate,

    pub currency: Currency,
    /// Custom seasonal weights; the built-in profile is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_irradiation: Option<MonthlyIrradiation>,
}
