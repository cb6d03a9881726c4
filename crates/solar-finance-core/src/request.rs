use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::params::{FinancingMode, ProjectParams};
use crate::production::MonthlyIrradiation;
use crate::types::{Currency, Money, Rate};
use crate::SolarFinanceResult;

fn default_performance_ratio() -> Rate {
    dec!(0.82)
}
fn default_degradation() -> Rate {
    dec!(0.007)
}
fn default_opex() -> Money {
    Decimal::ZERO
}
fn default_lifetime() -> u32 {
    25
}
fn default_discount_rate() -> Rate {
    dec!(0.10)
}
fn default_om_inflation() -> Rate {
    dec!(0.03)
}
fn default_tariff_escalation() -> Rate {
    dec!(0.07)
}
fn default_ppa_escalator() -> Rate {
    dec!(0.02)
}
fn default_tariff() -> String {
    "OM".into()
}

/// Wire payload for a delegated engine run. Same logical shape as
/// [`ProjectParams`], with serde-level defaults so a remote caller can send
/// only what it knows; the response is the serialized
/// [`crate::engine::FinancialResult`], making local and remote computation
/// substitutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineRequest {
    #[serde(default = "default_tariff")]
    pub tariff: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_consumption_kwh: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak_demand_kw: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_annual_cost: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billed_days: Option<u32>,

    pub capacity_kwp: Decimal,
    #[serde(default = "default_performance_ratio")]
    pub performance_ratio: Rate,
    #[serde(default = "default_degradation")]
    pub annual_degradation: Rate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capex: Option<Money>,
    #[serde(default = "default_opex")]
    pub annual_opex: Money,

    #[serde(default = "default_discount_rate")]
    pub discount_rate: Rate,
    #[serde(default = "default_om_inflation")]
    pub om_inflation: Rate,
    #[serde(default = "default_tariff_escalation")]
    pub tariff_escalation: Rate,

    #[serde(default = "default_lifetime")]
    pub lifetime_years: u32,
    #[serde(default)]
    pub mode: FinancingMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_ppa_price: Option<Money>,
    #[serde(default = "default_ppa_escalator")]
    pub ppa_escalator: Rate,

    #[serde(default)]
    pub currency: Currency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_irradiation: Option<MonthlyIrradiation>,
}

impl EngineRequest {
    /// Parse a JSON payload as received from a remote caller.
    pub fn from_json(payload: &str) -> SolarFinanceResult<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn into_params(self) -> ProjectParams {
        ProjectParams {
            tariff: self.tariff,
            annual_consumption_kwh: self.annual_consumption_kwh,
            peak_demand_kw: self.peak_demand_kw,
            baseline_annual_cost: self.baseline_annual_cost,
            billed_days: self.billed_days,
            capacity_kwp: Some(self.capacity_kwp),
            performance_ratio: self.performance_ratio,
            annual_degradation: self.annual_degradation,
            capex: self.capex,
            annual_opex: Some(self.annual_opex),
            discount_rate: self.discount_rate,
            om_inflation: self.om_inflation,
            tariff_escalation: self.tariff_escalation,
            lifetime_years: self.lifetime_years,
            mode: self.mode,
            initial_ppa_price: self.initial_ppa_price,
            ppa_escalator: self.ppa_escalator,
            currency: self.currency,
            monthly_irradiation: self.monthly_irradiation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate_financials;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_payload_gets_defaults() {
        let request: EngineRequest =
            serde_json::from_str(r#"{ "capacity_kwp": "500" }"#).unwrap();
        assert_eq!(request.performance_ratio, dec!(0.82));
        assert_eq!(request.annual_degradation, dec!(0.007));
        assert_eq!(request.lifetime_years, 25);
        assert_eq!(request.discount_rate, dec!(0.10));
        assert_eq!(request.mode, FinancingMode::Capex);
        assert_eq!(request.currency, Currency::MXN);
        assert_eq!(request.annual_opex, Decimal::ZERO);
    }

    #[test]
    fn test_full_payload_round_trips_through_engine() {
        let json = r#"{
            "capacity_kwp": "100",
            "performance_ratio": "0.8",
            "annual_degradation": "0",
            "capex": "100000",
            "annual_opex": "0",
            "baseline_annual_cost": "50000",
            "discount_rate": "0",
            "om_inflation": "0",
            "tariff_escalation": "0",
            "lifetime_years": 1,
            "mode": "CAPEX",
            "currency": "MXN"
        }"#;
        let request: EngineRequest = serde_json::from_str(json).unwrap();
        let result = calculate_financials(&request.into_params());
        assert_eq!(result.cashflow[0].flow, dec!(-100000));
        assert_eq!(result.kpis.npv, Some(dec!(-50000)));
    }

    #[test]
    fn test_malformed_payload_is_a_serialization_error() {
        let err = EngineRequest::from_json("{ not json").unwrap_err();
        assert!(matches!(
            err,
            crate::SolarFinanceError::SerializationError(_)
        ));
    }

    #[test]
    fn test_custom_irradiation_profile_travels_on_the_wire() {
        let json = r#"{
            "capacity_kwp": "10",
            "monthly_irradiation": ["1","1","1","1","1","1","1","1","1","1","1","1"]
        }"#;
        let request: EngineRequest = serde_json::from_str(json).unwrap();
        let profile = request.monthly_irradiation.clone().unwrap();
        assert_eq!(profile.weight_sum(), dec!(12));
    }
}
