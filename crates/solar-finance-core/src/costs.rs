use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::params::{FinancingMode, ProjectParams};
use crate::production::AnnualProduction;
use crate::types::Money;

/// Cost picture for one project year, with and without the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualCostBreakdown {
    /// 1..=lifetime
    pub year: u32,
    /// Baseline utility bill, escalated.
    pub cost_without_system: Money,
    /// OPEX (CAPEX mode) or PPA charge + OPEX (PPA mode).
    pub cost_with_system: Money,
    /// max(without - with, 0). Never negative.
    pub savings: Money,
    pub opex: Money,
}

/// Project yearly cost-without-system, cost-with-system, and their delta.
///
/// Escalation exponent is y-1, so year 1 carries the unescalated base
/// values. In CAPEX mode the upfront investment is charged once at cashflow
/// year 0 and must not reappear here.
pub fn estimate_annual_costs(
    params: &ProjectParams,
    production: &[AnnualProduction],
) -> Vec<AnnualCostBreakdown> {
    let baseline = params.baseline_annual_cost.unwrap_or(Decimal::ZERO);
    let base_opex = params.annual_opex.unwrap_or(Decimal::ZERO);
    let initial_ppa = params.initial_ppa_price.unwrap_or(Decimal::ZERO);

    let mut tariff_factor = Decimal::ONE;
    let mut opex_factor = Decimal::ONE;
    let mut ppa_factor = Decimal::ONE;

    let mut out = Vec::with_capacity(production.len());
    for produced in production {
        let cost_without_system = baseline * tariff_factor;
        let opex = base_opex * opex_factor;

        let cost_with_system = match params.mode {
            FinancingMode::Ppa => initial_ppa * ppa_factor * produced.kwh + opex,
            FinancingMode::Capex => opex,
        };

        let savings = (cost_without_system - cost_with_system).max(Decimal::ZERO);

        out.push(AnnualCostBreakdown {
            year: produced.year,
            cost_without_system,
            cost_with_system,
            savings,
            opex,
        });

        tariff_factor *= Decimal::ONE + params.tariff_escalation;
        opex_factor *= Decimal::ONE + params.om_inflation;
        ppa_factor *= Decimal::ONE + params.ppa_escalator;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::tests::sample_params;
    use crate::production::estimate_yearly_production;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_capex_mode_cost_with_system_is_opex_only() {
        let mut params = sample_params();
        params.om_inflation = Decimal::ZERO;
        let production = estimate_yearly_production(&params);
        let costs = estimate_annual_costs(&params, &production);

        assert_eq!(costs.len(), 25);
        for c in &costs {
            assert_eq!(c.cost_with_system, dec!(80000));
            assert_eq!(c.opex, dec!(80000));
        }
    }

    #[test]
    fn test_tariff_escalation_compounds_from_year_two() {
        let mut params = sample_params();
        params.baseline_annual_cost = Some(dec!(1000));
        params.tariff_escalation = dec!(0.10);
        let production = estimate_yearly_production(&params);
        let costs = estimate_annual_costs(&params, &production);

        assert_eq!(costs[0].cost_without_system, dec!(1000));
        assert_eq!(costs[1].cost_without_system, dec!(1100));
        assert_eq!(costs[2].cost_without_system, dec!(1210.00));
    }

    #[test]
    fn test_ppa_mode_charges_for_generated_energy() {
        let mut params = sample_params();
        params.mode = FinancingMode::Ppa;
        params.initial_ppa_price = Some(dec!(1.5));
        params.ppa_escalator = Decimal::ZERO;
        params.annual_opex = Some(Decimal::ZERO);
        params.annual_degradation = Decimal::ZERO;
        params.capacity_kwp = Some(dec!(100));
        params.performance_ratio = dec!(0.8);
        let production = estimate_yearly_production(&params);
        let costs = estimate_annual_costs(&params, &production);

        // 1016 kWh/year * 1.5 = 1524 every year
        for c in &costs {
            assert_eq!(c.cost_with_system, dec!(1524.0));
        }
    }

    #[test]
    fn test_ppa_escalator_applies_to_unit_price() {
        let mut params = sample_params();
        params.mode = FinancingMode::Ppa;
        params.initial_ppa_price = Some(dec!(2));
        params.ppa_escalator = dec!(0.5);
        params.annual_opex = Some(Decimal::ZERO);
        params.annual_degradation = Decimal::ZERO;
        params.capacity_kwp = Some(dec!(10));
        params.performance_ratio = dec!(1.0);
        let production = estimate_yearly_production(&params);
        let costs = estimate_annual_costs(&params, &production);

        // 127 kWh/year; unit price 2, 3, 4.5, ...
        assert_eq!(costs[0].cost_with_system, dec!(254));
        assert_eq!(costs[1].cost_with_system, dec!(381.0));
    }

    #[test]
    fn test_savings_never_negative() {
        let mut params = sample_params();
        // Baseline far below system cost: savings must clamp at zero.
        params.baseline_annual_cost = Some(dec!(10));
        params.annual_opex = Some(dec!(500000));
        let production = estimate_yearly_production(&params);
        let costs = estimate_annual_costs(&params, &production);
        for c in &costs {
            assert!(c.savings >= Decimal::ZERO);
            assert_eq!(c.savings, Decimal::ZERO);
        }
    }

    #[test]
    fn test_opex_inflation_compounds() {
        let mut params = sample_params();
        params.annual_opex = Some(dec!(100));
        params.om_inflation = dec!(0.10);
        let production = estimate_yearly_production(&params);
        let costs = estimate_annual_costs(&params, &production);
        assert_eq!(costs[0].opex, dec!(100));
        assert_eq!(costs[1].opex, dec!(110.0));
    }
}
