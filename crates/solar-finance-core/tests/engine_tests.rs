use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use solar_finance_core::engine::calculate_financials;
use solar_finance_core::kpi;
use solar_finance_core::params::{FinancingMode, ProjectParams};
use solar_finance_core::types::Currency;

// ===========================================================================
// Fixtures
// ===========================================================================

fn base_params() -> ProjectParams {
    ProjectParams {
        tariff: "OM".into(),
        annual_consumption_kwh: None,
        peak_demand_kw: None,
        baseline_annual_cost: Some(dec!(50000)),
        billed_days: None,
        capacity_kwp: Some(dec!(100)),
        performance_ratio: dec!(0.8),
        annual_degradation: Decimal::ZERO,
        capex: Some(dec!(100000)),
        annual_opex: Some(Decimal::ZERO),
        discount_rate: Decimal::ZERO,
        om_inflation: Decimal::ZERO,
        tariff_escalation: Decimal::ZERO,
        lifetime_years: 1,
        mode: FinancingMode::Capex,
        initial_ppa_price: None,
        ppa_escalator: Decimal::ZERO,
        currency: Currency::MXN,
        monthly_irradiation: None,
    }
}

// ===========================================================================
// Scenario tests
// ===========================================================================

#[test]
fn test_scenario_zero_growth_single_year_capex() {
    let result = calculate_financials(&base_params());

    let savings = result.annual_costs[0].savings;
    assert_eq!(savings, dec!(50000));

    assert_eq!(result.cashflow.len(), 2);
    assert_eq!(result.cashflow[0].flow, dec!(-100000));
    assert_eq!(result.cashflow[1].flow, savings);
    assert_eq!(result.kpis.npv, Some(dec!(-100000) + savings));
}

#[test]
fn test_scenario_ppa_has_zero_year_zero_flow() {
    let mut params = base_params();
    params.mode = FinancingMode::Ppa;
    params.initial_ppa_price = Some(dec!(1.5));
    params.lifetime_years = 2;

    let result = calculate_financials(&params);
    assert_eq!(result.cashflow[0].flow, Decimal::ZERO);
    // PPA charges live inside cost-with-system, not at year 0.
    assert!(result.annual_costs[0].cost_with_system > Decimal::ZERO);
}

#[test]
fn test_scenario_irr_absent_for_all_negative_flows() {
    assert_eq!(kpi::irr(&[dec!(-100), dec!(-50), dec!(-20)]), None);
}

#[test]
fn test_scenario_payback_never_reached() {
    let flows = [dec!(-1000), dec!(10), dec!(10), dec!(10)];
    assert_eq!(kpi::simple_payback(&flows), None);
}

// ===========================================================================
// Cross-component properties
// ===========================================================================

#[test]
fn test_production_monotone_under_degradation_through_engine() {
    let mut params = base_params();
    params.annual_degradation = dec!(0.01);
    params.lifetime_years = 20;

    let result = calculate_financials(&params);
    for pair in result.production.annual.windows(2) {
        assert!(pair[1].kwh < pair[0].kwh);
    }
}

#[test]
fn test_savings_non_negative_even_when_system_is_worse() {
    let mut params = base_params();
    params.mode = FinancingMode::Ppa;
    params.initial_ppa_price = Some(dec!(500)); // absurd unit price
    params.lifetime_years = 10;

    let result = calculate_financials(&params);
    for cost in &result.annual_costs {
        assert!(cost.savings >= Decimal::ZERO);
    }
}

#[test]
fn test_irr_reported_by_engine_zeroes_the_npv() {
    let mut params = base_params();
    params.lifetime_years = 10;
    params.discount_rate = dec!(0.10);
    params.baseline_annual_cost = Some(dec!(25000));

    let result = calculate_financials(&params);
    let rate = result.kpis.irr.expect("profitable project has an IRR");
    let flows: Vec<Decimal> = result.cashflow.iter().map(|cf| cf.flow).collect();
    let residual = kpi::npv(rate, &flows).unwrap();
    assert!(residual.abs() < dec!(0.00001), "residual {residual}");
}

#[test]
fn test_simple_payback_matches_cumulative_crossing() {
    let mut params = base_params();
    params.lifetime_years = 10;
    params.baseline_annual_cost = Some(dec!(30000));

    let result = calculate_financials(&params);
    let payback = result.kpis.simple_payback_year.unwrap();
    let crossing = result
        .cashflow
        .iter()
        .position(|cf| cf.cumulative >= Decimal::ZERO)
        .unwrap() as u32;
    assert_eq!(payback, crossing);
    assert_eq!(payback, 4); // 100000 / 30000 crosses in year 4
}

#[test]
fn test_lcoe_reflects_capex_once() {
    // Undiscounted world, flat OPEX and production: LCOE must equal
    // (CAPEX + N*OPEX) / (N*annual kWh). Any per-year re-charge of CAPEX
    // would inflate it.
    let mut params = base_params();
    params.lifetime_years = 10;
    params.annual_opex = Some(dec!(960));

    let result = calculate_financials(&params);
    let annual_kwh = result.production.annual[0].kwh; // 1016 kWh
    let expected = (dec!(100000) + dec!(10) * dec!(960)) / (dec!(10) * annual_kwh);
    assert_eq!(result.kpis.lcoe, Some(expected));
}

#[test]
fn test_kpis_all_absent_paths_are_none_not_panics() {
    // PR = 0 means zero energy: LCOE absent. All flows negative: IRR and
    // paybacks absent. ROI absent in PPA mode. Nothing panics.
    let mut params = base_params();
    params.performance_ratio = Decimal::ZERO;
    params.baseline_annual_cost = Some(Decimal::ZERO);
    params.annual_opex = Some(dec!(1000));
    params.lifetime_years = 10;

    let result = calculate_financials(&params);
    assert_eq!(result.kpis.lcoe, None);
    assert_eq!(result.kpis.irr, None);
    assert_eq!(result.kpis.simple_payback_year, None);
    assert_eq!(result.kpis.discounted_payback_year, None);

    params.mode = FinancingMode::Ppa;
    params.initial_ppa_price = Some(dec!(1));
    let result = calculate_financials(&params);
    assert_eq!(result.kpis.roi, None);
}

#[test]
fn test_result_serializes_to_json() {
    let result = calculate_financials(&base_params());
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"kpis\""));
    assert!(json.contains("\"cashflow\""));
    assert!(json.contains("\"audit\""));
}
