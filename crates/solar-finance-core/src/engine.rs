use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cashflow::{build_cashflow, CashflowYear};
use crate::costs::{estimate_annual_costs, AnnualCostBreakdown};
use crate::kpi::{self, FinancialKPIs};
use crate::params::{FinancingMode, ProjectParams};
use crate::production::{estimate_yearly_production, AnnualProduction};
use crate::types::{Money, ValidationIssue};
use crate::validation::validate_params;

/// Yearly production series plus its lifetime total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionSummary {
    pub annual: Vec<AnnualProduction>,
    pub total_kwh: Decimal,
}

/// Immutable aggregate returned by one engine run: echoed inputs, every
/// intermediate series, the KPI set, validation issues, and an ordered
/// audit trail of computation notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialResult {
    pub inputs: ProjectParams,
    pub production: ProductionSummary,
    pub annual_costs: Vec<AnnualCostBreakdown>,
    pub cashflow: Vec<CashflowYear>,
    pub kpis: FinancialKPIs,
    pub issues: Vec<ValidationIssue>,
    pub audit: Vec<String>,
}

/// Run the full simulation: validate, project production and costs, build
/// the cashflow, and derive KPIs.
///
/// Never fails. Validation errors are reported in `issues` and noted in the
/// audit trail, but the simulation still runs on whatever values were
/// supplied; surfacing errors to the user is the caller's responsibility.
pub fn calculate_financials(params: &ProjectParams) -> FinancialResult {
    let mut audit = Vec::new();

    let report = validate_params(params);
    if !report.ok {
        audit.push("Parameters have blocking errors; returning best-effort results.".into());
    }

    let production = estimate_yearly_production(params);
    let total_kwh: Decimal = production.iter().map(|p| p.kwh).sum();
    if let Some(first) = production.first() {
        audit.push(format!("Estimated year-1 production: {} kWh", first.kwh));
    }

    let annual_costs = estimate_annual_costs(params, &production);
    if let Some(first) = annual_costs.first() {
        audit.push(format!(
            "Year-1 baseline cost (without system): {}",
            first.cost_without_system
        ));
    }

    let cashflow = build_cashflow(params, &annual_costs);
    let flows: Vec<Money> = cashflow.iter().map(|cf| cf.flow).collect();

    let npv = kpi::npv(params.discount_rate, &flows);
    let irr = kpi::irr(&flows);
    if irr.is_none() {
        audit.push("IRR not bracketed within [-0.99, 1.00]; reported as absent.".into());
    }
    let simple_payback_year = kpi::simple_payback(&flows);
    let discounted_payback_year = kpi::discounted_payback(params.discount_rate, &flows);
    let lcoe = compute_lcoe(params, &production, &annual_costs);
    let roi = compute_roi(params, &annual_costs);

    let kpis = FinancialKPIs {
        npv,
        irr,
        simple_payback_year,
        discounted_payback_year,
        roi,
        lcoe,
    };

    FinancialResult {
        inputs: params.clone(),
        production: ProductionSummary {
            annual: production,
            total_kwh,
        },
        annual_costs,
        cashflow,
        kpis,
        issues: report.issues,
        audit,
    }
}

/// Discounted cost = CAPEX (once, undiscounted, CAPEX mode only) plus the
/// discounted OPEX stream; discounted energy = the discounted production
/// stream. The CAPEX lives at year 0 only — re-adding it per year would
/// double-count it against both LCOE and ROI.
fn compute_lcoe(
    params: &ProjectParams,
    production: &[AnnualProduction],
    annual_costs: &[AnnualCostBreakdown],
) -> Option<Money> {
    let one_plus_r = Decimal::ONE + params.discount_rate;
    if one_plus_r <= Decimal::ZERO {
        return None;
    }

    let upfront = match params.mode {
        FinancingMode::Capex => params.capex.unwrap_or(Decimal::ZERO),
        FinancingMode::Ppa => Decimal::ZERO,
    };

    let mut discount = Decimal::ONE;
    let mut discounted_cost = upfront;
    let mut discounted_energy = Decimal::ZERO;
    for (cost, produced) in annual_costs.iter().zip(production) {
        discount = discount.saturating_mul(one_plus_r);
        if discount.is_zero() {
            return None;
        }
        // The ratio has no usable magnitude once the factor leaves
        // Decimal's range.
        discounted_cost = discounted_cost.checked_add(cost.opex.checked_div(discount)?)?;
        discounted_energy = discounted_energy.checked_add(produced.kwh.checked_div(discount)?)?;
    }

    kpi::lcoe(discounted_cost, discounted_energy)
}

/// (total savings - total OPEX) / CAPEX over the full horizon. Only defined
/// for CAPEX mode with a positive CAPEX.
fn compute_roi(params: &ProjectParams, annual_costs: &[AnnualCostBreakdown]) -> Option<Decimal> {
    if params.mode != FinancingMode::Capex {
        return None;
    }
    let capex = params.capex?;
    if capex <= Decimal::ZERO {
        return None;
    }
    let total_savings: Decimal = annual_costs.iter().map(|c| c.savings).sum();
    let total_opex: Decimal = annual_costs.iter().map(|c| c.opex).sum();
    Some((total_savings - total_opex) / capex)
}
