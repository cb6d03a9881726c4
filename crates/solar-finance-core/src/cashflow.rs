use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::costs::AnnualCostBreakdown;
use crate::kpi;
use crate::params::{FinancingMode, ProjectParams};
use crate::types::Money;

/// One entry of the year-indexed cashflow series. Year 0 holds the upfront
/// investment (CAPEX mode) or zero (PPA mode, whose charges live inside the
/// yearly cost-with-system instead).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashflowYear {
    /// 0..=lifetime
    pub year: u32,
    /// Nominal flow for the year.
    pub flow: Money,
    /// Nominal flow discounted to present at the project discount rate.
    pub discounted_flow: Money,
    /// Running sum of nominal flows through this year.
    pub cumulative: Money,
}

/// Assemble the nominal/discounted cashflow series from the yearly cost
/// breakdowns and the upfront investment.
pub fn build_cashflow(
    params: &ProjectParams,
    annual_costs: &[AnnualCostBreakdown],
) -> Vec<CashflowYear> {
    let mut flows = Vec::with_capacity(annual_costs.len() + 1);
    flows.push(match params.mode {
        FinancingMode::Capex => -params.capex.unwrap_or(Decimal::ZERO),
        FinancingMode::Ppa => Decimal::ZERO,
    });
    for cost in annual_costs {
        flows.push(cost.savings - cost.opex);
    }

    let one_plus_r = Decimal::ONE + params.discount_rate;
    let mut discount = Decimal::ONE;
    let mut cumulative = Decimal::ZERO;

    let mut series = Vec::with_capacity(flows.len());
    for (year, flow) in flows.into_iter().enumerate() {
        cumulative += flow;
        series.push(CashflowYear {
            year: year as u32,
            flow,
            // Saturates when the discount factor leaves Decimal's range
            // (deep-negative rates over long horizons).
            discounted_flow: kpi::discounted_term(flow, discount),
            cumulative,
        });
        discount = discount.saturating_mul(one_plus_r);
    }
    series
}
