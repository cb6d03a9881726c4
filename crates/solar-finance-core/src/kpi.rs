use rust_decimal::prelude::Signed;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Rate};

const NPV_TOLERANCE: Decimal = dec!(0.000001);
const BISECTION_ITERATIONS: u32 = 64;
const IRR_BRACKET_LOW: Decimal = dec!(-0.99);
const IRR_BRACKET_HIGH: Decimal = dec!(1.0);

/// Investment KPIs for one simulation run. Every field is optional: `None`
/// is the explicit out-of-domain marker (no sign change for IRR, no
/// crossing for payback, PPA mode for ROI, non-positive energy for LCOE).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialKPIs {
    pub npv: Option<Money>,
    pub irr: Option<Rate>,
    pub simple_payback_year: Option<u32>,
    pub discounted_payback_year: Option<u32>,
    pub roi: Option<Rate>,
    pub lcoe: Option<Money>,
}

/// Term of a discounted sum. The factor can underflow Decimal's range for
/// deep-negative rates over long horizons, or the quotient can overflow it;
/// saturate with the flow's sign so the term keeps a usable magnitude and
/// sign checks stay correct.
pub(crate) fn discounted_term(flow: Money, discount: Decimal) -> Decimal {
    if discount.is_zero() {
        return signed_limit(flow);
    }
    flow.checked_div(discount).unwrap_or_else(|| signed_limit(flow))
}

fn signed_limit(flow: Money) -> Decimal {
    if flow.is_zero() {
        Decimal::ZERO
    } else if flow.is_sign_positive() {
        Decimal::MAX
    } else {
        Decimal::MIN
    }
}

/// Present value of a flow vector at a given rate, index = years from now.
/// `None` when the rate is at or below -100%.
pub fn npv(rate: Rate, flows: &[Money]) -> Option<Money> {
    if rate <= dec!(-1) {
        return None;
    }
    let one_plus_r = Decimal::ONE + rate;
    let mut discount = Decimal::ONE;
    let mut total = Decimal::ZERO;
    for (t, flow) in flows.iter().enumerate() {
        if t > 0 {
            discount = discount.saturating_mul(one_plus_r);
        }
        total = total.saturating_add(discounted_term(*flow, discount));
    }
    Some(total)
}

/// Internal rate of return by bisection over [-0.99, 1.00].
///
/// Bisection is deliberately preferred over Newton-Raphson here: it cannot
/// diverge on cashflows with multiple sign changes and always terminates
/// within the iteration bound. `None` when the bracket endpoints do not
/// yield two usable present values of opposite sign.
pub fn irr(flows: &[Money]) -> Option<Rate> {
    let mut low = IRR_BRACKET_LOW;
    let mut high = IRR_BRACKET_HIGH;
    let mut f_low = npv(low, flows)?;
    let f_high = npv(high, flows)?;
    if f_low.signum() * f_high.signum() > Decimal::ZERO {
        // No root bracketed: the project never turns net-positive, or is
        // net-positive even at the lower bound.
        return None;
    }

    let two = dec!(2);
    for _ in 0..BISECTION_ITERATIONS {
        let mid = (low + high) / two;
        let f_mid = npv(mid, flows)?;
        if f_mid.abs() < NPV_TOLERANCE {
            return Some(mid);
        }
        if f_low.signum() * f_mid.signum() < Decimal::ZERO {
            high = mid;
        } else {
            low = mid;
            f_low = f_mid;
        }
    }
    Some((low + high) / two)
}

/// First year index at which the running nominal cumulative sum reaches
/// zero. `None` when it never crosses within the horizon.
pub fn simple_payback(flows: &[Money]) -> Option<u32> {
    let mut acc = Decimal::ZERO;
    for (i, flow) in flows.iter().enumerate() {
        acc += flow;
        if acc >= Decimal::ZERO {
            return Some(i as u32);
        }
    }
    None
}

/// Same crossing rule as [`simple_payback`], accumulating discounted flows.
pub fn discounted_payback(rate: Rate, flows: &[Money]) -> Option<u32> {
    if rate <= dec!(-1) {
        return None;
    }
    let one_plus_r = Decimal::ONE + rate;
    let mut discount = Decimal::ONE;
    let mut acc = Decimal::ZERO;
    for (i, flow) in flows.iter().enumerate() {
        if i > 0 {
            discount = discount.saturating_mul(one_plus_r);
        }
        acc = acc.saturating_add(discounted_term(*flow, discount));
        if acc >= Decimal::ZERO {
            return Some(i as u32);
        }
    }
    None
}

/// Levelized cost of energy: discounted total cost over discounted total
/// energy. `None` when the discounted energy is not positive.
pub fn lcoe(total_discounted_cost: Money, total_discounted_energy: Decimal) -> Option<Money> {
    if total_discounted_energy <= Decimal::ZERO {
        return None;
    }
    Some(total_discounted_cost / total_discounted_energy)
}
