use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::params::ProjectParams;
use crate::{SolarFinanceError, SolarFinanceResult};

/// Twelve seasonal irradiation weights, January to December. The weights are
/// unitless multipliers on the base monthly yield and the default profile
/// sums to 12, so a flat profile and the default produce the same annual
/// total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlyIrradiation(pub [Decimal; 12]);

impl Default for MonthlyIrradiation {
    fn default() -> Self {
        MonthlyIrradiation([
            dec!(1.0),
            dec!(0.95),
            dec!(1.05),
            dec!(1.1),
            dec!(1.15),
            dec!(1.2),
            dec!(1.2),
            dec!(1.15),
            dec!(1.05),
            dec!(1.0),
            dec!(0.95),
            dec!(0.9),
        ])
    }
}

impl MonthlyIrradiation {
    /// Build a profile from a caller-supplied slice, which must hold exactly
    /// twelve weights.
    pub fn from_weights(weights: &[Decimal]) -> SolarFinanceResult<Self> {
        let weights: [Decimal; 12] =
            weights
                .try_into()
                .map_err(|_| SolarFinanceError::InvalidInput {
                    field: "monthly_irradiation".into(),
                    reason: format!("expected 12 monthly weights, got {}", weights.len()),
                })?;
        Ok(MonthlyIrradiation(weights))
    }

    pub fn weight_sum(&self) -> Decimal {
        self.0.iter().sum()
    }
}

/// Energy produced in one project year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualProduction {
    /// 1..=lifetime
    pub year: u32,
    pub kwh: Decimal,
}

/// Project yearly energy yield over the full lifetime.
///
/// Year y = (sum of monthly weights) x capacity x PR x (1 - degradation)^(y-1).
/// Strictly non-increasing when degradation > 0, flat when it is zero.
pub fn estimate_yearly_production(params: &ProjectParams) -> Vec<AnnualProduction> {
    let profile = params
        .monthly_irradiation
        .clone()
        .unwrap_or_default();
    let base_monthly =
        params.capacity_kwp.unwrap_or(Decimal::ZERO) * params.performance_ratio;
    let annual_base = profile.weight_sum() * base_monthly;

    let retention = Decimal::ONE - params.annual_degradation;
    let mut factor = Decimal::ONE;
    let mut years = Vec::with_capacity(params.lifetime_years as usize);
    for year in 1..=params.lifetime_years {
        years.push(AnnualProduction {
            year,
            kwh: annual_base * factor,
        });
        factor *= retention;
    }
    years
}
