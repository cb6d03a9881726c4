use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::params::{FinancingMode, ProjectParams};
use crate::types::{Severity, ValidationIssue, ValidationReport};

fn issue(field: &str, message: &str, severity: Severity) -> ValidationIssue {
    ValidationIssue {
        field: field.into(),
        message: message.into(),
        severity,
    }
}

/// Check a parameter set for structural and range problems before
/// simulation. Reports issues rather than failing; callers decide whether
/// error-severity issues should block anything.
pub fn validate_params(params: &ProjectParams) -> ValidationReport {
    let mut issues = Vec::new();

    match params.capacity_kwp {
        Some(kwp) if kwp > Decimal::ZERO => {}
        _ => issues.push(issue(
            "capacity_kwp",
            "Installed capacity (kWp) must be > 0",
            Severity::Error,
        )),
    }

    if params.performance_ratio < dec!(0.5) || params.performance_ratio > dec!(0.9) {
        issues.push(issue(
            "performance_ratio",
            "Performance ratio outside expected range (0.5–0.9)",
            Severity::Warning,
        ));
    }

    if params.annual_degradation < Decimal::ZERO || params.annual_degradation > dec!(0.02) {
        issues.push(issue(
            "annual_degradation",
            "Degradation outside expected range (0–2%)",
            Severity::Warning,
        ));
    }

    // Checked regardless of mode: even a PPA quote is sanity-checked against
    // an ownership alternative downstream.
    match params.capex {
        Some(capex) if capex > Decimal::ZERO => {}
        _ => issues.push(issue("capex", "CAPEX must be > 0", Severity::Error)),
    }

    if params.annual_opex.is_none() {
        issues.push(issue(
            "annual_opex",
            "Annual OPEX required",
            Severity::Warning,
        ));
    }

    if params.lifetime_years < 5 {
        issues.push(issue(
            "lifetime_years",
            "Project lifetime is very short (<5 years)",
            Severity::Warning,
        ));
    }

    if params.mode == FinancingMode::Ppa {
        match params.initial_ppa_price {
            Some(price) if price > Decimal::ZERO => {}
            _ => issues.push(issue(
                "initial_ppa_price",
                "Initial PPA price required and must be > 0",
                Severity::Error,
            )),
        }
    }

    let ok = !issues.iter().any(|i| i.severity == Severity::Error);
    ValidationReport { ok, issues }
}
