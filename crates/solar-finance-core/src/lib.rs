pub mod bill;
pub mod cashflow;
pub mod costs;
pub mod engine;
pub mod error;
pub mod kpi;
pub mod params;
pub mod production;
pub mod request;
pub mod types;
pub mod validation;

pub use error::SolarFinanceError;
pub use types::*;

/// Standard result type for fallible boundary operations (payload parsing,
/// bindings). The engine itself never fails for numeric input.
pub type SolarFinanceResult<T> = Result<T, SolarFinanceError>;
