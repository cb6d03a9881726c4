pub mod analyze;
pub mod bill;
pub mod kpi;
