use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Run the full financial simulation on an engine-request payload and
/// return the serialized result. Same contract as the CLI `analyze`
/// command, so a JS host can swap between local and delegated computation.
#[napi]
pub fn calculate_financials(input_json: String) -> NapiResult<String> {
    let request = solar_finance_core::request::EngineRequest::from_json(&input_json)
        .map_err(to_napi_error)?;
    let result = solar_finance_core::engine::calculate_financials(&request.into_params());
    serde_json::to_string(&result).map_err(to_napi_error)
}

/// Validate an engine-request payload without simulating.
#[napi]
pub fn validate_params(input_json: String) -> NapiResult<String> {
    let request = solar_finance_core::request::EngineRequest::from_json(&input_json)
        .map_err(to_napi_error)?;
    let report = solar_finance_core::validation::validate_params(&request.into_params());
    serde_json::to_string(&report).map_err(to_napi_error)
}

/// Derive default project parameters from extracted bill data.
#[napi]
pub fn map_bill_to_params(input_json: String) -> NapiResult<String> {
    let bill: solar_finance_core::bill::ExtractedBill =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let params = solar_finance_core::bill::map_bill_to_params(&bill);
    serde_json::to_string(&params).map_err(to_napi_error)
}
