use chrono::NaiveDate;
use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

use rd_calc_core::accrual::{project, project_deposit, RecurringDepositInput};
use rd_calc_core::charts::{build_chart, ChartView};
use rd_calc_core::report::render_report;
use rd_calc_core::Currency;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

#[derive(Deserialize)]
struct ChartRequest {
    #[serde(flatten)]
    deposit: RecurringDepositInput,
    view: ChartView,
}

#[derive(Deserialize)]
struct ReportRequest {
    #[serde(flatten)]
    deposit: RecurringDepositInput,
    generated_on: NaiveDate,
    #[serde(default)]
    currency: Currency,
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

#[napi]
pub fn project_deposit_json(input_json: String) -> NapiResult<String> {
    let input: RecurringDepositInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = project_deposit(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Presentation and export
// ---------------------------------------------------------------------------

#[napi]
pub fn chart_series(input_json: String) -> NapiResult<String> {
    let request: ChartRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let d = &request.deposit;
    let projection = project(d.monthly_deposit, d.annual_rate_percent, d.tenure_months);
    let output = build_chart(&projection, request.view).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn report_text(input_json: String) -> NapiResult<String> {
    let request: ReportRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let d = &request.deposit;
    let projection = project(d.monthly_deposit, d.annual_rate_percent, d.tenure_months);
    render_report(&projection, request.generated_on, &request.currency).map_err(to_napi_error)
}
