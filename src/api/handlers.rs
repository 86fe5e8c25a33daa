//! REST handlers for the calculator

use axum::extract::rejection::JsonRejection;
use axum::response::Html;
use axum::Json;

use crate::core::dispatch;
use crate::utils::error::{CalcError, Result};

use super::dto::{CalculateRequest, CalculateResponse};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Handler for GET /
pub async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Handler for POST /calculate
///
/// Body rejections are turned into `{error}` responses so that every
/// failure on this route has the same JSON shape.
pub async fn calculate(
    payload: std::result::Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>> {
    let Json(req) = payload.map_err(|rejection| {
        CalcError::validation(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let num1 = req.num1.value("num1")?;
    let num2 = req.num2.value("num2")?;

    let result = dispatch::evaluate_named(num1, num2, &req.operation)?;

    // JSON 無法表示 inf / NaN (例如 power(10, 400) 溢位)
    if !result.is_finite() {
        return Err(CalcError::invalid_operation("Result is not a finite number"));
    }

    tracing::info!(
        "Calculated {} {} {} = {}",
        num1,
        req.operation,
        num2,
        result
    );
    Ok(Json(CalculateResponse { result }))
}
