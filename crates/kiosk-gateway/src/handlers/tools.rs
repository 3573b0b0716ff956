use crate::error::{AppError, Result};
use crate::extract::JsonOrForm;
use crate::model::{CalculateRequest, ConvertRequest, ResultResponse, Scalar};
use axum::Json;
use kiosk_tools::Operation;
use std::collections::BTreeMap;

fn number(field: &str, value: &Scalar) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| AppError::invalid(format!("{field} must be a number")))
}

pub async fn convert_handler(
    JsonOrForm(request): JsonOrForm<ConvertRequest>,
) -> Result<Json<ResultResponse>> {
    let value = number("value", &request.value)?;
    let value2 = request
        .value2
        .as_ref()
        .map(|v| number("value2", v))
        .transpose()?;

    let result = kiosk_tools::convert(&request.category, &request.conversion, value, value2)?;
    Ok(Json(ResultResponse { result }))
}

pub async fn conversion_options_handler() -> Json<BTreeMap<&'static str, Vec<&'static str>>> {
    Json(kiosk_tools::conversion_options())
}

pub async fn calculate_handler(
    JsonOrForm(request): JsonOrForm<CalculateRequest>,
) -> Result<Json<ResultResponse>> {
    let operation: Operation = request.operation.parse()?;
    let num1 = number("num1", &request.num1)?;
    let num2 = number("num2", &request.num2)?;

    let result = kiosk_tools::calculate(operation, num1, num2)?;
    Ok(Json(ResultResponse { result }))
}
