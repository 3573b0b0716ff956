use super::Scalar;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    pub category: String,
    pub conversion: String,
    pub value: Scalar,
    #[serde(default)]
    pub value2: Option<Scalar>,
}

#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    pub operation: String,
    pub num1: Scalar,
    pub num2: Scalar,
}

#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub result: f64,
}
