use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("unknown conversion '{conversion}' for category '{category}'")]
    UnknownConversion { category: String, conversion: String },
    #[error("conversion '{0}' needs a second value")]
    MissingOperand(String),
    #[error("conversion result is not a finite number")]
    NonFinite,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculateError {
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is not a finite number")]
    NonFinite,
}
