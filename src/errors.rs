use thiserror::Error;

/// Validation failures raised while constructing a declaration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeclarationError {
    #[error("{field} must not be negative (got {value})")]
    NegativeAmount { field: &'static str, value: f64 },
    #[error("{field} must be a finite number")]
    NonFiniteAmount { field: &'static str },
    #[error("quantity must be at least 1")]
    ZeroQuantity,
    #[error("recurrence interval must be at least one month (got {0})")]
    NonPositiveInterval(u32),
}

/// Error type that captures plan loading and storage failures.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid declaration: {0}")]
    Declaration(#[from] DeclarationError),
}
