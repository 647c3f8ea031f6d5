pub mod investment_service;

pub use investment_service::{InvestmentFlows, InvestmentService};

use crate::errors::PlanError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error("{0}")]
    Invalid(String),
}
