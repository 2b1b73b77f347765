use thiserror::Error as ThisError;

use crate::models::SymbolError;
use crate::services::finra::FinraError;

#[derive(ThisError, Debug)]
pub enum DashboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    InvalidSymbol(#[from] SymbolError),

    #[error(transparent)]
    Finra(#[from] FinraError),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
