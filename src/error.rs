//! Error types for the revenue calculator

use thiserror::Error;

/// Input problems reported back to the user as an inline message
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Revenue cannot be negative.")]
    NegativeRevenue,

    #[error("Growth rate cannot be negative.")]
    NegativeGrowthRate,

    #[error("Please enter a valid input for current revenue.")]
    MissingRevenue,

    /// Text that does not parse as a finite number
    #[error("{field} must be a number.")]
    InvalidNumber { field: &'static str },
}

/// Failures outside of input validation (files, encoders, config)
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Scenario {scenario_id}: {message}")]
    Scenario { scenario_id: u32, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
