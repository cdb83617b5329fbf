//! Revenue Upside - five-year compound revenue projections
//!
//! This library provides:
//! - Input validation and the projection engine (yearly revenue and summary)
//! - A calculator session with calculate / reset / export
//! - Text table, chart dataset and CSV export views
//! - Parallel batch runs over scenario files

pub mod error;
pub mod config;
pub mod input;
pub mod projection;
pub mod calculator;
pub mod export;
pub mod display;
pub mod scenario;

// Re-export commonly used types
pub use error::{Error, Result, ValidationError};
pub use config::CalculatorConfig;
pub use input::{GrowthRate, ProjectionInput, ValidatedInput};
pub use projection::{ProjectionEngine, ProjectionResult, ProjectionSummary, YearProjection};
pub use calculator::Calculator;
pub use scenario::ScenarioRunner;
