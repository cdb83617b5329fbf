//! Projection engine for five-year revenue projections

mod engine;
mod results;

pub use engine::{project, summarize, validate, ProjectionEngine, PROJECTION_YEARS};
pub use results::{ProjectionResult, ProjectionSummary, YearProjection};
