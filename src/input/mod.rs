//! Projection inputs and form parsing

mod data;
mod growth_rate;

pub use data::{ProjectionInput, ValidatedInput};
pub use growth_rate::{GrowthRate, DEFAULT_GROWTH_RATE, RATE_STEP, SLIDER_MAX, SLIDER_MIN};
