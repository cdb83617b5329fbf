//! Core engine for compound revenue projections

use crate::error::ValidationError;
use crate::input::{ProjectionInput, ValidatedInput};
use super::results::{ProjectionResult, ProjectionSummary, YearProjection};

/// Number of years projected past the starting revenue
pub const PROJECTION_YEARS: u32 = 5;

/// Check raw inputs and turn them into validated values.
///
/// Negative values are reported before a missing revenue, so a negative
/// revenue never shows up as "missing".
pub fn validate(input: &ProjectionInput) -> Result<ValidatedInput, ValidationError> {
    if matches!(input.starting_revenue, Some(r) if r < 0.0) {
        return Err(ValidationError::NegativeRevenue);
    }
    if input.annual_growth_rate_percent < 0.0 {
        return Err(ValidationError::NegativeGrowthRate);
    }

    let starting_revenue = input.starting_revenue.ok_or(ValidationError::MissingRevenue)?;

    if !starting_revenue.is_finite() {
        return Err(ValidationError::InvalidNumber { field: "Current revenue" });
    }
    if !input.annual_growth_rate_percent.is_finite() {
        return Err(ValidationError::InvalidNumber { field: "Annual growth rate" });
    }

    Ok(ValidatedInput {
        starting_revenue,
        annual_growth_rate_percent: input.annual_growth_rate_percent,
    })
}

/// Project revenue for each year of the horizon.
///
/// Each year compounds the prior year's unrounded revenue.
pub fn project(starting_revenue: f64, annual_growth_rate_percent: f64) -> Vec<YearProjection> {
    let growth = annual_growth_rate_percent / 100.0;
    let mut years = Vec::with_capacity(PROJECTION_YEARS as usize);
    let mut prior = starting_revenue;

    for year in 1..=PROJECTION_YEARS {
        let revenue = prior * (1.0 + growth);

        // Zero prior revenue has no defined percent change
        let year_over_year_growth_percent = if year == 1 || prior == 0.0 {
            0.0
        } else {
            (revenue - prior) / prior * 100.0
        };

        years.push(YearProjection {
            year,
            revenue,
            year_over_year_growth_percent,
        });
        prior = revenue;
    }

    years
}

/// Summary statistics for a set of projected years.
///
/// The average growth is the compound rate over the horizon, not the mean
/// of the yearly percentages.
pub fn summarize(projections: &[YearProjection], growth_fraction: f64) -> ProjectionSummary {
    let total_revenue = projections.iter().map(|y| y.revenue).sum();
    let average_annual_growth_percent =
        ((1.0 + growth_fraction).powi(PROJECTION_YEARS as i32) - 1.0) * 100.0;

    ProjectionSummary {
        total_revenue,
        average_annual_growth_percent,
    }
}

/// Stateless projection engine
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionEngine;

impl ProjectionEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, input: &ProjectionInput) -> Result<ValidatedInput, ValidationError> {
        validate(input)
    }

    /// Validate, project and summarize in one call
    pub fn calculate(&self, input: &ProjectionInput) -> Result<ProjectionResult, ValidationError> {
        let validated = validate(input)?;
        let years = project(validated.starting_revenue, validated.annual_growth_rate_percent);
        let summary = summarize(&years, validated.growth_fraction());

        log::debug!(
            "projected {:.2} at {}% -> total {:.2}, average growth {:.2}%",
            validated.starting_revenue,
            validated.annual_growth_rate_percent,
            summary.total_revenue,
            summary.average_annual_growth_percent,
        );

        Ok(ProjectionResult {
            input: validated,
            years,
            summary,
        })
    }
}
