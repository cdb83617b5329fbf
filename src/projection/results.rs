//! Output structures for revenue projections

use serde::{Deserialize, Serialize};

use crate::input::ValidatedInput;

/// One projected year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearProjection {
    /// Projection year (1-indexed; year 0 is the starting revenue)
    pub year: u32,

    /// Projected revenue, unrounded
    pub revenue: f64,

    /// Change from the prior year in percent; 0 for year 1
    pub year_over_year_growth_percent: f64,
}

/// Aggregate statistics over the projected years
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectionSummary {
    /// Sum of projected revenue over years 1-5 (starting revenue excluded)
    pub total_revenue: f64,

    /// Compound growth over the whole horizon, in percent
    pub average_annual_growth_percent: f64,
}

/// Complete result of one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub input: ValidatedInput,
    pub years: Vec<YearProjection>,
    pub summary: ProjectionSummary,
}

impl ProjectionResult {
    /// Revenue in the last projected year
    pub fn final_revenue(&self) -> f64 {
        self.years.last().map(|y| y.revenue).unwrap_or(0.0)
    }

    /// Look up a projected year (1-indexed)
    pub fn year(&self, year: u32) -> Option<&YearProjection> {
        self.years.iter().find(|y| y.year == year)
    }
}
