//! Raw and validated projection inputs

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use super::growth_rate::GrowthRate;

/// Inputs exactly as entered, before validation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Current revenue in dollars; `None` when the field was left empty
    pub starting_revenue: Option<f64>,

    /// Annual growth rate as a percentage (10.0 = 10%)
    pub annual_growth_rate_percent: f64,
}

impl ProjectionInput {
    pub fn new(starting_revenue: Option<f64>, annual_growth_rate_percent: f64) -> Self {
        Self {
            starting_revenue,
            annual_growth_rate_percent,
        }
    }

    /// Build an input from form text.
    ///
    /// Blank revenue text means the value is absent. Growth rate text is
    /// required; anything that is not a number is rejected.
    pub fn from_text(revenue: &str, growth_rate: &str) -> Result<Self, ValidationError> {
        let starting_revenue = parse_optional(revenue, "Current revenue")?;
        let annual_growth_rate_percent = parse_optional(growth_rate, "Annual growth rate")?
            .ok_or(ValidationError::InvalidNumber { field: "Annual growth rate" })?;

        Ok(Self::new(starting_revenue, annual_growth_rate_percent))
    }

    /// Build an input from form text and an already-held growth rate
    pub fn from_form(revenue: &str, growth_rate: GrowthRate) -> Result<Self, ValidationError> {
        let starting_revenue = parse_optional(revenue, "Current revenue")?;
        Ok(Self::new(starting_revenue, growth_rate.percent()))
    }
}

/// Inputs that passed validation: both values finite and non-negative
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidatedInput {
    pub starting_revenue: f64,
    pub annual_growth_rate_percent: f64,
}

impl ValidatedInput {
    /// Growth rate as a decimal (0.10 for 10%)
    pub fn growth_fraction(&self) -> f64 {
        self.annual_growth_rate_percent / 100.0
    }
}

fn parse_optional(text: &str, field: &'static str) -> Result<Option<f64>, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| ValidationError::InvalidNumber { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_revenue_is_absent() {
        let input = ProjectionInput::from_text("   ", "10").unwrap();
        assert_eq!(input.starting_revenue, None);
        assert_eq!(input.annual_growth_rate_percent, 10.0);
    }

    #[test]
    fn test_text_is_trimmed_and_parsed() {
        let input = ProjectionInput::from_text(" 2500.75 ", "3.25").unwrap();
        assert_eq!(input.starting_revenue, Some(2500.75));
        assert_eq!(input.annual_growth_rate_percent, 3.25);
    }

    #[test]
    fn test_negative_text_parses() {
        // Negativity is the engine's call, not the parser's
        let input = ProjectionInput::from_text("-1", "10").unwrap();
        assert_eq!(input.starting_revenue, Some(-1.0));
    }

    #[test]
    fn test_garbage_rejected() {
        assert_eq!(
            ProjectionInput::from_text("12k", "10"),
            Err(ValidationError::InvalidNumber { field: "Current revenue" })
        );
        assert_eq!(
            ProjectionInput::from_text("100", ""),
            Err(ValidationError::InvalidNumber { field: "Annual growth rate" })
        );
    }

    #[test]
    fn test_from_form_uses_held_rate() {
        let input = ProjectionInput::from_form("100", GrowthRate::new(7.5)).unwrap();
        assert_eq!(input.annual_growth_rate_percent, 7.5);
    }

    #[test]
    fn test_growth_fraction() {
        let v = ValidatedInput {
            starting_revenue: 1.0,
            annual_growth_rate_percent: 12.5,
        };
        assert_eq!(v.growth_fraction(), 0.125);
    }
}
