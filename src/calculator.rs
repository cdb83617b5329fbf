//! Calculator session: form values, last result and error banner
//!
//! The engine itself is pure; this is the state a front end keeps between
//! user actions. Every successful calculation replaces the stored result with
//! a fresh immutable `ProjectionResult`.

use std::path::{Path, PathBuf};

use crate::config::CalculatorConfig;
use crate::error::{Result, ValidationError};
use crate::export;
use crate::input::{GrowthRate, ProjectionInput};
use crate::projection::{ProjectionEngine, ProjectionResult, ProjectionSummary, YearProjection};

#[derive(Debug, Clone)]
pub struct Calculator {
    config: CalculatorConfig,
    engine: ProjectionEngine,

    /// Revenue field text as typed
    revenue_text: String,

    /// Single growth rate behind both the slider and the number box
    growth_rate: GrowthRate,

    /// Last successful calculation
    result: Option<ProjectionResult>,

    /// Message for the inline error banner
    error: Option<ValidationError>,
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        let growth_rate = GrowthRate::new(config.default_growth_rate);
        Self {
            config,
            engine: ProjectionEngine::new(),
            revenue_text: String::new(),
            growth_rate,
            result: None,
            error: None,
        }
    }

    pub fn set_revenue_text(&mut self, text: impl Into<String>) {
        self.revenue_text = text.into();
    }

    pub fn revenue_text(&self) -> &str {
        &self.revenue_text
    }

    pub fn growth_rate(&self) -> GrowthRate {
        self.growth_rate
    }

    pub fn growth_rate_mut(&mut self) -> &mut GrowthRate {
        &mut self.growth_rate
    }

    /// Run the engine on the current form values.
    ///
    /// A failed validation records the error and leaves the previous result
    /// on screen.
    pub fn calculate(&mut self) -> std::result::Result<&ProjectionResult, ValidationError> {
        let outcome = ProjectionInput::from_form(&self.revenue_text, self.growth_rate)
            .and_then(|input| self.engine.calculate(&input));

        match outcome {
            Ok(result) => {
                self.error = None;
                let stored: &ProjectionResult = self.result.insert(result);
                Ok(stored)
            }
            Err(e) => {
                log::debug!("calculation rejected: {}", e);
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Back to the state of a fresh calculator
    pub fn reset(&mut self) {
        self.revenue_text.clear();
        self.growth_rate = GrowthRate::new(self.config.default_growth_rate);
        self.result = None;
        self.error = None;
    }

    pub fn result(&self) -> Option<&ProjectionResult> {
        self.result.as_ref()
    }

    /// Projected years, empty before the first successful calculation
    pub fn results(&self) -> &[YearProjection] {
        self.result.as_ref().map(|r| r.years.as_slice()).unwrap_or(&[])
    }

    /// Summary of the last result, zeroed when there is none
    pub fn summary(&self) -> ProjectionSummary {
        self.result.as_ref().map(|r| r.summary).unwrap_or_default()
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// CSV text for the current result; `None` when nothing has been calculated
    pub fn export_csv(&self) -> Option<String> {
        self.result.as_ref().map(export::projection_csv)
    }

    /// Write the CSV export into `dir` under the configured file name.
    ///
    /// Does nothing and returns `None` when there are no results.
    pub fn export_to_dir(&self, dir: &Path) -> Result<Option<PathBuf>> {
        let Some(result) = self.result.as_ref() else {
            return Ok(None);
        };

        let path = dir.join(&self.config.export_file_name);
        export::export_to_path(&path, result)?;
        Ok(Some(path))
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fresh_state() {
        let calc = Calculator::default();
        assert_eq!(calc.revenue_text(), "");
        assert_eq!(calc.growth_rate().percent(), 10.0);
        assert!(calc.results().is_empty());
        assert_eq!(calc.summary(), ProjectionSummary::default());
        assert!(calc.error().is_none());
        assert!(calc.export_csv().is_none());
    }

    #[test]
    fn test_calculate_stores_result() {
        let mut calc = Calculator::default();
        calc.set_revenue_text("100");

        let total = calc.calculate().unwrap().summary.total_revenue;
        assert_abs_diff_eq!(total, 671.561, epsilon = 1e-9);
        assert_eq!(calc.results().len(), 5);
        assert!(calc.error().is_none());
    }

    #[test]
    fn test_error_keeps_previous_result() {
        let mut calc = Calculator::default();
        calc.set_revenue_text("100");
        calc.calculate().unwrap();

        calc.set_revenue_text("-1");
        assert_eq!(calc.calculate().unwrap_err(), ValidationError::NegativeRevenue);
        assert_eq!(calc.error(), Some(&ValidationError::NegativeRevenue));
        assert_eq!(calc.results().len(), 5);
        assert_eq!(calc.result().unwrap().input.starting_revenue, 100.0);
    }

    #[test]
    fn test_success_clears_error() {
        let mut calc = Calculator::default();
        assert_eq!(calc.calculate().unwrap_err(), ValidationError::MissingRevenue);
        assert_eq!(
            calc.error().map(|e| e.to_string()).as_deref(),
            Some("Please enter a valid input for current revenue.")
        );

        calc.set_revenue_text("50");
        calc.calculate().unwrap();
        assert!(calc.error().is_none());
    }

    #[test]
    fn test_negative_rate_from_number_box() {
        let mut calc = Calculator::default();
        calc.set_revenue_text("10");
        calc.growth_rate_mut().set_from_text("-5").unwrap();
        assert_eq!(calc.calculate().unwrap_err(), ValidationError::NegativeGrowthRate);
    }

    #[test]
    fn test_reset_restores_fresh_state() {
        let mut calc = Calculator::default();
        calc.set_revenue_text("100");
        calc.growth_rate_mut().set_from_slider(25.0);
        calc.calculate().unwrap();
        calc.set_revenue_text("-3");
        let _ = calc.calculate();

        calc.reset();

        assert_eq!(calc.revenue_text(), "");
        assert_eq!(calc.growth_rate().percent(), 10.0);
        assert!(calc.results().is_empty());
        assert_eq!(calc.summary(), ProjectionSummary::default());
        assert!(calc.error().is_none());
    }

    #[test]
    fn test_reset_uses_configured_rate() {
        let config = CalculatorConfig {
            default_growth_rate: 3.5,
            ..Default::default()
        };
        let mut calc = Calculator::new(config);
        calc.growth_rate_mut().set_from_slider(60.0);
        calc.reset();
        assert_eq!(calc.growth_rate().percent(), 3.5);
    }

    #[test]
    fn test_export_without_results_is_noop() {
        let calc = Calculator::default();
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(calc.export_to_dir(dir.path()).unwrap(), None);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_export_to_dir_writes_configured_file() {
        let config = CalculatorConfig {
            export_file_name: "q3_upside.csv".to_string(),
            ..Default::default()
        };
        let mut calc = Calculator::new(config);
        calc.set_revenue_text("100");
        calc.calculate().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = calc.export_to_dir(dir.path()).unwrap().unwrap();

        assert_eq!(path, dir.path().join("q3_upside.csv"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, export::projection_csv(calc.result().unwrap()));
        assert_eq!(Some(written), calc.export_csv());
    }

    #[test]
    fn test_export_matches_result() {
        let mut calc = Calculator::default();
        calc.set_revenue_text("100");
        calc.calculate().unwrap();

        let first = calc.export_csv().unwrap();
        assert_eq!(first, calc.export_csv().unwrap());
        assert!(first.contains("Total Revenue ($),671.56"));
    }
}
