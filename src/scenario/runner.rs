//! Batch projections over many independent scenarios
//!
//! Projections share no state, so scenarios fan out over the rayon pool and
//! come back in input order.

use std::io::Write;

use rayon::prelude::*;
use serde::Serialize;

use crate::error::{Error, Result, ValidationError};
use crate::input::ProjectionInput;
use crate::projection::{ProjectionEngine, ProjectionResult};
use super::loader::Scenario;

/// Result of projecting one scenario
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub scenario_id: u32,
    pub input: ProjectionInput,
    pub result: std::result::Result<ProjectionResult, ValidationError>,
}

/// Runs scenarios through a shared engine
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let outcomes = runner.run_all(&load_scenarios("scenarios.csv")?);
/// write_outcomes_csv(std::io::stdout(), &outcomes)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(&self, scenario: &Scenario) -> ScenarioOutcome {
        let result = self.engine.calculate(&scenario.input);
        if let Err(e) = &result {
            log::warn!("scenario {} rejected: {}", scenario.scenario_id, e);
        }

        ScenarioOutcome {
            scenario_id: scenario.scenario_id,
            input: scenario.input,
            result,
        }
    }

    /// Project every scenario in parallel; a rejected scenario does not stop the rest
    pub fn run_all(&self, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
        let outcomes: Vec<ScenarioOutcome> = scenarios.par_iter().map(|s| self.run(s)).collect();

        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        log::info!(
            "ran {} scenarios ({} ok, {} rejected)",
            outcomes.len(),
            outcomes.len() - failed,
            failed
        );
        outcomes
    }

    /// Project one starting revenue across several growth rates.
    ///
    /// Scenario ids are assigned 1.. in rate order.
    pub fn sweep(&self, starting_revenue: f64, rates: &[f64]) -> Vec<ScenarioOutcome> {
        let scenarios: Vec<Scenario> = rates
            .iter()
            .zip(1u32..)
            .map(|(&rate, scenario_id)| Scenario {
                scenario_id,
                input: ProjectionInput::new(Some(starting_revenue), rate),
            })
            .collect();

        self.run_all(&scenarios)
    }
}

/// Most growth rates a single sweep may produce
pub const MAX_SWEEP_RATES: usize = 10_000;

/// Growth rates from `from` to `to` inclusive, `step` apart
pub fn rate_range(from: f64, to: f64, step: f64) -> Result<Vec<f64>> {
    if !step.is_finite() || step <= 0.0 || !from.is_finite() || !to.is_finite() || to < from {
        return Err(Error::Config(format!(
            "invalid rate range {from}..={to} step {step}"
        )));
    }

    // Index-based so repeated addition does not drift past `to`
    let count = ((to - from) / step + 1e-9).floor() + 1.0;
    if !count.is_finite() || count > MAX_SWEEP_RATES as f64 {
        return Err(Error::Config(format!(
            "rate range {from}..={to} step {step} exceeds {MAX_SWEEP_RATES} rates"
        )));
    }

    let count = count as usize;
    Ok((0..count).map(|i| from + step * i as f64).collect())
}

/// Summary row written per scenario
#[derive(Debug, Serialize)]
struct OutcomeRow {
    #[serde(rename = "ScenarioID")]
    scenario_id: u32,
    #[serde(rename = "StartingRevenue")]
    starting_revenue: Option<f64>,
    #[serde(rename = "GrowthRate")]
    growth_rate: f64,
    #[serde(rename = "Year5Revenue")]
    year5_revenue: Option<String>,
    #[serde(rename = "TotalRevenue")]
    total_revenue: Option<String>,
    #[serde(rename = "AverageAnnualGrowth")]
    average_annual_growth: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl From<&ScenarioOutcome> for OutcomeRow {
    fn from(outcome: &ScenarioOutcome) -> Self {
        let (year5_revenue, total_revenue, average_annual_growth, error) = match &outcome.result {
            Ok(r) => (
                Some(format!("{:.2}", r.final_revenue())),
                Some(format!("{:.2}", r.summary.total_revenue)),
                Some(format!("{:.2}", r.summary.average_annual_growth_percent)),
                None,
            ),
            Err(e) => (None, None, None, Some(e.to_string())),
        };

        Self {
            scenario_id: outcome.scenario_id,
            starting_revenue: outcome.input.starting_revenue,
            growth_rate: outcome.input.annual_growth_rate_percent,
            year5_revenue,
            total_revenue,
            average_annual_growth,
            error,
        }
    }
}

/// Write one summary row per outcome
pub fn write_outcomes_csv<W: Write>(writer: W, outcomes: &[ScenarioOutcome]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for outcome in outcomes {
        csv_writer.serialize(OutcomeRow::from(outcome))?;
    }
    csv_writer.flush()?;
    Ok(())
}
