//! Scenario files and batch runs

mod loader;
mod runner;

pub use loader::{load_scenarios, load_scenarios_from_reader, Scenario};
pub use runner::{rate_range, write_outcomes_csv, ScenarioOutcome, ScenarioRunner, MAX_SWEEP_RATES};
