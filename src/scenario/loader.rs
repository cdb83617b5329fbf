//! Load projection scenarios from CSV

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::Reader;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::input::ProjectionInput;

/// One named set of inputs to project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub scenario_id: u32,
    pub input: ProjectionInput,
}

/// Raw CSV row matching the scenario file columns
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "ScenarioID")]
    scenario_id: u32,
    #[serde(rename = "StartingRevenue")]
    starting_revenue: String,
    #[serde(rename = "GrowthRate")]
    growth_rate: String,
}

impl CsvRow {
    fn into_scenario(self) -> Result<Scenario> {
        let input = ProjectionInput::from_text(&self.starting_revenue, &self.growth_rate)
            .map_err(|e| Error::Scenario {
                scenario_id: self.scenario_id,
                message: e.to_string(),
            })?;

        Ok(Scenario {
            scenario_id: self.scenario_id,
            input,
        })
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let file = File::open(path.as_ref())?;
    let scenarios = load_scenarios_from_reader(file)?;
    log::info!("loaded {} scenarios from {}", scenarios.len(), path.as_ref().display());
    Ok(scenarios)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario()?);
    }

    Ok(scenarios)
}
