//! Line-chart dataset for projected revenue
//!
//! Field names follow the Chart.js data object so the JSON can be handed to a
//! browser chart as-is.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::projection::ProjectionResult;

const DATASET_LABEL: &str = "Projected Revenue ($)";
const BORDER_COLOR: &str = "rgba(75, 192, 192, 1)";
const BACKGROUND_COLOR: &str = "rgba(75, 192, 192, 0.2)";
const LINE_TENSION: f64 = 0.4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    pub fill: bool,
    pub tension: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartData {
    /// One point per projected year, starting revenue excluded
    pub fn from_result(result: &ProjectionResult) -> Self {
        let labels = result.years.iter().map(|y| format!("Year {}", y.year)).collect();
        let data = result.years.iter().map(|y| y.revenue).collect();

        Self {
            labels,
            datasets: vec![ChartDataset {
                label: DATASET_LABEL.to_string(),
                data,
                border_color: BORDER_COLOR.to_string(),
                background_color: BACKGROUND_COLOR.to_string(),
                fill: true,
                tension: LINE_TENSION,
            }],
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path.as_ref())?);
        serde_json::to_writer_pretty(writer, self)?;
        log::info!("wrote chart data to {}", path.as_ref().display());
        Ok(())
    }
}
