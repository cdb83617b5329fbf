//! Calculator configuration loaded from JSON

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::export::DEFAULT_EXPORT_FILE_NAME;
use crate::input::DEFAULT_GROWTH_RATE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Growth rate (percent) a new or reset calculator starts with
    #[serde(default = "default_growth_rate")]
    pub default_growth_rate: f64,

    /// File name used when exporting without an explicit path
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
}

fn default_growth_rate() -> f64 { DEFAULT_GROWTH_RATE }
fn default_export_file_name() -> String { DEFAULT_EXPORT_FILE_NAME.to_string() }

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_growth_rate: default_growth_rate(),
            export_file_name: default_export_file_name(),
        }
    }
}

impl CalculatorConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let config: Self = serde_json::from_reader(reader)?;
        config.check()?;
        log::debug!("loaded calculator config from {}", path.as_ref().display());
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        if !self.default_growth_rate.is_finite() || self.default_growth_rate < 0.0 {
            return Err(Error::Config(format!(
                "default_growth_rate must be a non-negative number, got {}",
                self.default_growth_rate
            )));
        }
        if self.export_file_name.trim().is_empty() {
            return Err(Error::Config("export_file_name must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = CalculatorConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CalculatorConfig::default());
        assert_eq!(config.default_growth_rate, 10.0);
        assert_eq!(config.export_file_name, "revenue_projections.csv");
    }

    #[test]
    fn test_partial_override() {
        let config = CalculatorConfig::from_json_str(r#"{"default_growth_rate": 4.5}"#).unwrap();
        assert_eq!(config.default_growth_rate, 4.5);
        assert_eq!(config.export_file_name, "revenue_projections.csv");
    }

    #[test]
    fn test_rejects_negative_rate() {
        let err = CalculatorConfig::from_json_str(r#"{"default_growth_rate": -1}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rejects_blank_file_name() {
        let err = CalculatorConfig::from_json_str(r#"{"export_file_name": "  "}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = CalculatorConfig::from_json_str("{").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
