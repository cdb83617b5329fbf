//! Annual growth rate held once and shown through two controls
//!
//! The slider and the number box both read and write the same value, so they
//! can never disagree.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Lowest slider position (percent)
pub const SLIDER_MIN: f64 = 0.0;

/// Highest slider position (percent)
pub const SLIDER_MAX: f64 = 100.0;

/// Slider and number box increment (percent)
pub const RATE_STEP: f64 = 0.01;

/// Rate a fresh or reset calculator starts with (percent)
pub const DEFAULT_GROWTH_RATE: f64 = 10.0;

/// Annual growth rate in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrowthRate(f64);

impl GrowthRate {
    pub fn new(percent: f64) -> Self {
        Self(percent)
    }

    pub fn percent(&self) -> f64 {
        self.0
    }

    pub fn fraction(&self) -> f64 {
        self.0 / 100.0
    }

    /// Slider input: clamped to the slider range and snapped to the step
    pub fn set_from_slider(&mut self, position: f64) {
        let clamped = position.clamp(SLIDER_MIN, SLIDER_MAX);
        // Divide by the step count per percent so snapped values stay exact decimals
        self.0 = (clamped / RATE_STEP).round() / RATE_STEP.recip();
    }

    /// Number box input: stored as typed so negative values reach validation
    pub fn set_from_text(&mut self, text: &str) -> Result<(), ValidationError> {
        let value = text
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::InvalidNumber { field: "Annual growth rate" })?;
        self.0 = value;
        Ok(())
    }

    /// Where the slider thumb sits for the current value
    pub fn slider_position(&self) -> f64 {
        if self.0.is_nan() {
            return SLIDER_MIN;
        }
        self.0.clamp(SLIDER_MIN, SLIDER_MAX)
    }

    /// Number box text for the current value
    pub fn number_text(&self) -> String {
        self.0.to_string()
    }
}

impl Default for GrowthRate {
    fn default() -> Self {
        Self(DEFAULT_GROWTH_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_is_ten_percent() {
        let rate = GrowthRate::default();
        assert_eq!(rate.percent(), 10.0);
        assert_eq!(rate.fraction(), 0.1);
    }

    #[test]
    fn test_slider_and_text_share_value() {
        let mut rate = GrowthRate::default();

        rate.set_from_slider(42.5);
        assert_eq!(rate.number_text(), "42.5");

        rate.set_from_text("7.25").unwrap();
        assert_eq!(rate.slider_position(), 7.25);
    }

    #[test]
    fn test_slider_clamps_and_snaps() {
        let mut rate = GrowthRate::default();

        rate.set_from_slider(150.0);
        assert_eq!(rate.percent(), 100.0);

        rate.set_from_slider(-3.0);
        assert_eq!(rate.percent(), 0.0);

        rate.set_from_slider(12.3456);
        assert_abs_diff_eq!(rate.percent(), 12.35, epsilon = 1e-9);
    }

    #[test]
    fn test_slider_values_land_on_steps() {
        let mut rate = GrowthRate::default();
        for &position in &[0.004, 0.005, 1.239, 33.333, 66.6666, 99.995] {
            rate.set_from_slider(position);
            let steps = rate.percent() / RATE_STEP;
            assert_abs_diff_eq!(steps, steps.round(), epsilon = 1e-6);

            // Whole steps print with at most two decimals
            let text = rate.number_text();
            let decimals = text.split('.').nth(1).map_or(0, str::len);
            assert!(decimals <= 2, "{position} snapped to {text}");
        }
    }

    #[test]
    fn test_text_keeps_out_of_range_values() {
        let mut rate = GrowthRate::default();
        rate.set_from_text("-5").unwrap();
        assert_eq!(rate.percent(), -5.0);
        assert_eq!(rate.slider_position(), 0.0);
    }

    #[test]
    fn test_bad_text_leaves_value_untouched() {
        let mut rate = GrowthRate::new(3.0);
        assert!(rate.set_from_text("abc").is_err());
        assert_eq!(rate.percent(), 3.0);
    }
}
