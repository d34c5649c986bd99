use crate::error::{OverlayError, Result};
use crate::format::{MetricFormatter, DEFAULT_MAGNITUDE_DIGITS, DEFAULT_PERCENT_DIGITS};
use serde::{Deserialize, Serialize};

/// Upper bound for configurable fractional digits
pub const MAX_FRACTION_DIGITS: usize = 9;

/// Configuration for overlay generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayConfig {
    /// Fractional digits kept for percentage columns
    pub percent_digits: usize,

    /// Fractional digits kept for raw cost columns
    pub magnitude_digits: usize,

    /// Place the column caption row on the first line
    pub emit_header: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            percent_digits: DEFAULT_PERCENT_DIGITS,
            magnitude_digits: DEFAULT_MAGNITUDE_DIGITS,
            emit_header: true,
        }
    }
}

impl OverlayConfig {
    /// Default precision, no caption row (for renderers with their own header)
    #[must_use]
    pub fn without_header() -> Self {
        Self {
            emit_header: false,
            ..Default::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.percent_digits > MAX_FRACTION_DIGITS {
            return Err(OverlayError::invalid_config(format!(
                "percent_digits ({}) cannot exceed {MAX_FRACTION_DIGITS}",
                self.percent_digits
            )));
        }

        if self.magnitude_digits > MAX_FRACTION_DIGITS {
            return Err(OverlayError::invalid_config(format!(
                "magnitude_digits ({}) cannot exceed {MAX_FRACTION_DIGITS}",
                self.magnitude_digits
            )));
        }

        Ok(())
    }

    #[must_use]
    pub const fn formatter(&self) -> MetricFormatter {
        MetricFormatter::new(self.percent_digits, self.magnitude_digits)
    }
}
