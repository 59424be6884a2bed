//! Reporter configuration and validation.

use std::error::Error;
use std::fmt;

use crate::units::METRES_PER_KILOMETRE;

/// Configuration for a [`StatsReporter`](crate::StatsReporter).
#[derive(Clone, Debug, PartialEq)]
pub struct ReportConfig {
    /// Rounded distances below this many metres are written in metres,
    /// the rest in whole kilometres. Default: 1000.
    pub kilometre_threshold: f64,
    /// Write each snapshot's elapsed-time line. Default: true.
    pub emit_time_lines: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            kilometre_threshold: METRES_PER_KILOMETRE,
            emit_time_lines: true,
        }
    }
}

impl ReportConfig {
    /// Check the configuration's invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let value = self.kilometre_threshold;
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::InvalidKilometreThreshold { value });
        }
        Ok(())
    }
}

/// Errors detected by [`ReportConfig::validate`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// kilometre_threshold is NaN, infinite, zero, or negative.
    InvalidKilometreThreshold {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKilometreThreshold { value } => {
                write!(f, "kilometre_threshold must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}
