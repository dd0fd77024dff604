//! Configuration for the ECG processing pipeline.
//!
//! Defaults match the recordings the pipeline was tuned for. A TOML file may
//! override any subset of the fields:
//!
//! ```toml
//! [filter]
//! alpha = 0.2
//!
//! [peaks]
//! threshold = 45.0
//! ```

use std::fs;
use std::path::Path;

use log::warn;
use serde::Deserialize;

use crate::constants::{DEFAULT_ALPHA, DEFAULT_PEAK_THRESHOLD};
use crate::error::{EcgError, Result};

/// Pipeline-wide configuration
///
/// # Example
/// ```
/// use rwave::config::PipelineConfig;
///
/// let mut config = PipelineConfig::default();
/// config.filter.alpha = 1.0;
/// assert_eq!(config.peaks.threshold, 50.0);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Low-pass smoothing configuration
    pub filter: FilterConfig,
    /// Peak detection configuration
    pub peaks: PeakConfig,
}

/// Low-pass (EMA) filter configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Smoothing factor, conventionally in (0, 1]. 1.0 disables smoothing.
    pub alpha: f64,
}

/// Peak detection configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PeakConfig {
    /// Minimum amplitude (exclusive) for a local maximum to count as a peak
    pub threshold: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl Default for PeakConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_PEAK_THRESHOLD,
        }
    }
}

impl PipelineConfig {
    /// Parse a configuration from TOML text; missing fields take defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| EcgError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Reject non-finite parameters.
    ///
    /// An alpha outside (0, 1] is accepted with a warning.
    pub fn validate(&self) -> Result<()> {
        if !self.filter.alpha.is_finite() {
            return Err(EcgError::Config(format!(
                "filter alpha must be finite, got {}",
                self.filter.alpha
            )));
        }
        if !self.peaks.threshold.is_finite() {
            return Err(EcgError::Config(format!(
                "peak threshold must be finite, got {}",
                self.peaks.threshold
            )));
        }
        if self.filter.alpha <= 0.0 || self.filter.alpha > 1.0 {
            warn!(
                "Filter alpha {} is outside (0, 1]; output may not be a smoothed signal",
                self.filter.alpha
            );
        }
        Ok(())
    }
}
