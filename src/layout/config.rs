//! Layout configuration.
//!
//! Loaded from TOML (every field optional) and then overridden by CLI
//! flags. Example:
//!
//! ```toml
//! bin_count = 4
//! scaling_mode = "ABSOLUTE"
//! scale_nodes = true
//! show_files = true
//! reference_domain = 1000.0
//! utilization_thresholds = [0.5, 0.9, 1.0]
//! ```

use crate::utils::config::{DEFAULT_BIN_COUNT, DEFAULT_UTILIZATION_THRESHOLDS, MAX_BIN_COUNT};
use crate::utils::error::ConfigError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Which per-node load drives stack heights and the load domain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScalingMode {
    /// Sum of file sizes
    #[serde(alias = "absolute")]
    Absolute,

    /// Absolute load divided by capacity
    #[default]
    #[serde(alias = "relative")]
    Relative,
}

impl fmt::Display for ScalingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingMode::Absolute => write!(f, "ABSOLUTE"),
            ScalingMode::Relative => write!(f, "RELATIVE"),
        }
    }
}

/// Chart layout configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Number of equal-width bins over the load domain
    pub bin_count: usize,

    pub scaling_mode: ScalingMode,

    /// Stack nodes by their load instead of one unit per node
    pub scale_nodes: bool,

    /// Compute per-file sub-segments for every node
    pub show_files: bool,

    /// Fixed upper bound for binning instead of the data-driven maximum
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_domain: Option<f64>,

    /// Ascending relative-load thresholds for utilization bands
    pub utilization_thresholds: Vec<f64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            bin_count: DEFAULT_BIN_COUNT,
            scaling_mode: ScalingMode::default(),
            scale_nodes: false,
            show_files: false,
            reference_domain: None,
            utilization_thresholds: DEFAULT_UTILIZATION_THRESHOLDS.to_vec(),
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bin_count(mut self, bin_count: usize) -> Self {
        self.bin_count = bin_count;
        self
    }

    pub fn with_scaling_mode(mut self, scaling_mode: ScalingMode) -> Self {
        self.scaling_mode = scaling_mode;
        self
    }

    pub fn with_scale_nodes(mut self, scale_nodes: bool) -> Self {
        self.scale_nodes = scale_nodes;
        self
    }

    pub fn with_show_files(mut self, show_files: bool) -> Self {
        self.show_files = show_files;
        self
    }

    pub fn with_reference_domain(mut self, reference_domain: Option<f64>) -> Self {
        self.reference_domain = reference_domain;
        self
    }

    /// Check the configuration before it reaches the layout engine
    ///
    /// # Errors
    /// * `ConfigError::Invalid` - zero or oversized bin count, non-positive
    ///   reference domain, or unsorted thresholds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bin_count == 0 {
            return Err(ConfigError::Invalid("bin_count must be greater than 0".to_string()));
        }

        if self.bin_count > MAX_BIN_COUNT {
            return Err(ConfigError::Invalid(format!(
                "bin_count is too large (max {})",
                MAX_BIN_COUNT
            )));
        }

        if let Some(domain) = self.reference_domain {
            if !domain.is_finite() || domain <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "reference_domain must be a positive number, got {}",
                    domain
                )));
            }
        }

        if self.utilization_thresholds.iter().any(|t| !t.is_finite()) {
            return Err(ConfigError::Invalid(
                "utilization_thresholds must be finite".to_string(),
            ));
        }

        if self.utilization_thresholds.windows(2).any(|w| w[0] > w[1]) {
            return Err(ConfigError::Invalid(
                "utilization_thresholds must be in ascending order".to_string(),
            ));
        }

        Ok(())
    }
}

/// Load a layout config from a TOML file
///
/// # Arguments
/// * `path` - Path to the TOML configuration file
///
/// # Returns
/// Parsed and validated LayoutConfig; missing fields take their defaults
///
/// # Errors
/// * `ConfigError::ReadFailed` - If file cannot be read
/// * `ConfigError::ParseFailed` - If TOML is invalid
/// * `ConfigError::Invalid` - If values are out of range
pub fn load_layout_config(path: impl AsRef<Path>) -> Result<LayoutConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: LayoutConfig = toml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: LayoutConfig = toml::from_str("bin_count = 3\nscaling_mode = \"absolute\"").unwrap();

        assert_eq!(config.bin_count, 3);
        assert_eq!(config.scaling_mode, ScalingMode::Absolute);
        assert!(!config.scale_nodes);
        assert_eq!(config.utilization_thresholds, DEFAULT_UTILIZATION_THRESHOLDS.to_vec());
    }

    #[test]
    fn test_validate_rejects_zero_bins() {
        let config = LayoutConfig::new().with_bin_count(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_domain() {
        assert!(LayoutConfig::new().with_reference_domain(Some(0.0)).validate().is_err());
        assert!(LayoutConfig::new()
            .with_reference_domain(Some(f64::NAN))
            .validate()
            .is_err());
        assert!(LayoutConfig::new().with_reference_domain(Some(1000.0)).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unsorted_thresholds() {
        let config = LayoutConfig {
            utilization_thresholds: vec![0.9, 0.5],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
