//! Merge configuration.
//!
//! Loadable from YAML; every field has a default so partial files work:
//!
//! ```yaml
//! merge_direction: out
//! intersection_prefix: "x_"
//! length_tolerance: 1.0e-6
//! edge_index: rtree
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::index::EdgeIndexKind;
use crate::merge::MergeDirection;

/// Config load error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigLoadError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

fn default_intersection_prefix() -> String {
    "intersection_".to_string()
}

fn default_length_tolerance() -> f64 {
    1e-6
}

/// Parameters shared by point and graph merges.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Connection policy for directed graphs.
    /// Default: both
    #[serde(default)]
    pub merge_direction: MergeDirection,

    /// Name stem for intersection nodes; the point identifier is appended.
    /// Default: "intersection_"
    #[serde(default = "default_intersection_prefix")]
    pub intersection_prefix: String,

    /// Relative tolerance for split length checks.
    /// Default: 1e-6
    #[serde(default = "default_length_tolerance")]
    pub length_tolerance: f64,

    /// Nearest-edge oracle.
    /// Default: rtree
    #[serde(default)]
    pub edge_index: EdgeIndexKind,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            merge_direction: MergeDirection::default(),
            intersection_prefix: default_intersection_prefix(),
            length_tolerance: default_length_tolerance(),
            edge_index: EdgeIndexKind::default(),
        }
    }
}

impl MergeConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if !self.length_tolerance.is_finite() || self.length_tolerance < 0.0 {
            return Err(ConfigLoadError::Validation(format!(
                "length_tolerance must be a non-negative number, got {}",
                self.length_tolerance
            )));
        }
        if self.intersection_prefix.is_empty() {
            return Err(ConfigLoadError::Validation(
                "intersection_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Builder-style setter for the direction policy.
    pub fn with_merge_direction(mut self, direction: MergeDirection) -> Self {
        self.merge_direction = direction;
        self
    }

    /// Builder-style setter for the intersection node prefix.
    pub fn with_intersection_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.intersection_prefix = prefix.into();
        self
    }

    /// Builder-style setter for the split tolerance.
    pub fn with_length_tolerance(mut self, tolerance: f64) -> Self {
        self.length_tolerance = tolerance;
        self
    }

    /// Builder-style setter for the nearest-edge oracle.
    pub fn with_edge_index(mut self, kind: EdgeIndexKind) -> Self {
        self.edge_index = kind;
        self
    }
}
