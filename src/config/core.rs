use serde::{Deserialize, Serialize};

use super::thresholds::ShapeDetectionConfig;

/// Root configuration structure for chartshape
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ChartshapeConfig {
    /// Shape detection thresholds
    #[serde(default)]
    pub shapes: Option<ShapeDetectionConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl ChartshapeConfig {
    /// Detection thresholds, falling back to defaults when the section is absent
    pub fn shape_config(&self) -> ShapeDetectionConfig {
        self.shapes.clone().unwrap_or_default()
    }

    /// Preferred output format name from the `[output]` section
    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}
