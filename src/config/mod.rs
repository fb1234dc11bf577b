//! Configuration for chartshape.
//!
//! Thresholds live in [`ShapeDetectionConfig`]; the root [`ChartshapeConfig`]
//! mirrors the layout of `.chartshape.toml`:
//!
//! ```toml
//! [shapes]
//! bundle_max_span = 120.0
//! seesaw_min_gap = 60.0
//!
//! [output]
//! default_format = "terminal"
//! ```

mod core;
mod loader;
mod thresholds;

pub use self::core::{ChartshapeConfig, OutputConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use thresholds::ShapeDetectionConfig;

/// Commented template written by `chartshape init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Chartshape Configuration

[shapes]
# All bodies inside this span form a Bundle
bundle_max_span = 120.0
# All bodies inside this span (and wider than a Bundle) form a Bowl
bowl_max_span = 180.0
# Combined width of the two gaps flanking a Bucket handle
bucket_min_gap = 120.0
# Gap that splits the two groups of a Seesaw
seesaw_min_gap = 60.0
# Void width accepted for a Locomotive
locomotive_min_void = 90.0
locomotive_max_void = 135.0
# Separation of Seesaw cluster centers
seesaw_min_separation = 150.0
seesaw_max_separation = 210.0
# Splash when stddev(gaps) <= ratio * mean(gaps)
splash_max_dispersion = 0.6
# Percent of bodies on one side that makes a Bowl Eastern/Western
hemisphere_dominance = 65.0
# Widest spacing between the two bodies of a Double bucket handle
double_handle_max_separation = 10.0

[output]
default_format = "terminal"
"#;
