//! Classify the spatial distribution of bodies around the ecliptic into one
//! of the classical chart shape patterns: Bundle, Bucket, Bowl, Locomotive,
//! Seesaw, Splash and Splay.
//!
//! The library is a pure function from a set of positions (and optional
//! thresholds) to a [`ShapePattern`]. It computes no ephemerides and renders
//! nothing.

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod geometry;
pub mod io;
pub mod shapes;

// Re-export commonly used types
pub use crate::core::{
    Cluster, Element, ElementBalance, Error, HemisphereBalance, Modality, ModalityBalance,
    PatternSubType, PatternType, PlanetPosition, Result, ShapePattern,
};

pub use crate::config::{ChartshapeConfig, ShapeDetectionConfig};

pub use crate::geometry::{
    arc_contains, build_clusters, circular_distance, compute_gaps, midpoint, normalize,
};

pub use crate::shapes::{classify, classify_with_config, ChartLayout, MIN_POSITIONS};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
