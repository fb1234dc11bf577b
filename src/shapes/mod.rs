//! Shape pattern classification.
//!
//! Positions flow one way through this module:
//!
//! - **layout.rs**: validation, normalization, sorting, gaps and span
//! - **detectors.rs**: ordered pattern detectors, first match wins
//! - **stats.rs**: hemisphere, element and modality distributions
//! - **catalog.rs**: static names, descriptions and keywords
//!
//! Classification is a pure function of the position multiset and the
//! thresholds. Nothing is cached between calls, so it is safe to call from
//! any number of threads at once.

pub mod catalog;
pub mod detectors;
pub mod layout;
pub mod stats;

pub use catalog::{describe, PatternDescriptor};
pub use detectors::{detect, Detection, Detector, DETECTORS};
pub use layout::{ChartLayout, MIN_POSITIONS};

use crate::config::ShapeDetectionConfig;
use crate::core::{PlanetPosition, Result, ShapePattern};

/// Classify `positions` with the default thresholds.
pub fn classify(positions: &[PlanetPosition]) -> Result<ShapePattern> {
    classify_with_config(positions, &ShapeDetectionConfig::default())
}

/// Classify `positions` into a shape pattern.
///
/// # Errors
///
/// - [`Error::InvalidPosition`](crate::core::Error::InvalidPosition) when any
///   longitude is NaN or infinite
/// - [`Error::InsufficientData`](crate::core::Error::InsufficientData) when
///   fewer than [`MIN_POSITIONS`] bodies are supplied
///
/// # Examples
///
/// ```
/// use chartshape::{classify, PatternType, PlanetPosition};
///
/// let positions: Vec<PlanetPosition> = [10.0, 20.0, 30.0, 40.0, 50.0]
///     .iter()
///     .enumerate()
///     .map(|(i, &lon)| PlanetPosition::new(format!("body{i}"), lon))
///     .collect();
///
/// let pattern = classify(&positions).unwrap();
/// assert_eq!(pattern.pattern_type, PatternType::Bundle);
/// assert_eq!(pattern.span, 40.0);
/// ```
pub fn classify_with_config(
    positions: &[PlanetPosition],
    config: &ShapeDetectionConfig,
) -> Result<ShapePattern> {
    let layout = ChartLayout::from_positions(positions)?;
    log::debug!(
        "Classifying {} bodies: span {:.2}, widest gap {:.2}",
        layout.len(),
        layout.span(),
        layout.max_gap()
    );

    let detection = detect(&layout, config);
    log::debug!(
        "Matched {}{}",
        detection.pattern,
        detection
            .sub_type
            .map(|s| format!(" ({s})"))
            .unwrap_or_default()
    );

    Ok(build_pattern(&layout, detection))
}

/// Attach statistics and catalog text to a detection.
fn build_pattern(layout: &ChartLayout, detection: Detection) -> ShapePattern {
    let longitudes = layout.longitudes();
    let descriptor = describe(detection.pattern, detection.sub_type);
    let handle_planets: Vec<String> = detection
        .handles
        .iter()
        .map(|&i| layout.name(i).to_string())
        .collect();

    ShapePattern {
        pattern_type: detection.pattern,
        sub_type: detection.sub_type,
        name: descriptor.name,
        description: descriptor.description,
        keywords: descriptor.keywords,
        span: layout.span(),
        max_gap: layout.max_gap(),
        gaps: layout.gaps().to_vec(),
        void_midpoint: layout.void_midpoint(),
        leading_planet: detection.leading.map(|i| layout.name(i).to_string()),
        trailing_planet: detection.trailing.map(|i| layout.name(i).to_string()),
        handle_planet: handle_planets.first().cloned(),
        handle_planets,
        clusters: detection.clusters,
        hemispheres: layout.hemispheres(),
        elements: stats::element_balance(&longitudes),
        modalities: stats::modality_balance(&longitudes),
        confidence: detection.pattern.confidence(),
    }
}
