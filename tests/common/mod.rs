// Test utility module for chartshape integration tests
#![allow(dead_code)]

use chartshape::PlanetPosition;

/// Build positions from `(name, longitude)` pairs
pub fn named(pairs: &[(&str, f64)]) -> Vec<PlanetPosition> {
    pairs
        .iter()
        .map(|&(name, lon)| PlanetPosition::new(name, lon))
        .collect()
}

/// Build positions named `p0`, `p1`, ... from bare longitudes
pub fn positions(lons: &[f64]) -> Vec<PlanetPosition> {
    lons.iter()
        .enumerate()
        .map(|(i, &lon)| PlanetPosition::new(format!("p{i}"), lon))
        .collect()
}

/// `count` longitudes starting at `start`, `step` degrees apart
pub fn evenly(start: f64, step: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| start + step * i as f64).collect()
}

/// A realistic ten-body chart
pub fn sample_chart() -> Vec<PlanetPosition> {
    named(&[
        ("Sun", 94.2),
        ("Moon", 211.7),
        ("Mercury", 110.5),
        ("Venus", 62.9),
        ("Mars", 145.3),
        ("Jupiter", 8.1),
        ("Saturn", 318.4),
        ("Uranus", 27.6),
        ("Neptune", 353.0),
        ("Pluto", 298.8),
    ])
}
