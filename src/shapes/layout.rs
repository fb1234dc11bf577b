//! Preprocessed view of a chart: normalized, sorted bodies with their gaps.

use std::cmp::Ordering;

use crate::core::{Error, HemisphereBalance, PlanetPosition, Result};
use crate::geometry::{compute_gaps, normalize, widest_gap, FULL_CIRCLE};

use super::stats::hemisphere_balance;

/// Fewest bodies that describe a distribution.
pub const MIN_POSITIONS: usize = 3;

/// Bodies sorted by normalized longitude, with the derived gap list.
///
/// Indexing is circular: the body after `len() - 1` is `0`.
#[derive(Debug, Clone)]
pub struct ChartLayout<'a> {
    bodies: Vec<(&'a str, f64)>,
    gaps: Vec<f64>,
    max_gap_index: usize,
    max_gap: f64,
    hemispheres: HemisphereBalance,
}

impl<'a> ChartLayout<'a> {
    /// Validate, normalize and sort `positions`.
    ///
    /// Every longitude is checked for finiteness before the count is checked.
    /// Ties in longitude are broken by name so the layout depends only on
    /// the multiset of positions, not their input order.
    pub fn from_positions(positions: &'a [PlanetPosition]) -> Result<Self> {
        if let Some(bad) = positions.iter().find(|p| !p.longitude.is_finite()) {
            return Err(Error::invalid_position(&bad.name, bad.longitude));
        }
        if positions.len() < MIN_POSITIONS {
            return Err(Error::insufficient(positions.len(), MIN_POSITIONS));
        }

        let mut bodies: Vec<(&'a str, f64)> = positions
            .iter()
            .map(|p| (p.name.as_str(), normalize(p.longitude)))
            .collect();
        bodies.sort_by(|a, b| compare_bodies(*a, *b));

        let longitudes: Vec<f64> = bodies.iter().map(|(_, lon)| *lon).collect();
        let gaps = compute_gaps(&longitudes);
        let (max_gap_index, max_gap) = widest_gap(&gaps).unwrap_or((0, FULL_CIRCLE));
        let hemispheres = hemisphere_balance(&longitudes);

        Ok(Self {
            bodies,
            gaps,
            max_gap_index,
            max_gap,
            hemispheres,
        })
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bodies(&self) -> &[(&'a str, f64)] {
        &self.bodies
    }

    pub fn name(&self, index: usize) -> &'a str {
        self.bodies[index % self.len()].0
    }

    pub fn longitude(&self, index: usize) -> f64 {
        self.bodies[index % self.len()].1
    }

    pub fn longitudes(&self) -> Vec<f64> {
        self.bodies.iter().map(|(_, lon)| *lon).collect()
    }

    pub fn gaps(&self) -> &[f64] {
        &self.gaps
    }

    /// Gap following body `index`, circularly.
    pub fn gap_after(&self, index: usize) -> f64 {
        self.gaps[index % self.len()]
    }

    /// Gap preceding body `index`, circularly.
    pub fn gap_before(&self, index: usize) -> f64 {
        self.gap_after(index + self.len() - 1)
    }

    pub fn max_gap(&self) -> f64 {
        self.max_gap
    }

    pub fn max_gap_index(&self) -> usize {
        self.max_gap_index
    }

    /// Degrees of the minimal arc holding every body.
    pub fn span(&self) -> f64 {
        FULL_CIRCLE - self.max_gap
    }

    /// First body of the occupied arc, just after the void.
    pub fn arc_start(&self) -> usize {
        (self.max_gap_index + 1) % self.len()
    }

    /// Last body of the occupied arc, just before the void.
    pub fn arc_end(&self) -> usize {
        self.max_gap_index
    }

    /// Middle of the widest gap.
    pub fn void_midpoint(&self) -> f64 {
        normalize(self.longitude(self.max_gap_index) + self.max_gap / 2.0)
    }

    pub fn hemispheres(&self) -> HemisphereBalance {
        self.hemispheres
    }

    pub fn mean_gap(&self) -> f64 {
        FULL_CIRCLE / self.len() as f64
    }

    /// Population standard deviation of the gap list.
    pub fn gap_std_dev(&self) -> f64 {
        let mean = self.mean_gap();
        let variance = self
            .gaps
            .iter()
            .map(|g| (g - mean).powi(2))
            .sum::<f64>()
            / self.len() as f64;
        variance.sqrt()
    }
}

fn compare_bodies(a: (&str, f64), b: (&str, f64)) -> Ordering {
    a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0))
}
