use serde::{Deserialize, Serialize};
use std::fmt;

/// A single body on the ecliptic.
///
/// `latitude` and `speed` are carried through untouched; classification only
/// reads the longitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub name: String,
    /// Ecliptic longitude in degrees. Any real value is accepted and
    /// normalized into `[0, 360)` before use.
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Daily motion in degrees; negative means retrograde.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl PlanetPosition {
    pub fn new(name: impl Into<String>, longitude: f64) -> Self {
        Self {
            name: name.into(),
            longitude,
            latitude: None,
            speed: None,
        }
    }

    pub fn with_latitude(mut self, latitude: f64) -> Self {
        self.latitude = Some(latitude);
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    /// A body with negative daily motion is retrograde.
    pub fn is_retrograde(&self) -> bool {
        self.speed.is_some_and(|s| s < 0.0)
    }
}

/// A maximal run of circularly-adjacent bodies whose separating gaps all sit
/// below a split threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    /// Longitude of the first member, walking counterclockwise.
    pub start: f64,
    /// Longitude of the last member.
    pub end: f64,
    pub count: usize,
    pub longitudes: Vec<f64>,
    pub members: Vec<String>,
}

impl Cluster {
    /// Degrees swept from `start` to `end`.
    pub fn width(&self) -> f64 {
        crate::geometry::circular_distance(self.start, self.end)
    }

    /// Midpoint of the arc the cluster occupies.
    pub fn center(&self) -> f64 {
        crate::geometry::midpoint(self.start, self.end)
    }
}

/// The closed set of classical shape patterns, in detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PatternType {
    Bundle,
    Bucket,
    Bowl,
    Locomotive,
    Seesaw,
    Splash,
    Splay,
}

impl PatternType {
    pub const ALL: [PatternType; 7] = [
        PatternType::Bundle,
        PatternType::Bucket,
        PatternType::Bowl,
        PatternType::Locomotive,
        PatternType::Seesaw,
        PatternType::Splash,
        PatternType::Splay,
    ];

    /// Fixed per-pattern confidence. A display hint, not a fit measure.
    pub const fn confidence(&self) -> f64 {
        match self {
            PatternType::Bundle => 1.0,
            PatternType::Bucket => 0.9,
            PatternType::Bowl => 0.95,
            PatternType::Locomotive => 0.85,
            PatternType::Seesaw => 0.8,
            PatternType::Splash => 0.75,
            PatternType::Splay => 0.6,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            PatternType::Bundle => "Bundle",
            PatternType::Bucket => "Bucket",
            PatternType::Bowl => "Bowl",
            PatternType::Locomotive => "Locomotive",
            PatternType::Seesaw => "Seesaw",
            PatternType::Splash => "Splash",
            PatternType::Splay => "Splay",
        }
    }

    /// Whether the pattern is described by one occupied arc with two edges.
    pub const fn has_occupied_arc(&self) -> bool {
        matches!(
            self,
            PatternType::Bundle | PatternType::Bucket | PatternType::Bowl | PatternType::Locomotive
        )
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Refinements. Each one belongs to exactly one [`PatternType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternSubType {
    Leading,
    Trailing,
    Eastern,
    Western,
    Singleton,
    Double,
    Clockwise,
    Counterclockwise,
}

impl PatternSubType {
    pub const fn parent(&self) -> PatternType {
        match self {
            PatternSubType::Leading
            | PatternSubType::Trailing
            | PatternSubType::Eastern
            | PatternSubType::Western => PatternType::Bowl,
            PatternSubType::Singleton | PatternSubType::Double => PatternType::Bucket,
            PatternSubType::Clockwise | PatternSubType::Counterclockwise => {
                PatternType::Locomotive
            }
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            PatternSubType::Leading => "Leading",
            PatternSubType::Trailing => "Trailing",
            PatternSubType::Eastern => "Eastern",
            PatternSubType::Western => "Western",
            PatternSubType::Singleton => "Singleton",
            PatternSubType::Double => "Double",
            PatternSubType::Clockwise => "Clockwise",
            PatternSubType::Counterclockwise => "Counterclockwise",
        }
    }
}

impl fmt::Display for PatternSubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

/// Percentages of bodies per half of the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct HemisphereBalance {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ElementBalance {
    pub fire: f64,
    pub earth: f64,
    pub air: f64,
    pub water: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ModalityBalance {
    pub cardinal: f64,
    pub fixed: f64,
    pub mutable: f64,
}

/// Result of classifying one set of positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapePattern {
    #[serde(rename = "type")]
    pub pattern_type: PatternType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<PatternSubType>,
    pub name: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    /// Degrees of the minimal arc containing every body (`360 - max_gap`).
    pub span: f64,
    pub max_gap: f64,
    /// Gap after each body in ascending longitude order.
    pub gaps: Vec<f64>,
    /// Midpoint of the largest gap.
    pub void_midpoint: f64,
    /// First body of the occupied arc. For a Bucket this is the first rim
    /// body after the handle, so the handle never appears here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leading_planet: Option<String>,
    /// Last body of the occupied arc. For a Bucket this is the last rim body
    /// before the handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_planet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle_planet: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub handle_planets: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clusters: Vec<Cluster>,
    pub hemispheres: HemisphereBalance,
    pub elements: ElementBalance,
    pub modalities: ModalityBalance,
    pub confidence: f64,
}

impl ShapePattern {
    /// Label including the sub-type, e.g. `Bowl (Leading)`.
    pub fn display_label(&self) -> String {
        match self.sub_type {
            Some(sub) => format!("{} ({})", self.pattern_type, sub),
            None => self.pattern_type.to_string(),
        }
    }
}
