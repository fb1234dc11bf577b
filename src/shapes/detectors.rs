//! Ordered shape detectors.
//!
//! Each detector looks at a [`ChartLayout`] in isolation and returns a
//! [`Detection`] when its pattern applies. [`detect`] walks [`DETECTORS`] in
//! order and returns the first match, falling back to Splay. Precedence lives
//! only in the table order, so every detector can be tested on its own.
use crate::config::ShapeDetectionConfig;
use crate::core::{Cluster, PatternSubType, PatternType};
use crate::geometry::{arc_contains, build_clusters, circular_distance};

use super::layout::ChartLayout;

/// Each flank of a Bucket handle must be at least this wide.
pub const MIN_HANDLE_FLANK: f64 = 30.0;

/// Outcome of one detector. Body references are indices into the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub pattern: PatternType,
    pub sub_type: Option<PatternSubType>,
    pub leading: Option<usize>,
    pub trailing: Option<usize>,
    pub handles: Vec<usize>,
    pub clusters: Vec<Cluster>,
}

impl Detection {
    fn new(pattern: PatternType) -> Self {
        Self {
            pattern,
            sub_type: None,
            leading: None,
            trailing: None,
            handles: Vec::new(),
            clusters: Vec::new(),
        }
    }

    /// A pattern bounded by the occupied arc opposite the widest gap.
    fn with_occupied_arc(pattern: PatternType, layout: &ChartLayout) -> Self {
        Self {
            leading: Some(layout.arc_start()),
            trailing: Some(layout.arc_end()),
            ..Self::new(pattern)
        }
    }

    fn sub_type(mut self, sub_type: PatternSubType) -> Self {
        self.sub_type = Some(sub_type);
        self
    }
}

pub type Detector = fn(&ChartLayout, &ShapeDetectionConfig) -> Option<Detection>;

/// Detectors in precedence order, most specific first.
pub const DETECTORS: [(PatternType, Detector); 6] = [
    (PatternType::Bundle, detect_bundle),
    (PatternType::Bucket, detect_bucket),
    (PatternType::Bowl, detect_bowl),
    (PatternType::Locomotive, detect_locomotive),
    (PatternType::Seesaw, detect_seesaw),
    (PatternType::Splash, detect_splash),
];

/// Run the detectors in order; the first match wins.
pub fn detect(layout: &ChartLayout, config: &ShapeDetectionConfig) -> Detection {
    DETECTORS
        .iter()
        .find_map(|(pattern, detector)| {
            let found = detector(layout, config);
            log::trace!("{} detector matched: {}", pattern, found.is_some());
            found
        })
        .unwrap_or_else(|| detect_splay(layout))
}

/// Every body within `bundle_max_span`.
pub fn detect_bundle(layout: &ChartLayout, config: &ShapeDetectionConfig) -> Option<Detection> {
    (layout.span() <= config.bundle_max_span)
        .then(|| Detection::with_occupied_arc(PatternType::Bundle, layout))
}

/// A rim of bodies plus one or two isolated handles sitting in the void.
///
/// The handle must split the void, so a chart that already fits within
/// `bowl_max_span` is never a Bucket. A handle qualifies when both flanking
/// gaps are at least [`MIN_HANDLE_FLANK`], each flank is wider than every gap
/// inside the rim, and the flanks together reach `bucket_min_gap`. A Double
/// handle is two bodies no more than `double_handle_max_separation` apart.
/// Singletons are tried first; among candidates the widest combined void
/// wins, ties going to the lowest index.
///
/// Leading and trailing bodies bound the rim, not the handle.
pub fn detect_bucket(layout: &ChartLayout, config: &ShapeDetectionConfig) -> Option<Detection> {
    if layout.span() <= config.bowl_max_span {
        return None;
    }
    let n = layout.len();

    [PatternSubType::Singleton, PatternSubType::Double]
        .into_iter()
        .find_map(|sub_type| {
            let handle_count = match sub_type {
                PatternSubType::Double => 2,
                _ => 1,
            };
            let rim = n.checked_sub(handle_count)?;
            if rim < 2 || rim <= handle_count {
                return None;
            }

            let best = (0..n)
                .filter_map(|first| {
                    handle_void(layout, config, first, handle_count).map(|void| (first, void))
                })
                .fold(None, |best: Option<(usize, f64)>, (first, void)| match best {
                    Some((_, widest)) if void <= widest => best,
                    _ => Some((first, void)),
                })?;

            let first = best.0;
            Some(Detection {
                leading: Some((first + handle_count) % n),
                trailing: Some((first + n - 1) % n),
                handles: (0..handle_count).map(|k| (first + k) % n).collect(),
                ..Detection::new(PatternType::Bucket).sub_type(sub_type)
            })
        })
}

/// Combined flank width if the run of `count` bodies starting at `first`
/// forms a valid handle.
fn handle_void(
    layout: &ChartLayout,
    config: &ShapeDetectionConfig,
    first: usize,
    count: usize,
) -> Option<f64> {
    let n = layout.len();
    let last = first + count - 1;
    let before = layout.gap_before(first);
    let after = layout.gap_after(last);

    if (first..last).any(|i| layout.gap_after(i) > config.double_handle_max_separation) {
        return None;
    }
    if before < MIN_HANDLE_FLANK || after < MIN_HANDLE_FLANK {
        return None;
    }
    let combined = before + after;
    if combined < config.bucket_min_gap {
        return None;
    }

    // Gaps owned by the handle: the one before it and every one after its members
    let owned = |i: usize| i == (first + n - 1) % n || (0..count).any(|k| (first + k) % n == i);
    let rim_max = (0..n)
        .filter(|&i| !owned(i))
        .map(|i| layout.gap_after(i))
        .fold(0.0_f64, f64::max);

    (before > rim_max && after > rim_max).then_some(combined)
}

/// Every body within a half wheel, wider than a Bundle.
///
/// Leading or Trailing follows the void midpoint (northern half is Leading);
/// a side holding more than `hemisphere_dominance` percent of the bodies
/// overrides that with Eastern or Western.
pub fn detect_bowl(layout: &ChartLayout, config: &ShapeDetectionConfig) -> Option<Detection> {
    let span = layout.span();
    if span <= config.bundle_max_span || span > config.bowl_max_span {
        return None;
    }

    let hemispheres = layout.hemispheres();
    let sub_type = if hemispheres.east > config.hemisphere_dominance {
        PatternSubType::Eastern
    } else if hemispheres.west > config.hemisphere_dominance {
        PatternSubType::Western
    } else if arc_contains(layout.void_midpoint(), 0.0, 180.0) {
        PatternSubType::Leading
    } else {
        PatternSubType::Trailing
    };

    Some(Detection::with_occupied_arc(PatternType::Bowl, layout).sub_type(sub_type))
}

/// Bodies over roughly two thirds of the wheel around a single empty third.
///
/// The void must fall within the configured range and be strictly wider than
/// every other gap; a wheel with two equal widest gaps has no single empty
/// third. A void centred in the eastern half makes the engine run Clockwise.
pub fn detect_locomotive(
    layout: &ChartLayout,
    config: &ShapeDetectionConfig,
) -> Option<Detection> {
    let void = layout.max_gap();
    if void < config.locomotive_min_void || void > config.locomotive_max_void {
        return None;
    }

    let void_is_unique = (0..layout.len())
        .filter(|&i| i != layout.max_gap_index())
        .all(|i| layout.gap_after(i) < void);
    if !void_is_unique {
        return None;
    }

    let sub_type = if arc_contains(layout.void_midpoint(), 270.0, 90.0) {
        PatternSubType::Clockwise
    } else {
        PatternSubType::Counterclockwise
    };

    Some(Detection::with_occupied_arc(PatternType::Locomotive, layout).sub_type(sub_type))
}

/// Exactly two clusters whose centres face each other.
pub fn detect_seesaw(layout: &ChartLayout, config: &ShapeDetectionConfig) -> Option<Detection> {
    let clusters = build_clusters(layout.bodies(), layout.gaps(), config.seesaw_min_gap);
    let [first, second] = clusters.as_slice() else {
        return None;
    };

    let separation = circular_distance(first.center(), second.center());
    if separation < config.seesaw_min_separation || separation > config.seesaw_max_separation {
        return None;
    }

    Some(Detection {
        clusters,
        ..Detection::new(PatternType::Seesaw)
    })
}

/// Low dispersion of gaps around the whole wheel.
pub fn detect_splash(layout: &ChartLayout, config: &ShapeDetectionConfig) -> Option<Detection> {
    (layout.gap_std_dev() <= config.splash_max_dispersion * layout.mean_gap())
        .then(|| Detection::new(PatternType::Splash))
}

/// Fallback when nothing else matches.
pub fn detect_splay(_layout: &ChartLayout) -> Detection {
    Detection::new(PatternType::Splay)
}
