//! Circular geometry on the 0-360 degree wheel.
//!
//! Every wraparound-sensitive comparison in the crate goes through these
//! functions. Detectors never subtract raw longitudes.
//!
//! Angles grow counterclockwise. "Forward" from `a` to `b` means the arc swept
//! counterclockwise starting at `a`.

use crate::core::Cluster;

/// Full circle in degrees.
pub const FULL_CIRCLE: f64 = 360.0;

/// Map any finite angle into `[0, 360)`. Zero is always positive zero.
pub fn normalize(deg: f64) -> f64 {
    let n = deg.rem_euclid(FULL_CIRCLE);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if n >= FULL_CIRCLE || n == 0.0 {
        0.0
    } else {
        n
    }
}

/// Forward distance from `a` to `b`, in `[0, 360)`.
pub fn circular_distance(a: f64, b: f64) -> f64 {
    normalize(b - a)
}

/// Whether `angle` lies on the arc swept counterclockwise from `start` to
/// `end`. The start is inclusive and the end exclusive; an arc whose start
/// exceeds its end wraps through 0.
pub fn arc_contains(angle: f64, start: f64, end: f64) -> bool {
    let (angle, start, end) = (normalize(angle), normalize(start), normalize(end));
    if start <= end {
        angle >= start && angle < end
    } else {
        angle >= start || angle < end
    }
}

/// Midpoint of the forward arc from `a` to `b`.
pub fn midpoint(a: f64, b: f64) -> f64 {
    normalize(a + circular_distance(a, b) / 2.0)
}

/// One gap per position: `gaps[i]` is the empty arc from `sorted[i]` forward
/// to `sorted[(i + 1) % n]`.
///
/// `sorted` must be normalized and ascending. The closing gap is taken as the
/// complement of the occupied run so that coincident bodies still produce a
/// gap list summing to 360.
pub fn compute_gaps(sorted: &[f64]) -> Vec<f64> {
    let n = sorted.len();
    if n == 0 {
        return Vec::new();
    }

    let mut gaps: Vec<f64> = sorted
        .windows(2)
        .map(|pair| circular_distance(pair[0], pair[1]))
        .collect();
    gaps.push(FULL_CIRCLE - circular_distance(sorted[0], sorted[n - 1]));
    gaps
}

/// Index and width of the widest gap. Ties go to the lowest index.
pub fn widest_gap(gaps: &[f64]) -> Option<(usize, f64)> {
    gaps.iter()
        .copied()
        .enumerate()
        .fold(None, |best, (i, g)| match best {
            Some((_, w)) if g <= w => best,
            _ => Some((i, g)),
        })
}

/// Partition the wheel into clusters wherever a gap reaches
/// `split_threshold`.
///
/// `sorted` holds `(name, longitude)` pairs in ascending normalized order and
/// `gaps` is the matching output of [`compute_gaps`]. Clusters are returned in
/// walking order starting after the first qualifying gap; a run that spans
/// 0 degrees stays in one cluster. With no qualifying gap a single cluster
/// holds every position.
pub fn build_clusters(
    sorted: &[(&str, f64)],
    gaps: &[f64],
    split_threshold: f64,
) -> Vec<Cluster> {
    let n = sorted.len();
    if n == 0 || gaps.len() != n {
        return Vec::new();
    }

    let splits: Vec<usize> = (0..n).filter(|&i| gaps[i] >= split_threshold).collect();
    let Some(&first_split) = splits.first() else {
        return vec![make_cluster((0..n).map(|i| sorted[i]))];
    };

    let begin = (first_split + 1) % n;
    let mut clusters = Vec::with_capacity(splits.len());
    let mut current: Vec<(&str, f64)> = Vec::new();

    for step in 0..n {
        let idx = (begin + step) % n;
        current.push(sorted[idx]);
        if gaps[idx] >= split_threshold {
            clusters.push(make_cluster(current.drain(..)));
        }
    }
    clusters
}

fn make_cluster<'a>(members: impl Iterator<Item = (&'a str, f64)>) -> Cluster {
    let (names, longitudes): (Vec<String>, Vec<f64>) =
        members.map(|(name, lon)| (name.to_string(), lon)).unzip();
    Cluster {
        start: longitudes.first().copied().unwrap_or_default(),
        end: longitudes.last().copied().unwrap_or_default(),
        count: longitudes.len(),
        longitudes,
        members: names,
    }
}
