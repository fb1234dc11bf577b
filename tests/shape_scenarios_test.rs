//! Reference charts for each shape pattern, checked end to end through
//! `classify`.

mod common;

use chartshape::shapes::detectors::{
    detect_bowl, detect_bucket, detect_locomotive, detect_splash, DETECTORS,
};
use chartshape::{
    classify, classify_with_config, ChartLayout, Error, PatternSubType, PatternType,
    ShapeDetectionConfig,
};
use common::{evenly, named, positions, sample_chart};
use pretty_assertions::assert_eq;

#[test]
fn test_bundle_of_five_within_forty_degrees() {
    let pattern = classify(&positions(&[10.0, 20.0, 30.0, 40.0, 50.0])).unwrap();

    assert_eq!(pattern.pattern_type, PatternType::Bundle);
    assert_eq!(pattern.sub_type, None);
    assert_eq!(pattern.span, 40.0);
    assert_eq!(pattern.max_gap, 320.0);
    assert_eq!(pattern.gaps, vec![10.0, 10.0, 10.0, 10.0, 320.0]);
    assert_eq!(pattern.confidence, 1.0);
}

#[test]
fn test_equal_triangle_is_splash() {
    let pattern = classify(&positions(&[0.0, 120.0, 240.0])).unwrap();

    assert_eq!(pattern.pattern_type, PatternType::Splash);
    assert_eq!(pattern.confidence, 0.75);
    assert_eq!(pattern.gaps, vec![120.0, 120.0, 120.0]);
}

#[test]
fn test_bowl_subtype_follows_void_midpoint() {
    // Void 170 -> 360, midpoint 265 in the southern half
    let pattern = classify(&positions(&evenly(0.0, 34.0, 6))).unwrap();
    assert_eq!(pattern.pattern_type, PatternType::Bowl);
    assert_eq!(pattern.span, 170.0);
    assert_eq!(pattern.max_gap, 190.0);
    assert_eq!(pattern.sub_type, Some(PatternSubType::Trailing));
    assert_eq!(pattern.confidence, 0.95);

    // Void 350 -> 180, midpoint 85 in the northern half
    let pattern = classify(&positions(&evenly(180.0, 34.0, 6))).unwrap();
    assert_eq!(pattern.pattern_type, PatternType::Bowl);
    assert_eq!(pattern.sub_type, Some(PatternSubType::Leading));
    assert_eq!(pattern.leading_planet.as_deref(), Some("p0"));
    assert_eq!(pattern.trailing_planet.as_deref(), Some("p5"));
}

#[test]
fn test_bowl_with_outlying_edge_body_has_no_handle() {
    // The last body sits 50 degrees from the rest but the void stays whole
    let pattern = classify(&positions(&[0.0, 30.0, 60.0, 90.0, 120.0, 170.0])).unwrap();

    assert_eq!(pattern.pattern_type, PatternType::Bowl);
    assert_eq!(pattern.sub_type, Some(PatternSubType::Trailing));
    assert_eq!(pattern.gaps, vec![30.0, 30.0, 30.0, 30.0, 50.0, 190.0]);
    assert_eq!(pattern.handle_planet, None);
    assert_eq!(pattern.trailing_planet.as_deref(), Some("p5"));
}

#[test]
fn test_irregular_bowl_with_northern_void() {
    let pattern = classify(&positions(&[190.0, 240.0, 255.0, 270.0, 280.0, 355.0])).unwrap();

    // Void 355 -> 190, midpoint 92.5
    assert_eq!(pattern.pattern_type, PatternType::Bowl);
    assert_eq!(pattern.sub_type, Some(PatternSubType::Leading));
    assert_eq!(pattern.max_gap, 195.0);
    assert!(pattern.handle_planets.is_empty());
}

#[test]
fn test_bowl_western_override() {
    let pattern = classify(&positions(&[100.0, 120.0, 150.0, 190.0, 240.0, 280.0])).unwrap();

    assert_eq!(pattern.pattern_type, PatternType::Bowl);
    assert_eq!(pattern.sub_type, Some(PatternSubType::Western));
    assert!(pattern.hemispheres.west > 65.0);
}

#[test]
fn test_bucket_with_singleton_handle() {
    let mut pairs: Vec<(String, f64)> = evenly(0.0, 28.75, 9)
        .into_iter()
        .enumerate()
        .map(|(i, lon)| (format!("rim{i}"), lon))
        .collect();
    pairs.push(("Uranus".to_string(), 295.0));
    let refs: Vec<(&str, f64)> = pairs.iter().map(|(n, l)| (n.as_str(), *l)).collect();

    let pattern = classify(&named(&refs)).unwrap();

    assert_eq!(pattern.pattern_type, PatternType::Bucket);
    assert_eq!(pattern.sub_type, Some(PatternSubType::Singleton));
    assert_eq!(pattern.handle_planet.as_deref(), Some("Uranus"));
    assert_eq!(pattern.leading_planet.as_deref(), Some("rim0"));
    assert_eq!(pattern.trailing_planet.as_deref(), Some("rim8"));
    assert_eq!(pattern.confidence, 0.9);
    // Flanking gaps of 65 each; the widest gap still defines the span
    assert_eq!(pattern.max_gap, 65.0);
    assert_eq!(pattern.span, 295.0);
}

#[test]
fn test_bucket_with_double_handle() {
    let mut lons = evenly(0.0, 20.0, 8);
    lons.extend([245.0, 250.0]);
    let pattern = classify(&positions(&lons)).unwrap();

    assert_eq!(pattern.pattern_type, PatternType::Bucket);
    assert_eq!(pattern.sub_type, Some(PatternSubType::Double));
    assert_eq!(pattern.handle_planets, vec!["p8".to_string(), "p9".to_string()]);
    assert_eq!(pattern.handle_planet.as_deref(), Some("p8"));
}

#[test]
fn test_locomotive_with_empty_third() {
    let pattern = classify(&positions(&evenly(0.0, 30.0, 9))).unwrap();

    assert_eq!(pattern.pattern_type, PatternType::Locomotive);
    assert_eq!(pattern.sub_type, Some(PatternSubType::Clockwise));
    assert_eq!(pattern.span, 240.0);
    assert_eq!(pattern.confidence, 0.85);
    assert_eq!(pattern.leading_planet.as_deref(), Some("p0"));
    assert_eq!(pattern.trailing_planet.as_deref(), Some("p8"));
}

#[test]
fn test_locomotive_with_uneven_occupied_arc() {
    let lons = [0.0, 20.0, 40.0, 60.0, 125.0, 145.0, 165.0, 185.0, 205.0, 240.0];
    let pattern = classify(&positions(&lons)).unwrap();

    assert_eq!(pattern.pattern_type, PatternType::Locomotive);
    assert_eq!(pattern.sub_type, Some(PatternSubType::Clockwise));
    assert_eq!(pattern.span, 240.0);
    assert_eq!(pattern.max_gap, 120.0);
    assert_eq!(pattern.leading_planet.as_deref(), Some("p0"));
    assert_eq!(pattern.trailing_planet.as_deref(), Some("p9"));
}

#[test]
fn test_seesaw_of_four_and_three() {
    let pattern = classify(&named(&[
        ("Sun", 345.0),
        ("Mercury", 355.0),
        ("Venus", 5.0),
        ("Mars", 15.0),
        ("Jupiter", 170.0),
        ("Saturn", 180.0),
        ("Uranus", 190.0),
    ]))
    .unwrap();

    assert_eq!(pattern.pattern_type, PatternType::Seesaw);
    assert_eq!(pattern.confidence, 0.8);
    assert_eq!(pattern.leading_planet, None);

    let mut sizes: Vec<usize> = pattern.clusters.iter().map(|c| c.count).collect();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![3, 4]);
}

#[test]
fn test_irregular_chart_is_splay() {
    let lons = [0.0, 10.0, 20.0, 30.0, 140.0, 150.0, 160.0, 270.0];
    let pattern = classify(&positions(&lons)).unwrap();

    assert_eq!(pattern.pattern_type, PatternType::Splay);
    assert_eq!(pattern.confidence, 0.6);
    assert_eq!(pattern.leading_planet, None);
    assert!(pattern.clusters.is_empty());
}

#[test]
fn test_bundle_wins_at_shared_boundary() {
    let input = positions(&[0.0, 60.0, 120.0]);
    let pattern = classify(&input).unwrap();
    assert_eq!(pattern.pattern_type, PatternType::Bundle);
    assert_eq!(pattern.span, 120.0);

    // Lowering the Bundle limit hands the same chart to the Bowl detector
    let narrow = ShapeDetectionConfig {
        bundle_max_span: 119.0,
        ..Default::default()
    };
    let pattern = classify_with_config(&input, &narrow).unwrap();
    assert_eq!(pattern.pattern_type, PatternType::Bowl);
}

#[test]
fn test_pipeline_order_resolves_overlapping_matches() {
    // Gaps 80/80/100/100: a lone body between the two widest gaps is a
    // handle, and the spacing is also even enough for a Splash
    let input = positions(&[0.0, 80.0, 160.0, 260.0]);
    let layout = ChartLayout::from_positions(&input).unwrap();
    let config = ShapeDetectionConfig::default();

    assert!(detect_bucket(&layout, &config).is_some());
    assert!(detect_splash(&layout, &config).is_some());
    assert!(detect_locomotive(&layout, &config).is_none());
    assert!(detect_bowl(&layout, &config).is_none());

    let pattern = classify(&input).unwrap();
    assert_eq!(pattern.pattern_type, PatternType::Bucket);
    assert_eq!(pattern.handle_planet.as_deref(), Some("p3"));

    let order: Vec<PatternType> = DETECTORS.iter().map(|(p, _)| *p).collect();
    assert_eq!(
        order,
        vec![
            PatternType::Bundle,
            PatternType::Bucket,
            PatternType::Bowl,
            PatternType::Locomotive,
            PatternType::Seesaw,
            PatternType::Splash,
        ]
    );
}

#[test]
fn test_unnormalized_input_is_accepted() {
    let pattern = classify(&positions(&[370.0, 380.0, -310.0, 400.0, 410.0])).unwrap();
    assert_eq!(pattern.pattern_type, PatternType::Bundle);
    assert!((pattern.span - 40.0).abs() < 1e-9);
}

#[test]
fn test_sample_chart_invariants() {
    let pattern = classify(&sample_chart()).unwrap();

    assert_eq!(pattern.gaps.len(), 10);
    assert!((pattern.gaps.iter().sum::<f64>() - 360.0).abs() < 1e-6);
    assert!((pattern.span + pattern.max_gap - 360.0).abs() < 1e-9);

    let h = pattern.hemispheres;
    assert!((h.north + h.south - 100.0).abs() < 1e-9);
    assert!((h.east + h.west - 100.0).abs() < 1e-9);

    let e = pattern.elements;
    assert!((e.fire + e.earth + e.air + e.water - 100.0).abs() < 1e-9);

    let m = pattern.modalities;
    assert!((m.cardinal + m.fixed + m.mutable - 100.0).abs() < 1e-9);
}

#[test]
fn test_too_few_positions() {
    let err = classify(&positions(&[10.0, 20.0])).unwrap_err();
    assert!(matches!(err, Error::InsufficientData { found: 2, required: 3 }));

    let err = classify(&[]).unwrap_err();
    assert!(matches!(err, Error::InsufficientData { found: 0, .. }));
}

#[test]
fn test_non_finite_longitude_is_rejected() {
    let input = named(&[("Sun", 10.0), ("Moon", f64::NAN), ("Mars", 30.0)]);
    let err = classify(&input).unwrap_err();
    assert!(matches!(err, Error::InvalidPosition { ref name, .. } if name == "Moon"));
}
