use serde::{Deserialize, Serialize};

use crate::geometry::FULL_CIRCLE;

/// Thresholds that drive shape detection. All angles are in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDetectionConfig {
    /// Largest span still classified as a Bundle.
    #[serde(default = "default_bundle_max_span")]
    pub bundle_max_span: f64,

    /// Largest span still classified as a Bowl.
    #[serde(default = "default_bowl_max_span")]
    pub bowl_max_span: f64,

    /// Minimum combined width of the two gaps flanking a Bucket handle.
    #[serde(default = "default_bucket_min_gap")]
    pub bucket_min_gap: f64,

    /// Gap width that separates two Seesaw clusters.
    #[serde(default = "default_seesaw_min_gap")]
    pub seesaw_min_gap: f64,

    /// Narrowest void accepted for a Locomotive.
    #[serde(default = "default_locomotive_min_void")]
    pub locomotive_min_void: f64,

    /// Widest void accepted for a Locomotive.
    #[serde(default = "default_locomotive_max_void")]
    pub locomotive_max_void: f64,

    #[serde(default = "default_seesaw_min_separation")]
    pub seesaw_min_separation: f64,

    #[serde(default = "default_seesaw_max_separation")]
    pub seesaw_max_separation: f64,

    /// Splash requires `stddev(gaps) <= ratio * mean(gaps)`.
    #[serde(default = "default_splash_max_dispersion")]
    pub splash_max_dispersion: f64,

    /// Percentage of bodies on one side that turns a Bowl Eastern/Western.
    #[serde(default = "default_hemisphere_dominance")]
    pub hemisphere_dominance: f64,

    /// Widest gap between the two bodies of a Double bucket handle.
    #[serde(default = "default_double_handle_max_separation")]
    pub double_handle_max_separation: f64,
}

impl Default for ShapeDetectionConfig {
    fn default() -> Self {
        Self {
            bundle_max_span: default_bundle_max_span(),
            bowl_max_span: default_bowl_max_span(),
            bucket_min_gap: default_bucket_min_gap(),
            seesaw_min_gap: default_seesaw_min_gap(),
            locomotive_min_void: default_locomotive_min_void(),
            locomotive_max_void: default_locomotive_max_void(),
            seesaw_min_separation: default_seesaw_min_separation(),
            seesaw_max_separation: default_seesaw_max_separation(),
            splash_max_dispersion: default_splash_max_dispersion(),
            hemisphere_dominance: default_hemisphere_dominance(),
            double_handle_max_separation: default_double_handle_max_separation(),
        }
    }
}

impl ShapeDetectionConfig {
    // Pure function: an angle threshold must be a usable arc width
    pub fn validate_angle(value: f64, name: &str) -> Result<(), String> {
        if value.is_finite() && value > 0.0 && value < FULL_CIRCLE {
            Ok(())
        } else {
            Err(format!(
                "{} must be between 0 and 360 degrees (exclusive), got {}",
                name, value
            ))
        }
    }

    // Pure function: lower bound must not exceed upper bound
    pub fn validate_ordering(
        low: f64,
        low_name: &str,
        high: f64,
        high_name: &str,
    ) -> Result<(), String> {
        if low <= high {
            Ok(())
        } else {
            Err(format!(
                "{} ({}) must not exceed {} ({})",
                low_name, low, high_name, high
            ))
        }
    }

    pub fn collect_validations(&self) -> Vec<Result<(), String>> {
        vec![
            Self::validate_angle(self.bundle_max_span, "bundle_max_span"),
            Self::validate_angle(self.bowl_max_span, "bowl_max_span"),
            Self::validate_angle(self.bucket_min_gap, "bucket_min_gap"),
            Self::validate_angle(self.seesaw_min_gap, "seesaw_min_gap"),
            Self::validate_angle(self.locomotive_min_void, "locomotive_min_void"),
            Self::validate_angle(self.locomotive_max_void, "locomotive_max_void"),
            Self::validate_angle(self.seesaw_min_separation, "seesaw_min_separation"),
            Self::validate_angle(self.seesaw_max_separation, "seesaw_max_separation"),
            Self::validate_angle(
                self.double_handle_max_separation,
                "double_handle_max_separation",
            ),
            Self::validate_ordering(
                self.bundle_max_span,
                "bundle_max_span",
                self.bowl_max_span,
                "bowl_max_span",
            ),
            Self::validate_ordering(
                self.locomotive_min_void,
                "locomotive_min_void",
                self.locomotive_max_void,
                "locomotive_max_void",
            ),
            Self::validate_ordering(
                self.seesaw_min_separation,
                "seesaw_min_separation",
                self.seesaw_max_separation,
                "seesaw_max_separation",
            ),
            if self.splash_max_dispersion.is_finite() && self.splash_max_dispersion > 0.0 {
                Ok(())
            } else {
                Err(format!(
                    "splash_max_dispersion must be a positive ratio, got {}",
                    self.splash_max_dispersion
                ))
            },
            if (50.0..=100.0).contains(&self.hemisphere_dominance) {
                Ok(())
            } else {
                Err(format!(
                    "hemisphere_dominance must be a percentage between 50 and 100, got {}",
                    self.hemisphere_dominance
                ))
            },
        ]
    }

    /// Validate every threshold, stopping at the first problem
    pub fn validate(&self) -> Result<(), String> {
        for validation in self.collect_validations() {
            validation?;
        }
        Ok(())
    }
}

fn default_bundle_max_span() -> f64 {
    120.0
}
fn default_bowl_max_span() -> f64 {
    180.0
}
fn default_bucket_min_gap() -> f64 {
    120.0
}
fn default_seesaw_min_gap() -> f64 {
    60.0
}
fn default_locomotive_min_void() -> f64 {
    90.0
}
fn default_locomotive_max_void() -> f64 {
    135.0
}
fn default_seesaw_min_separation() -> f64 {
    150.0
}
fn default_seesaw_max_separation() -> f64 {
    210.0
}
fn default_splash_max_dispersion() -> f64 {
    0.6
}
fn default_hemisphere_dominance() -> f64 {
    65.0
}
fn default_double_handle_max_separation() -> f64 {
    10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ShapeDetectionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ShapeDetectionConfig = toml::from_str("bundle_max_span = 100.0").unwrap();
        assert_eq!(config.bundle_max_span, 100.0);
        assert_eq!(config.bowl_max_span, 180.0);
        assert_eq!(config.seesaw_min_gap, 60.0);
    }

    #[test]
    fn test_bundle_wider_than_bowl_is_rejected() {
        let config = ShapeDetectionConfig {
            bundle_max_span: 200.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("bundle_max_span"));
    }

    #[test]
    fn test_out_of_range_angle_is_rejected() {
        let config = ShapeDetectionConfig {
            seesaw_min_gap: 400.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ShapeDetectionConfig {
            bucket_min_gap: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_collect_validations_reports_every_problem() {
        let config = ShapeDetectionConfig {
            splash_max_dispersion: 0.0,
            hemisphere_dominance: 20.0,
            ..Default::default()
        };
        let failures = config
            .collect_validations()
            .into_iter()
            .filter(|v| v.is_err())
            .count();
        assert_eq!(failures, 2);
    }
}
