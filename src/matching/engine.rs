//! Match scoring and quality classification
//!
//! Computes a difference score between a reference color and a candidate,
//! maps it onto a [0,1] match quality, classifies the quality into tiers, and
//! attaches adjustment suggestions.
//!
//! The default scoring method is plain RGB Euclidean distance scaled by 100.
//! That keeps it in the same numeric neighborhood as a perceptual difference
//! metric, but it is not a colorimetric formula; the formula is kept simple
//! on purpose for behavioral compatibility.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::constants::matching;
use crate::error::{MatchError, Result};
use crate::matching::suggestions;

/// Maximum RGB-cube distance (white to black diagonal)
const MAX_RGB_DISTANCE: f32 = 1.732_050_8; // sqrt(3)

/// Match quality tier, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl QualityTier {
    /// Get the tier label as a display string
    pub fn as_str(&self) -> &str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

/// Quality tier cut points, evaluated high-to-low with inclusive bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityThresholds {
    pub excellent: f32,
    pub good: f32,
    pub fair: f32,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            excellent: matching::EXCELLENT_THRESHOLD,
            good: matching::GOOD_THRESHOLD,
            fair: matching::FAIR_THRESHOLD,
        }
    }
}

impl QualityThresholds {
    /// Classify a [0,1] quality score; first inclusive cut point wins
    pub fn classify(&self, quality: f32) -> QualityTier {
        if quality >= self.excellent {
            QualityTier::Excellent
        } else if quality >= self.good {
            QualityTier::Good
        } else if quality >= self.fair {
            QualityTier::Fair
        } else {
            QualityTier::Poor
        }
    }

    fn validate(&self) -> Result<()> {
        let ordered = (0.0..=1.0).contains(&self.fair)
            && self.fair <= self.good
            && self.good <= self.excellent
            && self.excellent <= 1.0;
        if ordered {
            Ok(())
        } else {
            Err(MatchError::InvalidParameter {
                parameter: "quality thresholds".to_string(),
                value: format!(
                    "excellent={}, good={}, fair={}",
                    self.excellent, self.good, self.fair
                ),
            })
        }
    }
}

/// Scoring method selector
///
/// A small closed set of fixed scoring functions; there is no open-ended
/// strategy dispatch because the set of useful methods is small and fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchMethod {
    /// Euclidean distance in RGB space (the compatibility default)
    #[default]
    RgbEuclidean,
    /// Weighted Euclidean distance in HSV space (hue-dominant)
    HsvWeighted,
}

/// Read-only snapshot of a single comparison
///
/// Always derived by [`ColorMatchEngine::compare`]; recomputing requires a new
/// instance. Fields are directly displayable by a UI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorMatchResult {
    /// The color being matched against
    pub reference: Color,
    /// The captured candidate color
    pub candidate: Color,
    /// Match quality in [0,1]; higher is closer
    pub match_quality: f32,
    /// Difference score (distance x 100)
    pub difference: f32,
    /// Per-channel absolute RGB difference
    pub rgb_difference: [f32; 3],
    /// Per-component absolute HSV difference (hue as a raw [0,1] fraction)
    pub hsv_difference: [f32; 3],
    /// Quality tier label
    pub quality: QualityTier,
    /// Human-readable adjustment suggestions
    pub suggestions: Vec<String>,
}

/// Scores color pairs and classifies match quality
#[derive(Debug, Clone)]
pub struct ColorMatchEngine {
    thresholds: QualityThresholds,
    method: MatchMethod,
}

impl Default for ColorMatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorMatchEngine {
    /// Create an engine with default thresholds and RGB Euclidean scoring
    pub fn new() -> Self {
        Self {
            thresholds: QualityThresholds::default(),
            method: MatchMethod::default(),
        }
    }

    /// Create an engine using the given scoring method
    pub fn with_method(method: MatchMethod) -> Self {
        Self {
            thresholds: QualityThresholds::default(),
            method,
        }
    }

    pub fn thresholds(&self) -> QualityThresholds {
        self.thresholds
    }

    pub fn method(&self) -> MatchMethod {
        self.method
    }

    /// Replace the quality tier cut points
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless `fair <= good <= excellent` and all
    /// cut points lie in [0,1]. The previous thresholds are kept on failure.
    pub fn set_thresholds(&mut self, thresholds: QualityThresholds) -> Result<()> {
        thresholds.validate()?;
        self.thresholds = thresholds;
        Ok(())
    }

    /// Compare a reference color against a candidate
    ///
    /// Produces the full match snapshot: difference vectors in RGB and HSV,
    /// the scaled difference score, the [0,1] quality, its tier, and
    /// adjustment suggestions. Pure computation; persisting the result is the
    /// caller's decision.
    pub fn compare(&self, reference: Color, candidate: Color) -> ColorMatchResult {
        let rgb_difference = [
            (reference.r - candidate.r).abs(),
            (reference.g - candidate.g).abs(),
            (reference.b - candidate.b).abs(),
        ];

        let ref_hsv = reference.to_hsv();
        let cand_hsv = candidate.to_hsv();
        // Hue difference is taken on the raw [0,1] fraction, not wrapped to
        // the shorter arc. Near-red pairs like 0.01/0.99 therefore report a
        // large difference; kept for behavioral compatibility.
        let hsv_difference = [
            (ref_hsv.h - cand_hsv.h).abs(),
            (ref_hsv.s - cand_hsv.s).abs(),
            (ref_hsv.v - cand_hsv.v).abs(),
        ];

        let (distance, max_distance) = match self.method {
            MatchMethod::RgbEuclidean => (reference.distance(candidate), MAX_RGB_DISTANCE),
            MatchMethod::HsvWeighted => {
                let [dh, ds, dv] = hsv_difference;
                let d = (0.5 * dh * dh + 0.25 * ds * ds + 0.25 * dv * dv).sqrt();
                (d, 1.0)
            }
        };

        let difference = distance * 100.0;
        let match_quality = (1.0 - distance / max_distance).clamp(0.0, 1.0);
        let quality = self.thresholds.classify(match_quality);
        let suggestions = suggestions::generate(ref_hsv, cand_hsv, difference);

        ColorMatchResult {
            reference,
            candidate,
            match_quality,
            difference,
            rgb_difference,
            hsv_difference,
            quality,
            suggestions,
        }
    }

    /// Re-label a previously computed result against the current thresholds
    ///
    /// Reuses the stored quality score; no distances are recomputed. Use this
    /// after [`ColorMatchEngine::set_thresholds`] to reclassify past results.
    pub fn reclassify(&self, result: &ColorMatchResult) -> ColorMatchResult {
        ColorMatchResult {
            quality: self.thresholds.classify(result.match_quality),
            ..result.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_colors_excellent() {
        let engine = ColorMatchEngine::new();
        let red = Color::new(1.0, 0.0, 0.0);
        let result = engine.compare(red, red);

        assert!(result.match_quality >= 0.99);
        assert!(result.difference < 0.001);
        assert_eq!(result.quality, QualityTier::Excellent);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_white_vs_black_poor() {
        let engine = ColorMatchEngine::new();
        let result = engine.compare(Color::WHITE, Color::BLACK);

        assert!(result.match_quality < 0.001);
        assert_eq!(result.quality, QualityTier::Poor);
        assert!(!result.suggestions.is_empty());
        // Full diagonal distance: sqrt(3) * 100
        assert!((result.difference - 173.205).abs() < 0.01);
    }

    #[test]
    fn test_rgb_difference_symmetric() {
        let engine = ColorMatchEngine::new();
        let a = Color::new(0.2, 0.5, 0.8);
        let b = Color::new(0.7, 0.1, 0.4);
        assert_eq!(
            engine.compare(a, b).rgb_difference,
            engine.compare(b, a).rgb_difference
        );
    }

    #[test]
    fn test_quality_monotonic_in_distance() {
        let engine = ColorMatchEngine::new();
        let reference = Color::new(0.5, 0.5, 0.5);
        let near = engine.compare(reference, Color::new(0.55, 0.5, 0.5));
        let far = engine.compare(reference, Color::new(0.9, 0.5, 0.5));
        assert!(near.match_quality > far.match_quality);
        assert!(near.difference < far.difference);
    }

    #[test]
    fn test_tier_boundary_inclusive() {
        let thresholds = QualityThresholds::default();
        assert_eq!(thresholds.classify(0.95), QualityTier::Excellent);
        assert_eq!(thresholds.classify(0.949999), QualityTier::Good);
        assert_eq!(thresholds.classify(0.85), QualityTier::Good);
        assert_eq!(thresholds.classify(0.70), QualityTier::Fair);
        assert_eq!(thresholds.classify(0.699999), QualityTier::Poor);
    }

    #[test]
    fn test_set_thresholds_validates_ordering() {
        let mut engine = ColorMatchEngine::new();
        let bad = QualityThresholds {
            excellent: 0.5,
            good: 0.8,
            fair: 0.9,
        };
        assert!(engine.set_thresholds(bad).is_err());
        // Previous thresholds kept on failure
        assert_eq!(engine.thresholds(), QualityThresholds::default());
    }

    #[test]
    fn test_reclassify_without_recompute() {
        let mut engine = ColorMatchEngine::new();
        let result = engine.compare(Color::new(0.5, 0.5, 0.5), Color::new(0.55, 0.5, 0.5));
        let original_quality = result.match_quality;
        assert_eq!(result.quality, QualityTier::Excellent);

        // Tighten the Excellent cut above this result's quality
        engine
            .set_thresholds(QualityThresholds {
                excellent: 0.999,
                good: 0.9,
                fair: 0.7,
            })
            .unwrap();

        let relabeled = engine.reclassify(&result);
        assert_eq!(relabeled.match_quality, original_quality);
        assert_eq!(relabeled.quality, QualityTier::Good);
        assert_eq!(relabeled.rgb_difference, result.rgb_difference);
    }

    #[test]
    fn test_hsv_weighted_method() {
        let engine = ColorMatchEngine::with_method(MatchMethod::HsvWeighted);
        let red = Color::new(1.0, 0.0, 0.0);
        let result = engine.compare(red, red);
        assert!(result.match_quality >= 0.99);

        let other = engine.compare(red, Color::new(0.0, 1.0, 0.0));
        assert!(other.match_quality < result.match_quality);
    }

    #[test]
    fn test_hue_difference_not_wrapped() {
        let engine = ColorMatchEngine::new();
        // Both hues near red but on opposite sides of the wrap point
        let a = Color::from_hsv(crate::color::HsvColor::new(0.01, 1.0, 1.0));
        let b = Color::from_hsv(crate::color::HsvColor::new(0.99, 1.0, 1.0));
        let result = engine.compare(a, b);
        assert!(result.hsv_difference[0] > 0.9);
    }
}
