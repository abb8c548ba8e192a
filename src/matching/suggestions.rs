//! Adjustment suggestion generation
//!
//! Turns HSV component differences into short, human-readable directions for
//! adjusting a physical paint mix toward the reference color. Strings are
//! designed to be displayed by the UI layer without further interpretation.

use crate::color::HsvColor;
use crate::constants::matching;

/// Generate adjustment suggestions from the HSV decomposition of a match
///
/// Each HSV component that differs beyond its threshold contributes one
/// suggestion; saturation and value suggestions are directional. When no
/// component dominates but the colors still differ, a generic small-adjustment
/// suggestion is returned. Identical colors (difference score below epsilon)
/// produce no suggestions.
pub fn generate(reference: HsvColor, candidate: HsvColor, difference_score: f32) -> Vec<String> {
    if difference_score < matching::IDENTICAL_SCORE_EPSILON {
        return Vec::new();
    }

    let mut suggestions = Vec::new();

    // Raw hue-fraction difference, deliberately not wrapped to the shorter
    // arc (kept for behavioral compatibility with the scoring path).
    let hue_diff = (reference.h - candidate.h).abs();
    if hue_diff > matching::HUE_SUGGESTION_THRESHOLD {
        suggestions.push("Adjust the hue toward the reference color".to_string());
    }

    let sat_diff = reference.s - candidate.s;
    if sat_diff.abs() > matching::SATURATION_SUGGESTION_THRESHOLD {
        if sat_diff > 0.0 {
            suggestions.push("Add more pigment to increase color intensity".to_string());
        } else {
            suggestions.push("Add white or gray to reduce color intensity".to_string());
        }
    }

    let val_diff = reference.v - candidate.v;
    if val_diff.abs() > matching::VALUE_SUGGESTION_THRESHOLD {
        if val_diff > 0.0 {
            suggestions.push("Lighten the mixture".to_string());
        } else {
            suggestions.push("Darken the mixture".to_string());
        }
    }

    if suggestions.is_empty() {
        suggestions.push("Colors are close; make a small overall adjustment".to_string());
    }

    suggestions
}
