//! Color difference scoring and match quality classification
//!
//! This module compares a reference color against a captured candidate,
//! scores the difference, classifies the match into quality tiers, and
//! generates adjustment suggestions for the person mixing the paint.

pub mod engine;
pub mod suggestions;

pub use engine::{
    ColorMatchEngine, ColorMatchResult, MatchMethod, QualityThresholds, QualityTier,
};
