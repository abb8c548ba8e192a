//! Swatch-based color calibration
//!
//! Derives a correction transform from pairs of known reference colors and
//! their camera-captured counterparts, compensating for systematic sensor and
//! lighting bias in subsequent captures.

pub mod engine;
pub mod transform;

pub use engine::{CalibrationData, CalibrationEngine};
pub use transform::CorrectionTransform;
