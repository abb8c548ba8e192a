//! Calibration from known/captured swatch pairs
//!
//! The engine consumes pairs of (known reference color, camera-captured color)
//! from physical swatches and fits a per-channel bias correction. This is a
//! deliberately simple single-pass corrector, not a least-squares fit of a
//! full affine transform; swapping in a least-squares fit behind the same
//! contract is the intended upgrade path.
//!
//! Sequencing swatch captures (including settle delays between swatches to
//! avoid correlated motion blur) is the caller's responsibility; each call
//! here is a single synchronous step.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calibration::CorrectionTransform;
use crate::color::Color;
use crate::error::{MatchError, Result};

/// Correction transform with calibration status and timestamp
///
/// Created with an identity transform and `is_calibrated == false`; replaced
/// wholesale by a successful calibration run, never partially mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationData {
    transform: CorrectionTransform,
    is_calibrated: bool,
    calibrated_at: SystemTime,
}

impl Default for CalibrationData {
    fn default() -> Self {
        Self {
            transform: CorrectionTransform::identity(),
            is_calibrated: false,
            calibrated_at: SystemTime::UNIX_EPOCH,
        }
    }
}

impl CalibrationData {
    pub fn transform(&self) -> &CorrectionTransform {
        &self.transform
    }

    pub fn is_calibrated(&self) -> bool {
        self.is_calibrated
    }

    pub fn calibrated_at(&self) -> SystemTime {
        self.calibrated_at
    }
}

/// Fits a correction transform from swatch pairs
pub struct CalibrationEngine;

impl CalibrationEngine {
    /// Calibrate from parallel sequences of known and captured swatch colors
    ///
    /// Computes the mean signed per-channel difference between known and
    /// captured colors and produces a diagonal gain transform from it.
    ///
    /// # Errors
    ///
    /// - `ArityMismatch` if the sequences differ in length
    /// - `EmptyInput` if either sequence is empty
    ///
    /// Failed runs never produce a `CalibrationData`, so existing calibration
    /// state held by the caller is untouched.
    pub fn calibrate(known: &[Color], captured: &[Color]) -> Result<CalibrationData> {
        if known.is_empty() || captured.is_empty() {
            return Err(MatchError::EmptyInput {
                what: "calibration swatch pairs".to_string(),
            });
        }
        if known.len() != captured.len() {
            return Err(MatchError::ArityMismatch {
                known: known.len(),
                captured: captured.len(),
            });
        }

        let mut delta = [0.0f32; 3];
        for (k, c) in known.iter().zip(captured) {
            delta[0] += k.r - c.r;
            delta[1] += k.g - c.g;
            delta[2] += k.b - c.b;
        }
        let n = known.len() as f32;
        delta = [delta[0] / n, delta[1] / n, delta[2] / n];

        debug!(
            pairs = known.len(),
            dr = delta[0],
            dg = delta[1],
            db = delta[2],
            "calibration complete"
        );

        Ok(CalibrationData {
            transform: CorrectionTransform::from_channel_bias(delta),
            is_calibrated: true,
            calibrated_at: SystemTime::now(),
        })
    }
}
