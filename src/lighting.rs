//! Ambient lighting classification and color compensation
//!
//! Camera colors shift with the scene illumination. This module classifies the
//! ambient lighting from the frame itself and corrects captured colors with:
//! - per-condition white balance factors
//! - an ambient-driven exposure gain
//! - the calibration transform, when one is available
//! - a saturation roll-off in low light
//!
//! The correction order is fixed: white balance and exposure are linear
//! corrections applied before the calibration transform, which precedes the
//! perceptual desaturation step. Reordering changes numerical results.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calibration::CalibrationData;
use crate::color::Color;
use crate::constants::lighting;
use crate::frame::Frame;

/// Discrete ambient lighting state, derived from scene brightness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightingCondition {
    /// Dim, typically warm tungsten-biased light
    Indoor,
    /// Bright, typically cool daylight-biased light
    Outdoor,
    /// Neither clearly indoor nor outdoor
    Mixed,
}

impl LightingCondition {
    /// Classify an ambient brightness level in [0,1]
    pub fn classify(ambient_level: f32) -> Self {
        if ambient_level < lighting::INDOOR_THRESHOLD {
            Self::Indoor
        } else if ambient_level > lighting::OUTDOOR_THRESHOLD {
            Self::Outdoor
        } else {
            Self::Mixed
        }
    }

    /// White balance channel factors for this condition
    ///
    /// Indoor counteracts warm tungsten bias, outdoor counteracts cool
    /// daylight bias, mixed leaves channels untouched.
    pub fn white_balance(&self) -> [f32; 3] {
        match self {
            Self::Indoor => lighting::INDOOR_WB,
            Self::Outdoor => lighting::OUTDOOR_WB,
            Self::Mixed => [1.0, 1.0, 1.0],
        }
    }

    /// Get the condition name as a string
    pub fn as_str(&self) -> &str {
        match self {
            Self::Indoor => "Indoor",
            Self::Outdoor => "Outdoor",
            Self::Mixed => "Mixed",
        }
    }
}

/// Ambient level and condition at the moment a match was captured
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightingSnapshot {
    pub ambient_level: f32,
    pub condition: LightingCondition,
}

/// Per-frame ambient brightness tracker
///
/// Measures scene brightness over a central region of each frame and holds the
/// current discrete [`LightingCondition`]. The discrete state only changes on
/// an actual threshold crossing, so callers can treat [`AmbientMonitor::update`]
/// returning `Some` as a change notification.
#[derive(Debug, Clone)]
pub struct AmbientMonitor {
    ambient_level: f32,
    condition: LightingCondition,
}

impl Default for AmbientMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl AmbientMonitor {
    /// Create a monitor assuming a mid-level mixed scene until the first frame
    pub fn new() -> Self {
        Self {
            ambient_level: 0.5,
            condition: LightingCondition::Mixed,
        }
    }

    pub fn ambient_level(&self) -> f32 {
        self.ambient_level
    }

    pub fn condition(&self) -> LightingCondition {
        self.condition
    }

    /// Snapshot the current lighting state for a persistable match record
    pub fn snapshot(&self) -> LightingSnapshot {
        LightingSnapshot {
            ambient_level: self.ambient_level,
            condition: self.condition,
        }
    }

    /// Reclassify from a new frame; returns the new condition only on change
    ///
    /// Intended to run once per frame. Degenerate frames leave the current
    /// state untouched.
    pub fn update(&mut self, frame: &Frame<'_>) -> Option<LightingCondition> {
        let Some(level) = Self::measure_brightness(frame) else {
            return None;
        };

        self.ambient_level = level;
        let condition = LightingCondition::classify(level);
        if condition != self.condition {
            debug!(
                from = self.condition.as_str(),
                to = condition.as_str(),
                ambient_level = level,
                "lighting condition changed"
            );
            self.condition = condition;
            Some(condition)
        } else {
            None
        }
    }

    /// Mean brightness over a central box at a coarse stride
    ///
    /// The box side is one quarter of the frame's shorter dimension, sampled
    /// every 4th pixel. Returns `None` for a degenerate frame.
    fn measure_brightness(frame: &Frame<'_>) -> Option<f32> {
        if !frame.is_valid() {
            return None;
        }

        let half_box = (frame.width().min(frame.height()) / 8).max(1);
        let cx = frame.width() / 2;
        let cy = frame.height() / 2;
        let x0 = cx.saturating_sub(half_box);
        let x1 = (cx + half_box).min(frame.width() - 1);
        let y0 = cy.saturating_sub(half_box);
        let y1 = (cy + half_box).min(frame.height() - 1);

        let mut sum = 0.0f32;
        let mut count = 0u32;
        let mut y = y0;
        while y <= y1 {
            let mut x = x0;
            while x <= x1 {
                sum += frame.get(x, y).luminance();
                count += 1;
                x += lighting::BRIGHTNESS_PROBE_STRIDE;
            }
            y += lighting::BRIGHTNESS_PROBE_STRIDE;
        }

        (count > 0).then(|| sum / count as f32)
    }
}

/// Applies lighting-dependent corrections to raw sampled colors
#[derive(Debug, Clone, Copy, Default)]
pub struct LightingCompensator;

impl LightingCompensator {
    /// Correct a raw sampled color for the current lighting state
    ///
    /// Steps, in fixed order:
    /// 1. white balance factors for the lighting condition
    /// 2. exposure gain interpolated from the ambient level
    /// 3. calibration transform, when a calibrated `CalibrationData` is given
    /// 4. saturation roll-off below the low-light threshold
    pub fn compensate(
        raw: Color,
        condition: LightingCondition,
        ambient_level: f32,
        calibration: Option<&CalibrationData>,
    ) -> Color {
        let ambient_level = ambient_level.clamp(0.0, 1.0);

        // Step 1: white balance
        let mut color = raw.scaled(condition.white_balance());

        // Step 2: exposure gain, 1.2 in the dark down to 0.8 in bright light
        let gain = lighting::EXPOSURE_GAIN_DARK
            + (lighting::EXPOSURE_GAIN_BRIGHT - lighting::EXPOSURE_GAIN_DARK) * ambient_level;
        color = color.scaled([gain, gain, gain]);

        // Step 3: calibration transform
        if let Some(calibration) = calibration {
            if calibration.is_calibrated() {
                color = calibration.transform().apply(color);
            }
        }

        // Step 4: low-light saturation roll-off
        if ambient_level < lighting::DESATURATION_THRESHOLD {
            let t = ambient_level / lighting::DESATURATION_THRESHOLD;
            let factor = lighting::DESATURATION_FLOOR + (1.0 - lighting::DESATURATION_FLOOR) * t;
            let mut hsv = color.to_hsv();
            hsv.s *= factor;
            color = Color::from_hsv(hsv);
        }

        color
    }
}
