//! The capture pipeline: sample, compensate, calibrate
//!
//! `CaptureSession` ties the per-frame stages together: it tracks ambient
//! lighting, samples a windowed average at the target coordinate, and runs
//! the lighting compensation chain (including the calibration transform once
//! one has been applied). It holds no threads and performs no I/O; the host
//! drives it with one `capture` call per frame of interest.

use crate::calibration::CalibrationData;
use crate::color::Color;
use crate::frame::{Frame, FrameSampler};
use crate::lighting::{AmbientMonitor, LightingCompensator, LightingCondition, LightingSnapshot};

/// Stateful capture pipeline over successive camera frames
#[derive(Debug, Clone, Default)]
pub struct CaptureSession {
    sampler: FrameSampler,
    monitor: AmbientMonitor,
    calibration: Option<CalibrationData>,
}

impl CaptureSession {
    /// Create a session with the default sampling window and no calibration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with a custom sampling radius
    pub fn with_sampler(sampler: FrameSampler) -> Self {
        Self {
            sampler,
            ..Self::default()
        }
    }

    /// Install a calibration produced by the calibration engine
    ///
    /// Subsequent captures run the correction transform after white balance
    /// and exposure. Uncalibrated data is accepted but has no effect.
    pub fn apply_calibration(&mut self, calibration: CalibrationData) {
        self.calibration = Some(calibration);
    }

    pub fn calibration(&self) -> Option<&CalibrationData> {
        self.calibration.as_ref()
    }

    pub fn lighting(&self) -> LightingCondition {
        self.monitor.condition()
    }

    pub fn ambient_level(&self) -> f32 {
        self.monitor.ambient_level()
    }

    /// Snapshot the current lighting state for a match record
    pub fn lighting_snapshot(&self) -> LightingSnapshot {
        self.monitor.snapshot()
    }

    /// Reclassify lighting from a frame without sampling a color
    ///
    /// Returns the new condition only when the discrete state changed.
    pub fn update_lighting(&mut self, frame: &Frame<'_>) -> Option<LightingCondition> {
        self.monitor.update(frame)
    }

    /// Capture a stable, compensated color estimate at `(x, y)`
    ///
    /// Updates the ambient classification from this frame, averages the
    /// sampling window around the target pixel, then applies the lighting
    /// compensation chain. Degenerate frames yield neutral white.
    pub fn capture(&mut self, frame: &Frame<'_>, x: u32, y: u32) -> Color {
        self.monitor.update(frame);
        let raw = self.sampler.sample(frame, x, y);
        LightingCompensator::compensate(
            raw,
            self.monitor.condition(),
            self.monitor.ambient_level(),
            self.calibration.as_ref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::CalibrationEngine;

    fn uniform_frame(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
        let mut buf = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..(width * height) {
            buf.extend_from_slice(&rgb);
        }
        buf
    }

    #[test]
    fn test_capture_degenerate_frame_is_white() {
        let mut session = CaptureSession::new();
        let frame = Frame::new(&[], 0, 0);
        assert_eq!(session.capture(&frame, 10, 10), Color::WHITE);
    }

    #[test]
    fn test_capture_updates_lighting_state() {
        let buf = uniform_frame(64, 64, [15, 15, 15]);
        let frame = Frame::new(&buf, 64, 64);

        let mut session = CaptureSession::new();
        session.capture(&frame, 32, 32);
        assert_eq!(session.lighting(), LightingCondition::Indoor);
        assert!(session.ambient_level() < 0.3);
    }

    #[test]
    fn test_calibration_changes_capture() {
        let buf = uniform_frame(64, 64, [128, 128, 128]);
        let frame = Frame::new(&buf, 64, 64);

        let mut plain = CaptureSession::new();
        let uncalibrated = plain.capture(&frame, 32, 32);

        let known = [Color::new(0.7, 0.5, 0.5)];
        let captured = [Color::new(0.5, 0.5, 0.5)];
        let calibration = CalibrationEngine::calibrate(&known, &captured).unwrap();

        let mut session = CaptureSession::new();
        session.apply_calibration(calibration);
        let calibrated = session.capture(&frame, 32, 32);

        // Red channel gains 1.2x relative to the uncalibrated capture
        assert!(calibrated.r > uncalibrated.r);
        assert!((calibrated.g - uncalibrated.g).abs() < 1e-5);
    }

    #[test]
    fn test_snapshot_reflects_monitor() {
        let buf = uniform_frame(64, 64, [240, 240, 240]);
        let frame = Frame::new(&buf, 64, 64);

        let mut session = CaptureSession::new();
        session.update_lighting(&frame);
        let snap = session.lighting_snapshot();
        assert_eq!(snap.condition, LightingCondition::Outdoor);
        assert!(snap.ambient_level > 0.7);
    }
}
