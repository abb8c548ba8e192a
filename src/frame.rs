//! Camera frame access and windowed color sampling
//!
//! The host application supplies already-rectified camera frames as row-major
//! RGB byte buffers; this module provides a borrowed view over such a buffer
//! and a noise-reducing windowed sampler.
//!
//! ## Design
//!
//! Single-pixel reads are dominated by sensor and compression noise, so the
//! sampler averages a square window around the target pixel. Paint swatches
//! are large relative to a pixel, so the loss of spatial precision is an
//! acceptable trade for a lower-variance estimate.

use crate::color::Color;
use crate::constants::sampling;
use crate::error::{MatchError, Result};

/// Borrowed view over a row-major RGB pixel buffer (3 bytes per pixel)
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pixels: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> Frame<'a> {
    /// Wrap a pixel buffer
    ///
    /// A buffer shorter than `width * height * 3` is treated as empty; every
    /// sample taken from it returns neutral white. Continuous capture must not
    /// halt on a single bad frame, so this is not an error.
    pub fn new(pixels: &'a [u8], width: u32, height: u32) -> Self {
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether the buffer actually holds `width * height` RGB pixels
    pub fn is_valid(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.pixels.len() >= (self.width as usize * self.height as usize * 3)
    }

    /// Read a single pixel, clamping the coordinate to the frame bounds
    ///
    /// Recovers locally from any invalid read: out-of-bounds coordinates are
    /// clamped, and a degenerate buffer yields neutral white.
    pub fn get(&self, x: u32, y: u32) -> Color {
        let x = x.min(self.width.saturating_sub(1));
        let y = y.min(self.height.saturating_sub(1));
        self.try_get(x, y).unwrap_or(Color::WHITE)
    }

    /// Strict single-pixel read; fails instead of clamping
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinate` when the coordinate lies outside the frame
    /// or the buffer is degenerate.
    pub fn try_get(&self, x: u32, y: u32) -> Result<Color> {
        if !self.is_valid() || x >= self.width || y >= self.height {
            return Err(MatchError::InvalidCoordinate {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        Ok(Color::from_bytes(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
        ))
    }
}

/// Windowed color sampler with a configurable radius
#[derive(Debug, Clone, Copy)]
pub struct FrameSampler {
    radius: u32,
}

impl Default for FrameSampler {
    fn default() -> Self {
        Self::new(sampling::DEFAULT_RADIUS)
    }
}

impl FrameSampler {
    /// Create a sampler, clamping the radius to the supported range
    pub fn new(radius: u32) -> Self {
        Self {
            radius: radius.clamp(sampling::MIN_RADIUS, sampling::MAX_RADIUS),
        }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Average color over the square window centered on `(cx, cy)`
    ///
    /// Every pixel in `[center - radius, center + radius]` on both axes is
    /// accumulated; coordinates are clamped to the frame bounds, so edge and
    /// corner windows repeat border pixels rather than skipping them (which
    /// would under-weight the border). Alpha is fixed to fully opaque.
    ///
    /// Pure function of its inputs: returns neutral white for a degenerate
    /// buffer rather than erroring.
    pub fn sample(&self, frame: &Frame<'_>, cx: u32, cy: u32) -> Color {
        if !frame.is_valid() {
            return Color::WHITE;
        }

        let r = self.radius as i64;
        let cx = cx as i64;
        let cy = cy as i64;

        let mut sum = [0.0f32; 3];
        let mut count = 0u32;

        for dy in -r..=r {
            for dx in -r..=r {
                let x = (cx + dx).clamp(0, frame.width() as i64 - 1) as u32;
                let y = (cy + dy).clamp(0, frame.height() as i64 - 1) as u32;
                let c = frame.get(x, y);
                sum[0] += c.r;
                sum[1] += c.g;
                sum[2] += c.b;
                count += 1;
            }
        }

        let n = count as f32;
        Color::new(sum[0] / n, sum[1] / n, sum[2] / n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_frame(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
        let mut buf = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..(width * height) {
            buf.extend_from_slice(&rgb);
        }
        buf
    }

    #[test]
    fn test_sample_uniform_buffer_all_radii() {
        let buf = uniform_frame(32, 32, [200, 100, 50]);
        let frame = Frame::new(&buf, 32, 32);
        let expected = Color::from_bytes(200, 100, 50);

        for radius in 1..=10 {
            let sampler = FrameSampler::new(radius);
            let c = sampler.sample(&frame, 16, 16);
            assert!((c.r - expected.r).abs() < 1e-5, "radius {}", radius);
            assert!((c.g - expected.g).abs() < 1e-5, "radius {}", radius);
            assert!((c.b - expected.b).abs() < 1e-5, "radius {}", radius);
        }
    }

    #[test]
    fn test_sample_empty_buffer_returns_white() {
        let frame = Frame::new(&[], 0, 0);
        let c = FrameSampler::default().sample(&frame, 5, 5);
        assert_eq!(c, Color::WHITE);
    }

    #[test]
    fn test_sample_short_buffer_returns_white() {
        // Claims 4x4 but only holds one pixel
        let buf = [10u8, 20, 30];
        let frame = Frame::new(&buf, 4, 4);
        let c = FrameSampler::default().sample(&frame, 0, 0);
        assert_eq!(c, Color::WHITE);
    }

    #[test]
    fn test_sample_corner_repeats_edge_pixels() {
        // 2x2 frame: top-left red, everything else black. Sampling the corner
        // with radius 2 clamps most of the window onto the red pixel.
        let mut buf = uniform_frame(2, 2, [0, 0, 0]);
        buf[0] = 255;
        let frame = Frame::new(&buf, 2, 2);

        let c = FrameSampler::new(2).sample(&frame, 0, 0);
        // 5x5 window clamped onto a 2x2 frame: the red pixel covers the
        // clamped (x<=0, y<=0) region, 9 of 25 samples.
        assert!((c.r - 9.0 / 25.0).abs() < 1e-5);
        assert!(c.g.abs() < 1e-5);
    }

    #[test]
    fn test_sample_averages_mixed_window() {
        // 3x3 frame, center white, neighbors black
        let mut buf = uniform_frame(3, 3, [0, 0, 0]);
        let center = (3 + 1) * 3; // pixel (1, 1)
        buf[center] = 255;
        buf[center + 1] = 255;
        buf[center + 2] = 255;
        let frame = Frame::new(&buf, 3, 3);

        let c = FrameSampler::new(1).sample(&frame, 1, 1);
        assert!((c.r - 1.0 / 9.0).abs() < 1e-5);
    }

    #[test]
    fn test_radius_clamped_to_supported_range() {
        assert_eq!(FrameSampler::new(0).radius(), 1);
        assert_eq!(FrameSampler::new(99).radius(), 10);
        assert_eq!(FrameSampler::default().radius(), 2);
    }

    #[test]
    fn test_get_clamps_out_of_bounds_coordinate() {
        let buf = uniform_frame(2, 2, [100, 100, 100]);
        let frame = Frame::new(&buf, 2, 2);
        assert_eq!(frame.get(50, 50), frame.get(1, 1));
    }

    #[test]
    fn test_try_get_rejects_out_of_bounds() {
        let buf = uniform_frame(2, 2, [100, 100, 100]);
        let frame = Frame::new(&buf, 2, 2);
        assert!(frame.try_get(1, 1).is_ok());

        let err = frame.try_get(2, 0).unwrap_err();
        assert!(matches!(
            err,
            crate::error::MatchError::InvalidCoordinate { x: 2, y: 0, .. }
        ));
    }
}
