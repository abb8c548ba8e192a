//! Affine correction transform over RGB channel space

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Affine color correction applied to the homogeneous channel vector
///
/// Stored as a 3x4 matrix: each output channel is a linear combination of
/// `(r, g, b, 1)`. The calibration engine currently only produces diagonal
/// scale matrices, but the transform is kept affine so a least-squares fit can
/// replace the bias corrector without touching consumers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectionTransform {
    matrix: [[f32; 4]; 3],
}

impl Default for CorrectionTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl CorrectionTransform {
    /// The identity transform (no correction)
    pub fn identity() -> Self {
        Self {
            matrix: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
            ],
        }
    }

    /// Diagonal scale transform from per-channel bias deltas
    ///
    /// A mean bias of `delta` in a channel becomes a `1 + delta` gain on that
    /// channel, with zero off-diagonal and translation terms.
    pub fn from_channel_bias(delta: [f32; 3]) -> Self {
        Self {
            matrix: [
                [1.0 + delta[0], 0.0, 0.0, 0.0],
                [0.0, 1.0 + delta[1], 0.0, 0.0],
                [0.0, 0.0, 1.0 + delta[2], 0.0],
            ],
        }
    }

    /// Diagonal entries of the transform
    pub fn diagonal(&self) -> [f32; 3] {
        [self.matrix[0][0], self.matrix[1][1], self.matrix[2][2]]
    }

    /// Check whether this is the identity transform
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Apply the transform to a color's homogeneous channel vector, clamping
    /// the result back into [0,1]
    pub fn apply(&self, color: Color) -> Color {
        let v = [color.r, color.g, color.b, 1.0];
        let channel = |row: &[f32; 4]| row[0] * v[0] + row[1] * v[1] + row[2] * v[2] + row[3] * v[3];
        Color::with_alpha(
            channel(&self.matrix[0]),
            channel(&self.matrix[1]),
            channel(&self.matrix[2]),
            color.a,
        )
    }
}
