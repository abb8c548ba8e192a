//! # Paintmatch
//!
//! A Rust crate for matching physically mixed paint colors against a sampled
//! reference, using camera frames as a colorimeter substitute.
//!
//! This library provides stable color capture and match scoring by:
//! - Averaging a pixel window around the sample point to suppress sensor noise
//! - Classifying ambient lighting and correcting white balance and exposure
//! - Applying a swatch-derived calibration transform to captured colors
//! - Scoring color differences, classifying match quality, and suggesting
//!   paint adjustments
//! - Aggregating a bounded history of committed matches
//!
//! Frame acquisition, 3D-to-2D projection, persistence, and UI are the host
//! application's responsibility; this core consumes already-rectified pixel
//! buffers and produces plain, displayable data.
//!
//! ## Example
//!
//! ```rust
//! use paintmatch::{CaptureSession, Color, ColorMatchEngine, Frame};
//!
//! // A 4x4 frame of a single mixed-paint color, as delivered by the camera
//! let pixels = [200u8, 60, 40].repeat(16);
//! let frame = Frame::new(&pixels, 4, 4);
//!
//! let mut session = CaptureSession::new();
//! let captured = session.capture(&frame, 2, 2);
//!
//! let reference = Color::from_hex("#C83C28")?;
//! let result = ColorMatchEngine::new().compare(reference, captured);
//! println!("{} ({:.0}%)", result.quality.as_str(), result.match_quality * 100.0);
//! # Ok::<(), paintmatch::MatchError>(())
//! ```

pub mod calibration;
pub mod capture;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod frame;
pub mod history;
pub mod lighting;
pub mod matching;

pub use calibration::{CalibrationData, CalibrationEngine, CorrectionTransform};
pub use capture::CaptureSession;
pub use color::{Color, HsvColor};
pub use config::MatchConfig;
pub use error::{MatchError, Result};
pub use frame::{Frame, FrameSampler};
pub use history::{ColorMatchData, HistoryStatistics, MatchHistory};
pub use lighting::{AmbientMonitor, LightingCompensator, LightingCondition, LightingSnapshot};
pub use matching::{
    ColorMatchEngine, ColorMatchResult, MatchMethod, QualityThresholds, QualityTier,
};
