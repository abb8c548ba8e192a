//! Color value types and space conversions
//!
//! This module defines the normalized `Color` value type shared by every
//! pipeline stage, along with HSV conversion and distance helpers.

pub mod space;

pub use space::{Color, HsvColor};
