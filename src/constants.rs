//! Tuning constants for color capture, lighting compensation, and matching
//!
//! This module contains compile-time constants for the capture and matching
//! pipeline, grouped by the component that consumes them.

/// Frame sampling parameters
pub mod sampling {
    /// Default sampling radius in pixels (5x5 window)
    pub const DEFAULT_RADIUS: u32 = 2;

    /// Minimum supported sampling radius
    pub const MIN_RADIUS: u32 = 1;

    /// Maximum supported sampling radius
    pub const MAX_RADIUS: u32 = 10;
}

/// Ambient lighting classification and compensation
pub mod lighting {
    /// Ambient level below which the scene is classified as Indoor
    pub const INDOOR_THRESHOLD: f32 = 0.3;

    /// Ambient level above which the scene is classified as Outdoor
    pub const OUTDOOR_THRESHOLD: f32 = 0.7;

    /// White balance channel factors for indoor (tungsten-biased) light
    pub const INDOOR_WB: [f32; 3] = [1.10, 1.00, 0.90];

    /// White balance channel factors for outdoor (daylight-biased) light
    pub const OUTDOOR_WB: [f32; 3] = [0.95, 1.00, 1.05];

    /// Exposure gain at ambient level 0 (dark scene, boost)
    pub const EXPOSURE_GAIN_DARK: f32 = 1.2;

    /// Exposure gain at ambient level 1 (bright scene, cut)
    pub const EXPOSURE_GAIN_BRIGHT: f32 = 0.8;

    /// Ambient level below which saturation roll-off applies
    pub const DESATURATION_THRESHOLD: f32 = 0.3;

    /// Saturation factor at ambient level 0
    pub const DESATURATION_FLOOR: f32 = 0.7;

    /// Pixel stride for the ambient brightness probe
    pub const BRIGHTNESS_PROBE_STRIDE: u32 = 4;
}

/// Match quality tier cut points and suggestion thresholds
pub mod matching {
    /// Minimum quality for an "Excellent" match
    pub const EXCELLENT_THRESHOLD: f32 = 0.95;

    /// Minimum quality for a "Good" match
    pub const GOOD_THRESHOLD: f32 = 0.85;

    /// Minimum quality for a "Fair" match
    pub const FAIR_THRESHOLD: f32 = 0.70;

    /// Hue difference (as a [0,1] fraction) above which a hue adjustment is suggested
    pub const HUE_SUGGESTION_THRESHOLD: f32 = 0.05;

    /// Saturation difference above which an intensity adjustment is suggested
    pub const SATURATION_SUGGESTION_THRESHOLD: f32 = 0.10;

    /// Value difference above which a brightness adjustment is suggested
    pub const VALUE_SUGGESTION_THRESHOLD: f32 = 0.10;

    /// Difference score below which two colors count as identical
    pub const IDENTICAL_SCORE_EPSILON: f32 = 1e-3;
}

/// Match history limits
pub mod history {
    /// Maximum retained match records (FIFO eviction beyond this)
    pub const MAX_ENTRIES: usize = 100;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_ordering() {
        assert!(matching::FAIR_THRESHOLD < matching::GOOD_THRESHOLD);
        assert!(matching::GOOD_THRESHOLD < matching::EXCELLENT_THRESHOLD);
        assert!(lighting::INDOOR_THRESHOLD < lighting::OUTDOOR_THRESHOLD);
    }

    #[test]
    fn test_sampling_radius_range() {
        assert!(sampling::MIN_RADIUS <= sampling::DEFAULT_RADIUS);
        assert!(sampling::DEFAULT_RADIUS <= sampling::MAX_RADIUS);
    }

    #[test]
    fn test_exposure_gain_direction() {
        // Dark scenes are boosted, bright scenes are cut
        assert!(lighting::EXPOSURE_GAIN_DARK > 1.0);
        assert!(lighting::EXPOSURE_GAIN_BRIGHT < 1.0);
    }
}
