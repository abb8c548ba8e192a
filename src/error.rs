//! Error types for the paintmatch library

use thiserror::Error;

/// Result type alias for paintmatch operations
pub type Result<T> = std::result::Result<T, MatchError>;

/// Error types for color capture, calibration, and matching operations
#[derive(Error, Debug)]
pub enum MatchError {
    /// Calibration input sequences differ in length
    #[error("Calibration arity mismatch: {known} known colors vs {captured} captured colors")]
    ArityMismatch { known: usize, captured: usize },

    /// Calibration called with no swatch pairs
    #[error("Calibration input empty: {what}")]
    EmptyInput { what: String },

    /// Sample coordinate outside any usable buffer region
    #[error("Invalid coordinate ({x}, {y}) for {width}x{height} buffer")]
    InvalidCoordinate {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be loaded or saved
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl MatchError {
    /// Create a config error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// Calibration input errors are recoverable: the caller can retry with a
    /// new swatch set without losing any existing calibration.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MatchError::ArityMismatch { .. }
                | MatchError::EmptyInput { .. }
                | MatchError::InvalidCoordinate { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            MatchError::ArityMismatch { .. } => {
                "Calibration swatch counts do not line up. Please re-capture the swatch set."
                    .to_string()
            }
            MatchError::EmptyInput { .. } => {
                "No calibration swatches were captured. Please scan at least one swatch."
                    .to_string()
            }
            MatchError::InvalidCoordinate { .. } => {
                "The sample point is outside the camera frame. Please re-aim and try again."
                    .to_string()
            }
            MatchError::InvalidParameter { parameter, .. } => {
                format!("The setting '{}' is out of range.", parameter)
            }
            MatchError::ConfigError { .. } => {
                "Could not read the configuration file. Default settings will be used."
                    .to_string()
            }
        }
    }
}
