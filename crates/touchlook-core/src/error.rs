//! Error types for touchlook.

use thiserror::Error;

/// The main error type for touchlook operations.
#[derive(Error, Debug)]
pub enum TouchLookError {
    /// A range string could not be parsed into one or two numbers.
    #[error("invalid range '{value}': {reason}")]
    InvalidRange { value: String, reason: String },

    /// A range number was not a valid float.
    #[error("invalid number in range '{value}': {source}")]
    InvalidRangeNumber {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Pitch limits are not finite or are inverted.
    #[error("invalid pitch limits: min {min} > max {max} or not finite")]
    InvalidPitchLimits { min: f32, max: f32 },

    /// An attribute string named a property that does not exist.
    #[error("unknown property '{0}'")]
    UnknownProperty(String),

    /// An attribute string had a property with an unusable value.
    #[error("invalid value '{value}' for property '{property}'")]
    InvalidProperty { property: String, value: String },

    /// JSON configuration error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for touchlook operations.
pub type Result<T> = std::result::Result<T, TouchLookError>;
