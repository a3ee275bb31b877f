//! Configuration errors.
//!
//! Rendering itself cannot fail; everything that can go wrong is caught
//! when a `Camera` or `Renderer` is built.

use thiserror::Error;

/// Invalid render or camera settings. Values are rejected, never clamped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Field of view must be in (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f64),

    #[error("Ray bias epsilon must be positive and finite, got {0}")]
    InvalidEpsilon(f64),

    #[error("Bucket size must be positive, got {0}")]
    InvalidBucketSize(u32),

    #[error("Tone map {0} must be positive and finite")]
    InvalidToneMap(&'static str),
}

/// Result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;
