//! Error types.
//!
//! Every [`JfmError`] is a precondition violation detected before any output
//! is written. None of them is expected under normal operation.

use std::io;

use thiserror::Error;

use crate::jfm::MAX_DISTANCE;

/// Precondition violations reported by the jump flood entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JfmError {
  #[error("max distance {0} out of range (1..={max})", max = MAX_DISTANCE)]
  MaxDistanceOutOfRange(i32),

  #[error(
    "source size != jfmap size ({source_width}x{source_height} != {map_width}x{map_height})"
  )]
  DimensionMismatch {
    source_width: u32,
    source_height: u32,
    map_width: u32,
    map_height: u32,
  },

  #[error("invalid alpha range [{min_alpha}, {max_alpha}], need 0 <= min <= max <= 1")]
  InvalidAlphaRange { min_alpha: f32, max_alpha: f32 },

  #[error("thickness {0} out of range (0..={max})", max = MAX_DISTANCE)]
  ThicknessOutOfRange(f32),

  #[error("antialias margin {0} must be finite and >= 0")]
  InvalidAaMargin(f32),

  #[error("{0} is not implemented")]
  Unimplemented(&'static str),
}

/// Failures while loading or saving a [`crate::JfmConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config: {0}")]
  Io(#[from] io::Error),

  #[error("failed to parse config: {0}")]
  Parse(#[from] toml::de::Error),

  #[error("failed to serialize config: {0}")]
  Serialize(#[from] toml::ser::Error),

  #[error("invalid config: {0}")]
  Invalid(#[from] JfmError),
}
