//! Seed classification: the initialization pass of a jump flood map.
//!
//! Seeds are written as offset `(0, 0)`, every other pixel as the unresolved
//! sentinel. Classification only reads the source, so it runs as an ordinary
//! per-pixel pass.

use serde::{Deserialize, Serialize};

use super::codec::{SEED, UNRESOLVED};
use crate::error::JfmError;
use crate::primitives::RgbaSurface;
use crate::render::Rgba;

/// Alpha above which a pixel counts as foreground for [`InitMode::Boundary`].
pub const BOUNDARY_ALPHA_THRESHOLD: f32 = 0.5;

/// Typical epsilon for turning an inclusive lower alpha bound exclusive.
pub const ALPHA_EPSILON: f32 = 0.001;

/// How seeds are selected from the source surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitMode {
  /// Foreground pixels touching the background (4-connected), i.e. the
  /// silhouette of filled shapes. Pixels outside the surface count as
  /// background.
  #[default]
  Boundary,
  /// Any pixel whose alpha lies within the configured range.
  #[serde(alias = "pixel")]
  Fill,
}

/// Validated seed selection parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeedRule {
  mode: InitMode,
  min_alpha: f32,
  max_alpha: f32,
}

impl SeedRule {
  /// Checks `0 <= min_alpha <= max_alpha <= 1`.
  ///
  /// The range is validated for both modes even though boundary
  /// classification uses a fixed threshold.
  pub fn new(mode: InitMode, min_alpha: f32, max_alpha: f32) -> Result<Self, JfmError> {
    let in_range = min_alpha >= 0.0 && max_alpha <= 1.0 && min_alpha <= max_alpha;
    // NaN fails every comparison above
    if !in_range {
      return Err(JfmError::InvalidAlphaRange {
        min_alpha,
        max_alpha,
      });
    }
    Ok(Self {
      mode,
      min_alpha,
      max_alpha,
    })
  }

  #[inline]
  pub fn mode(&self) -> InitMode {
    self.mode
  }

  /// Whether the source pixel at `(x, y)` is a seed.
  pub fn is_seed(&self, source: &RgbaSurface, x: u32, y: u32) -> bool {
    match self.mode {
      InitMode::Boundary => {
        if !is_foreground(source, x as i64, y as i64) {
          return false;
        }
        let (x, y) = (x as i64, y as i64);
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
          .iter()
          .any(|&(dx, dy)| !is_foreground(source, x + dx, y + dy))
      }
      InitMode::Fill => {
        let alpha = alpha_at(source, x as i64, y as i64);
        alpha >= self.min_alpha && alpha <= self.max_alpha
      }
    }
  }

  /// Initial map value for the pixel at `(x, y)`.
  #[inline]
  pub fn classify(&self, source: &RgbaSurface, x: u32, y: u32) -> Rgba {
    if self.is_seed(source, x, y) {
      SEED
    } else {
      UNRESOLVED
    }
  }
}

/// Normalized alpha, 0 outside the surface.
#[inline]
fn alpha_at(source: &RgbaSurface, x: i64, y: i64) -> f32 {
  source.get_signed(x, y).map_or(0.0, |p| p.alpha())
}

#[inline]
fn is_foreground(source: &RgbaSurface, x: i64, y: i64) -> bool {
  alpha_at(source, x, y) > BOUNDARY_ALPHA_THRESHOLD
}
