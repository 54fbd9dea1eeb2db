//! Morphological expansion from a completed jump flood map.

use super::codec::{MAX_DISTANCE, decode};
use crate::error::JfmError;
use crate::primitives::RgbaSurface;
use crate::render::Rgba;

/// Recommended antialias margin for soft edges.
pub const AA_MARGIN: f32 = 1.333;

/// Color written by the expansion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExpandPaint {
  /// A fixed tint; its alpha is scaled by coverage and by the nearest
  /// seed's alpha.
  Solid(Rgba),
  /// The color of the nearest seed in the source; its alpha is scaled by
  /// coverage.
  SeedColor,
}

impl Default for ExpandPaint {
  fn default() -> Self {
    Self::Solid(Rgba::WHITE)
  }
}

/// Validated expansion parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Expansion {
  pub thickness: f32,
  pub aa_margin: f32,
  pub paint: ExpandPaint,
}

impl Expansion {
  /// Checks `0 <= thickness <= MAX_DISTANCE` and a finite, non-negative
  /// margin.
  pub fn new(thickness: f32, aa_margin: f32, paint: ExpandPaint) -> Result<Self, JfmError> {
    if !(0.0..=MAX_DISTANCE as f32).contains(&thickness) {
      return Err(JfmError::ThicknessOutOfRange(thickness));
    }
    if !aa_margin.is_finite() || aa_margin < 0.0 {
      return Err(JfmError::InvalidAaMargin(aa_margin));
    }
    Ok(Self {
      thickness,
      aa_margin,
      paint,
    })
  }

  /// Coverage of a pixel `distance` away from its nearest seed.
  #[inline]
  pub fn coverage(&self, distance: f32) -> f32 {
    coverage(distance, self.thickness, self.aa_margin)
  }

  /// Output for the source pixel at `(x, y)`, reading its map record.
  pub fn shade(&self, source: &RgbaSurface, jfmap: &RgbaSurface, x: u32, y: u32) -> Rgba {
    let Some(offset) = decode(jfmap[(x, y)]) else {
      return Rgba::TRANSPARENT;
    };
    let coverage = self.coverage(offset.length());
    if coverage <= 0.0 {
      return Rgba::TRANSPARENT;
    }

    let seed = source
      .get_signed(x as i64 + offset.dx as i64, y as i64 + offset.dy as i64)
      .copied()
      .unwrap_or(Rgba::TRANSPARENT);
    match self.paint {
      ExpandPaint::Solid(tint) => tint.scale_alpha(coverage * seed.alpha()),
      ExpandPaint::SeedColor => seed.scale_alpha(coverage),
    }
  }
}

/// Soft threshold band of width `aa_margin` centered on `thickness`.
///
/// Full coverage up to `thickness - aa_margin / 2`, none from
/// `thickness + aa_margin / 2`, linear in between. A zero margin gives a hard
/// edge that still includes `distance == thickness`.
pub fn coverage(distance: f32, thickness: f32, aa_margin: f32) -> f32 {
  if !distance.is_finite() {
    return 0.0;
  }
  if aa_margin <= 0.0 {
    return if distance <= thickness { 1.0 } else { 0.0 };
  }
  ((thickness + aa_margin * 0.5 - distance) / aa_margin).clamp(0.0, 1.0)
}
