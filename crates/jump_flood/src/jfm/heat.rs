//! Heat map visualisation of a jump flood map.

use super::codec::Offset;
use crate::render::Rgba;

/// Color at distance 0.
pub const HOT: Rgba = Rgba::rgb(255, 48, 0);

/// Color at `max_distance` and beyond.
pub const COLD: Rgba = Rgba::rgb(0, 48, 255);

/// Ramp color for a decoded record; unresolved pixels are transparent.
pub fn heat_color(offset: Option<Offset>, max_distance: i32) -> Rgba {
  match offset {
    Some(offset) => {
      let t = offset.length() / max_distance.max(1) as f32;
      HOT.lerp(COLD, t)
    }
    None => Rgba::TRANSPARENT,
  }
}
