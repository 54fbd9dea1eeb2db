//! Offset encoding for jump flood map pixels.
//!
//! Each map pixel stores the offset from that pixel to its nearest seed.
//! An axis value `v` in `-32767..=32767` packs into two bytes:
//!
//! ```text
//! hi = sign << 7 | magnitude >> 8     sign = 1 when v < 0
//! lo = magnitude & 0xFF               magnitude = |v| (15 bits)
//! ```
//!
//! A full record is `(hi_x, lo_x, hi_y, lo_y)` in the `(r, g, b, a)` channels.
//! The all-255 pixel is reserved as the unresolved sentinel. It decodes to
//! `(-32767, -32767)`, which no legal offset reaches because distances are
//! capped at [`MAX_DISTANCE`].

use std::ops::Add;

use crate::render::Rgba;

/// Largest supported search distance, per axis.
///
/// Values up to 32766 would still be distinguishable from the sentinel.
pub const MAX_DISTANCE: i32 = 32000;

/// Largest magnitude representable on one axis.
pub const MAX_AXIS_MAGNITUDE: i32 = 0x7FFF;

/// Encoding of an unresolved pixel (no seed within reach).
pub const UNRESOLVED: Rgba = Rgba::new(255, 255, 255, 255);

/// Encoding of a seed pixel, offset `(0, 0)`.
pub const SEED: Rgba = Rgba::new(0, 0, 0, 0);

/// Signed offset from a pixel to its nearest seed: `seed = pixel + offset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
  pub dx: i32,
  pub dy: i32,
}

impl Offset {
  /// Offset of a seed to itself.
  pub const ZERO: Self = Self::new(0, 0);

  #[inline]
  pub const fn new(dx: i32, dy: i32) -> Self {
    Self { dx, dy }
  }

  /// Squared euclidean length, compared exactly during propagation.
  #[inline]
  pub fn length_squared(self) -> i64 {
    let dx = self.dx as i64;
    let dy = self.dy as i64;
    dx * dx + dy * dy
  }

  /// Euclidean length.
  #[inline]
  pub fn length(self) -> f32 {
    (self.dx as f32).hypot(self.dy as f32)
  }

  /// True if neither axis exceeds `max_distance` in magnitude.
  #[inline]
  pub fn within(self, max_distance: i32) -> bool {
    self.dx.abs() <= max_distance && self.dy.abs() <= max_distance
  }
}

impl Add for Offset {
  type Output = Self;

  #[inline]
  fn add(self, rhs: Self) -> Self {
    Self::new(self.dx + rhs.dx, self.dy + rhs.dy)
  }
}

/// Packs one axis value into `(hi, lo)`.
///
/// # Panics
///
/// Panics if `v` is outside `-32767..=32767`.
#[inline]
pub fn encode_axis(v: i32) -> (u8, u8) {
  assert!(
    v.unsigned_abs() <= MAX_AXIS_MAGNITUDE as u32,
    "axis offset {v} exceeds 15 bits"
  );
  let sign_bit = u8::from(v < 0);
  let magnitude = v.unsigned_abs();
  let hi = (sign_bit << 7) | (magnitude >> 8) as u8;
  let lo = (magnitude & 0xFF) as u8;
  (hi, lo)
}

/// Unpacks one axis value from `(hi, lo)`.
#[inline]
pub fn decode_axis(hi: u8, lo: u8) -> i32 {
  let magnitude = (((hi & 0x7F) as i32) << 8) | lo as i32;
  let sign = 1 - 2 * (hi >> 7) as i32;
  sign * magnitude
}

/// Encodes a record, writing [`UNRESOLVED`] for `None`.
#[inline]
pub fn encode(offset: Option<Offset>) -> Rgba {
  match offset {
    Some(o) => {
      let (hi_x, lo_x) = encode_axis(o.dx);
      let (hi_y, lo_y) = encode_axis(o.dy);
      Rgba::new(hi_x, lo_x, hi_y, lo_y)
    }
    None => UNRESOLVED,
  }
}

/// Decodes a record, returning `None` for [`UNRESOLVED`].
#[inline]
pub fn decode(pixel: Rgba) -> Option<Offset> {
  if pixel == UNRESOLVED {
    return None;
  }
  Some(Offset::new(
    decode_axis(pixel.r, pixel.g),
    decode_axis(pixel.b, pixel.a),
  ))
}
