//! RGBA pixel type shared by color images and encoded jump flood maps.

/// RGBA pixel with 8 bits per channel, straight (non-premultiplied) alpha.
///
/// Jump flood maps reuse the same four channels to hold encoded offsets, see
/// [`crate::jfm::codec`].
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
  pub r: u8,
  pub g: u8,
  pub b: u8,
  pub a: u8,
}

impl Rgba {
  /// Creates a new RGBA pixel.
  #[inline]
  pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
    Self { r, g, b, a }
  }

  /// Creates an opaque RGB pixel (alpha = 255).
  #[inline]
  pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b, a: 255 }
  }

  /// Transparent black.
  pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

  /// Opaque black.
  pub const BLACK: Self = Self::rgb(0, 0, 0);

  /// Opaque white.
  pub const WHITE: Self = Self::rgb(255, 255, 255);

  /// Returns the channels as `[r, g, b, a]`.
  #[inline]
  pub const fn to_array(self) -> [u8; 4] {
    [self.r, self.g, self.b, self.a]
  }

  /// Alpha normalized to `0.0..=1.0`.
  #[inline]
  pub fn alpha(self) -> f32 {
    self.a as f32 / 255.0
  }

  /// Same color with alpha multiplied by `factor` (clamped to `0.0..=1.0`).
  #[inline]
  pub fn scale_alpha(self, factor: f32) -> Self {
    let factor = factor.clamp(0.0, 1.0);
    Self {
      a: (self.a as f32 * factor).round() as u8,
      ..self
    }
  }

  /// Per-channel linear interpolation, `t = 0` gives `self`.
  pub fn lerp(self, other: Self, t: f32) -> Self {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Self {
      r: mix(self.r, other.r),
      g: mix(self.g, other.g),
      b: mix(self.b, other.b),
      a: mix(self.a, other.a),
    }
  }
}

impl From<[u8; 4]> for Rgba {
  #[inline]
  fn from([r, g, b, a]: [u8; 4]) -> Self {
    Self { r, g, b, a }
  }
}
