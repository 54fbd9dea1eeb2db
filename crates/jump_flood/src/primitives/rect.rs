/// A rectangular region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
  pub x: u32,
  pub y: u32,
  pub width: u32,
  pub height: u32,
}

impl Rect {
  /// Creates a new rectangle.
  #[inline]
  pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
    Self {
      x,
      y,
      width,
      height,
    }
  }

  /// Creates a rectangle covering an entire surface.
  #[inline]
  pub fn full(surface_width: u32, surface_height: u32) -> Self {
    Self::new(0, 0, surface_width, surface_height)
  }

  /// Returns true if the rect covers no pixels.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.width == 0 || self.height == 0
  }

  /// Clamps this rect to fit within the given bounds.
  pub fn clamped(&self, bound_width: u32, bound_height: u32) -> Self {
    let x = self.x.min(bound_width);
    let y = self.y.min(bound_height);
    let max_w = bound_width.saturating_sub(x);
    let max_h = bound_height.saturating_sub(y);
    Self {
      x,
      y,
      width: self.width.min(max_w),
      height: self.height.min(max_h),
    }
  }

  /// Region of a `bound_width` x `bound_height` surface covered by a
  /// `width` x `height` image drawn with its top-left corner at `(ox, oy)`.
  ///
  /// The offset may be negative or past the bounds; the result is clipped
  /// and may be empty.
  pub fn placed(
    ox: i32,
    oy: i32,
    width: u32,
    height: u32,
    bound_width: u32,
    bound_height: u32,
  ) -> Self {
    let x0 = (ox as i64).clamp(0, bound_width as i64);
    let y0 = (oy as i64).clamp(0, bound_height as i64);
    let x1 = (ox as i64 + width as i64).clamp(0, bound_width as i64);
    let y1 = (oy as i64 + height as i64).clamp(0, bound_height as i64);
    Self::new(
      x0 as u32,
      y0 as u32,
      (x1 - x0).max(0) as u32,
      (y1 - y0).max(0) as u32,
    )
  }
}
