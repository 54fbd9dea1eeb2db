//! Jump flood propagation.
//!
//! A pass with stride `s` refines every pixel's nearest-seed offset using the
//! previous buffer only: the pixel's own record, then the records of the 8
//! pixels at `(i * s, j * s)` for `i, j` in `-1..=1`. Two buffers alternate
//! roles between passes; [`run_pass`] makes that choice explicit through
//! [`ActiveBuffer`].

use super::codec::{Offset, decode, encode};
use crate::backend::RasterBackend;
use crate::primitives::{Rect, RgbaSurface};
use crate::render::Rgba;

/// Neighbour directions in visiting order: `i` (x) outer, `j` (y) inner.
///
/// On equal distances the first candidate wins, so this order decides ties.
const NEIGHBORS: [(i32, i32); 8] = [
  (-1, -1),
  (-1, 0),
  (-1, 1),
  (0, -1),
  (0, 1),
  (1, -1),
  (1, 0),
  (1, 1),
];

/// Parameters of a single propagation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JumpPass {
  pub stride: i32,
  pub max_distance: i32,
}

/// Which of the two ping-pong buffers holds the latest state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveBuffer {
  /// The caller's jump flood map.
  Target,
  /// The backend scratch surface.
  Scratch,
}

impl ActiveBuffer {
  /// The buffer a pass reading from `self` writes into.
  #[inline]
  pub fn other(self) -> Self {
    match self {
      Self::Target => Self::Scratch,
      Self::Scratch => Self::Target,
    }
  }
}

/// Computes the refined record of pixel `(x, y)` from the previous buffer.
///
/// Candidates exceeding `max_distance` on either axis are treated as
/// unresolved. Only strictly closer candidates replace the current best.
pub fn jump_kernel(prev: &RgbaSurface, x: u32, y: u32, pass: JumpPass) -> Rgba {
  let mut best = decode(prev[(x, y)]);
  let mut best_dist = best.map_or(i64::MAX, Offset::length_squared);

  let (x, y) = (x as i64, y as i64);
  let stride = pass.stride as i64;
  for (i, j) in NEIGHBORS {
    let (step_x, step_y) = (i as i64 * stride, j as i64 * stride);
    let Some(&sample) = prev.get_signed(x + step_x, y + step_y) else {
      continue;
    };
    let Some(offset) = decode(sample) else {
      continue;
    };

    let candidate = offset + Offset::new(step_x as i32, step_y as i32);
    if !candidate.within(pass.max_distance) {
      continue;
    }
    let dist = candidate.length_squared();
    if dist < best_dist {
      best = Some(candidate);
      best_dist = dist;
    }
  }

  encode(best)
}

/// Runs one pass, reading `active` and writing the other buffer.
///
/// Returns the buffer that now holds the latest state.
pub fn run_pass<B: RasterBackend>(
  backend: &B,
  target: &mut RgbaSurface,
  scratch: &mut RgbaSurface,
  active: ActiveBuffer,
  pass: JumpPass,
) -> ActiveBuffer {
  let (read, write): (&RgbaSurface, &mut RgbaSurface) = match active {
    ActiveBuffer::Target => (&*target, scratch),
    ActiveBuffer::Scratch => (&*scratch, target),
  };
  let rect = Rect::full(write.width(), write.height());
  backend.blit(write, rect, |frag| jump_kernel(read, frag.x, frag.y, pass));
  active.other()
}
