//! Row-parallel fragment blitter.
//!
//! Every jump flood pass is a pure function of the pixel coordinate and a
//! read-only input surface, so a pass can write all of its output pixels in
//! any order. [`parallel_blit`] hands each destination row to a rayon worker;
//! [`serial_blit`] runs the same closure on the calling thread and produces
//! identical output.
//!
//! The closure never sees the destination surface, which is what keeps a
//! pass from reading values written during that same pass.

use rayon::prelude::*;

use crate::primitives::{Rect, Surface};

/// Fragment data passed to blit callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fragment {
  /// Absolute X coordinate on the destination surface.
  pub x: u32,
  /// Absolute Y coordinate on the destination surface (Y+ down).
  pub y: u32,
}

/// Writes `f(fragment)` into every pixel of `rect`, rows in parallel.
///
/// The rect is clamped to surface bounds; out-of-bounds portions are skipped.
pub fn parallel_blit<T, F>(surface: &mut Surface<T>, rect: Rect, f: F)
where
  T: Send,
  F: Fn(Fragment) -> T + Sync,
{
  let Some((rows, x0, x1, y0, width)) = row_span(surface, rect) else {
    return;
  };

  rows
    .par_chunks_mut(width)
    .enumerate()
    .for_each(|(dy, row)| {
      let y = y0 + dy as u32;
      for x in x0..x1 {
        row[x as usize] = f(Fragment { x, y });
      }
    });
  // rayon joins every row before returning, which is the pass barrier
}

/// Single-threaded equivalent of [`parallel_blit`].
pub fn serial_blit<T, F>(surface: &mut Surface<T>, rect: Rect, f: F)
where
  F: Fn(Fragment) -> T,
{
  let Some((rows, x0, x1, y0, width)) = row_span(surface, rect) else {
    return;
  };

  for (dy, row) in rows.chunks_mut(width).enumerate() {
    let y = y0 + dy as u32;
    for x in x0..x1 {
      row[x as usize] = f(Fragment { x, y });
    }
  }
}

/// Slices out the full rows covered by `rect`.
///
/// Returns `(rows, x0, x1, y0, row_width)` or `None` when nothing is covered.
fn row_span<T>(surface: &mut Surface<T>, rect: Rect) -> Option<(&mut [T], u32, u32, u32, usize)> {
  let rect = rect.clamped(surface.width(), surface.height());
  if rect.is_empty() {
    return None;
  }

  let width = surface.width() as usize;
  let start = rect.y as usize * width;
  let end = (rect.y + rect.height) as usize * width;
  let rows = &mut surface.as_slice_mut()[start..end];
  Some((rows, rect.x, rect.x + rect.width, rect.y, width))
}
