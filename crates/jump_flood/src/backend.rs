//! Raster backend: scratch storage, exact copies and per-pixel passes.
//!
//! The jump flood engine never allocates surfaces directly. It asks the
//! backend for scratch surfaces, runs every pass through [`RasterBackend::blit`]
//! and hands scratch storage back when a call completes.

use log::debug;

use crate::error::JfmError;
use crate::primitives::{Rect, RgbaSurface};
use crate::render::Rgba;
use crate::scheduling::{Fragment, parallel_blit, serial_blit};

/// Surface services the jump flood engine depends on.
///
/// A backend instance is mutable shared state (its scratch pool): calls that
/// share one must be serialized, which `&mut self` enforces.
pub trait RasterBackend {
  /// Returns a writable `width` x `height` surface with unspecified contents.
  ///
  /// Implementations may reuse previously recycled storage.
  fn allocate_scratch(&mut self, width: u32, height: u32) -> RgbaSurface;

  /// Returns scratch storage to the backend.
  fn recycle_scratch(&mut self, surface: RgbaSurface);

  /// Copies `src` into `dst` byte for byte.
  fn copy_surface(&self, dst: &mut RgbaSurface, src: &RgbaSurface) -> Result<(), JfmError>;

  /// Writes `f(fragment)` into every pixel of `rect` in `dst`.
  ///
  /// `f` must be a pure function of the fragment and of data it borrows
  /// immutably; pixels may be evaluated in any order or concurrently.
  fn blit<F>(&self, dst: &mut RgbaSurface, rect: Rect, f: F)
  where
    F: Fn(Fragment) -> Rgba + Sync;
}

/// Bounded pool of reusable scratch surfaces.
#[derive(Debug, Default)]
pub struct ScratchPool {
  free: Vec<RgbaSurface>,
  max_pooled: usize,
}

impl ScratchPool {
  /// Creates a pool that keeps at most `max_pooled` idle surfaces.
  pub fn new(max_pooled: usize) -> Self {
    Self {
      free: Vec::new(),
      max_pooled,
    }
  }

  /// Takes the smallest idle surface able to hold `width * height` pixels,
  /// or allocates a new one.
  pub fn acquire(&mut self, width: u32, height: u32) -> RgbaSurface {
    let needed = (width as usize) * (height as usize);
    let best = self
      .free
      .iter()
      .enumerate()
      .filter(|(_, s)| s.capacity() >= needed)
      .min_by_key(|(_, s)| s.capacity())
      .map(|(i, _)| i);

    match best {
      Some(i) => {
        let mut surface = self.free.swap_remove(i);
        debug!(
          "Reusing scratch surface ({} px capacity) for {}x{}",
          surface.capacity(),
          width,
          height
        );
        surface.reshape(width, height);
        surface
      }
      None => {
        debug!("Allocating scratch surface {}x{}", width, height);
        RgbaSurface::new(width, height)
      }
    }
  }

  /// Returns a surface to the pool, dropping it if the pool is full.
  pub fn release(&mut self, surface: RgbaSurface) {
    if self.free.len() < self.max_pooled {
      self.free.push(surface);
    }
  }

  /// Number of idle surfaces.
  pub fn idle_count(&self) -> usize {
    self.free.len()
  }
}

/// CPU backend executing passes with rayon.
#[derive(Debug)]
pub struct CpuBackend {
  pool: ScratchPool,
  parallel: bool,
}

impl CpuBackend {
  /// Default number of idle scratch surfaces kept for reuse.
  pub const DEFAULT_MAX_POOLED: usize = 4;

  /// Creates a parallel backend with the default pool size.
  pub fn new() -> Self {
    Self::with_options(true, Self::DEFAULT_MAX_POOLED)
  }

  /// Creates a backend with explicit threading and pool settings.
  pub fn with_options(parallel: bool, max_pooled: usize) -> Self {
    Self {
      pool: ScratchPool::new(max_pooled),
      parallel,
    }
  }

  /// Whether passes run on the rayon thread pool.
  pub fn is_parallel(&self) -> bool {
    self.parallel
  }

  /// The scratch pool, for inspection.
  pub fn pool(&self) -> &ScratchPool {
    &self.pool
  }
}

impl Default for CpuBackend {
  fn default() -> Self {
    Self::new()
  }
}

impl RasterBackend for CpuBackend {
  fn allocate_scratch(&mut self, width: u32, height: u32) -> RgbaSurface {
    self.pool.acquire(width, height)
  }

  fn recycle_scratch(&mut self, surface: RgbaSurface) {
    self.pool.release(surface);
  }

  fn copy_surface(&self, dst: &mut RgbaSurface, src: &RgbaSurface) -> Result<(), JfmError> {
    if dst.size() != src.size() {
      return Err(JfmError::DimensionMismatch {
        source_width: src.width(),
        source_height: src.height(),
        map_width: dst.width(),
        map_height: dst.height(),
      });
    }
    dst.as_slice_mut().copy_from_slice(src.as_slice());
    Ok(())
  }

  fn blit<F>(&self, dst: &mut RgbaSurface, rect: Rect, f: F)
  where
    F: Fn(Fragment) -> Rgba + Sync,
  {
    if self.parallel {
      parallel_blit(dst, rect, f);
    } else {
      serial_blit(dst, rect, f);
    }
  }
}
