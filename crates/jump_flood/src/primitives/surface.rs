//! Pixel buffer shared by sources, jump flood maps and render targets.
//!
//! A [`Surface`] is a generic 2D buffer that can hold any element type.
//! The primary use case is [`RgbaSurface`], which carries both color images
//! and encoded jump flood maps.
//!
//! # Coordinate System
//!
//! Surfaces use image coordinates:
//! - **X+** is to the right
//! - **Y+** is downward
//! - **(0, 0)** is the top-left corner
//!
//! Data is stored in row-major order where row 0 is the top of the surface.

use std::ops::{Index, IndexMut};

use crate::render::Rgba;

// as_bytes() and from_bytes() rely on Rgba being exactly four u8 channels.
const _: () = assert!(std::mem::size_of::<Rgba>() == 4);

/// A 2D buffer of elements.
///
/// Data is stored in row-major order (y * width + x).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface<T> {
  data: Vec<T>,
  width: u32,
  height: u32,
}

impl<T: Clone + Default> Surface<T> {
  /// Creates a new surface filled with the default value.
  pub fn new(width: u32, height: u32) -> Self {
    Self::filled(width, height, T::default())
  }

  /// Creates a new surface filled with the given value.
  pub fn filled(width: u32, height: u32, value: T) -> Self {
    let len = (width as usize) * (height as usize);
    Self {
      data: vec![value; len],
      width,
      height,
    }
  }

  /// Changes the dimensions of the surface in place, keeping its allocation.
  ///
  /// Element contents after a reshape are unspecified: elements that survive
  /// keep stale values, new ones are defaulted. Used by scratch pools, whose
  /// consumers overwrite every element.
  pub fn reshape(&mut self, width: u32, height: u32) {
    let len = (width as usize) * (height as usize);
    self.data.resize(len, T::default());
    self.width = width;
    self.height = height;
  }
}

impl<T> Surface<T> {
  /// Returns the width of the surface.
  #[inline]
  pub fn width(&self) -> u32 {
    self.width
  }

  /// Returns the height of the surface.
  #[inline]
  pub fn height(&self) -> u32 {
    self.height
  }

  /// Returns `(width, height)`.
  #[inline]
  pub fn size(&self) -> (u32, u32) {
    (self.width, self.height)
  }

  /// Returns true if the surface holds no elements.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  /// Number of elements the underlying allocation can hold without growing.
  #[inline]
  pub fn capacity(&self) -> usize {
    self.data.capacity()
  }

  /// Converts (x, y) to a linear index, or `None` if out of bounds.
  #[inline]
  fn index_of(&self, x: u32, y: u32) -> Option<usize> {
    if x < self.width && y < self.height {
      Some((y as usize) * (self.width as usize) + (x as usize))
    } else {
      None
    }
  }

  /// Returns a reference to the element at (x, y), or `None` if out of bounds.
  #[inline]
  pub fn get(&self, x: u32, y: u32) -> Option<&T> {
    self.index_of(x, y).map(|i| &self.data[i])
  }

  /// Returns the element at signed coordinates, or `None` outside the surface.
  ///
  /// Jump kernels sample at `p + stride` which can fall off any edge.
  #[inline]
  pub fn get_signed(&self, x: i64, y: i64) -> Option<&T> {
    if x < 0 || y < 0 || x > u32::MAX as i64 || y > u32::MAX as i64 {
      return None;
    }
    self.get(x as u32, y as u32)
  }

  /// Returns a mutable reference to the element at (x, y), or `None` if out of
  /// bounds.
  #[inline]
  pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut T> {
    self.index_of(x, y).map(|i| &mut self.data[i])
  }

  /// Sets the element at (x, y). Returns `true` if successful, `false` if out
  /// of bounds.
  #[inline]
  pub fn set(&mut self, x: u32, y: u32, value: T) -> bool {
    if let Some(i) = self.index_of(x, y) {
      self.data[i] = value;
      true
    } else {
      false
    }
  }

  /// Returns a slice of the underlying data.
  #[inline]
  pub fn as_slice(&self) -> &[T] {
    &self.data
  }

  /// Returns a mutable slice of the underlying data.
  #[inline]
  pub fn as_slice_mut(&mut self) -> &mut [T] {
    &mut self.data
  }

  /// Fills the entire surface with the given value.
  #[inline]
  pub fn fill(&mut self, value: T)
  where
    T: Clone,
  {
    self.data.fill(value);
  }
}

impl<T> Index<(u32, u32)> for Surface<T> {
  type Output = T;

  #[inline]
  fn index(&self, (x, y): (u32, u32)) -> &Self::Output {
    let i = (y as usize) * (self.width as usize) + (x as usize);
    &self.data[i]
  }
}

impl<T> IndexMut<(u32, u32)> for Surface<T> {
  #[inline]
  fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut Self::Output {
    let i = (y as usize) * (self.width as usize) + (x as usize);
    &mut self.data[i]
  }
}

/// A surface of 4-channel 8-bit pixels.
pub type RgbaSurface = Surface<Rgba>;

impl Surface<Rgba> {
  /// Builds a surface from tightly packed RGBA8 bytes.
  ///
  /// Returns `None` when `bytes.len() != width * height * 4`.
  pub fn from_bytes(width: u32, height: u32, bytes: &[u8]) -> Option<Self> {
    let len = (width as usize) * (height as usize);
    if bytes.len() != len * 4 {
      return None;
    }
    let data = bytes
      .chunks_exact(4)
      .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
      .collect();
    Some(Self {
      data,
      width,
      height,
    })
  }

  /// Returns the raw pixel data as a byte slice (for GPU upload or encoding).
  #[inline]
  pub fn as_bytes(&self) -> &[u8] {
    let ptr = self.data.as_ptr() as *const u8;
    let len = self.data.len() * std::mem::size_of::<Rgba>();
    // SAFETY: Rgba is repr(C) with four u8 fields and no padding, and the
    // Vec is contiguous.
    unsafe { std::slice::from_raw_parts(ptr, len) }
  }
}
