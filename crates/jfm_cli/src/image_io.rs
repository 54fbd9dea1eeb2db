//! PNG loading and saving for surfaces.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use image::RgbaImage;
use jump_flood::scheduling::parallel_blit;
use jump_flood::{Rect, Rgba, RgbaSurface};

/// Decodes any supported image file into straight-alpha RGBA8.
pub fn load(path: &Path) -> Result<RgbaSurface> {
  let image = image::open(path)
    .with_context(|| format!("failed to open {}", path.display()))?
    .to_rgba8();
  let (width, height) = image.dimensions();
  RgbaSurface::from_bytes(width, height, image.as_raw())
    .ok_or_else(|| anyhow!("{} has an unexpected pixel layout", path.display()))
}

/// Writes a surface as PNG. Map bytes are stored unmodified.
pub fn save(surface: &RgbaSurface, path: &Path) -> Result<()> {
  let image = RgbaImage::from_raw(
    surface.width(),
    surface.height(),
    surface.as_bytes().to_vec(),
  )
  .ok_or_else(|| anyhow!("surface buffer does not match its size"))?;
  image
    .save(path)
    .with_context(|| format!("failed to write {}", path.display()))
}

/// Copies `source` into the middle of a transparent canvas with `pad` pixels
/// on every side.
pub fn pad(source: &RgbaSurface, pad: u32) -> RgbaSurface {
  if pad == 0 {
    return source.clone();
  }
  let width = source.width() + pad * 2;
  let height = source.height() + pad * 2;
  let mut canvas = RgbaSurface::filled(width, height, Rgba::TRANSPARENT);
  let rect = Rect::new(pad, pad, source.width(), source.height());
  parallel_blit(&mut canvas, rect, |frag| source[(frag.x - pad, frag.y - pad)]);
  canvas
}
