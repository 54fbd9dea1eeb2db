//! Conversions between surfaces and Bevy images.
//!
//! Jump flood maps hold encoded offsets rather than colors, so images are
//! created as linear `Rgba8Unorm`: an sRGB format would let the GPU remap the
//! bytes on sampling.

use bevy::asset::RenderAssetUsages;
use bevy::image::ImageSampler;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use crate::primitives::RgbaSurface;

/// Creates a nearest-sampled RGBA8 image holding a copy of the surface.
pub fn create_image(surface: &RgbaSurface) -> Image {
  let size = Extent3d {
    width: surface.width(),
    height: surface.height(),
    depth_or_array_layers: 1,
  };

  let mut image = Image::new(
    size,
    TextureDimension::D2,
    surface.as_bytes().to_vec(),
    TextureFormat::Rgba8Unorm,
    RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
  );

  // Offsets must never be filtered between texels
  image.sampler = ImageSampler::nearest();
  image
}

/// Uploads surface pixel data to an existing image.
///
/// Returns `false` (and leaves the image untouched) when the image has no CPU
/// data or its dimensions differ from the surface.
pub fn upload_surface(surface: &RgbaSurface, image: &mut Image) -> bool {
  if image.width() != surface.width() || image.height() != surface.height() {
    return false;
  }
  let bytes = surface.as_bytes();
  match image.data {
    Some(ref mut data) if data.len() == bytes.len() => {
      data.copy_from_slice(bytes);
      true
    }
    _ => false,
  }
}

/// Reads an RGBA8 image back into a surface.
///
/// Returns `None` for other texture formats or images without CPU data.
pub fn surface_from_image(image: &Image) -> Option<RgbaSurface> {
  match image.texture_descriptor.format {
    TextureFormat::Rgba8Unorm | TextureFormat::Rgba8UnormSrgb => {}
    _ => return None,
  }
  let data = image.data.as_ref()?;
  RgbaSurface::from_bytes(image.width(), image.height(), data)
}
