#[cfg(feature = "bevy")]
mod image;
mod rgba;

#[cfg(feature = "bevy")]
pub use image::{create_image, surface_from_image, upload_surface};
pub use rgba::Rgba;
