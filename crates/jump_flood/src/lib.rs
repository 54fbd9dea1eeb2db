//! Jump Flood Map - nearest-seed distance transforms for RGBA pixel surfaces.
//!
//! A jump flood map (JFM) stores, for every pixel of a source surface, the
//! offset to the nearest seed pixel within a bounded search distance. Maps
//! are computed with the 1+JFA pass schedule on a [`RasterBackend`] and then
//! consumed by morphological effects such as [`Renderer::jfm_expand`].
//!
//! ```
//! use jump_flood::{ExpandPaint, InitMode, Renderer, Rgba, RgbaSurface};
//!
//! let mut source = RgbaSurface::new(32, 32);
//! source.set(16, 16, Rgba::WHITE);
//!
//! let mut renderer = Renderer::from_config(&Default::default());
//! let mut jfmap = RgbaSurface::new(32, 32);
//! renderer.jfm_compute(&mut jfmap, &source, InitMode::Fill, 8, 0.5, 1.0)?;
//!
//! let mut target = RgbaSurface::new(32, 32);
//! renderer.jfm_expand(&mut target, &source, Some(&jfmap), (0, 0), 3.0, 0.0, ExpandPaint::default())?;
//! assert_eq!(target[(19, 16)], Rgba::WHITE);
//! # Ok::<(), jump_flood::JfmError>(())
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod jfm;
#[cfg(feature = "bevy")]
pub mod plugin;
pub mod primitives;
pub mod render;
pub mod renderer;
pub mod scheduling;
#[cfg(feature = "tracy")]
mod tracy_init;

pub use backend::{CpuBackend, RasterBackend, ScratchPool};
pub use config::{BackendConfig, ComputeConfig, ExpandConfig, HeatConfig, JfmConfig};
pub use error::{ConfigError, JfmError};
pub use jfm::{
  AA_MARGIN, ALPHA_EPSILON, ExpandPaint, InitMode, MAX_DISTANCE, Offset, SEED, UNRESOLVED,
  decode, encode,
};
#[cfg(feature = "bevy")]
pub use plugin::{JfmRenderer, JfmSettings, JumpFloodPlugin};
pub use primitives::{Rect, RgbaSurface, Surface};
pub use render::Rgba;
#[cfg(feature = "bevy")]
pub use render::{create_image, surface_from_image, upload_surface};
pub use renderer::Renderer;
#[cfg(feature = "tracy")]
pub use tracy_init::init_tracy;
