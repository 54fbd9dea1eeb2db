//! Bevy integration.

use bevy::prelude::*;

use crate::backend::CpuBackend;
use crate::config::JfmConfig;
use crate::renderer::Renderer;

/// Shared jump flood renderer.
///
/// Systems borrow it mutably (`ResMut<JfmRenderer>`), which serializes their
/// use of its scratch pool.
#[derive(Resource, Debug)]
pub struct JfmRenderer(pub Renderer<CpuBackend>);

/// Loaded configuration, kept for systems that need the default parameters.
#[derive(Resource, Clone, Debug, Default)]
pub struct JfmSettings(pub JfmConfig);

/// Inserts [`JfmRenderer`] and [`JfmSettings`] built from a config.
#[derive(Default)]
pub struct JumpFloodPlugin {
  pub config: JfmConfig,
}

impl JumpFloodPlugin {
  pub fn new(config: JfmConfig) -> Self {
    Self { config }
  }
}

impl Plugin for JumpFloodPlugin {
  fn build(&self, app: &mut App) {
    app
      .insert_resource(JfmRenderer(Renderer::from_config(&self.config)))
      .insert_resource(JfmSettings(self.config.clone()));
  }
}
