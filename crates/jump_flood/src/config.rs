//! TOML configuration for the renderer and the `jfm` command.
//!
//! Every table and field is optional; missing entries take their defaults.
//!
//! ```toml
//! [compute]
//! init_mode = "boundary"   # or "fill"
//! max_distance = 64
//! min_alpha = 0.001
//! max_alpha = 1.0
//!
//! [expand]
//! thickness = 4.0
//! aa_margin = 1.333
//!
//! [heat]
//! max_distance = 64
//!
//! [backend]
//! parallel = true
//! max_pooled_scratch = 4
//! ```

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::backend::CpuBackend;
use crate::error::{ConfigError, JfmError};
use crate::jfm::{
  AA_MARGIN, ALPHA_EPSILON, ExpandPaint, Expansion, InitMode, SeedRule, check_max_distance,
};

/// Root configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JfmConfig {
  pub compute: ComputeConfig,
  pub expand: ExpandConfig,
  pub heat: HeatConfig,
  pub backend: BackendConfig,
}

/// Parameters of `jfm_compute`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputeConfig {
  pub init_mode: InitMode,
  pub max_distance: i32,
  pub min_alpha: f32,
  pub max_alpha: f32,
}

impl Default for ComputeConfig {
  fn default() -> Self {
    Self {
      init_mode: InitMode::Boundary,
      max_distance: 64,
      min_alpha: ALPHA_EPSILON,
      max_alpha: 1.0,
    }
  }
}

/// Parameters of `jfm_expand`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandConfig {
  pub thickness: f32,
  pub aa_margin: f32,
}

impl Default for ExpandConfig {
  fn default() -> Self {
    Self {
      thickness: 4.0,
      aa_margin: AA_MARGIN,
    }
  }
}

/// Parameters of `jfm_heat`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatConfig {
  pub max_distance: i32,
}

impl Default for HeatConfig {
  fn default() -> Self {
    Self { max_distance: 64 }
  }
}

/// CPU backend settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
  /// Run passes on the rayon thread pool.
  pub parallel: bool,
  /// Idle scratch surfaces kept for reuse.
  pub max_pooled_scratch: usize,
}

impl Default for BackendConfig {
  fn default() -> Self {
    Self {
      parallel: true,
      max_pooled_scratch: CpuBackend::DEFAULT_MAX_POOLED,
    }
  }
}

impl JfmConfig {
  /// Parses and validates a TOML document.
  pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
    let config: Self = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
  }

  /// Reads, parses and validates a TOML file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let config = Self::from_toml_str(&contents)?;
    debug!("Loaded JFM config from {}", path.display());
    Ok(config)
  }

  pub fn to_toml_string(&self) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(self)?)
  }

  /// Writes the config as TOML, creating parent directories as needed.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
      && !parent.as_os_str().is_empty()
    {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, self.to_toml_string()?)?;
    debug!("Saved JFM config to {}", path.display());
    Ok(())
  }

  /// Applies the same checks the renderer applies to its arguments.
  pub fn validate(&self) -> Result<(), JfmError> {
    check_max_distance(self.compute.max_distance)?;
    SeedRule::new(
      self.compute.init_mode,
      self.compute.min_alpha,
      self.compute.max_alpha,
    )?;
    Expansion::new(
      self.expand.thickness,
      self.expand.aa_margin,
      ExpandPaint::default(),
    )?;
    check_max_distance(self.heat.max_distance)?;
    Ok(())
  }
}
