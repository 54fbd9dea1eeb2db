//! jfm CLI
//!
//! Computes jump flood maps from PNG images and renders expansions and heat
//! maps from them.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use jump_flood::{ExpandPaint, InitMode, JfmConfig, Renderer, Rgba, RgbaSurface};
use log::info;

mod image_io;

#[derive(Parser)]
#[command(name = "jfm")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Jump flood maps for PNG images", long_about = None)]
struct Cli {
  /// TOML file with default parameters
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,

  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Compute a jump flood map and save it as PNG
  Compute {
    /// Source image
    input: PathBuf,

    /// Output map
    output: PathBuf,

    /// Seed selection
    #[arg(short, long)]
    mode: Option<ModeArg>,

    /// Largest offset searched, per axis
    #[arg(short = 'd', long)]
    max_distance: Option<i32>,

    /// Lower alpha bound for fill mode (inclusive)
    #[arg(long)]
    min_alpha: Option<f32>,

    /// Upper alpha bound for fill mode (inclusive)
    #[arg(long)]
    max_alpha: Option<f32>,
  },

  /// Grow the visible pixels of an image
  Expand {
    /// Source image
    input: PathBuf,

    /// Output image
    output: PathBuf,

    /// Precomputed map; computed on the fly when omitted
    #[arg(long)]
    map: Option<PathBuf>,

    /// Growth in pixels
    #[arg(short, long)]
    thickness: Option<f32>,

    /// Antialias band width in pixels, 0 for hard edges
    #[arg(long)]
    aa_margin: Option<f32>,

    /// Solid color as RRGGBB or RRGGBBAA hex (default white)
    #[arg(long, conflicts_with = "seed_color")]
    color: Option<String>,

    /// Paint with the color of the nearest source pixel
    #[arg(long)]
    seed_color: bool,

    /// Transparent border added around the source first
    #[arg(long, default_value_t = 0, conflicts_with = "map")]
    pad: u32,
  },

  /// Render a distance heat map of a map image
  Heat {
    /// Map image
    map: PathBuf,

    /// Output image
    output: PathBuf,

    /// Distance that maps to the cold end of the ramp
    #[arg(short = 'd', long)]
    max_distance: Option<i32>,
  },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
  Boundary,
  Fill,
}

impl From<ModeArg> for InitMode {
  fn from(mode: ModeArg) -> Self {
    match mode {
      ModeArg::Boundary => InitMode::Boundary,
      ModeArg::Fill => InitMode::Fill,
    }
  }
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let level = if cli.verbose {
    log::LevelFilter::Debug
  } else {
    log::LevelFilter::Info
  };
  env_logger::Builder::from_default_env()
    .filter_level(level)
    .init();

  let config = match &cli.config {
    Some(path) => JfmConfig::load(path)
      .with_context(|| format!("failed to load config {}", path.display()))?,
    None => JfmConfig::default(),
  };
  let mut renderer = Renderer::from_config(&config);

  match cli.command {
    Commands::Compute {
      input,
      output,
      mode,
      max_distance,
      min_alpha,
      max_alpha,
    } => {
      let mut compute = config.compute.clone();
      if let Some(mode) = mode {
        compute.init_mode = mode.into();
      }
      compute.max_distance = max_distance.unwrap_or(compute.max_distance);
      compute.min_alpha = min_alpha.unwrap_or(compute.min_alpha);
      compute.max_alpha = max_alpha.unwrap_or(compute.max_alpha);
      cmd_compute(&mut renderer, &input, &output, &compute)
    }

    Commands::Expand {
      input,
      output,
      map,
      thickness,
      aa_margin,
      color,
      seed_color,
      pad,
    } => {
      let paint = match (seed_color, color) {
        (true, _) => ExpandPaint::SeedColor,
        (false, Some(hex)) => ExpandPaint::Solid(parse_color(&hex)?),
        (false, None) => ExpandPaint::default(),
      };
      let thickness = thickness.unwrap_or(config.expand.thickness);
      let aa_margin = aa_margin.unwrap_or(config.expand.aa_margin);
      cmd_expand(
        &mut renderer,
        &input,
        &output,
        map.as_deref(),
        thickness,
        aa_margin,
        paint,
        pad,
      )
    }

    Commands::Heat {
      map,
      output,
      max_distance,
    } => {
      let max_distance = max_distance.unwrap_or(config.heat.max_distance);
      cmd_heat(&mut renderer, &map, &output, max_distance)
    }
  }
}

fn cmd_compute(
  renderer: &mut Renderer,
  input: &Path,
  output: &Path,
  compute: &jump_flood::ComputeConfig,
) -> Result<()> {
  let source = image_io::load(input)?;
  info!(
    "Computing {:?} map of {} ({}x{}, max distance {})",
    compute.init_mode,
    input.display(),
    source.width(),
    source.height(),
    compute.max_distance
  );

  let mut jfmap = RgbaSurface::new(source.width(), source.height());
  renderer.jfm_compute(
    &mut jfmap,
    &source,
    compute.init_mode,
    compute.max_distance,
    compute.min_alpha,
    compute.max_alpha,
  )?;

  image_io::save(&jfmap, output)?;
  info!("Wrote {}", output.display());
  Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_expand(
  renderer: &mut Renderer,
  input: &Path,
  output: &Path,
  map: Option<&Path>,
  thickness: f32,
  aa_margin: f32,
  paint: ExpandPaint,
  pad: u32,
) -> Result<()> {
  let source = image_io::pad(&image_io::load(input)?, pad);
  let jfmap = map.map(image_io::load).transpose()?;
  info!(
    "Expanding {} by {} px (aa {}, {:?})",
    input.display(),
    thickness,
    aa_margin,
    paint
  );

  let mut target = RgbaSurface::new(source.width(), source.height());
  renderer.jfm_expand(
    &mut target,
    &source,
    jfmap.as_ref(),
    (0, 0),
    thickness,
    aa_margin,
    paint,
  )?;

  image_io::save(&target, output)?;
  info!("Wrote {}", output.display());
  Ok(())
}

fn cmd_heat(renderer: &mut Renderer, map: &Path, output: &Path, max_distance: i32) -> Result<()> {
  let jfmap = image_io::load(map)?;
  let mut target = RgbaSurface::new(jfmap.width(), jfmap.height());
  renderer.jfm_heat(&mut target, &jfmap, (0, 0), max_distance)?;

  image_io::save(&target, output)?;
  info!("Wrote {}", output.display());
  Ok(())
}

/// Parses `RRGGBB` or `RRGGBBAA`, with an optional leading `#`.
fn parse_color(hex: &str) -> Result<Rgba> {
  let digits = hex.strip_prefix('#').unwrap_or(hex);
  if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
    bail!("invalid color '{}', expected RRGGBB or RRGGBBAA", hex);
  }
  let channel = |i: usize| {
    u8::from_str_radix(&digits[i..i + 2], 16)
      .with_context(|| format!("invalid color '{}'", hex))
  };
  let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
  Ok(Rgba::new(channel(0)?, channel(2)?, channel(4)?, alpha))
}
