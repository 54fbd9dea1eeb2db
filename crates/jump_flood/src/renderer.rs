//! Public entry points: computing jump flood maps and drawing from them.
//!
//! Every entry point validates all of its inputs before touching any output
//! surface, so an `Err` always leaves the caller's surfaces as they were.

use log::{debug, trace};

use crate::backend::{CpuBackend, RasterBackend};
use crate::config::JfmConfig;
use crate::error::JfmError;
use crate::jfm::{
  ALPHA_EPSILON, ActiveBuffer, ExpandPaint, Expansion, InitMode, JumpPass, PassSchedule,
  SeedRule, check_max_distance, decode, heat_color, run_pass,
};
use crate::primitives::{Rect, RgbaSurface};

/// Jump flood engine bound to a raster backend.
///
/// Calls take `&mut self` because they share the backend's scratch pool.
#[derive(Debug, Default)]
pub struct Renderer<B: RasterBackend = CpuBackend> {
  backend: B,
}

impl Renderer<CpuBackend> {
  /// Builds a CPU renderer from the `[backend]` table of a config.
  pub fn from_config(config: &JfmConfig) -> Self {
    let backend = CpuBackend::with_options(
      config.backend.parallel,
      config.backend.max_pooled_scratch,
    );
    Self::new(backend)
  }
}

impl<B: RasterBackend> Renderer<B> {
  pub fn new(backend: B) -> Self {
    Self { backend }
  }

  pub fn backend(&self) -> &B {
    &self.backend
  }

  pub fn backend_mut(&mut self) -> &mut B {
    &mut self.backend
  }

  /// Computes the jump flood map of `source` into `jfmap`.
  ///
  /// Seeds are chosen by `init_mode` (`min_alpha..=max_alpha` applies to
  /// [`InitMode::Fill`]). Pixels with no seed within `max_distance` on both
  /// axes are left unresolved.
  pub fn jfm_compute(
    &mut self,
    jfmap: &mut RgbaSurface,
    source: &RgbaSurface,
    init_mode: InitMode,
    max_distance: i32,
    min_alpha: f32,
    max_alpha: f32,
  ) -> Result<(), JfmError> {
    check_max_distance(max_distance)?;
    check_same_size(source, jfmap)?;
    let rule = SeedRule::new(init_mode, min_alpha, max_alpha)?;

    self.flood(jfmap, source, rule, max_distance)
  }

  /// Like [`Self::jfm_compute`], but writes into a surface taken from the
  /// backend's scratch pool.
  ///
  /// Hand the map back with [`Self::release`] once done with it.
  pub fn jfm_compute_pooled(
    &mut self,
    source: &RgbaSurface,
    init_mode: InitMode,
    max_distance: i32,
    min_alpha: f32,
    max_alpha: f32,
  ) -> Result<RgbaSurface, JfmError> {
    check_max_distance(max_distance)?;
    let rule = SeedRule::new(init_mode, min_alpha, max_alpha)?;

    let mut jfmap = self
      .backend
      .allocate_scratch(source.width(), source.height());
    match self.flood(&mut jfmap, source, rule, max_distance) {
      Ok(()) => Ok(jfmap),
      Err(err) => {
        self.backend.recycle_scratch(jfmap);
        Err(err)
      }
    }
  }

  /// Returns a surface from [`Self::jfm_compute_pooled`] to the pool.
  pub fn release(&mut self, surface: RgbaSurface) {
    self.backend.recycle_scratch(surface);
  }

  /// Draws `source` grown by `thickness` pixels into `target` at `offset`.
  ///
  /// Without a map, one is computed from every visible source pixel and
  /// dropped afterwards. Output replaces the target pixels (no blending) and
  /// is clipped to the target.
  #[allow(clippy::too_many_arguments)]
  pub fn jfm_expand(
    &mut self,
    target: &mut RgbaSurface,
    source: &RgbaSurface,
    jfmap: Option<&RgbaSurface>,
    offset: (i32, i32),
    thickness: f32,
    aa_margin: f32,
    paint: ExpandPaint,
  ) -> Result<(), JfmError> {
    let expansion = Expansion::new(thickness, aa_margin, paint)?;
    if let Some(jfmap) = jfmap {
      check_same_size(source, jfmap)?;
    }

    match jfmap {
      Some(jfmap) => {
        self.draw_expansion(target, source, jfmap, offset, &expansion);
        Ok(())
      }
      None => {
        let max_distance = (thickness.ceil() as i32).max(1);
        debug!(
          "Expanding without a map, computing one (max distance {})",
          max_distance
        );
        let jfmap =
          self.jfm_compute_pooled(source, InitMode::Fill, max_distance, ALPHA_EPSILON, 1.0)?;
        self.draw_expansion(target, source, &jfmap, offset, &expansion);
        self.release(jfmap);
        Ok(())
      }
    }
  }

  /// Draws a distance heat map of `jfmap` into `target` at `offset`.
  pub fn jfm_heat(
    &mut self,
    target: &mut RgbaSurface,
    jfmap: &RgbaSurface,
    offset: (i32, i32),
    max_distance: i32,
  ) -> Result<(), JfmError> {
    check_max_distance(max_distance)?;

    let (ox, oy) = offset;
    let rect = Rect::placed(
      ox,
      oy,
      jfmap.width(),
      jfmap.height(),
      target.width(),
      target.height(),
    );
    self.backend.blit(target, rect, |frag| {
      let (x, y) = local(frag.x, frag.y, offset);
      heat_color(decode(jfmap[(x, y)]), max_distance)
    });
    Ok(())
  }

  /// Shrinks the source by `thickness`. Not implemented yet.
  #[allow(clippy::too_many_arguments)]
  pub fn jfm_erode(
    &mut self,
    _target: &mut RgbaSurface,
    _source: &RgbaSurface,
    _jfmap: Option<&RgbaSurface>,
    _offset: (i32, i32),
    _thickness: f32,
    _aa_margin: f32,
    _color_mix: f32,
  ) -> Result<(), JfmError> {
    Err(JfmError::Unimplemented("jfm_erode"))
  }

  /// Draws a band from `inner_thickness` inside the source edge to
  /// `outer_thickness` outside it. Not implemented yet.
  #[allow(clippy::too_many_arguments)]
  pub fn jfm_outline(
    &mut self,
    _target: &mut RgbaSurface,
    _source: &RgbaSurface,
    _jfmap: Option<&RgbaSurface>,
    _offset: (i32, i32),
    _inner_thickness: f32,
    _outer_thickness: f32,
    _inner_opacity: f32,
    _color_mix: f32,
  ) -> Result<(), JfmError> {
    Err(JfmError::Unimplemented("jfm_outline"))
  }

  /// Draws a contour band inside the source edge. Not implemented yet.
  #[allow(clippy::too_many_arguments)]
  pub fn jfm_inset_contour(
    &mut self,
    _target: &mut RgbaSurface,
    _source: &RgbaSurface,
    _jfmap: Option<&RgbaSurface>,
    _offset: (i32, i32),
    _inner_thickness: f32,
    _inner_opacity: f32,
    _color_mix: f32,
  ) -> Result<(), JfmError> {
    Err(JfmError::Unimplemented("jfm_inset_contour"))
  }

  /// Seeds and propagates into `jfmap`. Inputs are already validated.
  fn flood(
    &mut self,
    jfmap: &mut RgbaSurface,
    source: &RgbaSurface,
    rule: SeedRule,
    max_distance: i32,
  ) -> Result<(), JfmError> {
    #[cfg(feature = "tracy")]
    let _span = tracing::info_span!("jfm_compute", max_distance).entered();

    let (width, height) = source.size();
    let schedule = PassSchedule::new(max_distance);
    debug!(
      "Computing JFM {}x{} ({:?}, max distance {}, strides {:?})",
      width,
      height,
      rule.mode(),
      max_distance,
      schedule.strides()
    );

    let mut scratch = self.backend.allocate_scratch(width, height);
    self.backend.blit(&mut scratch, Rect::full(width, height), |frag| {
      rule.classify(source, frag.x, frag.y)
    });

    let mut active = ActiveBuffer::Scratch;
    for (pass_idx, &stride) in schedule.strides().iter().enumerate() {
      #[cfg(feature = "tracy")]
      let _pass_span = tracing::info_span!("jfm_pass", pass = pass_idx, stride).entered();

      trace!("JFM pass {} stride {} reads {:?}", pass_idx, stride, active);
      let pass = JumpPass {
        stride,
        max_distance,
      };
      active = run_pass(&self.backend, jfmap, &mut scratch, active, pass);
    }

    let result = match active {
      ActiveBuffer::Target => Ok(()),
      ActiveBuffer::Scratch => self.backend.copy_surface(jfmap, &scratch),
    };
    self.backend.recycle_scratch(scratch);
    result
  }

  fn draw_expansion(
    &self,
    target: &mut RgbaSurface,
    source: &RgbaSurface,
    jfmap: &RgbaSurface,
    offset: (i32, i32),
    expansion: &Expansion,
  ) {
    #[cfg(feature = "tracy")]
    let _span = tracing::info_span!("jfm_expand").entered();

    let (ox, oy) = offset;
    let rect = Rect::placed(
      ox,
      oy,
      source.width(),
      source.height(),
      target.width(),
      target.height(),
    );
    self.backend.blit(target, rect, |frag| {
      let (x, y) = local(frag.x, frag.y, offset);
      expansion.shade(source, jfmap, x, y)
    });
  }
}

/// Converts target coordinates inside a placed rect to source coordinates.
#[inline]
fn local(x: u32, y: u32, (ox, oy): (i32, i32)) -> (u32, u32) {
  ((x as i64 - ox as i64) as u32, (y as i64 - oy as i64) as u32)
}

fn check_same_size(source: &RgbaSurface, jfmap: &RgbaSurface) -> Result<(), JfmError> {
  if source.size() == jfmap.size() {
    return Ok(());
  }
  Err(JfmError::DimensionMismatch {
    source_width: source.width(),
    source_height: source.height(),
    map_width: jfmap.width(),
    map_height: jfmap.height(),
  })
}
