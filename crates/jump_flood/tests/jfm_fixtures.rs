//! Exact-output fixtures and randomized invariants for `jfm_compute`.
//!
//! Run: cargo test -p jump_flood --test jfm_fixtures

use jump_flood::{
  CpuBackend, InitMode, JfmError, MAX_DISTANCE, Offset, Renderer, Rgba, RgbaSurface, SEED,
  UNRESOLVED, decode,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const U: [u8; 4] = [255, 255, 255, 255];

/// Expected bytes for the hollow 3x3 ring in the top-left corner of a 9x9
/// surface, boundary mode, max distance 4. Row-major, `[r, g, b, a]`.
#[rustfmt::skip]
const RING_FIXTURE: [[[u8; 4]; 9]; 9] = [
  [[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [128, 1, 0, 0], [128, 2, 0, 0], [128, 3, 0, 0], [128, 4, 0, 0], U, U],
  [[0, 0, 0, 0], [128, 1, 0, 0], [0, 0, 0, 0], [128, 1, 0, 0], [128, 2, 0, 0], [128, 3, 0, 0], [128, 4, 0, 0], U, U],
  [[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [128, 1, 0, 0], [128, 2, 0, 0], [128, 3, 0, 0], [128, 4, 0, 0], U, U],
  [[0, 0, 128, 1], [0, 0, 128, 1], [0, 0, 128, 1], [128, 1, 128, 1], [128, 2, 128, 1], [128, 3, 128, 1], [128, 4, 128, 1], U, U],
  [[0, 0, 128, 2], [0, 0, 128, 2], [0, 0, 128, 2], [128, 1, 128, 2], [128, 2, 128, 2], [128, 3, 128, 2], [128, 4, 128, 2], U, U],
  [[0, 0, 128, 3], [0, 0, 128, 3], [0, 0, 128, 3], [128, 1, 128, 3], [128, 2, 128, 3], [128, 3, 128, 3], [128, 4, 128, 3], U, U],
  [[0, 0, 128, 4], [0, 0, 128, 4], [0, 0, 128, 4], [128, 1, 128, 4], [128, 2, 128, 4], [128, 3, 128, 4], [128, 4, 128, 4], U, U],
  [U, U, U, U, U, U, U, U, U],
  [U, U, U, U, U, U, U, U, U],
];

fn renderer() -> Renderer {
  Renderer::new(CpuBackend::new())
}

fn ring_source() -> RgbaSurface {
  let mut source = RgbaSurface::new(9, 9);
  for (x, y) in [
    (0, 0),
    (1, 0),
    (2, 0),
    (0, 1),
    (2, 1),
    (0, 2),
    (1, 2),
    (2, 2),
  ] {
    source.set(x, y, Rgba::WHITE);
  }
  source
}

#[test]
fn hollow_ring_boundary_fixture() {
  let source = ring_source();
  // Garbage prefill: every pixel must be overwritten
  let mut jfmap = RgbaSurface::filled(9, 9, Rgba::new(7, 7, 7, 7));
  renderer()
    .jfm_compute(&mut jfmap, &source, InitMode::Boundary, 4, 0.0, 1.0)
    .unwrap();

  for y in 0..9 {
    for x in 0..9 {
      let expected = Rgba::from(RING_FIXTURE[y as usize][x as usize]);
      assert_eq!(jfmap[(x, y)], expected, "pixel ({x}, {y})");
    }
  }

  assert_eq!(decode(jfmap[(1, 1)]), Some(Offset::new(-1, 0)));
  assert_eq!(decode(jfmap[(6, 6)]), Some(Offset::new(-4, -4)));
}

#[test]
fn tall_strip_single_seed_fixture() {
  let mut source = RgbaSurface::new(1, 260);
  source.set(0, 258, Rgba::WHITE);
  let mut jfmap = RgbaSurface::new(1, 260);
  renderer()
    .jfm_compute(&mut jfmap, &source, InitMode::Fill, 257, 0.5, 1.0)
    .unwrap();

  // 258 pixels away, one more than the max distance
  assert_eq!(jfmap[(0, 0)], UNRESOLVED);
  assert_eq!(jfmap[(0, 1)], Rgba::new(0, 0, 1, 1)); // dy = 257
  for y in 1..=258u32 {
    let dy = 258 - y as i32;
    assert_eq!(decode(jfmap[(0, y)]), Some(Offset::new(0, dy)), "y = {y}");
  }
  assert_eq!(jfmap[(0, 258)], SEED);
  assert_eq!(jfmap[(0, 259)], Rgba::new(0, 0, 0x80, 1));
}

#[test]
fn dimension_mismatch_leaves_map_untouched() {
  let source = ring_source();
  let before = RgbaSurface::filled(8, 9, Rgba::new(3, 1, 4, 1));
  let mut jfmap = before.clone();

  let err = renderer()
    .jfm_compute(&mut jfmap, &source, InitMode::Boundary, 4, 0.0, 1.0)
    .unwrap_err();
  assert_eq!(
    err,
    JfmError::DimensionMismatch {
      source_width: 9,
      source_height: 9,
      map_width: 8,
      map_height: 9,
    }
  );
  assert_eq!(err.to_string(), "source size != jfmap size (9x9 != 8x9)");
  assert_eq!(jfmap, before);
}

#[test]
fn max_distance_bounds() {
  let source = ring_source();
  let mut jfmap = RgbaSurface::new(9, 9);
  let mut renderer = renderer();
  assert!(
    renderer
      .jfm_compute(&mut jfmap, &source, InitMode::Boundary, MAX_DISTANCE, 0.0, 1.0)
      .is_ok()
  );
  assert_eq!(
    renderer.jfm_compute(&mut jfmap, &source, InitMode::Boundary, MAX_DISTANCE + 1, 0.0, 1.0),
    Err(JfmError::MaxDistanceOutOfRange(MAX_DISTANCE + 1))
  );
}

fn random_source(rng: &mut StdRng, width: u32, height: u32, density: f64) -> RgbaSurface {
  let mut source = RgbaSurface::new(width, height);
  for y in 0..height {
    for x in 0..width {
      if rng.gen_bool(density) {
        source.set(x, y, Rgba::new(rng.r#gen(), rng.r#gen(), rng.r#gen(), 255));
      }
    }
  }
  source
}

#[test]
fn random_maps_point_at_seeds_within_range() {
  let mut rng = StdRng::seed_from_u64(0x5eed);
  let mut renderer = renderer();

  for _ in 0..12 {
    let width = rng.gen_range(1..48);
    let height = rng.gen_range(1..48);
    let max_distance = rng.gen_range(1..24);
    let density = rng.gen_range(0.002..0.05);
    let source = random_source(&mut rng, width, height, density);

    let mut jfmap = RgbaSurface::new(width, height);
    renderer
      .jfm_compute(&mut jfmap, &source, InitMode::Fill, max_distance, 0.5, 1.0)
      .unwrap();

    for y in 0..height {
      for x in 0..width {
        let is_seed = source[(x, y)].a == 255;
        let record = decode(jfmap[(x, y)]);
        if is_seed {
          assert_eq!(record, Some(Offset::ZERO), "seed ({x}, {y})");
          continue;
        }
        let Some(offset) = record else {
          continue;
        };
        assert!(offset.within(max_distance), "({x}, {y}) -> {offset:?}");
        let sx = x as i32 + offset.dx;
        let sy = y as i32 + offset.dy;
        assert!(
          source
            .get_signed(sx as i64, sy as i64)
            .is_some_and(|p| p.a == 255),
          "({x}, {y}) -> ({sx}, {sy}) is not a seed"
        );
      }
    }
  }
}

#[test]
fn isolated_seed_is_exact_within_range() {
  let mut rng = StdRng::seed_from_u64(42);
  let mut renderer = renderer();

  for _ in 0..16 {
    let width = rng.gen_range(1..40);
    let height = rng.gen_range(1..40);
    let (sx, sy) = (rng.gen_range(0..width), rng.gen_range(0..height));
    let max_distance = rng.gen_range(1..40);

    let mut source = RgbaSurface::new(width, height);
    source.set(sx, sy, Rgba::WHITE);
    let mut jfmap = RgbaSurface::new(width, height);
    renderer
      .jfm_compute(&mut jfmap, &source, InitMode::Fill, max_distance, 0.5, 1.0)
      .unwrap();

    for y in 0..height {
      for x in 0..width {
        let exact = Offset::new(sx as i32 - x as i32, sy as i32 - y as i32);
        let expected = exact.within(max_distance).then_some(exact);
        assert_eq!(decode(jfmap[(x, y)]), expected, "({x}, {y}), d = {max_distance}");
      }
    }
  }
}

/// Straightforward two-buffer jump flood used as an oracle.
fn reference_flood(source: &RgbaSurface, max_distance: i32) -> Vec<Option<Offset>> {
  let (w, h) = (source.width() as i32, source.height() as i32);
  let mut cur: Vec<Option<Offset>> = source
    .as_slice()
    .iter()
    .map(|p| (p.a == 255).then_some(Offset::ZERO))
    .collect();

  let mut strides = vec![1];
  let mut jump = 1;
  while jump * 2 <= max_distance {
    jump *= 2;
  }
  while jump > 0 {
    strides.push(jump);
    jump /= 2;
  }

  for stride in strides {
    let mut next = cur.clone();
    for y in 0..h {
      for x in 0..w {
        let mut best = cur[(y * w + x) as usize];
        for i in -1..=1 {
          for j in -1..=1 {
            let (nx, ny) = (x + i * stride, y + j * stride);
            if (i, j) == (0, 0) || nx < 0 || ny < 0 || nx >= w || ny >= h {
              continue;
            }
            let Some(o) = cur[(ny * w + nx) as usize] else {
              continue;
            };
            let c = Offset::new(o.dx + i * stride, o.dy + j * stride);
            if !c.within(max_distance) {
              continue;
            }
            if best.is_none_or(|b| c.length_squared() < b.length_squared()) {
              best = Some(c);
            }
          }
        }
        next[(y * w + x) as usize] = best;
      }
    }
    cur = next;
  }
  cur
}

#[test]
fn both_schedule_parities_match_reference() {
  let mut rng = StdRng::seed_from_u64(7);
  let source = random_source(&mut rng, 33, 29, 0.01);

  // Odd schedule lengths end in the map, even ones in the scratch buffer
  for max_distance in [1, 2, 3, 4, 7, 8, 12, 16, 31] {
    for parallel in [false, true] {
      let mut renderer = Renderer::new(CpuBackend::with_options(parallel, 1));
      let mut jfmap = RgbaSurface::filled(33, 29, Rgba::new(9, 9, 9, 9));
      renderer
        .jfm_compute(&mut jfmap, &source, InitMode::Fill, max_distance, 0.5, 1.0)
        .unwrap();

      let decoded: Vec<_> = jfmap.as_slice().iter().map(|&p| decode(p)).collect();
      assert_eq!(
        decoded,
        reference_flood(&source, max_distance),
        "max distance {max_distance}, parallel {parallel}"
      );
    }
  }
}

#[test]
fn boundary_and_fill_seed_differently() {
  // Filled 5x5 square: boundary seeds its 16 edge pixels, fill all 25
  let mut source = RgbaSurface::new(7, 7);
  for y in 1..6 {
    for x in 1..6 {
      source.set(x, y, Rgba::WHITE);
    }
  }
  let mut renderer = renderer();
  let mut boundary = RgbaSurface::new(7, 7);
  let mut fill = RgbaSurface::new(7, 7);
  renderer
    .jfm_compute(&mut boundary, &source, InitMode::Boundary, 4, 0.0, 1.0)
    .unwrap();
  renderer
    .jfm_compute(&mut fill, &source, InitMode::Fill, 4, 0.5, 1.0)
    .unwrap();

  let seeds = |map: &RgbaSurface| map.as_slice().iter().filter(|&&p| p == SEED).count();
  assert_eq!(seeds(&boundary), 16);
  assert_eq!(seeds(&fill), 25);
  assert_eq!(decode(boundary[(3, 3)]), Some(Offset::new(-2, 0)));
  assert_eq!(fill[(3, 3)], SEED);
  // Background tracks the square from outside in both modes
  assert_eq!(decode(boundary[(0, 3)]), Some(Offset::new(1, 0)));
  assert_eq!(decode(fill[(0, 3)]), Some(Offset::new(1, 0)));
}
