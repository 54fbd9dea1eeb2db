//! Jump stride schedule.
//!
//! Uses the 1+JFA variant: one extra stride-1 pass before the usual halving
//! sequence. Plain JFA can lock onto a farther seed when seeds are packed
//! closely; seeding every pixel's immediate neighbourhood first fixes most of
//! those cases.

use super::codec::MAX_DISTANCE;
use crate::error::JfmError;

/// Accepts `max_distance` in `1..=MAX_DISTANCE`.
pub fn check_max_distance(max_distance: i32) -> Result<(), JfmError> {
  if (1..=MAX_DISTANCE).contains(&max_distance) {
    Ok(())
  } else {
    Err(JfmError::MaxDistanceOutOfRange(max_distance))
  }
}

/// Ordered jump strides for one computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassSchedule {
  strides: Vec<i32>,
}

impl PassSchedule {
  /// Builds `[1, P, P/2, .., 1]` where `P` is the largest power of two not
  /// above `max_distance`.
  ///
  /// `max_distance` must be positive; callers validate it first.
  pub fn new(max_distance: i32) -> Self {
    debug_assert!(max_distance > 0);
    let mut strides = vec![1];
    let mut jump = largest_power_of_two_at_most(max_distance);
    while jump > 0 {
      strides.push(jump);
      jump /= 2;
    }
    Self { strides }
  }

  /// The strides in execution order.
  #[inline]
  pub fn strides(&self) -> &[i32] {
    &self.strides
  }

  /// Number of passes.
  #[inline]
  pub fn len(&self) -> usize {
    self.strides.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.strides.is_empty()
  }
}

fn largest_power_of_two_at_most(n: i32) -> i32 {
  if n <= 0 {
    return 0;
  }
  1 << (31 - n.leading_zeros())
}
