//! Tracy profiler initialization.

use tracing_subscriber::prelude::*;
use tracing_tracy::TracyLayer;

/// Routes the `jfm_compute`, `jfm_pass` and `jfm_expand` spans to Tracy.
///
/// Call once at startup, before the first computation. Installs a global
/// subscriber, so applications that already have one should add a
/// [`TracyLayer`] to it instead.
pub fn init_tracy() {
  tracing_subscriber::registry()
    .with(TracyLayer::default())
    .init();
}
