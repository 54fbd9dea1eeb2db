//! Jump flood map: encoding, seeding, propagation and consumers.
//!
//! A map is an [`RgbaSurface`](crate::primitives::RgbaSurface) of the same
//! size as its source where every pixel stores the offset to its nearest
//! seed. Computing one is a seed pass followed by the passes of a
//! [`PassSchedule`]; [`expand`] and [`heat`] read finished maps.

pub mod codec;
pub mod expand;
pub mod heat;
pub mod propagate;
pub mod schedule;
pub mod seed;

pub use codec::{MAX_DISTANCE, Offset, SEED, UNRESOLVED, decode, encode};
pub use expand::{AA_MARGIN, ExpandPaint, Expansion, coverage};
pub use heat::{COLD, HOT, heat_color};
pub use propagate::{ActiveBuffer, JumpPass, jump_kernel, run_pass};
pub use schedule::{PassSchedule, check_max_distance};
pub use seed::{ALPHA_EPSILON, BOUNDARY_ALPHA_THRESHOLD, InitMode, SeedRule};
