//! Execution of per-pixel passes.

pub mod blitter;

pub use blitter::{Fragment, parallel_blit, serial_blit};
