//! PIXELBOARD host runtime.
//!
//! Runs the board engine on a timed loop thread, forwards host commands to
//! it, and publishes snapshots for renderers and exporters.

pub mod export;
pub mod scheduler;
pub mod state;

pub use pixelboard_core as core;
