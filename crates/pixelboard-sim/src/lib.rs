//! Board simulation engine for PIXELBOARD.
//!
//! Owns the grid and the live objects, dispatches each object to the
//! update behavior registered for its tag on every tick, and produces
//! `BoardSnapshot`s for the host.

pub mod board;
pub mod board_setup;
pub mod config;
pub mod engine;
pub mod grid;
pub mod objects;
pub mod registry;
pub mod snapshot;

pub use engine::BoardEngine;
pub use pixelboard_core as core;
