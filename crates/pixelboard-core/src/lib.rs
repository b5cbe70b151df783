//! Core types and definitions for the PIXELBOARD canvas.
//!
//! This crate defines the vocabulary shared across all other crates:
//! colours and schemes, object identity, commands, state snapshots,
//! constants, and the error type. It has no dependency on any runtime.

pub mod color;
pub mod commands;
pub mod constants;
pub mod error;
pub mod state;
pub mod types;
