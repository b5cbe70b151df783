//! Built-in object kinds.
//!
//! Each kind lives in its own module with its update function.

pub mod vpong;

use pixelboard_core::types::ObjectTag;

use crate::registry::UpdateFn;

/// Tag/behavior pairs installed by `UpdateRegistry::builtin`.
pub const BUILTIN: &[(ObjectTag, UpdateFn)] = &[(ObjectTag::VPONG, vpong::update as UpdateFn)];
