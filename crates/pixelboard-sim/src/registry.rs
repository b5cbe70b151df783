//! Object registry: maps each tag to the function that updates objects of that kind.
//!
//! Built once, handed to the engine, and never mutated afterwards.

use std::collections::HashMap;

use pixelboard_core::error::{BoardError, Result};
use pixelboard_core::types::ObjectTag;

use crate::board::{BoardState, ObjectBody};
use crate::objects;

/// Per-kind update behavior. Runs with full access to the board, minus the
/// object list, which is detached for the duration of the update pass.
pub type UpdateFn = fn(&mut ObjectBody, &mut BoardState) -> Result<()>;

#[derive(Debug, Clone, Default)]
pub struct UpdateRegistry {
    table: HashMap<ObjectTag, UpdateFn>,
}

impl UpdateRegistry {
    /// A registry with no behaviors.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every built-in object kind.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for (tag, update) in objects::BUILTIN {
            registry.table.insert(tag.clone(), *update);
        }
        registry
    }

    /// Bind `tag` to `update`. A tag can be bound once.
    pub fn register(&mut self, tag: ObjectTag, update: UpdateFn) -> Result<()> {
        if self.table.contains_key(&tag) {
            return Err(BoardError::DuplicateTag(tag));
        }
        self.table.insert(tag, update);
        Ok(())
    }

    /// Builder form of `register`.
    pub fn with(mut self, tag: ObjectTag, update: UpdateFn) -> Result<Self> {
        self.register(tag, update)?;
        Ok(self)
    }

    pub fn resolve(&self, tag: &ObjectTag) -> Option<UpdateFn> {
        self.table.get(tag).copied()
    }

    pub fn contains(&self, tag: &ObjectTag) -> bool {
        self.table.contains_key(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &ObjectTag> {
        self.table.keys()
    }
}
