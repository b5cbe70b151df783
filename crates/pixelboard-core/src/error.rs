//! Error type shared by every board crate.

use thiserror::Error;

use crate::types::{ObjectId, ObjectTag, SchemeId};

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    /// Zero tick interval, degenerate viewport, empty catalog and the like.
    /// Fatal when raised while building an engine.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("square ({x}, {y}) is outside the {columns}x{rows} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        columns: u32,
        rows: u32,
    },

    #[error("no update behavior registered for tag `{0}`")]
    UnknownTag(ObjectTag),

    #[error("tag `{0}` is already registered")]
    DuplicateTag(ObjectTag),

    #[error("no live object with id {0}")]
    UnknownObject(ObjectId),

    #[error("no colour scheme with id {0}")]
    UnknownColorScheme(SchemeId),

    #[error("colour scheme {0} has no colours")]
    EmptyColorScheme(SchemeId),

    #[error("colour scheme id {0} is defined twice")]
    DuplicateColorScheme(SchemeId),

    #[error("failed to parse board config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
