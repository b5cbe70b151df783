//! Commands sent from the host to the board engine.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::types::{IVec2, ObjectId, ObjectTag, SchemeId};

/// All inputs the engine accepts from its collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BoardCommand {
    // --- Objects ---
    /// Spawn an object of any registered (or unregistered) kind.
    SpawnObject {
        tag: ObjectTag,
        position: IVec2,
        velocity: IVec2,
        #[serde(default)]
        color: Option<Color>,
    },
    /// Spawn a VPong.
    SpawnVPong {
        position: IVec2,
        velocity: IVec2,
        #[serde(default)]
        color: Option<Color>,
    },
    /// Spawn a VPong at a random square with a random unit heading.
    SpawnRandomVPong,
    /// Remove one object.
    DespawnObject { id: ObjectId },
    /// Remove every object.
    ClearObjects,

    // --- Squares ---
    /// Paint the cursor colour onto a square.
    PaintSquare { x: i32, y: i32 },
    /// Empty every square's trail.
    ClearSquares,

    // --- Colour ---
    SetActiveColorScheme { scheme_id: SchemeId },
    SetCursorColor { color: Color },

    // --- Simulation control ---
    /// Change the tick interval for subsequent ticks.
    SetTickInterval { millis: u64 },
    Pause,
    Resume,
}
