//! Board snapshot: the complete visible state handed to the host after each tick.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::types::{BoardPhase, IVec2, ObjectId, ObjectTag, SchemeId, SimTime};

/// Owned copy of the board, stable until the host asks for another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub time: SimTime,
    pub phase: BoardPhase,
    pub columns: u32,
    pub rows: u32,
    pub square_size: u32,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub time_delta_ms: u64,
    pub cursor_color: Color,
    pub active_scheme: SchemeId,
    /// Row-major, `columns * rows` entries.
    pub squares: Vec<SquareView>,
    /// Insertion order.
    pub objects: Vec<ObjectView>,
}

impl BoardSnapshot {
    /// The square at `(x, y)`, if inside the grid.
    pub fn square(&self, x: u32, y: u32) -> Option<&SquareView> {
        if x >= self.columns || y >= self.rows {
            return None;
        }
        self.squares.get((y * self.columns + x) as usize)
    }

    /// Object view by id.
    pub fn object(&self, id: ObjectId) -> Option<&ObjectView> {
        self.objects.iter().find(|o| o.id == id)
    }
}

/// One square's trail. `content` runs oldest to newest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SquareView {
    pub x: u32,
    pub y: u32,
    pub content: Vec<Color>,
}

impl SquareView {
    /// Colour drawn on top.
    pub fn top(&self) -> Option<&Color> {
        self.content.last()
    }
}

/// A live object as the host sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectView {
    pub id: ObjectId,
    pub tag: ObjectTag,
    pub position: IVec2,
    pub velocity: IVec2,
    pub color: Option<Color>,
    /// False when no behavior is registered for the tag; the object is inert.
    pub active: bool,
}
