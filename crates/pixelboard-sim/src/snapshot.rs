//! Snapshot builder: copies the board into a `BoardSnapshot`.
//!
//! Read-only. Never modifies the board.

use pixelboard_core::state::{BoardSnapshot, ObjectView};
use pixelboard_core::types::{BoardPhase, SimTime};

use crate::board::BoardState;
use crate::registry::UpdateRegistry;

/// Build a complete snapshot of the board.
pub fn build_snapshot(
    board: &BoardState,
    registry: &UpdateRegistry,
    time: &SimTime,
    phase: BoardPhase,
) -> BoardSnapshot {
    BoardSnapshot {
        time: *time,
        phase,
        columns: board.grid.columns(),
        rows: board.grid.rows(),
        square_size: board.square_size,
        pixel_width: board.pixel_width,
        pixel_height: board.pixel_height,
        time_delta_ms: board.time_delta_ms,
        cursor_color: board.cursor_color.clone(),
        active_scheme: board.active_scheme.id,
        squares: board.grid.squares().iter().map(|sq| sq.view()).collect(),
        objects: board
            .objects
            .iter()
            .map(|obj| ObjectView {
                id: obj.id,
                tag: obj.tag.clone(),
                position: obj.body.position,
                velocity: obj.body.velocity,
                color: obj.body.color.clone(),
                active: registry.contains(&obj.tag),
            })
            .collect(),
    }
}
