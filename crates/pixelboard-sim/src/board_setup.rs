//! Object spawn factories.

use glam::IVec2;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use pixelboard_core::color::Color;
use pixelboard_core::types::{ObjectId, ObjectTag};

use crate::board::{BoardObject, BoardState, ObjectBody};

/// Unit headings a random VPong may take: four diagonals, four orthogonals.
const HEADINGS: [IVec2; 8] = [
    IVec2::new(1, 1),
    IVec2::new(1, -1),
    IVec2::new(-1, 1),
    IVec2::new(-1, -1),
    IVec2::new(1, 0),
    IVec2::new(-1, 0),
    IVec2::new(0, 1),
    IVec2::new(0, -1),
];

/// Build an object, clamping its position into the grid.
pub fn build_object(
    board: &BoardState,
    id: ObjectId,
    tag: ObjectTag,
    position: IVec2,
    velocity: IVec2,
    color: Option<Color>,
) -> BoardObject {
    let clamped = board.clamp_to_grid(position);
    if clamped != position {
        tracing::warn!(
            %id,
            requested = ?position,
            placed = ?clamped,
            "spawn position outside grid, clamped"
        );
    }
    BoardObject {
        id,
        tag,
        body: ObjectBody::new(clamped, velocity, color),
    }
}

/// A VPong at a random square with a random unit heading.
pub fn random_vpong(board: &BoardState, rng: &mut ChaCha8Rng, id: ObjectId) -> BoardObject {
    let position = IVec2::new(
        rng.gen_range(0..board.grid.columns() as i32),
        rng.gen_range(0..board.grid.rows() as i32),
    );
    let velocity = *HEADINGS.choose(rng).unwrap_or(&IVec2::ONE);
    build_object(board, id, ObjectTag::VPONG, position, velocity, None)
}
