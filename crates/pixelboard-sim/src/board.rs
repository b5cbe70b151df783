//! Board state: the grid, the live objects, and the drawing parameters.
//!
//! `BoardState` is the single mutable context the update functions receive.
//! It is owned by the engine and passed by reference; there is no global board.

use std::sync::Arc;

use glam::IVec2;

use pixelboard_core::color::{Color, ColorScheme};
use pixelboard_core::error::Result;
use pixelboard_core::types::{ObjectId, ObjectTag};

use crate::config::BoardConfig;
use crate::grid::Grid;

/// Kind state carried by every board object.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectBody {
    pub position: IVec2,
    /// Squares moved per tick on each axis.
    pub velocity: IVec2,
    /// Fixed paint colour. When unset the object cycles through the active scheme.
    pub color: Option<Color>,
    /// Completed updates; indexes the active scheme.
    pub steps: u64,
}

impl ObjectBody {
    pub fn new(position: IVec2, velocity: IVec2, color: Option<Color>) -> Self {
        Self {
            position,
            velocity,
            color,
            steps: 0,
        }
    }

    /// Colour this object paints on its current step.
    pub fn paint_color(&self, scheme: &ColorScheme) -> Color {
        match &self.color {
            Some(color) => color.clone(),
            None => scheme.color_at(self.steps as usize).clone(),
        }
    }
}

/// A live object on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardObject {
    pub id: ObjectId,
    pub tag: ObjectTag,
    pub body: ObjectBody,
}

/// Everything an update function may read or write.
#[derive(Debug, Clone)]
pub struct BoardState {
    pub grid: Grid,
    /// Insertion order. Empty while an update pass is running.
    pub objects: Vec<BoardObject>,
    pub cursor_color: Color,
    pub active_scheme: Arc<ColorScheme>,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub square_size: u32,
    pub time_delta_ms: u64,
}

impl BoardState {
    /// Build the board from a validated config.
    pub fn new(config: &BoardConfig, active_scheme: Arc<ColorScheme>) -> Result<Self> {
        config.validate()?;
        let square_size = config.resolved_square_size();
        let grid = Grid::initialize(
            config.viewport_width,
            config.viewport_height,
            square_size,
            config.trail_depth,
        )?;

        Ok(Self {
            grid,
            objects: Vec::new(),
            cursor_color: config.cursor_color.clone(),
            active_scheme,
            pixel_width: config.viewport_width,
            pixel_height: config.viewport_height,
            square_size,
            time_delta_ms: config.time_delta_ms,
        })
    }

    /// Clamp a position into the grid.
    pub fn clamp_to_grid(&self, position: IVec2) -> IVec2 {
        let max = IVec2::new(self.grid.columns() as i32 - 1, self.grid.rows() as i32 - 1);
        position.clamp(IVec2::ZERO, max)
    }

    pub fn object(&self, id: ObjectId) -> Option<&BoardObject> {
        self.objects.iter().find(|o| o.id == id)
    }
}
