//! Grid model: a fixed 2-D array of squares, each holding a bounded colour trail.
//!
//! The boundary check in `apply_color` is what the movement code relies on
//! to tell a bounce from a write, so writes outside the grid never mutate.

use std::collections::VecDeque;

use pixelboard_core::color::Color;
use pixelboard_core::constants::TRAIL_FADE_STEP;
use pixelboard_core::error::{BoardError, Result};
use pixelboard_core::state::SquareView;

/// Ordered colour history of one square, capped at a fixed depth.
/// Oldest at the front, newest at the back.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    colors: VecDeque<Color>,
    depth: usize,
}

impl Trail {
    pub fn new(depth: usize) -> Self {
        let depth = depth.max(1);
        Self {
            colors: VecDeque::with_capacity(depth),
            depth,
        }
    }

    /// Push a colour on top, evicting the oldest when full.
    pub fn push(&mut self, color: Color) {
        if self.colors.len() == self.depth {
            self.colors.pop_front();
        }
        self.colors.push_back(color);
    }

    pub fn top(&self) -> Option<&Color> {
        self.colors.back()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn clear(&mut self) {
        self.colors.clear();
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }

    /// Newest first, each paired with the opacity a renderer should draw it at.
    pub fn layers(&self) -> impl Iterator<Item = (&Color, f32)> {
        self.colors
            .iter()
            .rev()
            .enumerate()
            .map(|(i, color)| (color, layer_opacity(i)))
    }
}

/// Opacity of the layer `index` steps below the top of a trail.
pub fn layer_opacity(index: usize) -> f32 {
    let i = index as f32;
    (1.0 - TRAIL_FADE_STEP * i * (i / 2.0 + 1.0)).clamp(0.0, 1.0)
}

/// One cell of the grid. Coordinates are fixed at initialisation.
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    x: u32,
    y: u32,
    pub content: Trail,
}

impl Square {
    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn view(&self) -> SquareView {
        SquareView {
            x: self.x,
            y: self.y,
            content: self.content.iter().cloned().collect(),
        }
    }
}

/// Row-major grid of squares.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    columns: u32,
    rows: u32,
    squares: Vec<Square>,
}

impl Grid {
    /// Size the grid from the viewport, one square per `square_size` pixels.
    pub fn initialize(
        viewport_width: u32,
        viewport_height: u32,
        square_size: u32,
        trail_depth: usize,
    ) -> Result<Self> {
        if square_size == 0 {
            return Err(BoardError::InvalidConfiguration(
                "square size must be at least one pixel".into(),
            ));
        }

        let columns = viewport_width / square_size;
        let rows = viewport_height / square_size;
        if columns == 0 || rows == 0 {
            return Err(BoardError::InvalidConfiguration(format!(
                "viewport {viewport_width}x{viewport_height} with {square_size}px squares yields a {columns}x{rows} grid"
            )));
        }

        Ok(Self::with_dimensions(columns, rows, trail_depth))
    }

    fn with_dimensions(columns: u32, rows: u32, trail_depth: usize) -> Self {
        let mut squares = Vec::with_capacity((columns * rows) as usize);
        for y in 0..rows {
            for x in 0..columns {
                squares.push(Square {
                    x,
                    y,
                    content: Trail::new(trail_depth),
                });
            }
        }
        Self {
            columns,
            rows,
            squares,
        }
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.columns && (y as u32) < self.rows
    }

    fn index(&self, x: i32, y: i32) -> Result<usize> {
        if !self.contains(x, y) {
            return Err(BoardError::OutOfBounds {
                x,
                y,
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(y as usize * self.columns as usize + x as usize)
    }

    /// Push `color` onto the square's trail.
    pub fn apply_color(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        let idx = self.index(x, y)?;
        self.squares[idx].content.push(color);
        Ok(())
    }

    /// Most recently applied colour, if any.
    pub fn read_top(&self, x: i32, y: i32) -> Option<&Color> {
        self.square(x, y).and_then(|sq| sq.content.top())
    }

    pub fn square(&self, x: i32, y: i32) -> Option<&Square> {
        self.index(x, y).ok().map(|idx| &self.squares[idx])
    }

    /// Row-major.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Empty every trail.
    pub fn clear(&mut self) {
        for square in &mut self.squares {
            square.content.clear();
        }
    }
}
