//! Board configuration: viewport, timing, trail depth, colours, seed.
//!
//! Every field has a default, so a host config file only lists what it changes.

use serde::{Deserialize, Serialize};

use pixelboard_core::color::Color;
use pixelboard_core::constants::*;
use pixelboard_core::error::{BoardError, Result};
use pixelboard_core::types::SchemeId;

/// Configuration for starting a new board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Viewport size in pixels.
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Square size in pixels. Derived from the viewport height when unset.
    pub square_size: Option<u32>,
    /// Squares per column when deriving the square size.
    pub squares_per_column: u32,
    /// Milliseconds between ticks.
    pub time_delta_ms: u64,
    /// Colours each square remembers.
    pub trail_depth: usize,
    pub cursor_color: Color,
    pub default_scheme: SchemeId,
    /// RNG seed for random spawns. Same seed = same board.
    pub seed: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            square_size: None,
            squares_per_column: DEFAULT_SQUARES_PER_COLUMN,
            time_delta_ms: DEFAULT_TIME_DELTA_MS,
            trail_depth: DEFAULT_TRAIL_DEPTH,
            cursor_color: Color::from(DEFAULT_CURSOR_COLOR),
            default_scheme: SchemeId(0),
            seed: DEFAULT_SEED,
        }
    }
}

impl BoardConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Square size in pixels, explicit or `viewport_height / squares_per_column`.
    pub fn resolved_square_size(&self) -> u32 {
        match self.square_size {
            Some(size) => size,
            None if self.squares_per_column == 0 => 0,
            None => self.viewport_height / self.squares_per_column,
        }
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> Result<()> {
        if self.time_delta_ms == 0 {
            return Err(BoardError::InvalidConfiguration(
                "tick interval must be at least 1ms".into(),
            ));
        }
        if self.trail_depth == 0 {
            return Err(BoardError::InvalidConfiguration(
                "trail depth must be at least 1".into(),
            ));
        }
        if self.square_size.is_none() && self.squares_per_column == 0 {
            return Err(BoardError::InvalidConfiguration(
                "squares_per_column must be at least 1".into(),
            ));
        }
        let square_size = self.resolved_square_size();
        if square_size == 0 {
            return Err(BoardError::InvalidConfiguration(format!(
                "viewport height {} is too small for {} squares per column",
                self.viewport_height, self.squares_per_column
            )));
        }
        if self.viewport_width / square_size == 0 || self.viewport_height / square_size == 0 {
            return Err(BoardError::InvalidConfiguration(format!(
                "viewport {}x{} holds no {}px squares",
                self.viewport_width, self.viewport_height, square_size
            )));
        }
        Ok(())
    }
}
