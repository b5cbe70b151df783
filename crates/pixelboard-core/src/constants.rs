//! Board constants and tuning parameters.

// --- Timing ---

/// Default interval between ticks (milliseconds).
pub const DEFAULT_TIME_DELTA_MS: u64 = 50;

// --- Layout ---

/// Default viewport size used when the host does not supply one (pixels).
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 720;

/// Number of squares stacked vertically when the square size is derived
/// from the viewport height.
pub const DEFAULT_SQUARES_PER_COLUMN: u32 = 32;

// --- Colour ---

/// Cursor colour at startup.
pub const DEFAULT_CURSOR_COLOR: &str = "rebeccapurple";

// --- Trails ---

/// Number of colours a square remembers before the oldest is evicted.
pub const DEFAULT_TRAIL_DEPTH: usize = 16;

/// Opacity falloff step for trail layers below the top.
/// Layer `i` is drawn at `1 - TRAIL_FADE_STEP * i * (i / 2 + 1)`.
pub const TRAIL_FADE_STEP: f32 = 0.05;

// --- Determinism ---

/// Default RNG seed for random spawns.
pub const DEFAULT_SEED: u64 = 42;
