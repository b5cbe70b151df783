//! Identity and simulation-time types.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Grid coordinates and per-tick velocity, in squares.
pub use glam::IVec2;

/// Stable handle for a live board object. Allocated monotonically, never reused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of a colour scheme in the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemeId(pub u32);

impl fmt::Display for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Discriminant selecting an object's update behavior.
///
/// The set is open: hosts may register behaviors for their own tags, so the
/// tag is a string rather than a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectTag(Cow<'static, str>);

impl ObjectTag {
    /// The built-in bouncing trail painter.
    pub const VPONG: ObjectTag = ObjectTag(Cow::Borrowed("vpong"));

    pub const fn from_static(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ObjectTag {
    fn from(tag: &'static str) -> Self {
        Self::from_static(tag)
    }
}

impl From<String> for ObjectTag {
    fn from(tag: String) -> Self {
        Self(Cow::Owned(tag))
    }
}

impl fmt::Display for ObjectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether the update pass runs on tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardPhase {
    #[default]
    Running,
    Paused,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of committed update passes.
    pub tick: u64,
    /// Simulated milliseconds, summed from the interval in force at each tick.
    pub elapsed_ms: u64,
}

impl SimTime {
    /// Advance by one tick of `time_delta_ms`.
    pub fn advance(&mut self, time_delta_ms: u64) {
        self.tick += 1;
        self.elapsed_ms += time_delta_ms;
    }
}
