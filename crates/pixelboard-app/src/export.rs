//! Pattern export: writes a board snapshot to disk as JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use pixelboard_core::state::BoardSnapshot;

pub fn export_snapshot(path: &Path, snapshot: &BoardSnapshot) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<BoardSnapshot> {
    let json =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse {}", path.display()))
}
