//! Colours, colour schemes, and the scheme catalog.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};
use crate::types::SchemeId;

/// A CSS colour value (`"red"`, `"#ff00aa"`, `"rebeccapurple"`).
/// The board never interprets it; renderers do.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::from(crate::constants::DEFAULT_CURSOR_COLOR)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named palette, read cyclically by objects and the cursor.
/// Immutable once built; shared by reference between catalog and board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub id: SchemeId,
    pub name: String,
    colors: Vec<Color>,
}

impl ColorScheme {
    /// Build a scheme. Fails on an empty colour list.
    pub fn new(
        id: SchemeId,
        name: impl Into<String>,
        colors: impl IntoIterator<Item = impl Into<Color>>,
    ) -> Result<Self> {
        let colors: Vec<Color> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(BoardError::EmptyColorScheme(id));
        }
        Ok(Self {
            id,
            name: name.into(),
            colors,
        })
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colour at `index`, wrapping around the palette.
    pub fn color_at(&self, index: usize) -> &Color {
        &self.colors[index % self.colors.len()]
    }
}

/// Ordered, immutable set of colour schemes with unique ids.
#[derive(Debug, Clone)]
pub struct SchemeCatalog {
    schemes: Vec<Arc<ColorScheme>>,
}

impl SchemeCatalog {
    /// Validate and wrap a list of schemes.
    ///
    /// Schemes built through `ColorScheme::new` are already non-empty, but
    /// deserialised ones are not, so emptiness is checked again here.
    pub fn new(schemes: impl IntoIterator<Item = ColorScheme>) -> Result<Self> {
        let schemes: Vec<Arc<ColorScheme>> = schemes.into_iter().map(Arc::new).collect();
        if schemes.is_empty() {
            return Err(BoardError::InvalidConfiguration(
                "colour scheme catalog is empty".into(),
            ));
        }

        let mut seen = HashSet::new();
        for scheme in &schemes {
            if scheme.is_empty() {
                return Err(BoardError::EmptyColorScheme(scheme.id));
            }
            if !seen.insert(scheme.id) {
                return Err(BoardError::DuplicateColorScheme(scheme.id));
            }
        }

        Ok(Self { schemes })
    }

    /// The palettes shipped with the board.
    pub fn builtin() -> Self {
        let schemes = BUILTIN_SCHEMES
            .iter()
            .enumerate()
            .map(|(i, (name, colors))| ColorScheme {
                id: SchemeId(i as u32),
                name: (*name).to_string(),
                colors: colors.iter().map(|c| Color::from(*c)).collect(),
            });
        Self {
            schemes: schemes.map(Arc::new).collect(),
        }
    }

    pub fn get(&self, id: SchemeId) -> Option<&Arc<ColorScheme>> {
        self.schemes.iter().find(|s| s.id == id)
    }

    pub fn schemes(&self) -> &[Arc<ColorScheme>] {
        &self.schemes
    }
}

impl Default for SchemeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

const BUILTIN_SCHEMES: &[(&str, &[&str])] = &[
    (
        "Rebecca",
        &["rebeccapurple", "mediumpurple", "plum", "thistle", "lavender"],
    ),
    (
        "Sunset",
        &["#ff4e50", "#fc913a", "#f9d62e", "#eae374", "#e2f4c7"],
    ),
    (
        "Ocean",
        &["#03045e", "#0077b6", "#00b4d8", "#90e0ef", "#caf0f8"],
    ),
    ("Neon", &["#ff00ff", "#00ffff", "#39ff14", "#ffff00"]),
    ("Mono", &["#111111", "#444444", "#777777", "#aaaaaa", "#dddddd"]),
];
