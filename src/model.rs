//! Core data models for the word search viewer.

use serde::{Deserialize, Serialize};

use crate::config::{GRID_SIZE_DEFAULT, GRID_SIZE_MAX, GRID_SIZE_MIN};
use crate::error::{Result, ViewerError};

/// Side length of a square grid. Always within [`GRID_SIZE_MIN`, `GRID_SIZE_MAX`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct GridSize(u32);

impl GridSize {
    pub fn new(side: u32) -> Result<Self> {
        if (GRID_SIZE_MIN..=GRID_SIZE_MAX).contains(&side) {
            Ok(Self(side))
        } else {
            Err(ViewerError::InvalidConfiguration(format!(
                "grid size {side} outside {GRID_SIZE_MIN}..={GRID_SIZE_MAX}"
            )))
        }
    }

    pub fn clamped(side: i64) -> Self {
        Self(side.clamp(GRID_SIZE_MIN as i64, GRID_SIZE_MAX as i64) as u32)
    }

    /// Interpret the raw text of the numeric input. Fractions are truncated,
    /// out-of-range values clamped; text that is not a number yields `None`.
    pub fn parse_input(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(n) = raw.parse::<i64>() {
            return Some(Self::clamped(n));
        }
        let f = raw.parse::<f64>().ok().filter(|f| f.is_finite())?;
        let n = f.trunc().clamp(i64::MIN as f64, i64::MAX as f64) as i64;
        Some(Self::clamped(n))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn cell_count(self) -> usize {
        (self.0 * self.0) as usize
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self(GRID_SIZE_DEFAULT)
    }
}

/// What the user has asked for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Configuration {
    /// Empty until the catalog seeds a selection.
    pub word_list_id: String,
    pub grid_size: GridSize,
    /// Display only; never sent to the service.
    pub debug_mode: bool,
}

impl Configuration {
    pub fn can_submit(&self) -> bool {
        !self.word_list_id.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordListCatalog {
    pub available_lists: Vec<String>,
}

impl WordListCatalog {
    pub fn is_empty(&self) -> bool {
        self.available_lists.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.available_lists.first().map(String::as_str)
    }
}

/// A generated puzzle as returned by the grid service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub words: Vec<String>,
    /// Row-major single-character cells; upper-case marks a word placement.
    pub grid: Vec<String>,
}

/// The puzzle shown before any fetch and after every grid size change.
pub const EMPTY_PUZZLE: Puzzle = Puzzle {
    words: Vec::new(),
    grid: Vec::new(),
};

impl Puzzle {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.grid.is_empty()
    }

    pub fn fits(&self, size: GridSize) -> bool {
        self.grid.len() == size.cell_count()
    }
}
