//! Viewer configuration: grid bounds, service command names and the
//! display-only settings that may be overridden from localStorage.

use serde::{Deserialize, Serialize};

use crate::util::cwarn;

pub const GRID_SIZE_MIN: u32 = 5;
pub const GRID_SIZE_MAX: u32 = 20;
pub const GRID_SIZE_DEFAULT: u32 = 12;

/// Grid service command returning the catalog of word-list ids.
pub const CMD_WORD_LIST_OPTIONS: &str = "get_word_list_options";
/// Grid service command returning a generated puzzle.
pub const CMD_GET_GRID: &str = "get_grid";

pub const SETTINGS_STORAGE_KEY: &str = "ws_viewer_settings";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// Side length of a rendered cell, in pixels.
    pub cell_px: u32,
    pub highlight_background: String,
    pub plain_background: String,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            cell_px: 72,
            highlight_background: "#AAAAAA".to_string(),
            plain_background: "#FFFFFF".to_string(),
        }
    }
}

impl ViewerSettings {
    /// Parse a stored JSON blob. Fields that are absent keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut settings: ViewerSettings = serde_json::from_str(raw)?;
        if settings.cell_px == 0 {
            settings.cell_px = ViewerSettings::default().cell_px;
        }
        Ok(settings)
    }

    /// Load from localStorage, falling back to defaults when nothing usable is stored.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|store| store.get_item(SETTINGS_STORAGE_KEY).ok().flatten());
        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                cwarn(&format!("ignoring malformed {SETTINGS_STORAGE_KEY}: {e}"));
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn cell_background(&self, highlighted: bool) -> &str {
        if highlighted {
            &self.highlight_background
        } else {
            &self.plain_background
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_keep_defaults() {
        let s = ViewerSettings::from_json(r##"{"cell_px": 40}"##).unwrap();
        assert_eq!(s.cell_px, 40);
        assert_eq!(s.highlight_background, "#AAAAAA");
        assert_eq!(s.plain_background, "#FFFFFF");
    }

    #[test]
    fn zero_cell_size_falls_back() {
        let s = ViewerSettings::from_json(r#"{"cell_px": 0}"#).unwrap();
        assert_eq!(s.cell_px, 72);
    }

    #[test]
    fn malformed_settings_are_rejected() {
        assert!(ViewerSettings::from_json("not json").is_err());
        assert!(ViewerSettings::from_json(r#"{"cell_px": "big"}"#).is_err());
    }

    #[test]
    fn background_follows_highlight() {
        let s = ViewerSettings::default();
        assert_eq!(s.cell_background(true), "#AAAAAA");
        assert_eq!(s.cell_background(false), "#FFFFFF");
    }
}
