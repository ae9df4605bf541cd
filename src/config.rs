//! Configuration management for couchtui
//!
//! Handles config file loading/saving.
//! Config is stored at ~/.config/couchtui/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::player::PlayerKind;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preferred local player ("vlc" or "mpv")
    pub player: Option<String>,
    /// Catalog endpoint; the bundled catalog is used when unset
    pub catalog_url: Option<String>,
    /// Home grid column count
    pub grid_columns: Option<usize>,
}

impl Config {
    /// Get config file path (~/.config/couchtui/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("couchtui").join("config.toml"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path().ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Resolve the configured player, falling back to the default
    pub fn player_kind(&self) -> PlayerKind {
        self.player
            .as_deref()
            .and_then(PlayerKind::from_name)
            .unwrap_or_default()
    }

    /// Home grid columns, kept in a sane range for a TV layout
    pub fn columns(&self) -> usize {
        self.grid_columns.unwrap_or(3).clamp(1, 6)
    }
}
