//! Application configuration.
//!
//! Settings for data loading and terminal output. Configuration can be
//! loaded from and saved to a TOML file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Configuration file name.
const CONFIG_FILE: &str = "pokepc.toml";

/// Terminal and data settings, read from `pokepc.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Data pack replacing the built-in recipes and loot (None = built-in)
    pub data_pack: Option<PathBuf>,
    /// Print the empty item's label in free grid slots
    pub show_empty_slots: bool,
    /// Width of one grid cell in characters
    pub cell_width: usize,
    /// Indent JSON output
    pub json_pretty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_pack: None,
            show_empty_slots: false,
            cell_width: 14,
            json_pretty: true,
        }
    }
}

impl AppConfig {
    /// Reads the config at `path`. A missing, unreadable or malformed file
    /// yields the defaults.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                return Self::default();
            },
            Err(e) => {
                warn!("Cannot read config {}: {e}", path.display());
                return Self::default();
            },
        };

        toml::from_str(&text).unwrap_or_else(|e| {
            warn!("Ignoring malformed config {}: {e}", path.display());
            Self::default()
        })
    }

    /// Writes the configuration as TOML, creating parent directories.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        let text = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, text)?;
        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// `pokepc/pokepc.toml` under the platform config dir, or the bare file
    /// name when the platform has none.
    pub fn config_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from(CONFIG_FILE),
            |dir| dir.join("pokepc").join(CONFIG_FILE),
        )
    }

    /// Clamps `cell_width` to 4..=32.
    pub fn validate(&mut self) {
        self.cell_width = self.cell_width.clamp(4, 32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.data_pack, None);
        assert_eq!(config.cell_width, 14);
        assert!(!config.show_empty_slots);
        assert!(config.json_pretty);
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig {
            cell_width: 1,
            ..AppConfig::default()
        };
        config.validate();
        assert_eq!(config.cell_width, 4);

        config.cell_width = 500;
        config.validate();
        assert_eq!(config.cell_width, 32);
    }

    #[test]
    fn test_config_save_load() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("pokepc.toml");

        let config = AppConfig {
            data_pack: Some(PathBuf::from("packs/custom.toml")),
            show_empty_slots: true,
            cell_width: 20,
            json_pretty: false,
        };
        config.save_to(&config_path).expect("Failed to save config");

        let loaded = AppConfig::load_from(&config_path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_path_is_named_after_app() {
        let path = AppConfig::config_path();
        assert!(path.ends_with("pokepc.toml"));
        if dirs::config_dir().is_some() {
            assert!(path.ends_with("pokepc/pokepc.toml"));
        }
    }

    #[test]
    fn test_config_load_missing_file() {
        let config = AppConfig::load_from("/nonexistent/path/pokepc.toml");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_config_load_invalid_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("pokepc.toml");
        fs::write(&config_path, "cell_width = \"wide\"").expect("write config");

        assert_eq!(AppConfig::load_from(&config_path), AppConfig::default());
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("pokepc.toml");
        fs::write(&config_path, "show_empty_slots = true\n").expect("write config");

        let loaded = AppConfig::load_from(&config_path);
        assert!(loaded.show_empty_slots);
        assert_eq!(loaded.cell_width, 14);
    }
}
