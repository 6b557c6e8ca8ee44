use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension list applied when neither the command line nor a config
/// file provides one.
pub const DEFAULT_EXTENSIONS: &str = ".py, .txt, .env, .md, .json, .pdf";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Comma-separated extension list used when `--extensions` is absent.
    pub default_extensions: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_extensions: DEFAULT_EXTENSIONS.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub progress: bool,
    pub show_timing: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            progress: true,
            show_timing: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_path()?;
        if let Some(path) = config_path {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;

            toml::from_str(&content).with_context(|| "Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    fn find_config_path() -> Result<Option<PathBuf>> {
        if let Some(xdg_config) = dirs::config_dir() {
            let xdg_path = xdg_config.join("kwscan/config.toml");
            if xdg_path.exists() {
                return Ok(Some(xdg_path));
            }
        }

        if let Some(home) = dirs::home_dir() {
            let home_path = home.join(".kwscan.toml");
            if home_path.exists() {
                return Ok(Some(home_path));
            }
        }

        let current_path = Path::new(".kwscan.toml");
        if current_path.exists() {
            return Ok(Some(current_path.to_path_buf()));
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.search.default_extensions, DEFAULT_EXTENSIONS);
        assert!(config.display.progress);
        assert!(config.display.show_timing);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[search]\ndefault_extensions = \".rs\"\n").unwrap();
        assert_eq!(config.search.default_extensions, ".rs");
        assert!(config.display.progress);
    }
}
