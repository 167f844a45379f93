//! Application configuration management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub fetch: FetchConfig,
    pub embed: EmbedConfig,
}

/// Defaults for the fetch tool; CLI flags override these per invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    pub output_directory: String,
    pub format_selector: String,
    pub subtitle_languages: Vec<String>,
    pub user_agent: String,
    pub embed_chapters: bool,
    pub use_fallback: bool,
}

/// Defaults for the embed tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedConfig {
    /// Suffix inserted before the extension of the output file
    pub output_suffix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            embed: EmbedConfig::default(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            output_directory: "downloads".to_string(),
            format_selector: "bestvideo+bestaudio/best".to_string(),
            subtitle_languages: vec!["en".to_string()],
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36"
                .to_string(),
            embed_chapters: true,
            use_fallback: true,
        }
    }
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            output_suffix: "_with_chapters".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file, creating default if not exists
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            let config = Self::load_from(&config_path)?;
            tracing::info!("Loaded configuration from: {:?}", config_path);
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            tracing::info!("Created default configuration at: {:?}", config_path);
            Ok(config)
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: AppConfig =
            serde_json::from_str(&content).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.fetch.format_selector.trim().is_empty() {
            anyhow::bail!("format_selector must not be empty");
        }
        if self.fetch.output_directory.trim().is_empty() {
            anyhow::bail!("output_directory must not be empty");
        }
        if self.fetch.subtitle_languages.is_empty() {
            anyhow::bail!("subtitle_languages must contain at least one language");
        }
        if self.embed.output_suffix.trim().is_empty() {
            anyhow::bail!("output_suffix must not be empty");
        }
        Ok(())
    }

    /// Get the configuration file path
    fn get_config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "video-chapter-tools", "video-chapter-tools")
            .context("Failed to determine config directory")?;

        Ok(project_dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.fetch.format_selector, "bestvideo+bestaudio/best");
        assert_eq!(config.fetch.output_directory, "downloads");
        assert_eq!(config.fetch.subtitle_languages, vec!["en".to_string()]);
        assert!(config.fetch.embed_chapters);
        assert!(config.fetch.use_fallback);
        assert_eq!(config.embed.output_suffix, "_with_chapters");

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = AppConfig::default();
        config.fetch.format_selector = "best".to_string();
        config.fetch.use_fallback = false;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.fetch.format_selector, "best");
        assert!(!loaded.fetch.use_fallback);
        assert!(loaded.fetch.embed_chapters);
    }

    #[test]
    fn test_validate_rejects_empty_format() {
        let mut config = AppConfig::default();
        config.fetch.format_selector = " ".to_string();

        let result = config.validate();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("format_selector must not be empty"));
    }

    #[test]
    fn test_load_from_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
    }
}
