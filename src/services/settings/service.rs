use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::LayoutConfig;

const CONFIG_FILE_NAME: &str = "timetable.toml";

/// Platform config location, e.g. `~/.config/rust-timetable/timetable.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "RustTimetable", "rust-timetable")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Reads and writes a [`LayoutConfig`] stored as TOML.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service bound to [`default_config_path`].
    pub fn at_default_location() -> Result<Self> {
        let path = default_config_path().context("Failed to determine config directory")?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config. A missing file yields the defaults.
    pub fn get(&self) -> Result<LayoutConfig> {
        if !self.path.exists() {
            log::debug!(
                "No layout config at {}, using defaults",
                self.path.display()
            );
            return Ok(LayoutConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read layout config {}", self.path.display()))?;
        let config: LayoutConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse layout config {}", self.path.display()))?;

        config
            .validate()
            .map_err(|e| anyhow!("Invalid layout config {}: {}", self.path.display(), e))?;

        Ok(config)
    }

    /// Validate and write the config, creating parent directories.
    pub fn update(&self, config: &LayoutConfig) -> Result<()> {
        config
            .validate()
            .map_err(|e| anyhow!("Invalid layout config: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(config).context("Failed to serialize layout config")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write layout config {}", self.path.display()))?;

        log::info!("Saved layout config to {}", self.path.display());
        Ok(())
    }

    /// Overwrite the stored config with the defaults
    pub fn reset(&self) -> Result<()> {
        self.update(&LayoutConfig::default())
    }
}
