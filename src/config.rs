//! Application configuration
//! Embedded defaults from `assets/config/default.json`, optionally replaced by
//! the file named in `SALES_DASHBOARD_CONFIG`.

use crate::data::{MonthFilter, SalesDataset, Year};
use crate::state::{ChartKind, Selection};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "SALES_DASHBOARD_CONFIG";

const DEFAULT_CONFIG: &str = include_str!("../assets/config/default.json");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub window: WindowSettings,
    pub export: ExportSettings,
    pub initial: InitialSelection,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WindowSettings {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExportSettings {
    /// Pixel size of exported rasters.
    pub width: u32,
    pub height: u32,
    /// File name without extension offered in the save dialog.
    pub file_stem: String,
    #[serde(default)]
    pub open_after_export: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            file_stem: "chart".to_string(),
            open_after_export: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct InitialSelection {
    pub chart_kind: ChartKind,
    pub year: Year,
    pub month: MonthFilter,
}

impl InitialSelection {
    /// Selection to start with; a year missing from the dataset falls back
    /// to the first one.
    pub fn to_selection(self, dataset: &SalesDataset) -> Selection {
        let year = if dataset.contains_year(self.year) {
            self.year
        } else {
            let fallback = dataset.first_year().unwrap_or(self.year);
            tracing::warn!(
                "Configured year {} has no data, starting with {}",
                self.year,
                fallback
            );
            fallback
        };
        Selection::new(self.chart_kind, year, self.month)
    }
}

impl AppConfig {
    /// Embedded default configuration.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_json(DEFAULT_CONFIG)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Config file from the environment if set and valid, otherwise the
    /// embedded default.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        Self::load_with(path.as_deref())
    }

    /// `path` when it reads and parses, otherwise the embedded default.
    pub fn load_with(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            match Self::load_from_path(path) {
                Ok(config) => {
                    tracing::info!("Loaded configuration from {}", path.display());
                    return Ok(config);
                }
                Err(e) => {
                    tracing::warn!(
                        "Ignoring config file {}: {}. Using defaults.",
                        path.display(),
                        e
                    );
                }
            }
        }

        let config = Self::load_default()?;
        tracing::info!("Using embedded default configuration");
        Ok(config)
    }
}
