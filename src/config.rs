use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::SortDirective;

/// Optional settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "padel-explorer.json";

/// Environment variable overriding [`AppConfig::data_path`].
pub const DATA_PATH_ENV: &str = "PADEL_DATA";

const DEFAULT_DATA_PATH: &str = "padel_data.csv";
const DEFAULT_CARDS_PER_ROW: usize = 3;

/// Start-up settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog file loaded once at start-up.
    pub data_path: PathBuf,
    /// Columns of the card grid.
    pub cards_per_row: usize,
    /// Initial ordering of the results.
    pub default_sort: SortDirective,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            cards_per_row: DEFAULT_CARDS_PER_ROW,
            default_sort: SortDirective::default(),
        }
    }
}

impl AppConfig {
    /// Read [`CONFIG_FILE`] if present, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let config = Self::from_file_or_default(Path::new(CONFIG_FILE))?;
        Ok(config.with_data_path_override(std::env::var_os(DATA_PATH_ENV).map(PathBuf::from)))
    }

    /// Parse a JSON settings file; a missing file yields the defaults.
    pub fn from_file_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(text).context("invalid settings JSON")?;
        config.cards_per_row = config.cards_per_row.max(1);
        Ok(config)
    }

    fn with_data_path_override(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) {
            self.data_path = path;
        }
        self
    }
}
