use crate::{KanbanError, KanbanResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the board backend, e.g. `https://boards.example.com/api`
    #[serde(default)]
    pub api_url: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/kanban/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("kanban/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("kanban\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load from the platform config path, falling back to defaults when the
    /// file is absent or unreadable.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(config) = Self::from_toml_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> KanbanResult<Self> {
        toml::from_str(content).map_err(|e| KanbanError::Config(e.to_string()))
    }

    pub fn effective_api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Parsed base URL with any trailing slash removed from the path, so
    /// endpoint paths can be appended verbatim.
    pub fn parse_api_url(raw: &str) -> KanbanResult<Url> {
        let mut url = Url::parse(raw).map_err(|e| KanbanError::Config(format!("{raw}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(KanbanError::Config(format!("{raw}: not a base URL")));
        }
        let trimmed = url.path().trim_end_matches('/').to_string();
        url.set_path(&trimmed);
        Ok(url)
    }
}
