use crate::models::FolderMetadata;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Folder-level metadata, keyed by folder path without a leading slash.
    #[serde(default)]
    pub folders: FolderMetadata,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "notepub=info".to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file '{}'", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file '{}'", path.display()))
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.logging.filter.trim().is_empty() {
            anyhow::bail!("logging.filter must not be empty");
        }
        for folder in self.folders.keys() {
            if folder.is_empty() {
                anyhow::bail!("folder keys must not be empty");
            }
            // Derived folder paths never start with '/', but keep a trailing
            // one for slugs like `a//b`.
            if folder.starts_with('/') {
                anyhow::bail!("Invalid folder key '{}': remove the leading '/'", folder);
            }
        }
        Ok(())
    }
}
