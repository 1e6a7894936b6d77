use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub parse: ParseConfig,
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ParseConfig {
    /// Drop a leading `---` front-matter block before parsing.
    pub strip_frontmatter: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HtmlConfig {
    pub standalone: bool,
    pub title: String,
    pub links_new_tab: bool,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            standalone: false,
            title: "TermSnap".to_string(),
            links_new_tab: true,
        }
    }
}

impl Config {
    /// The configuration shipped in `default_config.toml`.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return defaults if it is missing or
    /// invalid.
    pub fn load(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(ConfigError::Read { .. }) => Self::compiled_default(),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring config, using defaults");
                Self::compiled_default()
            }
        }
    }

    /// Load config from a TOML file, failing on unreadable or invalid input.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
