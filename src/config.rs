use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::editor::{EditorConfig, SeparatorSet};
use crate::{hlog_debug, hlog_warn, Error, Result};

/// Default separators when the config file names none.
pub const DEFAULT_SEPARATORS: [&str; 2] = ["Enter", ","];

/// Tag limit when the config file names none.
pub const DEFAULT_MAX_TAGS: usize = 5;

/// On-disk configuration, `~/.hashtag/hashtag.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of tags. `None` (only via `--no-limit`) is unlimited.
    #[serde(default = "default_max_tags")]
    pub max_tags: Option<usize>,
    #[serde(default = "default_separators")]
    pub separators: Vec<String>,
    /// Tags the list starts with.
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_max_tags() -> Option<usize> {
    Some(DEFAULT_MAX_TAGS)
}

fn default_separators() -> Vec<String> {
    DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_tags: default_max_tags(),
            separators: default_separators(),
            tags: Vec::new(),
        }
    }
}

impl Config {
    pub fn app_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".hashtag"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("hashtag.toml"))
    }

    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        hlog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            hlog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(path)?)?;
        hlog_debug!(
            "Config loaded: max_tags={:?}, separators={:?}, tags={}",
            config.max_tags,
            config.separators,
            config.tags.len()
        );
        Ok(config)
    }

    /// Build the editor configuration, validating separator names.
    ///
    /// An empty separator list means nothing can ever be committed; that is
    /// allowed but logged.
    pub fn editor_config(&self) -> Result<EditorConfig> {
        let separators = SeparatorSet::parse(&self.separators)?;
        if separators.is_empty() {
            hlog_warn!("No separators configured; tags can only be removed");
        }
        Ok(EditorConfig {
            max_tags: self.max_tags,
            separators,
        })
    }

    /// Initial tag list with blanks dropped and duplicates collapsed,
    /// keeping first occurrences in order.
    pub fn initial_tags(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in self.tags.iter().map(|t| t.trim()) {
            if tag.is_empty() || out.iter().any(|t| t == tag) {
                hlog_warn!("Dropping initial tag {:?}", tag);
                continue;
            }
            out.push(tag.to_string());
        }
        out
    }
}
