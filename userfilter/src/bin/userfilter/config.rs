use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

pub const CONFIG_FILE_NAME: &str = "userfilter.toml";

/// Configuration stored in userfilter.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserfilterConfig {
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}

/// Loaded configuration and where it came from
pub struct ConfigContext {
    /// `None` when no config file was found and defaults apply
    pub path: Option<PathBuf>,
    pub config: UserfilterConfig,
}

impl ConfigContext {
    /// Load an explicit config file, or search the current directory and its ancestors.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let current_dir = std::env::current_dir().context("Failed to get current directory")?;
                Self::discover_from(&current_dir)
            }
        }
    }

    pub fn discover_from(start: &Path) -> Result<Self> {
        for dir in start.ancestors() {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Self::load(&candidate);
            }
        }

        debug!("no {CONFIG_FILE_NAME} found above {}, using defaults", start.display());
        Ok(Self {
            path: None,
            config: UserfilterConfig::default(),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: UserfilterConfig =
            toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;

        debug!("loaded config from {}", path.display());
        Ok(Self {
            path: Some(path.to_path_buf()),
            config,
        })
    }
}
