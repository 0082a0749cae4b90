//! Configuration loading and management
//!
//! Handles parsing of `.taskboard.toml` configuration files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::stats::DEFAULT_RECENT_PROJECTS;

pub const CONFIG_FILE: &str = ".taskboard.toml";
const MAX_RECENT_PROJECTS: usize = 100;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Seed file used when `--seed` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<PathBuf>,

    /// Dashboard configuration
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Validation configuration
    #[serde(default)]
    pub check: CheckConfig,
}

/// Dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Number of projects listed under "recent projects"
    #[serde(default = "default_recent_projects")]
    pub recent_projects: usize,
}

fn default_recent_projects() -> usize {
    DEFAULT_RECENT_PROJECTS
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_projects: default_recent_projects(),
        }
    }
}

/// Validation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Treat any reported issue as a failure
    #[serde(default)]
    pub strict: bool,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content).map_err(|err| {
            let reason = err.message().trim_end();
            crate::error::Error::InvalidConfig(format!("{}: {reason}", path.display()))
        })?;
        config.validate()?;
        if let Some(seed) = config.seed.take() {
            config.seed = Some(resolve_relative(path, seed));
        }
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `.taskboard.toml` from a directory, or return defaults when it is missing
    pub fn load_from_dir(dir: &Path) -> crate::error::Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> crate::error::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> crate::error::Result<()> {
        self.dashboard.validate()?;
        if let Some(seed) = self.seed.as_ref() {
            if seed.as_os_str().is_empty() {
                return Err(crate::error::Error::InvalidConfig(
                    "seed cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl DashboardConfig {
    fn validate(&self) -> crate::error::Result<()> {
        if self.recent_projects == 0 {
            return Err(crate::error::Error::InvalidConfig(
                "dashboard.recent_projects must be >= 1".to_string(),
            ));
        }
        if self.recent_projects > MAX_RECENT_PROJECTS {
            return Err(crate::error::Error::InvalidConfig(format!(
                "dashboard.recent_projects must be <= {MAX_RECENT_PROJECTS}"
            )));
        }
        Ok(())
    }
}

fn resolve_relative(config_path: &Path, seed: PathBuf) -> PathBuf {
    if seed.is_absolute() {
        return seed;
    }
    match config_path.parent() {
        Some(parent) => parent.join(seed),
        None => seed,
    }
}
