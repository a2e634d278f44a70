//! Global context for aklink operations.
//!
//! Locates the project root and the config files that apply to it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::config::{self, Config};

/// Name of the per-project settings directory.
pub const PROJECT_DIR: &str = ".aklink";

/// Global context containing the paths an operation runs against.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Global config directory (~/.aklink/)
    home: Option<PathBuf>,
}

impl GlobalContext {
    /// Create a new GlobalContext for the current directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Self::with_cwd(cwd)
    }

    /// Create a GlobalContext rooted at a specific directory.
    pub fn with_cwd(cwd: PathBuf) -> Result<Self> {
        Ok(GlobalContext {
            cwd,
            home: config::global_config_dir(),
        })
    }

    /// Override the global config directory.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Global config file path, when a home directory is known.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.home.as_ref().map(|h| h.join("config.toml"))
    }

    /// Nearest ancestor of the cwd holding a `.aklink/` directory.
    ///
    /// Falls back to the cwd itself.
    pub fn project_root(&self) -> PathBuf {
        self.cwd
            .ancestors()
            .find(|dir| dir.join(PROJECT_DIR).is_dir())
            .unwrap_or(self.cwd.as_path())
            .to_path_buf()
    }

    /// Load the merged global and project configuration.
    pub fn load_config(&self) -> Config {
        let global = self.config_path().unwrap_or_default();
        let root = self.project_root();
        tracing::debug!("project root: {}", root.display());
        config::load_config(&global, &root)
    }
}
