//! Configuration file support for aklink.
//!
//! Two configuration file locations are read:
//! - Global: `~/.aklink/config.toml` - User-wide defaults
//! - Project: `.aklink/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config, field by field.
//! Command-line flags take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::error::LinkError;
use crate::toolchain::{HostCapabilities, WindowsCompiler};
use crate::util::diagnostic::{emit, Diagnostic};

/// Environment variable overriding the global config directory.
pub const HOME_ENV: &str = "AKLINK_HOME";

/// aklink configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SDK location
    pub sdk: SdkConfig,

    /// Build defaults
    pub build: BuildConfig,

    /// Optional add-on settings
    pub plugins: PluginConfig,
}

/// SDK location settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
    /// Root of the third-party SDK (contains `include/` and platform dirs)
    pub dir: Option<PathBuf>,
}

/// Build-related defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Link real debug binaries for Debug builds
    pub use_debug_crt: Option<bool>,

    /// Build with editor support
    pub editor: Option<bool>,

    /// Host build tool version (e.g. "4.19")
    pub host_version: Option<String>,

    /// Desktop Windows compiler (e.g. "vs2017")
    pub compiler: Option<String>,

    /// Compiler reported by the XboxOne platform module
    pub xbox_compiler: Option<String>,
}

/// Optional add-on settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Add-ons to probe for; replaces the built-in list when set
    pub optional: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::debug!("config fallback for {}: {:#}", path.display(), e);
                emit(&invalid_config_warning(path, &e), false);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.sdk.dir.is_some() {
            self.sdk.dir = other.sdk.dir;
        }

        if other.build.use_debug_crt.is_some() {
            self.build.use_debug_crt = other.build.use_debug_crt;
        }
        if other.build.editor.is_some() {
            self.build.editor = other.build.editor;
        }
        if other.build.host_version.is_some() {
            self.build.host_version = other.build.host_version;
        }
        if other.build.compiler.is_some() {
            self.build.compiler = other.build.compiler;
        }
        if other.build.xbox_compiler.is_some() {
            self.build.xbox_compiler = other.build.xbox_compiler;
        }

        if other.plugins.optional.is_some() {
            self.plugins.optional = other.plugins.optional;
        }
    }

    /// Make a relative SDK dir relative to `base` instead of the cwd.
    pub fn anchor_sdk_dir(&mut self, base: &Path) {
        if let Some(dir) = self.sdk.dir.take() {
            self.sdk.dir = Some(base.join(dir));
        }
    }

    /// Parse the configured Windows compiler.
    pub fn compiler(&self) -> Result<Option<WindowsCompiler>, LinkError> {
        self.build.compiler.as_deref().map(str::parse::<WindowsCompiler>).transpose()
    }

    /// Parse the configured console compiler.
    pub fn xbox_compiler(&self) -> Result<Option<WindowsCompiler>, LinkError> {
        self.build.xbox_compiler.as_deref().map(str::parse::<WindowsCompiler>).transpose()
    }

    /// Parse the configured host version.
    pub fn host(&self) -> Result<Option<HostCapabilities>> {
        self.build
            .host_version
            .as_deref()
            .map(HostCapabilities::parse)
            .transpose()
    }
}

/// Warning shown when a config file exists but cannot be used.
fn invalid_config_warning(path: &Path, err: &anyhow::Error) -> Diagnostic {
    let cause = err
        .chain()
        .last()
        .map(|c| c.to_string())
        .unwrap_or_default();
    Diagnostic::warning("ignoring unreadable config file, using defaults")
        .with_location(path)
        .with_context(cause.trim_end().to_string())
        .with_suggestion("Fix the TOML syntax or remove the file")
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.aklink/config.toml)
/// 2. Global config (~/.aklink/config.toml)
/// 3. Defaults
///
/// A relative `sdk.dir` is anchored at `project_root` for the project file
/// and at the global config directory for the global one.
pub fn load_config(global_path: &Path, project_root: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        let mut global = Config::load_or_default(global_path);
        if let Some(dir) = global_path.parent() {
            global.anchor_sdk_dir(dir);
        }
        config.merge(global);
    }

    let project_path = project_config_path(project_root);
    if project_path.exists() {
        let mut project = Config::load_or_default(&project_path);
        project.anchor_sdk_dir(project_root);
        config.merge(project);
    }

    config
}

/// Get the global aklink config directory (`$AKLINK_HOME` or `~/.aklink`).
pub fn global_config_dir() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Some(PathBuf::from(home));
    }
    directories::BaseDirs::new().map(|b| b.home_dir().join(".aklink"))
}

/// Get the project config path (`.aklink/config.toml`).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".aklink").join("config.toml")
}
