//! Linkage plan - what a module build must add to link the SDK.
//!
//! A plan is produced once per resolver call and never mutated after it is
//! handed back. Library names are stored bare; the platform's
//! [`ArtifactStyle`] decides how they reach the linker.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::configuration::BuildConfiguration;
use crate::core::modules::ModuleDeps;
use crate::core::platform::{ArtifactStyle, PlatformId};
use crate::toolchain::ToolsetTag;

/// A preprocessor definition.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Define {
    /// Simple flag: `FOO`
    Flag(String),
    /// Key-value: `FOO=bar`
    KeyValue { name: String, value: String },
}

impl Define {
    /// Create a simple flag define.
    pub fn flag(name: impl Into<String>) -> Self {
        Define::Flag(name.into())
    }

    /// Create a key-value define.
    pub fn key_value(name: impl Into<String>, value: impl ToString) -> Self {
        Define::KeyValue {
            name: name.into(),
            value: value.to_string(),
        }
    }

    /// Create a `NAME=1` / `NAME=0` capability define.
    pub fn capability(name: impl Into<String>, enabled: bool) -> Self {
        Define::key_value(name, if enabled { 1 } else { 0 })
    }

    /// Get the define name.
    pub fn name(&self) -> &str {
        match self {
            Define::Flag(n) => n,
            Define::KeyValue { name, .. } => name,
        }
    }

    /// Get the define value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            Define::Flag(_) => None,
            Define::KeyValue { value, .. } => Some(value),
        }
    }

    /// Convert to compiler flag format.
    pub fn to_flag(&self) -> String {
        format!("-D{}", self)
    }
}

impl fmt::Display for Define {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Define::Flag(name) => write!(f, "{}", name),
            Define::KeyValue { name, value } => write!(f, "{}={}", name, value),
        }
    }
}

impl From<Define> for String {
    fn from(define: Define) -> Self {
        define.to_string()
    }
}

impl From<String> for Define {
    fn from(s: String) -> Self {
        if let Some((name, value)) = s.split_once('=') {
            return Define::key_value(name, value);
        }
        Define::Flag(s)
    }
}

/// Detection result for one optional add-on library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonStatus {
    /// Library name, e.g. `AkReflectFX`
    pub name: String,
    /// Capability define controlling the add-on's code paths
    pub define: String,
    /// Artifact that was found, if any
    pub artifact: Option<PathBuf>,
}

impl AddonStatus {
    pub fn is_installed(&self) -> bool {
        self.artifact.is_some()
    }
}

/// Complete linkage plan for one (platform, configuration) build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkagePlan {
    pub platform: PlatformId,
    pub configuration: BuildConfiguration,

    /// MSVC toolset the SDK directories were chosen for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toolset: Option<ToolsetTag>,

    /// Library naming convention of the platform
    pub artifact_style: ArtifactStyle,

    /// Public include directories
    pub include_dirs: Vec<PathBuf>,

    /// SDK library directories, in registration order
    pub lib_dirs: Vec<PathBuf>,

    /// Library directories outside the SDK, possibly holding host macros
    #[serde(default)]
    pub system_lib_dirs: Vec<String>,

    /// Libraries to link, by bare name
    pub libraries: BTreeSet<String>,

    /// Preprocessor definitions
    pub definitions: BTreeSet<Define>,

    /// System frameworks (Apple platforms only)
    pub frameworks: BTreeSet<String>,

    /// Engine module dependencies
    pub modules: ModuleDeps,

    /// Optional add-on detection results
    pub addons: Vec<AddonStatus>,
}

impl LinkagePlan {
    /// Create an empty plan for a platform and configuration.
    pub fn new(platform: PlatformId, configuration: BuildConfiguration) -> Self {
        LinkagePlan {
            platform,
            configuration,
            toolset: None,
            artifact_style: platform.artifact_style(),
            include_dirs: Vec::new(),
            lib_dirs: Vec::new(),
            system_lib_dirs: Vec::new(),
            libraries: BTreeSet::new(),
            definitions: BTreeSet::new(),
            frameworks: BTreeSet::new(),
            modules: ModuleDeps::default(),
            addons: Vec::new(),
        }
    }

    /// Add a library by bare name.
    pub fn add_library(&mut self, name: impl Into<String>) {
        self.libraries.insert(name.into());
    }

    /// Add a definition.
    pub fn define(&mut self, define: Define) {
        self.definitions.insert(define);
    }

    /// Add a library directory, keeping the first registration of a path.
    pub fn add_lib_dir(&mut self, dir: PathBuf) {
        if !self.lib_dirs.contains(&dir) {
            self.lib_dirs.push(dir);
        }
    }

    pub fn has_library(&self, name: &str) -> bool {
        self.libraries.contains(name)
    }

    /// Check whether a definition with this name is present, whatever its value.
    pub fn has_define(&self, name: &str) -> bool {
        self.definitions.iter().any(|d| d.name() == name)
    }

    /// Value of a key-value definition.
    pub fn define_value(&self, name: &str) -> Option<&str> {
        self.definitions
            .iter()
            .find(|d| d.name() == name)
            .and_then(Define::value)
    }

    /// Libraries as the host linker expects them.
    pub fn link_entries(&self) -> Vec<String> {
        let last_dir = self.lib_dirs.last().map(PathBuf::as_path);
        self.libraries
            .iter()
            .map(|name| self.artifact_style.link_entry(last_dir, name))
            .collect()
    }

    /// GCC-style compile flags.
    pub fn compile_flags(&self) -> Vec<String> {
        let mut flags: Vec<String> = self
            .include_dirs
            .iter()
            .map(|dir| format!("-I{}", dir.display()))
            .collect();
        flags.extend(self.definitions.iter().map(Define::to_flag));
        flags
    }

    /// GCC-style link flags.
    pub fn link_flags(&self) -> Vec<String> {
        let mut flags: Vec<String> = self
            .lib_dirs
            .iter()
            .map(|dir| format!("-L{}", dir.display()))
            .collect();
        flags.extend(self.system_lib_dirs.iter().map(|dir| format!("-L{}", dir)));

        match self.artifact_style {
            ArtifactStyle::Archive => {
                flags.extend(self.libraries.iter().map(|name| format!("-l{}", name)));
            }
            ArtifactStyle::ArchivePath | ArtifactStyle::ImportLib => {
                flags.extend(self.link_entries());
            }
        }

        for framework in &self.frameworks {
            flags.push("-framework".to_string());
            flags.push(framework.clone());
        }
        flags
    }
}
