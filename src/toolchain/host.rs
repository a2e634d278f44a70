//! Versioned capability descriptor for the host build tool.
//!
//! Older host versions lack some platforms and compiler variants. Instead of
//! probing for them and swallowing the failure, callers ask the descriptor
//! and get `None` (or `false`) when the host does not know the value.

use anyhow::{Context, Result};
use semver::{Version, VersionReq};

use crate::core::platform::PlatformId;

use super::msvc::WindowsCompiler;

/// Host version assumed when none is configured.
pub const DEFAULT_HOST_VERSION: &str = "4.20.0";

/// What a given host version can express.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostCapabilities {
    version: Version,
}

impl HostCapabilities {
    pub fn new(version: Version) -> Self {
        HostCapabilities { version }
    }

    /// Parse a host version, accepting the short `major.minor` form.
    pub fn parse(version: &str) -> Result<Self> {
        let trimmed = version.trim();
        let padded = match trimmed.matches('.').count() {
            0 => format!("{}.0.0", trimmed),
            1 => format!("{}.0", trimmed),
            _ => trimmed.to_string(),
        };
        let version = Version::parse(&padded)
            .with_context(|| format!("invalid host version `{}`", version))?;
        Ok(HostCapabilities { version })
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Look up a compiler variant by its enumeration name.
    ///
    /// Returns `None` when the name is unknown or the host version predates
    /// (or has dropped) the variant.
    pub fn compiler(&self, variant_name: &str) -> Option<WindowsCompiler> {
        let compiler = WindowsCompiler::ALL
            .into_iter()
            .find(|c| c.variant_name() == variant_name)?;
        compiler_support(compiler)
            .matches(&self.version)
            .then_some(compiler)
    }

    /// First host version that knows `platform`, for platforms added later.
    pub fn platform_since(platform: PlatformId) -> Option<Version> {
        match platform {
            PlatformId::Switch => Some(Version::new(4, 15, 0)),
            PlatformId::Lumin => Some(Version::new(4, 20, 0)),
            _ => None,
        }
    }

    /// Whether the host version can target `platform`.
    pub fn supports_platform(&self, platform: PlatformId) -> bool {
        match Self::platform_since(platform) {
            Some(since) => self.version >= since,
            None => true,
        }
    }
}

impl Default for HostCapabilities {
    fn default() -> Self {
        HostCapabilities {
            version: Version::new(4, 20, 0),
        }
    }
}

fn compiler_support(compiler: WindowsCompiler) -> VersionReq {
    let req = match compiler {
        WindowsCompiler::VisualStudio2012 => "<4.10.0",
        WindowsCompiler::VisualStudio2013 => "<4.22.0",
        WindowsCompiler::VisualStudio2015 => ">=4.0.0",
        WindowsCompiler::VisualStudio2017 => ">=4.16.0",
        WindowsCompiler::VisualStudio2019 => ">=4.22.0",
    };
    // Literal requirements above always parse.
    VersionReq::parse(req).unwrap_or(VersionReq::STAR)
}
