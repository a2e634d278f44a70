//! Target platforms the SDK ships prebuilt binaries for.
//!
//! A platform decides three things about linkage: which SDK subdirectories
//! hold its binaries, how a library name maps to an artifact on disk, and
//! how a library name is handed to the host linker.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::LinkError;

/// Target platform, as supplied by the host build tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformId {
    Win32,
    Win64,
    Mac,
    Linux,
    #[serde(rename = "ios")]
    IOS,
    Android,
    /// Console A
    PS4,
    /// Console B
    #[serde(rename = "xboxone")]
    XboxOne,
    /// Console C
    Switch,
    Lumin,
}

impl PlatformId {
    /// Every platform, in table order.
    pub const ALL: [PlatformId; 10] = [
        PlatformId::Win32,
        PlatformId::Win64,
        PlatformId::Mac,
        PlatformId::Linux,
        PlatformId::IOS,
        PlatformId::Android,
        PlatformId::PS4,
        PlatformId::XboxOne,
        PlatformId::Switch,
        PlatformId::Lumin,
    ];

    /// Lowercase name used on the command line and in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformId::Win32 => "win32",
            PlatformId::Win64 => "win64",
            PlatformId::Mac => "mac",
            PlatformId::Linux => "linux",
            PlatformId::IOS => "ios",
            PlatformId::Android => "android",
            PlatformId::PS4 => "ps4",
            PlatformId::XboxOne => "xboxone",
            PlatformId::Switch => "switch",
            PlatformId::Lumin => "lumin",
        }
    }

    /// Desktop Windows (32 or 64 bit).
    pub fn is_windows(&self) -> bool {
        matches!(self, PlatformId::Win32 | PlatformId::Win64)
    }

    /// Platforms whose SDK directories are keyed by an MSVC toolset.
    pub fn uses_msvc_toolset(&self) -> bool {
        self.is_windows() || *self == PlatformId::XboxOne
    }

    /// Apple platforms, the only ones that link system frameworks.
    pub fn is_apple(&self) -> bool {
        matches!(self, PlatformId::Mac | PlatformId::IOS)
    }

    /// How prebuilt libraries are named and referenced on this platform.
    pub fn artifact_style(&self) -> ArtifactStyle {
        match self {
            PlatformId::Win32 | PlatformId::Win64 | PlatformId::XboxOne => {
                ArtifactStyle::ImportLib
            }
            PlatformId::Mac => ArtifactStyle::ArchivePath,
            PlatformId::Linux
            | PlatformId::IOS
            | PlatformId::Android
            | PlatformId::PS4
            | PlatformId::Switch
            | PlatformId::Lumin => ArtifactStyle::Archive,
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlatformId {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "win32" => Ok(PlatformId::Win32),
            "win64" | "x64" => Ok(PlatformId::Win64),
            "mac" | "macos" => Ok(PlatformId::Mac),
            "linux" => Ok(PlatformId::Linux),
            "ios" => Ok(PlatformId::IOS),
            "android" => Ok(PlatformId::Android),
            "ps4" => Ok(PlatformId::PS4),
            "xboxone" => Ok(PlatformId::XboxOne),
            "switch" | "nx" => Ok(PlatformId::Switch),
            "lumin" => Ok(PlatformId::Lumin),
            _ => Err(LinkError::UnknownPlatform(s.to_string())),
        }
    }
}

/// Naming convention for a prebuilt library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactStyle {
    /// `lib<name>.a` on disk, linked by bare name.
    Archive,
    /// `lib<name>.a` on disk, linked by full path.
    ArchivePath,
    /// `<name>.lib` on disk and on the link line.
    ImportLib,
}

impl ArtifactStyle {
    /// File name of the artifact for `name`.
    pub fn file_name(&self, name: &str) -> String {
        match self {
            ArtifactStyle::Archive | ArtifactStyle::ArchivePath => format!("lib{}.a", name),
            ArtifactStyle::ImportLib => format!("{}.lib", name),
        }
    }

    /// Path of the artifact for `name` inside `dir`.
    pub fn artifact_path(&self, dir: &Path, name: &str) -> PathBuf {
        dir.join(self.file_name(name))
    }

    /// How the host linker should receive `name`.
    ///
    /// `lib_dir` is the last registered SDK library directory; only
    /// [`ArtifactStyle::ArchivePath`] uses it.
    pub fn link_entry(&self, lib_dir: Option<&Path>, name: &str) -> String {
        match self {
            ArtifactStyle::Archive => name.to_string(),
            ArtifactStyle::ArchivePath => match lib_dir {
                Some(dir) => self.artifact_path(dir, name).display().to_string(),
                None => self.file_name(name),
            },
            ArtifactStyle::ImportLib => self.file_name(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_round_trips_through_name() {
        for platform in PlatformId::ALL {
            assert_eq!(platform.as_str().parse::<PlatformId>().unwrap(), platform);
        }
    }

    #[test]
    fn test_platform_aliases() {
        assert_eq!("MacOS".parse::<PlatformId>().unwrap(), PlatformId::Mac);
        assert_eq!("nx".parse::<PlatformId>().unwrap(), PlatformId::Switch);
        assert!("amiga".parse::<PlatformId>().is_err());
    }

    #[test]
    fn test_artifact_file_names() {
        assert_eq!(
            PlatformId::Linux.artifact_style().file_name("AkReflectFX"),
            "libAkReflectFX.a"
        );
        assert_eq!(
            PlatformId::Win64.artifact_style().file_name("AkReflectFX"),
            "AkReflectFX.lib"
        );
        assert_eq!(
            PlatformId::XboxOne.artifact_style().file_name("AcpHal"),
            "AcpHal.lib"
        );
    }

    #[test]
    fn test_link_entries() {
        let dir = Path::new("/sdk/Mac/Profile/lib");
        assert_eq!(
            ArtifactStyle::ArchivePath.link_entry(Some(dir), "AkSoundEngine"),
            "/sdk/Mac/Profile/lib/libAkSoundEngine.a"
        );
        assert_eq!(
            ArtifactStyle::Archive.link_entry(Some(dir), "AkSoundEngine"),
            "AkSoundEngine"
        );
        assert_eq!(
            ArtifactStyle::ImportLib.link_entry(None, "dsound"),
            "dsound.lib"
        );
    }
}
