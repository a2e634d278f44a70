//! Build-variant directory selection.
//!
//! Every SDK platform directory has one subdirectory per build flavor of the
//! prebuilt binaries. The flavor follows the build configuration through a
//! lookup table; a few platforms override the result.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::core::configuration::BuildConfiguration;
use crate::core::platform::PlatformId;

/// Build flavor of the prebuilt SDK binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    Debug,
    Profile,
    Release,
}

impl Flavor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::Debug => "Debug",
            Flavor::Profile => "Profile",
            Flavor::Release => "Release",
        }
    }
}

/// Configuration to flavor, with debug runtimes disabled.
const CONFIGURATION_FLAVORS: [(BuildConfiguration, Flavor); 6] = [
    (BuildConfiguration::Debug, Flavor::Profile),
    (BuildConfiguration::DebugGame, Flavor::Profile),
    (BuildConfiguration::Development, Flavor::Profile),
    (BuildConfiguration::Test, Flavor::Profile),
    (BuildConfiguration::Profile, Flavor::Release),
    (BuildConfiguration::Shipping, Flavor::Release),
];

/// Per-platform adjustment applied after the configuration lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantOverride {
    /// Always use this flavor (the platform ships no other build).
    Force(Flavor),
    /// Append a suffix to the directory name.
    Suffix(&'static str),
}

/// Platforms whose variant directory differs from the plain lookup.
pub const PLATFORM_OVERRIDES: [(PlatformId, VariantOverride); 2] = [
    // No profiler support in the Linux cross-compile toolchain.
    (PlatformId::Linux, VariantOverride::Force(Flavor::Release)),
    (PlatformId::IOS, VariantOverride::Suffix("-iphoneos")),
];

/// Name of a variant subdirectory, e.g. `Profile` or `Release-iphoneos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantDir {
    pub flavor: Flavor,
    pub suffix: Option<&'static str>,
}

impl VariantDir {
    pub fn new(flavor: Flavor) -> Self {
        VariantDir {
            flavor,
            suffix: None,
        }
    }
}

impl fmt::Display for VariantDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.flavor.as_str(), self.suffix.unwrap_or(""))
    }
}

impl Serialize for VariantDir {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn configuration_flavor(configuration: BuildConfiguration, use_debug_crt: bool) -> Flavor {
    if configuration == BuildConfiguration::Debug && use_debug_crt {
        return Flavor::Debug;
    }
    CONFIGURATION_FLAVORS
        .iter()
        .find(|(c, _)| *c == configuration)
        .map(|(_, flavor)| *flavor)
        .unwrap_or(Flavor::Release)
}

/// Select the variant directory for a platform and configuration.
///
/// `use_debug_crt` links real debug binaries for `Debug` builds instead of
/// the profile ones.
pub fn variant_dir(
    platform: PlatformId,
    configuration: BuildConfiguration,
    use_debug_crt: bool,
) -> VariantDir {
    let mut dir = VariantDir::new(configuration_flavor(configuration, use_debug_crt));

    for (p, rule) in PLATFORM_OVERRIDES {
        if p != platform {
            continue;
        }
        match rule {
            VariantOverride::Force(flavor) => dir = VariantDir::new(flavor),
            VariantOverride::Suffix(suffix) => dir.suffix = Some(suffix),
        }
    }

    dir
}

/// One row of the full variant table.
#[derive(Debug, Clone, Serialize)]
pub struct VariantRow {
    pub platform: PlatformId,
    pub configuration: BuildConfiguration,
    pub variant: VariantDir,
}

/// Every (platform, configuration) pair and its variant directory.
pub fn variant_table(use_debug_crt: bool) -> Vec<VariantRow> {
    PlatformId::ALL
        .iter()
        .flat_map(|&platform| {
            BuildConfiguration::ALL
                .iter()
                .map(move |&configuration| VariantRow {
                    platform,
                    configuration,
                    variant: variant_dir(platform, configuration, use_debug_crt),
                })
        })
        .collect()
}
