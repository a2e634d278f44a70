//! Build configurations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::LinkError;

/// Host build configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildConfiguration {
    Debug,
    #[serde(rename = "debuggame")]
    DebugGame,
    Development,
    Test,
    Profile,
    Shipping,
}

impl BuildConfiguration {
    pub const ALL: [BuildConfiguration; 6] = [
        BuildConfiguration::Debug,
        BuildConfiguration::DebugGame,
        BuildConfiguration::Development,
        BuildConfiguration::Test,
        BuildConfiguration::Profile,
        BuildConfiguration::Shipping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildConfiguration::Debug => "debug",
            BuildConfiguration::DebugGame => "debuggame",
            BuildConfiguration::Development => "development",
            BuildConfiguration::Test => "test",
            BuildConfiguration::Profile => "profile",
            BuildConfiguration::Shipping => "shipping",
        }
    }

    /// Shipping builds link optimized binaries and drop all tooling hooks.
    pub fn is_shipping(&self) -> bool {
        *self == BuildConfiguration::Shipping
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BuildConfiguration {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(BuildConfiguration::Debug),
            "debuggame" | "debug-game" => Ok(BuildConfiguration::DebugGame),
            "development" | "dev" => Ok(BuildConfiguration::Development),
            "test" => Ok(BuildConfiguration::Test),
            "profile" => Ok(BuildConfiguration::Profile),
            "shipping" => Ok(BuildConfiguration::Shipping),
            _ => Err(LinkError::UnknownConfiguration(s.to_string())),
        }
    }
}
