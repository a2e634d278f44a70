//! MSVC compiler identities and SDK toolset tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::LinkError;

/// Windows compiler selected by the host build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WindowsCompiler {
    VisualStudio2012,
    VisualStudio2013,
    VisualStudio2015,
    VisualStudio2017,
    VisualStudio2019,
}

impl WindowsCompiler {
    pub const ALL: [WindowsCompiler; 5] = [
        WindowsCompiler::VisualStudio2012,
        WindowsCompiler::VisualStudio2013,
        WindowsCompiler::VisualStudio2015,
        WindowsCompiler::VisualStudio2017,
        WindowsCompiler::VisualStudio2019,
    ];

    /// Name of the variant in the host's compiler enumeration.
    pub fn variant_name(&self) -> &'static str {
        match self {
            WindowsCompiler::VisualStudio2012 => "VisualStudio2012",
            WindowsCompiler::VisualStudio2013 => "VisualStudio2013",
            WindowsCompiler::VisualStudio2015 => "VisualStudio2015",
            WindowsCompiler::VisualStudio2017 => "VisualStudio2017",
            WindowsCompiler::VisualStudio2019 => "VisualStudio2019",
        }
    }

    /// Short CLI name.
    pub fn short_name(&self) -> &'static str {
        match self {
            WindowsCompiler::VisualStudio2012 => "vs2012",
            WindowsCompiler::VisualStudio2013 => "vs2013",
            WindowsCompiler::VisualStudio2015 => "vs2015",
            WindowsCompiler::VisualStudio2017 => "vs2017",
            WindowsCompiler::VisualStudio2019 => "vs2019",
        }
    }
}

impl fmt::Display for WindowsCompiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl FromStr for WindowsCompiler {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WindowsCompiler::ALL
            .into_iter()
            .find(|c| {
                c.short_name().eq_ignore_ascii_case(s) || c.variant_name().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| LinkError::UnknownCompiler(s.to_string()))
    }
}

/// Toolset generation the SDK binaries were built with.
///
/// Forms the suffix of Windows SDK directories, e.g. `x64_vc150`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolsetTag {
    Vc110,
    Vc120,
    Vc140,
    Vc150,
}

impl ToolsetTag {
    /// Tag used when detection finds nothing more specific.
    pub const DEFAULT: ToolsetTag = ToolsetTag::Vc140;

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolsetTag::Vc110 => "vc110",
            ToolsetTag::Vc120 => "vc120",
            ToolsetTag::Vc140 => "vc140",
            ToolsetTag::Vc150 => "vc150",
        }
    }
}

impl Default for ToolsetTag {
    fn default() -> Self {
        ToolsetTag::DEFAULT
    }
}

impl fmt::Display for ToolsetTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
