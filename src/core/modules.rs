//! Engine module dependency declarations.
//!
//! A module declares the other engine modules it depends on, split by
//! visibility. Public dependencies propagate to modules that depend on this
//! one; private ones don't.

use serde::{Deserialize, Serialize};

use crate::core::error::LinkError;

/// Dependency lists of one engine module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDeps {
    /// Dependencies that propagate to dependents
    #[serde(default)]
    pub public: Vec<String>,

    /// Internal-only dependencies
    #[serde(default)]
    pub private: Vec<String>,

    /// Modules whose headers are visible without linking them
    #[serde(default)]
    pub private_include_paths: Vec<String>,
}

impl ModuleDeps {
    /// Add public dependencies, skipping names already present.
    pub fn add_public<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(&mut self.public, names);
    }

    /// Add private dependencies, skipping names already present.
    pub fn add_private<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(&mut self.private, names);
    }

    /// Add private include path modules, skipping names already present.
    pub fn add_private_include_paths<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(&mut self.private_include_paths, names);
    }

    /// Check if any list mentions `name`.
    pub fn depends_on(&self, name: &str) -> bool {
        self.public.iter().any(|n| n == name) || self.private.iter().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.public.is_empty() && self.private.is_empty() && self.private_include_paths.is_empty()
    }
}

fn extend_unique<I, S>(list: &mut Vec<String>, names: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for name in names {
        let name = name.into();
        if !list.contains(&name) {
            list.push(name);
        }
    }
}

/// A named engine module and its declared dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRules {
    pub name: String,
    #[serde(flatten)]
    pub deps: ModuleDeps,
}

/// Name of the audio module.
pub const AK_AUDIO: &str = "AkAudio";

/// Name of the source-control plugin module.
pub const GIT_SOURCE_CONTROL: &str = "GitSourceControl";

/// Modules only the editor build pulls in.
pub const EDITOR_UI_MODULES: [&str; 3] = ["SlateCore", "Slate", "UnrealEd"];

/// Base dependencies of the audio module, before any editor extras.
pub fn ak_audio() -> ModuleRules {
    let mut deps = ModuleDeps::default();
    deps.add_private_include_paths(["Settings", "UMG"]);
    deps.add_private([
        "Core",
        "CoreUObject",
        "Engine",
        "SlateCore",
        "NetworkReplayStreaming",
        "MovieScene",
        "MovieSceneTracks",
        "Projects",
        "Json",
        "Slate",
        "InputCore",
    ]);
    deps.add_public(["UMG"]);

    ModuleRules {
        name: AK_AUDIO.to_string(),
        deps,
    }
}

/// Dependencies of the Git source-control plugin module.
pub fn git_source_control() -> ModuleRules {
    let mut deps = ModuleDeps::default();
    deps.add_private([
        "Core",
        "CoreUObject",
        "Slate",
        "SlateCore",
        "InputCore",
        "EditorStyle",
        "UnrealEd",
        "LevelEditor",
        "SourceControl",
        "Projects",
    ]);

    ModuleRules {
        name: GIT_SOURCE_CONTROL.to_string(),
        deps,
    }
}

/// All known modules, sorted by name.
pub fn all() -> Vec<ModuleRules> {
    vec![ak_audio(), git_source_control()]
}

/// Look up a module by name (case-insensitive).
pub fn find(name: &str) -> Result<ModuleRules, LinkError> {
    all()
        .into_iter()
        .find(|m| m.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| LinkError::UnknownModule(name.to_string()))
}
