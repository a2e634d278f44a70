//! Optional add-on detection.
//!
//! An add-on is linked only when its prebuilt artifact is present in one of
//! the registered SDK library directories. Presence is decided through an
//! [`ArtifactProbe`] so the resolver never touches the disk directly.

use std::path::{Path, PathBuf};

use crate::core::plan::{AddonStatus, Define};
use crate::core::platform::ArtifactStyle;

/// Existence check for prebuilt artifacts.
pub trait ArtifactProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl ArtifactProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

impl<F> ArtifactProbe for F
where
    F: Fn(&Path) -> bool,
{
    fn exists(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Name of the capability define for an add-on, e.g. `AK_WITH_AKREFLECTFX`.
pub fn capability_name(addon: &str) -> String {
    format!("AK_WITH_{}", addon.to_uppercase())
}

/// Narrow a requested add-on list to the names that get their own define.
///
/// Names sharing a capability define with an earlier entry are dropped, as
/// are names in `reserved` (libraries the plan links regardless of add-on
/// detection). Both comparisons ignore case.
pub fn select<'a>(requested: &'a [String], reserved: &[&str]) -> Vec<&'a str> {
    let mut defines: Vec<String> = Vec::new();
    let mut selected = Vec::new();

    for addon in requested {
        if reserved.iter().any(|r| r.eq_ignore_ascii_case(addon)) {
            tracing::warn!("ignoring add-on {}: it is always linked", addon);
            continue;
        }
        let define = capability_name(addon);
        if defines.contains(&define) {
            tracing::warn!("ignoring add-on {}: listed more than once", addon);
            continue;
        }
        defines.push(define);
        selected.push(addon.as_str());
    }

    selected
}

/// Find the add-on's artifact in the first directory that has it.
pub fn find_artifact(
    addon: &str,
    lib_dirs: &[PathBuf],
    style: ArtifactStyle,
    probe: &dyn ArtifactProbe,
) -> Option<PathBuf> {
    lib_dirs.iter().find_map(|dir| {
        let candidate = style.artifact_path(dir, addon);
        let found = probe.exists(&candidate);
        tracing::debug!(
            "probe {}: {}",
            candidate.display(),
            if found { "found" } else { "missing" }
        );
        found.then_some(candidate)
    })
}

/// Detect one add-on and produce its status and capability define.
pub fn detect(
    addon: &str,
    lib_dirs: &[PathBuf],
    style: ArtifactStyle,
    probe: &dyn ArtifactProbe,
) -> (AddonStatus, Define) {
    let artifact = find_artifact(addon, lib_dirs, style, probe);
    let define = Define::capability(capability_name(addon), artifact.is_some());
    let status = AddonStatus {
        name: addon.to_string(),
        define: define.to_string(),
        artifact,
    };
    (status, define)
}
