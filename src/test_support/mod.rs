//! Test utilities for aklink unit tests.
//!
//! Provides an in-memory filesystem that stands in for the SDK install on
//! disk, so resolver tests can decide exactly which artifacts exist.
//!
//! # Example
//!
//! ```rust,ignore
//! use aklink::test_support::{sdk_layout, MockFileSystem};
//!
//! let mut fs = MockFileSystem::new();
//! sdk_layout(&mut fs, "/sdk", "Linux_x64/Release/lib", &["libAkReflectFX.a"]);
//! let plan = resolve(&options, &fs)?;
//! ```

pub mod fixtures;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::resolver::ArtifactProbe;

pub use fixtures::*;

/// Mock filesystem for testing without real I/O.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MockFileSystem {
    /// Create a new empty mock filesystem.
    pub fn new() -> Self {
        MockFileSystem::default()
    }

    /// Add a file with the given content.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        self.files.insert(path.as_ref().to_path_buf(), content.into());
    }

    /// Check if a file exists.
    pub fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

impl ArtifactProbe for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.is_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_files_exist() {
        let mut fs = MockFileSystem::new();
        sdk_layout(&mut fs, "/sdk", "Mac/Profile/lib", &["libAkSoundEngine.a"]);

        assert!(fs.exists(Path::new("/sdk/Mac/Profile/lib/libAkSoundEngine.a")));
        assert!(!fs.exists(Path::new("/sdk/Mac/Profile/lib")));
        assert!(!fs.exists(Path::new("/sdk/Mac/Release/lib/libAkSoundEngine.a")));
    }
}
