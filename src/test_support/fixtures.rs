//! Fixtures for SDK installs and config files.

use std::path::Path;

use super::MockFileSystem;

/// Archive header written into fake artifacts.
pub const ARCHIVE_MAGIC: &[u8] = b"!<arch>\n";

/// Populate `root/<lib_dir>` with the given artifact file names.
pub fn sdk_layout(fs: &mut MockFileSystem, root: impl AsRef<Path>, lib_dir: &str, files: &[&str]) {
    let dir = root.as_ref().join(lib_dir);
    for file in files {
        fs.add_file(dir.join(file), ARCHIVE_MAGIC.to_vec());
    }
}

/// Config file contents.
pub mod configs {
    /// Config pointing at an SDK directory.
    pub fn with_sdk(dir: &str) -> String {
        format!("[sdk]\ndir = \"{}\"\n", dir)
    }

    /// Config with build defaults.
    pub fn with_build(compiler: &str, host_version: &str, use_debug_crt: bool) -> String {
        format!(
            r#"[build]
compiler = "{compiler}"
host_version = "{host_version}"
use_debug_crt = {use_debug_crt}
"#
        )
    }

    /// Config overriding the add-on list.
    pub fn with_addons(addons: &[&str]) -> String {
        let quoted: Vec<String> = addons.iter().map(|a| format!("\"{}\"", a)).collect();
        format!("[plugins]\noptional = [{}]\n", quoted.join(", "))
    }
}
