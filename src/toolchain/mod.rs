//! Compiler identity detection.
//!
//! Windows SDK directories are keyed by the MSVC toolset the binaries were
//! built with. The toolset is derived from the host's compiler choice, but
//! only for compiler variants the host version actually knows; anything
//! else keeps [`ToolsetTag::DEFAULT`].

mod host;
mod msvc;

pub use host::{HostCapabilities, DEFAULT_HOST_VERSION};
pub use msvc::{ToolsetTag, WindowsCompiler};

/// Compiler variants with a dedicated SDK toolset, checked in order.
const TOOLSET_VARIANTS: [(&str, ToolsetTag); 3] = [
    ("VisualStudio2013", ToolsetTag::Vc120),
    ("VisualStudio2015", ToolsetTag::Vc140),
    ("VisualStudio2017", ToolsetTag::Vc150),
];

/// Detect the desktop Windows toolset for `compiler`.
///
/// Never fails: variants missing from the host are skipped and the default
/// tag is kept.
pub fn detect_windows_toolset(compiler: WindowsCompiler, host: &HostCapabilities) -> ToolsetTag {
    let mut toolset = ToolsetTag::DEFAULT;

    for (variant, tag) in TOOLSET_VARIANTS {
        match host.compiler(variant) {
            Some(known) if known == compiler => toolset = tag,
            Some(_) => {}
            None => tracing::debug!(
                "host {} has no compiler variant {}, skipping",
                host.version(),
                variant
            ),
        }
    }

    tracing::debug!("Windows toolset for {}: {}", compiler, toolset);
    toolset
}

/// Detect the XboxOne toolset.
///
/// The console compiler is only reported by hosts that ship the console
/// platform module, so it is optional.
pub fn detect_xbox_toolset(console_compiler: Option<WindowsCompiler>) -> ToolsetTag {
    match console_compiler {
        Some(WindowsCompiler::VisualStudio2012) => ToolsetTag::Vc110,
        Some(_) => ToolsetTag::DEFAULT,
        None => {
            tracing::debug!("no console compiler reported, using {}", ToolsetTag::DEFAULT);
            ToolsetTag::DEFAULT
        }
    }
}
