//! Implementation of `aklink resolve` and `aklink flags`.
//!
//! Turns loosely-typed command-line input plus the merged config into
//! [`ResolveOptions`], then runs the resolver against the real SDK install.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::configuration::BuildConfiguration;
use crate::core::plan::LinkagePlan;
use crate::core::platform::PlatformId;
use crate::resolver::{self, ArtifactProbe, FsProbe, ResolveOptions};
use crate::toolchain::HostCapabilities;
use crate::util::{Config, GlobalContext};

/// Default SDK location relative to the project root.
pub const DEFAULT_SDK_DIR: &str = "ThirdParty";

/// Resolver input as given on the command line.
///
/// Unset fields fall back to the config; boolean flags can only turn a
/// setting on.
#[derive(Debug, Clone, Default)]
pub struct ResolveRequest {
    pub platform: String,
    pub configuration: String,
    pub compiler: Option<String>,
    pub xbox_compiler: Option<String>,
    pub host_version: Option<String>,
    pub sdk_dir: Option<PathBuf>,
    pub editor: bool,
    pub debug_crt: bool,
    pub plugins: Vec<String>,
}

/// Build resolver options from a request and config.
///
/// Relative paths given on the command line are taken from `cwd`; a missing
/// SDK dir defaults to `<project_root>/ThirdParty`.
pub fn resolve_options(
    request: &ResolveRequest,
    config: &Config,
    cwd: &Path,
    project_root: &Path,
) -> Result<ResolveOptions> {
    let platform: PlatformId = request.platform.parse()?;
    let configuration: BuildConfiguration = request.configuration.parse()?;

    let sdk_dir = match (&request.sdk_dir, &config.sdk.dir) {
        (Some(dir), _) => cwd.join(dir),
        (None, Some(dir)) => dir.clone(),
        (None, None) => project_root.join(DEFAULT_SDK_DIR),
    };

    let mut options = ResolveOptions::new(platform, configuration, sdk_dir)
        .with_editor(request.editor || config.build.editor.unwrap_or(false))
        .with_debug_crt(request.debug_crt || config.build.use_debug_crt.unwrap_or(false));

    let compiler = match &request.compiler {
        Some(name) => Some(name.parse()?),
        None => config.compiler()?,
    };
    options.compiler = compiler;

    let console_compiler = match &request.xbox_compiler {
        Some(name) => Some(name.parse()?),
        None => config.xbox_compiler()?,
    };
    options.console_compiler = console_compiler;

    let host = match &request.host_version {
        Some(version) => Some(HostCapabilities::parse(version)?),
        None => config.host()?,
    };
    if let Some(host) = host {
        options = options.with_host(host);
    }

    if !request.plugins.is_empty() {
        options = options.with_addons(request.plugins.iter().cloned());
    } else if let Some(addons) = &config.plugins.optional {
        options = options.with_addons(addons.iter().cloned());
    }

    Ok(options)
}

/// Resolve with an explicit probe.
pub fn resolve_with_probe(
    request: &ResolveRequest,
    ctx: &GlobalContext,
    probe: &dyn ArtifactProbe,
) -> Result<LinkagePlan> {
    let config = ctx.load_config();
    let options = resolve_options(request, &config, ctx.cwd(), &ctx.project_root())?;

    if !options.sdk_dir.exists() {
        tracing::warn!(
            "SDK directory {} does not exist; every optional add-on will be reported missing",
            options.sdk_dir.display()
        );
    }

    Ok(resolver::resolve(&options, probe)?)
}

/// Resolve against the real filesystem.
pub fn resolve_linkage(request: &ResolveRequest, ctx: &GlobalContext) -> Result<LinkagePlan> {
    resolve_with_probe(request, ctx, &FsProbe)
}
