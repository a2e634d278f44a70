//! Input errors and their diagnostics.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};

/// Error raised while turning user input into resolver options.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
pub enum LinkError {
    #[error("unknown platform `{0}`")]
    #[diagnostic(
        code(aklink::input::platform),
        help("valid platforms: win32, win64, mac, linux, ios, android, ps4, xboxone, switch, lumin")
    )]
    UnknownPlatform(String),

    #[error("unknown build configuration `{0}`")]
    #[diagnostic(
        code(aklink::input::configuration),
        help("valid configurations: debug, debuggame, development, test, profile, shipping")
    )]
    UnknownConfiguration(String),

    #[error("unknown compiler `{0}`")]
    #[diagnostic(
        code(aklink::input::compiler),
        help("valid compilers: vs2012, vs2013, vs2015, vs2017, vs2019")
    )]
    UnknownCompiler(String),

    #[error("platform `{platform}` is not available in host version {host_version}")]
    #[diagnostic(code(aklink::host::platform_unavailable))]
    PlatformUnavailable {
        platform: String,
        host_version: String,
        since: String,
    },

    #[error("unknown module `{0}`")]
    #[diagnostic(
        code(aklink::modules::unknown),
        help("run `aklink modules` to list known modules")
    )]
    UnknownModule(String),
}

impl LinkError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            LinkError::UnknownPlatform(name) => {
                Diagnostic::error(format!("unknown platform `{}`", name))
                    .with_suggestion(suggestions::PLATFORMS)
            }
            LinkError::UnknownConfiguration(name) => {
                Diagnostic::error(format!("unknown build configuration `{}`", name))
                    .with_suggestion(suggestions::CONFIGURATIONS)
            }
            LinkError::UnknownCompiler(name) => {
                Diagnostic::error(format!("unknown compiler `{}`", name))
                    .with_suggestion(suggestions::COMPILERS)
            }
            LinkError::PlatformUnavailable {
                platform,
                host_version,
                since,
            } => Diagnostic::error(format!(
                "platform `{}` is not available in host version {}",
                platform, host_version
            ))
            .with_context(format!("`{}` was introduced in host version {}", platform, since))
            .with_suggestion(format!("Pass `--host-version {}` or newer", since)),
            LinkError::UnknownModule(name) => {
                Diagnostic::error(format!("unknown module `{}`", name))
                    .with_suggestion(suggestions::MODULES)
            }
        }
    }
}
