//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use aklink::ops::ResolveRequest;

/// aklink - Linkage resolver for a prebuilt audio engine SDK
#[derive(Parser)]
#[command(name = "aklink")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the full linkage plan for a target
    Resolve(ResolveArgs),

    /// Show compile/link flags for a target
    Flags(FlagsArgs),

    /// Show the variant directory of every platform and configuration
    Variants(VariantsArgs),

    /// Show engine module dependencies
    Modules(ModulesArgs),

    /// Check that the SDK install holds what a target links
    Doctor(DoctorArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format for commands that can emit JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Target description shared by the resolving commands.
#[derive(Args)]
pub struct TargetArgs {
    /// Target platform (win32, win64, mac, linux, ios, android, ps4, xboxone, switch, lumin)
    #[arg(short, long)]
    pub platform: String,

    /// Build configuration (debug, debuggame, development, test, profile, shipping)
    #[arg(short, long, default_value = "development")]
    pub configuration: String,

    /// Windows compiler (vs2012 .. vs2019)
    #[arg(long)]
    pub compiler: Option<String>,

    /// Compiler reported by the XboxOne platform module
    #[arg(long)]
    pub xbox_compiler: Option<String>,

    /// Build with editor support
    #[arg(long)]
    pub editor: bool,

    /// Link debug SDK binaries for Debug builds
    #[arg(long)]
    pub debug_crt: bool,

    /// Host engine version, e.g. 4.20
    #[arg(long, env = "AKLINK_HOST_VERSION")]
    pub host_version: Option<String>,

    /// SDK root (defaults to <project>/ThirdParty)
    #[arg(long)]
    pub sdk_dir: Option<PathBuf>,

    /// Optional add-on to probe for (repeatable; replaces the default list)
    #[arg(long = "plugin")]
    pub plugins: Vec<String>,
}

impl TargetArgs {
    pub fn to_request(&self) -> ResolveRequest {
        ResolveRequest {
            platform: self.platform.clone(),
            configuration: self.configuration.clone(),
            compiler: self.compiler.clone(),
            xbox_compiler: self.xbox_compiler.clone(),
            host_version: self.host_version.clone(),
            sdk_dir: self.sdk_dir.clone(),
            editor: self.editor,
            debug_crt: self.debug_crt,
            plugins: self.plugins.clone(),
        }
    }
}

#[derive(Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct FlagsArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Show compile flags only
    #[arg(long)]
    pub compile: bool,

    /// Show link flags only
    #[arg(long)]
    pub link: bool,
}

#[derive(Args)]
pub struct VariantsArgs {
    /// Link debug SDK binaries for Debug builds
    #[arg(long)]
    pub debug_crt: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct ModulesArgs {
    /// Module to show (defaults to all)
    pub name: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct DoctorArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
