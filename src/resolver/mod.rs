//! Linkage resolution.
//!
//! [`resolve`] turns a target description into a [`LinkagePlan`]. It is a
//! pure function of its options plus whatever the [`ArtifactProbe`] reports
//! about the SDK directories: the same inputs over the same disk state always
//! yield the same plan.

use std::path::PathBuf;

use crate::core::configuration::BuildConfiguration;
use crate::core::error::LinkError;
use crate::core::modules::{self, EDITOR_UI_MODULES};
use crate::core::plan::{Define, LinkagePlan};
use crate::core::platform::PlatformId;
use crate::toolchain::{
    detect_windows_toolset, detect_xbox_toolset, HostCapabilities, ToolsetTag, WindowsCompiler,
};

pub mod addons;
pub mod layout;
pub mod variant;

pub use addons::{ArtifactProbe, FsProbe};
pub use variant::{variant_dir, variant_table, Flavor, VariantDir, VariantRow};

/// Definition marking optimized (shipping) SDK builds.
pub const OPTIMIZED: &str = "AK_OPTIMIZED";

/// Definition enabling the editor's authoring-tool bridge.
pub const SOUNDFRAME: &str = "AK_SOUNDFRAME";

/// Capability define for the remote-control feature.
pub const REMOTE_CONTROL: &str = "AK_SUPPORT_WAAPI";

/// Everything the resolver needs to know about the build.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    pub platform: PlatformId,
    pub configuration: BuildConfiguration,

    /// Desktop Windows compiler; `None` keeps the default toolset
    pub compiler: Option<WindowsCompiler>,

    /// Compiler reported by the XboxOne platform module, if the host has one
    pub console_compiler: Option<WindowsCompiler>,

    /// Host version descriptor
    pub host: HostCapabilities,

    /// Building with editor support
    pub editor: bool,

    /// Link real debug binaries for `Debug` builds
    pub use_debug_crt: bool,

    /// Root of the third-party SDK (holds `include/` and platform dirs)
    pub sdk_dir: PathBuf,

    /// Optional add-ons to probe for
    pub addons: Vec<String>,
}

impl ResolveOptions {
    /// Options with every optional input at its default.
    pub fn new(
        platform: PlatformId,
        configuration: BuildConfiguration,
        sdk_dir: impl Into<PathBuf>,
    ) -> Self {
        ResolveOptions {
            platform,
            configuration,
            compiler: None,
            console_compiler: None,
            host: HostCapabilities::default(),
            editor: false,
            use_debug_crt: false,
            sdk_dir: sdk_dir.into(),
            addons: layout::DEFAULT_ADDONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_compiler(mut self, compiler: WindowsCompiler) -> Self {
        self.compiler = Some(compiler);
        self
    }

    pub fn with_console_compiler(mut self, compiler: WindowsCompiler) -> Self {
        self.console_compiler = Some(compiler);
        self
    }

    pub fn with_host(mut self, host: HostCapabilities) -> Self {
        self.host = host;
        self
    }

    pub fn with_editor(mut self, editor: bool) -> Self {
        self.editor = editor;
        self
    }

    pub fn with_debug_crt(mut self, use_debug_crt: bool) -> Self {
        self.use_debug_crt = use_debug_crt;
        self
    }

    pub fn with_addons<I, S>(mut self, addons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.addons = addons.into_iter().map(Into::into).collect();
        self
    }

    /// Toolset keying the SDK directories, for platforms that have one.
    pub fn toolset(&self) -> Option<ToolsetTag> {
        match self.platform {
            PlatformId::Win32 | PlatformId::Win64 => Some(match self.compiler {
                Some(compiler) => detect_windows_toolset(compiler, &self.host),
                None => ToolsetTag::DEFAULT,
            }),
            PlatformId::XboxOne => Some(detect_xbox_toolset(self.console_compiler)),
            _ => None,
        }
    }

    /// Variant subdirectory for this build.
    pub fn variant_dir(&self) -> VariantDir {
        variant_dir(self.platform, self.configuration, self.use_debug_crt)
    }
}

/// Compute the linkage plan.
///
/// Fails only when the host version cannot target the platform at all.
pub fn resolve(
    options: &ResolveOptions,
    probe: &dyn ArtifactProbe,
) -> Result<LinkagePlan, LinkError> {
    let platform = options.platform;

    if !options.host.supports_platform(platform) {
        let since = HostCapabilities::platform_since(platform)
            .map(|v| v.to_string())
            .unwrap_or_default();
        return Err(LinkError::PlatformUnavailable {
            platform: platform.to_string(),
            host_version: options.host.version().to_string(),
            since,
        });
    }

    let mut plan = LinkagePlan::new(platform, options.configuration);
    plan.modules = modules::ak_audio().deps;

    // Baseline compile surface
    plan.include_dirs.push(options.sdk_dir.join("include"));
    plan.define(Define::flag("USE_AKAUDIO"));
    plan.define(Define::key_value(
        "AK_UNREAL_MAX_CONCURRENT_IO",
        if options.editor { 256 } else { 32 },
    ));
    plan.define(Define::key_value("AK_UNREAL_IO_GRANULARITY", 32768));

    let optimized = options.configuration.is_shipping();
    if optimized {
        plan.define(Define::flag(OPTIMIZED));
    }

    // Library directories
    let toolset = options.toolset();
    plan.toolset = toolset;
    plan.system_lib_dirs = layout::system_lib_dirs(platform);

    let variant = options.variant_dir().to_string();
    for dir in layout::platform_dirs(platform, toolset.unwrap_or_default()) {
        plan.add_lib_dir(options.sdk_dir.join(dir).join(&variant).join("lib"));
    }

    // Fixed libraries
    for lib in layout::CORE_LIBRARIES {
        plan.add_library(lib);
    }

    let extras = layout::platform_extras(platform);
    for lib in extras.libraries {
        plan.add_library(*lib);
    }
    for define in extras.definitions {
        plan.define(Define::flag(*define));
    }
    plan.frameworks
        .extend(extras.frameworks.iter().map(|f| f.to_string()));

    plan.add_library(layout::opus_decoder(platform));

    // Optional add-ons
    let selected = {
        let mut reserved: Vec<&str> = plan.libraries.iter().map(String::as_str).collect();
        reserved.extend(layout::CONDITIONAL_LIBRARIES);
        addons::select(&options.addons, &reserved)
    };

    for addon in selected {
        let (status, define) =
            addons::detect(addon, &plan.lib_dirs, plan.artifact_style, probe);
        if status.is_installed() {
            plan.add_library(addon);
        }
        plan.define(define);
        plan.addons.push(status);
    }

    // Remote control
    let remote_control = !optimized && layout::supports_remote_control(platform);
    plan.define(Define::capability(REMOTE_CONTROL, remote_control));
    if remote_control {
        plan.add_library(layout::REMOTE_CONTROL_LIBRARY);
    }

    if !optimized && platform != PlatformId::Linux {
        plan.add_library(layout::COMMUNICATION_LIBRARY);
    }

    // Editor extras
    if options.editor && !optimized {
        plan.modules.add_private(EDITOR_UI_MODULES);
        if platform.is_windows() {
            plan.define(Define::flag(SOUNDFRAME));
            plan.add_library(layout::SOUNDFRAME_LIBRARY);
        }
    }

    tracing::info!(
        "resolved {} {}: {} lib dirs, {} libraries, {} definitions",
        platform,
        options.configuration,
        plan.lib_dirs.len(),
        plan.libraries.len(),
        plan.definitions.len()
    );

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::test_support::{sdk_layout, MockFileSystem};

    fn nothing_installed() -> impl Fn(&Path) -> bool {
        |_: &Path| false
    }

    fn resolve_simple(platform: PlatformId, configuration: BuildConfiguration) -> LinkagePlan {
        let options = ResolveOptions::new(platform, configuration, "/sdk");
        resolve(&options, &nothing_installed()).unwrap()
    }

    #[test]
    fn test_linux_shipping() {
        let plan = resolve_simple(PlatformId::Linux, BuildConfiguration::Shipping);

        assert_eq!(
            plan.lib_dirs,
            vec![PathBuf::from("/sdk/Linux_x64/Release/lib")]
        );
        assert!(plan.has_define(OPTIMIZED));
        assert!(plan.has_library(layout::OPUS_DECODER));
        assert!(!plan.has_library(layout::CONSOLE_OPUS_DECODER));
        assert_eq!(plan.define_value(REMOTE_CONTROL), Some("0"));
        assert!(!plan.has_library(layout::REMOTE_CONTROL_LIBRARY));
        assert!(!plan.has_library(layout::COMMUNICATION_LIBRARY));
        assert!(plan.frameworks.is_empty());
        assert_eq!(plan.toolset, None);
    }

    #[test]
    fn test_linux_development_still_release_without_communication() {
        let plan = resolve_simple(PlatformId::Linux, BuildConfiguration::Development);
        assert_eq!(
            plan.lib_dirs,
            vec![PathBuf::from("/sdk/Linux_x64/Release/lib")]
        );
        assert!(!plan.has_define(OPTIMIZED));
        assert!(!plan.has_library(layout::COMMUNICATION_LIBRARY));
    }

    #[test]
    fn test_win64_development() {
        let options = ResolveOptions::new(PlatformId::Win64, BuildConfiguration::Development, "/sdk")
            .with_compiler(WindowsCompiler::VisualStudio2017);
        let plan = resolve(&options, &nothing_installed()).unwrap();

        assert_eq!(plan.toolset, Some(ToolsetTag::Vc150));
        assert_eq!(
            plan.lib_dirs,
            vec![PathBuf::from("/sdk/x64_vc150/Profile/lib")]
        );
        assert_eq!(plan.system_lib_dirs, vec!["$(DXSDK_DIR)/Lib/x64"]);
        assert_eq!(plan.define_value(REMOTE_CONTROL), Some("1"));
        assert!(plan.has_library(layout::REMOTE_CONTROL_LIBRARY));
        assert!(plan.has_library(layout::COMMUNICATION_LIBRARY));
        assert!(plan.has_library("dsound"));
        assert!(plan.link_entries().contains(&"dsound.lib".to_string()));
    }

    #[test]
    fn test_win32_without_compiler_uses_default_toolset() {
        let plan = resolve_simple(PlatformId::Win32, BuildConfiguration::Debug);
        assert_eq!(
            plan.lib_dirs,
            vec![PathBuf::from("/sdk/Win32_vc140/Profile/lib")]
        );
    }

    #[test]
    fn test_debug_crt_selects_debug_binaries() {
        let options = ResolveOptions::new(PlatformId::Mac, BuildConfiguration::Debug, "/sdk")
            .with_debug_crt(true);
        let plan = resolve(&options, &nothing_installed()).unwrap();
        assert_eq!(plan.lib_dirs, vec![PathBuf::from("/sdk/Mac/Debug/lib")]);
    }

    #[test]
    fn test_android_registers_every_abi() {
        let plan = resolve_simple(PlatformId::Android, BuildConfiguration::Test);
        assert_eq!(plan.lib_dirs.len(), 4);
        assert!(plan
            .lib_dirs
            .iter()
            .all(|d| d.ends_with("Profile/lib")));
        assert!(plan.has_define("__ANDROID__"));
    }

    #[test]
    fn test_ios_frameworks_and_suffix() {
        let plan = resolve_simple(PlatformId::IOS, BuildConfiguration::Shipping);
        assert_eq!(
            plan.lib_dirs,
            vec![PathBuf::from("/sdk/iOS/Release-iphoneos/lib")]
        );
        assert!(plan.frameworks.contains("AudioToolbox"));
        assert!(!plan.frameworks.contains("AudioUnit"));
        assert!(plan.has_library("AkAACDecoder"));
    }

    #[test]
    fn test_switch_uses_console_decoder() {
        let plan = resolve_simple(PlatformId::Switch, BuildConfiguration::Development);
        assert!(plan.has_library(layout::CONSOLE_OPUS_DECODER));
        assert!(!plan.has_library(layout::OPUS_DECODER));
        assert!(plan.has_define("NN_NINTENDO_SDK"));
        assert_eq!(plan.lib_dirs, vec![PathBuf::from("/sdk/NX64/Profile/lib")]);
    }

    #[test]
    fn test_exactly_one_decoder_everywhere() {
        for platform in PlatformId::ALL {
            for configuration in BuildConfiguration::ALL {
                let plan = resolve_simple(platform, configuration);
                let decoders = [layout::OPUS_DECODER, layout::CONSOLE_OPUS_DECODER]
                    .iter()
                    .filter(|d| plan.has_library(d))
                    .count();
                assert_eq!(decoders, 1, "{} {}", platform, configuration);
            }
        }
    }

    #[test]
    fn test_xbox_toolset_and_extras() {
        let options = ResolveOptions::new(PlatformId::XboxOne, BuildConfiguration::Profile, "/sdk")
            .with_console_compiler(WindowsCompiler::VisualStudio2012);
        let plan = resolve(&options, &nothing_installed()).unwrap();
        assert_eq!(
            plan.lib_dirs,
            vec![PathBuf::from("/sdk/XboxOne_vc110/Release/lib")]
        );
        assert!(plan.has_define("_XBOX_ONE"));
        assert!(plan.link_entries().contains(&"AcpHal.lib".to_string()));
        assert_eq!(plan.define_value(REMOTE_CONTROL), Some("0"));
    }

    #[test]
    fn test_ps4_stub_libraries() {
        let plan = resolve_simple(PlatformId::PS4, BuildConfiguration::Development);
        assert!(plan.has_library("SceAudio3dEngine"));
        assert!(plan.has_library("SceMove_stub_weak"));
        assert!(plan.has_define("__ORBIS__"));
    }

    #[test]
    fn test_addon_present_and_absent() {
        let mut fs = MockFileSystem::new();
        sdk_layout(&mut fs, "/sdk", "Linux_x64/Release/lib", &["libAkReflectFX.a"]);

        let options = ResolveOptions::new(PlatformId::Linux, BuildConfiguration::Shipping, "/sdk");
        let plan = resolve(&options, &fs).unwrap();

        assert!(plan.has_library("AkReflectFX"));
        assert_eq!(plan.define_value("AK_WITH_AKREFLECTFX"), Some("1"));
        assert!(!plan.has_library("AkMotionSink"));
        assert_eq!(plan.define_value("AK_WITH_AKMOTIONSINK"), Some("0"));
        assert_eq!(plan.addons.len(), 4);
    }

    #[test]
    fn test_addon_in_secondary_android_dir() {
        let mut fs = MockFileSystem::new();
        sdk_layout(
            &mut fs,
            "/sdk",
            "Android_x86_64/Profile/lib",
            &["libAuroHeadphoneFX.a"],
        );

        let options =
            ResolveOptions::new(PlatformId::Android, BuildConfiguration::Development, "/sdk");
        let plan = resolve(&options, &fs).unwrap();
        assert!(plan.has_library("AuroHeadphoneFX"));
        assert_eq!(plan.define_value("AK_WITH_AUROHEADPHONEFX"), Some("1"));
    }

    #[test]
    fn test_windows_addon_needs_import_library() {
        let mut fs = MockFileSystem::new();
        sdk_layout(
            &mut fs,
            "/sdk",
            "x64_vc140/Release/lib",
            &["libAkConvolutionReverbFX.a"],
        );

        let options = ResolveOptions::new(PlatformId::Win64, BuildConfiguration::Shipping, "/sdk");
        let plan = resolve(&options, &fs).unwrap();
        assert_eq!(plan.define_value("AK_WITH_AKCONVOLUTIONREVERBFX"), Some("0"));

        sdk_layout(
            &mut fs,
            "/sdk",
            "x64_vc140/Release/lib",
            &["AkConvolutionReverbFX.lib"],
        );
        let plan = resolve(&options, &fs).unwrap();
        assert_eq!(plan.define_value("AK_WITH_AKCONVOLUTIONREVERBFX"), Some("1"));
    }

    #[test]
    fn test_custom_addon_list() {
        let options = ResolveOptions::new(PlatformId::Mac, BuildConfiguration::Development, "/sdk")
            .with_addons(["AkMeterFXPlus"]);
        let plan = resolve(&options, &nothing_installed()).unwrap();
        assert_eq!(plan.define_value("AK_WITH_AKMETERFXPLUS"), Some("0"));
        assert!(!plan.has_define("AK_WITH_AKREFLECTFX"));
    }

    #[test]
    fn test_addon_spellings_share_one_define() {
        let mut fs = MockFileSystem::new();
        sdk_layout(&mut fs, "/sdk", "Linux_x64/Release/lib", &["libakreflectfx.a"]);

        let options = ResolveOptions::new(PlatformId::Linux, BuildConfiguration::Shipping, "/sdk")
            .with_addons(["AkReflectFX", "akreflectfx"]);
        let plan = resolve(&options, &fs).unwrap();

        let defines: Vec<_> = plan
            .definitions
            .iter()
            .filter(|d| d.name() == "AK_WITH_AKREFLECTFX")
            .collect();
        assert_eq!(defines.len(), 1);
        assert_eq!(plan.define_value("AK_WITH_AKREFLECTFX"), Some("0"));
        assert_eq!(plan.addons.len(), 1);
    }

    #[test]
    fn test_addon_named_like_linked_library_is_ignored() {
        let options = ResolveOptions::new(PlatformId::Win64, BuildConfiguration::Development, "/sdk")
            .with_addons(["AkSoundEngine", "dsound", "AkAutobahn", "AkReflectFX"]);
        let plan = resolve(&options, &nothing_installed()).unwrap();

        assert!(!plan.has_define("AK_WITH_AKSOUNDENGINE"));
        assert!(!plan.has_define("AK_WITH_DSOUND"));
        assert!(!plan.has_define("AK_WITH_AKAUTOBAHN"));
        assert!(plan.has_library("AkSoundEngine"));
        assert!(plan.has_library("AkAutobahn"));
        assert_eq!(plan.define_value("AK_WITH_AKREFLECTFX"), Some("0"));
        assert_eq!(plan.addons.len(), 1);
    }

    #[test]
    fn test_editor_extras_on_windows() {
        let options = ResolveOptions::new(PlatformId::Win64, BuildConfiguration::Development, "/sdk")
            .with_editor(true);
        let plan = resolve(&options, &nothing_installed()).unwrap();

        assert!(plan.has_define(SOUNDFRAME));
        assert!(plan.has_library(layout::SOUNDFRAME_LIBRARY));
        assert!(plan.modules.depends_on("UnrealEd"));
        assert_eq!(plan.define_value("AK_UNREAL_MAX_CONCURRENT_IO"), Some("256"));
    }

    #[test]
    fn test_editor_extras_skip_soundframe_off_windows() {
        let options = ResolveOptions::new(PlatformId::Mac, BuildConfiguration::Development, "/sdk")
            .with_editor(true);
        let plan = resolve(&options, &nothing_installed()).unwrap();
        assert!(!plan.has_define(SOUNDFRAME));
        assert!(plan.modules.depends_on("UnrealEd"));
    }

    #[test]
    fn test_editor_optimized_has_no_ui_modules() {
        for platform in PlatformId::ALL {
            let options = ResolveOptions::new(platform, BuildConfiguration::Shipping, "/sdk")
                .with_editor(true);
            let plan = resolve(&options, &nothing_installed()).unwrap();
            assert!(!plan.modules.depends_on("UnrealEd"), "{}", platform);
            assert!(!plan.has_define(SOUNDFRAME));
            assert!(!plan.has_library(layout::SOUNDFRAME_LIBRARY));
        }
    }

    #[test]
    fn test_game_build_io_limits() {
        let plan = resolve_simple(PlatformId::PS4, BuildConfiguration::Shipping);
        assert_eq!(plan.define_value("AK_UNREAL_MAX_CONCURRENT_IO"), Some("32"));
        assert_eq!(plan.define_value("AK_UNREAL_IO_GRANULARITY"), Some("32768"));
        assert!(plan.has_define("USE_AKAUDIO"));
        assert_eq!(plan.include_dirs, vec![PathBuf::from("/sdk/include")]);
    }

    #[test]
    fn test_platform_unavailable_on_old_host() {
        let options = ResolveOptions::new(PlatformId::Lumin, BuildConfiguration::Shipping, "/sdk")
            .with_host(HostCapabilities::parse("4.19").unwrap());
        let err = resolve(&options, &nothing_installed()).unwrap_err();
        assert!(matches!(err, LinkError::PlatformUnavailable { .. }));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let mut fs = MockFileSystem::new();
        sdk_layout(&mut fs, "/sdk", "Mac/Profile/lib", &["libAkMotionSink.a"]);
        let options = ResolveOptions::new(PlatformId::Mac, BuildConfiguration::Test, "/sdk");

        let a = serde_json::to_string(&resolve(&options, &fs).unwrap()).unwrap();
        let b = serde_json::to_string(&resolve(&options, &fs).unwrap()).unwrap();
        assert_eq!(a, b);
    }
}
