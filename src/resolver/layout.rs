//! SDK directory layout and fixed per-platform additions.

use crate::core::platform::PlatformId;
use crate::toolchain::ToolsetTag;

/// Libraries every platform links.
pub const CORE_LIBRARIES: [&str; 29] = [
    "AkSoundEngine",
    "AkMemoryMgr",
    "AkStreamMgr",
    "AkMusicEngine",
    "AkSpatialAudio",
    "AkVorbisDecoder",
    "AkSilenceSource",
    "AkSineSource",
    "AkToneSource",
    "AkPeakLimiterFX",
    "AkMatrixReverbFX",
    "AkParametricEQFX",
    "AkDelayFX",
    "AkExpanderFX",
    "AkFlangerFX",
    "AkCompressorFX",
    "AkGainFX",
    "AkHarmonizerFX",
    "AkTimeStretchFX",
    "AkPitchShifterFX",
    "AkStereoDelayFX",
    "AkMeterFX",
    "AkGuitarDistortionFX",
    "AkTremoloFX",
    "AkRoomVerbFX",
    "AkAudioInputSource",
    "AkSynthOneSource",
    "AkRecorderFX",
    "AkMotionGeneratorSource",
];

/// Add-ons probed for when the configuration does not list its own.
pub const DEFAULT_ADDONS: [&str; 4] = [
    "AkReflectFX",
    "AkConvolutionReverbFX",
    "AuroHeadphoneFX",
    "AkMotionSink",
];

/// Remote-control (WAAPI) client library.
pub const REMOTE_CONTROL_LIBRARY: &str = "AkAutobahn";

/// Authoring-tool communication library, linked in every non-optimized build.
pub const COMMUNICATION_LIBRARY: &str = "CommunicationCentral";

/// Editor-to-authoring-tool bridge library on Windows.
pub const SOUNDFRAME_LIBRARY: &str = "SFLib";

/// Libraries the resolver may add after add-on detection.
pub const CONDITIONAL_LIBRARIES: [&str; 3] = [
    REMOTE_CONTROL_LIBRARY,
    COMMUNICATION_LIBRARY,
    SOUNDFRAME_LIBRARY,
];

/// Opus decoder built for console C.
pub const CONSOLE_OPUS_DECODER: &str = "AkOpusNXDecoder";

/// Opus decoder for every other platform.
pub const OPUS_DECODER: &str = "AkOpusDecoder";

/// SDK subdirectories holding the platform's binaries, in search order.
///
/// `toolset` is only consulted on platforms keyed by an MSVC toolset.
pub fn platform_dirs(platform: PlatformId, toolset: ToolsetTag) -> Vec<String> {
    match platform {
        PlatformId::Win32 => vec![format!("Win32_{}", toolset)],
        PlatformId::Win64 => vec![format!("x64_{}", toolset)],
        PlatformId::XboxOne => vec![format!("XboxOne_{}", toolset)],
        PlatformId::Linux => vec!["Linux_x64".to_string()],
        PlatformId::Mac => vec!["Mac".to_string()],
        PlatformId::IOS => vec!["iOS".to_string()],
        PlatformId::PS4 => vec!["PS4".to_string()],
        PlatformId::Android => [
            "Android_armeabi-v7a",
            "Android_x86",
            "Android_arm64-v8a",
            "Android_x86_64",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        PlatformId::Switch => vec!["NX64".to_string()],
        PlatformId::Lumin => vec!["Lumin".to_string()],
    }
}

/// Library directories outside the SDK, in host macro syntax.
pub fn system_lib_dirs(platform: PlatformId) -> Vec<String> {
    let arch = match platform {
        PlatformId::Win32 => "x86",
        PlatformId::Win64 => "x64",
        _ => return Vec::new(),
    };
    vec![format!("$(DXSDK_DIR)/Lib/{}", arch)]
}

/// Fixed additions a platform makes to every plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlatformExtras {
    pub libraries: &'static [&'static str],
    pub definitions: &'static [&'static str],
    pub frameworks: &'static [&'static str],
}

pub fn platform_extras(platform: PlatformId) -> PlatformExtras {
    match platform {
        PlatformId::Win32 | PlatformId::Win64 => PlatformExtras {
            libraries: &["dsound", "dxguid", "Msacm32", "XInput", "dinput8"],
            ..Default::default()
        },
        PlatformId::XboxOne => PlatformExtras {
            libraries: &["AcpHal", "MMDevApi"],
            definitions: &["_XBOX_ONE"],
            ..Default::default()
        },
        PlatformId::PS4 => PlatformExtras {
            libraries: &[
                "SceAjm_stub_weak",
                "SceAudio3d_stub_weak",
                "SceMove_stub_weak",
                "SceAudio3dEngine",
            ],
            definitions: &["__ORBIS__"],
            ..Default::default()
        },
        PlatformId::Android => PlatformExtras {
            definitions: &["__ANDROID__"],
            ..Default::default()
        },
        PlatformId::Switch => PlatformExtras {
            definitions: &["NN_NINTENDO_SDK"],
            ..Default::default()
        },
        PlatformId::Lumin => PlatformExtras {
            definitions: &["AK_LUMIN"],
            ..Default::default()
        },
        PlatformId::Mac => PlatformExtras {
            libraries: &["AkAACDecoder"],
            frameworks: &["AudioUnit", "AudioToolbox", "CoreAudio"],
            ..Default::default()
        },
        PlatformId::IOS => PlatformExtras {
            libraries: &["AkAACDecoder"],
            frameworks: &["AudioToolbox", "CoreAudio"],
            ..Default::default()
        },
        PlatformId::Linux => PlatformExtras::default(),
    }
}

/// Platforms where the authoring tool can drive a running build.
pub fn supports_remote_control(platform: PlatformId) -> bool {
    matches!(
        platform,
        PlatformId::Mac | PlatformId::Win32 | PlatformId::Win64
    )
}

/// The single Opus decoder the platform links.
pub fn opus_decoder(platform: PlatformId) -> &'static str {
    if platform == PlatformId::Switch {
        CONSOLE_OPUS_DECODER
    } else {
        OPUS_DECODER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_dirs_carry_toolset() {
        assert_eq!(
            platform_dirs(PlatformId::Win64, ToolsetTag::Vc150),
            vec!["x64_vc150"]
        );
        assert_eq!(
            platform_dirs(PlatformId::Win32, ToolsetTag::Vc120),
            vec!["Win32_vc120"]
        );
        assert_eq!(
            platform_dirs(PlatformId::XboxOne, ToolsetTag::Vc110),
            vec!["XboxOne_vc110"]
        );
    }

    #[test]
    fn test_android_has_four_abis() {
        let dirs = platform_dirs(PlatformId::Android, ToolsetTag::DEFAULT);
        assert_eq!(
            dirs,
            vec![
                "Android_armeabi-v7a",
                "Android_x86",
                "Android_arm64-v8a",
                "Android_x86_64"
            ]
        );
    }

    #[test]
    fn test_frameworks_only_on_apple() {
        for platform in PlatformId::ALL {
            let extras = platform_extras(platform);
            assert_eq!(!extras.frameworks.is_empty(), platform.is_apple());
        }
    }

    #[test]
    fn test_system_lib_dirs() {
        assert_eq!(
            system_lib_dirs(PlatformId::Win32),
            vec!["$(DXSDK_DIR)/Lib/x86"]
        );
        assert!(system_lib_dirs(PlatformId::Linux).is_empty());
    }

    #[test]
    fn test_opus_decoder_selection() {
        assert_eq!(opus_decoder(PlatformId::Switch), CONSOLE_OPUS_DECODER);
        assert_eq!(opus_decoder(PlatformId::PS4), OPUS_DECODER);
    }
}
