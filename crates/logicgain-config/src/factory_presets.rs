//! Factory presets bundled with the library.
//!
//! Built-in starting points for common utility tasks, always available
//! without external files.

use crate::Preset;

/// Array of factory preset names for external access.
pub static FACTORY_PRESET_NAMES: &[&str] = &[
    "init_stereo",
    "init_mono",
    "mono_check",
    "polarity_flip",
    "swap_channels",
    "fix_inverted_right",
    "trim_minus_6",
];

static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("init_stereo", INIT_STEREO),
    ("init_mono", INIT_MONO),
    ("mono_check", MONO_CHECK),
    ("polarity_flip", POLARITY_FLIP),
    ("swap_channels", SWAP_CHANNELS),
    ("fix_inverted_right", FIX_INVERTED_RIGHT),
    ("trim_minus_6", TRIM_MINUS_6),
];

const INIT_STEREO: &str = r#"
name = "Init Stereo"
description = "Unity gain, nothing engaged"
layout = "stereo"
"#;

const INIT_MONO: &str = r#"
name = "Init Mono"
description = "Unity gain, nothing engaged"
layout = "mono"
"#;

const MONO_CHECK: &str = r#"
name = "Mono Check"
description = "Collapse to mono at -3 dB to check for phase cancellation"
layout = "stereo"

[params]
gain = -3.0
mono = 1.0
"#;

const POLARITY_FLIP: &str = r#"
name = "Polarity Flip"
description = "Invert a mono source"
layout = "mono"

[params]
phaseInv = 1.0
"#;

const SWAP_CHANNELS: &str = r#"
name = "Swap Channels"
description = "Exchange left and right"
layout = "stereo"

[params]
swapLR = 1.0
"#;

const FIX_INVERTED_RIGHT: &str = r#"
name = "Fix Inverted Right"
description = "Re-align a stereo pair whose right side was wired out of polarity"
layout = "stereo"

[params]
phaseInvRight = 1.0
"#;

const TRIM_MINUS_6: &str = r#"
name = "Trim -6 dB"
description = "Make room for downstream processing"
layout = "stereo"

[params]
gain = -6.0
"#;

/// All factory presets, in [`FACTORY_PRESET_NAMES`] order.
pub fn factory_presets() -> Vec<Preset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| Preset::from_toml(toml).ok())
        .collect()
}

/// Get a factory preset by short name or display name, case-insensitively.
///
/// ```rust
/// use logicgain_config::get_factory_preset;
///
/// let preset = get_factory_preset("mono_check").unwrap();
/// assert_eq!(preset.name, "Mono Check");
/// assert!(get_factory_preset("Mono Check").is_some());
/// ```
pub fn get_factory_preset(name: &str) -> Option<Preset> {
    if let Some((_, toml)) = FACTORY_PRESETS_TOML
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(name))
    {
        return Preset::from_toml(toml).ok();
    }
    factory_presets()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Whether `name` matches a factory preset.
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}
