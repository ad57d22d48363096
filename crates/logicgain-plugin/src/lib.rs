//! CLAP plugin adapter for the logicgain channel utility.
//!
//! Bridges the framework-agnostic `ChannelUtility` and `ParameterStore` to
//! the CLAP format via the `clack-plugin` safe wrapper. Each channel layout
//! is its own `.clap` binary, since the layout is fixed when a unit is
//! created.
//!
//! # Architecture
//!
//! | logicgain | CLAP |
//! |--------|------|
//! | `ParamId(u32)` | `clap_id` |
//! | `ParamDescriptor::format_value()` | `value_to_text()` |
//! | `ParamDescriptor::parse_value()` | `text_to_value()` |
//! | `ParamFlags::STEPPED` | `CLAP_PARAM_IS_STEPPED` |
//! | `serialize_state` / `restore_state` | state extension |
//!
//! # Plugin binary generation
//!
//! ```rust,ignore
//! use logicgain_plugin::logicgain_entry;
//!
//! logicgain_entry! {
//!     layout: Stereo,
//!     clap_id: "com.logicgain.stereo",
//!     name: "LogicGain Stereo",
//!     features: [AUDIO_EFFECT, UTILITY, STEREO],
//! }
//! ```

pub mod audio;
pub mod main_thread;
pub mod shared;

pub use audio::LogicGainAudioProcessor;
pub use logicgain_core::ChannelLayout;
pub use main_thread::LogicGainMainThread;
pub use shared::LogicGainShared;

/// Generate a complete CLAP plugin entry point for one channel layout.
///
/// Creates a zero-sized plugin type, implements `Plugin` and
/// `DefaultPluginFactory`, and exports the `clap_entry` symbol.
///
/// - `layout`: `Mono` or `Stereo` (a `ChannelLayout` variant)
/// - `clap_id`: Reverse-DNS plugin identifier
/// - `name`: Human-readable plugin name
/// - `features`: CLAP feature tags (from `clack_plugin::plugin::features`)
#[macro_export]
macro_rules! logicgain_entry {
    (
        layout: $layout:ident,
        clap_id: $clap_id:literal,
        name: $name:literal,
        features: [$($feature:ident),+ $(,)?] $(,)?
    ) => {
        struct LogicGainPlugin;

        impl ::clack_plugin::prelude::Plugin for LogicGainPlugin {
            type AudioProcessor<'a> = $crate::LogicGainAudioProcessor<'a>;
            type Shared<'a> = $crate::LogicGainShared;
            type MainThread<'a> = $crate::LogicGainMainThread<'a>;

            fn declare_extensions(
                builder: &mut ::clack_plugin::prelude::PluginExtensions<Self>,
                _shared: Option<&$crate::LogicGainShared>,
            ) {
                use ::clack_extensions::audio_ports::PluginAudioPorts;
                use ::clack_extensions::latency::PluginLatency;
                use ::clack_extensions::params::PluginParams;
                use ::clack_extensions::state::PluginState;

                builder.register::<PluginAudioPorts>();
                builder.register::<PluginLatency>();
                builder.register::<PluginParams>();
                builder.register::<PluginState>();
            }
        }

        impl ::clack_plugin::prelude::DefaultPluginFactory for LogicGainPlugin {
            fn get_descriptor() -> ::clack_plugin::prelude::PluginDescriptor {
                use ::clack_plugin::plugin::features::*;
                ::clack_plugin::prelude::PluginDescriptor::new($clap_id, $name)
                    .with_features([$($feature),+])
            }

            fn new_shared(
                _host: ::clack_plugin::prelude::HostSharedHandle<'_>,
            ) -> Result<$crate::LogicGainShared, ::clack_plugin::prelude::PluginError> {
                Ok($crate::LogicGainShared::new($crate::ChannelLayout::$layout))
            }

            fn new_main_thread<'a>(
                _host: ::clack_plugin::prelude::HostMainThreadHandle<'a>,
                shared: &'a $crate::LogicGainShared,
            ) -> Result<$crate::LogicGainMainThread<'a>, ::clack_plugin::prelude::PluginError> {
                Ok($crate::LogicGainMainThread::new(shared))
            }
        }

        ::clack_plugin::clack_export_entry!(
            ::clack_plugin::prelude::SinglePluginEntry<LogicGainPlugin>
        );
    };
}
