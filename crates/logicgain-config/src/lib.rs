//! Saved state and presets for logicgain units.
//!
//! # Features
//!
//! - **State blobs**: tagged, versioned JSON for host session save/restore
//! - **Preset files**: named TOML parameter sets for one layout
//! - **Factory presets**: built-in starting points
//!
//! # Example
//!
//! ```rust
//! use logicgain_config::{Preset, deserialize_state, serialize_state};
//! use logicgain_core::{ChannelLayout, ParamKey};
//!
//! let preset = Preset::new("Flip", ChannelLayout::Mono)
//!     .with_param(ParamKey::PhaseInv, 1.0);
//! let (layout, params) = preset.to_parameter_set().unwrap();
//!
//! let blob = serialize_state(layout, &params).unwrap();
//! assert_eq!(deserialize_state(layout, &blob), params);
//! ```

mod error;
mod preset;
mod state;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::{ConfigError, StateError};
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_presets, get_factory_preset, is_factory_preset,
};
pub use preset::Preset;
pub use state::{
    STATE_TAG, STATE_VERSION, deserialize_state, restore_state, serialize_state,
    try_deserialize_state,
};
