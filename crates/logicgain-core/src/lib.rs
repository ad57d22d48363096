//! LogicGain Core - real-time channel utility
//!
//! A per-block mono/stereo utility: gain in dB, polarity inversion, balance,
//! left/right swap and mono downmix. This crate holds everything that runs on
//! or feeds the audio thread; host adapters, file I/O and persistence live in
//! the sibling crates.
//!
//! # Building Blocks
//!
//! - [`ChannelLayout`] - mono or stereo, fixed when a unit is created
//! - [`ParamKey`] / [`ParameterSet`] - the recognised controls and a plain snapshot of them
//! - [`ParameterStore`] - lock-free atomic storage written by the control thread
//! - [`ChannelUtility`] - the in-place block processor
//! - [`LinearSmoothedParam`] - optional gain ramp
//! - [`ParameterInfo`] / [`ParamDescriptor`] - index-based introspection for hosts
//!
//! # Example
//!
//! ```rust
//! use logicgain_core::{ChannelLayout, ChannelUtility, ParamKey, ParameterStore};
//!
//! let layout = ChannelLayout::from_channel_count(2).unwrap();
//! let store = ParameterStore::new(layout);
//! let mut utility = ChannelUtility::new(layout, 48000.0);
//!
//! // Control thread
//! store.set(ParamKey::Mono, 1.0);
//!
//! // Audio thread, once per block
//! let params = store.refresh();
//! let mut left = [1.0_f32, 0.0];
//! let mut right = [0.0_f32, 1.0];
//! utility.process(&mut [&mut left[..], &mut right[..]], &params);
//! assert_eq!(left, [0.5, 0.5]);
//! assert_eq!(right, [0.5, 0.5]);
//! ```
//!
//! # no_std Support
//!
//! Disable the default `std` feature to build without the standard library:
//!
//! ```toml
//! [dependencies]
//! logicgain-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod layout;
pub mod math;
pub mod param;
pub mod param_info;
pub mod params;
pub mod processor;
pub mod store;

pub use layout::{ChannelLayout, LayoutError};
pub use math::{SILENCE_DB, db_to_linear, linear_to_db};
pub use param::LinearSmoothedParam;
pub use param_info::{ParamDescriptor, ParamFlags, ParamId, ParamUnit, ParameterInfo};
pub use params::{BALANCE_LIMIT, GAIN_MAX_DB, GAIN_MIN_DB, ParamKey, ParameterSet};
pub use processor::ChannelUtility;
pub use store::ParameterStore;
