//! Thread-safe shared state for logicgain CLAP plugins.
//!
//! `LogicGainShared` lives for the lifetime of the plugin instance and is
//! reachable from both the main thread (params, state) and the audio thread
//! (processing). Values live in a [`ParameterStore`], so every access is
//! lock-free.

use logicgain_core::{
    ChannelLayout, ParamDescriptor, ParamId, ParamKey, ParameterSet, ParameterStore,
};
use std::sync::Arc;

/// Shared state accessible from all plugin threads.
///
/// Parameters are addressed by position in the layout's parameter list, the
/// same order the host sees through the params extension.
#[derive(Clone)]
pub struct LogicGainShared {
    store: Arc<ParameterStore>,
}

impl LogicGainShared {
    /// Create shared state for a unit with a fixed channel layout.
    pub fn new(layout: ChannelLayout) -> Self {
        tracing::info!(%layout, "plugin instance created");
        Self {
            store: Arc::new(ParameterStore::new(layout)),
        }
    }

    /// Channel layout fixed at construction.
    pub fn layout(&self) -> ChannelLayout {
        self.store.layout()
    }

    /// The underlying parameter store.
    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    /// Number of parameters exposed to the host.
    pub fn param_count(&self) -> usize {
        self.layout().params().len()
    }

    /// Parameter key at `index`.
    pub fn key(&self, index: usize) -> Option<ParamKey> {
        self.layout().params().get(index).copied()
    }

    /// Parameter descriptor at `index`.
    pub fn descriptor(&self, index: usize) -> Option<ParamDescriptor> {
        self.key(index).map(ParamKey::descriptor)
    }

    /// Resolve a stable CLAP parameter id to a key active on this unit.
    pub fn key_by_id(&self, id: u32) -> Option<ParamKey> {
        ParamKey::from_id(ParamId(id)).filter(|&key| self.layout().is_active(key))
    }

    /// Read a parameter by stable id.
    pub fn get_value(&self, id: u32) -> Option<f32> {
        self.store.get(self.key_by_id(id)?)
    }

    /// Write a parameter by stable id, clamped to its range and step.
    ///
    /// Returns `false` for ids that do not belong to this unit.
    pub fn set_value(&self, id: u32, value: f32) -> bool {
        self.key_by_id(id)
            .is_some_and(|key| self.store.set(key, value))
    }

    /// Snapshot for the next block.
    pub fn snapshot(&self) -> ParameterSet {
        self.store.refresh()
    }
}

impl clack_plugin::prelude::PluginShared<'_> for LogicGainShared {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_unit_exposes_two_params() {
        let shared = LogicGainShared::new(ChannelLayout::Mono);
        assert_eq!(shared.param_count(), 2);
        assert_eq!(shared.key(0), Some(ParamKey::Gain));
        assert_eq!(shared.key(1), Some(ParamKey::PhaseInv));
        assert_eq!(shared.key(2), None);
    }

    #[test]
    fn stereo_unit_exposes_six_params() {
        let shared = LogicGainShared::new(ChannelLayout::Stereo);
        assert_eq!(shared.param_count(), 6);
        for (i, key) in ChannelLayout::Stereo.params().iter().enumerate() {
            assert_eq!(shared.descriptor(i).map(|d| d.id), Some(key.id()));
        }
    }

    #[test]
    fn ids_of_the_other_layout_are_rejected() {
        let shared = LogicGainShared::new(ChannelLayout::Mono);
        let balance = ParamKey::Balance.id().0;
        assert_eq!(shared.key_by_id(balance), None);
        assert!(!shared.set_value(balance, 50.0));
        assert_eq!(shared.get_value(balance), None);
        assert_eq!(shared.key_by_id(9999), None);
    }

    #[test]
    fn set_value_clamps_and_reaches_snapshot() {
        let shared = LogicGainShared::new(ChannelLayout::Stereo);
        assert!(shared.set_value(ParamKey::Gain.id().0, 100.0));
        assert!(shared.set_value(ParamKey::SwapLr.id().0, 1.0));
        assert_eq!(shared.get_value(ParamKey::Gain.id().0), Some(24.0));

        let snap = shared.snapshot();
        assert_eq!(snap.gain_db, 24.0);
        assert!(snap.swap_lr);
    }

    #[test]
    fn host_writes_land_on_the_step_grid() {
        let shared = LogicGainShared::new(ChannelLayout::Stereo);
        assert!(shared.set_value(ParamKey::Gain.id().0, 0.03));
        assert!(shared.set_value(ParamKey::Balance.id().0, 33.3));
        assert_eq!(shared.get_value(ParamKey::Gain.id().0), Some(0.0));
        assert_eq!(shared.get_value(ParamKey::Balance.id().0), Some(33.5));
    }

    #[test]
    fn clones_share_values() {
        let shared = LogicGainShared::new(ChannelLayout::Stereo);
        let other = shared.clone();
        other.set_value(ParamKey::Balance.id().0, -25.0);
        assert_eq!(shared.get_value(ParamKey::Balance.id().0), Some(-25.0));
    }
}
