//! Lock-free parameter storage shared between the control and audio threads.
//!
//! Every recognised control lives in its own atomic. Writers on the control
//! thread call [`ParameterStore::set`]; the audio thread calls
//! [`ParameterStore::refresh`] once at the top of each block and works from the
//! returned [`ParameterSet`]. Each field load is independent, so a snapshot
//! taken during a burst of writes may mix old and new values across fields but
//! never tears a single field.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::layout::ChannelLayout;
use crate::param_info::{ParamDescriptor, ParameterInfo};
use crate::params::{ParamKey, ParameterSet};

/// `f32` stored as its bit pattern.
#[derive(Debug)]
struct AtomicF32(AtomicU32);

impl AtomicF32 {
    fn new(value: f32) -> Self {
        Self(AtomicU32::new(value.to_bits()))
    }

    #[inline]
    fn load(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    #[inline]
    fn store(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

/// Current control values for one unit.
///
/// Keys outside the unit's [`ChannelLayout`] are neither stored nor read:
/// writes to them are rejected and snapshots report their defaults.
///
/// ```rust
/// use logicgain_core::{ChannelLayout, ParamKey, ParameterStore};
///
/// let store = ParameterStore::new(ChannelLayout::Stereo);
/// assert!(store.set(ParamKey::Balance, 30.0));
/// assert!(!store.set(ParamKey::PhaseInv, 1.0));
///
/// let snapshot = store.refresh();
/// assert_eq!(snapshot.balance, 30.0);
/// assert!(!snapshot.phase_inv);
/// ```
#[derive(Debug)]
pub struct ParameterStore {
    layout: ChannelLayout,
    gain_db: AtomicF32,
    balance: AtomicF32,
    phase_inv: AtomicBool,
    phase_inv_left: AtomicBool,
    phase_inv_right: AtomicBool,
    swap_lr: AtomicBool,
    mono: AtomicBool,
}

impl ParameterStore {
    /// Store holding defaults for every control of `layout`.
    pub fn new(layout: ChannelLayout) -> Self {
        let defaults = ParameterSet::default();
        Self {
            layout,
            gain_db: AtomicF32::new(defaults.gain_db),
            balance: AtomicF32::new(defaults.balance),
            phase_inv: AtomicBool::new(defaults.phase_inv),
            phase_inv_left: AtomicBool::new(defaults.phase_inv_left),
            phase_inv_right: AtomicBool::new(defaults.phase_inv_right),
            swap_lr: AtomicBool::new(defaults.swap_lr),
            mono: AtomicBool::new(defaults.mono),
        }
    }

    /// Layout fixed at construction.
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Write one control. Returns `false` when `key` is not part of this
    /// unit's layout, in which case nothing changes.
    ///
    /// Values are clamped to the parameter range and snapped to its step;
    /// NaN becomes the default.
    /// Toggles switch on at 0.5 and above.
    pub fn set(&self, key: ParamKey, value: f32) -> bool {
        if !self.layout.is_active(key) {
            return false;
        }
        let value = key.descriptor().clamp(value);
        match key {
            ParamKey::Gain => self.gain_db.store(value),
            ParamKey::Balance => self.balance.store(value),
            _ => {
                if let Some(flag) = self.flag(key) {
                    flag.store(value >= 0.5, Ordering::Relaxed);
                }
            }
        }
        true
    }

    /// Read one control, or `None` if `key` is not part of this layout.
    ///
    /// Toggles read back as 0.0 or 1.0.
    pub fn get(&self, key: ParamKey) -> Option<f32> {
        if !self.layout.is_active(key) {
            return None;
        }
        Some(self.load(key))
    }

    /// Snapshot of every active control.
    ///
    /// Wait-free; safe to call from the audio thread.
    pub fn refresh(&self) -> ParameterSet {
        let mut set = ParameterSet::default();
        match self.layout {
            ChannelLayout::Mono => {
                set.gain_db = self.gain_db.load();
                set.phase_inv = self.phase_inv.load(Ordering::Relaxed);
            }
            ChannelLayout::Stereo => {
                set.gain_db = self.gain_db.load();
                set.phase_inv_left = self.phase_inv_left.load(Ordering::Relaxed);
                set.phase_inv_right = self.phase_inv_right.load(Ordering::Relaxed);
                set.balance = self.balance.load();
                set.swap_lr = self.swap_lr.load(Ordering::Relaxed);
                set.mono = self.mono.load(Ordering::Relaxed);
            }
        }
        set
    }

    /// Write every active field of `params`. Inactive fields are ignored.
    pub fn apply(&self, params: &ParameterSet) {
        for &key in self.layout.params() {
            self.set(key, params.get(key));
        }
    }

    /// Put every control back to its default.
    pub fn reset_to_defaults(&self) {
        self.apply(&ParameterSet::default());
    }

    fn load(&self, key: ParamKey) -> f32 {
        match key {
            ParamKey::Gain => self.gain_db.load(),
            ParamKey::Balance => self.balance.load(),
            _ => match self.flag(key) {
                Some(flag) if flag.load(Ordering::Relaxed) => 1.0,
                _ => 0.0,
            },
        }
    }

    fn flag(&self, key: ParamKey) -> Option<&AtomicBool> {
        match key {
            ParamKey::PhaseInv => Some(&self.phase_inv),
            ParamKey::PhaseInvLeft => Some(&self.phase_inv_left),
            ParamKey::PhaseInvRight => Some(&self.phase_inv_right),
            ParamKey::SwapLr => Some(&self.swap_lr),
            ParamKey::Mono => Some(&self.mono),
            ParamKey::Gain | ParamKey::Balance => None,
        }
    }
}

impl ParameterInfo for ParameterStore {
    fn param_count(&self) -> usize {
        self.layout.params().len()
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        self.layout.params().get(index).map(|k| k.descriptor())
    }

    fn get_param(&self, index: usize) -> f32 {
        self.layout
            .params()
            .get(index)
            .map_or(0.0, |&k| self.load(k))
    }

    fn set_param(&mut self, index: usize, value: f32) {
        if let Some(&key) = self.layout.params().get(index) {
            self.set(key, value);
        }
    }
}
