//! The control values read by the block processor.
//!
//! [`ParameterSet`] is a plain `Copy` snapshot of every control. Which fields
//! a unit actually uses depends on its [`ChannelLayout`](crate::ChannelLayout);
//! the others keep their defaults and are never read by the processor.
//!
//! | Key | Layout | Range | Default | ID |
//! |-----|--------|-------|---------|----|
//! | `gain` | both | -96 to +24 dB, step 0.1 | 0.0 | 100 |
//! | `phaseInv` | mono | Off/On | Off | 101 |
//! | `phaseInvLeft` | stereo | Off/On | Off | 102 |
//! | `phaseInvRight` | stereo | Off/On | Off | 103 |
//! | `balance` | stereo | -100 to +100 %, step 0.5 | 0.0 | 104 |
//! | `swapLR` | stereo | Off/On | Off | 105 |
//! | `mono` | stereo | Off/On | Off | 106 |

use crate::layout::ChannelLayout;
use crate::param_info::{ParamDescriptor, ParamId, ParamUnit};

/// Lowest gain setting in dB.
pub const GAIN_MIN_DB: f32 = -96.0;
/// Highest gain setting in dB.
pub const GAIN_MAX_DB: f32 = 24.0;
/// Balance limit in percent (both directions).
pub const BALANCE_LIMIT: f32 = 100.0;

/// Identifies one recognised parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKey {
    /// Gain in dB, applied to every channel.
    Gain,
    /// Mono layout: invert polarity.
    PhaseInv,
    /// Stereo layout: invert left polarity.
    PhaseInvLeft,
    /// Stereo layout: invert right polarity.
    PhaseInvRight,
    /// Stereo layout: balance in percent.
    Balance,
    /// Stereo layout: exchange left and right.
    SwapLr,
    /// Stereo layout: collapse to the L/R average.
    Mono,
}

impl ParamKey {
    /// Every key, in ID order.
    pub const ALL: [ParamKey; 7] = [
        ParamKey::Gain,
        ParamKey::PhaseInv,
        ParamKey::PhaseInvLeft,
        ParamKey::PhaseInvRight,
        ParamKey::Balance,
        ParamKey::SwapLr,
        ParamKey::Mono,
    ];

    /// Persistence key.
    pub const fn name(self) -> &'static str {
        self.descriptor().string_id
    }

    /// Full metadata for this parameter.
    pub const fn descriptor(self) -> ParamDescriptor {
        match self {
            ParamKey::Gain => {
                ParamDescriptor::gain_db("Gain", "Gain", GAIN_MIN_DB, GAIN_MAX_DB, 0.0)
                    .with_id(ParamId(100), "gain")
            }
            ParamKey::PhaseInv => {
                ParamDescriptor::toggle("Phase Invert", "Phase").with_id(ParamId(101), "phaseInv")
            }
            ParamKey::PhaseInvLeft => {
                ParamDescriptor::toggle("Phase Left", "PhL").with_id(ParamId(102), "phaseInvLeft")
            }
            ParamKey::PhaseInvRight => ParamDescriptor::toggle("Phase Right", "PhR")
                .with_id(ParamId(103), "phaseInvRight"),
            ParamKey::Balance => {
                ParamDescriptor::custom("Balance", "Bal", -BALANCE_LIMIT, BALANCE_LIMIT, 0.0)
                    .with_unit(ParamUnit::Percent)
                    .with_step(0.5)
                    .with_id(ParamId(104), "balance")
            }
            ParamKey::SwapLr => {
                ParamDescriptor::toggle("Swap L/R", "Swap").with_id(ParamId(105), "swapLR")
            }
            ParamKey::Mono => {
                ParamDescriptor::toggle("Make Mono", "Mono").with_id(ParamId(106), "mono")
            }
        }
    }

    /// Stable host ID.
    pub const fn id(self) -> ParamId {
        self.descriptor().id
    }

    /// Whether this key is an on/off switch.
    pub const fn is_toggle(self) -> bool {
        !matches!(self, ParamKey::Gain | ParamKey::Balance)
    }

    /// Look a key up by its persistence name (exact match).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Look a key up by its stable host ID.
    pub fn from_id(id: ParamId) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }
}

/// Snapshot of every control value.
///
/// Field writes are not range-checked; [`set`](Self::set) clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSet {
    /// Gain in dB.
    pub gain_db: f32,
    /// Mono: invert polarity.
    pub phase_inv: bool,
    /// Stereo: invert left polarity.
    pub phase_inv_left: bool,
    /// Stereo: invert right polarity.
    pub phase_inv_right: bool,
    /// Stereo: balance in percent; positive attenuates left, negative right.
    pub balance: f32,
    /// Stereo: exchange left and right.
    pub swap_lr: bool,
    /// Stereo: collapse both channels to their average. Wins over swap.
    pub mono: bool,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            gain_db: 0.0,
            phase_inv: false,
            phase_inv_left: false,
            phase_inv_right: false,
            balance: 0.0,
            swap_lr: false,
            mono: false,
        }
    }
}

impl ParameterSet {
    /// Read a field as a plain value (toggles are 0.0 or 1.0).
    pub fn get(&self, key: ParamKey) -> f32 {
        match key {
            ParamKey::Gain => self.gain_db,
            ParamKey::PhaseInv => flag(self.phase_inv),
            ParamKey::PhaseInvLeft => flag(self.phase_inv_left),
            ParamKey::PhaseInvRight => flag(self.phase_inv_right),
            ParamKey::Balance => self.balance,
            ParamKey::SwapLr => flag(self.swap_lr),
            ParamKey::Mono => flag(self.mono),
        }
    }

    /// Write a field from a plain value, clamped to the descriptor range and
    /// snapped to its step.
    ///
    /// Toggles switch on at 0.5 and above.
    pub fn set(&mut self, key: ParamKey, value: f32) {
        let value = key.descriptor().clamp(value);
        let on = value >= 0.5;
        match key {
            ParamKey::Gain => self.gain_db = value,
            ParamKey::PhaseInv => self.phase_inv = on,
            ParamKey::PhaseInvLeft => self.phase_inv_left = on,
            ParamKey::PhaseInvRight => self.phase_inv_right = on,
            ParamKey::Balance => self.balance = value,
            ParamKey::SwapLr => self.swap_lr = on,
            ParamKey::Mono => self.mono = on,
        }
    }

    /// Copy with every field outside `layout` reset to its default.
    pub fn masked(&self, layout: ChannelLayout) -> Self {
        let mut out = Self::default();
        for &key in layout.params() {
            out.set(key, self.get(key));
        }
        out
    }
}

#[inline]
fn flag(on: bool) -> f32 {
    if on { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = ParameterSet::default();
        assert_eq!(p.gain_db, 0.0);
        assert_eq!(p.balance, 0.0);
        assert!(!p.phase_inv && !p.phase_inv_left && !p.phase_inv_right);
        assert!(!p.swap_lr && !p.mono);
        for key in ParamKey::ALL {
            assert_eq!(p.get(key), key.descriptor().default, "{key:?}");
        }
    }

    #[test]
    fn descriptor_table() {
        let gain = ParamKey::Gain.descriptor();
        assert_eq!((gain.min, gain.max, gain.step), (-96.0, 24.0, 0.1));
        assert_eq!(gain.unit, ParamUnit::Decibels);

        let balance = ParamKey::Balance.descriptor();
        assert_eq!((balance.min, balance.max, balance.step), (-100.0, 100.0, 0.5));
        assert_eq!(balance.unit, ParamUnit::Percent);

        assert_eq!(ParamKey::SwapLr.descriptor().name, "Swap L/R");
        assert_eq!(ParamKey::Mono.descriptor().name, "Make Mono");
        for key in ParamKey::ALL {
            assert_eq!(key.descriptor().is_toggle(), key.is_toggle(), "{key:?}");
        }
    }

    #[test]
    fn names_and_ids_are_unique_and_resolvable() {
        for key in ParamKey::ALL {
            assert_eq!(ParamKey::from_name(key.name()), Some(key));
            assert_eq!(ParamKey::from_id(key.id()), Some(key));
        }
        assert_eq!(ParamKey::from_name("swapLR"), Some(ParamKey::SwapLr));
        assert_eq!(ParamKey::from_name("width"), None);
        assert_eq!(ParamKey::from_id(ParamId(999)), None);
    }

    #[test]
    fn set_clamps_and_thresholds() {
        let mut p = ParameterSet::default();
        p.set(ParamKey::Gain, 40.0);
        assert_eq!(p.gain_db, 24.0);
        p.set(ParamKey::Gain, -200.0);
        assert_eq!(p.gain_db, -96.0);
        p.set(ParamKey::Balance, -150.0);
        assert_eq!(p.balance, -100.0);
        p.set(ParamKey::SwapLr, 0.49);
        assert!(!p.swap_lr);
        p.set(ParamKey::SwapLr, 0.5);
        assert!(p.swap_lr);
        assert_eq!(p.get(ParamKey::SwapLr), 1.0);
    }

    #[test]
    fn masked_drops_foreign_fields() {
        let p = ParameterSet {
            gain_db: -3.0,
            phase_inv: true,
            phase_inv_left: true,
            phase_inv_right: true,
            balance: 20.0,
            swap_lr: true,
            mono: true,
        };
        let mono = p.masked(ChannelLayout::Mono);
        assert_eq!(
            mono,
            ParameterSet {
                gain_db: -3.0,
                phase_inv: true,
                ..ParameterSet::default()
            }
        );
        let stereo = p.masked(ChannelLayout::Stereo);
        assert!(!stereo.phase_inv);
        assert!(stereo.phase_inv_left && stereo.phase_inv_right);
        assert_eq!(stereo.balance, 20.0);
    }
}
