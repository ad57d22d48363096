//! The block processor.
//!
//! [`ChannelUtility`] runs two stages over a planar block, in place:
//!
//! 1. **Gain**: every sample of every channel is multiplied by
//!    `10^(gain_db/20)`.
//! 2. **Channel mix**, chosen by the number of channels in the block:
//!    - 2 channels: per-side polarity and balance coefficients, then mono
//!      collapse or, if mono is off, left/right swap.
//!    - 1 channel: optional polarity inversion.
//!    - anything else: nothing.
//!
//! The processor never allocates, locks or blocks.

use crate::layout::ChannelLayout;
use crate::math::db_to_linear;
use crate::param::LinearSmoothedParam;
use crate::params::ParameterSet;

/// Gain, polarity, balance, swap and mono downmix for one unit.
///
/// # Example
///
/// ```rust
/// use logicgain_core::{ChannelLayout, ChannelUtility, ParameterSet};
///
/// let mut utility = ChannelUtility::new(ChannelLayout::Stereo, 48000.0);
/// let params = ParameterSet { swap_lr: true, ..ParameterSet::default() };
///
/// let mut left = [2.0_f32];
/// let mut right = [4.0_f32];
/// utility.process(&mut [&mut left[..], &mut right[..]], &params);
/// assert_eq!((left[0], right[0]), (4.0, 2.0));
/// ```
#[derive(Debug, Clone)]
pub struct ChannelUtility {
    layout: ChannelLayout,
    sample_rate: f32,
    gain: LinearSmoothedParam,
    /// Set once a block has run since construction or [`reset`](Self::reset).
    primed: bool,
}

impl ChannelUtility {
    /// Processor for `layout` at `sample_rate` Hz with no gain ramp.
    pub fn new(layout: ChannelLayout, sample_rate: f32) -> Self {
        Self {
            layout,
            sample_rate,
            gain: LinearSmoothedParam::with_config(1.0, sample_rate, 0.0),
            primed: false,
        }
    }

    /// Layout fixed at construction.
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Current sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Change the sample rate used to size gain ramps.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.gain.set_sample_rate(sample_rate);
    }

    /// Ramp gain changes linearly over `ms` milliseconds.
    ///
    /// Zero (the default) applies each block's gain from its first sample.
    /// Negative values count as zero. The first block after construction or
    /// [`reset`](Self::reset) never ramps.
    pub fn set_gain_ramp_ms(&mut self, ms: f32) {
        self.gain.set_transition_time_ms(ms);
        if self.gain.transition_time_ms() == 0.0 {
            self.gain.snap_to_target();
        }
    }

    /// Configured gain ramp in milliseconds.
    pub fn gain_ramp_ms(&self) -> f32 {
        self.gain.transition_time_ms()
    }

    /// Drop any gain ramp in progress; the next block starts from its own gain.
    pub fn reset(&mut self) {
        self.gain.snap_to_target();
        self.primed = false;
    }

    /// Always zero.
    pub fn latency_samples(&self) -> usize {
        0
    }

    /// Always zero.
    pub fn tail_seconds(&self) -> f32 {
        0.0
    }

    /// Linear multiplier for `params.gain_db`.
    #[inline]
    pub fn gain_multiplier(params: &ParameterSet) -> f32 {
        db_to_linear(params.gain_db)
    }

    /// Left and right coefficients from polarity and balance.
    ///
    /// Positive balance scales the left side by `1 - balance/100`, anything
    /// else scales the right side by `1 + balance/100`. The balance is not
    /// clamped here.
    ///
    /// ```rust
    /// use logicgain_core::{ChannelUtility, ParameterSet};
    ///
    /// let p = ParameterSet { balance: 50.0, ..ParameterSet::default() };
    /// assert_eq!(ChannelUtility::stereo_coefficients(&p), (0.5, 1.0));
    /// ```
    #[inline]
    pub fn stereo_coefficients(params: &ParameterSet) -> (f32, f32) {
        let mut left = if params.phase_inv_left { -1.0 } else { 1.0 };
        let mut right = if params.phase_inv_right { -1.0 } else { 1.0 };
        if params.balance > 0.0 {
            left *= 1.0 - params.balance / 100.0;
        } else {
            right *= 1.0 + params.balance / 100.0;
        }
        (left, right)
    }

    /// Process one block in place.
    ///
    /// `buffer` holds one slice per channel. All slices must be the same
    /// length; in release builds a mismatch processes only the shortest
    /// length.
    pub fn process(&mut self, buffer: &mut [&mut [f32]], params: &ParameterSet) {
        let frames = buffer.iter().map(|ch| ch.len()).min().unwrap_or(0);
        debug_assert!(
            buffer.iter().all(|ch| ch.len() == frames),
            "channel slices differ in length"
        );

        self.apply_gain(buffer, frames, Self::gain_multiplier(params));

        match buffer {
            [left, right] => {
                mix_stereo(&mut left[..frames], &mut right[..frames], params);
            }
            [channel] => {
                if params.phase_inv {
                    for s in &mut channel[..frames] {
                        *s = -*s;
                    }
                }
            }
            _ => {}
        }
    }

    fn apply_gain(&mut self, buffer: &mut [&mut [f32]], frames: usize, multiplier: f32) {
        if !self.primed || self.gain.transition_time_ms() == 0.0 {
            self.gain.set_immediate(multiplier);
            self.primed = true;
        } else {
            self.gain.set_target(multiplier);
        }

        if self.gain.is_settled() {
            let g = self.gain.get();
            for channel in buffer.iter_mut() {
                for s in &mut channel[..frames] {
                    *s *= g;
                }
            }
            return;
        }

        for i in 0..frames {
            let g = self.gain.advance();
            for channel in buffer.iter_mut() {
                channel[i] *= g;
            }
        }
    }
}

#[inline]
fn mix_stereo(left: &mut [f32], right: &mut [f32], params: &ParameterSet) {
    let (coef_left, coef_right) = ChannelUtility::stereo_coefficients(params);
    for (l, r) in left.iter_mut().zip(right.iter_mut()) {
        let a = *l * coef_left;
        let b = *r * coef_right;
        if params.mono {
            let m = (a + b) / 2.0;
            *l = m;
            *r = m;
        } else if params.swap_lr {
            *l = b;
            *r = a;
        } else {
            *l = a;
            *r = b;
        }
    }
}
