//! Linear ramping for the gain multiplier.
//!
//! A block that changes gain applies the new multiplier from its first sample
//! unless a ramp time is configured. With a ramp, [`LinearSmoothedParam`]
//! walks from the previous multiplier to the new one at a constant rate and
//! lands exactly on the target.
//!
//! ```rust
//! use logicgain_core::LinearSmoothedParam;
//!
//! let mut gain = LinearSmoothedParam::with_config(1.0, 48000.0, 10.0);
//! gain.set_target(0.5);
//! for _ in 0..480 {
//!     gain.advance();
//! }
//! assert_eq!(gain.get(), 0.5);
//! ```

/// A value that moves towards its target in equal per-sample steps.
///
/// A transition time of zero makes every target change instant.
#[derive(Debug, Clone)]
pub struct LinearSmoothedParam {
    current: f32,
    target: f32,
    step: f32,
    remaining: u32,
    sample_rate: f32,
    ramp_ms: f32,
}

impl LinearSmoothedParam {
    /// Parameter with sample rate and transition time.
    pub fn with_config(initial: f32, sample_rate: f32, ramp_ms: f32) -> Self {
        Self {
            current: initial,
            target: initial,
            step: 0.0,
            remaining: 0,
            sample_rate,
            ramp_ms: ramp_ms.max(0.0),
        }
    }

    /// Start a transition from the current value to `target`.
    ///
    /// Re-targeting mid-ramp starts a fresh ramp from wherever the value is.
    pub fn set_target(&mut self, target: f32) {
        if target == self.target {
            return;
        }
        self.target = target;

        let samples = self.ramp_samples();
        if samples == 0 {
            self.snap_to_target();
        } else {
            self.step = (target - self.current) / samples as f32;
            self.remaining = samples;
        }
    }

    /// Jump to `value` with no transition.
    pub fn set_immediate(&mut self, value: f32) {
        self.target = value;
        self.snap_to_target();
    }

    /// Update the sample rate used to size later transitions.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
    }

    /// Set the transition time. Negative values count as zero.
    pub fn set_transition_time_ms(&mut self, ramp_ms: f32) {
        self.ramp_ms = ramp_ms.max(0.0);
    }

    /// Configured transition time in milliseconds.
    pub fn transition_time_ms(&self) -> f32 {
        self.ramp_ms
    }

    /// Step once and return the new value.
    #[inline]
    pub fn advance(&mut self) -> f32 {
        if self.remaining > 0 {
            self.remaining -= 1;
            self.current = if self.remaining == 0 {
                self.target
            } else {
                self.current + self.step
            };
        }
        self.current
    }

    /// Current value.
    #[inline]
    pub fn get(&self) -> f32 {
        self.current
    }

    /// True once no transition is in progress.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.remaining == 0
    }

    /// Finish any transition immediately.
    pub fn snap_to_target(&mut self) {
        self.current = self.target;
        self.step = 0.0;
        self.remaining = 0;
    }

    fn ramp_samples(&self) -> u32 {
        if self.ramp_ms <= 0.0 || self.sample_rate <= 0.0 {
            return 0;
        }
        (self.ramp_ms / 1000.0 * self.sample_rate) as u32
    }
}
