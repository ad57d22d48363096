//! Offline block rendering.

use logicgain_core::{ChannelLayout, ChannelUtility, ParameterSet};

use crate::{Error, Result, frame_count};

/// Block size used when none is given, in frames.
pub const DEFAULT_BLOCK_SIZE: usize = 512;

/// Runs a [`ChannelUtility`] over whole planar buffers, one host-sized block
/// at a time.
///
/// The final block may be shorter than the block size.
#[derive(Debug, Clone)]
pub struct OfflineRenderer {
    utility: ChannelUtility,
    params: ParameterSet,
    block_size: usize,
}

impl OfflineRenderer {
    /// Create a renderer for `layout` at `sample_rate` Hz.
    pub fn new(layout: ChannelLayout, sample_rate: f32, params: ParameterSet) -> Self {
        Self {
            utility: ChannelUtility::new(layout, sample_rate),
            params,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }

    /// Set the block size. Zero counts as one.
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size.max(1);
        self
    }

    /// Set the gain ramp time in milliseconds.
    pub fn with_gain_ramp_ms(mut self, ms: f32) -> Self {
        self.utility.set_gain_ramp_ms(ms);
        self
    }

    /// Block size in frames.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Process `channels` in place.
    pub fn render(&mut self, channels: &mut [Vec<f32>]) -> Result<()> {
        self.render_with_progress(channels, |_, _| {})
    }

    /// Process `channels` in place, calling `progress(done, total)` in frames
    /// after every block.
    pub fn render_with_progress<F>(&mut self, channels: &mut [Vec<f32>], mut progress: F) -> Result<()>
    where
        F: FnMut(usize, usize),
    {
        let expected = self.utility.layout().channel_count();
        if channels.len() != expected {
            return Err(Error::ChannelMismatch {
                expected,
                found: channels.len(),
            });
        }
        let total = frame_count(channels)?;

        tracing::debug!(
            layout = %self.utility.layout(),
            frames = total,
            block_size = self.block_size,
            "rendering"
        );

        let mut start = 0;
        while start < total {
            let end = (start + self.block_size).min(total);
            match &mut *channels {
                [mono] => self
                    .utility
                    .process(&mut [&mut mono[start..end]], &self.params),
                [left, right] => self.utility.process(
                    &mut [&mut left[start..end], &mut right[start..end]],
                    &self.params,
                ),
                _ => {}
            }
            start = end;
            progress(start, total);
        }
        Ok(())
    }
}
