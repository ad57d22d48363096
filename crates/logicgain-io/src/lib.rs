//! File I/O for the logicgain channel utility.
//!
//! This crate provides:
//!
//! - **WAV file I/O**: [`read_wav`] and [`write_wav`] move planar
//!   multi-channel audio to and from disk
//! - **Offline rendering**: [`OfflineRenderer`] runs a [`ChannelUtility`]
//!   over whole files in host-sized blocks
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use logicgain_core::ParameterSet;
//! use logicgain_io::{OfflineRenderer, layout_for, read_wav, write_wav};
//!
//! let (mut channels, spec) = read_wav("input.wav")?;
//! let params = ParameterSet { swap_lr: true, ..ParameterSet::default() };
//!
//! let mut renderer = OfflineRenderer::new(layout_for(spec)?, spec.sample_rate as f32, params);
//! renderer.render(&mut channels)?;
//!
//! write_wav("output.wav", &channels, spec)?;
//! # Ok::<(), logicgain_io::Error>(())
//! ```
//!
//! [`ChannelUtility`]: logicgain_core::ChannelUtility

mod engine;
mod wav;

pub use engine::{DEFAULT_BLOCK_SIZE, OfflineRenderer};
pub use wav::{WavFormat, WavInfo, WavSpec, layout_for, read_wav, read_wav_info, write_wav};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Buffer channel count differs from the unit's layout.
    #[error("expected {expected} channel(s), got {found}")]
    ChannelMismatch {
        /// Channels the layout needs.
        expected: usize,
        /// Channels supplied.
        found: usize,
    },

    /// Channels of one buffer have different lengths.
    #[error("channel lengths differ ({shortest} vs {longest} frames)")]
    LengthMismatch {
        /// Shortest channel length.
        shortest: usize,
        /// Longest channel length.
        longest: usize,
    },

    /// The file's channel count has no matching layout.
    #[error(transparent)]
    UnsupportedLayout(#[from] logicgain_core::LayoutError),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Check that planar channels all have the same length, returning it.
pub(crate) fn frame_count(channels: &[Vec<f32>]) -> Result<usize> {
    let shortest = channels.iter().map(Vec::len).min().unwrap_or(0);
    let longest = channels.iter().map(Vec::len).max().unwrap_or(0);
    if shortest == longest {
        Ok(shortest)
    } else {
        Err(Error::LengthMismatch { shortest, longest })
    }
}
