//! WAV file reading and writing.
//!
//! Samples are planar: one `Vec<f32>` per channel, index 0 left.

use crate::{Error, Result, frame_count};
use hound::{SampleFormat, WavReader, WavWriter};
use logicgain_core::ChannelLayout;
use std::path::Path;

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Audio encoding format.
    pub format: WavFormat,
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let total_samples = u64::from(reader.len());
    let num_frames = total_samples / u64::from(spec.channels.max(1));
    let duration_secs = num_frames as f64 / f64::from(spec.sample_rate);

    let format = match spec.sample_format {
        SampleFormat::Float => WavFormat::IeeeFloat,
        SampleFormat::Int => WavFormat::Pcm,
    };

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs,
        format,
    })
}

/// WAV file specification.
///
/// 32-bit files are written as float, other depths as integer PCM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// Bit depth per sample (e.g., 16, 24, 32).
    pub bits_per_sample: u16,
}

impl Default for WavSpec {
    fn default() -> Self {
        Self {
            channels: 2,
            sample_rate: 48000,
            bits_per_sample: 32,
        }
    }
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        }
    }
}

impl From<WavSpec> for hound::WavSpec {
    fn from(spec: WavSpec) -> Self {
        hound::WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: if spec.bits_per_sample == 32 {
                SampleFormat::Float
            } else {
                SampleFormat::Int
            },
        }
    }
}

/// Layout matching a file's channel count.
///
/// Fails with [`Error::UnsupportedLayout`] for anything but mono or stereo.
pub fn layout_for(spec: WavSpec) -> Result<ChannelLayout> {
    Ok(ChannelLayout::from_channel_count(usize::from(spec.channels))?)
}

/// Read a WAV file into planar channels.
///
/// Integer PCM is normalised to [-1.0, 1.0).
///
/// # Example
/// ```ignore
/// let (channels, spec) = read_wav("input.wav")?;
/// println!("{} channels, {} frames", channels.len(), channels[0].len());
/// ```
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<Vec<f32>>, WavSpec)> {
    let path = path.as_ref();
    let reader = WavReader::open(path)?;
    let spec = WavSpec::from(reader.spec());
    let channels = usize::from(spec.channels.max(1));

    let interleaved: Vec<f32> = match reader.spec().sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    let frames = interleaved.len() / channels;
    let mut planar = vec![Vec::with_capacity(frames); channels];
    for frame in interleaved.chunks_exact(channels) {
        for (ch, &s) in planar.iter_mut().zip(frame) {
            ch.push(s);
        }
    }

    tracing::debug!(
        path = %path.display(),
        channels,
        frames,
        sample_rate = spec.sample_rate,
        "read wav"
    );
    Ok((planar, spec))
}

/// Write planar channels to a WAV file.
///
/// The channel count comes from `channels`, not `spec.channels`. Integer
/// depths clamp out-of-range samples.
///
/// # Example
/// ```ignore
/// let silence = vec![vec![0.0f32; 48000]; 2];
/// write_wav("output.wav", &silence, WavSpec::default())?;
/// ```
pub fn write_wav<P: AsRef<Path>>(path: P, channels: &[Vec<f32>], spec: WavSpec) -> Result<()> {
    let path = path.as_ref();
    let frames = frame_count(channels)?;
    let count = u16::try_from(channels.len()).map_err(|_| Error::ChannelMismatch {
        expected: usize::from(u16::MAX),
        found: channels.len(),
    })?;
    if count == 0 {
        return Err(Error::ChannelMismatch {
            expected: 1,
            found: 0,
        });
    }

    let spec = WavSpec {
        channels: count,
        ..spec
    };
    let mut writer = WavWriter::create(path, hound::WavSpec::from(spec))?;

    if spec.bits_per_sample == 32 {
        for i in 0..frames {
            for ch in channels {
                writer.write_sample(ch[i])?;
            }
        }
    } else {
        let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
        for i in 0..frames {
            for ch in channels {
                let int_sample = (ch[i] * max_val).clamp(-max_val, max_val - 1.0) as i32;
                writer.write_sample(int_sample)?;
            }
        }
    }

    writer.finalize()?;
    tracing::debug!(path = %path.display(), channels = count, frames, "wrote wav");
    Ok(())
}
