//! Channel layouts and the parameter subset each one activates.
//!
//! The layout is negotiated once when a unit is created and never changes
//! afterwards. Mono units expose a single phase-invert switch; stereo units
//! expose per-side polarity, balance, swap and mono collapse. Gain is common to
//! both. A different channel count means building a new unit.

use core::fmt;
use core::str::FromStr;

use crate::params::ParamKey;

const MONO_PARAMS: &[ParamKey] = &[ParamKey::Gain, ParamKey::PhaseInv];

const STEREO_PARAMS: &[ParamKey] = &[
    ParamKey::Gain,
    ParamKey::PhaseInvLeft,
    ParamKey::PhaseInvRight,
    ParamKey::Balance,
    ParamKey::SwapLr,
    ParamKey::Mono,
];

/// Supported channel layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    /// One channel.
    Mono,
    /// Two channels, index 0 is left and index 1 is right.
    Stereo,
}

impl ChannelLayout {
    /// Select the layout for a negotiated channel count.
    ///
    /// ```rust
    /// use logicgain_core::{ChannelLayout, LayoutError};
    ///
    /// assert_eq!(ChannelLayout::from_channel_count(2), Ok(ChannelLayout::Stereo));
    /// assert_eq!(ChannelLayout::from_channel_count(6), Err(LayoutError::Unsupported(6)));
    /// ```
    pub fn from_channel_count(channels: usize) -> Result<Self, LayoutError> {
        match channels {
            1 => Ok(Self::Mono),
            2 => Ok(Self::Stereo),
            n => Err(LayoutError::Unsupported(n)),
        }
    }

    /// Number of channels in this layout.
    pub const fn channel_count(self) -> usize {
        match self {
            Self::Mono => 1,
            Self::Stereo => 2,
        }
    }

    /// Parameters recognised by a unit with this layout, in host order.
    pub const fn params(self) -> &'static [ParamKey] {
        match self {
            Self::Mono => MONO_PARAMS,
            Self::Stereo => STEREO_PARAMS,
        }
    }

    /// Whether `key` belongs to this layout's parameter set.
    pub fn is_active(self, key: ParamKey) -> bool {
        self.params().contains(&key)
    }

    /// Lowercase name used in presets, state blobs and the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mono => "mono",
            Self::Stereo => "stereo",
        }
    }
}

impl fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChannelLayout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("mono") {
            Ok(Self::Mono)
        } else if s.eq_ignore_ascii_case("stereo") {
            Ok(Self::Stereo)
        } else {
            Err(LayoutError::UnknownName)
        }
    }
}

/// Layout negotiation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The channel count is neither 1 nor 2.
    Unsupported(usize),
    /// A layout name other than `mono` or `stereo`.
    UnknownName,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(n) => write!(f, "{n}-channel layout is not supported"),
            Self::UnknownName => f.write_str("unknown layout (expected 'mono' or 'stereo')"),
        }
    }
}

impl core::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_counts() {
        assert_eq!(ChannelLayout::from_channel_count(1), Ok(ChannelLayout::Mono));
        assert_eq!(ChannelLayout::from_channel_count(2), Ok(ChannelLayout::Stereo));
        assert_eq!(
            ChannelLayout::from_channel_count(0),
            Err(LayoutError::Unsupported(0))
        );
        assert_eq!(
            ChannelLayout::from_channel_count(3),
            Err(LayoutError::Unsupported(3))
        );
        assert_eq!(ChannelLayout::Mono.channel_count(), 1);
        assert_eq!(ChannelLayout::Stereo.channel_count(), 2);
    }

    #[test]
    fn parameter_subsets_are_disjoint_apart_from_gain() {
        assert!(ChannelLayout::Mono.is_active(ParamKey::PhaseInv));
        assert!(!ChannelLayout::Stereo.is_active(ParamKey::PhaseInv));
        for key in [
            ParamKey::PhaseInvLeft,
            ParamKey::PhaseInvRight,
            ParamKey::Balance,
            ParamKey::SwapLr,
            ParamKey::Mono,
        ] {
            assert!(ChannelLayout::Stereo.is_active(key));
            assert!(!ChannelLayout::Mono.is_active(key));
        }
        assert!(ChannelLayout::Mono.is_active(ParamKey::Gain));
        assert!(ChannelLayout::Stereo.is_active(ParamKey::Gain));
        assert_eq!(ChannelLayout::Mono.params().len(), 2);
        assert_eq!(ChannelLayout::Stereo.params().len(), 6);
    }

    #[test]
    fn names_roundtrip() {
        for layout in [ChannelLayout::Mono, ChannelLayout::Stereo] {
            assert_eq!(layout.name().parse::<ChannelLayout>(), Ok(layout));
        }
        assert_eq!(" Stereo ".parse::<ChannelLayout>(), Ok(ChannelLayout::Stereo));
        assert_eq!(
            "surround".parse::<ChannelLayout>(),
            Err(LayoutError::UnknownName)
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn error_display() {
        assert_eq!(
            LayoutError::Unsupported(6).to_string(),
            "6-channel layout is not supported"
        );
    }
}
