//! Shared helpers for CLI commands.

use std::path::Path;

use anyhow::{Context, bail};
use clap::Args;
use logicgain_config::{ConfigError, Preset, get_factory_preset};
use logicgain_core::{ChannelLayout, ParamKey, ParameterSet};

/// Control flags shared by `process` and `preset save`.
#[derive(Args, Debug, Default)]
pub struct ControlArgs {
    /// Gain in dB (-96 to +24)
    #[arg(long, allow_hyphen_values = true)]
    pub gain: Option<f32>,

    /// Invert polarity (mono input)
    #[arg(long)]
    pub phase_invert: bool,

    /// Invert left polarity (stereo input)
    #[arg(long)]
    pub phase_left: bool,

    /// Invert right polarity (stereo input)
    #[arg(long)]
    pub phase_right: bool,

    /// Balance in percent, -100 to +100 (stereo input)
    #[arg(long, allow_hyphen_values = true)]
    pub balance: Option<f32>,

    /// Swap left and right (stereo input)
    #[arg(long)]
    pub swap: bool,

    /// Collapse to mono, overrides --swap (stereo input)
    #[arg(long)]
    pub mono: bool,

    /// Parameter by key (e.g., "swapLR=on", "gain=-3 dB")
    #[arg(long = "param", value_parser = parse_key_val, number_of_values = 1)]
    pub params: Vec<(String, String)>,
}

impl ControlArgs {
    /// Every control the user asked for, with the flag spelling for messages.
    fn requested(&self) -> anyhow::Result<Vec<(String, ParamKey, f32)>> {
        let mut out = Vec::new();
        if let Some(gain) = self.gain {
            out.push(("--gain".to_string(), ParamKey::Gain, gain));
        }
        if let Some(balance) = self.balance {
            out.push(("--balance".to_string(), ParamKey::Balance, balance));
        }
        for (on, flag, key) in [
            (self.phase_invert, "--phase-invert", ParamKey::PhaseInv),
            (self.phase_left, "--phase-left", ParamKey::PhaseInvLeft),
            (self.phase_right, "--phase-right", ParamKey::PhaseInvRight),
            (self.swap, "--swap", ParamKey::SwapLr),
            (self.mono, "--mono", ParamKey::Mono),
        ] {
            if on {
                out.push((flag.to_string(), key, 1.0));
            }
        }
        for (name, text) in &self.params {
            let key = ParamKey::from_name(name)
                .with_context(|| format!("unknown parameter '{name}'"))?;
            let value = key
                .descriptor()
                .parse_value(text)
                .with_context(|| format!("invalid value '{text}' for '{name}'"))?;
            out.push((format!("--param {name}"), key, value));
        }
        Ok(out)
    }

    /// Write the requested controls into `params`.
    ///
    /// Fails if a control does not exist on `layout`. Out-of-range values are
    /// clamped with a warning; in-range values snap to the step.
    pub fn apply(&self, layout: ChannelLayout, params: &mut ParameterSet) -> anyhow::Result<()> {
        for (flag, key, value) in self.requested()? {
            if !layout.is_active(key) {
                bail!("{flag} is not available for {layout} audio");
            }
            let desc = key.descriptor();
            let used = desc.clamp(value);
            if !(desc.min..=desc.max).contains(&value) {
                tracing::warn!(
                    param = key.name(),
                    requested = value,
                    used,
                    "value out of range, clamped"
                );
            } else if used != value {
                tracing::debug!(param = key.name(), requested = value, used, "snapped to step");
            }
            params.set(key, used);
        }
        Ok(())
    }
}

/// Parse a `key=value` pair.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((k, v)) if !k.trim().is_empty() => Ok((k.trim().to_string(), v.trim().to_string())),
        _ => Err(format!(
            "Invalid parameter format: '{}' (expected key=value)",
            s
        )),
    }
}

/// Load a preset from a file path, falling back to the factory presets.
pub fn load_preset(name_or_path: &str) -> anyhow::Result<Preset> {
    let path = Path::new(name_or_path);
    if path.exists() {
        return Ok(Preset::load(path)?);
    }
    get_factory_preset(name_or_path)
        .ok_or_else(|| ConfigError::PresetNotFound(name_or_path.to_string()).into())
}

/// Print the active controls of `params`, one per line.
pub fn print_settings(layout: ChannelLayout, params: &ParameterSet) {
    for &key in layout.params() {
        let desc = key.descriptor();
        println!("  {:<14} {}", desc.name, desc.format_value(params.get(key)));
    }
}

/// RMS over every sample of every channel.
pub fn rms(channels: &[Vec<f32>]) -> f32 {
    let count: usize = channels.iter().map(Vec::len).sum();
    if count == 0 {
        return 0.0;
    }
    let sum: f32 = channels.iter().flatten().map(|s| s * s).sum();
    (sum / count as f32).sqrt()
}

/// Largest absolute sample over every channel.
pub fn peak(channels: &[Vec<f32>]) -> f32 {
    channels
        .iter()
        .flatten()
        .map(|s| s.abs())
        .fold(0.0, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_val_parsing() {
        assert_eq!(
            parse_key_val("gain=-3 dB"),
            Ok(("gain".to_string(), "-3 dB".to_string()))
        );
        assert_eq!(
            parse_key_val(" swapLR = on "),
            Ok(("swapLR".to_string(), "on".to_string()))
        );
        assert!(parse_key_val("gain").is_err());
        assert!(parse_key_val("=3").is_err());
    }

    #[test]
    fn flags_fill_the_set() {
        let controls = ControlArgs {
            gain: Some(-4.0),
            balance: Some(-30.0),
            swap: true,
            params: vec![("phaseInvRight".to_string(), "on".to_string())],
            ..ControlArgs::default()
        };
        let mut params = ParameterSet::default();
        controls.apply(ChannelLayout::Stereo, &mut params).unwrap();
        assert_eq!(params.gain_db, -4.0);
        assert_eq!(params.balance, -30.0);
        assert!(params.swap_lr);
        assert!(params.phase_inv_right);
        assert!(!params.mono);
    }

    #[test]
    fn foreign_flags_are_rejected() {
        let controls = ControlArgs {
            balance: Some(10.0),
            ..ControlArgs::default()
        };
        let err = controls
            .apply(ChannelLayout::Mono, &mut ParameterSet::default())
            .unwrap_err();
        assert!(err.to_string().contains("--balance"));

        let controls = ControlArgs {
            phase_invert: true,
            ..ControlArgs::default()
        };
        assert!(
            controls
                .apply(ChannelLayout::Stereo, &mut ParameterSet::default())
                .is_err()
        );
    }

    #[test]
    fn out_of_range_is_clamped() {
        let controls = ControlArgs {
            gain: Some(50.0),
            ..ControlArgs::default()
        };
        let mut params = ParameterSet::default();
        controls.apply(ChannelLayout::Mono, &mut params).unwrap();
        assert_eq!(params.gain_db, 24.0);
    }

    #[test]
    fn in_range_values_snap_to_step() {
        let controls = ControlArgs {
            gain: Some(-4.03),
            balance: Some(33.3),
            ..ControlArgs::default()
        };
        let mut params = ParameterSet::default();
        controls.apply(ChannelLayout::Stereo, &mut params).unwrap();
        assert_eq!(params.gain_db, -4.0);
        assert_eq!(params.balance, 33.5);
    }

    #[test]
    fn unknown_param_key_is_an_error() {
        let controls = ControlArgs {
            params: vec![("width".to_string(), "1".to_string())],
            ..ControlArgs::default()
        };
        assert!(
            controls
                .apply(ChannelLayout::Stereo, &mut ParameterSet::default())
                .is_err()
        );
    }

    #[test]
    fn stats() {
        let channels = vec![vec![1.0, -1.0], vec![0.5, -0.5]];
        assert_eq!(peak(&channels), 1.0);
        let expected = ((1.0 + 1.0 + 0.25 + 0.25) / 4.0_f32).sqrt();
        assert!((rms(&channels) - expected).abs() < 1e-6);
        assert_eq!(rms(&[]), 0.0);
    }
}
