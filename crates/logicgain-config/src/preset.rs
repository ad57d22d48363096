//! Preset file format and operations.

use std::collections::BTreeMap;
use std::path::Path;

use logicgain_core::{ChannelLayout, ParamKey, ParameterSet};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A named set of control values for one layout.
///
/// # TOML Format
///
/// ```toml
/// name = "Mono Check"
/// description = "Collapse to mono at -3 dB"
/// layout = "stereo"
///
/// [params]
/// gain = -3.0
/// mono = 1.0
/// ```
///
/// Parameters not listed keep their defaults. Toggles are on at 0.5 and
/// above.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `"mono"` or `"stereo"`.
    pub layout: String,

    /// Parameter values keyed by persistence name.
    #[serde(default)]
    pub params: BTreeMap<String, f32>,
}

impl Preset {
    /// Create an empty preset for `layout`.
    pub fn new(name: impl Into<String>, layout: ChannelLayout) -> Self {
        Self {
            name: name.into(),
            description: None,
            layout: layout.name().to_string(),
            params: BTreeMap::new(),
        }
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add or replace one parameter value.
    pub fn with_param(mut self, key: ParamKey, value: f32) -> Self {
        self.params.insert(key.name().to_string(), value);
        self
    }

    /// Capture the active fields of `params`.
    pub fn from_parameter_set(
        name: impl Into<String>,
        layout: ChannelLayout,
        params: &ParameterSet,
    ) -> Self {
        let mut preset = Self::new(name, layout);
        for &key in layout.params() {
            preset = preset.with_param(key, params.get(key));
        }
        preset
    }

    /// Validate and convert to a layout and parameter snapshot.
    ///
    /// Rejects unknown keys, keys belonging to the other layout and values
    /// outside a parameter's range. Accepted values snap to the step.
    pub fn to_parameter_set(&self) -> Result<(ChannelLayout, ParameterSet), ConfigError> {
        let layout = self.channel_layout()?;
        let mut set = ParameterSet::default();
        for (name, &value) in &self.params {
            let key = ParamKey::from_name(name)
                .ok_or_else(|| ConfigError::UnknownParameter(name.clone()))?;
            if !layout.is_active(key) {
                return Err(ConfigError::invalid_parameter(
                    name,
                    format!("not available on a {layout} unit"),
                ));
            }
            let desc = key.descriptor();
            if !(desc.min..=desc.max).contains(&value) {
                return Err(ConfigError::invalid_parameter(
                    name,
                    format!("{value} is outside {}..={}", desc.min, desc.max),
                ));
            }
            set.set(key, value);
        }
        Ok((layout, set))
    }

    /// Parsed layout field.
    pub fn channel_layout(&self) -> Result<ChannelLayout, ConfigError> {
        self.layout
            .parse()
            .map_err(|_| ConfigError::InvalidLayout(self.layout.clone()))
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), name = %preset.name, "loaded preset");
        Ok(preset)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        tracing::debug!(path = %path.display(), name = %self.name, "saved preset");
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MONO_CHECK: &str = r#"
name = "Mono Check"
description = "Collapse to mono at -3 dB"
layout = "stereo"

[params]
gain = -3.0
mono = 1.0
"#;

    #[test]
    fn parse_documented_format() {
        let preset = Preset::from_toml(MONO_CHECK).unwrap();
        assert_eq!(preset.name, "Mono Check");
        assert_eq!(preset.description.as_deref(), Some("Collapse to mono at -3 dB"));
        let (layout, params) = preset.to_parameter_set().unwrap();
        assert_eq!(layout, ChannelLayout::Stereo);
        assert_eq!(params.gain_db, -3.0);
        assert!(params.mono);
        assert!(!params.swap_lr);
    }

    #[test]
    fn integer_values_are_accepted() {
        let preset = Preset::from_toml(
            "name = \"Trim\"\nlayout = \"mono\"\n[params]\ngain = -6\nphaseInv = 1\n",
        )
        .unwrap();
        let (_, params) = preset.to_parameter_set().unwrap();
        assert_eq!(params.gain_db, -6.0);
        assert!(params.phase_inv);
    }

    #[test]
    fn builder_and_snapshot_agree() {
        let params = ParameterSet {
            gain_db: 4.5,
            balance: -20.0,
            swap_lr: true,
            ..ParameterSet::default()
        };
        let preset = Preset::from_parameter_set("Wide", ChannelLayout::Stereo, &params)
            .with_description("test");
        assert_eq!(preset.params.len(), 6);
        assert_eq!(preset.params["swapLR"], 1.0);
        assert_eq!(preset.to_parameter_set().unwrap(), (ChannelLayout::Stereo, params));
    }

    #[test]
    fn rejects_unknown_and_foreign_keys() {
        let mut unknown = Preset::new("x", ChannelLayout::Stereo).with_param(ParamKey::Gain, 0.0);
        unknown.params.insert("width".to_string(), 1.0);
        assert!(matches!(
            unknown.to_parameter_set(),
            Err(ConfigError::UnknownParameter(ref k)) if k == "width"
        ));

        let foreign = Preset::new("x", ChannelLayout::Mono).with_param(ParamKey::Balance, 10.0);
        let err = foreign.to_parameter_set().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter { ref param, .. } if param == "balance"));
        assert!(err.to_string().contains("mono unit"));
    }

    #[test]
    fn rejects_out_of_range() {
        let preset = Preset::new("x", ChannelLayout::Stereo).with_param(ParamKey::Gain, 30.0);
        assert!(matches!(
            preset.to_parameter_set(),
            Err(ConfigError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn off_grid_values_snap_to_step() {
        let preset = Preset::new("x", ChannelLayout::Stereo)
            .with_param(ParamKey::Gain, 0.03)
            .with_param(ParamKey::Balance, 33.3);
        let (_, params) = preset.to_parameter_set().unwrap();
        assert_eq!(params.gain_db, 0.0);
        assert_eq!(params.balance, 33.5);
    }

    #[test]
    fn rejects_bad_layout() {
        let mut preset = Preset::new("x", ChannelLayout::Stereo);
        preset.layout = "5.1".to_string();
        assert!(matches!(
            preset.to_parameter_set(),
            Err(ConfigError::InvalidLayout(ref l)) if l == "5.1"
        ));
    }

    #[test]
    fn save_creates_directories_and_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("check.toml");
        let preset = Preset::from_toml(MONO_CHECK).unwrap();
        preset.save(&path).unwrap();
        assert!(path.exists());
        assert_eq!(Preset::load(&path).unwrap(), preset);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let err = Preset::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            Preset::from_toml("name = "),
            Err(ConfigError::TomlParse(_))
        ));
        assert!(matches!(
            Preset::from_toml("name = \"no layout\""),
            Err(ConfigError::TomlParse(_))
        ));
    }
}
