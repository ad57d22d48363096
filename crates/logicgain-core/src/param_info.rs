//! Parameter introspection for host-facing parameter lists.
//!
//! This module provides the [`ParameterInfo`] trait and supporting types that
//! let adapters discover and manipulate parameters at runtime:
//!
//! - **Plugin hosts**: parameter lists, automation and value ↔ text conversion
//! - **Command line**: listing ranges and defaults, parsing `key=value` pairs
//! - **Presets and state**: saving and restoring by stable key
//!
//! # Design
//!
//! Parameters are accessed by zero-based index. Each one is described by a
//! [`ParamDescriptor`] carrying its display metadata, range, a stable
//! [`ParamId`] for host automation, and a stable string ID used as the
//! persistence key.
//!
//! # Example
//!
//! ```rust
//! use logicgain_core::{ParamDescriptor, ParamId, ParameterInfo};
//!
//! struct Trim {
//!     gain_db: f32,
//! }
//!
//! impl ParameterInfo for Trim {
//!     fn param_count(&self) -> usize { 1 }
//!
//!     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
//!         match index {
//!             0 => Some(ParamDescriptor::gain_db("Trim", "Trim", -24.0, 24.0, 0.0)
//!                 .with_id(ParamId(900), "trim")),
//!             _ => None,
//!         }
//!     }
//!
//!     fn get_param(&self, index: usize) -> f32 {
//!         match index {
//!             0 => self.gain_db,
//!             _ => 0.0,
//!         }
//!     }
//!
//!     fn set_param(&mut self, index: usize, value: f32) {
//!         if index == 0 {
//!             self.gain_db = value.clamp(-24.0, 24.0);
//!         }
//!     }
//! }
//! ```

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

/// Stable parameter identifier that survives reordering.
///
/// Maps directly to the CLAP `clap_id`. Once assigned, a `ParamId` must never
/// change for a given parameter; hosts store it in automation lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Parameter capability flags for plugin host communication.
///
/// ```rust
/// use logicgain_core::ParamFlags;
///
/// let flags = ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED);
/// assert!(flags.contains(ParamFlags::STEPPED));
/// assert!(!flags.contains(ParamFlags::HIDDEN));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFlags(u8);

impl ParamFlags {
    /// Host can automate this parameter (default for all params).
    pub const AUTOMATABLE: Self = Self(1 << 0);
    /// Parameter has discrete steps (toggles).
    pub const STEPPED: Self = Self(1 << 1);
    /// Parameter should be hidden from generic host UI.
    pub const HIDDEN: Self = Self(1 << 2);
    /// Parameter is read-only.
    pub const READ_ONLY: Self = Self(1 << 3);

    /// Returns `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two flag sets.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for ParamFlags {
    fn default() -> Self {
        Self::AUTOMATABLE
    }
}

/// Unit type for parameter display and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Decibels (dB).
    Decibels,
    /// Percentage (%).
    Percent,
    /// No unit.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    ///
    /// ```rust
    /// use logicgain_core::ParamUnit;
    ///
    /// assert_eq!(ParamUnit::Decibels.suffix(), " dB");
    /// assert_eq!(ParamUnit::Percent.suffix(), "%");
    /// assert_eq!(ParamUnit::None.suffix(), "");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Decibels => " dB",
            ParamUnit::Percent => "%",
            ParamUnit::None => "",
        }
    }
}

/// Describes a single parameter's metadata for display and validation.
///
/// `short_name` should stay at 8 characters or less so it fits narrow host
/// displays. `step` is the value grid: [`clamp`](Self::clamp) snaps to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g. "Phase Left").
    pub name: &'static str,
    /// Short name, max 8 characters.
    pub short_name: &'static str,
    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,
    /// Minimum allowed value.
    pub min: f32,
    /// Maximum allowed value.
    pub max: f32,
    /// Default value.
    pub default: f32,
    /// Recommended step increment.
    pub step: f32,
    /// Stable numeric ID for host automation.
    pub id: ParamId,
    /// Stable string ID, used as the persistence key.
    pub string_id: &'static str,
    /// Capability flags for plugin host communication.
    pub flags: ParamFlags,
}

impl ParamDescriptor {
    /// Gain parameter with custom name and range (decibels, step 0.1).
    pub const fn gain_db(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Decibels,
            min,
            max,
            default,
            step: 0.1,
            id: ParamId(0),
            string_id: "",
            flags: ParamFlags::AUTOMATABLE,
        }
    }

    /// Continuous parameter with no unit.
    pub const fn custom(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            min,
            max,
            default,
            step: 0.01,
            id: ParamId(0),
            string_id: "",
            flags: ParamFlags::AUTOMATABLE,
        }
    }

    /// On/off parameter: range 0–1, default off, stepped.
    pub const fn toggle(name: &'static str, short_name: &'static str) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            min: 0.0,
            max: 1.0,
            default: 0.0,
            step: 1.0,
            id: ParamId(0),
            string_id: "",
            flags: ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED),
        }
    }

    /// Sets the stable parameter ID and string ID.
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Sets the display unit.
    pub const fn with_unit(mut self, unit: ParamUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the recommended step.
    pub const fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Whether this parameter is an on/off switch.
    #[inline]
    pub fn is_toggle(&self) -> bool {
        self.flags.contains(ParamFlags::STEPPED) && self.min == 0.0 && self.max == 1.0
    }

    /// Clamps a value to this parameter's valid range, snapped to `step`.
    ///
    /// NaN maps to the default. Toggles are not snapped.
    ///
    /// ```rust
    /// use logicgain_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::gain_db("Gain", "Gain", -96.0, 24.0, 0.0);
    /// assert_eq!(desc.clamp(-120.0), -96.0);
    /// assert_eq!(desc.clamp(30.0), 24.0);
    /// assert_eq!(desc.clamp(f32::NAN), 0.0);
    /// assert_eq!(desc.clamp(0.03), 0.0);
    /// ```
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.default
        } else {
            self.snap(value).clamp(self.min, self.max)
        }
    }

    /// Rounds `value` to the nearest `min + n * step`.
    ///
    /// Decimal steps such as `0.1` divide by their integer reciprocal in
    /// `f64`, so grid points like `-6.0` or `50.0` come back exact. Toggles,
    /// non-positive steps and infinities pass through.
    ///
    /// ```rust
    /// use logicgain_core::ParamDescriptor;
    ///
    /// let bal = ParamDescriptor::custom("Balance", "Bal", -100.0, 100.0, 0.0).with_step(0.5);
    /// assert_eq!(bal.snap(33.3), 33.5);
    /// assert_eq!(bal.snap(-42.6), -42.5);
    /// ```
    pub fn snap(&self, value: f32) -> f32 {
        if self.is_toggle() || self.step <= 0.0 || !value.is_finite() {
            return value;
        }
        let min = f64::from(self.min);
        let step = f64::from(self.step);
        let n = libm::round((f64::from(value) - min) / step);
        let per_unit = libm::round(1.0 / step);
        let offset = if per_unit >= 1.0 && libm::fabs(per_unit * step - 1.0) < 1e-6 {
            n / per_unit
        } else {
            n * step
        };
        (min + offset) as f32
    }

    /// Formats a value for display.
    ///
    /// ```rust
    /// use logicgain_core::ParamDescriptor;
    ///
    /// let gain = ParamDescriptor::gain_db("Gain", "Gain", -96.0, 24.0, 0.0);
    /// assert_eq!(gain.format_value(-6.0), "-6.0 dB");
    /// assert_eq!(ParamDescriptor::toggle("Mono", "Mono").format_value(1.0), "On");
    /// ```
    pub fn format_value(&self, value: f32) -> String {
        if self.is_toggle() {
            return String::from(if value >= 0.5 { "On" } else { "Off" });
        }
        match self.unit {
            ParamUnit::Decibels => format!("{value:.1} dB"),
            ParamUnit::Percent => format!("{value:.1}%"),
            ParamUnit::None => format!("{value:.2}"),
        }
    }

    /// Parses display text back to a clamped value.
    ///
    /// Accepts the formats produced by [`format_value`](Self::format_value),
    /// bare numbers, and for toggles `on`/`off`/`true`/`false`/`yes`/`no`.
    pub fn parse_value(&self, text: &str) -> Option<f32> {
        let text = text.trim();
        if self.is_toggle() {
            for word in ["on", "true", "yes"] {
                if text.eq_ignore_ascii_case(word) {
                    return Some(1.0);
                }
            }
            for word in ["off", "false", "no"] {
                if text.eq_ignore_ascii_case(word) {
                    return Some(0.0);
                }
            }
            let v: f32 = text.parse().ok()?;
            return Some(if v >= 0.5 { 1.0 } else { 0.0 });
        }

        let suffix = self.unit.suffix().trim();
        let number = if suffix.is_empty() {
            text
        } else {
            strip_suffix_ignore_case(text, suffix).trim()
        };
        let v: f32 = number.parse().ok()?;
        if v.is_nan() {
            return None;
        }
        Some(self.clamp(v))
    }
}

fn strip_suffix_ignore_case<'a>(text: &'a str, suffix: &str) -> &'a str {
    if text.len() >= suffix.len() {
        let split = text.len() - suffix.len();
        if text.is_char_boundary(split) && text[split..].eq_ignore_ascii_case(suffix) {
            return &text[..split];
        }
    }
    text
}

/// Trait for types that expose introspectable parameters.
///
/// Indices must be stable for the lifetime of the instance; use
/// [`param_count`](Self::param_count) to determine valid indices.
pub trait ParameterInfo {
    /// Returns the number of parameters exposed.
    fn param_count(&self) -> usize;

    /// Returns the descriptor for the parameter at `index`, or `None` when
    /// out of range.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Gets the current value of the parameter at `index`.
    ///
    /// Returns `0.0` for out-of-range indices.
    fn get_param(&self, index: usize) -> f32;

    /// Sets the value of the parameter at `index`.
    ///
    /// Implementations clamp to the descriptor range and ignore
    /// out-of-range indices.
    fn set_param(&mut self, index: usize, value: f32);

    /// Find a parameter index by name (case-insensitive).
    ///
    /// Matches the display name, the short name and the string ID.
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| {
            self.param_info(i).is_some_and(|desc| {
                desc.name.eq_ignore_ascii_case(name)
                    || desc.short_name.eq_ignore_ascii_case(name)
                    || desc.string_id.eq_ignore_ascii_case(name)
            })
        })
    }

    /// Returns the stable [`ParamId`] for the parameter at `index`.
    fn param_id(&self, index: usize) -> Option<ParamId> {
        self.param_info(index).map(|d| d.id)
    }

    /// Finds a parameter index by its stable [`ParamId`].
    ///
    /// O(n) scan, meant for setup paths rather than audio.
    fn param_index_by_id(&self, id: ParamId) -> Option<usize> {
        (0..self.param_count()).find(|&i| self.param_info(i).is_some_and(|d| d.id == id))
    }
}
