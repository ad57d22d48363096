//! Saved-state blobs for hosts and the command line.
//!
//! A blob is a small JSON document with a fixed root tag, a format version,
//! the unit's layout, and one flat entry per active parameter:
//!
//! ```json
//! {"tag": "savedParams", "version": 1, "layout": "stereo",
//!  "params": {"balance": 25.0, "gain": -6.0, "mono": false,
//!             "phaseInvLeft": true, "phaseInvRight": false, "swapLR": false}}
//! ```
//!
//! Reading is lenient inside a valid document (missing keys take defaults,
//! unknown keys are skipped, numbers are clamped) and strict about the
//! envelope (tag, version, layout).

use logicgain_core::{ChannelLayout, ParamKey, ParameterSet, ParameterStore};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::StateError;

/// Root tag written into every blob.
pub const STATE_TAG: &str = "savedParams";

/// Current blob format version.
pub const STATE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StateDocument {
    #[serde(default)]
    tag: String,
    version: u32,
    layout: String,
    #[serde(default)]
    params: Map<String, Value>,
}

/// Encode the active fields of `params` for `layout`.
///
/// Toggles are written as JSON booleans, gain and balance as numbers.
pub fn serialize_state(
    layout: ChannelLayout,
    params: &ParameterSet,
) -> Result<Vec<u8>, StateError> {
    let mut entries = Map::new();
    for &key in layout.params() {
        let value = params.get(key);
        let value = if key.is_toggle() {
            Value::Bool(value >= 0.5)
        } else {
            serde_json::json!(value)
        };
        entries.insert(key.name().to_string(), value);
    }

    let doc = StateDocument {
        tag: STATE_TAG.to_string(),
        version: STATE_VERSION,
        layout: layout.name().to_string(),
        params: entries,
    };
    Ok(serde_json::to_vec(&doc)?)
}

/// Decode a blob for a unit with `layout`.
///
/// Fails on invalid JSON, a missing or foreign tag, a newer version, a layout
/// other than `layout`, or a parameter value that is neither a number nor a
/// boolean.
pub fn try_deserialize_state(
    layout: ChannelLayout,
    bytes: &[u8],
) -> Result<ParameterSet, StateError> {
    let doc: StateDocument = serde_json::from_slice(bytes)?;

    if doc.tag != STATE_TAG {
        return Err(StateError::TagMismatch {
            expected: STATE_TAG,
            found: doc.tag,
        });
    }
    if doc.version > STATE_VERSION {
        return Err(StateError::UnsupportedVersion {
            found: doc.version,
            supported: STATE_VERSION,
        });
    }
    let saved: ChannelLayout = doc
        .layout
        .parse()
        .map_err(|_| StateError::InvalidLayout(doc.layout.clone()))?;
    if saved != layout {
        return Err(StateError::LayoutMismatch {
            expected: layout.name().to_string(),
            found: saved.name().to_string(),
        });
    }

    let mut params = ParameterSet::default();
    for &key in layout.params() {
        if let Some(value) = doc.params.get(key.name()) {
            params.set(key, value_of(key, value)?);
        }
    }
    Ok(params)
}

/// Decode a blob, falling back to defaults on any failure.
///
/// The failure is logged, never returned.
pub fn deserialize_state(layout: ChannelLayout, bytes: &[u8]) -> ParameterSet {
    match try_deserialize_state(layout, bytes) {
        Ok(params) => params,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring saved state, using defaults");
            ParameterSet::default()
        }
    }
}

/// Decode a blob into `store`.
///
/// Returns `false` and leaves the store untouched if the blob is rejected.
pub fn restore_state(store: &ParameterStore, bytes: &[u8]) -> bool {
    match try_deserialize_state(store.layout(), bytes) {
        Ok(params) => {
            store.apply(&params);
            tracing::debug!(layout = %store.layout(), "restored saved state");
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "ignoring saved state, keeping current values");
            false
        }
    }
}

fn value_of(key: ParamKey, value: &Value) -> Result<f32, StateError> {
    match value {
        Value::Bool(on) => Ok(if *on { 1.0 } else { 0.0 }),
        Value::Number(n) => n
            .as_f64()
            .map(|v| v as f32)
            .ok_or_else(|| StateError::InvalidValue(key.name().to_string())),
        _ => Err(StateError::InvalidValue(key.name().to_string())),
    }
}
