//! Main-thread plugin implementation for logicgain CLAP plugins.
//!
//! Handles parameter metadata queries, state save/restore, latency and audio
//! port configuration. All methods run on the host's main thread.

use crate::audio::handle_events;
use crate::shared::LogicGainShared;
use clack_extensions::audio_ports::{
    AudioPortFlags, AudioPortInfo, AudioPortInfoWriter, AudioPortType, PluginAudioPortsImpl,
};
use clack_extensions::latency::PluginLatencyImpl;
use clack_extensions::params::{
    ParamDisplayWriter, ParamInfo, ParamInfoFlags, ParamInfoWriter, PluginMainThreadParams,
};
use clack_extensions::state::PluginStateImpl;
use clack_plugin::prelude::*;
use clack_plugin::stream::{InputStream, OutputStream};
use clack_plugin::utils::Cookie;
use logicgain_core::{ChannelLayout, ParamFlags};
use std::io::{Read, Write};

/// Main-thread state for a logicgain CLAP plugin.
pub struct LogicGainMainThread<'a> {
    shared: &'a LogicGainShared,
}

impl<'a> LogicGainMainThread<'a> {
    /// Create a new main-thread handler referencing the shared state.
    pub fn new(shared: &'a LogicGainShared) -> Self {
        Self { shared }
    }
}

impl<'a> PluginMainThread<'a, LogicGainShared> for LogicGainMainThread<'a> {}

// ── Parameter Extension ─────────────────────────────────────────────────────

fn map_flags(flags: ParamFlags) -> ParamInfoFlags {
    let mut clap_flags = ParamInfoFlags::empty();

    if flags.contains(ParamFlags::AUTOMATABLE) {
        clap_flags |= ParamInfoFlags::IS_AUTOMATABLE;
    }
    if flags.contains(ParamFlags::STEPPED) {
        clap_flags |= ParamInfoFlags::IS_STEPPED;
    }
    if flags.contains(ParamFlags::HIDDEN) {
        clap_flags |= ParamInfoFlags::IS_HIDDEN;
    }
    if flags.contains(ParamFlags::READ_ONLY) {
        clap_flags |= ParamInfoFlags::IS_READONLY;
    }

    clap_flags
}

impl PluginMainThreadParams for LogicGainMainThread<'_> {
    fn count(&mut self) -> u32 {
        self.shared.param_count() as u32
    }

    fn get_info(&mut self, param_index: u32, info: &mut ParamInfoWriter) {
        let Some(desc) = self.shared.descriptor(param_index as usize) else {
            return;
        };

        info.set(&ParamInfo {
            id: ClapId::new(desc.id.0),
            name: desc.name.as_bytes(),
            module: b"",
            min_value: f64::from(desc.min),
            max_value: f64::from(desc.max),
            default_value: f64::from(desc.default),
            flags: map_flags(desc.flags),
            cookie: Cookie::default(),
        });
    }

    fn get_value(&mut self, param_id: ClapId) -> Option<f64> {
        self.shared.get_value(param_id.get()).map(f64::from)
    }

    fn value_to_text(
        &mut self,
        param_id: ClapId,
        value: f64,
        writer: &mut ParamDisplayWriter,
    ) -> core::fmt::Result {
        use core::fmt::Write;

        match self.shared.key_by_id(param_id.get()) {
            Some(key) => write!(writer, "{}", key.descriptor().format_value(value as f32)),
            None => write!(writer, "{value:.2}"),
        }
    }

    fn text_to_value(&mut self, param_id: ClapId, text: &core::ffi::CStr) -> Option<f64> {
        let key = self.shared.key_by_id(param_id.get())?;
        let s = text.to_str().ok()?;
        key.descriptor().parse_value(s).map(f64::from)
    }

    fn flush(&mut self, input: &InputEvents, _output: &mut OutputEvents) {
        handle_events(self.shared, input);
    }
}

// ── State Extension ─────────────────────────────────────────────────────────

/// State is the tagged JSON document from `logicgain_config`, keyed by
/// parameter name. A blob that fails to parse leaves the current values in
/// place.
impl PluginStateImpl for LogicGainMainThread<'_> {
    fn save(&mut self, output: &mut OutputStream) -> Result<(), PluginError> {
        let json = logicgain_config::serialize_state(self.shared.layout(), &self.shared.snapshot())
            .map_err(|_| PluginError::Message("Failed to serialize state"))?;

        output
            .write_all(&json)
            .map_err(|_| PluginError::Message("Failed to write state"))?;

        Ok(())
    }

    fn load(&mut self, input: &mut InputStream) -> Result<(), PluginError> {
        let mut buf = Vec::new();
        input
            .read_to_end(&mut buf)
            .map_err(|_| PluginError::Message("Failed to read state"))?;

        if !logicgain_config::restore_state(self.shared.store(), &buf) {
            tracing::warn!(bytes = buf.len(), "ignoring unreadable plugin state");
        }
        Ok(())
    }
}

// ── Latency Extension ───────────────────────────────────────────────────────

impl PluginLatencyImpl for LogicGainMainThread<'_> {
    fn get(&mut self) -> u32 {
        0
    }
}

// ── Audio Ports Extension ───────────────────────────────────────────────────

impl PluginAudioPortsImpl for LogicGainMainThread<'_> {
    fn count(&mut self, _is_input: bool) -> u32 {
        1
    }

    fn get(&mut self, index: u32, _is_input: bool, writer: &mut AudioPortInfoWriter) {
        if index != 0 {
            return;
        }
        let layout = self.shared.layout();
        let port_type = match layout {
            ChannelLayout::Mono => AudioPortType::MONO,
            ChannelLayout::Stereo => AudioPortType::STEREO,
        };
        writer.set(&AudioPortInfo {
            id: ClapId::new(0),
            name: b"Main",
            channel_count: layout.channel_count() as u32,
            flags: AudioPortFlags::IS_MAIN,
            port_type: Some(port_type),
            in_place_pair: None,
        });
    }
}
