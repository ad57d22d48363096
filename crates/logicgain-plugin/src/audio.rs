//! Audio processor for logicgain CLAP plugins.
//!
//! Handles the real-time callback: applies parameter events from the host,
//! takes one snapshot per block and runs the channel utility in place.

use crate::main_thread::LogicGainMainThread;
use crate::shared::LogicGainShared;
use clack_extensions::params::PluginAudioProcessorParams;
use clack_plugin::prelude::*;
use logicgain_core::{ChannelUtility, ParameterSet};

/// Audio-thread processor wrapping a [`ChannelUtility`].
///
/// Created during `activate()`, destroyed during `deactivate()`.
pub struct LogicGainAudioProcessor<'a> {
    shared: &'a LogicGainShared,
    utility: ChannelUtility,
}

impl<'a> PluginAudioProcessor<'a, LogicGainShared, LogicGainMainThread<'a>>
    for LogicGainAudioProcessor<'a>
{
    fn activate(
        _host: HostAudioProcessorHandle<'a>,
        _main_thread: &mut LogicGainMainThread<'a>,
        shared: &'a LogicGainShared,
        audio_config: PluginAudioConfiguration,
    ) -> Result<Self, PluginError> {
        tracing::debug!(
            layout = %shared.layout(),
            sample_rate = audio_config.sample_rate,
            "activating"
        );
        Ok(Self {
            shared,
            utility: ChannelUtility::new(shared.layout(), audio_config.sample_rate as f32),
        })
    }

    fn process(
        &mut self,
        _process: Process,
        mut audio: Audio,
        events: Events,
    ) -> Result<ProcessStatus, PluginError> {
        handle_events(self.shared, events.input);

        let params = self.shared.snapshot();
        self.process_audio(&mut audio, &params)?;

        Ok(ProcessStatus::ContinueIfNotQuiet)
    }

    fn deactivate(self, _main_thread: &mut LogicGainMainThread<'_>) {}

    fn reset(&mut self) {
        self.utility.reset();
    }
}

/// Write host parameter events into the shared store.
pub(crate) fn handle_events(shared: &LogicGainShared, input: &InputEvents) {
    for event in input {
        if let Some(clack_plugin::events::spaces::CoreEventSpace::ParamValue(ev)) =
            event.as_core_event()
            && let Some(param_id) = ev.param_id()
        {
            shared.set_value(param_id.get(), ev.value() as f32);
        }
    }
}

/// Output buffer of a channel pair, with the input copied over first when
/// the host uses separate buffers.
fn writable(pair: ChannelPair<'_, f32>) -> Option<&mut [f32]> {
    match pair {
        ChannelPair::InputOutput(input, output) => {
            let n = input.len().min(output.len());
            output[..n].copy_from_slice(&input[..n]);
            Some(output)
        }
        ChannelPair::InPlace(buf) => Some(buf),
        _ => None,
    }
}

impl LogicGainAudioProcessor<'_> {
    fn process_audio(&mut self, audio: &mut Audio, params: &ParameterSet) -> Result<(), PluginError> {
        for mut port_pair in audio {
            let channels = port_pair.channels()?;

            // f32 only; f64-only ports are left untouched.
            let Some(channels) = channels.into_f32() else {
                continue;
            };

            let mut writable_pairs = channels.into_iter().filter_map(writable);
            match (writable_pairs.next(), writable_pairs.next()) {
                (Some(left), Some(right)) => self.utility.process(&mut [left, right], params),
                (Some(mono), None) => self.utility.process(&mut [mono], params),
                _ => {}
            }
        }

        Ok(())
    }
}

impl PluginAudioProcessorParams for LogicGainAudioProcessor<'_> {
    fn flush(&mut self, input: &InputEvents, _output: &mut OutputEvents) {
        handle_events(self.shared, input);
    }
}
