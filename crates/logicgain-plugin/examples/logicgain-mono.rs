//! LogicGain Mono: CLAP channel utility for mono tracks.
//!
//! Gain and polarity.

use logicgain_plugin::logicgain_entry;

logicgain_entry! {
    layout: Mono,
    clap_id: "com.logicgain.mono",
    name: "LogicGain Mono",
    features: [AUDIO_EFFECT, UTILITY, MONO],
}
