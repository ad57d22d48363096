//! LogicGain Stereo: CLAP channel utility for stereo tracks.
//!
//! Gain, per-side polarity, balance, channel swap and mono downmix.

use logicgain_plugin::logicgain_entry;

logicgain_entry! {
    layout: Stereo,
    clap_id: "com.logicgain.stereo",
    name: "LogicGain Stereo",
    features: [AUDIO_EFFECT, UTILITY, STEREO],
}
