//! Buffer size robustness tests for the processor behind both plugins.
//!
//! Every host block size from 1 to 4096 frames must produce finite output and
//! the same result as one large block.

use logicgain_core::{ChannelLayout, ChannelUtility, ParamKey};
use logicgain_plugin::LogicGainShared;

const BUFFER_SIZES: &[usize] = &[1, 2, 7, 32, 64, 128, 256, 512, 1024, 2048, 4096];
const SAMPLE_RATE: f32 = 48000.0;
const TOTAL: usize = 4096;

fn is_finite_buffer(buf: &[f32]) -> bool {
    buf.iter().all(|s| s.is_finite())
}

fn signal(phase: f32) -> Vec<f32> {
    (0..TOTAL).map(|i| (i as f32 * 0.1 + phase).sin() * 0.5).collect()
}

fn stereo_shared() -> LogicGainShared {
    let shared = LogicGainShared::new(ChannelLayout::Stereo);
    shared.set_value(ParamKey::Gain.id().0, 6.0);
    shared.set_value(ParamKey::Balance.id().0, -40.0);
    shared.set_value(ParamKey::PhaseInvRight.id().0, 1.0);
    shared.set_value(ParamKey::SwapLr.id().0, 1.0);
    shared
}

#[test]
fn stereo_buffer_sizes_match_single_block() {
    let shared = stereo_shared();
    let params = shared.snapshot();

    let mut ref_left = signal(0.0);
    let mut ref_right = signal(1.0);
    ChannelUtility::new(ChannelLayout::Stereo, SAMPLE_RATE)
        .process(&mut [&mut ref_left[..], &mut ref_right[..]], &params);

    for &size in BUFFER_SIZES {
        let mut utility = ChannelUtility::new(ChannelLayout::Stereo, SAMPLE_RATE);
        let mut left = signal(0.0);
        let mut right = signal(1.0);
        for (l, r) in left.chunks_mut(size).zip(right.chunks_mut(size)) {
            utility.process(&mut [l, r], &params);
        }

        assert!(is_finite_buffer(&left), "non-finite left output at buffer size {size}");
        assert!(is_finite_buffer(&right), "non-finite right output at buffer size {size}");
        assert_eq!(left, ref_left, "left differs at buffer size {size}");
        assert_eq!(right, ref_right, "right differs at buffer size {size}");
    }
}

#[test]
fn mono_buffer_sizes_match_single_block() {
    let shared = LogicGainShared::new(ChannelLayout::Mono);
    shared.set_value(ParamKey::Gain.id().0, -9.0);
    shared.set_value(ParamKey::PhaseInv.id().0, 1.0);
    let params = shared.snapshot();

    let mut reference = signal(0.3);
    ChannelUtility::new(ChannelLayout::Mono, SAMPLE_RATE).process(&mut [&mut reference[..]], &params);

    for &size in BUFFER_SIZES {
        let mut utility = ChannelUtility::new(ChannelLayout::Mono, SAMPLE_RATE);
        let mut buf = signal(0.3);
        for chunk in buf.chunks_mut(size) {
            utility.process(&mut [chunk], &params);
        }
        assert!(is_finite_buffer(&buf), "non-finite output at buffer size {size}");
        assert_eq!(buf, reference, "output differs at buffer size {size}");
    }
}

#[test]
fn buffer_size_1_repeated_with_changing_params() {
    let shared = stereo_shared();
    let mut utility = ChannelUtility::new(ChannelLayout::Stereo, SAMPLE_RATE);

    for i in 0..1000 {
        // Automation every frame, as a host may deliver it.
        shared.set_value(ParamKey::Balance.id().0, (i as f32 * 0.37).sin() * 100.0);
        shared.set_value(ParamKey::Mono.id().0, if i % 3 == 0 { 1.0 } else { 0.0 });
        let params = shared.snapshot();

        let mut left = [(i as f32 * 0.05).sin() * 0.5];
        let mut right = [(i as f32 * 0.07).cos() * 0.5];
        utility.process(&mut [&mut left[..], &mut right[..]], &params);

        assert!(
            left[0].is_finite() && right[0].is_finite(),
            "non-finite output at single-sample iteration {i}"
        );
        if params.mono {
            assert_eq!(left[0], right[0]);
        }
    }
}
