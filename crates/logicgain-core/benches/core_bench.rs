//! Criterion benchmarks for the logicgain block processor
//!
//! Run with: cargo bench -p logicgain-core
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use logicgain_core::{
    ChannelLayout, ChannelUtility, ParamKey, ParameterSet, ParameterStore, db_to_linear,
};

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512, 1024];

fn generate_test_signal(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE;
            (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.5
        })
        .collect()
}

fn bench_stereo(c: &mut Criterion) {
    let mut group = c.benchmark_group("ChannelUtility/stereo");

    let settings = [
        ("gain_only", ParameterSet {
            gain_db: -6.0,
            ..ParameterSet::default()
        }),
        ("balance_swap", ParameterSet {
            gain_db: -6.0,
            balance: 30.0,
            swap_lr: true,
            phase_inv_left: true,
            ..ParameterSet::default()
        }),
        ("mono", ParameterSet {
            gain_db: -6.0,
            mono: true,
            ..ParameterSet::default()
        }),
    ];

    for (name, params) in settings {
        for &block_size in BLOCK_SIZES {
            let input = generate_test_signal(block_size);
            group.bench_with_input(BenchmarkId::new(name, block_size), &block_size, |b, _| {
                let mut utility = ChannelUtility::new(ChannelLayout::Stereo, SAMPLE_RATE);
                let mut left = input.clone();
                let mut right = input.clone();
                b.iter(|| {
                    utility.process(&mut [&mut left[..], &mut right[..]], black_box(&params));
                    black_box(left[0]);
                });
            });
        }
    }

    group.finish();
}

fn bench_mono(c: &mut Criterion) {
    let mut group = c.benchmark_group("ChannelUtility/mono");
    let params = ParameterSet {
        gain_db: 3.0,
        phase_inv: true,
        ..ParameterSet::default()
    };

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);
        group.bench_with_input(
            BenchmarkId::new("gain_invert", block_size),
            &block_size,
            |b, _| {
                let mut utility = ChannelUtility::new(ChannelLayout::Mono, SAMPLE_RATE);
                let mut channel = input.clone();
                b.iter(|| {
                    utility.process(&mut [&mut channel[..]], black_box(&params));
                    black_box(channel[0]);
                });
            },
        );
    }

    group.finish();
}

fn bench_gain_ramp(c: &mut Criterion) {
    let mut group = c.benchmark_group("ChannelUtility/ramp");
    let quiet = ParameterSet {
        gain_db: -24.0,
        ..ParameterSet::default()
    };
    let loud = ParameterSet::default();

    let input = generate_test_signal(512);
    group.bench_function("alternating_targets_512", |b| {
        let mut utility = ChannelUtility::new(ChannelLayout::Stereo, SAMPLE_RATE);
        utility.set_gain_ramp_ms(10.0);
        let mut left = input.clone();
        let mut right = input.clone();
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let params = if flip { &quiet } else { &loud };
            utility.process(&mut [&mut left[..], &mut right[..]], params);
            black_box(left[0]);
        });
    });

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let store = ParameterStore::new(ChannelLayout::Stereo);
    store.set(ParamKey::Gain, -6.0);
    store.set(ParamKey::Balance, 20.0);

    c.bench_function("ParameterStore/refresh", |b| {
        b.iter(|| black_box(store.refresh()));
    });
    c.bench_function("ParameterStore/set", |b| {
        b.iter(|| store.set(black_box(ParamKey::Gain), black_box(-3.0)));
    });
    c.bench_function("db_to_linear", |b| {
        b.iter(|| black_box(db_to_linear(black_box(-12.5))));
    });
}

criterion_group!(
    benches,
    bench_stereo,
    bench_mono,
    bench_gain_ramp,
    bench_snapshot
);
criterion_main!(benches);
