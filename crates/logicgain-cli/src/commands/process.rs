//! File-based channel utility processing.

use super::common::{ControlArgs, load_preset, peak, print_settings, rms};
use anyhow::bail;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use logicgain_core::{ParameterSet, linear_to_db};
use logicgain_io::{OfflineRenderer, WavSpec, layout_for, read_wav, write_wav};
use std::path::PathBuf;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file (mono or stereo)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Preset name or TOML file, applied before the control flags
    #[arg(short, long)]
    preset: Option<String>,

    #[command(flatten)]
    controls: ControlArgs,

    /// Gain ramp time in milliseconds (0 = immediate)
    #[arg(long, default_value = "0")]
    gain_ramp_ms: f32,

    /// Processing block size
    #[arg(long, default_value = "512")]
    block_size: usize,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    if !matches!(args.bit_depth, 16 | 24 | 32) {
        bail!("Unsupported bit depth {} (expected 16, 24, or 32)", args.bit_depth);
    }

    println!("Reading {}...", args.input.display());
    let (mut channels, spec) = read_wav(&args.input)?;
    let layout = layout_for(spec)?;
    let frames = channels.first().map_or(0, Vec::len);

    println!(
        "  {} frames, {} Hz, {}, {:.2}s",
        frames,
        spec.sample_rate,
        layout,
        frames as f32 / spec.sample_rate as f32
    );

    let mut params = ParameterSet::default();
    if let Some(name) = &args.preset {
        let preset = load_preset(name)?;
        let (preset_layout, preset_params) = preset.to_parameter_set()?;
        if preset_layout != layout {
            bail!(
                "Preset '{}' is for {} audio but the input is {}",
                preset.name,
                preset_layout,
                layout
            );
        }
        println!("Loading preset: {}", preset.name);
        params = preset_params;
    }
    args.controls.apply(layout, &mut params)?;

    println!("Settings:");
    print_settings(layout, &params);

    let input_rms = rms(&channels);
    let input_peak = peak(&channels);

    let pb = ProgressBar::new(frames as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    OfflineRenderer::new(layout, spec.sample_rate as f32, params)
        .with_block_size(args.block_size)
        .with_gain_ramp_ms(args.gain_ramp_ms)
        .render_with_progress(&mut channels, |done, _| pb.set_position(done as u64))?;

    pb.finish_with_message("done");

    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(input_rms),
        linear_to_db(input_peak)
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(rms(&channels)),
        linear_to_db(peak(&channels))
    );

    let out_spec = WavSpec {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: args.bit_depth,
    };

    println!("\nWriting {}...", args.output.display());
    write_wav(&args.output, &channels, out_spec)?;
    println!("Done!");

    Ok(())
}
