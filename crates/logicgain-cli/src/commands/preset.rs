//! Preset management commands.
//!
//! Save control settings to TOML, inspect presets and list the factory set.

use super::common::{ControlArgs, load_preset, print_settings};
use anyhow::bail;
use clap::{Args, Subcommand};
use logicgain_config::{FACTORY_PRESET_NAMES, Preset, factory_presets};
use logicgain_core::{ChannelLayout, ParameterSet};
use std::path::PathBuf;

#[derive(Args)]
pub struct PresetArgs {
    #[command(subcommand)]
    command: PresetCommand,
}

#[derive(Subcommand)]
enum PresetCommand {
    /// List factory presets
    List,

    /// Show details of a preset
    Show {
        /// Preset name or path
        name: String,
    },

    /// Save control settings as a preset file
    Save {
        /// Output TOML file
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Channel layout the preset targets (mono or stereo)
        #[arg(short, long, default_value = "stereo")]
        layout: ChannelLayout,

        /// Display name (defaults to the file stem)
        #[arg(short, long)]
        name: Option<String>,

        /// Description of the preset
        #[arg(short, long)]
        description: Option<String>,

        /// Overwrite if the file already exists
        #[arg(long)]
        force: bool,

        #[command(flatten)]
        controls: ControlArgs,
    },
}

pub fn run(args: PresetArgs) -> anyhow::Result<()> {
    match args.command {
        PresetCommand::List => list(),
        PresetCommand::Show { name } => show(&name),
        PresetCommand::Save {
            path,
            layout,
            name,
            description,
            force,
            controls,
        } => {
            if path.exists() && !force {
                bail!("{} already exists. Use --force to overwrite.", path.display());
            }
            let mut params = ParameterSet::default();
            controls.apply(layout, &mut params)?;

            let name = name.unwrap_or_else(|| {
                path.file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "Untitled".to_string())
            });
            let mut preset = Preset::from_parameter_set(name, layout, &params);
            if let Some(desc) = description {
                preset = preset.with_description(desc);
            }
            preset.save(&path)?;
            println!("Saved preset '{}' to {}", preset.name, path.display());
            Ok(())
        }
    }
}

fn list() -> anyhow::Result<()> {
    println!("Factory presets:");
    for (id, preset) in FACTORY_PRESET_NAMES.iter().zip(factory_presets()) {
        let layout = preset.layout.as_str();
        match &preset.description {
            Some(desc) => println!("  {:<20} {:<7} {}", id, layout, desc),
            None => println!("  {:<20} {}", id, layout),
        }
    }
    Ok(())
}

fn show(name: &str) -> anyhow::Result<()> {
    let preset = load_preset(name)?;
    let (layout, params) = preset.to_parameter_set()?;

    println!("Preset: {}", preset.name);
    if let Some(desc) = &preset.description {
        println!("Description: {}", desc);
    }
    println!("Layout: {}", layout);
    println!();
    print_settings(layout, &params);
    Ok(())
}
