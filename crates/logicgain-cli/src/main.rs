//! LogicGain CLI - gain, polarity, balance, swap and mono for WAV files.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "logicgain")]
#[command(author, version, about = "LogicGain channel utility CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a mono or stereo WAV file
    Process(commands::process::ProcessArgs),

    /// List parameters, ranges and defaults
    Params(commands::params::ParamsArgs),

    /// Save, show and list presets
    Preset(commands::preset::PresetArgs),
}

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Params(args) => commands::params::run(args),
        Commands::Preset(args) => commands::preset::run(args),
    }
}
