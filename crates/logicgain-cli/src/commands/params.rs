//! Parameter listing command.

use clap::Args;
use logicgain_core::ChannelLayout;

#[derive(Args)]
pub struct ParamsArgs {
    /// Channel layout to list (mono or stereo); both when omitted
    #[arg(value_name = "LAYOUT")]
    layout: Option<ChannelLayout>,
}

pub fn run(args: ParamsArgs) -> anyhow::Result<()> {
    let layouts = match args.layout {
        Some(layout) => vec![layout],
        None => vec![ChannelLayout::Mono, ChannelLayout::Stereo],
    };

    for (i, layout) in layouts.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        let count = layout.channel_count();
        let plural = if count == 1 { "" } else { "s" };
        println!("{layout} ({count} channel{plural}):");
        println!("  {:<16} {:<14} {:<22} {}", "KEY", "NAME", "RANGE", "DEFAULT");
        for &key in layout.params() {
            let desc = key.descriptor();
            let range = if desc.is_toggle() {
                "Off/On".to_string()
            } else {
                format!("{} .. {}", desc.format_value(desc.min), desc.format_value(desc.max))
            };
            println!(
                "  {:<16} {:<14} {:<22} {}",
                key.name(),
                desc.name,
                range,
                desc.format_value(desc.default)
            );
        }
    }

    Ok(())
}
