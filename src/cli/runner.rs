use anyhow::Result;
use outfitmatch::config::Config;

use super::{Cli, Commands};
use crate::cli_cmds::*;

pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let ctx = Context::new(config, cli.wardrobe, cli.snapshot);

    match cli.command {
        Commands::Suggest { output } => {
            cmd_suggest(&ctx, output)?;
        }
        Commands::Match {
            category,
            color,
            output,
        } => {
            cmd_match(&ctx, &category, &color, output)?;
        }
        Commands::Consider {
            category,
            color,
            output,
        } => {
            cmd_consider(&ctx, &category, &color, output)?;
        }
        Commands::Combos { categories, output } => {
            cmd_combos(&ctx, &categories, output)?;
        }
        Commands::Name { color } => {
            cmd_name(&color)?;
        }
        Commands::Item { action } => {
            cmd_item(&ctx, action)?;
        }
        Commands::Saved { action } => {
            cmd_saved(&ctx, action)?;
        }
        Commands::Config { action } => {
            cmd_config(&ctx, action)?;
        }
    }

    Ok(())
}
