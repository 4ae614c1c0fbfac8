use anyhow::Result;
use outfitmatch::config::Config;

use super::common::Context;
use crate::ConfigAction;

pub fn cmd_config(ctx: &Context, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => {
            println!("{}", Config::config_path().display());
        }
        ConfigAction::Show => {
            print!("{}", ctx.config.to_toml()?);
            println!();
            println!("# wardrobe in use: {}", ctx.wardrobe_path().display());
        }
        ConfigAction::Init { force } => {
            let path = Config::config_path();
            if path.exists() && !force {
                println!("Config already exists at {}", path.display());
                println!("Use --force to overwrite it with defaults.");
                return Ok(());
            }
            Config::default().save_to(&path)?;
            println!("✓ Wrote default config to {}", path.display());
        }
    }

    Ok(())
}
