use anyhow::Result;
use outfitmatch::wardrobe::ItemId;

use super::common::Context;
use super::output::describe;
use crate::SavedAction;

pub fn cmd_saved(ctx: &Context, action: SavedAction) -> Result<()> {
    match action {
        SavedAction::List => {
            let store = ctx.store()?;
            if store.saved_outfits().is_empty() {
                println!("No saved outfits.");
                println!("Save one with: outfitmatch saved add --top <id> --pants <id> --shoes <id>");
                return Ok(());
            }

            for saved in store.saved_outfits() {
                println!(
                    "Outfit {} (score {:.2}, saved {})",
                    saved.id,
                    saved.score,
                    saved.saved_at.format("%Y-%m-%d")
                );
                if let Some(outfit) = store.outfit_of(saved) {
                    for garment in outfit.garments() {
                        let slot = format!("{}:", garment.category);
                        println!("   {:<7} {}", slot, describe(garment, ctx.show_names()));
                    }
                }
            }
        }
        SavedAction::Add {
            top,
            pants,
            shoes,
            jacket,
        } => {
            let mut store = ctx.store()?;
            let saved =
                store.save_outfit(ItemId(top), ItemId(pants), ItemId(shoes), jacket.map(ItemId))?;
            println!("✓ Saved outfit {} (score {:.2})", saved.id, saved.score);
        }
        SavedAction::Remove { id } => {
            let mut store = ctx.store()?;
            if store.remove_outfit(id)? {
                println!("✓ Removed saved outfit {}", id);
            } else {
                println!("Saved outfit {} not found", id);
            }
        }
    }

    Ok(())
}
