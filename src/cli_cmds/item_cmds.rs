use anyhow::Result;
use outfitmatch::dominant::dominant_color;
use outfitmatch::wardrobe::ItemId;
use outfitmatch::Category;

use super::common::{parse_category, parse_color, Context};
use super::output::describe_color;
use crate::ItemAction;

pub fn cmd_item(ctx: &Context, action: ItemAction) -> Result<()> {
    match action {
        ItemAction::List => {
            let store = ctx.store()?;
            if store.items().is_empty() {
                println!("No items in {}", store.path().display());
                println!("Add one with: outfitmatch item add <category> --color <color>");
                return Ok(());
            }

            for category in Category::ALL {
                let items: Vec<_> = store
                    .items()
                    .iter()
                    .filter(|item| item.category == category)
                    .collect();
                if items.is_empty() {
                    continue;
                }
                println!("{} ({}):", category.plural(), items.len());
                for item in items {
                    let image = item
                        .image
                        .as_deref()
                        .map(|path| format!("  {path}"))
                        .unwrap_or_default();
                    println!(
                        "  #{:<4} {}{}",
                        item.id.0,
                        describe_color(item.color, ctx.show_names()),
                        image
                    );
                }
            }
        }
        ItemAction::Add {
            category,
            color,
            image,
        } => {
            let category = parse_category(&category)?;
            let color = match (&color, &image) {
                (Some(color), _) => parse_color(color)?,
                (None, Some(path)) => dominant_color(path)?,
                (None, None) => anyhow::bail!("Give either --color or --image"),
            };

            let mut store = ctx.store()?;
            let image = image.map(|path| path.to_string_lossy().into_owned());
            let id = store.add_item(category, color, image)?;
            println!(
                "✓ Added {} #{}: {}",
                category.display_name().to_lowercase(),
                id,
                describe_color(color, true)
            );
        }
        ItemAction::Remove { id } => {
            let mut store = ctx.store()?;
            let before = store.saved_outfits().len();
            if store.remove_item(ItemId(id))? {
                println!("✓ Removed item #{}", id);
                let dropped = before - store.saved_outfits().len();
                if dropped > 0 {
                    println!("  Also removed {} saved outfit(s) wearing it", dropped);
                }
            } else {
                println!("Item #{} not found", id);
            }
        }
    }

    Ok(())
}
