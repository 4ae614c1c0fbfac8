use anyhow::Result;
use outfitmatch::names::closest_color_name;
use outfitmatch::Category;
use tracing::info;

use super::common::{parse_category, parse_color, Context};
use super::output::{print_combinations, print_outfits};
use crate::OutputArgs;

pub fn cmd_suggest(ctx: &Context, output: OutputArgs) -> Result<()> {
    let wardrobe = ctx.wardrobe()?;
    let count = |c: Category| wardrobe.items(c).len();
    ctx.check_budget([
        count(Category::Top),
        count(Category::Pants),
        count(Category::Shoes),
        count(Category::Jacket).max(1),
    ])?;

    let results = ctx.search().full_enumeration(&wardrobe);
    print_outfits(&results, ctx.limit(output), output.json, ctx.show_names())
}

pub fn cmd_match(ctx: &Context, category: &str, color: &str, output: OutputArgs) -> Result<()> {
    let category = parse_category(category)?;
    let color = parse_color(color)?;
    let wardrobe = ctx.wardrobe()?;

    let fixed = wardrobe.fixed_piece(category, color);
    if let Some(id) = fixed.id() {
        info!(%id, "matching an owned item");
    }

    let count = |c: Category| {
        if c == category {
            1
        } else {
            wardrobe.items(c).len()
        }
    };
    let jackets = if category == Category::Jacket {
        1
    } else {
        wardrobe.items(Category::Jacket).len() + 1
    };
    ctx.check_budget([
        count(Category::Top),
        count(Category::Pants),
        count(Category::Shoes),
        jackets,
    ])?;

    let results = ctx.search().for_item(&fixed, &wardrobe);
    print_outfits(&results, ctx.limit(output), output.json, ctx.show_names())
}

pub fn cmd_consider(ctx: &Context, category: &str, color: &str, output: OutputArgs) -> Result<()> {
    let category = parse_category(category)?;
    let color = parse_color(color)?;

    let results = ctx.search().for_hypothetical(category, color);
    print_outfits(&results, ctx.limit(output), output.json, ctx.show_names())
}

pub fn cmd_combos(ctx: &Context, categories: &[String], output: OutputArgs) -> Result<()> {
    let categories = categories
        .iter()
        .map(|c| parse_category(c))
        .collect::<Result<Vec<_>>>()?;
    let wardrobe = ctx.wardrobe()?;
    ctx.check_budget(categories.iter().map(|&c| wardrobe.items(c).len()))?;

    let results = ctx.search().combinations_for(&categories, &wardrobe)?;
    print_combinations(&results, ctx.limit(output), output.json, ctx.show_names())
}

pub fn cmd_name(color: &str) -> Result<()> {
    let color = parse_color(color)?;
    println!("{} {} {}", closest_color_name(color), color, color.to_hex());
    Ok(())
}
