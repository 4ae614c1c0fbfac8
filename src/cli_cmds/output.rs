use anyhow::Result;
use outfitmatch::names::closest_color_name;
use outfitmatch::{Color, Garment, GarmentSource, ScoredCombination, ScoredOutfit};

pub fn describe_color(color: Color, show_names: bool) -> String {
    if show_names {
        format!("{} {}", closest_color_name(color), color)
    } else {
        color.to_string()
    }
}

/// `Name (r, g, b)` plus where the piece came from.
pub fn describe(garment: &Garment, show_names: bool) -> String {
    let origin = match &garment.source {
        GarmentSource::Owned { id } => format!(" [#{id}]"),
        GarmentSource::Hypothetical => String::new(),
        GarmentSource::Swatch { label } => format!(" [{label}]"),
    };
    format!("{}{}", describe_color(garment.color, show_names), origin)
}

fn print_garments<'a>(garments: impl Iterator<Item = &'a Garment>, show_names: bool) {
    for garment in garments {
        let slot = format!("{}:", garment.category);
        println!("   {:<7} {}", slot, describe(garment, show_names));
    }
}

fn print_remaining(total: usize, shown: usize) {
    if total > shown {
        println!("({} more not shown)", total - shown);
    }
}

pub fn print_outfits(
    results: &[ScoredOutfit],
    limit: usize,
    json: bool,
    show_names: bool,
) -> Result<()> {
    let shown = &results[..results.len().min(limit)];
    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
        return Ok(());
    }

    if shown.is_empty() {
        println!("No matching outfits.");
        return Ok(());
    }

    for (rank, result) in shown.iter().enumerate() {
        println!("{}. score {:.2}", rank + 1, result.score);
        print_garments(result.outfit.garments(), show_names);
    }
    print_remaining(results.len(), shown.len());
    Ok(())
}

pub fn print_combinations(
    results: &[ScoredCombination],
    limit: usize,
    json: bool,
    show_names: bool,
) -> Result<()> {
    let shown = &results[..results.len().min(limit)];
    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
        return Ok(());
    }

    if shown.is_empty() {
        println!("No matching combinations.");
        return Ok(());
    }

    for (rank, result) in shown.iter().enumerate() {
        println!("{}. score {:.2}", rank + 1, result.score);
        print_garments(result.garments.iter(), show_names);
    }
    print_remaining(results.len(), shown.len());
    Ok(())
}
