//! Synthetic swatches for "what if I bought this" searches.

use crate::color::Color;
use crate::harmony::{analogous_colors, NEUTRALS};
use crate::wardrobe::{Category, Garment};

const TOP_SWATCHES: &[(&str, Color)] = &[
    ("white", Color::new(255, 255, 255)),
    ("light gray", Color::new(211, 211, 211)),
    ("light blue", Color::new(173, 216, 230)),
    ("navy", Color::new(0, 0, 128)),
    ("black", Color::new(0, 0, 0)),
];

const PANTS_SWATCHES: &[(&str, Color)] = &[
    ("navy", Color::new(0, 0, 128)),
    ("denim", Color::new(21, 96, 189)),
    ("khaki", Color::new(195, 176, 145)),
    ("charcoal", Color::new(54, 69, 79)),
    ("black", Color::new(0, 0, 0)),
];

const SHOES_SWATCHES: &[(&str, Color)] = &[
    ("black", Color::new(0, 0, 0)),
    ("white", Color::new(255, 255, 255)),
    ("brown", Color::new(139, 69, 19)),
    ("tan", Color::new(210, 180, 140)),
];

const JACKET_SWATCHES: &[(&str, Color)] = &[
    ("black", Color::new(0, 0, 0)),
    ("navy", Color::new(0, 0, 128)),
    ("camel", Color::new(193, 154, 107)),
    ("olive", Color::new(128, 128, 0)),
    ("charcoal", Color::new(54, 69, 79)),
];

const NEUTRAL_LABELS: [&str; 6] = [
    "neutral white",
    "neutral black",
    "neutral gray",
    "neutral silver",
    "neutral sienna",
    "neutral beige",
];

pub fn classic_swatches(category: Category) -> &'static [(&'static str, Color)] {
    match category {
        Category::Top => TOP_SWATCHES,
        Category::Pants => PANTS_SWATCHES,
        Category::Shoes => SHOES_SWATCHES,
        Category::Jacket => JACKET_SWATCHES,
    }
}

/// Colors derived from `candidate` by color theory: its complement, both
/// analogous neighbours, then the fixed neutrals. An achromatic candidate has
/// no hue to derive from, so it only gets the neutrals.
pub fn theory_colors(candidate: Color) -> Vec<(&'static str, Color)> {
    let mut colors = Vec::with_capacity(3 + NEUTRALS.len());
    if !candidate.is_achromatic() {
        let [warm, cool] = analogous_colors(candidate);
        colors.push(("complementary", candidate.complementary()));
        colors.push(("analogous +30", warm));
        colors.push(("analogous -30", cool));
    }
    colors.extend(NEUTRAL_LABELS.iter().copied().zip(NEUTRALS));
    colors
}

/// Swatches to try in `category` alongside `candidate`. Classic swatches come
/// first; a theory color identical to an earlier entry is dropped.
pub fn category_palette(category: Category, candidate: Color) -> Vec<Garment> {
    let mut palette: Vec<Garment> = Vec::new();
    let entries = classic_swatches(category)
        .iter()
        .copied()
        .chain(theory_colors(candidate));

    for (label, color) in entries {
        if palette.iter().any(|g| g.color == color) {
            continue;
        }
        palette.push(Garment::swatch(category, color, label));
    }
    palette
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theory_colors_for_red() {
        let colors = theory_colors(Color::new(255, 0, 0));
        assert_eq!(colors.len(), 9);
        assert_eq!(colors[0], ("complementary", Color::new(0, 255, 255)));
        assert_eq!(colors[1].1, Color::new(255, 128, 0));
        assert_eq!(colors[2].1, Color::new(255, 0, 128));
        assert_eq!(colors[3], ("neutral white", Color::WHITE));
    }

    #[test]
    fn test_theory_colors_for_gray_are_neutrals_only() {
        let colors = theory_colors(Color::new(100, 100, 100));
        assert_eq!(colors.len(), NEUTRALS.len());
        assert!(colors.iter().all(|(label, _)| label.starts_with("neutral")));
    }

    #[test]
    fn test_category_palette_dedups_by_color() {
        let palette = category_palette(Category::Shoes, Color::new(255, 0, 0));
        // 4 classic + 3 theory + 6 neutrals, minus black and white already classic.
        assert_eq!(palette.len(), 11);
        let black: Vec<_> = palette.iter().filter(|g| g.color == Color::BLACK).collect();
        assert_eq!(black.len(), 1);
        assert_eq!(black[0].swatch_label(), Some("black"));
        assert!(palette.iter().all(|g| g.category == Category::Shoes));
        assert!(palette.iter().all(|g| g.id().is_none()));
    }

    #[test]
    fn test_every_category_has_swatches() {
        for category in Category::ALL {
            assert!(!classic_swatches(category).is_empty());
        }
    }
}
