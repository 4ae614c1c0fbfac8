use super::palette::category_palette;
use super::product::SlotOptions;
use super::OutfitSearch;
use crate::color::Color;
use crate::outfit::ScoredOutfit;
use crate::wardrobe::{Category, Garment};
use tracing::debug;

impl OutfitSearch {
    /// Outfits for a piece the user does not own yet, matched against a
    /// synthetic palette instead of the wardrobe.
    ///
    /// Every other slot is filled from that category's classic swatches plus
    /// colors derived from `color`. Candidates must reach
    /// `hypothetical_min_score`, which is inclusive.
    pub fn for_hypothetical(&self, category: Category, color: Color) -> Vec<ScoredOutfit> {
        let candidate = Garment::hypothetical(category, color);
        let palettes: Vec<Vec<Garment>> = Category::ALL
            .iter()
            .map(|&c| {
                if c == category {
                    Vec::new()
                } else {
                    category_palette(c, color)
                }
            })
            .collect();

        let slot = |c: Category| {
            if c == category {
                vec![&candidate]
            } else {
                palettes[c as usize].iter().collect()
            }
        };

        let jackets = if category == Category::Jacket {
            vec![Some(&candidate)]
        } else {
            std::iter::once(None)
                .chain(palettes[Category::Jacket as usize].iter().map(Some))
                .collect()
        };

        let options = SlotOptions {
            tops: slot(Category::Top),
            pants: slot(Category::Pants),
            shoes: slot(Category::Shoes),
            jackets,
        };

        let min_score = self.thresholds.hypothetical_min_score;
        let results = options.evaluate(|score| score >= min_score);
        debug!(
            %category,
            %color,
            candidates = options.combinations(),
            accepted = results.len(),
            "hypothetical item search"
        );
        results
    }
}
