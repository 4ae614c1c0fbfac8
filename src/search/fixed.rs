use super::product::SlotOptions;
use super::OutfitSearch;
use crate::outfit::ScoredOutfit;
use crate::wardrobe::{Category, Garment, Wardrobe};
use tracing::debug;

impl OutfitSearch {
    /// Outfits built around one piece held fixed, filled in from the wardrobe.
    ///
    /// When the fixed piece is not a jacket, going without one is always an
    /// option next to every jacket the wardrobe holds.
    pub fn for_item(&self, fixed: &Garment, wardrobe: &Wardrobe) -> Vec<ScoredOutfit> {
        let slot = |category: Category| {
            if category == fixed.category {
                vec![fixed]
            } else {
                wardrobe.items(category).iter().collect()
            }
        };

        let jackets = if fixed.category == Category::Jacket {
            vec![Some(fixed)]
        } else {
            std::iter::once(None)
                .chain(wardrobe.items(Category::Jacket).iter().map(Some))
                .collect()
        };

        let options = SlotOptions {
            tops: slot(Category::Top),
            pants: slot(Category::Pants),
            shoes: slot(Category::Shoes),
            jackets,
        };

        let min_score = self.thresholds.min_score;
        let results = options.evaluate(|score| score > min_score);
        debug!(
            fixed = %fixed.category,
            color = %fixed.color,
            candidates = options.combinations(),
            accepted = results.len(),
            "single item search"
        );
        results
    }
}
