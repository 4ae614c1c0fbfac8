use super::product::SlotOptions;
use super::OutfitSearch;
use crate::outfit::ScoredOutfit;
use crate::wardrobe::{Category, Wardrobe};
use tracing::debug;

impl OutfitSearch {
    /// Every top x pants x shoes (x jacket) combination in the wardrobe scoring
    /// above `min_score`, best first.
    ///
    /// Jackets are all-or-nothing here: with any jacket in the wardrobe every
    /// candidate wears one, with none every candidate goes without.
    pub fn full_enumeration(&self, wardrobe: &Wardrobe) -> Vec<ScoredOutfit> {
        let jackets = wardrobe.items(Category::Jacket);
        let options = SlotOptions {
            tops: wardrobe.items(Category::Top).iter().collect(),
            pants: wardrobe.items(Category::Pants).iter().collect(),
            shoes: wardrobe.items(Category::Shoes).iter().collect(),
            jackets: if jackets.is_empty() {
                vec![None]
            } else {
                jackets.iter().map(Some).collect()
            },
        };

        let min_score = self.thresholds.min_score;
        let results = options.evaluate(|score| score > min_score);
        debug!(
            candidates = options.combinations(),
            accepted = results.len(),
            min_score,
            "full wardrobe enumeration"
        );
        results
    }
}
