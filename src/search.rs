//! Outfit search over the Cartesian product of garment choices.
//!
//! Three modes share one scorer:
//! - full enumeration of the user's wardrobe,
//! - one owned (or described) piece held fixed, the rest from the wardrobe,
//! - a piece the user is considering, matched against generated swatches.
//!
//! Each mode keeps candidates above its own acceptance threshold and returns
//! them best first. The engine holds no state between calls.

use crate::color::Color;
use crate::error::MatchError;
use crate::outfit::ScoredOutfit;
use crate::wardrobe::{Category, Wardrobe};
use serde::{Deserialize, Serialize};

mod fixed;
mod full;
mod hypothetical;
pub mod palette;
mod product;
mod selection;

/// Acceptance thresholds, one per search mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchThresholds {
    /// Wardrobe-backed searches keep scores strictly above this.
    pub min_score: f64,
    /// Hypothetical searches keep scores at or above this.
    pub hypothetical_min_score: f64,
    /// Category-subset combinations keep scores at or above this.
    pub selection_min_score: f64,
}

impl Default for SearchThresholds {
    fn default() -> Self {
        Self {
            min_score: 2.5,
            hypothetical_min_score: 3.0,
            selection_min_score: 2.5,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OutfitSearch {
    thresholds: SearchThresholds,
}

impl OutfitSearch {
    pub fn new(thresholds: SearchThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &SearchThresholds {
        &self.thresholds
    }
}

/// Full enumeration with the default thresholds.
pub fn generate_outfit_suggestions(wardrobe: &Wardrobe) -> Vec<ScoredOutfit> {
    OutfitSearch::default().full_enumeration(wardrobe)
}

/// Single-item search by category tag. A color matching an owned piece in that
/// category uses the owned piece; anything else is treated as unsaved.
pub fn suggest_outfit_for_item(
    category: &str,
    color: Color,
    wardrobe: &Wardrobe,
) -> Result<Vec<ScoredOutfit>, MatchError> {
    let category: Category = category.parse()?;
    let fixed = wardrobe.fixed_piece(category, color);
    Ok(OutfitSearch::default().for_item(&fixed, wardrobe))
}

/// Hypothetical-item search by category tag.
pub fn suggestions_for_item(category: &str, color: Color) -> Result<Vec<ScoredOutfit>, MatchError> {
    let category: Category = category.parse()?;
    Ok(OutfitSearch::default().for_hypothetical(category, color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wardrobe::{Garment, GarmentSource, ItemId};

    const RED: Color = Color::new(255, 0, 0);
    const CYAN: Color = Color::new(0, 255, 255);
    const GRAY: Color = Color::new(128, 128, 128);

    fn sample_wardrobe() -> Wardrobe {
        Wardrobe::from_colors([
            (Category::Top, RED),
            (Category::Top, GRAY),
            (Category::Pants, CYAN),
            (Category::Shoes, CYAN),
            (Category::Shoes, Color::BLACK),
            (Category::Jacket, CYAN),
            (Category::Jacket, Color::BLACK),
        ])
    }

    fn assert_sorted_desc(results: &[ScoredOutfit]) {
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    // --- full enumeration ---

    #[test]
    fn test_full_all_neutral_wardrobe_is_filtered_out() {
        let wardrobe = Wardrobe::from_colors([
            (Category::Top, Color::BLACK),
            (Category::Pants, Color::WHITE),
            (Category::Shoes, Color::BLACK),
        ]);
        assert!(generate_outfit_suggestions(&wardrobe).is_empty());
    }

    #[test]
    fn test_full_red_cyan_gray_is_included() {
        let wardrobe = Wardrobe::from_colors([
            (Category::Top, RED),
            (Category::Pants, CYAN),
            (Category::Shoes, GRAY),
        ]);
        let results = generate_outfit_suggestions(&wardrobe);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 2.78);
        assert_eq!(results[0].outfit.top.id(), Some(ItemId(1)));
        assert_eq!(results[0].outfit.jacket, None);
    }

    #[test]
    fn test_full_empty_required_category_yields_nothing() {
        let wardrobe = Wardrobe::from_colors([
            (Category::Top, RED),
            (Category::Pants, CYAN),
            (Category::Jacket, GRAY),
        ]);
        assert!(generate_outfit_suggestions(&wardrobe).is_empty());
        assert!(generate_outfit_suggestions(&Wardrobe::new()).is_empty());
    }

    #[test]
    fn test_full_with_jackets_always_wears_one() {
        let wardrobe = sample_wardrobe();
        let results = generate_outfit_suggestions(&wardrobe);
        // 2 x 1 x 2 x 2 candidates; gray/cyan/cyan/cyan sits exactly on 2.5.
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].score, 4.17);
        assert!(results.iter().all(|r| r.outfit.jacket.is_some()));
        assert!(results.iter().all(|r| r.score > 2.5));
        assert_sorted_desc(&results);
    }

    #[test]
    fn test_full_respects_custom_threshold() {
        let wardrobe = Wardrobe::from_colors([
            (Category::Top, Color::BLACK),
            (Category::Pants, Color::WHITE),
            (Category::Shoes, Color::BLACK),
        ]);
        let search = OutfitSearch::new(SearchThresholds {
            min_score: 1.5,
            ..SearchThresholds::default()
        });
        let results = search.full_enumeration(&wardrobe);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 1.67);
    }

    #[test]
    fn test_full_scores_match_scorer() {
        for result in generate_outfit_suggestions(&sample_wardrobe()) {
            assert_eq!(result.score, result.outfit.score());
        }
    }

    // --- single fixed item ---

    #[test]
    fn test_for_item_without_shoes_is_empty() {
        let wardrobe = Wardrobe::from_colors([
            (Category::Pants, CYAN),
            (Category::Pants, GRAY),
            (Category::Jacket, Color::BLACK),
        ]);
        let results = suggest_outfit_for_item("top", RED, &wardrobe).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_for_item_pins_the_fixed_piece() {
        let wardrobe = Wardrobe::from_colors([
            (Category::Pants, CYAN),
            (Category::Pants, Color::new(0, 200, 0)),
            (Category::Shoes, GRAY),
        ]);
        let results = suggest_outfit_for_item("tops", RED, &wardrobe).unwrap();
        assert_eq!(results.len(), 1);
        let outfit = &results[0].outfit;
        assert_eq!(outfit.top.color, RED);
        assert_eq!(outfit.top.source, GarmentSource::Hypothetical);
        assert_eq!(outfit.pants.color, CYAN);
        assert_eq!(results[0].score, 2.78);
    }

    #[test]
    fn test_for_item_uses_owned_piece_when_color_matches() {
        let wardrobe = Wardrobe::from_colors([
            (Category::Top, RED),
            (Category::Pants, CYAN),
            (Category::Shoes, GRAY),
        ]);
        let results = suggest_outfit_for_item("top", RED, &wardrobe).unwrap();
        assert_eq!(results[0].outfit.top.id(), Some(ItemId(1)));
    }

    #[test]
    fn test_for_item_offers_going_without_a_jacket() {
        let wardrobe = Wardrobe::from_colors([
            (Category::Pants, CYAN),
            (Category::Shoes, GRAY),
            (Category::Jacket, Color::new(0, 200, 0)),
            (Category::Jacket, CYAN),
        ]);
        let search = OutfitSearch::new(SearchThresholds {
            min_score: 0.0,
            ..SearchThresholds::default()
        });
        let fixed = Garment::hypothetical(Category::Top, RED);
        let results = search.for_item(&fixed, &wardrobe);
        // 1 pants x 1 shoes x (none + 2 jackets); every candidate scores > 0.
        assert_eq!(results.len(), 3);
        assert!(results.iter().any(|r| r.outfit.jacket.is_none()));
        assert_sorted_desc(&results);
    }

    #[test]
    fn test_for_item_fixed_jacket_is_the_only_jacket() {
        let wardrobe = Wardrobe::from_colors([
            (Category::Top, RED),
            (Category::Pants, CYAN),
            (Category::Shoes, GRAY),
            (Category::Jacket, Color::BLACK),
        ]);
        let fixed = Garment::hypothetical(Category::Jacket, CYAN);
        let search = OutfitSearch::new(SearchThresholds {
            min_score: 0.0,
            ..SearchThresholds::default()
        });
        let results = search.for_item(&fixed, &wardrobe);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].outfit.jacket.as_ref().map(|j| j.color), Some(CYAN));
    }

    #[test]
    fn test_for_item_rejects_unknown_category() {
        let result = suggest_outfit_for_item("scarf", RED, &sample_wardrobe());
        assert_eq!(
            result,
            Err(MatchError::InvalidCategory("scarf".to_string()))
        );
    }

    // --- hypothetical item ---

    #[test]
    fn test_hypothetical_never_below_three() {
        let results = suggestions_for_item("top", RED).unwrap();
        assert!(!results.is_empty());
        assert!(results.iter().all(|r| r.score >= 3.0));
        assert_sorted_desc(&results);
    }

    #[test]
    fn test_hypothetical_pins_candidate_and_synthesizes_the_rest() {
        for result in suggestions_for_item("top", RED).unwrap() {
            let outfit = &result.outfit;
            assert_eq!(outfit.top.color, RED);
            assert_eq!(outfit.top.source, GarmentSource::Hypothetical);
            assert!(outfit.pants.swatch_label().is_some());
            assert!(outfit.shoes.swatch_label().is_some());
            if let Some(jacket) = &outfit.jacket {
                assert!(jacket.swatch_label().is_some());
            }
        }
    }

    #[test]
    fn test_hypothetical_jacket_candidate_is_always_worn() {
        let results = suggestions_for_item("jacket", CYAN).unwrap();
        assert!(!results.is_empty());
        for result in &results {
            let jacket = result.outfit.jacket.as_ref().map(|j| j.color);
            assert_eq!(jacket, Some(CYAN));
        }
    }

    #[test]
    fn test_hypothetical_includes_jacketless_outfits() {
        let results = suggestions_for_item("pants", RED).unwrap();
        assert!(results.iter().any(|r| r.outfit.jacket.is_none()));
    }

    #[test]
    fn test_hypothetical_threshold_is_inclusive() {
        let search = OutfitSearch::new(SearchThresholds {
            hypothetical_min_score: 5.0,
            ..SearchThresholds::default()
        });
        let results = search.for_hypothetical(Category::Top, RED);
        assert!(results.iter().all(|r| r.score == 5.0));
    }

    #[test]
    fn test_hypothetical_dark_navy_keeps_analogous_swatches() {
        // The +30 degree swatch lands on a rounding tie and must stay analogous.
        let results = OutfitSearch::default().for_hypothetical(Category::Top, Color::new(17, 17, 64));
        assert_eq!(results.len(), 93);
        assert_eq!(results[0].score, 4.44);
        assert!(results
            .iter()
            .any(|r| r.outfit.pants.color == Color::new(40, 17, 64)));
    }

    #[test]
    fn test_hypothetical_rejects_unknown_category() {
        assert!(matches!(
            suggestions_for_item("belt", RED),
            Err(MatchError::InvalidCategory(_))
        ));
    }

    // --- category subsets ---

    #[test]
    fn test_combinations_for_subset() {
        let wardrobe = Wardrobe::from_colors([
            (Category::Top, RED),
            (Category::Top, Color::new(0, 200, 0)),
            (Category::Shoes, CYAN),
            (Category::Shoes, GRAY),
        ]);
        let results = OutfitSearch::default()
            .combinations_for(&[Category::Shoes, Category::Top], &wardrobe)
            .unwrap();
        // red/cyan 5.0, red/gray 1.67, green/gray 1.67, green/cyan below.
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 5.0);
        assert_eq!(results[0].garments[0].color, RED);
        assert_eq!(results[0].garments[1].color, CYAN);
    }

    #[test]
    fn test_combinations_for_rejects_duplicates() {
        let result = OutfitSearch::default()
            .combinations_for(&[Category::Top, Category::Top], &sample_wardrobe());
        assert!(matches!(result, Err(MatchError::InvalidCategory(_))));
    }

    #[test]
    fn test_combinations_for_single_or_no_category_is_empty() {
        let search = OutfitSearch::default();
        let wardrobe = sample_wardrobe();
        assert!(search.combinations_for(&[], &wardrobe).unwrap().is_empty());
        assert!(search
            .combinations_for(&[Category::Top], &wardrobe)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_combinations_for_threshold_is_inclusive() {
        let results = OutfitSearch::default()
            .combinations_for(&Category::ALL, &sample_wardrobe())
            .unwrap();
        // Same candidates as the full search, but 2.5 itself is accepted here.
        assert_eq!(results.len(), 4);
        assert_eq!(results[3].score, 2.5);
        assert!(results.iter().all(|r| r.garments.len() == 4));
    }
}
