use super::product::{colors_of, Odometer};
use super::OutfitSearch;
use crate::error::MatchError;
use crate::outfit::{compare_by_score_desc, ScoredCombination};
use crate::scoring::score_colors;
use crate::wardrobe::{Category, Garment, Wardrobe};
use rayon::prelude::*;
use tracing::debug;

impl OutfitSearch {
    /// Combinations over a hand-picked subset of categories, e.g. just tops
    /// and shoes. Pieces come back in slot order whatever order `categories`
    /// lists them in.
    pub fn combinations_for(
        &self,
        categories: &[Category],
        wardrobe: &Wardrobe,
    ) -> Result<Vec<ScoredCombination>, MatchError> {
        let mut selected = categories.to_vec();
        selected.sort();
        if let Some(pair) = selected.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(MatchError::InvalidCategory(format!(
                "{} selected more than once",
                pair[0].plural()
            )));
        }

        if selected.len() < 2 {
            return Ok(Vec::new());
        }

        let lists: Vec<&[Garment]> = selected.iter().map(|&c| wardrobe.items(c)).collect();
        let Some((first, rest)) = lists.split_first() else {
            return Ok(Vec::new());
        };
        let rest_lengths: Vec<usize> = rest.iter().map(|list| list.len()).collect();

        let min_score = self.thresholds.selection_min_score;
        let mut results: Vec<ScoredCombination> = first
            .par_iter()
            .flat_map_iter(move |head| {
                Odometer::new(rest_lengths.clone()).filter_map(move |indices| {
                    let garments: Vec<&Garment> = std::iter::once(head)
                        .chain(indices.iter().zip(rest).map(|(&i, list)| &list[i]))
                        .collect();
                    let score = score_colors(&colors_of(&garments));
                    (score >= min_score).then(|| ScoredCombination {
                        garments: garments.into_iter().cloned().collect(),
                        score,
                    })
                })
            })
            .collect();

        results.sort_by(|a, b| compare_by_score_desc(a.score, b.score));
        debug!(
            categories = ?selected,
            accepted = results.len(),
            min_score,
            "category subset combinations"
        );
        Ok(results)
    }
}
