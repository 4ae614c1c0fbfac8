use crate::color::Color;
use crate::scoring::score_colors;
use crate::wardrobe::Garment;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Top, pants and shoes, plus an optional jacket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outfit {
    pub top: Garment,
    pub pants: Garment,
    pub shoes: Garment,
    #[serde(default)]
    pub jacket: Option<Garment>,
}

impl Outfit {
    /// Slot colors in top, pants, shoes, jacket order.
    pub fn colors(&self) -> Vec<Color> {
        let mut colors = vec![self.top.color, self.pants.color, self.shoes.color];
        if let Some(jacket) = &self.jacket {
            colors.push(jacket.color);
        }
        colors
    }

    pub fn garments(&self) -> impl Iterator<Item = &Garment> {
        [&self.top, &self.pants, &self.shoes]
            .into_iter()
            .chain(self.jacket.as_ref())
    }

    pub fn score(&self) -> f64 {
        score_colors(&self.colors())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredOutfit {
    #[serde(flatten)]
    pub outfit: Outfit,
    pub score: f64,
}

impl ScoredOutfit {
    pub fn new(outfit: Outfit) -> Self {
        let score = outfit.score();
        Self { outfit, score }
    }
}

/// Pieces from an arbitrary subset of categories, in the order they were requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCombination {
    pub garments: Vec<Garment>,
    pub score: f64,
}

/// Highest score first; equal scores keep generation order under a stable sort.
pub fn compare_by_score_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
