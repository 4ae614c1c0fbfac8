//! Outfit color-harmony engine.
//!
//! Garments are reduced to one RGB color each. Outfits (top, pants, shoes and
//! an optional jacket) are scored by classifying every pair of colors as
//! complementary, analogous, neutral-compatible or no match, and searches
//! enumerate candidate outfits from a wardrobe snapshot or a generated palette.

pub mod color;
pub mod config;
pub mod dominant;
pub mod error;
pub mod harmony;
pub mod names;
pub mod outfit;
pub mod scoring;
pub mod search;
pub mod store;
pub mod utils;
pub mod wardrobe;

pub use color::Color;
pub use error::MatchError;
pub use harmony::{classify, Relationship};
pub use names::closest_color_name;
pub use outfit::{Outfit, ScoredCombination, ScoredOutfit};
pub use scoring::score_colors;
pub use search::{
    generate_outfit_suggestions, suggest_outfit_for_item, suggestions_for_item, OutfitSearch,
    SearchThresholds,
};
pub use wardrobe::{Category, Garment, GarmentSource, ItemId, Wardrobe};
