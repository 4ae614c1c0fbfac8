//! Pairwise color relationship rules.
//!
//! A pair is tested for complementary, analogous and neutral compatibility in
//! that order and the first rule that matches decides the verdict.

use crate::color::{hue_difference_degrees, Color};
use serde::{Deserialize, Serialize};

/// Maximum RGB distance for two colors to count as "the same" in a rule.
pub const DISTANCE_THRESHOLD: f64 = 50.0;

/// Maximum hue separation for an analogous pair.
pub const ANALOGOUS_HUE_DEGREES: f64 = 30.0;

/// Reference tones that go with anything.
pub const NEUTRALS: [Color; 6] = [
    Color::new(255, 255, 255),
    Color::new(0, 0, 0),
    Color::new(128, 128, 128),
    Color::new(192, 192, 192),
    Color::new(160, 82, 45),
    Color::new(245, 245, 220),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    Complementary,
    Analogous,
    NeutralCompatible,
    NoMatch,
}

impl Relationship {
    /// Highest number of points a single pair can earn.
    pub const MAX_POINTS: u32 = 3;

    pub fn points(self) -> u32 {
        match self {
            Relationship::Complementary => 3,
            Relationship::Analogous => 2,
            Relationship::NeutralCompatible => 1,
            Relationship::NoMatch => 0,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Relationship::Complementary => "Complementary",
            Relationship::Analogous => "Analogous",
            Relationship::NeutralCompatible => "Neutral",
            Relationship::NoMatch => "No match",
        }
    }
}

/// Classify one pair. Only `first` is hue-rotated for the complementary test,
/// so swapping the arguments can change the verdict for near misses.
pub fn classify(first: Color, second: Color) -> Relationship {
    if is_complementary(first, second) {
        Relationship::Complementary
    } else if is_analogous(first, second) {
        Relationship::Analogous
    } else if is_neutral_pair(first, second) {
        Relationship::NeutralCompatible
    } else {
        Relationship::NoMatch
    }
}

/// `first` turned 180 degrees lands within range of `second`.
///
/// An achromatic `first` has no hue to turn, so it never has a complement.
pub fn is_complementary(first: Color, second: Color) -> bool {
    if first.is_achromatic() {
        return false;
    }
    first.complementary().distance(second) < DISTANCE_THRESHOLD
}

/// Neighbouring hues and close in RGB. Both colors need a hue.
pub fn is_analogous(first: Color, second: Color) -> bool {
    if first.is_achromatic() || second.is_achromatic() {
        return false;
    }
    let h1 = first.to_hsv().hue;
    let h2 = second.to_hsv().hue;
    hue_difference_degrees(h1, h2) < ANALOGOUS_HUE_DEGREES
        && first.distance(second) < DISTANCE_THRESHOLD
}

/// Either color sits close to one of the [`NEUTRALS`].
pub fn is_neutral_pair(first: Color, second: Color) -> bool {
    is_neutral(first) || is_neutral(second)
}

pub fn is_neutral(color: Color) -> bool {
    NEUTRALS
        .iter()
        .any(|neutral| color.distance(*neutral) < DISTANCE_THRESHOLD)
}

/// The two hues 30 degrees either side of `color`.
pub fn analogous_colors(color: Color) -> [Color; 2] {
    [
        color.rotate_hue(ANALOGOUS_HUE_DEGREES),
        color.rotate_hue(-ANALOGOUS_HUE_DEGREES),
    ]
}
