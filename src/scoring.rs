//! Outfit score: every unordered pair of slot colors is classified, the points
//! are summed and normalized to a 0-5 scale with two decimals.

use crate::color::Color;
use crate::harmony::{classify, Relationship};

pub const MAX_SCORE: f64 = 5.0;

/// One classified pair, by slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairVerdict {
    pub first: usize,
    pub second: usize,
    pub relationship: Relationship,
}

/// Every `C(n, 2)` pair in slot order; the earlier slot is the rotated side.
fn verdicts(colors: &[Color]) -> impl Iterator<Item = PairVerdict> + '_ {
    colors.iter().enumerate().flat_map(move |(i, &first)| {
        colors
            .iter()
            .enumerate()
            .skip(i + 1)
            .map(move |(j, &second)| PairVerdict {
                first: i,
                second: j,
                relationship: classify(first, second),
            })
    })
}

pub fn pair_verdicts(colors: &[Color]) -> Vec<PairVerdict> {
    verdicts(colors).collect()
}

/// Score of an outfit given its slot colors. Fewer than two colors score 0.
pub fn score_colors(colors: &[Color]) -> f64 {
    let (total, pairs) = verdicts(colors).fold((0u32, 0u32), |(total, pairs), verdict| {
        (total + verdict.relationship.points(), pairs + 1)
    });
    if pairs == 0 {
        return 0.0;
    }

    let max_points = pairs * Relationship::MAX_POINTS;
    round_score(f64::from(total) / f64::from(max_points) * MAX_SCORE)
}

/// Round to two decimals.
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
