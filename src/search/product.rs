use crate::color::Color;
use crate::outfit::{compare_by_score_desc, Outfit, ScoredOutfit};
use crate::scoring::score_colors;
use crate::wardrobe::Garment;
use rayon::prelude::*;

/// Choices for each outfit slot. `None` in `jackets` stands for "no jacket".
pub(super) struct SlotOptions<'a> {
    pub tops: Vec<&'a Garment>,
    pub pants: Vec<&'a Garment>,
    pub shoes: Vec<&'a Garment>,
    pub jackets: Vec<Option<&'a Garment>>,
}

impl SlotOptions<'_> {
    pub fn combinations(&self) -> usize {
        self.tops.len() * self.pants.len() * self.shoes.len() * self.jackets.len()
    }

    /// Walk the product lazily, scoring and filtering each candidate in the same
    /// pass, then sort survivors by score. Tops are split across the rayon pool.
    pub fn evaluate<F>(&self, accept: F) -> Vec<ScoredOutfit>
    where
        F: Fn(f64) -> bool + Sync,
    {
        let accept = &accept;
        let (pants, shoes, jackets) = (&self.pants, &self.shoes, &self.jackets);
        let mut results: Vec<ScoredOutfit> = self
            .tops
            .par_iter()
            .flat_map_iter(move |&top| {
                pants.iter().flat_map(move |&pant| {
                    shoes.iter().flat_map(move |&shoe| {
                        jackets.iter().filter_map(move |&jacket| {
                            let score = score_slots(top, pant, shoe, jacket);
                            accept(score).then(|| ScoredOutfit {
                                outfit: Outfit {
                                    top: top.clone(),
                                    pants: pant.clone(),
                                    shoes: shoe.clone(),
                                    jacket: jacket.cloned(),
                                },
                                score,
                            })
                        })
                    })
                })
            })
            .collect();

        results.sort_by(|a, b| compare_by_score_desc(a.score, b.score));
        results
    }
}

fn score_slots(top: &Garment, pants: &Garment, shoes: &Garment, jacket: Option<&Garment>) -> f64 {
    match jacket {
        Some(jacket) => score_colors(&[top.color, pants.color, shoes.color, jacket.color]),
        None => score_colors(&[top.color, pants.color, shoes.color]),
    }
}

/// Restartable odometer over the Cartesian product of several lists.
///
/// Yields one index per list, rightmost list spinning fastest. Any empty list
/// makes the whole product empty; zero lists yield a single empty tuple.
#[derive(Debug, Clone)]
pub(super) struct Odometer {
    lengths: Vec<usize>,
    current: Option<Vec<usize>>,
}

impl Odometer {
    pub fn new(lengths: Vec<usize>) -> Self {
        let current = if lengths.iter().any(|&len| len == 0) {
            None
        } else {
            Some(vec![0; lengths.len()])
        };
        Self { lengths, current }
    }
}

impl Iterator for Odometer {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        let mut next = current.clone();
        let mut carried = true;
        for position in (0..next.len()).rev() {
            next[position] += 1;
            if next[position] < self.lengths[position] {
                carried = false;
                break;
            }
            next[position] = 0;
        }
        if !carried {
            self.current = Some(next);
        }
        Some(current)
    }
}

/// Colors of a combination, in slot order.
pub(super) fn colors_of(garments: &[&Garment]) -> Vec<Color> {
    garments.iter().map(|g| g.color).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odometer_order() {
        let all: Vec<_> = Odometer::new(vec![2, 3]).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2]
            ]
        );
    }

    #[test]
    fn test_odometer_empty_list_empties_product() {
        assert_eq!(Odometer::new(vec![3, 0, 2]).count(), 0);
    }

    #[test]
    fn test_odometer_no_lists_yields_one_empty_tuple() {
        let all: Vec<_> = Odometer::new(Vec::new()).collect();
        assert_eq!(all, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_odometer_is_restartable() {
        let odometer = Odometer::new(vec![2, 2, 2]);
        assert_eq!(odometer.clone().count(), 8);
        assert_eq!(odometer.count(), 8);
    }
}
