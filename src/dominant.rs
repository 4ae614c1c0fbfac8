//! Dominant color of a garment photo.

use crate::color::Color;
use crate::utils::is_image_file;
use anyhow::{bail, Context, Result};
use image::imageops::FilterType;
use image::DynamicImage;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Side of the square the photo is sampled down to.
const SAMPLE_SIZE: u32 = 100;

pub fn dominant_color(path: &Path) -> Result<Color> {
    if !is_image_file(path) {
        bail!("Not a supported image file: {}", path.display());
    }

    let img = image::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let color = dominant_color_of(&img);
    debug!(path = %path.display(), %color, "dominant color");
    Ok(color)
}

/// Most frequent pixel after a nearest-neighbour downsample, so the answer is
/// always a color that really occurs in the image.
pub fn dominant_color_of(img: &DynamicImage) -> Color {
    let sample = img
        .resize_exact(SAMPLE_SIZE, SAMPLE_SIZE, FilterType::Nearest)
        .to_rgb8();
    most_frequent(sample.pixels().map(|p| Color::from(p.0)))
}

/// Ties go to the color seen first. An empty input gives black.
fn most_frequent(pixels: impl Iterator<Item = Color>) -> Color {
    let mut counts: HashMap<Color, (usize, usize)> = HashMap::new();
    for (index, color) in pixels.enumerate() {
        counts.entry(color).or_insert((0, index)).0 += 1;
    }

    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(color, _)| color)
        .unwrap_or(Color::BLACK)
}
