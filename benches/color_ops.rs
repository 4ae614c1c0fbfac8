use criterion::{black_box, criterion_group, criterion_main, Criterion};
use outfitmatch::color::rgb_to_hsv;
use outfitmatch::{classify, score_colors, Category, Color, OutfitSearch, Wardrobe};

fn bench_wardrobe(per_category: u8) -> Wardrobe {
    let step = 255 / per_category.max(1);
    Wardrobe::from_colors(Category::ALL.into_iter().flat_map(|category| {
        (0..per_category).map(move |i| {
            let shade = i.saturating_mul(step);
            let color = match category {
                Category::Top => Color::new(shade, 40, 255 - shade),
                Category::Pants => Color::new(20, shade, 200),
                Category::Shoes => Color::new(shade, shade, shade),
                Category::Jacket => Color::new(255 - shade, shade / 2, 30),
            };
            (category, color)
        })
    }))
}

fn bench_rgb_to_hsv(c: &mut Criterion) {
    c.bench_function("rgb_to_hsv", |b| {
        b.iter(|| rgb_to_hsv(black_box(Color::new(74, 144, 217))))
    });
}

fn bench_classify(c: &mut Criterion) {
    let a = Color::new(255, 0, 0);
    let b2 = Color::new(20, 240, 230);
    c.bench_function("classify_pair", |b| {
        b.iter(|| classify(black_box(a), black_box(b2)))
    });
}

fn bench_score_colors(c: &mut Criterion) {
    let colors = [
        Color::new(255, 0, 0),
        Color::new(0, 255, 255),
        Color::new(128, 128, 128),
        Color::new(0, 0, 0),
    ];
    c.bench_function("score_four_colors", |b| {
        b.iter(|| score_colors(black_box(&colors)))
    });
}

fn bench_full_enumeration(c: &mut Criterion) {
    let wardrobe = bench_wardrobe(12);
    let search = OutfitSearch::default();
    c.bench_function("full_enumeration_12_per_category", |b| {
        b.iter(|| search.full_enumeration(black_box(&wardrobe)))
    });
}

fn bench_hypothetical(c: &mut Criterion) {
    let search = OutfitSearch::default();
    c.bench_function("hypothetical_top", |b| {
        b.iter(|| search.for_hypothetical(Category::Top, black_box(Color::new(200, 30, 60))))
    });
}

criterion_group!(
    benches,
    bench_rgb_to_hsv,
    bench_classify,
    bench_score_colors,
    bench_full_enumeration,
    bench_hypothetical
);
criterion_main!(benches);
