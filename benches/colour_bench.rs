use criterion::{criterion_group, criterion_main, Bencher, Criterion};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

use colourbot::domain::{colour, palette};

fn avatar_png() -> Vec<u8> {
    let image = RgbImage::from_fn(128, 128, |x, y| Rgb([(x * 2) as u8, (y * 2) as u8, 96]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("png encoding");
    bytes
}

fn bench(c: &mut Criterion) {
    let bytes = avatar_png();
    let colours = palette::extract(&bytes, palette::PALETTE_SIZE, palette::PALETTE_QUALITY)
        .expect("palette");

    c.bench_function("Palette extraction", |b: &mut Bencher| {
        b.iter(|| palette::extract(&bytes, palette::PALETTE_SIZE, palette::PALETTE_QUALITY))
    });

    c.bench_function("Colour selection", |b: &mut Bencher| {
        b.iter(|| colour::select(&colours))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(50);
    targets = bench
}

criterion_main!(benches);
