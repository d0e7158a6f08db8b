//! Benchmarks for the ppmedit pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ppmedit::render::{encode_ppm, EncodeOptions};
use ppmedit::transform::{apply, apply_sequential, Operation};
use ppmedit::{parse_ppm, tokenize, Image, ParseOptions, Pixel, MAX_COLOR_VALUE};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> Vec<u8> {
    fs::read(fixtures_dir().join(name)).unwrap()
}

/// Generate a 256x256 image with varied colours.
fn generated_image() -> Image {
    let rows: Vec<Vec<Pixel>> = (0..256)
        .map(|y| {
            (0..256)
                .map(|x| {
                    Pixel::new(
                        ((x * 2) % 256) as u8,
                        ((y * 2) % 256) as u8,
                        (((x + y) * 3) % 256) as u8,
                    )
                })
                .collect()
        })
        .collect();
    Image::from_rows(rows, MAX_COLOR_VALUE).unwrap()
}

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let small = load_fixture("gradient.ppm");
    let large = encode_ppm(&generated_image(), &EncodeOptions::default()).into_bytes();
    let options = ParseOptions::default();

    group.bench_function("tokenize_large", |b| {
        b.iter(|| tokenize(black_box(&large)).unwrap())
    });

    group.bench_function("parse_small", |b| {
        b.iter(|| parse_ppm(black_box(&small), &options).unwrap())
    });

    group.bench_function("parse_large", |b| {
        b.iter(|| parse_ppm(black_box(&large), &options).unwrap())
    });

    group.finish();
}

// -- Transform benchmarks --

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");

    let image = generated_image();
    let ops = [
        Operation::Invert,
        Operation::Grayscale,
        Operation::Emboss,
        Operation::MotionBlur { length: 8 },
    ];

    for op in ops {
        group.bench_function(op.name(), |b| {
            b.iter(|| {
                let mut img = image.clone();
                apply(&mut img, black_box(&op));
                img
            })
        });

        group.bench_function(format!("{}_sequential", op.name()), |b| {
            b.iter(|| {
                let mut img = image.clone();
                apply_sequential(&mut img, black_box(&op));
                img
            })
        });
    }

    group.finish();
}

// -- Encoding benchmarks --

fn bench_encoding(c: &mut Criterion) {
    let image = generated_image();
    let options = EncodeOptions::default();

    c.bench_function("encode_large", |b| {
        b.iter(|| encode_ppm(black_box(&image), &options))
    });
}

criterion_group!(benches, bench_parsing, bench_transforms, bench_encoding);
criterion_main!(benches);
