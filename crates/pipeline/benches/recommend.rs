//! Benchmarks for a recommendation pass
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic catalog so no dataset file is needed.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{AnimeCatalog, AnimeRecord, EpisodeRange};
use pipeline::{recommend, Preferences};

const GENRES: [&str; 6] = ["Action", "Comedy", "Drama", "Fantasy", "Romance", "Mystery"];

fn synthetic_catalog(size: usize) -> AnimeCatalog {
    let records = (0..size)
        .map(|i| AnimeRecord {
            title: format!("Title {i}"),
            genre: format!("{}, {}", GENRES[i % GENRES.len()], GENRES[(i / 3) % GENRES.len()]),
            episode_range: EpisodeRange::ALL[i % 4].label().to_string(),
            description: Some(format!("Description {i}")),
            disclaimer: None,
        })
        .collect();
    AnimeCatalog::new(records)
}

fn bench_recommend(c: &mut Criterion) {
    let catalog = synthetic_catalog(10_000);
    let preferences = Preferences::new("Drama", EpisodeRange::Long);

    c.bench_function("recommend_10k", |b| {
        b.iter(|| {
            let recommendation = recommend(black_box(&catalog), black_box(&preferences)).unwrap();
            black_box(recommendation)
        })
    });
}

fn bench_episode_ranges(c: &mut Criterion) {
    let catalog = synthetic_catalog(10_000);

    c.bench_function("episode_ranges_for_10k", |b| {
        b.iter(|| black_box(catalog.episode_ranges_for(black_box("Fantasy"))))
    });
}

criterion_group!(benches, bench_recommend, bench_episode_ranges);
criterion_main!(benches);
