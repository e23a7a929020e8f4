//! Criterion benchmarks for placement, filler, duplicate scanning and
//! mask compositing.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wordgrid_bench::{reference_profile, stress_profile, synthetic_words};
use wordgrid_core::{Alphabet, DirectionSet, Grid, MaskGrid, Validator, Word};
use wordgrid_engine::{default_validators, Puzzle};
use wordgrid_gen::{DuplicateChecker, FillEngine, WordPlacer};
use wordgrid_mask::shapes::{all_presets, Heart, Star5};
use wordgrid_mask::{Mask, MaskMethod};

fn words(count: usize, seed: u64) -> Vec<Word> {
    synthetic_words(count, 4, 9, seed)
        .iter()
        .filter_map(|w| Word::new(w, false).ok())
        .collect()
}

/// Benchmark: full puzzle generation at the reference profile.
fn bench_generate_reference(c: &mut Criterion) {
    c.bench_function("generate_reference_20x20", |b| {
        b.iter(|| {
            let puzzle = Puzzle::new(reference_profile(42)).unwrap();
            black_box(puzzle.metrics().words_placed);
        });
    });
}

/// Benchmark: full puzzle generation at the stress profile.
fn bench_generate_stress(c: &mut Criterion) {
    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("generate_stress_50x50", |b| {
        b.iter(|| {
            let puzzle = Puzzle::new(stress_profile(42)).unwrap();
            black_box(puzzle.metrics().words_placed);
        });
    });
    group.finish();
}

/// Benchmark: backtracking placement alone, without filler.
fn bench_place_words(c: &mut Criterion) {
    let mask = MaskGrid::all_active(20);
    let validators: Vec<Box<dyn Validator>> = default_validators();
    let placer = WordPlacer::new(DirectionSet::ALL, DirectionSet::ALL);
    let template = words(25, 7);

    c.bench_function("place_25_words_20x20", |b| {
        b.iter(|| {
            let mut grid = Grid::new(20);
            let mut words = template.clone();
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            let report = placer.place_all(&mut grid, &mask, &mut words, &validators, &mut rng);
            black_box(report.placed);
        });
    });
}

/// Benchmark: filler over a grid with placed words.
fn bench_fill(c: &mut Criterion) {
    let mask = MaskGrid::all_active(20);
    let placer = WordPlacer::new(DirectionSet::ALL, DirectionSet::ALL);
    let mut base = Grid::new(20);
    let mut placed_words = words(25, 11);
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    placer.place_all(&mut base, &mask, &mut placed_words, &[], &mut rng);
    let letters: Vec<_> = placed_words
        .iter()
        .filter(|w| w.is_placed())
        .map(Word::letters)
        .collect();
    let alphabet = Alphabet::latin();
    let engine = FillEngine::default();

    c.bench_function("fill_20x20", |b| {
        b.iter(|| {
            let mut grid = base.clone();
            let mut rng = ChaCha8Rng::seed_from_u64(3);
            let report = engine.fill(&mut grid, &mask, &letters, &alphabet, &mut rng);
            black_box(report.cells_filled);
        });
    });
}

/// Benchmark: count occurrences of every placed word in a filled grid.
fn bench_duplicate_count(c: &mut Criterion) {
    let puzzle = Puzzle::new(reference_profile(5)).unwrap();
    let grid = puzzle.grid().unwrap().clone();
    let letters: Vec<_> = puzzle.placed_words().map(Word::letters).collect();
    let checker = DuplicateChecker::default();

    c.bench_function("count_placed_words_20x20", |b| {
        b.iter(|| {
            for word in &letters {
                black_box(checker.count(&grid, word));
            }
        });
    });
}

/// Benchmark: render every preset at size 50.
fn bench_render_presets(c: &mut Criterion) {
    c.bench_function("render_all_presets_50", |b| {
        b.iter(|| {
            for shape in all_presets() {
                let mut mask = Mask::from_boxed(shape);
                black_box(mask.render(50).map(|m| m.active_count()).ok());
            }
        });
    });
}

/// Benchmark: composite a star with a subtracted heart.
fn bench_composite(c: &mut Criterion) {
    let mut star = Mask::new(Star5::new());
    let mut heart = Mask::new(Heart::new()).with_method(MaskMethod::Subtractive);
    star.render(40).unwrap();
    heart.render(40).unwrap();

    c.bench_function("composite_star_minus_heart_40", |b| {
        b.iter(|| {
            let mut acc = MaskGrid::all_active(40);
            star.apply_to(&mut acc).unwrap();
            heart.apply_to(&mut acc).unwrap();
            black_box(acc.active_count());
        });
    });
}

criterion_group!(
    benches,
    bench_generate_reference,
    bench_generate_stress,
    bench_place_words,
    bench_fill,
    bench_duplicate_count,
    bench_render_presets,
    bench_composite,
);
criterion_main!(benches);
