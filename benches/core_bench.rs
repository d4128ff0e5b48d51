//! Benchmarks for aloft core operations.
//!
//! Run with: cargo bench
//!
//! Results include 95% confidence intervals via Criterion.

use aloft::core::catalog::Catalog;
use aloft::core::infer::infer;
use aloft::core::items;
use aloft::core::overlay::build_views;
use aloft::core::session::DeliveryTracker;
use aloft::core::stages::build_stages;
use aloft::core::types::Inventory;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;

fn bench_catalog(c: &mut Criterion) {
    c.bench_function("catalog_build", |b| {
        b.iter(|| {
            let catalog = Catalog::standard().unwrap();
            black_box(catalog);
        });
    });

    let catalog = Catalog::standard().unwrap();
    c.bench_function("catalog_lookup", |b| {
        b.iter(|| {
            let recipe = catalog.lookup(black_box("drunk dragon")).unwrap();
            black_box(recipe);
        });
    });
}

fn bench_build_stages(c: &mut Criterion) {
    let catalog = Catalog::standard().unwrap();
    let mut group = c.benchmark_group("build_stages");
    for name in [
        "fruit blast",
        "drunk dragon",
        "tangled toads legs",
        "worm hole",
    ] {
        let recipe = catalog.lookup(name).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), recipe, |b, recipe| {
            b.iter(|| {
                let stages = build_stages(black_box(recipe));
                black_box(stages);
            });
        });
    }
    group.finish();
}

fn bench_infer(c: &mut Criterion) {
    let catalog = Catalog::standard().unwrap();
    let stages = build_stages(catalog.lookup("drunk dragon").unwrap());

    let empty = Inventory::new();
    let mut held = Inventory::new();
    held.set(items::MIXED_DRAGON_9576, 1);

    let mut group = c.benchmark_group("infer");
    group.bench_function("miss", |b| {
        b.iter(|| black_box(infer(black_box(&stages), &empty, 0)));
    });
    group.bench_function("hit", |b| {
        b.iter(|| black_box(infer(black_box(&stages), &held, 0)));
    });
    group.finish();
}

fn bench_build_views(c: &mut Criterion) {
    let catalog = Catalog::standard().unwrap();
    let stages = build_stages(catalog.lookup("worm hole").unwrap());
    let inventory: Inventory = [
        (items::KING_WORM, 4),
        (items::ONION, 2),
        (items::GNOME_SPICE, 1),
        (items::EQUA_LEAVES, 1),
    ]
    .into_iter()
    .collect();

    c.bench_function("build_views", |b| {
        b.iter(|| {
            let views = build_views(black_box(&stages), 0, &inventory);
            black_box(views);
        });
    });
}

fn bench_snapshot_tick(c: &mut Criterion) {
    // Steady state: a snapshot arrives every game tick and usually
    // changes nothing but held counts.
    let mut tracker = DeliveryTracker::new(Arc::new(Catalog::standard().unwrap()));
    tracker.on_order_detected("Burkor", "worm hole").unwrap();
    let snapshot: Inventory = [(items::KING_WORM, 4), (items::ONION, 1)]
        .into_iter()
        .collect();

    c.bench_function("snapshot_tick", |b| {
        b.iter(|| {
            tracker.on_inventory_snapshot(black_box(snapshot.clone()));
        });
    });
}

criterion_group!(
    benches,
    bench_catalog,
    bench_build_stages,
    bench_infer,
    bench_build_views,
    bench_snapshot_tick
);
criterion_main!(benches);
