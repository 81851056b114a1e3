//! 生產模擬效能測試

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use prodsim::{
    CatalogSnapshot, ProductRecipe, ProductionSimulator, RecipeLine, SimulationConfig, StockRecord,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use uuid::Uuid;

/// 隨機目錄：`products` 個產品，各 1..=8 行 BOM，共用 `materials` 種原物料
fn random_catalog(products: usize, materials: usize) -> CatalogSnapshot {
    let mut rng = StdRng::seed_from_u64(42);

    let raw_materials = (0..materials)
        .map(|i| StockRecord::new(format!("MAT-{:05}", i), rng.gen_range(0..10_000)))
        .collect();

    let recipes = (0..products)
        .map(|i| {
            let lines = (0..rng.gen_range(1..=8))
                .map(|_| {
                    RecipeLine::new(
                        format!("MAT-{:05}", rng.gen_range(0..materials)),
                        rng.gen_range(1..50),
                    )
                })
                .collect();
            ProductRecipe::new(
                Uuid::new_v4(),
                format!("PRD-{:05}", i),
                Decimal::new(rng.gen_range(100..100_000), 2),
            )
            .with_lines(lines)
        })
        .collect();

    CatalogSnapshot::new(recipes, raw_materials)
}

fn bench_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");

    for &size in &[100usize, 1_000, 10_000] {
        let catalog = random_catalog(size, size / 4 + 1);

        let sequential = ProductionSimulator::default();
        group.bench_with_input(BenchmarkId::new("sequential", size), &catalog, |b, catalog| {
            b.iter(|| sequential.simulate_snapshot(black_box(catalog)))
        });

        let parallel = ProductionSimulator::new(SimulationConfig::new().with_parallel(true));
        group.bench_with_input(BenchmarkId::new("parallel", size), &catalog, |b, catalog| {
            b.iter(|| parallel.simulate_snapshot(black_box(catalog)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_simulation);
criterion_main!(benches);
