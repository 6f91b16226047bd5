#![allow(missing_docs)]
//! Benchmarks for slot availability queries.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use steel_gui_core::layout::{Grid, Layout, SecondaryRegion, SlotManager};

/// Creates a double chest layout with every third slot claimed.
fn create_manager(secondary: SecondaryRegion) -> SlotManager {
    let mut slots = SlotManager::new(Layout::new(Grid::new(6, 9), secondary));
    slots.claim_all((0..54).step_by(3));
    slots
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("slot_queries");

    for secondary in [SecondaryRegion::None, SecondaryRegion::InventoryWithHotbar] {
        let slots = create_manager(secondary);
        let name = format!("{secondary:?}");

        group.bench_with_input(
            BenchmarkId::new("available_indices", &name),
            &slots,
            |b, slots| b.iter(|| black_box(slots.available_indices())),
        );
        group.bench_with_input(
            BenchmarkId::new("available_rows", &name),
            &slots,
            |b, slots| b.iter(|| black_box(slots.available_rows())),
        );
        group.bench_with_input(
            BenchmarkId::new("nth_last", &name),
            &slots,
            |b, slots| b.iter(|| black_box(slots.nth(black_box(-1)))),
        );
    }

    group.finish();
}

fn bench_reserve_rows(c: &mut Criterion) {
    c.bench_function("reserve_all_rows", |b| {
        b.iter(|| {
            let mut slots = create_manager(SecondaryRegion::InventoryWithHotbar);
            while let Some(row) = slots.reserve_row(black_box(true)) {
                black_box(row);
            }
        });
    });
}

criterion_group!(benches, bench_queries, bench_reserve_rows);
criterion_main!(benches);
