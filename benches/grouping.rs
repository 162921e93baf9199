// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the toast grouping projection.
//!
//! `Manager::groups` runs on every frame the overlay is drawn, so it is
//! measured with a realistic and a crowded number of toasts.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_toasts::ui::notifications::{
    Manager, ManualClock, Position, ToastKind, ToastOptions,
};
use std::hint::black_box;

fn populated(count: usize) -> Manager {
    let mut manager = Manager::with_clock(ManualClock::new());
    for i in 0..count {
        let position = Position::ALL[i % Position::ALL.len()];
        let kind = ToastKind::ALL[i % ToastKind::ALL.len()];
        manager.add(
            format!("toast-{i}"),
            "Benchmark toast",
            kind,
            ToastOptions::default().position(position),
        );
    }
    manager
}

fn bench_groups(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping");

    for count in [5, 50, 500] {
        let manager = populated(count);
        group.bench_with_input(BenchmarkId::new("groups", count), &manager, |b, manager| {
            b.iter(|| black_box(manager.groups()));
        });
    }

    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping");

    group.bench_function("tick_50", |b| {
        let mut manager = populated(50);
        b.iter(|| {
            manager.tick();
            black_box(manager.len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_groups, bench_tick);
criterion_main!(benches);
