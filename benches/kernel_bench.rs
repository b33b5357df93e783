use criterion::{black_box, criterion_group, criterion_main, Criterion};

use orrery::board::{board_cells, visible_level, RotationState, ALL_DISKS, ALL_SECTORS};
use orrery::reach::reachable_cells;
use orrery::scan::{resolve_majority, Faction};
use orrery::survey::visible_body_counts;

fn bench_visible_level(c: &mut Criterion) {
    let rotation = RotationState::new(45, 90, 225);
    c.bench_function("visible_level_full_board", |b| {
        b.iter(|| {
            for disk in ALL_DISKS {
                for sector in ALL_SECTORS {
                    black_box(visible_level(disk, sector, black_box(&rotation)));
                }
            }
        })
    });
}

fn bench_board_cells(c: &mut Criterion) {
    let rotation = RotationState::new(45, 90, 225);
    c.bench_function("board_cells_40", |b| {
        b.iter(|| board_cells(black_box(&rotation)))
    });
}

fn bench_reachable_cells(c: &mut Criterion) {
    let rotation = RotationState::new(45, 90, 225);
    let start = "B5".parse().unwrap();
    c.bench_function("reachable_cells_budget_6", |b| {
        b.iter(|| reachable_cells(black_box(start), 4, 2, black_box(&rotation), false, None))
    });
}

fn bench_majority(c: &mut Criterion) {
    use Faction::{Blue, Green, Red, Yellow};
    let slots: Vec<Option<Faction>> = [Blue, Red, Blue, Green, Yellow, Red, Blue, Green]
        .into_iter()
        .map(Some)
        .collect();
    c.bench_function("resolve_majority_8_slots", |b| {
        b.iter(|| resolve_majority(black_box(&slots)))
    });
}

fn bench_survey(c: &mut Criterion) {
    c.bench_function("visible_body_counts_512_states", |b| {
        b.iter(visible_body_counts)
    });
}

criterion_group!(
    benches,
    bench_visible_level,
    bench_board_cells,
    bench_reachable_cells,
    bench_majority,
    bench_survey
);
criterion_main!(benches);
