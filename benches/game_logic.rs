use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use blockfall::core::{
    clear_full_rows, ActivePiece, GameEngine, GameSnapshot, LockedPositions, PieceController,
};
use blockfall::types::{Intent, PieceColor, ShapeKind};

fn bench_tick(c: &mut Criterion) {
    let mut engine = GameEngine::new(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            let report = engine.tick(black_box(0.016), &[]);
            if report.game_over {
                engine.tick(0.0, &[Intent::Restart]);
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut full = LockedPositions::new();
    for y in 16..20 {
        for x in 0..10 {
            full.insert(x, y, PieceColor::Cyan);
        }
    }

    c.bench_function("clear_4_lines", |b| {
        b.iter_batched(
            || full.clone(),
            |mut locked| clear_full_rows(&mut locked),
            BatchSize::SmallInput,
        )
    });
}

fn bench_move(c: &mut Criterion) {
    let locked = LockedPositions::new();
    let mut controller = PieceController::new(ActivePiece::spawn(ShapeKind::T, PieceColor::Purple));

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            controller.move_left(&locked);
            controller.move_right(black_box(&locked));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let locked = LockedPositions::new();
    let mut controller = PieceController::new(ActivePiece::spawn(ShapeKind::L, PieceColor::Orange));

    c.bench_function("rotate", |b| {
        b.iter(|| {
            controller.rotate(black_box(&locked));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let engine = GameEngine::new(12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            engine.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_move,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
