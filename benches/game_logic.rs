use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jartris::core::{Figure, Jar, Session};
use jartris::types::{Anchor, Command, ShapeKind};

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::new(12345);

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            session.tick();
        })
    });
}

fn bench_can_place(c: &mut Criterion) {
    let jar = Jar::new();
    let fig = Figure::new(ShapeKind::T);

    c.bench_function("can_place", |b| {
        b.iter(|| jar.can_place(black_box(&fig), black_box(Anchor::new(10, 4))))
    });
}

fn bench_clear_completed_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut jar = Jar::new();
            for row in 16..20 {
                for col in 0..10 {
                    jar.set(row, col, Some(ShapeKind::I));
                }
            }
            jar.clear_completed_rows()
        })
    });
}

fn bench_move_attempt(c: &mut Criterion) {
    let mut session = Session::new(12345);

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            session.apply(Command::MoveLeft);
            session.apply(Command::MoveRight);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_can_place,
    bench_clear_completed_rows,
    bench_move_attempt
);
criterion_main!(benches);
