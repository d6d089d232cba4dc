use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bowling_arena::core::{calculate_frame_score, Frame, GameSession, LaneArena, SeededRolls};
use bowling_arena::types::FrameNumber;

fn bench_bowl_frame(c: &mut Criterion) {
    let mut rolls = SeededRolls::new(12345);

    c.bench_function("bowl_tenth_frame", |b| {
        b.iter(|| Frame::bowl(black_box(FrameNumber::LAST), &mut rolls))
    });
}

fn bench_frame_score(c: &mut Criterion) {
    let frame = Frame::from_rolls(FrameNumber::LAST, &[10, 7, 2]).unwrap();

    c.bench_function("frame_score", |b| {
        b.iter(|| calculate_frame_score(black_box(&frame)))
    });
}

fn bench_full_game(c: &mut Criterion) {
    let arena = Arc::new(LaneArena::new(1));
    let mut rolls = SeededRolls::new(12345);

    c.bench_function("four_player_game", |b| {
        b.iter(|| {
            let mut session = GameSession::create(["a", "b", "c", "d"], &arena).unwrap();
            let winners = session.run(&mut rolls).unwrap().len();
            winners
        })
    });
}

criterion_group!(benches, bench_bowl_frame, bench_frame_score, bench_full_game);
criterion_main!(benches);
