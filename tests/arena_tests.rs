//! Lane arena tests - capacity bounds, including sessions on many threads

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use bowling_arena::core::{
    BowlingConfig, BowlingError, GameSession, LaneArena, SeededRolls, SimpleRng,
};
use bowling_arena::types::DEFAULT_LANES;

#[test]
fn test_default_arena_has_five_lanes() {
    let arena = LaneArena::default();
    assert_eq!(arena.capacity(), DEFAULT_LANES);
    assert_eq!(arena.available(), 5);
    assert_eq!(LaneArena::from_config(&BowlingConfig::default()).capacity(), 5);
}

#[test]
fn test_paired_sequences_stay_in_bounds() {
    let arena = LaneArena::new(4);
    let mut held = 0usize;
    let mut rng = SimpleRng::new(31);

    for _ in 0..10_000 {
        let acquire = rng.next_inclusive(1) == 0;
        if acquire {
            match arena.acquire() {
                Ok(()) => held += 1,
                Err(err) => {
                    assert_eq!(held, 4);
                    assert_eq!(err, BowlingError::CapacityExhausted { capacity: 4 });
                }
            }
        } else if held > 0 {
            arena.release().unwrap();
            held -= 1;
        }
        assert_eq!(arena.available(), 4 - held);
    }
}

#[test]
fn test_refused_acquire_does_not_mutate() {
    let arena = LaneArena::new(1);
    arena.acquire().unwrap();
    for _ in 0..10 {
        assert!(arena.acquire().is_err());
    }
    assert_eq!(arena.available(), 0);
    arena.release().unwrap();
    assert_eq!(arena.available(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_sessions_share_capacity() {
    const LANES: usize = 3;
    const SESSIONS: u32 = 32;

    let arena = Arc::new(LaneArena::new(LANES));
    let in_play = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));

    let mut handles = Vec::new();
    for seed in 0..SESSIONS {
        let arena = Arc::clone(&arena);
        let in_play = Arc::clone(&in_play);
        let peak = Arc::clone(&peak);
        handles.push(tokio::task::spawn_blocking(move || -> Result<u32, BowlingError> {
            let mut session = GameSession::create([format!("p{seed}")], &arena)?;
            let now = in_play.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);
            assert!(arena.available() <= LANES);

            let mut rolls = SeededRolls::new(seed + 1);
            // Leave the count before the lane goes back, so it never over-reports.
            while session.frame_number() < 10 {
                session.play_frame(&mut rolls)?;
            }
            in_play.fetch_sub(1, Ordering::SeqCst);
            session.play_frame(&mut rolls)?;
            Ok(session.players()[0].score())
        }));
    }

    let mut finished = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => finished += 1,
            Err(err) => assert_eq!(err, BowlingError::CapacityExhausted { capacity: LANES }),
        }
    }

    assert!(finished >= 1);
    assert!(peak.load(Ordering::SeqCst) <= LANES);
    assert_eq!(arena.available(), LANES);
}
