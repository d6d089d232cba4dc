//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the bowling rules, score keeping, the lane arena and
//! game sessions. It has **no dependencies** on terminals, prompts or pacing:
//!
//! - **Deterministic**: same seed (or script) produces the same game
//! - **Testable**: every rule is reachable through plain function calls
//! - **Shareable**: one arena can gate sessions running on many threads
//!
//! # Module Structure
//!
//! - [`arena`]: fixed pool of lanes, acquired per session and released once
//! - [`frame`]: how many rolls a frame takes, strike/spare classification
//! - [`scoring`]: flat-bonus frame scores and per-player running totals
//! - [`rng`]: pin-count sources (seeded, scripted, closures)
//! - [`session`]: a match between players on one lane, frame by frame
//! - [`snapshot`]: serializable scoreboard view of a session
//!
//! # Game Rules
//!
//! - **Frames 1-9**: a strike ends the frame, otherwise two rolls
//! - **Frame 10**: a strike or spare earns extra rolls (three in total); the
//!   rack is reset whenever it is cleared
//! - **Scoring**: pins plus a flat bonus, +10 for a strike and +5 for a spare,
//!   credited when the frame completes
//! - **Winners**: every player tied on the highest total
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use bowling_arena_core::{GameSession, LaneArena, ScriptedRolls};
//!
//! let arena = Arc::new(LaneArena::new(1));
//! let mut session = GameSession::create(["ann"], &arena).unwrap();
//! assert_eq!(arena.available(), 0);
//!
//! // Twelve strikes: nine single-roll frames, then three rolls in the tenth.
//! let mut rolls = ScriptedRolls::new([10; 12]);
//! let winners = session.run(&mut rolls).unwrap();
//! assert_eq!(winners[0].score(), 220);
//! assert_eq!(arena.available(), 1);
//! ```

pub mod arena;
pub mod config;
pub mod error;
pub mod frame;
pub mod player;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use bowling_arena_types as types;

// Re-export commonly used types for convenience
pub use arena::{LaneArena, LaneLease};
pub use config::BowlingConfig;
pub use error::{BowlingError, Result};
pub use frame::Frame;
pub use player::Player;
pub use rng::{PinRoll, ScriptedRolls, SeededRolls, SimpleRng};
pub use scoring::{calculate_frame_score, score_frame, FrameScore, ScoreCard};
pub use session::GameSession;
pub use snapshot::{FrameSnapshot, PlayerSnapshot, Scoreboard};
