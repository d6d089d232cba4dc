//! Bowling arena (workspace facade crate).
//!
//! Exposes `bowling_arena::{core, term, types}` while the implementation lives
//! in dedicated crates under `crates/`.

pub use bowling_arena_core as core;
pub use bowling_arena_term as term;
pub use bowling_arena_types as types;
