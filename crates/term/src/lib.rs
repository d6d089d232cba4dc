//! Terminal scoreboard module.
//!
//! Turns a [`core::Scoreboard`] into text. Layout is kept pure so it can be
//! tested without a terminal; printing goes through crossterm commands so
//! colours work on every platform crossterm supports.

pub mod renderer;
pub mod scoreboard_view;

pub use bowling_arena_core as core;
pub use bowling_arena_types as types;

pub use renderer::{encode_line_into, print_scoreboard};
pub use scoreboard_view::{roll_marks, Line, LineStyle, ScoreboardView};
