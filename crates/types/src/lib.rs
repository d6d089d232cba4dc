//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, scoreboard rendering, the CLI shell).
//!
//! # Game Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PINS_PER_RACK` | 10 | Pins standing on a fresh rack |
//! | `FRAMES_PER_GAME` | 10 | Frames each player bowls |
//! | `MAX_ROLLS_PER_FRAME` | 3 | Only reachable in the final frame |
//! | `DEFAULT_LANES` | 5 | Lanes in a default arena |
//!
//! # Scoring Constants
//!
//! Scoring uses a flat bonus credited when a frame completes (no look-ahead
//! into following rolls):
//!
//! | Frame kind | Bonus |
//! |------------|-------|
//! | Strike | `STRIKE_BONUS` = 10 |
//! | Spare | `SPARE_BONUS` = 5 |
//! | Open | 0 |
//!
//! # Examples
//!
//! ```
//! use bowling_arena_types::{FrameKind, FrameNumber, FRAMES_PER_GAME};
//!
//! let first = FrameNumber::FIRST;
//! assert_eq!(first.get(), 1);
//! assert_eq!(first.next(), FrameNumber::new(2));
//! assert!(FrameNumber::LAST.is_final());
//! assert_eq!(FrameNumber::LAST.get(), FRAMES_PER_GAME);
//!
//! assert_eq!(FrameKind::from_str("STRIKE"), Some(FrameKind::Strike));
//! assert_eq!(FrameKind::Spare.bonus(), 5);
//! ```

use std::fmt;

/// Pins standing on a fresh rack (10)
pub const PINS_PER_RACK: u8 = 10;

/// Frames bowled by each player in a game (10)
pub const FRAMES_PER_GAME: u8 = 10;

/// Maximum rolls in a single frame (3, final frame only)
pub const MAX_ROLLS_PER_FRAME: usize = 3;

/// Flat bonus credited to a strike frame
pub const STRIKE_BONUS: u32 = 10;

/// Flat bonus credited to a spare frame
pub const SPARE_BONUS: u32 = 5;

/// Lanes in a default arena
pub const DEFAULT_LANES: usize = 5;

/// Score every player starts with
pub const INITIAL_SCORE: u32 = 0;

/// Frame number value reported by a session once every frame has been bowled (11)
pub const FINISHED_FRAME: u8 = FRAMES_PER_GAME + 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_arena_defaults() {
        assert_eq!(PINS_PER_RACK, 10);
        assert_eq!(FRAMES_PER_GAME, 10);
        assert_eq!(MAX_ROLLS_PER_FRAME, 3);
        assert_eq!(STRIKE_BONUS, 10);
        assert_eq!(SPARE_BONUS, 5);
        assert_eq!(DEFAULT_LANES, 5);
        assert_eq!(INITIAL_SCORE, 0);
        assert_eq!(FINISHED_FRAME, 11);
    }
}

/// One-based frame number, always within `1..=FRAMES_PER_GAME`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameNumber(u8);

impl FrameNumber {
    /// The opening frame
    pub const FIRST: FrameNumber = FrameNumber(1);

    /// The final frame, the only one that may award bonus rolls
    pub const LAST: FrameNumber = FrameNumber(FRAMES_PER_GAME);

    /// Create a frame number, rejecting values outside `1..=10`
    ///
    /// # Examples
    ///
    /// ```
    /// use bowling_arena_types::FrameNumber;
    ///
    /// assert!(FrameNumber::new(1).is_some());
    /// assert!(FrameNumber::new(10).is_some());
    /// assert!(FrameNumber::new(0).is_none());
    /// assert!(FrameNumber::new(11).is_none());
    /// ```
    pub fn new(n: u8) -> Option<Self> {
        if (1..=FRAMES_PER_GAME).contains(&n) {
            Some(Self(n))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Whether this is the tenth frame
    pub fn is_final(self) -> bool {
        self.0 == FRAMES_PER_GAME
    }

    /// The following frame, `None` after the final frame
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// Iterate over every frame of a game in order
    pub fn all() -> impl Iterator<Item = FrameNumber> {
        (1..=FRAMES_PER_GAME).map(FrameNumber)
    }
}

impl fmt::Display for FrameNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification of a completed frame
///
/// - **Strike**: the first roll knocked down the full rack
/// - **Spare**: the first two rolls together knocked down the full rack
/// - **Open**: pins were left standing after two rolls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    Strike,
    Spare,
    Open,
}

impl FrameKind {
    /// Parse frame kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use bowling_arena_types::FrameKind;
    ///
    /// assert_eq!(FrameKind::from_str("strike"), Some(FrameKind::Strike));
    /// assert_eq!(FrameKind::from_str("Spare"), Some(FrameKind::Spare));
    /// assert_eq!(FrameKind::from_str("gutter"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strike" => Some(FrameKind::Strike),
            "spare" => Some(FrameKind::Spare),
            "open" => Some(FrameKind::Open),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FrameKind::Strike => "strike",
            FrameKind::Spare => "spare",
            FrameKind::Open => "open",
        }
    }

    /// Flat bonus credited on top of the frame's pin total
    pub fn bonus(&self) -> u32 {
        match self {
            FrameKind::Strike => STRIKE_BONUS,
            FrameKind::Spare => SPARE_BONUS,
            FrameKind::Open => 0,
        }
    }

    /// Scoreboard mark for the frame (`X`, `/` or blank)
    pub fn mark(&self) -> &'static str {
        match self {
            FrameKind::Strike => "X",
            FrameKind::Spare => "/",
            FrameKind::Open => "",
        }
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pins left standing after `knocked` of `standing` fall
///
/// A full clear resets the rack, which is how the final frame keeps rolling
/// after a strike or spare.
///
/// ```
/// use bowling_arena_types::pins_after;
///
/// assert_eq!(pins_after(10, 3), 7);
/// assert_eq!(pins_after(10, 10), 10);
/// assert_eq!(pins_after(4, 4), 10);
/// ```
pub fn pins_after(standing: u8, knocked: u8) -> u8 {
    match standing.saturating_sub(knocked) {
        0 => PINS_PER_RACK,
        left => left,
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn frame_number_bounds() {
        assert_eq!(FrameNumber::new(0), None);
        assert_eq!(FrameNumber::new(1), Some(FrameNumber::FIRST));
        assert_eq!(FrameNumber::new(10), Some(FrameNumber::LAST));
        assert_eq!(FrameNumber::new(11), None);
    }

    #[test]
    fn frame_number_iteration_covers_game() {
        let frames: Vec<u8> = FrameNumber::all().map(FrameNumber::get).collect();
        assert_eq!(frames, (1..=10).collect::<Vec<_>>());
        assert_eq!(FrameNumber::LAST.next(), None);
        assert!(!FrameNumber::FIRST.is_final());
    }

    #[test]
    fn frame_kind_round_trips_names() {
        for kind in [FrameKind::Strike, FrameKind::Spare, FrameKind::Open] {
            assert_eq!(FrameKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn frame_kind_bonus_and_mark() {
        assert_eq!(FrameKind::Strike.bonus(), 10);
        assert_eq!(FrameKind::Spare.bonus(), 5);
        assert_eq!(FrameKind::Open.bonus(), 0);
        assert_eq!(FrameKind::Strike.mark(), "X");
        assert_eq!(FrameKind::Open.mark(), "");
    }

    #[test]
    fn rack_resets_after_clear() {
        assert_eq!(pins_after(10, 0), 10);
        assert_eq!(pins_after(10, 9), 1);
        assert_eq!(pins_after(3, 3), 10);
    }
}
