//! Error type shared by every fallible core operation.

use crate::types::FrameNumber;

/// Failures raised by the arena, the frame engine and game sessions.
///
/// None of these are retried inside the core; the caller decides whether to
/// prompt again or give up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BowlingError {
    /// Every lane in the arena is taken.
    #[error("lanes are not available (arena capacity {capacity})")]
    CapacityExhausted { capacity: usize },

    /// A lane was handed back while every lane was already free.
    #[error("lane released without a matching acquire (arena capacity {capacity})")]
    ReleaseWithoutAcquire { capacity: usize },

    /// The roll source returned more pins than were standing.
    #[error("frame {frame}: rolled {rolled} with only {pins_standing} pins standing")]
    InvalidRoll {
        frame: FrameNumber,
        pins_standing: u8,
        rolled: u8,
    },

    /// The roll source has no more rolls to give.
    #[error("frame {frame}: roll source exhausted")]
    RollSourceExhausted { frame: FrameNumber },

    /// A frame assembled from recorded rolls does not describe a legal frame.
    #[error("frame {frame}: {reason}")]
    InvalidFrame {
        frame: FrameNumber,
        reason: &'static str,
    },

    #[error("invalid roster: {0}")]
    InvalidRoster(&'static str),

    #[error("session already finished")]
    SessionFinished,
}

pub type Result<T> = std::result::Result<T, BowlingError>;
