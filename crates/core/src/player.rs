//! Player module - a bowler's name and score card.

use crate::frame::Frame;
use crate::scoring::{FrameScore, ScoreCard};

/// A bowler seated in a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    card: ScoreCard,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            card: ScoreCard::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cumulative score over every completed frame
    pub fn score(&self) -> u32 {
        self.card.total()
    }

    /// Rolls of each completed frame, in order
    pub fn frames(&self) -> &[Frame] {
        self.card.frames()
    }

    /// Cumulative score after each completed frame
    pub fn running_scores(&self) -> &[u32] {
        self.card.running_scores()
    }

    pub fn card(&self) -> &ScoreCard {
        &self.card
    }

    /// Only the owning session records frames.
    pub(crate) fn record(&mut self, frame: Frame) -> FrameScore {
        self.card.record(frame)
    }
}
