//! Scoring module - flat-bonus frame scoring and per-player accumulation
//!
//! Compatibility note:
//! Bonuses are credited when a frame completes and never look at later rolls:
//! - A strike scores its pins plus `STRIKE_BONUS` (10).
//! - A spare scores its pins plus `SPARE_BONUS` (5).
//! - An open frame scores its pins.
//!
//! This is a deliberate simplification of league scoring, where a strike is
//! worth the next two rolls and a spare the next one. An earlier revision of
//! the game credited a flat 20 per strike and 15 per spare during the roll
//! loop; those totals are not reproduced here.

use log::debug;

use crate::frame::Frame;
use crate::types::{FrameKind, INITIAL_SCORE};

/// Score breakdown for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameScore {
    pub kind: FrameKind,
    /// Pins knocked down across every roll of the frame.
    pub pins: u32,
    /// Flat bonus for a strike or spare.
    pub bonus: u32,
    pub total: u32,
}

/// Calculate the score for a single frame
pub fn calculate_frame_score(frame: &Frame) -> u32 {
    score_frame(frame).total
}

/// Calculate the score for a single frame with its breakdown
pub fn score_frame(frame: &Frame) -> FrameScore {
    let kind = frame.kind();
    let pins = frame.pins();
    let bonus = kind.bonus();
    FrameScore {
        kind,
        pins,
        bonus,
        total: pins + bonus,
    }
}

/// Running score for one player: completed frames and the total after each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreCard {
    frames: Vec<Frame>,
    running: Vec<u32>,
    total: u32,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            running: Vec::new(),
            total: INITIAL_SCORE,
        }
    }

    /// Append a completed frame and extend the running total.
    pub fn record(&mut self, frame: Frame) -> FrameScore {
        let score = score_frame(&frame);
        self.total += score.total;
        debug!(
            "frame {} {:?} ({}) scored {} -> running {}",
            frame.number(),
            frame.rolls(),
            score.kind,
            score.total,
            self.total
        );
        self.frames.push(frame);
        self.running.push(self.total);
        score
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Cumulative score after each completed frame
    pub fn running_scores(&self) -> &[u32] {
        &self.running
    }

    pub fn frames_played(&self) -> usize {
        self.frames.len()
    }
}

impl FromIterator<Frame> for ScoreCard {
    fn from_iter<I: IntoIterator<Item = Frame>>(iter: I) -> Self {
        let mut card = ScoreCard::new();
        for frame in iter {
            card.record(frame);
        }
        card
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FrameNumber;

    fn frame(n: u8, rolls: &[u8]) -> Frame {
        Frame::from_rolls(FrameNumber::new(n).unwrap(), rolls).unwrap()
    }

    #[test]
    fn test_open_spare_strike_scores() {
        assert_eq!(calculate_frame_score(&frame(1, &[3, 4])), 7);
        assert_eq!(calculate_frame_score(&frame(1, &[4, 6])), 15);
        assert_eq!(calculate_frame_score(&frame(1, &[10])), 20);
        assert_eq!(calculate_frame_score(&frame(1, &[0, 0])), 0);
    }

    #[test]
    fn test_final_frame_scores() {
        // Strike then 7,2 on a fresh rack.
        assert_eq!(calculate_frame_score(&frame(10, &[10, 7, 2])), 29);
        assert_eq!(calculate_frame_score(&frame(10, &[10, 10, 10])), 40);
        assert_eq!(calculate_frame_score(&frame(10, &[4, 6, 10])), 25);
        assert_eq!(calculate_frame_score(&frame(10, &[4, 5])), 9);
    }

    #[test]
    fn test_breakdown() {
        let score = score_frame(&frame(5, &[4, 6]));
        assert_eq!(
            score,
            FrameScore {
                kind: FrameKind::Spare,
                pins: 10,
                bonus: 5,
                total: 15,
            }
        );
    }

    #[test]
    fn test_score_never_below_pins() {
        let frames = [
            frame(1, &[10]),
            frame(2, &[9, 1]),
            frame(3, &[9, 0]),
            frame(10, &[0, 10, 3]),
            frame(10, &[1, 2]),
        ];
        for f in &frames {
            let total = calculate_frame_score(f);
            assert!(total >= f.pins());
            assert_eq!(total == f.pins(), f.kind() == FrameKind::Open);
        }
    }

    #[test]
    fn test_score_card_running_totals() {
        let card: ScoreCard = [frame(1, &[10]), frame(2, &[4, 6]), frame(3, &[3, 4])]
            .into_iter()
            .collect();
        assert_eq!(card.running_scores(), &[20, 35, 42]);
        assert_eq!(card.total(), 42);
        assert_eq!(card.frames_played(), 3);
    }

    #[test]
    fn test_empty_card() {
        let card = ScoreCard::new();
        assert_eq!(card.total(), INITIAL_SCORE);
        assert!(card.frames().is_empty());
        assert!(card.running_scores().is_empty());
    }
}
