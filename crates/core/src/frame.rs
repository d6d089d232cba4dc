//! Frame module - how many rolls a frame takes and what it counts as
//!
//! Frames 1-9 end after a strike or after two rolls. The final frame awards a
//! third roll after a strike or a spare, and re-racks the pins whenever a roll
//! clears them.

use arrayvec::ArrayVec;

use crate::error::{BowlingError, Result};
use crate::rng::PinRoll;
use crate::types::{pins_after, FrameKind, FrameNumber, MAX_ROLLS_PER_FRAME, PINS_PER_RACK};

/// Rolls of a single frame, stored inline.
pub type Rolls = ArrayVec<u8, MAX_ROLLS_PER_FRAME>;

/// A completed frame for one player
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    number: FrameNumber,
    rolls: Rolls,
}

/// Pins standing for the next roll of a frame, or `None` once the frame is complete.
fn next_roll_pins(number: FrameNumber, rolls: &[u8]) -> Option<u8> {
    match *rolls {
        [] => Some(PINS_PER_RACK),
        [first] if first == PINS_PER_RACK && !number.is_final() => None,
        [first] => Some(pins_after(PINS_PER_RACK, first)),
        // Strike or spare in the final frame earns the bonus roll.
        [first, second] if number.is_final() && first + second >= PINS_PER_RACK => {
            Some(pins_after(pins_after(PINS_PER_RACK, first), second))
        }
        _ => None,
    }
}

impl Frame {
    /// Bowl a complete frame, drawing every roll from `source`.
    ///
    /// Each value is checked against the pins standing when it was rolled; a
    /// source that breaks its `[0, pins_standing]` contract fails the frame
    /// instead of being clamped.
    pub fn bowl<R: PinRoll + ?Sized>(number: FrameNumber, source: &mut R) -> Result<Self> {
        let mut rolls = Rolls::new();
        while let Some(pins_standing) = next_roll_pins(number, &rolls) {
            let rolled = source
                .roll(pins_standing)
                .ok_or(BowlingError::RollSourceExhausted { frame: number })?;
            if rolled > pins_standing {
                return Err(BowlingError::InvalidRoll {
                    frame: number,
                    pins_standing,
                    rolled,
                });
            }
            rolls.push(rolled);
        }
        Ok(Self { number, rolls })
    }

    /// Build a frame from already-known rolls, enforcing the same shape rules
    /// as [`Frame::bowl`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bowling_arena_core::Frame;
    /// use bowling_arena_types::FrameNumber;
    ///
    /// let frame = Frame::from_rolls(FrameNumber::LAST, &[10, 7, 2]).unwrap();
    /// assert!(frame.is_strike());
    /// assert!(Frame::from_rolls(FrameNumber::FIRST, &[10, 7, 2]).is_err());
    /// ```
    pub fn from_rolls(number: FrameNumber, rolls: &[u8]) -> Result<Self> {
        let invalid = |reason| BowlingError::InvalidFrame {
            frame: number,
            reason,
        };

        let mut frame = Rolls::new();
        for &rolled in rolls {
            let pins_standing = next_roll_pins(number, &frame).ok_or(invalid("too many rolls"))?;
            if rolled > pins_standing {
                return Err(invalid("roll exceeds pins standing"));
            }
            frame.push(rolled);
        }
        if next_roll_pins(number, &frame).is_some() {
            return Err(invalid("frame is incomplete"));
        }
        Ok(Self {
            number,
            rolls: frame,
        })
    }

    pub fn number(&self) -> FrameNumber {
        self.number
    }

    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Total pins knocked down across every roll of the frame
    pub fn pins(&self) -> u32 {
        self.rolls.iter().map(|&r| r as u32).sum()
    }

    /// First roll cleared the rack.
    pub fn is_strike(&self) -> bool {
        self.rolls.first() == Some(&PINS_PER_RACK)
    }

    /// First two rolls cleared the rack without a strike.
    pub fn is_spare(&self) -> bool {
        matches!(*self.rolls, [first, second, ..] if first != PINS_PER_RACK && first + second == PINS_PER_RACK)
    }

    pub fn kind(&self) -> FrameKind {
        if self.is_strike() {
            FrameKind::Strike
        } else if self.is_spare() {
            FrameKind::Spare
        } else {
            FrameKind::Open
        }
    }
}
