use serde::Serialize;

use crate::player::Player;
use crate::scoring::score_frame;
use crate::session::winners;
use crate::types::FINISHED_FRAME;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameSnapshot {
    pub number: u8,
    pub rolls: Vec<u8>,
    pub kind: &'static str,
    pub score: u32,
    pub running: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub frames: Vec<FrameSnapshot>,
    pub total: u32,
    pub winner: bool,
}

impl PlayerSnapshot {
    /// Rolls of each frame, in the shape the scoreboard prints them.
    pub fn rolls(&self) -> Vec<&[u8]> {
        self.frames.iter().map(|f| f.rolls.as_slice()).collect()
    }

    pub fn running_scores(&self) -> Vec<u32> {
        self.frames.iter().map(|f| f.running).collect()
    }
}

/// Point-in-time view of every player's card, detached from the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    /// Frame about to be bowled, 11 once finished.
    pub frame_number: u8,
    pub finished: bool,
    pub players: Vec<PlayerSnapshot>,
    pub winners: Vec<String>,
}

impl Scoreboard {
    pub fn new(players: &[Player], frame_number: u8) -> Self {
        let best = winners(players);

        let snapshots = players
            .iter()
            .map(|player| PlayerSnapshot {
                name: player.name().to_string(),
                frames: player
                    .frames()
                    .iter()
                    .zip(player.running_scores())
                    .map(|(frame, &running)| {
                        let score = score_frame(frame);
                        FrameSnapshot {
                            number: frame.number().get(),
                            rolls: frame.rolls().to_vec(),
                            kind: score.kind.as_str(),
                            score: score.total,
                            running,
                        }
                    })
                    .collect(),
                total: player.score(),
                // Names are not unique, so match on identity rather than name.
                winner: best.iter().any(|w| std::ptr::eq(*w, player)),
            })
            .collect();

        Self {
            frame_number,
            finished: frame_number == FINISHED_FRAME,
            players: snapshots,
            winners: best.iter().map(|p| p.name().to_string()).collect(),
        }
    }

    /// Build a final scoreboard from players handed back by a finished session.
    pub fn finished(players: &[Player]) -> Self {
        Self::new(players, FINISHED_FRAME)
    }

    pub fn player(&self, name: &str) -> Option<&PlayerSnapshot> {
        self.players.iter().find(|p| p.name == name)
    }
}
