//! ScoreboardView: lays a `core::Scoreboard` out as styled text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{PlayerSnapshot, Scoreboard};
use crate::types::{pins_after, FRAMES_PER_GAME, PINS_PER_RACK};

/// How a line should be emphasised when printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Player name row.
    Name,
    /// Player name row for a winner.
    Winner,
    /// Frame grid rows.
    Grid,
    /// Status and result rows.
    Summary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
}

impl Line {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Text layout for a scoreboard.
pub struct ScoreboardView {
    /// Width of one frame column, in terminal columns.
    cell_w: usize,
}

impl Default for ScoreboardView {
    fn default() -> Self {
        // Wide enough for a three-roll tenth frame ("X 7 2").
        Self { cell_w: 5 }
    }
}

impl ScoreboardView {
    pub fn new(cell_w: usize) -> Self {
        Self {
            cell_w: cell_w.max(5),
        }
    }

    pub fn render(&self, board: &Scoreboard) -> Vec<Line> {
        let mut lines = Vec::new();

        for player in &board.players {
            lines.extend(self.render_player(player));
            lines.push(Line::new("", LineStyle::Grid));
        }

        if board.finished {
            let label = if board.winners.len() > 1 {
                "Winners"
            } else {
                "Winner"
            };
            lines.push(Line::new(
                format!("{}: {}", label, board.winners.join(", ")),
                LineStyle::Summary,
            ));
        } else {
            lines.push(Line::new(
                format!("Frame {} of {} up next", board.frame_number, FRAMES_PER_GAME),
                LineStyle::Summary,
            ));
        }

        lines
    }

    fn render_player(&self, player: &PlayerSnapshot) -> [Line; 4] {
        let name = if player.winner {
            Line::new(
                format!("{}  total {}  (winner)", player.name, player.total),
                LineStyle::Winner,
            )
        } else {
            Line::new(
                format!("{}  total {}", player.name, player.total),
                LineStyle::Name,
            )
        };

        let mut frames = String::from("frame |");
        let mut rolls = String::from("rolls |");
        let mut score = String::from("score |");
        for n in 1..=FRAMES_PER_GAME {
            let played = player.frames.iter().find(|f| f.number == n);
            frames.push_str(&self.cell(&n.to_string()));
            rolls.push_str(&self.cell(&played.map(|f| roll_marks(&f.rolls)).unwrap_or_default()));
            score.push_str(
                &self.cell(&played.map(|f| f.running.to_string()).unwrap_or_default()),
            );
        }

        [
            name,
            Line::new(frames, LineStyle::Grid),
            Line::new(rolls, LineStyle::Grid),
            Line::new(score, LineStyle::Grid),
        ]
    }

    fn cell(&self, content: &str) -> String {
        format!("{:^width$}|", content, width = self.cell_w)
    }
}

/// Scoreboard marks for a frame's rolls: `X` strike, `/` spare, `-` miss.
///
/// The rack is tracked roll by roll, so bonus rolls in the tenth frame are
/// marked against the pins actually standing.
pub fn roll_marks(rolls: &[u8]) -> String {
    let mut standing = PINS_PER_RACK;
    let mut fresh_rack = true;
    let mut marks = Vec::with_capacity(rolls.len());
    for &rolled in rolls {
        let cleared = rolled == standing;
        let mark = if cleared && fresh_rack {
            "X".to_string()
        } else if cleared {
            "/".to_string()
        } else if rolled == 0 {
            "-".to_string()
        } else {
            rolled.to_string()
        };
        marks.push(mark);
        standing = pins_after(standing, rolled);
        fresh_rack = cleared;
    }
    marks.join(" ")
}
