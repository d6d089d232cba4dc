//! Renderer: prints scoreboard lines to a terminal (or any writer).

use std::io::Write;

use anyhow::{Context, Result};

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::core::Scoreboard;
use crate::scoreboard_view::{Line, LineStyle, ScoreboardView};

/// Print a scoreboard to `out`, styled unless `color` is false.
pub fn print_scoreboard<W: Write>(out: &mut W, board: &Scoreboard, color: bool) -> Result<()> {
    let mut buf = Vec::with_capacity(4 * 1024);
    for line in ScoreboardView::default().render(board) {
        encode_line_into(&line, color, &mut buf)?;
    }
    out.write_all(&buf).context("writing scoreboard")?;
    out.flush().context("flushing scoreboard")?;
    Ok(())
}

/// Encode one line into `out`, followed by a newline.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_line_into(line: &Line, color: bool, out: &mut Vec<u8>) -> Result<()> {
    if !color {
        out.queue(Print(&line.text))?;
        out.queue(Print("\n"))?;
        return Ok(());
    }

    match line.style {
        LineStyle::Name => {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        LineStyle::Winner => {
            out.queue(SetForegroundColor(Color::Yellow))?;
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        LineStyle::Grid => {}
        LineStyle::Summary => {
            out.queue(SetForegroundColor(Color::Green))?;
        }
    }
    out.queue(Print(&line.text))?;
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(Print("\n"))?;
    Ok(())
}
