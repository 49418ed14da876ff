#![forbid(unsafe_code)]

//! Terminal session lifecycle and presentation.
//!
//! [`TerminalSession`] owns the terminal for its lifetime: raw mode plus
//! the alternate screen with a hidden cursor on entry, full restore on
//! drop — including drops on error paths, so a panicking frame never
//! leaves the user's shell in raw mode.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{
    Attribute, Color as CtColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use unicode_width::UnicodeWidthChar;

use crate::buffer::Buffer;
use crate::error::Result;
use crate::style::{Color, Style};

fn backend_color(color: Color) -> CtColor {
    match color {
        Color::Black => CtColor::Black,
        Color::Red => CtColor::Red,
        Color::Green => CtColor::Green,
        Color::Yellow => CtColor::Yellow,
        Color::Blue => CtColor::Blue,
        Color::Magenta => CtColor::Magenta,
        Color::Cyan => CtColor::Cyan,
        Color::White => CtColor::White,
        Color::DarkGray => CtColor::DarkGrey,
        Color::Gray => CtColor::Grey,
        Color::Rgb(r, g, b) => CtColor::Rgb { r, g, b },
    }
}

/// RAII guard over the live terminal.
pub struct TerminalSession {
    out: Stdout,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        tracing::debug!(message = "terminal.enter");
        Ok(Self { out })
    }

    /// Current terminal dimensions.
    pub fn size(&self) -> Result<(u16, u16)> {
        Ok(crossterm::terminal::size()?)
    }

    /// Present `next`, redrawing only the rows that differ from `prev`.
    /// With no previous frame every row is drawn.
    pub fn present(&mut self, next: &Buffer, prev: Option<&Buffer>) -> Result<()> {
        let rows: Vec<u16> = match prev {
            Some(prev) => next.diff_rows(prev),
            None => (0..next.height()).collect(),
        };
        for y in &rows {
            self.present_row(next, *y)?;
        }
        if !rows.is_empty() {
            queue!(self.out, SetAttribute(Attribute::Reset), ResetColor)?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn present_row(&mut self, buffer: &Buffer, y: u16) -> Result<()> {
        queue!(self.out, MoveTo(0, y))?;
        let mut current: Option<Style> = None;
        let mut skip = 0u16;
        for cell in buffer.row(y) {
            if skip > 0 {
                // Continuation column of a wide glyph; the glyph already
                // covers it on screen.
                skip -= 1;
                continue;
            }
            if current != Some(cell.style) {
                self.apply_style(cell.style)?;
                current = Some(cell.style);
            }
            queue!(self.out, Print(cell.ch))?;
            skip = (cell.ch.width().unwrap_or(1) as u16).saturating_sub(1);
        }
        Ok(())
    }

    fn apply_style(&mut self, style: Style) -> Result<()> {
        queue!(self.out, SetAttribute(Attribute::Reset), ResetColor)?;
        if let Some(fg) = style.fg {
            queue!(self.out, SetForegroundColor(backend_color(fg)))?;
        }
        if let Some(bg) = style.bg {
            queue!(self.out, SetBackgroundColor(backend_color(bg)))?;
        }
        if style.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            queue!(self.out, SetAttribute(Attribute::Dim))?;
        }
        if style.underline {
            queue!(self.out, SetAttribute(Attribute::Underlined))?;
        }
        if style.reversed {
            queue!(self.out, SetAttribute(Attribute::Reverse))?;
        }
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Restoration is best-effort; there is nowhere left to report to.
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        tracing::debug!(message = "terminal.exit");
    }
}
