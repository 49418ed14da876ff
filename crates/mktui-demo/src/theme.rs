#![forbid(unsafe_code)]

//! Shared styles for the demo screens.

use mktui_term::{Color, Style};

#[must_use]
pub fn title() -> Style {
    Style::new().fg(Color::Cyan).bold()
}

#[must_use]
pub fn body() -> Style {
    Style::new()
}

#[must_use]
pub fn muted() -> Style {
    Style::new().fg(Color::DarkGray)
}

#[must_use]
pub fn price() -> Style {
    Style::new().fg(Color::Green)
}

#[must_use]
pub fn border() -> Style {
    Style::new().fg(Color::DarkGray)
}

#[must_use]
pub fn highlight() -> Style {
    Style::new().fg(Color::Black).bg(Color::Cyan)
}

#[must_use]
pub fn tab_bar() -> Style {
    Style::new().fg(Color::Gray)
}

#[must_use]
pub fn tab_active() -> Style {
    Style::new().fg(Color::Cyan).bold()
}

#[must_use]
pub fn total() -> Style {
    Style::new().bold()
}

#[must_use]
pub fn status() -> Style {
    Style::new().fg(Color::Yellow)
}
