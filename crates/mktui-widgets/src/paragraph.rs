#![forbid(unsafe_code)]

//! Multi-line text widget. Lines are clipped, not wrapped; nothing in
//! this app needs wrapping.

use mktui_term::{Frame, Rect, Style};

use crate::text::{Text, draw_line};
use crate::Widget;

#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    text: Text,
    style: Style,
}

impl Paragraph {
    #[must_use]
    pub fn new(text: Text) -> Self {
        Self {
            text,
            style: Style::default(),
        }
    }

    /// Base style merged under every span.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for Paragraph {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }
        for (offset, line) in self.text.lines.iter().enumerate() {
            if offset as u16 >= area.height {
                break;
            }
            draw_line(
                frame,
                area.x,
                area.y + offset as u16,
                line,
                self.style,
                area.right(),
            );
        }
    }
}
