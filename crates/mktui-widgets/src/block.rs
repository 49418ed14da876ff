#![forbid(unsafe_code)]

//! Bordered container with an optional title.

use mktui_term::{Frame, Rect, Style};

use crate::Widget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderType {
    #[default]
    Plain,
    Rounded,
}

impl BorderType {
    /// `(top_left, top_right, bottom_left, bottom_right, horizontal, vertical)`
    const fn glyphs(self) -> (char, char, char, char, char, char) {
        match self {
            BorderType::Plain => ('┌', '┐', '└', '┘', '─', '│'),
            BorderType::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Block {
    title: Option<String>,
    title_style: Style,
    border_type: BorderType,
    border_style: Style,
}

impl Block {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    #[must_use]
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// The drawable area inside the border. Empty when the block does
    /// not fit a border at all.
    #[must_use]
    pub fn inner(&self, area: Rect) -> Rect {
        area.inner(1)
    }
}

impl Widget for Block {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.width < 2 || area.height < 2 {
            return;
        }
        let (top_left, top_right, bottom_left, bottom_right, horizontal, vertical) =
            self.border_type.glyphs();
        let right = area.right() - 1;
        let bottom = area.bottom() - 1;

        for x in area.x + 1..right {
            frame.buffer.set(x, area.y, horizontal, self.border_style);
            frame.buffer.set(x, bottom, horizontal, self.border_style);
        }
        for y in area.y + 1..bottom {
            frame.buffer.set(area.x, y, vertical, self.border_style);
            frame.buffer.set(right, y, vertical, self.border_style);
        }
        frame.buffer.set(area.x, area.y, top_left, self.border_style);
        frame.buffer.set(right, area.y, top_right, self.border_style);
        frame.buffer.set(area.x, bottom, bottom_left, self.border_style);
        frame.buffer.set(right, bottom, bottom_right, self.border_style);

        if let Some(title) = &self.title {
            frame
                .buffer
                .set_string(area.x + 1, area.y, title, self.title_style, right);
        }
    }
}
