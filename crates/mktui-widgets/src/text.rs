#![forbid(unsafe_code)]

//! Styled text runs.

use mktui_term::{Frame, Style};
use unicode_width::UnicodeWidthStr;

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    pub content: String,
    pub style: Style,
}

impl Span {
    #[must_use]
    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: Style::default(),
        }
    }

    #[must_use]
    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }

    /// Display width in terminal columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.content.as_str().width()
    }
}

/// One row of spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    #[must_use]
    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::raw(content)],
        }
    }

    #[must_use]
    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Self {
            spans: vec![Span::styled(content, style)],
        }
    }

    #[must_use]
    pub fn from_spans(spans: impl IntoIterator<Item = Span>) -> Self {
        Self {
            spans: spans.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }
}

/// A block of lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    pub lines: Vec<Line>,
}

impl Text {
    #[must_use]
    pub fn from_line(line: Line) -> Self {
        Self { lines: vec![line] }
    }

    #[must_use]
    pub fn from_lines(lines: impl IntoIterator<Item = Line>) -> Self {
        Self {
            lines: lines.into_iter().collect(),
        }
    }

    /// Number of rows this text wants.
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

/// Draw one line at `(x, y)`, clipped to `limit`. Span styles are merged
/// over `base`. Returns the column after the last cell written.
pub fn draw_line(frame: &mut Frame, x: u16, y: u16, line: &Line, base: Style, limit: u16) -> u16 {
    let mut x = x;
    for span in &line.spans {
        if x >= limit {
            break;
        }
        let style = base.merge(&span.style);
        x = frame.buffer.set_string(x, y, &span.content, style, limit);
    }
    x
}
