#![forbid(unsafe_code)]

//! Scrolling selection list.

use mktui_term::{Frame, Rect, Style};
use unicode_width::UnicodeWidthStr;

use crate::text::{Line, draw_line};
use crate::{StatefulWidget, Widget};

/// Caller-owned selection and scroll state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    /// Selected row, if any.
    pub selected: Option<usize>,
    /// First visible row.
    pub offset: usize,
}

impl ListState {
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    /// Move selection down one row, clamped to the last row. Selects the
    /// first row when nothing is selected yet.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(current) => (current + 1).min(len - 1),
            None => 0,
        });
    }

    /// Move selection up one row, clamped to the first row.
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(current) => current.saturating_sub(1),
            None => 0,
        });
    }

    fn scroll_into_view(&mut self, len: usize, viewport: usize) {
        if viewport == 0 || len == 0 {
            self.offset = 0;
            return;
        }
        self.offset = self.offset.min(len.saturating_sub(1));
        if let Some(selected) = self.selected {
            let selected = selected.min(len - 1);
            if selected < self.offset {
                self.offset = selected;
            } else if selected >= self.offset + viewport {
                self.offset = selected + 1 - viewport;
            }
        }
    }
}

/// The list widget itself; rows are pre-built [`Line`]s.
#[derive(Debug, Clone, Default)]
pub struct List {
    items: Vec<Line>,
    style: Style,
    highlight_style: Style,
    highlight_symbol: String,
}

impl List {
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = Line>) -> Self {
        Self {
            items: items.into_iter().collect(),
            style: Style::default(),
            highlight_style: Style::default(),
            highlight_symbol: String::new(),
        }
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }

    /// Prefix drawn in front of the selected row; other rows are padded
    /// to keep columns aligned.
    #[must_use]
    pub fn highlight_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.highlight_symbol = symbol.into();
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl StatefulWidget for List {
    type State = ListState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        if area.is_empty() || self.items.is_empty() {
            return;
        }
        if let Some(selected) = state.selected {
            state.selected = Some(selected.min(self.items.len() - 1));
        }
        state.scroll_into_view(self.items.len(), usize::from(area.height));

        let gutter = self.highlight_symbol.as_str().width() as u16;
        for (row, index) in (state.offset..self.items.len()).enumerate() {
            let row = row as u16;
            if row >= area.height {
                break;
            }
            let y = area.y + row;
            let is_selected = state.selected == Some(index);
            let row_style = if is_selected {
                self.style.merge(&self.highlight_style)
            } else {
                self.style
            };
            if is_selected {
                frame.buffer.set_style(area.row(row), row_style);
            }
            let mut x = area.x;
            if gutter > 0 {
                let prefix = if is_selected {
                    self.highlight_symbol.clone()
                } else {
                    " ".repeat(usize::from(gutter))
                };
                x = frame
                    .buffer
                    .set_string(x, y, &prefix, row_style, area.right());
            }
            draw_line(frame, x, y, &self.items[index], row_style, area.right());
        }
    }
}

impl Widget for List {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let mut state = ListState::default();
        StatefulWidget::render(self, area, frame, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mktui_term::Color;

    fn items(n: usize) -> Vec<Line> {
        (0..n).map(|i| Line::raw(format!("item{i}"))).collect()
    }

    #[test]
    fn selection_moves_and_clamps() {
        let mut state = ListState::default();
        state.select_next(3);
        assert_eq!(state.selected, Some(0));
        state.select_next(3);
        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.selected, Some(2));
        state.select_previous(3);
        assert_eq!(state.selected, Some(1));
        state.select_previous(3);
        state.select_previous(3);
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn empty_list_clears_selection() {
        let mut state = ListState::default();
        state.select_next(0);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn renders_highlight_symbol_on_selected_row() {
        let list = List::new(items(3))
            .highlight_symbol("> ")
            .highlight_style(Style::new().fg(Color::Yellow));
        let mut state = ListState::default();
        state.select(Some(1));
        let mut frame = Frame::new(10, 3);
        StatefulWidget::render(&list, Rect::new(0, 0, 10, 3), &mut frame, &mut state);
        assert_eq!(frame.buffer.row_text(0), "  item0   ");
        assert_eq!(frame.buffer.row_text(1), "> item1   ");
        let cell = frame.buffer.get(0, 1).copied().unwrap();
        assert_eq!(cell.style.fg, Some(Color::Yellow));
    }

    #[test]
    fn scrolls_selected_row_into_view() {
        let list = List::new(items(10));
        let mut state = ListState::default();
        state.select(Some(7));
        let mut frame = Frame::new(10, 3);
        StatefulWidget::render(&list, Rect::new(0, 0, 10, 3), &mut frame, &mut state);
        assert_eq!(state.offset, 5);
        assert_eq!(frame.buffer.row_text(0), "item5     ");
        assert_eq!(frame.buffer.row_text(2), "item7     ");

        state.select(Some(2));
        let mut frame = Frame::new(10, 3);
        StatefulWidget::render(&list, Rect::new(0, 0, 10, 3), &mut frame, &mut state);
        assert_eq!(state.offset, 2);
        assert_eq!(frame.buffer.row_text(0), "item2     ");
    }

    #[test]
    fn stale_selection_is_clamped_to_len() {
        let list = List::new(items(2));
        let mut state = ListState {
            selected: Some(9),
            offset: 0,
        };
        let mut frame = Frame::new(10, 4);
        StatefulWidget::render(&list, Rect::new(0, 0, 10, 4), &mut frame, &mut state);
        assert_eq!(state.selected, Some(1));
    }
}
