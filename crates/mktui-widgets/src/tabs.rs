#![forbid(unsafe_code)]

//! Tab bar with keyboard switching.

use mktui_term::{Frame, KeyCode, KeyEvent, Rect, Style};

use crate::{StatefulWidget, Widget};

/// Caller-owned active-tab state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabsState {
    /// Active tab index.
    pub active: usize,
}

impl TabsState {
    /// Select a specific tab. Returns whether the active tab changed.
    pub fn select(&mut self, index: usize, tab_count: usize) -> bool {
        if tab_count == 0 {
            self.active = 0;
            return false;
        }
        let next = index.min(tab_count - 1);
        if self.active == next {
            return false;
        }
        let from = self.active;
        self.active = next;
        tracing::debug!(message = "tabs.switch", from, to = self.active);
        true
    }

    /// Move one tab right, clamped at the last tab.
    pub fn next(&mut self, tab_count: usize) -> bool {
        if tab_count == 0 {
            return false;
        }
        self.select(self.active.saturating_add(1).min(tab_count - 1), tab_count)
    }

    /// Move one tab left, clamped at the first tab.
    pub fn previous(&mut self, tab_count: usize) -> bool {
        if tab_count == 0 {
            return false;
        }
        self.select(self.active.saturating_sub(1), tab_count)
    }

    /// Keyboard tab switching: `Left`/`Right` plus number keys `1..9`.
    pub fn handle_key(&mut self, key: &KeyEvent, tab_count: usize) -> bool {
        match key.code {
            KeyCode::Left => self.previous(tab_count),
            KeyCode::Right => self.next(tab_count),
            KeyCode::Char(ch) if ('1'..='9').contains(&ch) => {
                let index = ch as usize - '1' as usize;
                if index >= tab_count {
                    false
                } else {
                    self.select(index, tab_count)
                }
            }
            _ => false,
        }
    }
}

/// Single-row tab bar. The active tab is bracketed; this demo has two
/// fixed tabs, so there is no overflow handling.
#[derive(Debug, Clone, Default)]
pub struct Tabs {
    titles: Vec<String>,
    style: Style,
    active_style: Style,
    separator: String,
}

impl Tabs {
    #[must_use]
    pub fn new(titles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            style: Style::default(),
            active_style: Style::default(),
            separator: " ".into(),
        }
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn active_style(mut self, style: Style) -> Self {
        self.active_style = style;
        self
    }

    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    fn label(&self, index: usize, active: bool) -> String {
        let title = &self.titles[index];
        if active {
            format!("[{title}]")
        } else {
            format!(" {title} ")
        }
    }
}

impl StatefulWidget for Tabs {
    type State = TabsState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        if area.is_empty() || self.titles.is_empty() {
            return;
        }
        state.active = state.active.min(self.titles.len() - 1);

        frame.buffer.set_style(area.row(0), self.style);
        let mut x = area.x;
        for index in 0..self.titles.len() {
            if x >= area.right() {
                break;
            }
            if index > 0 && !self.separator.is_empty() {
                x = frame
                    .buffer
                    .set_string(x, area.y, &self.separator, self.style, area.right());
            }
            let active = index == state.active;
            let style = if active {
                self.style.merge(&self.active_style)
            } else {
                self.style
            };
            let label = self.label(index, active);
            x = frame
                .buffer
                .set_string(x, area.y, &label, style, area.right());
        }
    }
}

impl Widget for Tabs {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let mut state = TabsState::default();
        StatefulWidget::render(self, area, frame, &mut state);
    }
}
