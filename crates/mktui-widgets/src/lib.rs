#![forbid(unsafe_code)]

//! Widgets for the marketui demo.
//!
//! Everything renders into a [`Frame`](mktui_term::Frame) over a
//! caller-supplied [`Rect`](mktui_term::Rect); widgets hold no screen
//! state of their own. Stateful widgets (list, tabs) take their state by
//! mutable reference so selection and scrolling live with the caller.

pub mod block;
pub mod list;
pub mod paragraph;
pub mod tabs;
pub mod text;

use mktui_term::{Frame, Rect};

pub use block::{Block, BorderType};
pub use list::{List, ListState};
pub use paragraph::Paragraph;
pub use tabs::{Tabs, TabsState};
pub use text::{Line, Span, Text, draw_line};

/// A stateless renderable.
pub trait Widget {
    fn render(&self, area: Rect, frame: &mut Frame);
}

/// A renderable with caller-owned state.
pub trait StatefulWidget {
    type State;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State);
}
