#![forbid(unsafe_code)]

//! Property tests for list selection and scrolling.

use mktui_widgets::text::Line;
use mktui_widgets::{List, ListState, StatefulWidget};
use mktui_term::{Frame, Rect};
use proptest::prelude::*;

proptest! {
    /// After a render, the selection is a valid index and sits inside
    /// the visible window.
    #[test]
    fn selection_stays_visible(
        len in 1usize..40,
        selected in 0usize..60,
        offset in 0usize..60,
        height in 1u16..12,
    ) {
        let list = List::new((0..len).map(|i| Line::raw(format!("row{i}"))));
        let mut state = ListState {
            selected: Some(selected),
            offset,
        };
        let mut frame = Frame::new(16, height);
        StatefulWidget::render(&list, Rect::new(0, 0, 16, height), &mut frame, &mut state);

        let selected = state.selected.expect("selection survives render");
        prop_assert!(selected < len);
        prop_assert!(state.offset <= selected);
        prop_assert!(selected < state.offset + usize::from(height));
    }

    /// Walking the selection down one step at a time visits every row
    /// in order and never skips.
    #[test]
    fn select_next_walks_in_order(len in 1usize..30) {
        let mut state = ListState::default();
        for expected in 0..len {
            state.select_next(len);
            prop_assert_eq!(state.selected, Some(expected));
        }
        state.select_next(len);
        prop_assert_eq!(state.selected, Some(len - 1));
    }
}
