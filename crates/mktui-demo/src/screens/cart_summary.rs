#![forbid(unsafe_code)]

//! Cart summary screen: contents in add order plus the running total.

use std::cell::RefCell;

use mktui_model::Cart;
use mktui_term::{Constraint, Event, Flex, Frame, KeyCode, Rect};
use mktui_widgets::{
    Block, BorderType, Line, List, ListState, Paragraph, Span, StatefulWidget, Text, Widget,
};

use super::{Handled, HelpEntry, Screen};
use crate::theme;

pub struct CartScreen {
    cart: Cart,
    state: RefCell<ListState>,
}

impl CartScreen {
    #[must_use]
    pub fn new(cart: Cart) -> Self {
        Self {
            cart,
            state: RefCell::new(ListState::default()),
        }
    }

    fn rows(&self) -> Vec<Line> {
        // Entries are keyed by position: duplicate names are distinct
        // rows and stay that way.
        self.cart.with_items(|items| {
            items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    Line::from_spans([
                        Span::styled(format!("{:>2}. ", index + 1), theme::muted()),
                        Span::styled(item.name().to_string(), theme::body()),
                        Span::raw("  "),
                        Span::styled(format!("{:.2}", item.price()), theme::price()),
                    ])
                })
                .collect()
        })
    }
}

impl Screen for CartScreen {
    fn update(&mut self, event: &Event) -> Handled {
        let Event::Key(key) = event else {
            return Handled::No;
        };
        let len = self.cart.len();
        if len == 0 {
            return Handled::No;
        }
        match key.code {
            KeyCode::Up => {
                self.state.borrow_mut().select_previous(len);
                Handled::Yes
            }
            KeyCode::Down => {
                self.state.borrow_mut().select_next(len);
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let block = Block::new()
            .title("Cart")
            .title_style(theme::title())
            .border_type(BorderType::Rounded)
            .border_style(theme::border());
        block.render(area, frame);
        let inner = block.inner(area);
        if inner.is_empty() {
            return;
        }

        if self.cart.is_empty() {
            Paragraph::new(Text::from_line(Line::styled(
                "Cart is empty - add items from the inventory",
                theme::muted(),
            )))
            .render(inner, frame);
            return;
        }

        let rows = Flex::vertical()
            .constraints([Constraint::Min(1), Constraint::Fixed(1)])
            .split(inner);

        let list = List::new(self.rows())
            .highlight_symbol("> ")
            .highlight_style(theme::highlight());
        let mut state = self.state.borrow_mut();
        StatefulWidget::render(&list, rows[0], frame, &mut state);

        // The total is recomputed from the items on every render.
        let total = Line::from_spans([
            Span::styled("Total: ", theme::muted()),
            Span::styled(format!("{:.2}", self.cart.total()), theme::total()),
        ]);
        Paragraph::new(Text::from_line(total)).render(rows[1], frame);
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![HelpEntry {
            key: "Up/Down",
            action: "Scroll",
        }]
    }

    fn title(&self) -> &'static str {
        "Cart"
    }

    fn tab_label(&self) -> &'static str {
        "Cart"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mktui_model::Item;
    use mktui_term::KeyEvent;

    #[test]
    fn empty_cart_shows_the_hint_and_no_total() {
        let screen = CartScreen::new(Cart::empty());
        let mut frame = Frame::new(40, 6);
        screen.view(&mut frame, Rect::new(0, 0, 40, 6));
        assert!(frame.buffer.row_text(1).contains("Cart is empty"));
        let all: String = (0..6).map(|y| frame.buffer.row_text(y)).collect();
        assert!(!all.contains("Total"));
    }

    #[test]
    fn rows_are_position_keyed_and_total_is_summed() {
        let cart = Cart::empty();
        cart.add(Item::new("Cabbage", 1.0));
        cart.add(Item::new("Cabbage", 1.0));
        let screen = CartScreen::new(cart);
        let mut frame = Frame::new(40, 7);
        screen.view(&mut frame, Rect::new(0, 0, 40, 7));
        assert!(frame.buffer.row_text(1).contains("1. Cabbage"));
        assert!(frame.buffer.row_text(2).contains("2. Cabbage"));
        assert!(frame.buffer.row_text(5).contains("Total: 2.00"));
    }

    #[test]
    fn scrolling_needs_contents() {
        let cart = Cart::empty();
        let mut screen = CartScreen::new(cart.clone());
        let down = Event::Key(KeyEvent::new(KeyCode::Down));
        assert_eq!(screen.update(&down), Handled::No);
        cart.add(Item::new("Pikles", 0.5));
        assert_eq!(screen.update(&down), Handled::Yes);
    }
}
