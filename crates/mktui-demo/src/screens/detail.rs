#![forbid(unsafe_code)]

//! Item detail view: one item, one action.

use mktui_model::{Cart, Item};
use mktui_term::{Event, Frame, KeyCode, Rect};
use mktui_widgets::{Line, Paragraph, Span, Text, Widget};

use super::{Handled, HelpEntry, Screen};
use crate::theme;

/// Detail view for a single catalog item, holding the shared cart
/// handle it mutates.
pub struct ItemDetail {
    cart: Cart,
    item: Item,
}

impl ItemDetail {
    #[must_use]
    pub fn new(cart: Cart, item: Item) -> Self {
        Self { cart, item }
    }

    #[must_use]
    pub fn item(&self) -> &Item {
        &self.item
    }

    fn add_to_cart(&self) {
        tracing::debug!(message = "detail.add", item = %self.item.name());
        self.cart.add(self.item.clone());
    }
}

impl Screen for ItemDetail {
    fn update(&mut self, event: &Event) -> Handled {
        let Event::Key(key) = event else {
            return Handled::No;
        };
        match key.code {
            KeyCode::Enter | KeyCode::Char('a') => {
                self.add_to_cart();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let in_cart = self.cart.count_of(self.item.id());
        let lines = vec![
            Line::styled(self.item.name().to_string(), theme::title()),
            Line::from_spans([
                Span::styled("Price: ", theme::muted()),
                Span::styled(format!("{:.2}", self.item.price()), theme::price()),
            ]),
            Line::from_spans([
                Span::styled("In cart: ", theme::muted()),
                Span::styled(in_cart.to_string(), theme::body()),
            ]),
            Line::default(),
            Line::from_spans([
                Span::styled("[Enter]", theme::title()),
                Span::styled(" add to cart   ", theme::muted()),
                Span::styled("[Esc]", theme::title()),
                Span::styled(" back", theme::muted()),
            ]),
        ];
        Paragraph::new(Text::from_lines(lines)).render(area, frame);
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![
            HelpEntry {
                key: "Enter",
                action: "Add to cart",
            },
            HelpEntry {
                key: "Esc",
                action: "Back",
            },
        ]
    }

    fn title(&self) -> &'static str {
        "Item"
    }

    fn tab_label(&self) -> &'static str {
        "Item"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mktui_term::KeyEvent;

    fn detail() -> (Cart, ItemDetail) {
        let cart = Cart::empty();
        let screen = ItemDetail::new(cart.clone(), Item::new("Cabbage", 1.0));
        (cart, screen)
    }

    #[test]
    fn enter_adds_the_item() {
        let (cart, mut screen) = detail();
        let event = Event::Key(KeyEvent::new(KeyCode::Enter));
        assert_eq!(screen.update(&event), Handled::Yes);
        assert_eq!(screen.update(&event), Handled::Yes);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0].name(), "Cabbage");
    }

    #[test]
    fn esc_is_left_for_the_caller() {
        let (_cart, mut screen) = detail();
        let event = Event::Key(KeyEvent::new(KeyCode::Esc));
        assert_eq!(screen.update(&event), Handled::No);
    }

    #[test]
    fn view_shows_name_price_and_count() {
        let (cart, screen) = detail();
        cart.add(Item::new("Cabbage", 1.0));
        let mut frame = Frame::new(30, 6);
        screen.view(&mut frame, Rect::new(0, 0, 30, 6));
        assert!(frame.buffer.row_text(0).contains("Cabbage"));
        assert!(frame.buffer.row_text(1).contains("1.00"));
        assert!(frame.buffer.row_text(2).contains("In cart: 1"));
    }
}
