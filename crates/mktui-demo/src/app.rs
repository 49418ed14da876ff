#![forbid(unsafe_code)]

//! The tabbed application shell.
//!
//! Owns the session's single [`Cart`] and the shared [`Store`] handle,
//! composes the two screens as peer tabs, and keeps one live cart
//! subscription for the footer status line — every append is announced
//! through the cart's notification path, not by the key handler that
//! caused it.

use std::cell::RefCell;
use std::rc::Rc;

use mktui_model::{Cart, CartSubscription, Store};
use mktui_term::{App, Cmd, Constraint, Event, Flex, Frame, KeyCode};
use mktui_widgets::{Line, Paragraph, Span, StatefulWidget, Tabs, TabsState, Text, Widget};

use crate::screens::{CartScreen, Handled, InventoryScreen, Screen};
use crate::theme;

/// How many ticks an "added ..." announcement stays on screen.
const STATUS_TICKS: u8 = 12;

#[derive(Debug, Default)]
struct Status {
    message: Option<String>,
    ticks: u8,
}

pub struct AppModel {
    cart: Cart,
    tabs: TabsState,
    inventory: InventoryScreen,
    cart_screen: CartScreen,
    status: Rc<RefCell<Status>>,
    _subscription: CartSubscription,
}

impl AppModel {
    #[must_use]
    pub fn new(store: Rc<dyn Store>, cart: Cart) -> Self {
        let status = Rc::new(RefCell::new(Status::default()));
        let announce = Rc::clone(&status);
        let subscription = cart.subscribe(move |change| {
            let mut status = announce.borrow_mut();
            status.message = Some(format!(
                "Added {} ({} in cart)",
                change.item.name(),
                change.len
            ));
            status.ticks = STATUS_TICKS;
        });

        Self {
            inventory: InventoryScreen::new(store, cart.clone()),
            cart_screen: CartScreen::new(cart.clone()),
            cart,
            tabs: TabsState::default(),
            status,
            _subscription: subscription,
        }
    }

    /// Jump to a tab by index; out-of-range values clamp.
    pub fn select_tab(&mut self, index: usize) {
        self.tabs.select(index, self.tab_count());
    }

    #[must_use]
    pub fn active_tab(&self) -> usize {
        self.tabs.active
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    fn tab_count(&self) -> usize {
        2
    }

    fn active_screen(&self) -> &dyn Screen {
        match self.tabs.active {
            0 => &self.inventory,
            _ => &self.cart_screen,
        }
    }

    fn active_screen_mut(&mut self) -> &mut dyn Screen {
        match self.tabs.active {
            0 => &mut self.inventory,
            _ => &mut self.cart_screen,
        }
    }

    fn cycle_tab(&mut self, backwards: bool) {
        let count = self.tab_count();
        let next = if backwards {
            (self.tabs.active + count - 1) % count
        } else {
            (self.tabs.active + 1) % count
        };
        self.tabs.select(next, count);
    }

    fn footer_line(&self) -> Line {
        let mut spans = Vec::new();
        for (index, entry) in self.active_screen().keybindings().iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" · ", theme::muted()));
            }
            spans.push(Span::styled(entry.key, theme::title()));
            spans.push(Span::styled(format!(" {}", entry.action), theme::muted()));
        }
        spans.push(Span::styled(" · ", theme::muted()));
        spans.push(Span::styled("q", theme::title()));
        spans.push(Span::styled(" quit", theme::muted()));

        let status = self.status.borrow();
        let summary = match &status.message {
            Some(message) => format!("  {message}"),
            None => format!(
                "  {} items · total {:.2}",
                self.cart.len(),
                self.cart.total()
            ),
        };
        spans.push(Span::styled(summary, theme::status()));
        Line::from_spans(spans)
    }
}

impl App for AppModel {
    fn update(&mut self, event: Event) -> Cmd {
        match event {
            Event::Tick => {
                let mut status = self.status.borrow_mut();
                if status.ticks > 0 {
                    status.ticks -= 1;
                    if status.ticks == 0 {
                        status.message = None;
                    }
                }
                Cmd::None
            }
            Event::Resize(..) => Cmd::None,
            Event::Key(key) => {
                if key.code == KeyCode::Char('q') || key.is_ctrl_char('c') {
                    return Cmd::Quit;
                }
                if self.active_screen_mut().update(&Event::Key(key)) == Handled::Yes {
                    return Cmd::None;
                }
                match key.code {
                    KeyCode::Tab => self.cycle_tab(false),
                    KeyCode::BackTab => self.cycle_tab(true),
                    _ => {
                        let count = self.tab_count();
                        self.tabs.handle_key(&key, count);
                    }
                }
                Cmd::None
            }
        }
    }

    fn view(&self, frame: &mut Frame) {
        let rows = Flex::vertical()
            .constraints([
                Constraint::Fixed(1),
                Constraint::Min(1),
                Constraint::Fixed(1),
            ])
            .split(frame.area());

        let tabs = Tabs::new([self.inventory.tab_label(), self.cart_screen.tab_label()])
            .style(theme::tab_bar())
            .active_style(theme::tab_active())
            .separator(" ");
        let mut tabs_state = self.tabs.clone();
        StatefulWidget::render(&tabs, rows[0], frame, &mut tabs_state);

        self.active_screen().view(frame, rows[1]);

        Paragraph::new(Text::from_line(self.footer_line())).render(rows[2], frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mktui_model::demo_catalog;
    use mktui_term::KeyEvent;

    fn app() -> AppModel {
        AppModel::new(Rc::new(demo_catalog()), Cart::empty())
    }

    fn press(app: &mut AppModel, code: KeyCode) -> Cmd {
        app.update(Event::Key(KeyEvent::new(code)))
    }

    #[test]
    fn starts_on_the_inventory_tab() {
        let app = app();
        assert_eq!(app.active_tab(), 0);
        assert!(app.cart().is_empty());
    }

    #[test]
    fn tab_key_cycles_and_wraps() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_tab(), 1);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_tab(), 0);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_tab(), 1);
    }

    #[test]
    fn digits_and_arrows_switch_tabs() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.active_tab(), 1);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.active_tab(), 0);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.active_tab(), 1);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.active_tab(), 0);
    }

    #[test]
    fn quit_keys_quit() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), Cmd::Quit);
        let mut app = self::app();
        assert_eq!(
            app.update(Event::Key(KeyEvent::ctrl(KeyCode::Char('c')))),
            Cmd::Quit
        );
    }

    #[test]
    fn status_message_follows_adds_and_expires() {
        let mut app = app();
        // Open the first item and add it.
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.cart().len(), 1);
        assert!(
            app.status
                .borrow()
                .message
                .as_deref()
                .is_some_and(|m| m.contains("Cabbage"))
        );
        for _ in 0..STATUS_TICKS {
            app.update(Event::Tick);
        }
        assert!(app.status.borrow().message.is_none());
    }

    #[test]
    fn footer_reflects_cart_totals() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        for _ in 0..STATUS_TICKS {
            app.update(Event::Tick);
        }
        let line = app.footer_line();
        let text: String = line.spans.iter().map(|s| s.content.clone()).collect();
        assert!(text.contains("1 items"));
        assert!(text.contains("total 1.00"));
    }
}
