#![forbid(unsafe_code)]

//! Inventory screen: the catalog list plus a one-deep navigation route
//! into the item detail view.

use std::cell::RefCell;
use std::rc::Rc;

use mktui_model::{Cart, Store};
use mktui_term::{Event, Frame, KeyCode, Rect};
use mktui_widgets::{Block, BorderType, Line, List, ListState, Span, StatefulWidget, Widget};

use super::{Handled, HelpEntry, ItemDetail, Screen};
use crate::theme;

pub struct InventoryScreen {
    store: Rc<dyn Store>,
    cart: Cart,
    state: RefCell<ListState>,
    detail: Option<ItemDetail>,
}

impl InventoryScreen {
    #[must_use]
    pub fn new(store: Rc<dyn Store>, cart: Cart) -> Self {
        let mut state = ListState::default();
        if !store.inventory().is_empty() {
            state.select(Some(0));
        }
        Self {
            store,
            cart,
            state: RefCell::new(state),
            detail: None,
        }
    }

    /// Whether the detail route is currently open.
    #[must_use]
    pub fn in_detail(&self) -> bool {
        self.detail.is_some()
    }

    fn open_selected(&mut self) {
        let selected = self.state.borrow().selected;
        if let Some(index) = selected
            && let Some(item) = self.store.inventory().get(index)
        {
            tracing::debug!(message = "inventory.open", item = %item.name());
            self.detail = Some(ItemDetail::new(self.cart.clone(), item.clone()));
        }
    }

    fn rows(&self) -> Vec<Line> {
        self.store
            .inventory()
            .iter()
            .map(|item| {
                Line::from_spans([
                    Span::styled(item.name().to_string(), theme::body()),
                    Span::raw("  "),
                    Span::styled(format!("{:.2}", item.price()), theme::price()),
                ])
            })
            .collect()
    }
}

impl Screen for InventoryScreen {
    fn update(&mut self, event: &Event) -> Handled {
        if let Some(detail) = self.detail.as_mut() {
            if let Event::Key(key) = event
                && matches!(key.code, KeyCode::Esc | KeyCode::Backspace)
            {
                tracing::debug!(message = "inventory.back", item = %detail.item().name());
                self.detail = None;
                return Handled::Yes;
            }
            return detail.update(event);
        }

        let Event::Key(key) = event else {
            return Handled::No;
        };
        let len = self.store.inventory().len();
        match key.code {
            KeyCode::Up => {
                self.state.borrow_mut().select_previous(len);
                Handled::Yes
            }
            KeyCode::Down => {
                self.state.borrow_mut().select_next(len);
                Handled::Yes
            }
            KeyCode::Enter => {
                self.open_selected();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if let Some(detail) = &self.detail {
            let block = Block::new()
                .title(detail.item().name().to_string())
                .title_style(theme::title())
                .border_type(BorderType::Rounded)
                .border_style(theme::border());
            block.render(area, frame);
            detail.view(frame, block.inner(area));
            return;
        }

        let block = Block::new()
            .title("Inventory")
            .title_style(theme::title())
            .border_type(BorderType::Rounded)
            .border_style(theme::border());
        block.render(area, frame);
        let inner = block.inner(area);
        if inner.is_empty() {
            return;
        }

        let list = List::new(self.rows())
            .highlight_symbol("> ")
            .highlight_style(theme::highlight());
        let mut state = self.state.borrow_mut();
        StatefulWidget::render(&list, inner, frame, &mut state);
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        match &self.detail {
            Some(detail) => detail.keybindings(),
            None => vec![
                HelpEntry {
                    key: "Up/Down",
                    action: "Select",
                },
                HelpEntry {
                    key: "Enter",
                    action: "Open item",
                },
            ],
        }
    }

    fn title(&self) -> &'static str {
        "Inventory"
    }

    fn tab_label(&self) -> &'static str {
        "Inventory"
    }
}
