#![forbid(unsafe_code)]

//! Screen plumbing shared by the tabbed shell.

use mktui_term::{Event, Frame, Rect};

pub mod cart_summary;
pub mod detail;
pub mod inventory;

pub use cart_summary::CartScreen;
pub use detail::ItemDetail;
pub use inventory::InventoryScreen;

/// One keybinding for the footer hint line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpEntry {
    pub key: &'static str,
    pub action: &'static str,
}

/// Whether a screen consumed an event. Unconsumed events fall through to
/// the shell's global keys (tab switching, quit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Yes,
    No,
}

/// A tabbed shell member.
pub trait Screen {
    fn update(&mut self, event: &Event) -> Handled;
    fn view(&self, frame: &mut Frame, area: Rect);
    fn keybindings(&self) -> Vec<HelpEntry>;
    fn title(&self) -> &'static str;
    fn tab_label(&self) -> &'static str;
}
