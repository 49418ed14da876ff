#![forbid(unsafe_code)]

//! Terminal substrate for the marketui demo.
//!
//! A deliberately small declarative stack: a styled cell [`Buffer`] with
//! row diffing, canonical input [`Event`]s decoupled from the backend, a
//! flex [`layout`] splitter, an RAII [`TerminalSession`], and an
//! Elm-style [`Program`] loop that drives an [`App`]'s `update`/`view`
//! cycle. Crossterm is the only backend.

pub mod buffer;
pub mod error;
pub mod event;
pub mod frame;
pub mod geometry;
pub mod layout;
pub mod runtime;
pub mod style;
pub mod terminal;

pub use buffer::{Buffer, Cell};
pub use error::{Error, Result};
pub use event::{Event, KeyCode, KeyEvent, Modifiers};
pub use frame::Frame;
pub use geometry::Rect;
pub use layout::{Constraint, Flex};
pub use runtime::{App, Cmd, Program, ProgramConfig};
pub use style::{Color, Style};
pub use terminal::TerminalSession;
