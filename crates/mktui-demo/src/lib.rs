#![forbid(unsafe_code)]

//! The marketui demo application.
//!
//! Two peer screens in a tabbed shell: an inventory list whose entries
//! open an item detail view, and a cart summary. One [`Cart`] is created
//! per session and shared by handle with every view that reads or
//! mutates it; a live cart subscription drives the footer status line.
//!
//! [`Cart`]: mktui_model::Cart

pub mod app;
pub mod cli;
pub mod logging;
pub mod screens;
pub mod theme;

pub use app::AppModel;
