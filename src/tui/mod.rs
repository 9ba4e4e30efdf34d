//! Terminal User Interface module
//!
//! This module provides the interactive TUI using ratatui: a tab for adding
//! transactions, a balance tab and a charts tab.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
