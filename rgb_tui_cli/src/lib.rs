//! Terminal front end for the rgb-tui color picker

pub mod ui;

pub use ui::tui_app::TuiApp;
