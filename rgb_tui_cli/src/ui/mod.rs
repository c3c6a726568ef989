pub mod colors;
pub mod events;
pub mod tui_app;
pub mod view;
pub mod widgets;
