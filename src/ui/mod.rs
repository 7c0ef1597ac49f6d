//! Full-screen terminal UI for playing Connect Four with the arrow keys.

mod app;
mod game_view;

pub use app::App;
