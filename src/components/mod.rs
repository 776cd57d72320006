pub mod app;
pub mod controls_panel;
pub mod status_line;
pub mod word_grid;
pub mod word_list_panel;

pub use app::App;
