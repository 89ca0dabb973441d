pub mod app;
pub mod controls_panel;
pub mod header;
pub mod legend_panel;
pub mod replay_view;
pub mod status_line;

pub use app::App;
