pub mod app;
pub mod controls_panel;
pub mod help_overlay;
pub mod settings_modal;
pub mod share_panel;
pub mod stats_panel;
pub mod toast;
pub mod tree_view;

pub use app::App;
