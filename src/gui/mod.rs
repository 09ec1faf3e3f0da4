//! raylib window frontend.

pub mod app;
pub mod presenter;
pub mod slide_view;
pub mod texture_loader;
pub mod theme;

pub use app::run;
