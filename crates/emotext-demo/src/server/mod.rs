pub mod app;
pub mod render;
pub mod routes;
pub mod static_files;

pub use app::*;
pub use render::{render_page, View};
