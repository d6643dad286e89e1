pub mod app;
pub mod components;
pub mod context;
pub mod routes;
pub mod state;
pub mod toast;
pub mod views;
pub mod vm;

pub use app::App;
pub use context::{AppContext, UiApp, build_app_context};
