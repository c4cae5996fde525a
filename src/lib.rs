pub mod api;
pub mod app;
pub mod errors;
pub mod models;
pub mod state;
pub mod ui;

pub use api::{resolve_base_url, HrApi};
pub use app::Controller;
pub use state::{Action, ViewState};
