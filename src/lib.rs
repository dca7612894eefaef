pub mod app;
pub mod banner;
pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod render;
pub mod state;
pub mod storage;
pub mod surface;
pub mod sync;
pub mod ui;
pub mod view;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{load_catalog, seed_catalog};
pub use sync::Synchronizer;
