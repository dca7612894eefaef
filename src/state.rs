use crate::models::Catalog;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    /// Where mutations are written back; `None` keeps the catalog in memory only.
    pub data_path: Option<PathBuf>,
    pub catalog: Arc<Mutex<Catalog>>,
}

impl AppState {
    pub fn new(data_path: Option<PathBuf>, catalog: Catalog) -> Self {
        Self {
            data_path,
            catalog: Arc::new(Mutex::new(catalog)),
        }
    }
}
