//! Shared state injected into all handlers.

use std::sync::Arc;

use crate::domain::DatabaseHandle;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn DatabaseHandle>,
}

impl AppState {
    pub fn new(db: Arc<dyn DatabaseHandle>) -> Self {
        Self { db }
    }
}
