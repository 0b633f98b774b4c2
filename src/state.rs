use std::sync::Arc;

use crate::services::providers::CatalogProvider;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The movie catalog every request reads from
    pub provider: Arc<dyn CatalogProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self { provider }
    }
}
