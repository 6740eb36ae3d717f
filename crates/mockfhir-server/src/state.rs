use mockfhir_store::FixtureStore;
use std::sync::Arc;

/// Shared handler state: the fixture store, loaded once at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<FixtureStore>,
}

impl AppState {
    pub fn new(store: FixtureStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
