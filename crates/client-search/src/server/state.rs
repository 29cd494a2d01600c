use client_search_core::{ClientSearch, RecordSource, SourceResult};

use super::error::ApiError;
use super::SourceFactory;

#[derive(Clone)]
pub struct AppState {
    factory: SourceFactory,
}

impl AppState {
    pub fn new(factory: SourceFactory) -> Self {
        Self { factory }
    }

    /// Run `op` against a freshly built source on the blocking pool.
    pub async fn run<T, F>(&self, op: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&ClientSearch<Box<dyn RecordSource + Send>>) -> SourceResult<T> + Send + 'static,
    {
        let factory = self.factory.clone();
        tokio::task::spawn_blocking(move || {
            let source = factory().map_err(|e| ApiError::Internal(e.to_string()))?;
            op(&ClientSearch::new(source)).map_err(ApiError::from)
        })
        .await
        .map_err(|e| ApiError::Internal(format!("search task failed: {}", e)))?
    }
}
