use std::sync::Arc;

use tracing::error;

use draftsmith_db::{Store, StoreError};
use draftsmith_generator::DesignGenerator;

use crate::ApiError;

pub type AppState = Arc<AppStateInner>;

/// Persistence and generation are separate capabilities; handlers use
/// whichever they need.
pub struct AppStateInner {
    pub store: Store,
    pub generator: Arc<dyn DesignGenerator>,
}

impl AppStateInner {
    pub fn new(store: Store, generator: Arc<dyn DesignGenerator>) -> AppState {
        Arc::new(Self { store, generator })
    }
}

/// Runs a store call on the blocking pool. Any failure, including a join
/// error, becomes a storage error carrying `message` as its public text.
pub(crate) async fn run_store<F, T>(
    state: &AppState,
    message: &'static str,
    f: F,
) -> Result<T, ApiError>
where
    F: FnOnce(&Store) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let st = state.clone();
    tokio::task::spawn_blocking(move || f(&st.store))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::storage(message, e.to_string())
        })?
        .map_err(|e| ApiError::storage(message, e.to_string()))
}
