use mentorhub_core::lifecycle::ProjectLifecycle;
use mentorhub_core::messaging::MessageThreads;
use mentorhub_db::PgStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: mentorhub_db::DbPool,
}

impl AppState {
    /// Store handle over the shared pool.
    pub fn store(&self) -> PgStore {
        PgStore::new(self.pool.clone())
    }

    pub fn lifecycle(&self) -> ProjectLifecycle<PgStore> {
        ProjectLifecycle::new(self.store())
    }

    pub fn threads(&self) -> MessageThreads<PgStore> {
        MessageThreads::new(self.store())
    }
}
