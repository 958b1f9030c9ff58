//! Application state for the intake HTTP API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the storage backend and the server configuration.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state for the API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type. Handlers constrain it with the store
///   traits they actually need.
///
/// # Example
///
/// ```rust,ignore
/// use intake_rest::{AppState, ServerConfig};
/// use intake_store::sqlite::SqliteBackend;
/// use std::sync::Arc;
///
/// let backend = SqliteBackend::in_memory()?;
/// let state = AppState::new(Arc::new(backend), ServerConfig::default());
/// ```
pub struct AppState<S> {
    /// The storage backend.
    storage: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is behind an Arc and need not be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S> AppState<S> {
    /// Creates a new AppState with the given storage and configuration.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        Self {
            storage,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use intake_store::error::StorageResult;
    use intake_store::id::RecordId;
    use intake_store::model::{NewPatient, Patient, PatientSummary};
    use intake_store::store::PatientStore;

    // Mock storage for testing
    struct MockStorage;

    #[async_trait]
    impl PatientStore for MockStorage {
        fn backend_name(&self) -> &'static str {
            "mock"
        }

        async fn register(&self, _patient: NewPatient) -> StorageResult<RecordId> {
            unimplemented!()
        }

        async fn list_patients(&self) -> StorageResult<Vec<PatientSummary>> {
            Ok(Vec::new())
        }

        async fn get_patient(&self, _id: &RecordId) -> StorageResult<Option<Patient>> {
            Ok(None)
        }
    }

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new(Arc::new(MockStorage), ServerConfig::default());
        assert_eq!(state.storage().backend_name(), "mock");
        assert_eq!(state.config().port, 3000);
    }

    #[test]
    fn test_app_state_clone() {
        let state = AppState::new(Arc::new(MockStorage), ServerConfig::default());
        let cloned = state.clone();
        assert_eq!(state.config().port, cloned.config().port);
    }
}
