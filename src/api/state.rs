//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, ListStore};
use crate::services::{ListManager, ListService};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// List record service
    pub list_service: Arc<dyn ListService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the repository and service on top of an open database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let repo = Arc::new(ListStore::new(database.get_connection()));
        let list_service = Arc::new(ListManager::new(repo));

        Self {
            list_service,
            database,
        }
    }
}
