//! Application state shared by every handler.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};

/// Handles injected into the router. Cloning is cheap (all `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database handle, used by the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the SeaORM-backed repository and service onto a database handle.
    pub fn from_database(database: Arc<Database>) -> Self {
        let user_repo = Arc::new(UserStore::new(database.get_connection()));
        let user_service = Arc::new(UserManager::new(user_repo));

        Self::new(user_service, database)
    }

    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>, database: Arc<Database>) -> Self {
        Self {
            user_service,
            database,
        }
    }
}
