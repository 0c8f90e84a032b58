//! Application State
//!
//! Read-only fixtures plus the mutable session registry, shared across
//! handlers behind an `Arc`.

use std::sync::Arc;

use crate::auth::UserDirectory;
use crate::cart::SessionRegistry;
use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::error::Result;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub catalog: Catalog,
    pub users: UserDirectory,
    /// Sessions are seeded from `users` at construction
    pub sessions: SessionRegistry,
}

impl AppState {
    pub fn new(catalog: Catalog, users: UserDirectory) -> Self {
        let sessions = SessionRegistry::seeded(&users);
        Self {
            catalog,
            users,
            sessions,
        }
    }

    /// State built from the fixtures compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(Catalog::embedded()?, UserDirectory::embedded()?))
    }

    /// State built from the configured fixture directory, or the embedded
    /// fixtures when none is configured.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        match &config.data_dir {
            Some(dir) => {
                tracing::info!(path = %dir.display(), "Loading fixtures");
                Ok(Self::new(Catalog::load(dir)?, UserDirectory::load(dir)?))
            }
            None => Self::embedded(),
        }
    }
}
