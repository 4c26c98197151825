use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;

use super::credentials::{Credentials, CredentialsError};
use crate::db::FirebaseDatabase;

#[derive(Error, Debug)]
pub enum InitializationError {
    #[error("firebase.credentials: {0}")]
    Credentials(#[from] CredentialsError),
    #[error("firebase.already_initialized: {0}")]
    AlreadyInitialized(String),
    #[error("firebase.not_initialized")]
    NotInitialized,
}

#[derive(Debug, Clone)]
pub struct FirebaseOptions {
    pub database_url: String,
    pub credentials: Credentials,
}

impl FirebaseOptions {
    pub fn new(database_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            database_url: database_url.into(),
            credentials,
        }
    }

    /// Options for `database_url` using credentials resolved from the environment.
    pub fn application_default(database_url: impl Into<String>) -> Result<Self, InitializationError> {
        Ok(Self::new(database_url, Credentials::application_default()?))
    }
}

/// A registered app: its options and the database handle built from them.
pub struct FirebaseApp {
    options: FirebaseOptions,
    database: Arc<FirebaseDatabase>,
}

impl FirebaseApp {
    fn new(options: FirebaseOptions) -> Self {
        let database = Arc::new(FirebaseDatabase::new(&options));
        Self { options, database }
    }

    pub fn options(&self) -> &FirebaseOptions {
        &self.options
    }

    pub fn database(&self) -> Arc<FirebaseDatabase> {
        Arc::clone(&self.database)
    }
}

/// Holds at most one [`FirebaseApp`].
///
/// The first successful [`AppRegistry::initialize_app`] wins; later calls
/// for the same database return the registered app, and calls for another
/// database are rejected. Concurrent first calls race safely.
pub struct AppRegistry {
    app: OnceCell<Arc<FirebaseApp>>,
}

impl AppRegistry {
    pub const fn new() -> Self {
        Self {
            app: OnceCell::new(),
        }
    }

    pub fn initialize_app(
        &self,
        options: FirebaseOptions,
    ) -> Result<Arc<FirebaseApp>, InitializationError> {
        let requested_url = options.database_url.clone();
        let mut registered_now = false;

        let app = self.app.get_or_init(|| {
            registered_now = true;
            Arc::new(FirebaseApp::new(options))
        });

        if registered_now {
            tracing::info!(database_url = %requested_url, "Firebase app initialized");
        } else if app.options.database_url != requested_url {
            tracing::error!(
                registered = %app.options.database_url,
                requested = %requested_url,
                "Firebase app already initialized for another database"
            );
            return Err(InitializationError::AlreadyInitialized(
                app.options.database_url.clone(),
            ));
        } else {
            tracing::debug!("Firebase app already initialized, reusing it");
        }

        Ok(Arc::clone(app))
    }

    pub fn is_initialized(&self) -> bool {
        self.app.get().is_some()
    }

    pub fn app(&self) -> Result<Arc<FirebaseApp>, InitializationError> {
        self.app
            .get()
            .cloned()
            .ok_or(InitializationError::NotInitialized)
    }

    pub fn database(&self) -> Result<Arc<FirebaseDatabase>, InitializationError> {
        Ok(self.app()?.database())
    }
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_REGISTRY: AppRegistry = AppRegistry::new();

/// Registers the process-wide app. See [`AppRegistry::initialize_app`].
pub fn initialize_app(options: FirebaseOptions) -> Result<Arc<FirebaseApp>, InitializationError> {
    DEFAULT_REGISTRY.initialize_app(options)
}

/// Database handle of the process-wide app.
pub fn database() -> Result<Arc<FirebaseDatabase>, InitializationError> {
    DEFAULT_REGISTRY.database()
}
