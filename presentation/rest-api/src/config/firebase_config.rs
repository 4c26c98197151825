use std::env;
use std::sync::Arc;

use persistence::db::FirebaseDatabase;
use persistence::firebase::app::{self, FirebaseOptions, InitializationError};

pub const DEFAULT_DATABASE_URL: &str = "https://partymaker-9c966-default-rtdb.firebaseio.com";

pub struct FirebaseConfig {
    pub database_url: String,
}

impl FirebaseConfig {
    /// Environment variables:
    /// - FIREBASE_DATABASE_URL: Realtime Database root (default: the PartyMaker instance)
    pub fn from_env() -> Self {
        let database_url = env::var("FIREBASE_DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        Self { database_url }
    }
}

/// Registers the process-wide Firebase app and returns its database handle.
///
/// Credentials come from GOOGLE_APPLICATION_CREDENTIALS, or
/// FIREBASE_DATABASE_EMULATOR_HOST for local runs.
///
/// # Errors
/// Returns error if credentials cannot be resolved or another database was
/// already registered.
pub fn init_database(config: &FirebaseConfig) -> Result<Arc<FirebaseDatabase>, InitializationError> {
    let options = FirebaseOptions::application_default(config.database_url.clone())?;
    Ok(app::initialize_app(options)?.database())
}
