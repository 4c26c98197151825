use std::path::Path;
use std::sync::Arc;

use jsonwebtoken::EncodingKey;
use serde::Deserialize;
use thiserror::Error;

/// Points at a service-account key file, as in Google's application default credentials.
pub const CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";
/// When set, requests go to the local database emulator without credentials.
pub const EMULATOR_HOST_ENV: &str = "FIREBASE_DATABASE_EMULATOR_HOST";

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

#[derive(Error, Debug)]
pub enum CredentialsError {
    #[error("credentials.missing_environment")]
    MissingEnvironment,
    #[error("credentials.read_error: {0}")]
    Read(#[from] std::io::Error),
    #[error("credentials.parse_error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("credentials.invalid_kind: {0}")]
    InvalidKind(String),
    #[error("credentials.invalid_key")]
    InvalidKey,
}

#[derive(Deserialize)]
struct ServiceAccountFile {
    #[serde(rename = "type")]
    kind: String,
    project_id: Option<String>,
    private_key_id: Option<String>,
    private_key: String,
    client_email: String,
    #[serde(default = "default_token_uri")]
    token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// A parsed service-account key with its RSA signing key already decoded.
#[derive(Clone)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub project_id: Option<String>,
    pub private_key_id: Option<String>,
    pub token_uri: String,
    pub(crate) encoding_key: EncodingKey,
}

impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("project_id", &self.project_id)
            .field("private_key_id", &self.private_key_id)
            .field("token_uri", &self.token_uri)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub enum Credentials {
    ServiceAccount(Arc<ServiceAccountKey>),
    /// Local emulator reachable at `host` (`host:port`).
    Emulator { host: String },
}

impl Credentials {
    /// Resolves credentials from the environment.
    ///
    /// Environment variables:
    /// - FIREBASE_DATABASE_EMULATOR_HOST: use the emulator at this address
    /// - GOOGLE_APPLICATION_CREDENTIALS: path to a service-account JSON key
    ///
    /// # Errors
    /// Returns error if neither variable is set or the key file cannot be
    /// read, parsed or decoded.
    pub fn application_default() -> Result<Self, CredentialsError> {
        Self::resolve(
            std::env::var(EMULATOR_HOST_ENV).ok(),
            std::env::var(CREDENTIALS_ENV).ok(),
        )
    }

    /// The emulator host wins over a key file; blank values count as unset.
    fn resolve(
        emulator_host: Option<String>,
        key_path: Option<String>,
    ) -> Result<Self, CredentialsError> {
        if let Some(host) = emulator_host
            && !host.trim().is_empty()
        {
            return Ok(Credentials::Emulator { host });
        }

        match key_path {
            Some(path) if !path.trim().is_empty() => Self::from_file(path),
            _ => Err(CredentialsError::MissingEnvironment),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CredentialsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, CredentialsError> {
        let file: ServiceAccountFile = serde_json::from_str(json)?;
        if file.kind != "service_account" {
            return Err(CredentialsError::InvalidKind(file.kind));
        }

        let encoding_key = EncodingKey::from_rsa_pem(file.private_key.as_bytes())
            .map_err(|_| CredentialsError::InvalidKey)?;

        Ok(Credentials::ServiceAccount(Arc::new(ServiceAccountKey {
            client_email: file.client_email,
            project_id: file.project_id,
            private_key_id: file.private_key_id,
            token_uri: file.token_uri,
            encoding_key,
        })))
    }
}
