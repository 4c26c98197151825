use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, Url};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::firebase::app::FirebaseOptions;
use crate::firebase::credentials::Credentials;
use crate::firebase::token::TokenProvider;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.auth_error: {0}")]
    Auth(String),
    #[error("database.request_error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("database.status_error: {0}")]
    Status(u16),
    #[error("database.decode_error: {0}")]
    Decode(String),
}

enum Authorization {
    ServiceAccount(TokenProvider),
    Emulator,
}

/// Handle to a Realtime Database instance, spoken to over its REST API.
///
/// Paths are relative to the database root, e.g. `Groups/abc`.
pub struct FirebaseDatabase {
    http: Client,
    base_url: String,
    namespace: Option<String>,
    authorization: Authorization,
}

impl FirebaseDatabase {
    pub fn new(options: &FirebaseOptions) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        let database_url = options.database_url.trim_end_matches('/');
        let (base_url, namespace, authorization) = match &options.credentials {
            Credentials::ServiceAccount(key) => (
                database_url.to_string(),
                None,
                Authorization::ServiceAccount(TokenProvider::new(http.clone(), key.clone())),
            ),
            Credentials::Emulator { host } => (
                format!("http://{}", host.trim_end_matches('/')),
                namespace_of(database_url),
                Authorization::Emulator,
            ),
        };

        Self {
            http,
            base_url,
            namespace,
            authorization,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}.json", self.base_url, path.trim_matches('/'))
    }

    async fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder, DatabaseError> {
        let request = match &self.authorization {
            Authorization::ServiceAccount(tokens) => request.bearer_auth(tokens.access_token().await?),
            Authorization::Emulator => request.bearer_auth("owner"),
        };
        Ok(match &self.namespace {
            Some(ns) => request.query(&[("ns", ns)]),
            None => request,
        })
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, DatabaseError> {
        let response = self.authorize(request).await?.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %response.url(), "Database request failed");
            return Err(DatabaseError::Status(status.as_u16()));
        }
        Ok(response)
    }

    /// Reads the value at `path`; `None` when nothing is stored there.
    pub async fn get(&self, path: &str) -> Result<Option<Value>, DatabaseError> {
        tracing::debug!(path, "Database read");
        let response = self.send(self.http.get(self.endpoint(path))).await?;
        let value: Value = response
            .json()
            .await
            .map_err(|e| DatabaseError::Decode(e.to_string()))?;

        Ok(match value {
            Value::Null => None,
            other => Some(other),
        })
    }

    /// Whether anything is stored at `path`, without downloading it.
    pub async fn exists(&self, path: &str) -> Result<bool, DatabaseError> {
        tracing::debug!(path, "Database shallow read");
        let response = self
            .send(self.http.get(self.endpoint(path)).query(&[("shallow", "true")]))
            .await?;
        let value: Value = response
            .json()
            .await
            .map_err(|e| DatabaseError::Decode(e.to_string()))?;

        Ok(!value.is_null())
    }

    /// Replaces the value at `path`.
    pub async fn set<T: Serialize + ?Sized>(&self, path: &str, value: &T) -> Result<(), DatabaseError> {
        tracing::debug!(path, "Database write");
        self.send(self.http.put(self.endpoint(path)).json(value))
            .await?;
        Ok(())
    }

    /// Merges `updates` into the children of `path`.
    pub async fn update(&self, path: &str, updates: &Map<String, Value>) -> Result<(), DatabaseError> {
        tracing::debug!(path, fields = updates.len(), "Database update");
        self.send(self.http.patch(self.endpoint(path)).json(updates))
            .await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<(), DatabaseError> {
        tracing::debug!(path, "Database delete");
        self.send(self.http.delete(self.endpoint(path))).await?;
        Ok(())
    }
}

/// The emulator tells databases apart by the first label of the production host.
fn namespace_of(database_url: &str) -> Option<String> {
    Url::parse(database_url)
        .ok()?
        .host_str()?
        .split('.')
        .next()
        .map(str::to_string)
}

/// Whether `key` can be used as a single path segment.
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
        && !key
            .chars()
            .any(|c| matches!(c, '.' | '$' | '#' | '[' | ']' | '/') || c.is_control())
}
