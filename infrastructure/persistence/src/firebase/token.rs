use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use chrono::Utc;
use jsonwebtoken::{Algorithm, Header, encode};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::credentials::ServiceAccountKey;
use crate::db::DatabaseError;

const SCOPES: &str = "https://www.googleapis.com/auth/firebase.database https://www.googleapis.com/auth/userinfo.email";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
// Tokens are refreshed this long before Google says they expire.
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

struct CachedToken {
    value: String,
    expires_at: Instant,
}

/// Exchanges a signed service-account assertion for OAuth2 access tokens.
pub struct TokenProvider {
    http: Client,
    key: Arc<ServiceAccountKey>,
    cache: RwLock<Option<CachedToken>>,
}

impl TokenProvider {
    pub fn new(http: Client, key: Arc<ServiceAccountKey>) -> Self {
        Self {
            http,
            key,
            cache: RwLock::new(None),
        }
    }

    pub async fn access_token(&self) -> Result<String, DatabaseError> {
        {
            let cache = self
                .cache
                .read()
                .map_err(|e| DatabaseError::Auth(format!("auth.cache_read_failed: {e}")))?;
            if let Some(cached) = cache.as_ref()
                && Instant::now() + REFRESH_MARGIN < cached.expires_at
            {
                return Ok(cached.value.clone());
            }
        }

        let fresh = self.fetch_token().await?;
        let value = fresh.access_token.clone();

        {
            let mut cache = self
                .cache
                .write()
                .map_err(|e| DatabaseError::Auth(format!("auth.cache_write_failed: {e}")))?;
            *cache = Some(CachedToken {
                value: fresh.access_token,
                expires_at: Instant::now() + Duration::from_secs(fresh.expires_in),
            });
        }

        Ok(value)
    }

    fn signed_assertion(&self) -> Result<String, DatabaseError> {
        let now = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &self.key.client_email,
            scope: SCOPES,
            aud: &self.key.token_uri,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.key.private_key_id.clone();

        encode(&header, &claims, &self.key.encoding_key)
            .map_err(|e| DatabaseError::Auth(format!("auth.assertion_signing_failed: {e}")))
    }

    async fn fetch_token(&self) -> Result<TokenResponse, DatabaseError> {
        let assertion = self.signed_assertion()?;

        tracing::debug!(client = %self.key.client_email, "Requesting database access token");
        let response = self
            .http
            .post(&self.key.token_uri)
            .form(&[("grant_type", GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|e| DatabaseError::Auth(format!("auth.token_request_failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            tracing::error!(status, "Token endpoint rejected service-account assertion");
            return Err(DatabaseError::Auth(format!("auth.token_rejected: {status}")));
        }

        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| DatabaseError::Auth(format!("auth.token_parse_failed: {e}")))
    }
}
