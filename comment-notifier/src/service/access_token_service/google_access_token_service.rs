use super::{
    dto::{AssertionClaims, TokenResponse},
    AccessTokenService, Error, GoogleAccessTokenServiceConfig, ServiceAccountKey,
};
use axum::async_trait;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::Client;
use std::time::Duration;
use time::OffsetDateTime;
use tokio::sync::Mutex;

const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME: Duration = Duration::from_secs(3600);
/// Cached token is refreshed when less than this remains
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

///
/// Exchanges signed service account assertions for OAuth2 access tokens.
/// Token is cached and shared by all invocations until it is about to expire.
///
pub struct GoogleAccessTokenService {
    http: Client,
    key: ServiceAccountKey,
    encoding_key: EncodingKey,
    scope: String,
    cached: Mutex<Option<CachedAccessToken>>,
}

struct CachedAccessToken {
    value: String,
    expire_at: OffsetDateTime,
}

impl GoogleAccessTokenService {
    pub fn new(config: GoogleAccessTokenServiceConfig, http: Client) -> Result<Self, Error> {
        let encoding_key =
            EncodingKey::from_rsa_pem(config.service_account_key.private_key.as_bytes())?;

        Ok(Self {
            http,
            key: config.service_account_key,
            encoding_key,
            scope: config.scope,
            cached: Mutex::new(None),
        })
    }

    async fn fetch(&self, now: OffsetDateTime) -> Result<CachedAccessToken, Error> {
        let iat = now.unix_timestamp();
        let claims = AssertionClaims {
            iss: &self.key.client_email,
            scope: &self.scope,
            aud: &self.key.token_uri,
            iat,
            exp: iat + ASSERTION_LIFETIME.as_secs() as i64,
        };
        let assertion =
            jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key)?;

        tracing::debug!(token_uri = %self.key.token_uri, "requesting access token");
        let response = self
            .http
            .post(&self.key.token_uri)
            .form(&[("grant_type", GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<unavailable>"));
            return Err(Error::Status { status, body });
        }

        let token = response.json::<TokenResponse>().await?;
        tracing::info!(expires_in = token.expires_in, "obtained access token");

        Ok(CachedAccessToken {
            value: token.access_token,
            expire_at: now + time::Duration::seconds(token.expires_in),
        })
    }
}

#[async_trait]
impl AccessTokenService for GoogleAccessTokenService {
    async fn access_token(&self) -> Result<String, Error> {
        let mut cached = self.cached.lock().await;

        let now = OffsetDateTime::now_utc();
        if let Some(token) = cached.as_ref() {
            if token.expire_at - EXPIRY_MARGIN > now {
                return Ok(token.value.clone());
            }
        }

        let token = self.fetch(now).await?;
        let value = token.value.clone();
        *cached = Some(token);

        Ok(value)
    }
}
