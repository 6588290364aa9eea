use super::Error;
use axum::async_trait;

///
/// Source of OAuth2 bearer tokens for the push provider
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessTokenService: Send + Sync {
    async fn access_token(&self) -> Result<String, Error>;
}
