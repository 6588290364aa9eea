use crate::service::access_token_service;
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to obtain access token: {0}")]
    AccessToken(#[from] access_token_service::Error),

    #[error("failed to build url: {0}")]
    Url(#[from] url::ParseError),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
}
