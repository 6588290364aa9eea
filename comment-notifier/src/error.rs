use crate::{repository, service::push_service};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("auth error: missing role {0}")]
    MissingRole(&'static str),

    #[error("malformed vendor token for product: {product_id}")]
    MalformedVendorToken { product_id: String },

    #[error("database error: {0}")]
    Database(#[from] repository::Error),

    #[error("push error: {0}")]
    Push(#[from] push_service::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            Error::MissingRole(_) => StatusCode::FORBIDDEN,
            Error::MalformedVendorToken { product_id: _ } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Push(_) => StatusCode::BAD_GATEWAY,
        }
        .into_response()
    }
}
