use super::VendorToken;
use crate::repository;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VendorTokensRepository: Send + Sync {
    ///
    /// Point lookup of the token registered for the product.
    /// Returns `None` when the vendor never registered a token.
    ///
    /// ### Errors
    /// - [repository::Error::MalformedDocument] when record exists
    /// but does not contain a non-empty `token` string
    ///
    async fn find(&self, product_id: &str) -> Result<Option<VendorToken>, repository::Error>;
}
