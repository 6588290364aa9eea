use super::CommentNotificationsService;
use crate::{
    dto::input,
    error::Error,
    repository::{self, VendorTokensRepository},
    service::push_service::{PushNotification, PushService},
};
use axum::async_trait;
use std::sync::Arc;

pub struct CommentNotificationsServiceImpl {
    vendor_tokens_repository: Arc<dyn VendorTokensRepository>,
    push_service: Arc<dyn PushService>,
}

impl CommentNotificationsServiceImpl {
    pub fn new(
        vendor_tokens_repository: Arc<dyn VendorTokensRepository>,
        push_service: Arc<dyn PushService>,
    ) -> Self {
        Self {
            vendor_tokens_repository,
            push_service,
        }
    }
}

#[async_trait]
impl CommentNotificationsService for CommentNotificationsServiceImpl {
    ///
    /// Sends a "New Comment" push notification to the vendor of the product.
    /// Every call sends again, duplicated events are not detected.
    ///
    /// Returns `Ok(())` without sending anything when the product
    /// has no vendor token.
    ///
    /// ### Errors
    /// - [Error::MalformedVendorToken] when token record exists but is unusable
    /// - [Error::Database] when lookup fails
    /// - [Error::Push] when push provider rejects or fails the send
    ///
    async fn notify_vendor(
        &self,
        product_id: &str,
        comment_id: &str,
        comment: input::Comment,
    ) -> Result<(), Error> {
        tracing::info!(product_id, comment_id, "processing new comment");

        let vendor_token = match self.vendor_tokens_repository.find(product_id).await {
            Ok(Some(vendor_token)) => vendor_token,
            Ok(None) => {
                tracing::info!("No vendor token found for product: {product_id}");
                return Ok(());
            }
            Err(repository::Error::MalformedDocument(reason)) => {
                tracing::warn!(product_id, reason, "malformed vendor token");
                return Err(Error::MalformedVendorToken {
                    product_id: product_id.to_string(),
                });
            }
            Err(err) => return Err(Error::Database(err)),
        };

        let notification = PushNotification::new_comment(&comment.username, &comment.comment);

        self.push_service
            .send(&vendor_token.token, &notification)
            .await?;
        tracing::info!(
            product_id = %vendor_token.product_id,
            "Notification sent to vendor: {}",
            vendor_token.token
        );

        Ok(())
    }
}
