use crate::{dto::input, error::Error};
use axum::async_trait;

///
/// Handler invoked once per created comment, whatever dispatched the event
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentNotificationsService: Send + Sync {
    async fn notify_vendor(
        &self,
        product_id: &str,
        comment_id: &str,
        comment: input::Comment,
    ) -> Result<(), Error>;
}
