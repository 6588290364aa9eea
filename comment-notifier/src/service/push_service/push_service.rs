use super::{Error, PushNotification};
use axum::async_trait;

///
/// Outbound push delivery channel
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushService: Send + Sync {
    ///
    /// Sends one notification to the device identified by `token`.
    /// Resolves once delivery was acknowledged by the provider.
    ///
    async fn send(&self, token: &str, notification: &PushNotification) -> Result<(), Error>;
}
