use super::{
    dto::{FcmMessage, FcmSendRequest},
    Error, FcmPushServiceConfig, PushNotification, PushService,
};
use crate::service::access_token_service::AccessTokenService;
use axum::async_trait;
use reqwest::Client;
use std::sync::Arc;
use url::Url;

///
/// [PushService] backed by Firebase Cloud Messaging HTTP v1 API
///
pub struct FcmPushService {
    send_url: Url,
    http: Client,
    access_token_service: Arc<dyn AccessTokenService>,
}

impl FcmPushService {
    pub fn new(
        config: FcmPushServiceConfig,
        http: Client,
        access_token_service: Arc<dyn AccessTokenService>,
    ) -> Result<Self, Error> {
        let send_url = config
            .base_url
            .join(&format!("v1/projects/{}/messages:send", config.project_id))?;

        Ok(Self {
            send_url,
            http,
            access_token_service,
        })
    }
}

#[async_trait]
impl PushService for FcmPushService {
    async fn send(&self, token: &str, notification: &PushNotification) -> Result<(), Error> {
        let access_token = self.access_token_service.access_token().await?;

        let request = FcmSendRequest {
            message: FcmMessage {
                token,
                notification,
            },
        };

        tracing::debug!(url = %self.send_url, "sending push notification");
        let response = self
            .http
            .post(self.send_url.clone())
            .bearer_auth(access_token)
            .json(&request)
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

        Ok(())
    }
}
