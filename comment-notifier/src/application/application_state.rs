use super::ApplicationEnv;
use crate::{
    repository::VendorTokensRepositoryImpl,
    service::{
        access_token_service::{
            GoogleAccessTokenService, GoogleAccessTokenServiceConfig, ServiceAccountKey,
        },
        comment_notifications_service::{
            CommentNotificationsService, CommentNotificationsServiceImpl,
        },
        comments_watcher_service::{CommentsWatcherService, CommentsWatcherServiceConfig},
        push_service::{FcmPushService, FcmPushServiceConfig},
    },
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

const FIREBASE_MESSAGING_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub comment_notifications_service: Arc<dyn CommentNotificationsService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
    pub comments_watcher_service: Option<CommentsWatcherService>,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let vendor_tokens_repository = VendorTokensRepositoryImpl::new(db.clone());
    let vendor_tokens_repository = Arc::new(vendor_tokens_repository);

    tracing::info!(
        path = %env.fcm_credentials_file.display(),
        "loading service account key"
    );
    let service_account_key = ServiceAccountKey::from_file(&env.fcm_credentials_file)?;
    let project_id = service_account_key.project_id.clone();

    tracing::info!("creating services");
    let http_client = reqwest::Client::new();

    let config = GoogleAccessTokenServiceConfig {
        service_account_key,
        scope: FIREBASE_MESSAGING_SCOPE.to_string(),
    };
    let access_token_service = GoogleAccessTokenService::new(config, http_client.clone())?;
    let access_token_service = Arc::new(access_token_service);

    let config = FcmPushServiceConfig {
        base_url: env.fcm_base_url.clone(),
        project_id,
    };
    let push_service = FcmPushService::new(config, http_client, access_token_service)?;
    let push_service = Arc::new(push_service);

    let comment_notifications_service =
        CommentNotificationsServiceImpl::new(vendor_tokens_repository, push_service);
    let comment_notifications_service: Arc<dyn CommentNotificationsService> =
        Arc::new(comment_notifications_service);

    let comments_watcher_service = match env.watch_comments {
        true => {
            tracing::info!("starting comments watcher");
            let config = CommentsWatcherServiceConfig {
                retry_interval: env.watch_retry_interval,
            };
            Some(CommentsWatcherService::new(
                config,
                db,
                comment_notifications_service.clone(),
            ))
        }
        false => None,
    };

    Ok((
        ApplicationState {
            comment_notifications_service,
        },
        ApplicationStateToClose {
            db_client,
            comments_watcher_service,
        },
    ))
}
