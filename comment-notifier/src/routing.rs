use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    auth::{self, Caller, Role},
    dto::input,
    error::Error,
    service::comment_notifications_service::CommentNotificationsService,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Extension, Json, Router,
};
use std::sync::Arc;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route(
            "/api/v1/products/:product_id/comments/:comment_id",
            post(comment_created),
        )
        .route_layer(application_middleware.auth.clone())
}

///
/// Trigger for a comment created under a product.
/// Answers 204 whether or not the vendor had a token registered.
///
async fn comment_created(
    State(comment_notifications_service): State<Arc<dyn CommentNotificationsService>>,
    Extension(caller): Extension<Caller>,
    Path((product_id, comment_id)): Path<(String, String)>,
    Json(comment): Json<input::Comment>,
) -> Result<StatusCode, Error> {
    auth::require_all_roles(&caller, &[Role::TriggerNotifications])?;

    comment_notifications_service
        .notify_vendor(&product_id, &comment_id, comment)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        auth::{test_utils::create_valid_jwt, JwtAuthorizationValidator},
        service::{
            comment_notifications_service::MockCommentNotificationsService,
            push_service::Error as PushError,
        },
    };
    use axum::{
        body::Body,
        http::{
            header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE},
            Method, Request,
        },
    };
    use jsonwebtoken::{Algorithm, DecodingKey};
    use mockall::predicate::eq;
    use serde_json::json;
    use tower::ServiceExt;
    use tower_http::{
        limit::RequestBodyLimitLayer, trace::TraceLayer,
        validate_request::ValidateRequestHeaderLayer,
    };

    fn create_router(service: MockCommentNotificationsService) -> Router {
        let middleware = ApplicationMiddleware {
            auth: ValidateRequestHeaderLayer::custom(JwtAuthorizationValidator::new(
                DecodingKey::from_secret(auth::test_utils::TEST_SECRET),
                vec![Algorithm::HS256],
            )),
            body_limit: RequestBodyLimitLayer::new(4096),
            trace: TraceLayer::new_for_http(),
        };
        let state = ApplicationState {
            comment_notifications_service: Arc::new(service),
        };

        crate::application::create_application(state, middleware)
    }

    fn create_request(jwt: Option<String>, body: String) -> Request<Body> {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/products/p2/comments/c1")
            .header(CONTENT_TYPE, "application/json")
            .header(CONTENT_LENGTH, body.len());
        if let Some(jwt) = jwt {
            builder = builder.header(AUTHORIZATION, format!("Bearer {jwt}"));
        }

        builder.body(Body::from(body)).unwrap()
    }

    fn comment_body() -> String {
        json!({
            "username": "sam",
            "comment": "ok",
        })
        .to_string()
    }

    #[tokio::test]
    async fn comment_created_no_content() {
        let mut service = MockCommentNotificationsService::new();
        service
            .expect_notify_vendor()
            .with(
                eq("p2"),
                eq("c1"),
                eq(input::Comment {
                    username: "sam".to_string(),
                    comment: "ok".to_string(),
                }),
            )
            .times(1)
            .returning(|_, _, _| Ok(()));
        let router = create_router(service);

        let jwt = create_valid_jwt(&[Role::TriggerNotifications.as_ref()]);
        let response = router
            .oneshot(create_request(Some(jwt), comment_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn comment_created_unauthorized() {
        let mut service = MockCommentNotificationsService::new();
        service.expect_notify_vendor().never();
        let router = create_router(service);

        let response = router
            .oneshot(create_request(None, comment_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn comment_created_missing_role() {
        let mut service = MockCommentNotificationsService::new();
        service.expect_notify_vendor().never();
        let router = create_router(service);

        let jwt = create_valid_jwt(&["some_other_role"]);
        let response = router
            .oneshot(create_request(Some(jwt), comment_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn comment_created_invalid_body() {
        let mut service = MockCommentNotificationsService::new();
        service.expect_notify_vendor().never();
        let router = create_router(service);

        let jwt = create_valid_jwt(&[Role::TriggerNotifications.as_ref()]);
        let body = json!({ "username": "sam" }).to_string();
        let response = router
            .oneshot(create_request(Some(jwt), body))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn comment_created_body_too_large() {
        let mut service = MockCommentNotificationsService::new();
        service.expect_notify_vendor().never();
        let router = create_router(service);

        let jwt = create_valid_jwt(&[Role::TriggerNotifications.as_ref()]);
        let body = json!({
            "username": "sam",
            "comment": "a".repeat(8192),
        })
        .to_string();
        let response = router
            .oneshot(create_request(Some(jwt), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn comment_created_push_error() {
        let mut service = MockCommentNotificationsService::new();
        service.expect_notify_vendor().times(1).returning(|_, _, _| {
            Err(Error::Push(PushError::Status {
                status: StatusCode::SERVICE_UNAVAILABLE,
                body: "try later".to_string(),
            }))
        });
        let router = create_router(service);

        let jwt = create_valid_jwt(&[Role::TriggerNotifications.as_ref()]);
        let response = router
            .oneshot(create_request(Some(jwt), comment_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn comment_created_malformed_token() {
        let mut service = MockCommentNotificationsService::new();
        service
            .expect_notify_vendor()
            .times(1)
            .returning(|product_id, _, _| {
                Err(Error::MalformedVendorToken {
                    product_id: product_id.to_string(),
                })
            });
        let router = create_router(service);

        let jwt = create_valid_jwt(&[Role::TriggerNotifications.as_ref()]);
        let response = router
            .oneshot(create_request(Some(jwt), comment_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
