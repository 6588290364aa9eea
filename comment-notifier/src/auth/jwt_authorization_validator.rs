use super::{dto::JwtClaims, Caller};
use anyhow::anyhow;
use axum::{
    body::Body,
    http::{header::AUTHORIZATION, HeaderValue, Request, Response, StatusCode},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use tower_http::validate_request::ValidateRequest;

///
/// Middleware that validates JWT in Authorization header.
/// If Authorization is correct [Caller] is added to request extensions.
///
#[derive(Clone)]
pub struct JwtAuthorizationValidator {
    inner: Arc<JwtAuthorizationValidatorInner>,
}

struct JwtAuthorizationValidatorInner {
    key: DecodingKey,
    validation: Validation,
}

impl JwtAuthorizationValidator {
    pub fn new(key: DecodingKey, algorithms: Vec<Algorithm>) -> Self {
        let mut validation = Validation::default();
        validation.algorithms = algorithms;

        let inner = JwtAuthorizationValidatorInner { key, validation };

        Self {
            inner: Arc::new(inner),
        }
    }

    fn try_parse_authorization_header(
        &self,
        authorization_header: Option<&HeaderValue>,
    ) -> anyhow::Result<Caller> {
        let Some(authorization_header) = authorization_header else {
            return Err(anyhow!("missing Authorization header"));
        };
        let Ok(authorization_value) = authorization_header.to_str() else {
            return Err(anyhow!("illegal character in Authorization header"));
        };
        let Some(token) = authorization_value.strip_prefix("Bearer ") else {
            return Err(anyhow!("unsupported authorization type"));
        };
        let token_data =
            jsonwebtoken::decode::<JwtClaims>(token, &self.inner.key, &self.inner.validation)
                .map_err(|err| anyhow!("invalid jwt: {err}"))?;

        Ok(Caller::new(
            token_data.claims.sub,
            token_data.claims.realm_access.roles,
        ))
    }
}

impl<B> ValidateRequest<B> for JwtAuthorizationValidator {
    type ResponseBody = Body;

    fn validate(&mut self, request: &mut Request<B>) -> Result<(), Response<Self::ResponseBody>> {
        let authorization_header = request.headers().get(AUTHORIZATION);

        let caller = self
            .try_parse_authorization_header(authorization_header)
            .map_err(|err| {
                tracing::warn!(%err, "auth error");
                let mut response = Response::new(Body::empty());
                *response.status_mut() = StatusCode::UNAUTHORIZED;
                response
            })?;

        tracing::debug!(caller = %caller.id, "caller authorized");
        request.extensions_mut().insert(caller);

        Ok(())
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use axum::{routing::get, Extension, Router};
    use jsonwebtoken::{EncodingKey, Header};
    use serde_json::json;
    use tower::ServiceExt;
    use tower_http::validate_request::ValidateRequestHeaderLayer;

    pub const TEST_SECRET: &[u8] = b"some secret";

    /// Year 9999, far enough for tests
    const NEVER_EXPIRES: i64 = 253402210800;

    pub fn create_jwt(sub: &str, roles: &[&str], exp: i64, secret: &[u8]) -> String {
        let claims = json!({
            "sub": sub,
            "exp": exp,
            "realm_access": {
                "roles": roles,
            }
        });

        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap()
    }

    pub fn create_valid_jwt(roles: &[&str]) -> String {
        create_jwt("eventarc-trigger", roles, NEVER_EXPIRES, TEST_SECRET)
    }

    #[tokio::test]
    async fn missing_authorization_header() {
        test_invalid_authorization_header(None).await;
    }

    #[tokio::test]
    async fn invalid_authorization_header() {
        test_invalid_authorization_header("invalid characters ąćś").await;
    }

    #[tokio::test]
    async fn authorization_type_not_bearer() {
        test_invalid_authorization_header("Basic dXNlcjpwYXNz").await;
    }

    #[tokio::test]
    async fn invalid_token() {
        test_invalid_authorization_header("Bearer that's not correct JWT").await;
    }

    #[tokio::test]
    async fn expired_token() {
        let jwt = create_jwt("eventarc-trigger", &[], 12312, TEST_SECRET);
        test_invalid_authorization_header(format!("Bearer {jwt}").as_str()).await;
    }

    #[tokio::test]
    async fn invalid_signature() {
        let jwt = create_jwt("eventarc-trigger", &[], NEVER_EXPIRES, b"Wrong key");
        test_invalid_authorization_header(format!("Bearer {jwt}").as_str()).await;
    }

    #[tokio::test]
    async fn correct_request_extension() {
        let jwt = create_valid_jwt(&["first_role", "second_role"]);
        let algorithms = vec![Algorithm::HS256];
        let key = DecodingKey::from_secret(TEST_SECRET);

        let router = Router::new()
            .route(
                "/",
                get(|Extension(caller): Extension<Caller>| async move {
                    if caller.id != "eventarc-trigger" {
                        return StatusCode::INTERNAL_SERVER_ERROR;
                    }

                    if caller.roles != vec!["first_role".to_string(), "second_role".to_string()] {
                        return StatusCode::INTERNAL_SERVER_ERROR;
                    }

                    StatusCode::OK
                }),
            )
            .route_layer(ValidateRequestHeaderLayer::custom(
                JwtAuthorizationValidator::new(key, algorithms),
            ));

        let request = Request::builder()
            .uri("/")
            .header(AUTHORIZATION, format!("Bearer {jwt}"))
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK)
    }

    async fn test_invalid_authorization_header(authorization: impl Into<Option<&str>>) {
        let algorithms = vec![Algorithm::HS256];
        let key = DecodingKey::from_secret(TEST_SECRET);

        let router = Router::new()
            .route("/", get(|| async { StatusCode::OK }))
            .route_layer(ValidateRequestHeaderLayer::custom(
                JwtAuthorizationValidator::new(key, algorithms),
            ));

        let mut request = Request::builder().uri("/").body(Body::empty()).unwrap();
        if let Some(authorization) = authorization.into() {
            request
                .headers_mut()
                .insert(AUTHORIZATION, HeaderValue::try_from(authorization).unwrap());
        }

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
