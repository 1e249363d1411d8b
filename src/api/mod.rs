//! API handlers for UniAdvisor REST endpoints

pub mod health;
pub mod lessons;
pub mod location;
pub mod openapi;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    routing::{get, post},
    Router,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, identity::Identity, AppState};

/// Extractor for the caller identity verified by the identity provider
pub struct AuthenticatedUser(pub Identity);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    AppError::Authentication("Missing or invalid authorization header".to_string())
                })?;

        let identity = state.identity.verify(bearer.token())?;
        Ok(AuthenticatedUser(identity))
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Lessons
        .route("/lessons", post(lessons::create_lesson))
        .route("/lessons/course/:course_id", get(lessons::list_course_lessons))
        .route("/lessons/:id/checkin", post(lessons::check_in))
        // Location
        .route("/location/faculties/map", get(location::faculties_map))
        .route("/location/faculties/:id/location", get(location::faculty_location))
        .route("/location/courses/map", get(location::courses_map))
        .route("/location/courses/nearby", get(location::nearby_courses))
        .route("/location/courses/:id/location", get(location::course_location))
        .route("/location/navigate/:course_id", get(location::navigate))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use mockall::predicate::eq;
    use tower::ServiceExt;

    use crate::{
        config::AppConfig,
        identity::MockIdentityVerifier,
        repository::memory::InMemoryStore,
        services::Services,
    };

    fn router(identity: MockIdentityVerifier) -> Router {
        let config = AppConfig::default();
        let store = Arc::new(InMemoryStore::new());
        let services = Services::new(store.clone(), store, &config.checkin);
        create_router(AppState {
            config: Arc::new(config),
            services: Arc::new(services),
            identity: Arc::new(identity),
        })
    }

    fn map_request(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/api/v1/location/faculties/map");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_bearer_token_is_passed_to_provider() {
        let mut identity = MockIdentityVerifier::new();
        identity
            .expect_verify()
            .with(eq("abc.def.ghi"))
            .times(1)
            .returning(|_| {
                Ok(Identity {
                    subject: "firebase-uid".to_string(),
                })
            });

        let response = router(identity)
            .oneshot(map_request(Some("Bearer abc.def.ghi")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rejected_token_is_unauthorized() {
        let mut identity = MockIdentityVerifier::new();
        identity
            .expect_verify()
            .returning(|_| Err(AppError::Authentication("expired".to_string())));

        let response = router(identity)
            .oneshot(map_request(Some("Bearer stale")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_missing_or_malformed_header() {
        let mut identity = MockIdentityVerifier::new();
        identity.expect_verify().never();
        let app = router(identity);

        let response = app.clone().oneshot(map_request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app.oneshot(map_request(Some("Basic dXNlcjpwYXNz"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
