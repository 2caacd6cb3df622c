//! Axum router assembly.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::get;
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::ToSchema;

use geopoints_app::ports::PointSource;
use geopoints_domain::health::HealthStatus;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the points API, the health check, and the `OpenAPI` document.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: PointSource + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check::<S>))
        .route("/openapi.json", get(crate::openapi::openapi_spec))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Body of the health check response.
#[derive(Serialize, ToSchema)]
pub struct HealthBody {
    status: HealthStatus,
}

/// `GET /health`
#[utoipa::path(
    get,
    path = "/health",
    operation_id = "health",
    responses(
        (status = 200, description = "Process is alive", body = HealthBody)
    ),
    tag = "Health"
)]
pub async fn health_check<S>(State(state): State<AppState<S>>) -> Json<HealthBody>
where
    S: PointSource + Send + Sync + 'static,
{
    Json(HealthBody {
        status: state.point_service.health(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use geopoints_app::services::point_service::PointService;
    use geopoints_domain::error::{GeoPointsError, SourceError};
    use geopoints_domain::point::Point;
    use geopoints_domain::seed::seed_points;
    use http_body_util::BodyExt;
    use std::future::Future;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct StubSource(Arc<[Point]>);
    struct BrokenSource;

    impl PointSource for StubSource {
        fn get_all(&self) -> impl Future<Output = Result<Arc<[Point]>, GeoPointsError>> + Send {
            let points = Arc::clone(&self.0);
            async { Ok(points) }
        }
    }

    impl PointSource for BrokenSource {
        fn get_all(&self) -> impl Future<Output = Result<Arc<[Point]>, GeoPointsError>> + Send {
            async { Err(SourceError::new("backing list unavailable").into()) }
        }
    }

    fn test_app() -> Router {
        build(AppState::new(PointService::new(StubSource(
            seed_points().into(),
        ))))
    }

    fn broken_app() -> Router {
        build(AppState::new(PointService::new(BrokenSource)))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn filter_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/points/filter")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_return_healthy_when_health_check_called() {
        let response = broken_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"status": "healthy"})
        );
    }

    #[tokio::test]
    async fn should_list_points_as_feature_collection() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/points")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["type"], "FeatureCollection");
        assert_eq!(body["features"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn should_filter_points() {
        let response = test_app()
            .oneshot(filter_request(r#"{"min_value": 80}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["features"][0]["properties"]["name"], "Point_D");
        assert_eq!(body["features"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_reject_non_integer_min_value() {
        let response = test_app()
            .oneshot(filter_request(r#"{"min_value": "abc"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "min_value must be an integer"})
        );
    }

    #[tokio::test]
    async fn should_reject_body_without_json_content_type() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/points/filter")
                    .header(header::CONTENT_TYPE, "text/plain")
                    .body(Body::from("min_value=3"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_reject_json_array_body() {
        let response = test_app()
            .oneshot(filter_request("[40, \"b\"]"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_internal_error_when_source_fails() {
        let response = broken_app()
            .oneshot(
                Request::builder()
                    .uri("/points")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "internal server error"})
        );
    }

    #[tokio::test]
    async fn should_serve_openapi_document() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["openapi"].as_str().unwrap().starts_with("3.1"));
        assert_eq!(body["info"]["title"], "GeoJSON Points API");
        assert_eq!(body["info"]["version"], "1.0.0");
        assert!(body["paths"]["/points"]["get"].is_object());
        assert!(body["paths"]["/points/filter"]["post"].is_object());
        assert!(body["paths"]["/health"]["get"].is_object());
        assert!(body["components"]["schemas"]["FeatureCollection"].is_object());
    }
}
