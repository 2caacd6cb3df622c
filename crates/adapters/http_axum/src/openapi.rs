//! `OpenAPI` document describing the HTTP surface.

use axum::Json;
use utoipa::OpenApi;

use geopoints_domain::geojson::{Feature, FeatureCollection, Geometry, Properties};
use geopoints_domain::health::HealthStatus;

use crate::api::points::{self, FilterPointsRequest};
use crate::error::ErrorBody;
use crate::router::{self, HealthBody};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GeoJSON Points API",
        description = "API for managing and filtering geographic points in GeoJSON format.",
        version = "1.0.0"
    ),
    paths(points::list, points::filter, router::health_check),
    components(schemas(
        FeatureCollection,
        Feature,
        Geometry,
        Properties,
        FilterPointsRequest,
        ErrorBody,
        HealthBody,
        HealthStatus,
    )),
    tags(
        (name = "Points", description = "Point listing and filtering"),
        (name = "Health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

/// `GET /openapi.json`
pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
