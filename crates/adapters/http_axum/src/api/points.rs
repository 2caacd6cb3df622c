//! JSON handlers for points.

use std::num::IntErrorKind;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Number, Value};
use utoipa::ToSchema;

use geopoints_app::ports::PointSource;
use geopoints_domain::error::ValidationError;
use geopoints_domain::filter::FilterCriteria;
use geopoints_domain::geojson::FeatureCollection;

use crate::error::{ApiError, ErrorBody};
use crate::state::AppState;

/// Decoded body of `POST /points/filter`.
///
/// Built from the raw JSON object so that loosely-typed inputs (`"50"`,
/// `50.0`, `null`) are coerced the same way for every client. Unknown keys
/// are ignored.
#[derive(Debug, Default, PartialEq, Eq, ToSchema)]
pub struct FilterPointsRequest {
    /// Inclusive lower bound on the point value. Numeric strings, whole
    /// floats and booleans are accepted.
    pub min_value: Option<i64>,
    /// Case-insensitive substring of the point name. Empty means no filter.
    pub name_contains: Option<String>,
}

impl TryFrom<Map<String, Value>> for FilterPointsRequest {
    type Error = ValidationError;

    fn try_from(mut body: Map<String, Value>) -> Result<Self, Self::Error> {
        let min_value = match body.remove("min_value") {
            None | Some(Value::Null) => None,
            Some(value) => Some(coerce_integer(&value).ok_or(ValidationError::InvalidMinValue)?),
        };
        let name_contains = match body.remove("name_contains") {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text),
            Some(Value::Number(number)) => Some(number.to_string()),
            Some(_) => return Err(ValidationError::InvalidNameContains),
        };
        Ok(Self {
            min_value,
            name_contains,
        })
    }
}

impl From<FilterPointsRequest> for FilterCriteria {
    fn from(req: FilterPointsRequest) -> Self {
        FilterCriteria::new(req.min_value, req.name_contains)
    }
}

/// Interpret a JSON value as an integer.
///
/// Accepts integers, floats without a fractional part, booleans (`1`/`0`),
/// and strings holding a base-10 integer (surrounding whitespace allowed).
/// Out-of-range values saturate to the `i64` bounds.
fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Bool(flag) => Some(i64::from(*flag)),
        Value::Number(number) => number_to_integer(number),
        Value::String(text) => match text.trim().parse::<i64>() {
            Ok(n) => Some(n),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => Some(i64::MAX),
                IntErrorKind::NegOverflow => Some(i64::MIN),
                _ => None,
            },
        },
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn number_to_integer(number: &Number) -> Option<i64> {
    if let Some(n) = number.as_i64() {
        return Some(n);
    }
    if number.is_u64() {
        return Some(i64::MAX);
    }
    let float = number.as_f64()?;
    // `as` saturates at the i64 bounds.
    (float.is_finite() && float.fract() == 0.0).then_some(float as i64)
}

/// Possible responses from the points endpoints.
pub enum ListResponse {
    Ok(Json<FeatureCollection>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /points`
#[utoipa::path(
    get,
    path = "/points",
    operation_id = "list_points",
    responses(
        (status = 200, description = "Every point, in source order", body = FeatureCollection),
        (status = 500, description = "Internal fault", body = ErrorBody)
    ),
    tag = "Points"
)]
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError>
where
    S: PointSource + Send + Sync + 'static,
{
    let collection = state.point_service.list_all().await?;
    Ok(ListResponse::Ok(Json(collection)))
}

/// `POST /points/filter`
#[utoipa::path(
    post,
    path = "/points/filter",
    operation_id = "filter_points",
    request_body = FilterPointsRequest,
    responses(
        (status = 200, description = "Points matching every criterion, possibly none", body = FeatureCollection),
        (status = 400, description = "Body is not a JSON object or a criterion has the wrong type", body = ErrorBody),
        (status = 500, description = "Internal fault", body = ErrorBody)
    ),
    tag = "Points"
)]
pub async fn filter<S>(
    State(state): State<AppState<S>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<ListResponse, ApiError>
where
    S: PointSource + Send + Sync + 'static,
{
    let Json(body) = payload?;
    let Value::Object(body) = body else {
        return Err(ApiError::MalformedBody);
    };
    let criteria = FilterCriteria::from(FilterPointsRequest::try_from(body)?);
    let collection = state.point_service.filter(&criteria).await?;
    Ok(ListResponse::Ok(Json(collection)))
}
