//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod points;

use axum::Router;
use axum::routing::{get, post};

use geopoints_app::ports::PointSource;

use crate::state::AppState;

/// Build the points API routes.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: PointSource + Send + Sync + 'static,
{
    Router::new()
        .route("/points", get(points::list::<S>))
        .route("/points/filter", post(points::filter::<S>))
}
