//! Shared application state for axum handlers.

use std::sync::Arc;

use geopoints_app::ports::PointSource;
use geopoints_app::services::point_service::PointService;

/// Application state shared across all axum handlers.
///
/// Generic over the point source to avoid dynamic dispatch.
/// `Clone` is implemented manually so the source itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// Point query service.
    pub point_service: Arc<PointService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            point_service: Arc::clone(&self.point_service),
        }
    }
}

impl<S> AppState<S>
where
    S: PointSource + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(point_service: PointService<S>) -> Self {
        Self {
            point_service: Arc::new(point_service),
        }
    }
}
