//! # geopoints-adapter-memory
//!
//! Driven adapter implementing [`PointSource`] over a list held in memory.
//!
//! The list is built once and shared behind an [`Arc`]; it is never mutated
//! afterwards, so any number of concurrent readers can use it without locking.

use std::future::Future;
use std::sync::Arc;

use geopoints_app::ports::PointSource;
use geopoints_domain::error::GeoPointsError;
use geopoints_domain::point::Point;
use geopoints_domain::seed::seed_points;

/// Immutable, ordered point list.
#[derive(Debug, Clone)]
pub struct StaticPointSource {
    points: Arc<[Point]>,
}

impl StaticPointSource {
    /// Build a source from the fixed seed table.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_points(seed_points())
    }

    /// Build a source from an arbitrary list.
    ///
    /// # Errors
    ///
    /// Returns [`GeoPointsError::Validation`] if any point breaks a domain
    /// invariant.
    pub fn new(points: Vec<Point>) -> Result<Self, GeoPointsError> {
        for point in &points {
            point.validate()?;
        }
        Ok(Self::from_points(points))
    }

    fn from_points(points: Vec<Point>) -> Self {
        tracing::debug!(count = points.len(), "point source initialised");
        Self {
            points: points.into(),
        }
    }

    /// Number of points held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl PointSource for StaticPointSource {
    fn get_all(&self) -> impl Future<Output = Result<Arc<[Point]>, GeoPointsError>> + Send {
        let points = Arc::clone(&self.points);
        async move { Ok(points) }
    }
}
