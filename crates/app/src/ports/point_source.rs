//! Point source port — read-only access to the backing point list.

use std::future::Future;
use std::sync::Arc;

use geopoints_domain::error::GeoPointsError;
use geopoints_domain::point::Point;

/// Supplies the ordered, immutable list of [`Point`]s.
///
/// Implementations must return the same sequence on every call: callers
/// rely on list order and never on name uniqueness.
pub trait PointSource {
    /// Return every point, in source order.
    fn get_all(&self) -> impl Future<Output = Result<Arc<[Point]>, GeoPointsError>> + Send;
}
