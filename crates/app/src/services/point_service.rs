//! Point service — use-cases for reading and filtering points.

use geopoints_domain::error::GeoPointsError;
use geopoints_domain::filter::FilterCriteria;
use geopoints_domain::geojson::FeatureCollection;
use geopoints_domain::health::HealthStatus;

use crate::ports::PointSource;

/// Application service answering point queries as GeoJSON.
pub struct PointService<S> {
    source: S,
}

impl<S: PointSource> PointService<S> {
    /// Create a new service backed by the given point source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Return every point as a feature, in source order.
    ///
    /// # Errors
    ///
    /// Returns a source error propagated from the point source.
    #[tracing::instrument(skip(self))]
    pub async fn list_all(&self) -> Result<FeatureCollection, GeoPointsError> {
        let points = self.source.get_all().await?;
        let collection: FeatureCollection = points.iter().collect();
        tracing::debug!(count = collection.len(), "listed points");
        Ok(collection)
    }

    /// Return every point matching all of `criteria`, in source order.
    ///
    /// An empty result is not an error.
    ///
    /// # Errors
    ///
    /// Returns a source error propagated from the point source.
    #[tracing::instrument(skip(self))]
    pub async fn filter(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<FeatureCollection, GeoPointsError> {
        let points = self.source.get_all().await?;
        let matcher = criteria.matcher();
        let collection: FeatureCollection = points.iter().filter(|p| matcher.matches(p)).collect();
        tracing::debug!(
            matched = collection.len(),
            total = points.len(),
            "filtered points"
        );
        Ok(collection)
    }

    /// Report liveness. Never fails while the process runs.
    #[must_use]
    pub fn health(&self) -> HealthStatus {
        HealthStatus::Healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geopoints_domain::error::SourceError;
    use geopoints_domain::point::Point;
    use geopoints_domain::seed::seed_points;
    use std::future::Future;
    use std::sync::Arc;

    struct FixedSource(Arc<[Point]>);

    impl PointSource for FixedSource {
        fn get_all(&self) -> impl Future<Output = Result<Arc<[Point]>, GeoPointsError>> + Send {
            let points = Arc::clone(&self.0);
            async { Ok(points) }
        }
    }

    struct FailingSource;

    impl PointSource for FailingSource {
        fn get_all(&self) -> impl Future<Output = Result<Arc<[Point]>, GeoPointsError>> + Send {
            async { Err(SourceError::new("unavailable").into()) }
        }
    }

    fn make_service() -> PointService<FixedSource> {
        PointService::new(FixedSource(seed_points().into()))
    }

    fn names(collection: &FeatureCollection) -> Vec<&str> {
        collection
            .features
            .iter()
            .map(|f| f.properties.name.as_str())
            .collect()
    }

    #[tokio::test]
    async fn should_list_all_points_in_seed_order() {
        let svc = make_service();
        let all = svc.list_all().await.unwrap();
        assert_eq!(
            names(&all),
            ["Point_A", "Point_B", "Point_C", "Point_D", "Point_E"]
        );
    }

    #[tokio::test]
    async fn should_return_everything_for_empty_criteria() {
        let svc = make_service();
        let all = svc.list_all().await.unwrap();
        let filtered = svc.filter(&FilterCriteria::default()).await.unwrap();
        assert_eq!(all, filtered);
    }

    #[tokio::test]
    async fn should_filter_by_min_value_inclusively() {
        let svc = make_service();
        let result = svc
            .filter(&FilterCriteria::new(Some(50), None))
            .await
            .unwrap();
        assert_eq!(names(&result), ["Point_A", "Point_B", "Point_D"]);
    }

    #[tokio::test]
    async fn should_filter_by_name_case_insensitively() {
        let svc = make_service();
        let result = svc
            .filter(&FilterCriteria::new(None, Some("POINT_c".to_string())))
            .await
            .unwrap();
        assert_eq!(names(&result), ["Point_C"]);
    }

    #[tokio::test]
    async fn should_intersect_combined_criteria() {
        let svc = make_service();
        let result = svc
            .filter(&FilterCriteria::new(Some(40), Some("b".to_string())))
            .await
            .unwrap();
        assert_eq!(names(&result), ["Point_B"]);
        assert_eq!(result.features[0].properties.value, 75);
    }

    #[tokio::test]
    async fn should_return_empty_collection_when_nothing_matches() {
        let svc = make_service();
        let result = svc
            .filter(&FilterCriteria::new(Some(1000), None))
            .await
            .unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn should_keep_duplicate_names() {
        let points: Vec<Point> = vec![
            Point::builder().name("dup").value(1).build().unwrap(),
            Point::builder().name("dup").value(2).build().unwrap(),
        ];
        let svc = PointService::new(FixedSource(points.into()));
        let result = svc
            .filter(&FilterCriteria::new(None, Some("DUP".to_string())))
            .await
            .unwrap();
        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn should_propagate_source_error() {
        let svc = PointService::new(FailingSource);
        assert!(matches!(
            svc.list_all().await,
            Err(GeoPointsError::Source(_))
        ));
        assert!(matches!(
            svc.filter(&FilterCriteria::default()).await,
            Err(GeoPointsError::Source(_))
        ));
    }

    #[test]
    fn should_always_report_healthy() {
        let svc = PointService::new(FailingSource);
        assert_eq!(svc.health(), HealthStatus::Healthy);
    }
}
