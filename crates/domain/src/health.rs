//! Liveness status reported by the health check.

use serde::Serialize;

/// Process liveness. The only state reachable while the process runs is
/// [`HealthStatus::Healthy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}
