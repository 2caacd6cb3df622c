//! GeoJSON Feature and `FeatureCollection` views over [`Point`]s.
//!
//! These types are derived per response and never stored. Field names and
//! nesting follow RFC 7946:
//!
//! ```json
//! {"type": "Feature",
//!  "geometry": {"type": "Point", "coordinates": [lon, lat]},
//!  "properties": {"name": "...", "value": 0}}
//! ```

use serde::{Deserialize, Serialize};

use crate::point::{Coordinates, Point};

/// A GeoJSON `Point` geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "type", rename = "Point")]
pub struct Geometry {
    /// `[longitude, latitude]`.
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<f64>, min_items = 2, max_items = 2))]
    pub coordinates: Coordinates,
}

/// Properties carried by every feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Properties {
    pub name: String,
    pub value: i64,
}

/// A GeoJSON `Feature` wrapping one point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: Properties,
}

impl From<&Point> for Feature {
    fn from(point: &Point) -> Self {
        Self {
            geometry: Geometry {
                coordinates: point.coordinates,
            },
            properties: Properties {
                name: point.name.clone(),
                value: point.value,
            },
        }
    }
}

/// A GeoJSON `FeatureCollection`, in source order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl<'a> FromIterator<&'a Point> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = &'a Point>>(iter: I) -> Self {
        Self {
            features: iter.into_iter().map(to_feature).collect(),
        }
    }
}

/// Convert a point into its GeoJSON feature.
#[must_use]
pub fn to_feature(point: &Point) -> Feature {
    Feature::from(point)
}
