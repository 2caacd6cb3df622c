//! Point — a named, valued, geolocated record.

use serde::{Deserialize, Serialize};

use crate::error::{GeoPointsError, ValidationError};

/// A `[longitude, latitude]` pair, serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Check that both components are finite and within WGS84 bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCoordinates`] otherwise.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let lon_ok = self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude);
        let lat_ok = self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude);
        if lon_ok && lat_ok {
            Ok(())
        } else {
            Err(ValidationError::InvalidCoordinates {
                longitude: self.longitude,
                latitude: self.latitude,
            })
        }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Self::new(longitude, latitude)
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(coords: Coordinates) -> Self {
        [coords.longitude, coords.latitude]
    }
}

/// A named record with an integer value and a geographic position.
///
/// Names are not required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub name: String,
    pub value: i64,
    pub coordinates: Coordinates,
}

impl Point {
    /// Create a builder for constructing a [`Point`].
    #[must_use]
    pub fn builder() -> PointBuilder {
        PointBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GeoPointsError::Validation`] when `name` is empty or the
    /// coordinates are out of range.
    pub fn validate(&self) -> Result<(), GeoPointsError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        self.coordinates.validate()?;
        Ok(())
    }
}

/// Step-by-step builder for [`Point`].
#[derive(Debug, Default)]
pub struct PointBuilder {
    name: Option<String>,
    value: i64,
    coordinates: Option<Coordinates>,
}

impl PointBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn value(mut self, value: i64) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn coordinates(mut self, longitude: f64, latitude: f64) -> Self {
        self.coordinates = Some(Coordinates::new(longitude, latitude));
        self
    }

    /// Consume the builder, validate, and return a [`Point`].
    ///
    /// Missing coordinates default to `[0.0, 0.0]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeoPointsError::Validation`] if `name` is missing or empty,
    /// or the coordinates are invalid.
    pub fn build(self) -> Result<Point, GeoPointsError> {
        let point = Point {
            name: self.name.unwrap_or_default(),
            value: self.value,
            coordinates: self.coordinates.unwrap_or(Coordinates::new(0.0, 0.0)),
        };
        point.validate()?;
        Ok(point)
    }
}
