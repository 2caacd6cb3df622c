//! The fixed seed table served by default.

use crate::point::{Coordinates, Point};

/// `(name, value, [longitude, latitude])` rows, in serving order.
pub const SEED: [(&str, i64, [f64; 2]); 5] = [
    ("Point_A", 50, [-73.935, 40.730]),
    ("Point_B", 75, [2.352, 48.856]),
    ("Point_C", 20, [-0.127, 51.507]),
    ("Point_D", 90, [139.691, 35.689]),
    ("Point_E", 30, [151.209, -33.868]),
];

/// Materialize the seed table as [`Point`]s, preserving row order.
#[must_use]
pub fn seed_points() -> Vec<Point> {
    SEED.iter()
        .map(|&(name, value, coords)| Point {
            name: name.to_string(),
            value,
            coordinates: Coordinates::from(coords),
        })
        .collect()
}
