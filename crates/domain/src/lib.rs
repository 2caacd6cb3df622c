//! # geopoints-domain
//!
//! Pure domain model for the geopoints service.
//!
//! ## Responsibilities
//! - Define **Points** (named, valued, geolocated records) and their invariants
//! - Define the GeoJSON **Feature** / **FeatureCollection** views of points
//! - Define **Filter criteria** and the predicate logic applied to points
//! - Provide the fixed **seed table**
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod filter;
pub mod geojson;
pub mod health;
pub mod point;
pub mod seed;
