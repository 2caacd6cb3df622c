//! # geopoints-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **GeoJSON points API**:
//!   - `GET  /points`        — every point as a `FeatureCollection`
//!   - `POST /points/filter` — points matching a JSON criteria object
//!   - `GET  /health`        — liveness
//!   - `GET  /openapi.json`  — `OpenAPI` 3.1 document
//! - Decode and validate request bodies before they reach the application
//!   layer (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `geopoints-app` (for port traits and services) and
//! `geopoints-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod openapi;
pub mod router;
pub mod state;
