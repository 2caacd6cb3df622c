//! # geopoints-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PointSource` — ordered, read-only access to the point list
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PointService` — list all points, filter points, health check
//! - Orchestrate domain objects without knowing *how* points are stored
//!
//! ## Dependency rule
//! Depends on `geopoints-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
