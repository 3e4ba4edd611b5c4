//! # Photon REST
//!
//! REST API layer using Axum for Photon.
//! Serves the photo collection (direct and cached) and health checks.

pub mod controllers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
