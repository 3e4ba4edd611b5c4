//! # Photon Server Library
//!
//! Dependency injection wiring, the application builder and startup
//! utilities for the Photon server binary.

pub mod app;
pub mod di;
pub mod startup;
